//! Domain outcomes that are not successes

mod domain_error;

pub use domain_error::DomainError;
