//! Row-to-entity conversions
//!
//! Each model gets a `From` impl producing the matching blog-core entity,
//! dropping columns the domain layer has no business seeing.

mod post;
mod user;
