//! End-to-end test support: a bootable server plus the form fixtures
//! the tests post at it.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
