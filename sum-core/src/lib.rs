//! Two-operand integer addition.
//!
//! [`sum`] is plain `i64` addition and keeps Rust's default overflow
//! behaviour. [`checked_sum`] reports overflow as a [`SumError`] instead.

pub mod error;
pub mod math;

pub use crate::error::SumError;
pub use crate::math::{checked_sum, sum, Addition};
