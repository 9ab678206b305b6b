use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SumError;

/// Return `a + b`.
///
/// Overflow follows the build profile: it panics with debug assertions on and
/// wraps otherwise. Use [`checked_sum`] when the operands are untrusted.
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Like [`sum`], but returns [`SumError::Overflow`] when the result does not fit in an `i64`.
pub fn checked_sum(a: i64, b: i64) -> Result<i64, SumError> {
    a.checked_add(b).ok_or_else(|| {
        debug!(a, b, "addition overflowed");
        SumError::Overflow { a, b }
    })
}

/// One evaluated addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Addition {
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

impl Addition {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b, result: sum(a, b) }
    }

    pub fn checked(a: i64, b: i64) -> Result<Self, SumError> {
        let result = checked_sum(a, b)?;
        Ok(Self { a, b, result })
    }
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.a, self.b, self.result)
    }
}
