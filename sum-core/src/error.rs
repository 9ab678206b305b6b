use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumError {
    #[error("overflow adding {a} and {b}")]
    Overflow { a: i64, b: i64 },
}
