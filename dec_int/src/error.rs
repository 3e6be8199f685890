use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The value does not fit the requested primitive integer type.
    #[error("{value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// Strict parsing rejected the input.
    #[error("malformed integer literal `{input}` at byte {position}")]
    Malformed { input: String, position: usize },

    #[error("{0} is not implemented for BigInt")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, BigIntError>;
