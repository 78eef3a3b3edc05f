use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("timestamp {seconds} cannot be represented as a calendar date")]
    UnrepresentableTime { seconds: i64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
