use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("Message too large: {len} bytes do not fit a 64-bit bit length")]
    MessageTooLarge { len: usize },

    #[error("Invalid padding length: {len} bytes is not a multiple of the block size")]
    InvalidPaddingLength { len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("Directory walk error: {0}")]
    Walk(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<walkdir::Error> for HashError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        err.into_io_error().map_or(HashError::Walk(message), HashError::Io)
    }
}

impl From<log::SetLoggerError> for HashError {
    fn from(err: log::SetLoggerError) -> Self {
        HashError::Logger(err.to_string())
    }
}

impl From<hex::FromHexError> for HashError {
    fn from(err: hex::FromHexError) -> Self {
        HashError::InvalidDigest(err.to_string())
    }
}
