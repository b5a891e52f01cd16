use thiserror::Error;

/// Errors reported by the codec.
#[derive(Debug, Error)]
pub enum Error {
    /// The input had zero symbols, so there is nothing to compress.
    ///
    /// This is a first-class signal rather than a failure: callers abort
    /// the operation with a message and no buffer is produced.
    #[error("nothing to compress: input is empty")]
    EmptyInput,

    /// A caller-supplied value violated an operation's contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A container buffer could not be decoded: truncated data, a header
    /// length exceeding the buffer, or packed bits inconsistent with the
    /// header's bit count.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The container header failed to serialize or parse.
    #[error("malformed header: {0}")]
    Header(#[from] serde_json::Error),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
