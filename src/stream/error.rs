use std::fmt;

/// Error returned by stream operations.
#[derive(Debug)]
pub enum StreamError {
    /// The stream was closed or detached and no longer owns a buffer.
    Closed,
    /// A seek computed a target offset before the start of the stream.
    /// Negative targets are always rejected, never clamped to 0.
    NegativeSeek(i64),
    /// Error returned by call to `serialize()` from `bincode::serialize()`.
    #[cfg(feature = "serialize")]
    Serialize(bincode::Error),
    /// Error returned by call to `deserialize()` from
    /// `bincode::deserialize()`.
    #[cfg(feature = "serialize")]
    Deserialize(bincode::Error),
}

/// Result type of [`stream`](index.html) operations.
/// See [`StreamError`](enum.StreamError.html).
pub type StreamResult<T> = Result<T, StreamError>;

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "stream is closed"),
            Self::NegativeSeek(pos) => {
                write!(f, "seek to negative position: {}", pos)
            }
            #[cfg(feature = "serialize")]
            Self::Serialize(e) => {
                write!(f, "stream snapshot serialization error: {}", e)
            }
            #[cfg(feature = "serialize")]
            Self::Deserialize(e) => {
                write!(f, "stream snapshot deserialization error: {}", e)
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serialize")]
            Self::Serialize(e) | Self::Deserialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StreamError> for std::io::Error {
    fn from(e: StreamError) -> Self {
        let kind = match e {
            StreamError::Closed => std::io::ErrorKind::Other,
            StreamError::NegativeSeek(_) => std::io::ErrorKind::InvalidInput,
            #[cfg(feature = "serialize")]
            _ => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, e)
    }
}
