//! Error types for channel operations.

use std::io;

/// Result type alias for ringchannel.
pub type Result<T> = std::result::Result<T, ChannelError>;

/// Channel operation error.
///
/// End-of-stream is not an error: [`RingChannel::read`](crate::RingChannel::read)
/// reports it as `Ok(0)` for a non-empty destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// Construction with a zero or unallocatable capacity.
    #[error("ringchannel: invalid capacity {0}")]
    InvalidCapacity(usize),

    /// The channel was already closed when the call started.
    #[error("ringchannel: closed")]
    Closed,

    /// The channel was closed while the call was blocked.
    #[error("ringchannel: closed while blocked")]
    AsynchronousClose,

    /// Write attempted after end-of-stream was declared.
    #[error("ringchannel: not writable after eof")]
    NotWritable,

    /// End-of-stream reached before the requested length was transferred.
    #[error("ringchannel: unexpected eof")]
    UnexpectedEof,

    /// A blocked call was cancelled through its token and the channel
    /// was left open.
    #[error("ringchannel: cancelled")]
    Cancelled,

    /// A cancel token created by a different channel was passed in.
    #[error("ringchannel: cancel token belongs to another channel")]
    ForeignToken,
}

impl From<ChannelError> for io::Error {
    fn from(err: ChannelError) -> Self {
        let kind = match err {
            ChannelError::InvalidCapacity(_) => io::ErrorKind::InvalidInput,
            ChannelError::Closed => io::ErrorKind::NotConnected,
            ChannelError::AsynchronousClose => io::ErrorKind::ConnectionAborted,
            ChannelError::NotWritable => io::ErrorKind::BrokenPipe,
            ChannelError::UnexpectedEof => io::ErrorKind::UnexpectedEof,
            ChannelError::Cancelled => io::ErrorKind::Interrupted,
            ChannelError::ForeignToken => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
