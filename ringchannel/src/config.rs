//! Channel configuration.

/// Default capacity used by [`ChannelConfig::default`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// What a blocked call does when its [`CancelToken`](crate::CancelToken)
/// is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Close the whole channel, then fail the cancelled call with
    /// [`ChannelError::AsynchronousClose`](crate::ChannelError::AsynchronousClose).
    /// Every other waiter is released as well.
    #[default]
    CloseChannel,
    /// Fail only the cancelled call with
    /// [`ChannelError::Cancelled`](crate::ChannelError::Cancelled).
    CallOnly,
}

/// Configuration for a [`RingChannel`](crate::RingChannel).
///
/// # Example
///
/// ```
/// use giztoy_ringchannel::{CancelPolicy, ChannelConfig, RingChannel};
///
/// let config = ChannelConfig::new(1024).with_cancel_policy(CancelPolicy::CallOnly);
/// let ch = RingChannel::with_config(config).unwrap();
/// assert_eq!(ch.capacity(), 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Size of the backing array in bytes.
    pub capacity: usize,
    /// Cancellation behaviour for blocked calls.
    pub cancel_policy: CancelPolicy,
}

impl ChannelConfig {
    /// Creates a configuration with the given capacity and the default
    /// cancel policy.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cancel_policy: CancelPolicy::default(),
        }
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
