//! Cancellation of blocked channel calls.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::channel::ChannelInner;

/// Releases calls blocked on a [`RingChannel`](crate::RingChannel).
///
/// Obtained from [`RingChannel::cancel_token`](crate::RingChannel::cancel_token)
/// and passed to the `*_cancellable` operations. Cancelling wakes every
/// waiter on the channel; the calls that were handed this token then fail
/// according to the channel's [`CancelPolicy`](crate::CancelPolicy). Calls
/// that never need to block are not affected.
///
/// Clones share the same flag.
///
/// # Example
///
/// ```
/// use giztoy_ringchannel::{ChannelError, RingChannel};
/// use std::thread;
/// use std::time::Duration;
///
/// let ch = RingChannel::new(8).unwrap();
/// let token = ch.cancel_token();
///
/// let reader = {
///     let ch = ch.clone();
///     let token = token.clone();
///     thread::spawn(move || ch.read_cancellable(&mut [0u8; 8], &token))
/// };
///
/// thread::sleep(Duration::from_millis(10));
/// token.cancel();
///
/// // Default policy: the cancelled call tears the channel down.
/// assert_eq!(reader.join().unwrap(), Err(ChannelError::AsynchronousClose));
/// assert!(!ch.is_open());
/// ```
#[derive(Clone)]
pub struct CancelToken {
    channel: Arc<ChannelInner>,
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub(crate) fn new(channel: Arc<ChannelInner>) -> Self {
        CancelToken {
            channel,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancels the token and wakes every waiter on its channel.
    pub fn cancel(&self) {
        // Set under the lock so a waiter cannot check the flag and then miss
        // the notification.
        let _state = self.channel.state.lock();
        self.cancelled.store(true, Ordering::Release);
        self.channel.changed.notify_all();
    }

    /// Returns true once [`cancel`](Self::cancel) has been called and until
    /// [`reset`](Self::reset).
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clears the flag so the token can be reused.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }

    pub(crate) fn belongs_to(&self, channel: &ChannelInner) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.channel), channel)
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
