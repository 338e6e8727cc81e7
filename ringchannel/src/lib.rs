//! Fixed-capacity blocking byte channel.
//!
//! This crate provides [`RingChannel`], a thread-safe circular byte buffer
//! used as a pipe between producer and consumer threads. Writers block while
//! the buffer is full, readers block while it is empty.
//!
//! ```
//! use giztoy_ringchannel::RingChannel;
//!
//! let ch = RingChannel::new(50).unwrap();
//! ch.write(b"abdefghijklmnopqrstuvwxyz").unwrap();
//!
//! let mut data = vec![0u8; 1000];
//! let n = ch.read(&mut data).unwrap();
//! assert_eq!(&data[..n], b"abdefghijklmnopqrstuvwxyz");
//! assert_eq!(ch.readable(), 0);
//! ```
//!
//! # End of Stream and Closing
//!
//! A channel has two one-way transitions:
//!
//! - `set_eof()`: No more writes. Readers drain what is buffered, then
//!   `read()` returns `Ok(0)`
//! - `close()`: Everything stops. Blocked calls fail with
//!   [`ChannelError::AsynchronousClose`], later ones with [`ChannelError::Closed`]
//!
//! # Cancellation
//!
//! A [`CancelToken`] releases calls blocked in the `*_cancellable`
//! operations. By default a cancelled call closes the whole channel; use
//! [`CancelPolicy::CallOnly`] through [`ChannelConfig`] to fail only that
//! call.
//!
//! # Thread Safety
//!
//! `RingChannel` is `Send + Sync` and can be shared between threads using
//! `Clone` (which shares the underlying buffer via `Arc`). It also implements
//! [`std::io::Read`] and [`std::io::Write`], directly and through `&RingChannel`.
//!
//! # Convenience Functions
//!
//! ```
//! use giztoy_ringchannel::{channel, channel_4kb};
//!
//! let small = channel();
//! let large = channel_4kb();
//! assert_eq!(large.capacity(), 4096);
//! ```

mod bytes;
mod cancel;
mod channel;
mod config;
mod error;
mod io;

pub use bytes::*;
pub use cancel::CancelToken;
pub use channel::RingChannel;
pub use config::{CancelPolicy, ChannelConfig, DEFAULT_CAPACITY};
pub use error::{ChannelError, Result};
