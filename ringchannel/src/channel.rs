//! Fixed-capacity blocking byte channel.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex, MutexGuard};
use tracing::{debug, trace, warn};

use crate::cancel::CancelToken;
use crate::config::{CancelPolicy, ChannelConfig, DEFAULT_CAPACITY};
use crate::error::{ChannelError, Result};

/// A thread-safe blocking byte channel backed by a circular buffer.
///
/// `RingChannel` owns a fixed-size byte array. Writers block while it is
/// full, readers block while it is empty. Any number of producer and
/// consumer threads may share one channel through `Clone`, which shares the
/// underlying buffer via `Arc`.
///
/// # Semantics
///
/// - **Read**: Blocks when empty, returns `Ok(0)` once end-of-stream is
///   declared and everything buffered has been drained
/// - **Write**: Blocks when full, may write fewer bytes than requested
/// - **EOF**: `set_eof()` forbids further writes but lets readers drain
/// - **Close**: `close()` releases every blocked call and fails all later ones
///
/// # Example
///
/// ```
/// use giztoy_ringchannel::RingChannel;
/// use std::thread;
///
/// let ch = RingChannel::new(4).unwrap();
/// let producer_ch = ch.clone();
///
/// // Producer thread (blocks whenever the 4-byte buffer is full)
/// let producer = thread::spawn(move || {
///     producer_ch.write_fully(b"hello, world").unwrap();
///     producer_ch.set_eof();
/// });
///
/// let mut out = Vec::new();
/// let mut chunk = [0u8; 3];
/// loop {
///     match ch.read(&mut chunk).unwrap() {
///         0 => break,
///         n => out.extend_from_slice(&chunk[..n]),
///     }
/// }
///
/// producer.join().unwrap();
/// assert_eq!(out, b"hello, world");
/// ```
pub struct RingChannel {
    inner: Arc<ChannelInner>,
}

pub(crate) struct ChannelInner {
    pub(crate) state: Mutex<ChannelState>,
    pub(crate) changed: Condvar,
    capacity: usize,
    cancel_policy: CancelPolicy,
}

pub(crate) struct ChannelState {
    buf: Box<[u8]>,
    read_pos: usize,
    write_pos: usize,
    readable: usize,
    open: bool,
    eof: bool,
}

/// Wakes every waiter when dropped, so each exit path out of a critical
/// section notifies, error paths included.
struct WakeAll<'a>(&'a Condvar);

impl Drop for WakeAll<'_> {
    fn drop(&mut self) {
        self.0.notify_all();
    }
}

impl Clone for RingChannel {
    fn clone(&self) -> Self {
        RingChannel {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for RingChannel {
    fn default() -> Self {
        Self::fixed(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for RingChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("RingChannel")
            .field("capacity", &self.inner.capacity)
            .field("readable", &state.readable)
            .field("open", &state.open)
            .field("eof", &state.eof)
            .finish()
    }
}

impl RingChannel {
    /// Creates a channel with a zero-filled buffer of `capacity` bytes.
    ///
    /// Fails with [`ChannelError::InvalidCapacity`] if `capacity` is zero or
    /// cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(ChannelConfig::new(capacity))
    }

    /// Creates a channel from a [`ChannelConfig`].
    pub fn with_config(config: ChannelConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(ChannelError::InvalidCapacity(0));
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(config.capacity)
            .map_err(|_| ChannelError::InvalidCapacity(config.capacity))?;
        buf.resize(config.capacity, 0);
        Ok(Self::from_parts(buf.into_boxed_slice(), config.cancel_policy))
    }

    /// Creates a channel that uses `buffer` as its backing store.
    ///
    /// The channel takes exclusive ownership. The existing contents are
    /// scratch space: the channel starts empty and `buffer.len()` becomes
    /// its capacity.
    pub fn from_buffer(buffer: impl Into<Box<[u8]>>) -> Result<Self> {
        let buf = buffer.into();
        if buf.is_empty() {
            return Err(ChannelError::InvalidCapacity(0));
        }
        Ok(Self::from_parts(buf, CancelPolicy::default()))
    }

    /// Infallible constructor for the built-in sizes. `capacity` must be
    /// non-zero.
    pub(crate) fn fixed(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "capacity must be greater than 0");
        Self::from_parts(vec![0u8; capacity].into_boxed_slice(), CancelPolicy::default())
    }

    fn from_parts(buf: Box<[u8]>, cancel_policy: CancelPolicy) -> Self {
        let capacity = buf.len();
        debug!("ringchannel: created (capacity={}, cancel_policy={:?})", capacity, cancel_policy);
        RingChannel {
            inner: Arc::new(ChannelInner {
                state: Mutex::new(ChannelState {
                    buf,
                    read_pos: 0,
                    write_pos: 0,
                    readable: 0,
                    open: true,
                    eof: false,
                }),
                changed: Condvar::new(),
                capacity,
                cancel_policy,
            }),
        }
    }

    /// Returns the number of bytes available to read.
    pub fn readable(&self) -> usize {
        self.inner.state.lock().readable
    }

    /// Returns the number of bytes that can be written without blocking.
    pub fn writable(&self) -> usize {
        self.inner.capacity - self.readable()
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.readable() == 0
    }

    /// Returns true if the buffer is full.
    pub fn is_full(&self) -> bool {
        self.readable() == self.inner.capacity
    }

    /// Returns true until [`close`](Self::close) is called.
    pub fn is_open(&self) -> bool {
        self.inner.state.lock().open
    }

    /// Returns true once [`set_eof`](Self::set_eof) has been called.
    pub fn is_eof(&self) -> bool {
        self.inner.state.lock().eof
    }

    /// Returns what a cancelled blocked call does to this channel.
    pub fn cancel_policy(&self) -> CancelPolicy {
        self.inner.cancel_policy
    }

    /// Creates a token that can release calls blocked on this channel.
    ///
    /// See [`CancelToken`] and [`CancelPolicy`].
    pub fn cancel_token(&self) -> CancelToken {
        CancelToken::new(Arc::clone(&self.inner))
    }

    /// Closes the channel.
    ///
    /// Every blocked `read`/`write` returns [`ChannelError::AsynchronousClose`],
    /// every later one returns [`ChannelError::Closed`]. Idempotent.
    pub fn close(&self) {
        let mut state = self.inner.state.lock();
        let _wake = WakeAll(&self.inner.changed);
        if state.open {
            state.open = false;
            debug!("ringchannel: closed (readable={})", state.readable);
        }
    }

    /// Declares end-of-stream.
    ///
    /// Blocked and later writes fail with [`ChannelError::NotWritable`].
    /// Readers drain what is buffered, then get `Ok(0)`. Idempotent.
    pub fn set_eof(&self) {
        let mut state = self.inner.state.lock();
        let _wake = WakeAll(&self.inner.changed);
        if !state.eof {
            state.eof = true;
            debug!("ringchannel: eof (readable={})", state.readable);
        }
    }

    /// Reads bytes into `dst`.
    ///
    /// Blocks until at least one byte is available, the channel is closed, or
    /// end-of-stream is reached. Returns the number of bytes copied; for a
    /// non-empty `dst`, `Ok(0)` means end-of-stream. An empty `dst` returns
    /// `Ok(0)` without blocking.
    pub fn read(&self, dst: &mut [u8]) -> Result<usize> {
        self.read_with(dst, None)
    }

    /// Like [`read`](Self::read), but a blocked call is released when
    /// `token` is cancelled.
    ///
    /// Fails with [`ChannelError::ForeignToken`] if `token` was created by
    /// another channel.
    pub fn read_cancellable(&self, dst: &mut [u8], token: &CancelToken) -> Result<usize> {
        self.check_token(token)?;
        self.read_with(dst, Some(token))
    }

    /// Writes bytes from `src`.
    ///
    /// Blocks until at least one byte of space is free, the channel is
    /// closed, or end-of-stream is declared. Returns the number of bytes
    /// copied, which may be less than `src.len()`.
    pub fn write(&self, src: &[u8]) -> Result<usize> {
        self.write_with(src, None)
    }

    /// Like [`write`](Self::write), but a blocked call is released when
    /// `token` is cancelled.
    ///
    /// Fails with [`ChannelError::ForeignToken`] if `token` was created by
    /// another channel.
    pub fn write_cancellable(&self, src: &[u8], token: &CancelToken) -> Result<usize> {
        self.check_token(token)?;
        self.write_with(src, Some(token))
    }

    /// Fills `dst` completely.
    ///
    /// Fails with [`ChannelError::UnexpectedEof`] if end-of-stream arrives
    /// first; the bytes read up to that point are consumed. The lock is held
    /// between reads, so other readers only get in while this call is
    /// blocked.
    pub fn read_fully(&self, dst: &mut [u8]) -> Result<()> {
        self.read_fully_with(dst, None)
    }

    /// Like [`read_fully`](Self::read_fully), but a blocked call is released
    /// when `token` is cancelled. Bytes read before the cancellation are
    /// consumed.
    pub fn read_fully_cancellable(&self, dst: &mut [u8], token: &CancelToken) -> Result<()> {
        self.check_token(token)?;
        self.read_fully_with(dst, Some(token))
    }

    /// Writes all of `src`, blocking as often as needed.
    pub fn write_fully(&self, src: &[u8]) -> Result<()> {
        self.write_fully_with(src, None)
    }

    /// Like [`write_fully`](Self::write_fully), but a blocked call is
    /// released when `token` is cancelled. Bytes written before the
    /// cancellation stay in the channel.
    pub fn write_fully_cancellable(&self, src: &[u8], token: &CancelToken) -> Result<()> {
        self.check_token(token)?;
        self.write_fully_with(src, Some(token))
    }

    /// Only this channel's tokens can wake its waiters.
    fn check_token(&self, token: &CancelToken) -> Result<()> {
        if token.belongs_to(&self.inner) {
            Ok(())
        } else {
            Err(ChannelError::ForeignToken)
        }
    }

    fn read_with(&self, dst: &mut [u8], cancel: Option<&CancelToken>) -> Result<usize> {
        let mut state = self.inner.state.lock();
        let _wake = WakeAll(&self.inner.changed);
        if !state.open {
            return Err(ChannelError::Closed);
        }
        if dst.is_empty() {
            return Ok(0);
        }
        self.inner.read_locked(&mut state, dst, cancel)
    }

    fn write_with(&self, src: &[u8], cancel: Option<&CancelToken>) -> Result<usize> {
        let mut state = self.inner.state.lock();
        let _wake = WakeAll(&self.inner.changed);
        if !state.open {
            return Err(ChannelError::Closed);
        }
        if state.eof {
            return Err(ChannelError::NotWritable);
        }
        if src.is_empty() {
            return Ok(0);
        }
        self.inner.write_locked(&mut state, src, cancel)
    }

    fn read_fully_with(&self, dst: &mut [u8], cancel: Option<&CancelToken>) -> Result<()> {
        let mut state = self.inner.state.lock();
        let _wake = WakeAll(&self.inner.changed);
        if !state.open {
            return Err(ChannelError::Closed);
        }
        let mut filled = 0;
        while filled < dst.len() {
            match self.inner.read_locked(&mut state, &mut dst[filled..], cancel)? {
                0 => return Err(ChannelError::UnexpectedEof),
                n => filled += n,
            }
        }
        Ok(())
    }

    fn write_fully_with(&self, src: &[u8], cancel: Option<&CancelToken>) -> Result<()> {
        let mut state = self.inner.state.lock();
        let _wake = WakeAll(&self.inner.changed);
        if !state.open {
            return Err(ChannelError::Closed);
        }
        if state.eof {
            return Err(ChannelError::NotWritable);
        }
        let mut written = 0;
        while written < src.len() {
            written += self.inner.write_locked(&mut state, &src[written..], cancel)?;
        }
        Ok(())
    }
}

impl ChannelInner {
    /// Single read step. `dst` must be non-empty.
    fn read_locked(
        &self,
        state: &mut MutexGuard<'_, ChannelState>,
        dst: &mut [u8],
        cancel: Option<&CancelToken>,
    ) -> Result<usize> {
        let mut n = state.readable.min(dst.len());
        while n == 0 && state.open && !state.eof {
            self.pause(state, cancel)?;
            n = state.readable.min(dst.len());
        }
        if !state.open {
            return Err(ChannelError::AsynchronousClose);
        }
        if n == 0 {
            // Only reachable at eof with nothing left.
            return Ok(0);
        }

        state.copy_out(&mut dst[..n]);
        // Loops in read_fully may block again before their guard drops.
        self.changed.notify_all();
        trace!("ringchannel: read {} bytes (readable={})", n, state.readable);
        Ok(n)
    }

    /// Single write step. `src` must be non-empty.
    fn write_locked(
        &self,
        state: &mut MutexGuard<'_, ChannelState>,
        src: &[u8],
        cancel: Option<&CancelToken>,
    ) -> Result<usize> {
        let mut n = state.writable().min(src.len());
        while n == 0 && state.open && !state.eof {
            self.pause(state, cancel)?;
            n = state.writable().min(src.len());
        }
        if !state.open {
            return Err(ChannelError::AsynchronousClose);
        }
        if state.eof {
            return Err(ChannelError::NotWritable);
        }

        state.copy_in(&src[..n]);
        self.changed.notify_all();
        trace!("ringchannel: wrote {} bytes (readable={})", n, state.readable);
        Ok(n)
    }

    /// Waits for the next state change. The token is checked both before
    /// and after waiting.
    fn pause(
        &self,
        state: &mut MutexGuard<'_, ChannelState>,
        cancel: Option<&CancelToken>,
    ) -> Result<()> {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(self.on_cancel(state));
        }
        self.changed.wait(state);
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(self.on_cancel(state));
        }
        Ok(())
    }

    fn on_cancel(&self, state: &mut ChannelState) -> ChannelError {
        match self.cancel_policy {
            CancelPolicy::CloseChannel => {
                if state.open {
                    state.open = false;
                    warn!("ringchannel: blocked call cancelled, closing channel");
                }
                ChannelError::AsynchronousClose
            }
            CancelPolicy::CallOnly => {
                debug!("ringchannel: blocked call cancelled");
                ChannelError::Cancelled
            }
        }
    }
}

impl ChannelState {
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn writable(&self) -> usize {
        self.capacity() - self.readable
    }

    /// Copies `dst.len()` bytes out starting at `read_pos`, wrapping at the
    /// end of the array.
    fn copy_out(&mut self, dst: &mut [u8]) {
        let n = dst.len();
        let capacity = self.capacity();
        let first = n.min(capacity - self.read_pos);

        dst[..first].copy_from_slice(&self.buf[self.read_pos..self.read_pos + first]);
        dst[first..].copy_from_slice(&self.buf[..n - first]);

        self.read_pos = (self.read_pos + n) % capacity;
        self.readable -= n;
        self.check_invariants();
    }

    /// Copies `src` in starting at `write_pos`, wrapping at the end of the
    /// array.
    fn copy_in(&mut self, src: &[u8]) {
        let n = src.len();
        let capacity = self.capacity();
        let first = n.min(capacity - self.write_pos);

        self.buf[self.write_pos..self.write_pos + first].copy_from_slice(&src[..first]);
        self.buf[..n - first].copy_from_slice(&src[first..]);

        self.write_pos = (self.write_pos + n) % capacity;
        self.readable += n;
        self.check_invariants();
    }

    fn check_invariants(&self) {
        let capacity = self.capacity();
        debug_assert!(self.readable <= capacity);
        debug_assert!(self.read_pos < capacity && self.write_pos < capacity);
        debug_assert_eq!(
            (self.write_pos + capacity - self.read_pos) % capacity,
            self.readable % capacity
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    const ALPHABET: &[u8] = b"abdefghijklmnopqrstuvwxyz";

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            RingChannel::new(0).unwrap_err(),
            ChannelError::InvalidCapacity(0)
        );
        assert_eq!(
            RingChannel::from_buffer(Vec::new()).unwrap_err(),
            ChannelError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_unallocatable_capacity_rejected() {
        assert_eq!(
            RingChannel::new(usize::MAX).unwrap_err(),
            ChannelError::InvalidCapacity(usize::MAX)
        );
    }

    #[test]
    fn test_good_capacity() {
        let ch = RingChannel::new(8192).unwrap();
        assert_eq!(ch.capacity(), 8192);
        assert_eq!(ch.readable(), 0);
        assert_eq!(ch.writable(), 8192);
        assert!(ch.is_open());
        assert!(!ch.is_eof());
        assert!(ch.is_empty());
        assert!(!ch.is_full());
    }

    #[test]
    fn test_alphabet_read_write() {
        let ch = RingChannel::new(50).unwrap();
        assert_eq!(ch.write(ALPHABET).unwrap(), ALPHABET.len());

        let mut data = vec![0u8; 1000];
        let n = ch.read(&mut data).unwrap();
        assert_eq!(n, ALPHABET.len());
        assert_eq!(&data[..n], ALPHABET);
        assert_eq!(ch.readable(), 0);
    }

    #[test]
    fn test_wrap_around() {
        let ch = RingChannel::new(10).unwrap();
        assert_eq!(ch.write(b"0123456").unwrap(), 7);

        let mut data = [0u8; 5];
        assert_eq!(ch.read(&mut data).unwrap(), 5);
        assert_eq!(&data, b"01234");

        // Write straddles the end of the array
        assert_eq!(ch.write(b"abcdefg").unwrap(), 7);
        assert_eq!(ch.readable(), 9);

        // Read straddles it too
        let mut data = [0u8; 9];
        assert_eq!(ch.read(&mut data).unwrap(), 9);
        assert_eq!(&data, b"56abcdefg");
        assert!(ch.is_empty());
    }

    #[test]
    fn test_partial_write_when_nearly_full() {
        let ch = RingChannel::new(4).unwrap();
        assert_eq!(ch.write(b"abc").unwrap(), 3);
        assert_eq!(ch.write(b"defg").unwrap(), 1);
        assert!(ch.is_full());
        assert_eq!(ch.writable(), 0);
    }

    #[test]
    fn test_from_buffer_starts_empty() {
        let ch = RingChannel::from_buffer(vec![7u8; 6]).unwrap();
        assert_eq!(ch.capacity(), 6);
        assert_eq!(ch.readable(), 0);

        ch.write(b"xy").unwrap();
        let mut data = [0u8; 6];
        assert_eq!(ch.read(&mut data).unwrap(), 2);
        assert_eq!(&data[..2], b"xy");
    }

    #[test]
    fn test_empty_slices_do_not_block() {
        let ch = RingChannel::new(4).unwrap();
        assert_eq!(ch.read(&mut []).unwrap(), 0);
        assert_eq!(ch.write(&[]).unwrap(), 0);

        ch.write(b"abcd").unwrap();
        assert_eq!(ch.write(&[]).unwrap(), 0);
    }

    #[test]
    fn test_eof_drains_then_returns_zero() {
        let ch = RingChannel::new(8).unwrap();
        ch.write(b"abc").unwrap();
        ch.set_eof();
        assert!(ch.is_eof());

        let mut data = [0u8; 2];
        assert_eq!(ch.read(&mut data).unwrap(), 2);
        assert_eq!(ch.read(&mut data).unwrap(), 1);
        assert_eq!(data[0], b'c');
        assert_eq!(ch.read(&mut data).unwrap(), 0);
        assert_eq!(ch.read(&mut data).unwrap(), 0);
    }

    #[test]
    fn test_write_after_eof_fails() {
        let ch = RingChannel::new(8).unwrap();
        ch.set_eof();
        assert_eq!(ch.write(b"a").unwrap_err(), ChannelError::NotWritable);
        assert_eq!(ch.write(&[]).unwrap_err(), ChannelError::NotWritable);
        assert_eq!(ch.write_fully(b"a").unwrap_err(), ChannelError::NotWritable);
        assert_eq!(ch.readable(), 0);
    }

    #[test]
    fn test_set_eof_idempotent() {
        let ch = RingChannel::new(8).unwrap();
        ch.set_eof();
        ch.set_eof();
        assert!(ch.is_eof());
        assert!(ch.is_open());
    }

    #[test]
    fn test_close_fails_later_calls() {
        let ch = RingChannel::new(8).unwrap();
        ch.write(b"abc").unwrap();
        ch.close();
        ch.close();
        assert!(!ch.is_open());

        let mut data = [0u8; 4];
        assert_eq!(ch.read(&mut data).unwrap_err(), ChannelError::Closed);
        assert_eq!(ch.write(b"x").unwrap_err(), ChannelError::Closed);
        assert_eq!(ch.read_fully(&mut data).unwrap_err(), ChannelError::Closed);
        assert_eq!(ch.write_fully(b"x").unwrap_err(), ChannelError::Closed);
        assert_eq!(ch.read(&mut []).unwrap_err(), ChannelError::Closed);
    }

    #[test]
    fn test_read_fully_unexpected_eof() {
        let ch = RingChannel::new(8).unwrap();
        ch.write(b"abc").unwrap();
        ch.set_eof();

        let mut data = [0u8; 4];
        assert_eq!(ch.read_fully(&mut data).unwrap_err(), ChannelError::UnexpectedEof);
        // The partial read was consumed
        assert_eq!(ch.readable(), 0);
    }

    #[test]
    fn test_read_fully_exact() {
        let ch = RingChannel::new(8).unwrap();
        ch.write(b"abcdef").unwrap();

        let mut data = [0u8; 4];
        ch.read_fully(&mut data).unwrap();
        assert_eq!(&data, b"abcd");
        assert_eq!(ch.readable(), 2);
    }

    #[test]
    fn test_blocking_write() {
        let ch = RingChannel::new(2).unwrap();
        let writer_ch = ch.clone();

        let writer = thread::spawn(move || {
            // First two bytes fit, the third blocks until the consumer reads
            writer_ch.write_fully(b"abc").unwrap();
        });

        // Give writer time to fill buffer and block
        thread::sleep(Duration::from_millis(50));
        assert!(ch.is_full());

        let mut one = [0u8; 1];
        assert_eq!(ch.read(&mut one).unwrap(), 1);
        assert_eq!(one[0], b'a');

        writer.join().unwrap();

        let mut rest = [0u8; 2];
        ch.read_fully(&mut rest).unwrap();
        assert_eq!(&rest, b"bc");
    }

    #[test]
    fn test_blocking_read() {
        let ch = RingChannel::new(4).unwrap();
        let reader_ch = ch.clone();

        let reader = thread::spawn(move || {
            let mut data = [0u8; 4];
            // This should block until data is available
            let n = reader_ch.read(&mut data).unwrap();
            data[..n].to_vec()
        });

        // Give the reader time to block
        thread::sleep(Duration::from_millis(10));

        ch.write(&[42]).unwrap();

        assert_eq!(reader.join().unwrap(), vec![42]);
    }

    #[test]
    fn test_close_releases_blocked_reader() {
        let ch = RingChannel::new(4).unwrap();
        let reader_ch = ch.clone();

        let reader = thread::spawn(move || reader_ch.read(&mut [0u8; 4]));

        thread::sleep(Duration::from_millis(50));
        ch.close();

        assert_eq!(reader.join().unwrap().unwrap_err(), ChannelError::AsynchronousClose);
    }

    #[test]
    fn test_eof_releases_blocked_writer() {
        let ch = RingChannel::new(2).unwrap();
        ch.write(b"ab").unwrap();
        let writer_ch = ch.clone();

        let writer = thread::spawn(move || writer_ch.write(b"c"));

        thread::sleep(Duration::from_millis(10));
        ch.set_eof();

        assert_eq!(writer.join().unwrap().unwrap_err(), ChannelError::NotWritable);

        // Buffered bytes still drain
        let mut data = [0u8; 4];
        assert_eq!(ch.read(&mut data).unwrap(), 2);
        assert_eq!(ch.read(&mut data).unwrap(), 0);
    }

    #[test]
    fn test_eof_releases_blocked_reader() {
        let ch = RingChannel::new(2).unwrap();
        let reader_ch = ch.clone();

        let reader = thread::spawn(move || reader_ch.read(&mut [0u8; 2]));

        thread::sleep(Duration::from_millis(10));
        ch.set_eof();

        assert_eq!(reader.join().unwrap().unwrap(), 0);
    }

    #[test]
    fn test_debug_format() {
        let ch = RingChannel::new(3).unwrap();
        ch.write(b"a").unwrap();
        let s = format!("{:?}", ch);
        assert!(s.contains("capacity: 3"));
        assert!(s.contains("readable: 1"));
    }

    #[test]
    fn test_default_capacity() {
        let ch = RingChannel::default();
        assert_eq!(ch.capacity(), DEFAULT_CAPACITY);
        assert_eq!(ch.cancel_policy(), CancelPolicy::CloseChannel);
    }
}
