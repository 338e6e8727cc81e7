//! `std::io` adapters.
//!
//! Both `RingChannel` and `&RingChannel` implement [`io::Read`] and
//! [`io::Write`], so a shared channel can be handed to anything that streams
//! through those traits (`io::copy`, `BufReader`, ...). End-of-stream shows
//! up as `Ok(0)`; channel errors convert as described on
//! [`ChannelError`](crate::ChannelError).

use std::io;

use crate::RingChannel;

impl io::Read for &RingChannel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        RingChannel::read(*self, buf).map_err(io::Error::from)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        RingChannel::read_fully(*self, buf).map_err(io::Error::from)
    }
}

impl io::Read for RingChannel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        RingChannel::read(self, buf).map_err(io::Error::from)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        RingChannel::read_fully(self, buf).map_err(io::Error::from)
    }
}

impl io::Write for &RingChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        RingChannel::write(*self, buf).map_err(io::Error::from)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        RingChannel::write_fully(*self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for RingChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        RingChannel::write(self, buf).map_err(io::Error::from)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        RingChannel::write_fully(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::RingChannel;
    use std::io::{self, Read, Write};
    use std::thread;

    #[test]
    fn test_io_copy_through_channel() {
        let ch = RingChannel::new(7).unwrap();
        let producer = {
            let mut ch = ch.clone();
            thread::spawn(move || {
                let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
                ch.write_all(&payload).unwrap();
                ch.set_eof();
                payload
            })
        };

        let mut out = Vec::new();
        let n = io::copy(&mut &ch, &mut out).unwrap();

        let payload = producer.join().unwrap();
        assert_eq!(n, 1000);
        assert_eq!(out, payload);
    }

    #[test]
    fn test_read_to_end_after_eof() {
        let mut ch = RingChannel::new(16).unwrap();
        ch.write_all(b"hello").unwrap();
        ch.set_eof();

        let mut out = String::new();
        ch.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_read_exact_unexpected_eof() {
        let mut ch = RingChannel::new(16).unwrap();
        ch.write_all(b"abc").unwrap();
        ch.set_eof();

        let mut buf = [0u8; 4];
        let err = ch.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_write_errors_map_to_io_kinds() {
        let mut ch = RingChannel::new(4).unwrap();
        ch.set_eof();
        // Inherent `write` would shadow the trait method
        let err = Write::write(&mut ch, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        ch.close();
        let err = Write::write(&mut ch, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
        assert!(ch.flush().is_ok());
    }
}
