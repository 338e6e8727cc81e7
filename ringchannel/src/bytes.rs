//! Convenience functions for creating channels of common sizes.

use crate::RingChannel;

/// Creates a 256B channel.
pub fn channel_256b() -> RingChannel {
    RingChannel::fixed(256)
}

/// Creates a 1KB channel.
pub fn channel_1kb() -> RingChannel {
    RingChannel::fixed(1024)
}

/// Creates a 4KB channel.
pub fn channel_4kb() -> RingChannel {
    RingChannel::fixed(4096)
}

/// Creates a 16KB channel.
pub fn channel_16kb() -> RingChannel {
    RingChannel::fixed(16384)
}

/// Creates a 64KB channel.
pub fn channel_64kb() -> RingChannel {
    RingChannel::fixed(65536)
}

/// Creates a default 1KB channel.
pub fn channel() -> RingChannel {
    channel_1kb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_convenience_functions() {
        assert_eq!(channel_256b().capacity(), 256);
        assert_eq!(channel_1kb().capacity(), 1024);
        assert_eq!(channel_4kb().capacity(), 4096);
        assert_eq!(channel_16kb().capacity(), 16384);
        assert_eq!(channel_64kb().capacity(), 65536);
        assert_eq!(channel().capacity(), 1024);
    }

    #[test]
    fn test_convenience_channel_is_usable() {
        let ch = channel_256b();
        ch.write(&[1, 2, 3]).unwrap();

        let mut data = [0u8; 3];
        ch.read_fully(&mut data).unwrap();
        assert_eq!(data, [1, 2, 3]);
    }
}
