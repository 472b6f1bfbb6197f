//! The seam between the pixel buffer and the hardware that clocks it out.
//!
//! The driver core never talks to a peripheral itself. A flush hands the raw buffer and a pin
//! identifier to a [`Transport`]; scrolling text paces its frames with an
//! [`embedded_hal::delay::DelayNs`] (or the async twin from `embedded-hal-async`).

use alloc::vec::Vec;

/// Sends an encoded pixel buffer to the LEDs.
///
/// Implementations block until the bytes are on the wire. Wiring and timing failures belong to
/// the implementation; the driver core neither sees nor retries them.
pub trait Transport {
    /// Identifier of the output line. Opaque to the driver core.
    type Pin: Copy;

    /// Transmit `bytes` verbatim on `pin`.
    fn send_buffer(&mut self, bytes: &[u8], pin: Self::Pin);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Pin = T::Pin;

    fn send_buffer(&mut self, bytes: &[u8], pin: Self::Pin) {
        (**self).send_buffer(bytes, pin);
    }
}

/// One buffer captured by [`FrameRecorder`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedFrame<P> {
    /// Buffer contents at the time of the flush.
    pub bytes: Vec<u8>,
    /// Pin the flush was addressed to.
    pub pin: P,
}

/// A [`Transport`] that keeps a copy of every flushed buffer.
///
/// Useful for tests and for rendering previews with the `host` feature's `to_png` module.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder<P = u8> {
    frames: Vec<RecordedFrame<P>>,
}

impl<P> FrameRecorder<P> {
    /// An empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Every recorded flush, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[RecordedFrame<P>] {
        &self.frames
    }

    /// The most recent flush.
    #[must_use]
    pub fn last(&self) -> Option<&RecordedFrame<P>> {
        self.frames.last()
    }

    /// Number of flushes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been flushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Remove and return every recorded flush.
    pub fn take(&mut self) -> Vec<RecordedFrame<P>> {
        core::mem::take(&mut self.frames)
    }
}

impl<P: Copy> Transport for FrameRecorder<P> {
    type Pin = P;

    fn send_buffer(&mut self, bytes: &[u8], pin: P) {
        self.frames.push(RecordedFrame {
            bytes: bytes.to_vec(),
            pin,
        });
    }
}
