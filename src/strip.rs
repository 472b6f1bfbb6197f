//! The pixel buffer and the views that share it.
//!
//! A [`Strip`] is a window `(start, len)` over a byte buffer that holds every pixel in the wire
//! layout chosen by its [`ColorMode`]. [`create`] allocates the buffer once; [`Strip::range`] cuts
//! further windows that write into the same bytes. Brightness is a per-view factor applied when a
//! color is written, never stored in the buffer.
//!
//! Out-of-window writes are silently ignored. Each silent setter has a `try_*` twin that reports
//! the problem as an [`Error`] instead.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::ops::Range;

use crate::color::{pack_rgb, unpack_b, unpack_g, unpack_r};
use crate::config::StripConfig;
use crate::transport::Transport;
use crate::{Error, Result};

/// Byte layout of one pixel on the wire.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorMode {
    /// Three bytes per pixel, green then red then blue (the common WS2812B order).
    #[default]
    RgbGrb,
    /// Three bytes per pixel, red then green then blue.
    RgbRgb,
    /// Four bytes per pixel: green, red, blue, then a dedicated white byte.
    Rgbw,
}

impl ColorMode {
    /// Bytes per pixel.
    #[must_use]
    pub const fn stride(self) -> usize {
        match self {
            Self::RgbGrb | Self::RgbRgb => 3,
            Self::Rgbw => 4,
        }
    }

    /// Whether pixels carry a white byte.
    #[must_use]
    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw)
    }

    /// Write the three color channels into the first three bytes of `pixel`.
    fn encode(self, pixel: &mut [u8], red: u8, green: u8, blue: u8) {
        let (first, second) = match self {
            Self::RgbRgb => (red, green),
            Self::RgbGrb | Self::Rgbw => (green, red),
        };
        pixel[0] = first;
        pixel[1] = second;
        pixel[2] = blue;
    }

    /// Read the packed `0xRRGGBB` color back out of one pixel's bytes.
    ///
    /// Returns `None` if `pixel` is shorter than three bytes.
    #[must_use]
    pub fn decode(self, pixel: &[u8]) -> Option<u32> {
        let &[first, second, blue, ..] = pixel else {
            return None;
        };
        let (red, green) = match self {
            Self::RgbRgb => (first, second),
            Self::RgbGrb | Self::Rgbw => (second, first),
        };
        Some(pack_rgb(red.into(), green.into(), blue.into()))
    }
}

/// Apply a view's brightness to one channel: `channel * brightness >> 8`, identity at 255.
#[must_use]
pub const fn scale_channel(channel: u8, brightness: u8) -> u8 {
    if brightness < u8::MAX {
        ((channel as u16 * brightness as u16) >> 8) as u8
    } else {
        channel
    }
}

// State every view of one buffer agrees on.
struct Shared<T> {
    buffer: RefCell<Box<[u8]>>,
    transport: RefCell<T>,
    mode: ColorMode,
}

/// A window of pixels over a shared LED buffer.
///
/// See the [module documentation](mod@crate::strip) for the sharing model. Pixel setters only
/// touch memory; call [`show`](Self::show) to flush the whole buffer to the transport.
///
/// Views are single-threaded: they share the buffer through `Rc` and `RefCell`, and the closures
/// given to [`with_buffer`](Self::with_buffer) and [`with_transport`](Self::with_transport) must
/// not call back into a view of the same buffer.
pub struct Strip<T: Transport> {
    shared: Rc<Shared<T>>,
    pin: T::Pin,
    brightness: u8,
    start: usize,
    len: usize,
    matrix_width: usize,
}

/// Allocate a zeroed buffer for `len` pixels and return the root view over it.
///
/// Brightness starts at [`BRIGHTNESS_DEFAULT`](crate::config::BRIGHTNESS_DEFAULT).
#[must_use]
pub fn create<T: Transport>(transport: T, pin: T::Pin, len: usize, mode: ColorMode) -> Strip<T> {
    Strip::with_config(transport, pin, StripConfig::new(len, mode))
}

impl<T: Transport> Strip<T> {
    /// Allocate a zeroed buffer described by `config` and return the root view over it.
    #[must_use]
    pub fn with_config(transport: T, pin: T::Pin, config: StripConfig) -> Self {
        let byte_len = config.len.saturating_mul(config.mode.stride());
        let shared = Shared {
            buffer: RefCell::new(vec![0_u8; byte_len].into_boxed_slice()),
            transport: RefCell::new(transport),
            mode: config.mode,
        };
        Self {
            shared: Rc::new(shared),
            pin,
            brightness: config.effective_brightness(),
            start: 0,
            len: config.len,
            matrix_width: config.matrix_width.min(config.len),
        }
    }

    /// Number of pixels in this view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether this view has no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of this view's first pixel within the shared buffer.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Wire layout shared by every view of this buffer.
    #[must_use]
    pub fn mode(&self) -> ColorMode {
        self.shared.mode
    }

    /// Current brightness of this view.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Output line this view flushes to.
    #[must_use]
    pub fn pin(&self) -> T::Pin {
        self.pin
    }

    /// Row width used by [`set_matrix_color`](Self::set_matrix_color); 0 when not a matrix.
    #[must_use]
    pub const fn matrix_width(&self) -> usize {
        self.matrix_width
    }

    pub(crate) fn stride(&self) -> usize {
        self.shared.mode.stride()
    }

    /// This view's bytes within the shared buffer.
    pub(crate) fn byte_window(&self) -> Range<usize> {
        let stride = self.stride();
        self.start * stride..(self.start + self.len) * stride
    }

    pub(crate) fn set_matrix_width_raw(&mut self, matrix_width: usize) {
        self.matrix_width = matrix_width;
    }

    /// Rebind the output line of this view. Other views keep their own pin.
    pub fn set_pin(&mut self, pin: T::Pin) {
        self.pin = pin;
    }

    /// Set the brightness applied to later writes through this view.
    ///
    /// Pixels already in the buffer are not rescaled; see [`ease_brightness`](Self::ease_brightness).
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Set pixel `index` of this view to a packed `0xRRGGBB` color, scaled by brightness.
    ///
    /// Ignored if `index` is outside the view. Needs [`show`](Self::show) to become visible.
    pub fn set_pixel_color(&mut self, index: usize, rgb: u32) {
        if let Err(error) = self.try_set_pixel_color(index, rgb) {
            log_debug!("set_pixel_color ignored: {}", error);
        }
    }

    /// Checked form of [`set_pixel_color`](Self::set_pixel_color).
    ///
    /// # Errors
    ///
    /// [`Error::PixelOutOfRange`] if `index` is outside the view.
    pub fn try_set_pixel_color(&mut self, index: usize, rgb: u32) -> Result<()> {
        let offset = self.pixel_offset(index)?;
        let (red, green, blue) = self.scaled(rgb);
        let stride = self.stride();
        let mut buffer = self.shared.buffer.borrow_mut();
        self.shared
            .mode
            .encode(&mut buffer[offset..offset + stride], red, green, blue);
        Ok(())
    }

    /// Set the white LED of pixel `index`, scaled by brightness.
    ///
    /// Ignored unless the mode is [`ColorMode::Rgbw`] and `index` is inside the view.
    pub fn set_pixel_white_led(&mut self, index: usize, white: u8) {
        if let Err(error) = self.try_set_pixel_white_led(index, white) {
            log_debug!("set_pixel_white_led ignored: {}", error);
        }
    }

    /// Checked form of [`set_pixel_white_led`](Self::set_pixel_white_led).
    ///
    /// # Errors
    ///
    /// [`Error::WhiteChannelUnsupported`] on strips without a white byte, then
    /// [`Error::PixelOutOfRange`] if `index` is outside the view.
    pub fn try_set_pixel_white_led(&mut self, index: usize, white: u8) -> Result<()> {
        if !self.shared.mode.has_white() {
            return Err(Error::WhiteChannelUnsupported);
        }
        let offset = self.pixel_offset(index)?;
        self.shared.buffer.borrow_mut()[offset + 3] = scale_channel(white, self.brightness);
        Ok(())
    }

    /// Set every pixel of this view to `rgb`, scaled by brightness, without flushing.
    pub fn set_all_color(&mut self, rgb: u32) {
        let (red, green, blue) = self.scaled(rgb);
        let mode = self.shared.mode;
        let window = self.byte_window();
        let mut buffer = self.shared.buffer.borrow_mut();
        for pixel in buffer[window].chunks_exact_mut(mode.stride()) {
            mode.encode(pixel, red, green, blue);
        }
    }

    /// Set every white LED of this view, scaled by brightness, without flushing.
    ///
    /// Ignored unless the mode is [`ColorMode::Rgbw`].
    pub fn set_all_white(&mut self, white: u8) {
        if !self.shared.mode.has_white() {
            log_debug!("set_all_white ignored: {}", Error::WhiteChannelUnsupported);
            return;
        }
        let white = scale_channel(white, self.brightness);
        let window = self.byte_window();
        let mut buffer = self.shared.buffer.borrow_mut();
        for pixel in buffer[window].chunks_exact_mut(4) {
            pixel[3] = white;
        }
    }

    /// Set every pixel of this view to `rgb` and flush.
    pub fn show_color(&mut self, rgb: u32) {
        self.set_all_color(rgb);
        self.show();
    }

    /// Rescale the bytes already in this view with a quadratic ramp that is dark at both ends
    /// and full at the middle.
    ///
    /// Pixel `k` is multiplied by `255 * k² / mid²` before the midpoint and by
    /// `255 * (len - 1 - k)² / mid²` after it, where `mid = len / 2`, then shifted right by 8.
    /// Calls compound.
    pub fn ease_brightness(&mut self) {
        let stride = self.stride();
        let len = self.len;
        let mid = len / 2;
        let mut buffer = self.shared.buffer.borrow_mut();
        // Squares are taken in `u64`; `usize` is 32 bits on the embedded targets.
        let mid_squared = (mid as u64) * (mid as u64);
        for pixel_index in 0..len {
            let distance = if pixel_index > mid {
                len - 1 - pixel_index
            } else {
                pixel_index
            };
            let distance = distance as u64;
            let scale = if mid == 0 {
                0
            } else {
                (255 * distance * distance / mid_squared).min(255)
            };
            let offset = (self.start + pixel_index) * stride;
            for byte in &mut buffer[offset..offset + stride] {
                *byte = ((u64::from(*byte) * scale) >> 8) as u8;
            }
        }
    }

    /// Zero every byte of this view. Needs [`show`](Self::show) to become visible.
    pub fn clear(&mut self) {
        let window = self.byte_window();
        self.shared.buffer.borrow_mut()[window].fill(0);
    }

    /// A view of `len` pixels starting `start` pixels into this one, sharing the same buffer.
    ///
    /// The window is clamped to this view: `start` to at most `self.len() - 1`, and `len` so the
    /// new view ends no later than this one. The new view copies pin and brightness and is not a
    /// matrix.
    #[must_use]
    pub fn range(&self, start: usize, len: usize) -> Self {
        let offset = start.min(self.len.saturating_sub(1));
        Self {
            shared: Rc::clone(&self.shared),
            pin: self.pin,
            brightness: self.brightness,
            start: self.start + offset,
            len: len.min(self.len - offset),
            matrix_width: 0,
        }
    }

    /// Move pixels `offset` places toward the end of this view, filling vacated pixels with
    /// black. A negative `offset` moves toward the start.
    pub fn shift(&mut self, offset: i32) {
        let delta = self.offset_bytes(offset);
        let window = self.byte_window();
        let mut buffer = self.shared.buffer.borrow_mut();
        let bytes = &mut buffer[window];
        let byte_len = bytes.len();
        if delta >= byte_len {
            bytes.fill(0);
        } else if offset > 0 {
            bytes.copy_within(..byte_len - delta, delta);
            bytes[..delta].fill(0);
        } else if offset < 0 {
            bytes.copy_within(delta.., 0);
            bytes[byte_len - delta..].fill(0);
        }
    }

    /// Move pixels `offset` places toward the end of this view, wrapping around.
    /// A negative `offset` rotates toward the start.
    pub fn rotate(&mut self, offset: i32) {
        let window = self.byte_window();
        if window.is_empty() {
            return;
        }
        let delta = self.offset_bytes(offset) % window.len();
        let mut buffer = self.shared.buffer.borrow_mut();
        let bytes = &mut buffer[window];
        if offset > 0 {
            bytes.rotate_right(delta);
        } else {
            bytes.rotate_left(delta);
        }
    }

    /// Send the whole shared buffer to the transport on this view's pin.
    pub fn show(&self) {
        let buffer = self.shared.buffer.borrow();
        self.shared
            .transport
            .borrow_mut()
            .send_buffer(&buffer, self.pin);
    }

    /// Packed color stored at pixel `index` of this view, as it sits in the buffer
    /// (brightness already applied). `None` outside the view.
    #[must_use]
    pub fn pixel_color(&self, index: usize) -> Option<u32> {
        let offset = self.pixel_offset(index).ok()?;
        let buffer = self.shared.buffer.borrow();
        self.shared
            .mode
            .decode(&buffer[offset..offset + self.stride()])
    }

    /// White byte stored at pixel `index`. `None` outside the view or on strips without white.
    #[must_use]
    pub fn pixel_white(&self, index: usize) -> Option<u8> {
        if !self.shared.mode.has_white() {
            return None;
        }
        let offset = self.pixel_offset(index).ok()?;
        Some(self.shared.buffer.borrow()[offset + 3])
    }

    /// Run `f` over the whole shared buffer, exactly as it will be sent on the next flush.
    pub fn with_buffer<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.shared.buffer.borrow())
    }

    /// Copy of the whole shared buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.with_buffer(|bytes| bytes.to_vec())
    }

    /// Run `f` with mutable access to the transport shared by every view of this buffer.
    pub fn with_transport<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.shared.transport.borrow_mut())
    }

    fn pixel_offset(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::PixelOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok((self.start + index) * self.stride())
    }

    fn scaled(&self, rgb: u32) -> (u8, u8, u8) {
        (
            scale_channel(unpack_r(rgb), self.brightness),
            scale_channel(unpack_g(rgb), self.brightness),
            scale_channel(unpack_b(rgb), self.brightness),
        )
    }

    fn offset_bytes(&self, offset: i32) -> usize {
        usize::try_from(offset.unsigned_abs())
            .unwrap_or(usize::MAX)
            .saturating_mul(self.stride())
    }
}

impl<T: Transport> fmt::Debug for Strip<T>
where
    T::Pin: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strip")
            .field("mode", &self.shared.mode)
            .field("pin", &self.pin)
            .field("brightness", &self.brightness)
            .field("start", &self.start)
            .field("len", &self.len)
            .field("matrix_width", &self.matrix_width)
            .finish_non_exhaustive()
    }
}
