//! Creation-time settings for a [`Strip`](crate::Strip) and their defaults.

use crate::strip::ColorMode;

/// Brightness a new strip starts with (`128`, roughly half).
pub const BRIGHTNESS_DEFAULT: u8 = 128;

/// Pause between frames of a scrolling-text animation, in milliseconds.
pub const SCROLL_FRAME_DELAY_MS: u32 = 150;

/// Default current budget for new strips (`Current::Unlimited`).
pub const MAX_CURRENT_DEFAULT: Current = Current::Unlimited;

/// Worst-case draw of one LED at full white, in milliamps.
pub const MILLIAMPS_PER_LED: u32 = 60;

/// Current budget used to cap a strip's starting brightness.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Current {
    /// Keep the worst case (every LED at full white) within this many milliamps.
    ///
    /// A 16-LED strip draws 960 mA at full white, so `Milliamps(240)` caps brightness at 63.
    Milliamps(u16),
    /// No cap.
    Unlimited,
}

impl Default for Current {
    fn default() -> Self {
        MAX_CURRENT_DEFAULT
    }
}

impl Current {
    /// Highest brightness that keeps `worst_case_ma` within this budget.
    ///
    /// Returns 255 for [`Current::Unlimited`] and for a zero worst case.
    #[must_use]
    pub const fn max_brightness(self, worst_case_ma: u32) -> u8 {
        match self {
            Self::Milliamps(ma) => {
                if worst_case_ma == 0 {
                    return u8::MAX;
                }
                let scale = (ma as u32 * 255) / worst_case_ma;
                if scale > 255 { 255 } else { scale as u8 }
            }
            Self::Unlimited => u8::MAX,
        }
    }
}

/// Settings fixed when a strip's buffer is allocated.
///
/// ```rust
/// use neopixel_kit::{ColorMode, Current, StripConfig};
///
/// const PANEL: StripConfig = StripConfig::new(256, ColorMode::RgbGrb)
///     .with_brightness(64)
///     .with_matrix_width(16)
///     .with_max_current(Current::Milliamps(500));
///
/// assert_eq!(PANEL.effective_brightness(), 8);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StripConfig {
    /// Number of pixels in the buffer.
    pub len: usize,
    /// Wire layout of each pixel.
    pub mode: ColorMode,
    /// Starting brightness of the root view.
    pub brightness: u8,
    /// Row width for [`Strip::set_matrix_color`](crate::Strip::set_matrix_color); 0 means "not a matrix".
    pub matrix_width: usize,
    /// Budget that may lower `brightness` at creation.
    pub max_current: Current,
}

impl StripConfig {
    /// Settings for `len` pixels in `mode` with every other field at its default.
    #[must_use]
    pub const fn new(len: usize, mode: ColorMode) -> Self {
        Self {
            len,
            mode,
            brightness: BRIGHTNESS_DEFAULT,
            matrix_width: 0,
            max_current: MAX_CURRENT_DEFAULT,
        }
    }

    /// Replace the starting brightness.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Replace the matrix row width.
    #[must_use]
    pub const fn with_matrix_width(mut self, matrix_width: usize) -> Self {
        self.matrix_width = matrix_width;
        self
    }

    /// Replace the current budget.
    #[must_use]
    pub const fn with_max_current(mut self, max_current: Current) -> Self {
        self.max_current = max_current;
        self
    }

    /// Starting brightness after the current budget is applied.
    #[must_use]
    pub const fn effective_brightness(&self) -> u8 {
        let worst_case_ma = (self.len as u32).saturating_mul(MILLIAMPS_PER_LED);
        let cap = self.max_current.max_brightness(worst_case_ma);
        if cap < self.brightness {
            cap
        } else {
            self.brightness
        }
    }
}
