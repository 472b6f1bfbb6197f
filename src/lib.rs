//! Driver core for serially-addressed RGB and RGB+W LED strips (NeoPixel / WS2812 style).
//!
//! A [`Strip`] keeps its pixels in the exact byte layout the LED chipset expects, so a flush is a
//! single hand-off of the raw buffer to a [`Transport`]. Everything on top of that buffer is
//! integer-only and allocation-free after creation, so it is safe to run on a microcontroller:
//!
//! - [`color`]: 24-bit RGB packing, HSL→RGB conversion, and named colors.
//! - [`strip`]: the pixel buffer itself, brightness scaling, and sub-range views that share one buffer.
//! - [`matrix`]: `(x, y)` addressing, including the 16×16 serpentine panel wiring.
//! - [`text`]: 5×5 glyph rendering and scrolling text on the serpentine panel.
//! - [`diagnostics`]: rainbow gradients, bar graphs, and a current-draw estimate.
//! - `to_png` (feature `host`): PNG and APNG previews of recorded buffers.
//!
//! # Glossary
//!
//! - **Stride:** bytes per pixel in the buffer (3 for RGB modes, 4 for RGB+W).
//! - **View:** a `(start, len)` window over a buffer shared with the strip it was cut from.
//! - **Serpentine:** panel wiring where every other row runs in the opposite direction.
//! - **Flush:** handing the whole raw buffer to the [`Transport`]. Pixel setters never flush;
//!   the composite operations (`show_color`, `set_matrix_8`, `show_text`, ...) do.
//!
//! # Example
//!
//! ```rust
//! use neopixel_kit::{ColorMode, FrameRecorder, colors, create};
//!
//! let mut strip = create(FrameRecorder::new(), 0_u8, 10, ColorMode::RgbGrb);
//! strip.set_brightness(255);
//! strip.set_pixel_color(0, colors::RED);
//!
//! // Views share the parent's buffer.
//! let mut tail = strip.range(8, 2);
//! tail.set_pixel_color(0, colors::BLUE);
//! assert_eq!(strip.pixel_color(8), Some(colors::BLUE));
//!
//! strip.show();
//! strip.with_transport(|recorder| assert_eq!(recorder.len(), 1));
//! ```
#![cfg_attr(not(feature = "host"), no_std)]

extern crate alloc;

// Logging goes through defmt when the `defmt` feature is on. Without it the arguments are still
// evaluated by reference so call sites compile the same way on the host.
macro_rules! log_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

macro_rules! log_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

pub mod color;
pub mod config;
pub mod diagnostics;
mod error;
pub mod font;
pub mod matrix;
pub mod strip;
pub mod text;
#[cfg(feature = "host")]
pub mod to_png;
pub mod transport;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

pub use crate::color::{colors, hsl, rgb};
pub use crate::config::{Current, StripConfig};
pub use crate::matrix::ColorPattern;
pub use crate::strip::{ColorMode, Strip, create};
pub use crate::transport::{FrameRecorder, Transport};
