//! `(x, y)` addressing for strips wired as LED matrices.
//!
//! Two schemes live side by side:
//!
//! - **Row-major** ([`Strip::set_matrix_color`]): rows of [`Strip::matrix_width`] pixels laid out
//!   one after another. Needs a non-zero matrix width.
//! - **Serpentine 16×16** ([`Strip::set_matrix_color_x_y`]): a fixed [`MATRIX_SIZE`]-wide panel
//!   where even rows run right-to-left and odd rows left-to-right, the usual wiring of chained
//!   LED panels. Text, the panel fills, and the `embedded-graphics` [`DrawTarget`] all use it.
//!
//! ```text
//! Serpentine 16×16 (LED index at each (x, y)):
//!
//!   y=0:  15  14  13 ...   1   0
//!   y=1:  16  17  18 ...  30  31
//!   y=2:  47  46  45 ...  33  32
//! ```
//!
//! Coordinates outside the panel are ignored, like every other bad input to a [`Strip`].

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::Pixel;
use heapless::Vec;

use crate::color::{colors, rgb888_to_packed};
use crate::strip::Strip;
use crate::transport::Transport;
use crate::{Error, Result};

/// Width and height of the serpentine panel.
pub const MATRIX_SIZE: usize = 16;

/// Most colors a [`ColorPattern`] holds.
pub const PATTERN_CAPACITY: usize = MATRIX_SIZE;

/// LED index of `(x, y)` on the serpentine panel, or `None` off the panel.
///
/// ```rust
/// use neopixel_kit::matrix::serpentine_index;
///
/// assert_eq!(serpentine_index(0, 0), Some(15));
/// assert_eq!(serpentine_index(0, 1), Some(16));
/// assert_eq!(serpentine_index(16, 0), None);
/// ```
#[must_use]
pub const fn serpentine_index(x: i32, y: i32) -> Option<usize> {
    let size = MATRIX_SIZE as i32;
    if x < 0 || x >= size || y < 0 || y >= size {
        return None;
    }
    let index = if y % 2 == 0 {
        (y + 1) * size - x - 1
    } else {
        y * size + x
    };
    Some(index as usize)
}

/// `(x, y)` of LED `index` on the serpentine panel, or `None` past the last LED.
#[must_use]
pub const fn serpentine_xy(index: usize) -> Option<(i32, i32)> {
    if index >= MATRIX_SIZE * MATRIX_SIZE {
        return None;
    }
    let y = index / MATRIX_SIZE;
    let column = index % MATRIX_SIZE;
    let x = if y % 2 == 0 {
        MATRIX_SIZE - 1 - column
    } else {
        column
    };
    Some((x as i32, y as i32))
}

/// A short list of packed colors, one matrix row's worth.
///
/// Holds at most [`PATTERN_CAPACITY`] colors. Reading past the end gives black, so a short
/// pattern leaves the rest of its row dark.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorPattern {
    colors: Vec<u32, PATTERN_CAPACITY>,
}

impl ColorPattern {
    /// A pattern from up to [`PATTERN_CAPACITY`] colors. Extra colors are dropped.
    #[must_use]
    pub fn from_slice(colors: &[u32]) -> Self {
        Self {
            colors: colors.iter().take(PATTERN_CAPACITY).copied().collect(),
        }
    }

    /// A row of 8 colors for [`Strip::set_matrix_8`].
    #[must_use]
    pub fn color_for_led_8(colors: [u32; 8]) -> Self {
        Self::from_slice(&colors)
    }

    /// A row of 16 colors for [`Strip::set_matrix_16`].
    #[must_use]
    pub fn color_for_led_16(colors: [u32; 16]) -> Self {
        Self::from_slice(&colors)
    }

    /// Color at `index`, or black past the end.
    #[must_use]
    pub fn color(&self, index: usize) -> u32 {
        self.colors.get(index).copied().unwrap_or(colors::BLACK)
    }

    /// Colors held, in order.
    #[must_use]
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }
}

impl<T: Transport> Strip<T> {
    /// Set the row width used by [`set_matrix_color`](Self::set_matrix_color), capped at
    /// [`len`](Self::len). A width of 0 turns row-major addressing off.
    pub fn set_matrix_width(&mut self, width: usize) {
        self.set_matrix_width_raw(width.min(self.len()));
    }

    /// Set `(x, y)` in row-major order: pixel `x + y * matrix_width`.
    ///
    /// Ignored when the matrix width is 0, or when `x` is not below the width or `y` not below
    /// `len / matrix_width` (a short last row is never addressed).
    pub fn set_matrix_color(&mut self, x: i32, y: i32, rgb: u32) {
        if let Err(error) = self.try_set_matrix_color(x, y, rgb) {
            log_debug!("set_matrix_color ignored: {}", error);
        }
    }

    /// Checked form of [`set_matrix_color`](Self::set_matrix_color).
    ///
    /// # Errors
    ///
    /// [`Error::NotAMatrix`] when the width is 0, [`Error::CoordinateOutOfRange`] off the matrix.
    pub fn try_set_matrix_color(&mut self, x: i32, y: i32, rgb: u32) -> Result<()> {
        let width = self.matrix_width();
        if width == 0 {
            return Err(Error::NotAMatrix);
        }
        let rows = self.len() / width;
        let (Ok(column), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return Err(Error::CoordinateOutOfRange { x, y });
        };
        if column >= width || row >= rows {
            return Err(Error::CoordinateOutOfRange { x, y });
        }
        self.try_set_pixel_color(column + row * width, rgb)
    }

    /// Set `(x, y)` on the 16×16 serpentine panel, whatever the matrix width.
    ///
    /// Ignored off the panel or past the end of a strip shorter than the panel.
    pub fn set_matrix_color_x_y(&mut self, x: i32, y: i32, rgb: u32) {
        if let Err(error) = self.try_set_matrix_color_x_y(x, y, rgb) {
            log_debug!("set_matrix_color_x_y ignored: {}", error);
        }
    }

    /// Checked form of [`set_matrix_color_x_y`](Self::set_matrix_color_x_y).
    ///
    /// # Errors
    ///
    /// [`Error::CoordinateOutOfRange`] off the panel, [`Error::PixelOutOfRange`] when the panel
    /// index is past the end of this view.
    pub fn try_set_matrix_color_x_y(&mut self, x: i32, y: i32, rgb: u32) -> Result<()> {
        let index = serpentine_index(x, y).ok_or(Error::CoordinateOutOfRange { x, y })?;
        self.try_set_pixel_color(index, rgb)
    }

    /// Fill a `scale`×`scale` block of the serpentine panel, the block for logical pixel
    /// `(x, y)` of an image scaled up by `scale` and moved by `(x_offset, y_offset)`.
    ///
    /// Only the part of the block that lands on the panel is visited.
    pub fn set_matrix_color_enlarge(
        &mut self,
        x: i32,
        y: i32,
        x_offset: i32,
        y_offset: i32,
        rgb: u32,
        scale: i32,
    ) {
        let columns = block_on_panel(x, x_offset, scale);
        let rows = block_on_panel(y, y_offset, scale);
        for cell_x in columns {
            for cell_y in rows.clone() {
                self.set_matrix_color_x_y(cell_x, cell_y, rgb);
            }
        }
    }

    /// Draw an 8×8 image on the 16×16 panel, each source pixel as a 2×2 block, then flush.
    ///
    /// `rows[y].color(x)` is the source pixel at `(x, y)`.
    pub fn set_matrix_8(&mut self, rows: &[ColorPattern; 8]) {
        for (y, row) in (0_i32..).zip(rows) {
            for (x, column) in (0_i32..8).zip(0_usize..) {
                self.set_matrix_color_enlarge(x, y, 0, 0, row.color(column), 2);
            }
        }
        self.show();
    }

    /// Draw a 16×16 image on the panel one-to-one, then flush.
    ///
    /// `rows[y].color(x)` is the pixel at `(x, y)`.
    pub fn set_matrix_16(&mut self, rows: &[ColorPattern; 16]) {
        for (y, row) in (0_i32..).zip(rows) {
            for (x, column) in (0_i32..16).zip(0_usize..) {
                self.set_matrix_color_x_y(x, y, row.color(column));
            }
        }
        self.show();
    }

    /// Turn every panel cell black, then flush.
    pub fn clear_matrix(&mut self) {
        for y in 0..MATRIX_SIZE as i32 {
            for x in 0..MATRIX_SIZE as i32 {
                self.set_matrix_color_x_y(x, y, colors::BLACK);
            }
        }
        self.show();
    }
}

// Panel coordinates covered by block `position` of width `scale` moved by `offset`. Computed
// in `i64` so far-off blocks come out empty.
fn block_on_panel(position: i32, offset: i32, scale: i32) -> core::ops::Range<i32> {
    let origin = i64::from(position) * i64::from(scale) + i64::from(offset);
    let start = origin.clamp(0, MATRIX_SIZE as i64);
    let end = (origin + i64::from(scale.max(0))).clamp(start, MATRIX_SIZE as i64);
    start as i32..end as i32
}

impl<T: Transport> OriginDimensions for Strip<T> {
    fn size(&self) -> Size {
        Size::new(MATRIX_SIZE as u32, MATRIX_SIZE as u32)
    }
}

/// Draws onto the 16×16 serpentine panel with the strip's brightness. Nothing is flushed.
impl<T: Transport> DrawTarget for Strip<T> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_matrix_color_x_y(point.x, point.y, rgb888_to_packed(color));
        }
        Ok(())
    }
}
