//! Glyph rendering and scrolling text on the 16×16 serpentine panel.
//!
//! Glyphs come from [`font::FONT_5X5`](crate::font::FONT_5X5) and are plotted through
//! [`Strip::set_matrix_color_x_y`], so anything that falls off the panel is clipped.

use crate::config::SCROLL_FRAME_DELAY_MS;
use crate::font::{GLYPH_WIDTH, Glyph};
use crate::strip::Strip;
use crate::transport::Transport;
use crate::{Error, Result};

/// Blank characters scrolled in ahead of every message.
pub const SCROLL_LEAD_IN: &str = "  ";

/// Rows between text lines: a 5-row glyph plus two rows of spacing.
pub const LINE_HEIGHT: i32 = 7;

/// Frames in the scroll animation of `message`.
///
/// With `n` characters including the lead-in, that is `n * 5 + n - 1`: five columns per glyph
/// plus one spacing column, and no gap before the first glyph.
///
/// ```rust
/// use neopixel_kit::text::scroll_frame_count;
///
/// assert_eq!(scroll_frame_count("Hi"), 23);
/// assert_eq!(scroll_frame_count(""), 11);
/// ```
#[must_use]
pub fn scroll_frame_count(message: &str) -> usize {
    let chars = SCROLL_LEAD_IN.chars().count() + message.chars().count();
    chars * GLYPH_WIDTH + chars - 1
}

// Left column of the `index`th character when the scroll is at `position`. Columns too far
// off the panel to fit in an `i32` are pinned to its ends, which are off the panel too.
fn glyph_x(index: usize, position: usize) -> i32 {
    let column = if index == 0 {
        0
    } else {
        index.saturating_mul(GLYPH_WIDTH).saturating_add(1)
    };
    let column = i64::try_from(column).unwrap_or(i64::MAX);
    let position = i64::try_from(position).unwrap_or(i64::MAX);
    to_i32_saturating(column - position)
}

// Top row of text line `line`.
fn line_y(line: i32) -> i32 {
    line.saturating_mul(LINE_HEIGHT)
}

fn to_i32_saturating(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl<T: Transport> Strip<T> {
    /// Plot `ch` with its top-left corner at `(x_offset, y_offset)` on the serpentine panel,
    /// then flush if `show` is set.
    ///
    /// Characters outside the font (space included) plot nothing, but the flush still happens.
    pub fn show_char(&mut self, ch: char, x_offset: i32, y_offset: i32, rgb: u32, show: bool) {
        if let Err(error) = self.draw_glyph(ch, x_offset, y_offset, rgb) {
            log_debug!("show_char: {}", error);
        }
        if show {
            self.show();
        }
    }

    /// Checked form of [`show_char`](Self::show_char). Nothing is plotted or flushed on error.
    ///
    /// # Errors
    ///
    /// [`Error::GlyphNotFound`] if the font has no glyph for `ch`.
    pub fn try_show_char(
        &mut self,
        ch: char,
        x_offset: i32,
        y_offset: i32,
        rgb: u32,
        show: bool,
    ) -> Result<()> {
        self.draw_glyph(ch, x_offset, y_offset, rgb)?;
        if show {
            self.show();
        }
        Ok(())
    }

    /// Scroll `message` right to left across the panel on text line `line` (row `7 * line`),
    /// blocking for [`SCROLL_FRAME_DELAY_MS`] after each frame.
    ///
    /// The message is preceded by [`SCROLL_LEAD_IN`] and runs for
    /// [`scroll_frame_count`]`(message)` frames. Each frame is drawn, flushed, paced, and
    /// cleared, so the view is left blank in the buffer (the last flushed frame stays lit).
    /// There is no way to stop the animation early.
    pub fn show_text<D: embedded_hal::delay::DelayNs>(
        &mut self,
        message: &str,
        rgb: u32,
        line: i32,
        delay: &mut D,
    ) {
        let frames = scroll_frame_count(message);
        log_info!("show_text: {} frames", frames);
        self.clear();
        for position in 0..frames {
            self.draw_scroll_frame(message, position, line_y(line), rgb);
            self.show();
            delay.delay_ms(SCROLL_FRAME_DELAY_MS);
            self.clear();
        }
        log_info!("show_text: done");
    }

    /// [`show_text`](Self::show_text) paced by an async delay.
    pub async fn show_text_async<D: embedded_hal_async::delay::DelayNs>(
        &mut self,
        message: &str,
        rgb: u32,
        line: i32,
        delay: &mut D,
    ) {
        let frames = scroll_frame_count(message);
        log_info!("show_text_async: {} frames", frames);
        self.clear();
        for position in 0..frames {
            self.draw_scroll_frame(message, position, line_y(line), rgb);
            self.show();
            delay.delay_ms(SCROLL_FRAME_DELAY_MS).await;
            self.clear();
        }
        log_info!("show_text_async: done");
    }

    fn draw_scroll_frame(&mut self, message: &str, position: usize, y_offset: i32, rgb: u32) {
        for (index, ch) in SCROLL_LEAD_IN.chars().chain(message.chars()).enumerate() {
            // Blanks and unknown characters are expected here, so no log.
            let _ = self.draw_glyph(ch, glyph_x(index, position), y_offset, rgb);
        }
    }

    fn draw_glyph(&mut self, ch: char, x_offset: i32, y_offset: i32, rgb: u32) -> Result<()> {
        let glyph = Glyph::for_char(ch).ok_or(Error::GlyphNotFound(ch))?;
        for (column, row) in glyph.lit_pixels() {
            let x = to_i32_saturating(i64::from(x_offset) + column as i64);
            let y = to_i32_saturating(i64::from(y_offset) + row as i64);
            self.set_matrix_color_x_y(x, y, rgb);
        }
        Ok(())
    }
}
