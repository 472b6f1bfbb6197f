//! Whole-strip effects and a current-draw estimate.

use crate::color::{colors, hsl, rgb};
use crate::config::Current;
use crate::strip::Strip;
use crate::transport::Transport;

/// Saturation used by the rainbow.
pub const RAINBOW_SATURATION: i32 = 100;
/// Lightness used by the rainbow.
pub const RAINBOW_LIGHTNESS: i32 = 50;

/// Color of pixel 0 when a bar graph value rounds down to nothing.
pub const BAR_GRAPH_EMPTY: u32 = 0x66_66_00;

/// Which way around the color wheel a gradient travels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HueInterpolationDirection {
    /// Increasing hue.
    #[default]
    Clockwise,
    /// Decreasing hue.
    CounterClockwise,
    /// Whichever way is shorter; counter-clockwise on a tie.
    Shortest,
}

impl HueInterpolationDirection {
    // Hue step per pixel, in hundredths of a degree. Widened so any `i32` hue is accepted.
    fn step(self, start_hue: i32, end_hue: i32, steps: i64) -> i64 {
        let (start_hue, end_hue) = (i64::from(start_hue), i64::from(end_hue));
        let clockwise = (end_hue + 360 - start_hue) % 360;
        let counter_clockwise = (start_hue + 360 - end_hue) % 360;
        let step_clockwise = clockwise * 100 / steps;
        let step_counter_clockwise = -(counter_clockwise * 100) / steps;
        match self {
            Self::Clockwise => step_clockwise,
            Self::CounterClockwise => step_counter_clockwise,
            Self::Shortest if clockwise < counter_clockwise => step_clockwise,
            Self::Shortest => step_counter_clockwise,
        }
    }
}

impl<T: Transport> Strip<T> {
    /// Fill the view with a clockwise rainbow from `start_hue` to `end_hue` and flush.
    ///
    /// The usual call is `show_rainbow(1, 360)`. Empty views are left alone and not flushed.
    pub fn show_rainbow(&mut self, start_hue: i32, end_hue: i32) {
        self.show_rainbow_with_direction(start_hue, end_hue, HueInterpolationDirection::Clockwise);
    }

    /// Fill the view with a rainbow from `start_hue` to `end_hue`, travelling in `direction`,
    /// and flush.
    ///
    /// The first and last pixels get exactly `start_hue` and `end_hue`. Interior pixels step in
    /// hundredths of a degree, truncating. A one-pixel view gets the first step past `start_hue`.
    pub fn show_rainbow_with_direction(
        &mut self,
        start_hue: i32,
        end_hue: i32,
        direction: HueInterpolationDirection,
    ) {
        if self.is_empty() {
            return;
        }
        let steps = i64::try_from(self.len()).unwrap_or(i64::MAX);
        let step = direction.step(start_hue, end_hue, steps);
        // Reduced to one turn before narrowing; `hsl` wraps the same way.
        let color_at = |hue: i64| {
            let hue = i32::try_from(hue.rem_euclid(360)).unwrap_or_default();
            hsl(hue, RAINBOW_SATURATION, RAINBOW_LIGHTNESS)
        };
        let start = i64::from(start_hue);

        if steps == 1 {
            self.set_pixel_color(0, color_at(start + step));
        } else {
            self.set_pixel_color(0, color_at(start));
            for (index, i) in (1..self.len() - 1).zip(1_i64..) {
                let hue = (start * 100 + i * step) / 100;
                self.set_pixel_color(index, color_at(hue));
            }
            self.set_pixel_color(self.len() - 1, color_at(i64::from(end_hue)));
        }
        self.show();
    }

    /// Show `|value|` out of `high` as a bar lit from pixel 0, then flush.
    ///
    /// Lit pixels fade from blue at the start to red at the end. A value too small to light one
    /// pixel shows pixel 0 in dim amber ([`BAR_GRAPH_EMPTY`]). A `high` of 0 or less clears the
    /// view and lights pixel 0 yellow.
    pub fn show_bar_graph(&mut self, value: i32, high: i32) {
        if high <= 0 {
            self.clear();
            self.set_pixel_color(0, colors::YELLOW);
            self.show();
            return;
        }

        let len = self.len();
        let lit = i64::from(value.unsigned_abs()) * len as i64 / i64::from(high);
        if lit == 0 {
            self.set_pixel_color(0, BAR_GRAPH_EMPTY);
            for index in 1..len {
                self.set_pixel_color(index, colors::BLACK);
            }
        } else {
            let last = len.saturating_sub(1);
            for index in 0..len {
                if index as i64 <= lit {
                    let red = if last == 0 { 0 } else { index * 255 / last };
                    let red = u8::try_from(red).unwrap_or(u8::MAX);
                    self.set_pixel_color(index, rgb(red, 0, u8::MAX - red));
                } else {
                    self.set_pixel_color(index, colors::BLACK);
                }
            }
        }
        self.show();
    }

    /// Rough current draw of this view in milliamps: half a milliamp per LED plus
    /// `433 / 10000` mA per unit of every byte stored in the view.
    #[must_use]
    pub fn power(&self) -> u32 {
        let window = self.byte_window();
        let total: u64 = self.with_buffer(|bytes| bytes[window].iter().map(|&b| u64::from(b)).sum());
        let idle = self.len() as u64 / 2;
        u32::try_from(idle + total * 433 / 10_000).unwrap_or(u32::MAX)
    }

    /// Whether the estimated draw from [`power`](Self::power) fits within `budget`.
    #[must_use]
    pub fn within_budget(&self, budget: Current) -> bool {
        match budget {
            Current::Milliamps(ma) => self.power() <= u32::from(ma),
            Current::Unlimited => true,
        }
    }
}
