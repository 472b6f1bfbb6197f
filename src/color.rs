//! Integer color math on packed `0xRRGGBB` values.
//!
//! Colors cross the [`Strip`](crate::Strip) API as `u32` values holding 24-bit RGB. This module
//! packs and unpacks them, converts HSL to RGB without floating point, and bridges to the
//! `smart_leds` and `embedded_graphics` color types.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;
use smart_leds::RGB8;

/// Well-known colors as packed `0xRRGGBB` values.
pub mod colors {
    /// `#FF0000`
    pub const RED: u32 = 0xFF_00_00;
    /// `#FFA500`
    pub const ORANGE: u32 = 0xFF_A5_00;
    /// `#FFFF00`
    pub const YELLOW: u32 = 0xFF_FF_00;
    /// `#00FF00`
    pub const GREEN: u32 = 0x00_FF_00;
    /// `#0000FF`
    pub const BLUE: u32 = 0x00_00_FF;
    /// `#4B0082`
    pub const INDIGO: u32 = 0x4B_00_82;
    /// `#8A2BE2`
    pub const VIOLET: u32 = 0x8A_2B_E2;
    /// `#FF00FF`
    pub const PURPLE: u32 = 0xFF_00_FF;
    /// `#FFFFFF`
    pub const WHITE: u32 = 0xFF_FF_FF;
    /// `#000000`
    pub const BLACK: u32 = 0x00_00_00;
}

/// The named colors of [`colors`], as an enum for pickers and configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum NamedColor {
    /// `#FF0000`
    Red = colors::RED,
    /// `#FFA500`
    Orange = colors::ORANGE,
    /// `#FFFF00`
    Yellow = colors::YELLOW,
    /// `#00FF00`
    Green = colors::GREEN,
    /// `#0000FF`
    Blue = colors::BLUE,
    /// `#4B0082`
    Indigo = colors::INDIGO,
    /// `#8A2BE2`
    Violet = colors::VIOLET,
    /// `#FF00FF`
    Purple = colors::PURPLE,
    /// `#FFFFFF`
    White = colors::WHITE,
    /// `#000000`
    Black = colors::BLACK,
}

impl NamedColor {
    /// Packed `0xRRGGBB` value of this color.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self as u32
    }
}

impl From<NamedColor> for u32 {
    fn from(color: NamedColor) -> Self {
        color.rgb()
    }
}

/// Pack three channels into `0xRRGGBB`. Each channel keeps only its low 8 bits.
#[must_use]
pub const fn pack_rgb(red: u32, green: u32, blue: u32) -> u32 {
    ((red & 0xFF) << 16) | ((green & 0xFF) << 8) | (blue & 0xFF)
}

/// Pack three 8-bit channels into `0xRRGGBB`.
#[must_use]
pub const fn rgb(red: u8, green: u8, blue: u8) -> u32 {
    pack_rgb(red as u32, green as u32, blue as u32)
}

/// Red channel of a packed color.
#[must_use]
pub const fn unpack_r(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

/// Green channel of a packed color.
#[must_use]
pub const fn unpack_g(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color.
#[must_use]
pub const fn unpack_b(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// Convert hue / saturation / lightness to a packed RGB color with integer arithmetic only.
///
/// `hue` is in degrees and wraps into `0..360` (negative hues wrap too). `saturation` and
/// `lightness` are percentages clamped to `0..=99`.
///
/// Channel values are computed on a 0..=255 scale with all divisions truncating, so results are
/// exact and repeatable:
///
/// ```rust
/// use neopixel_kit::hsl;
///
/// assert_eq!(hsl(0, 100, 50), 0xFE_01_01);
/// assert_eq!(hsl(30, 99, 50), 0xFE_7F_01);
/// assert_eq!(hsl(360, 100, 50), hsl(0, 100, 50));
/// ```
#[must_use]
pub const fn hsl(hue: i32, saturation: i32, lightness: i32) -> u32 {
    let hue = hue.rem_euclid(360);
    let saturation = clamp_percent(saturation);
    let lightness = clamp_percent(lightness);

    // Chroma on a 0..=255 scale.
    let chroma = (((100 - (2 * lightness - 100).abs()) * saturation) << 8) / 10_000;
    let sector = hue / 60;
    // Position inside the sector, 0..=255.
    let within = ((hue - sector * 60) * 256) / 60;
    let distance = ((((sector % 2) << 8) + within) - 256).abs();
    // Second-largest component.
    let second = (chroma * (256 - distance)) >> 8;

    let (red, green, blue) = match sector {
        0 => (chroma, second, 0),
        1 => (second, chroma, 0),
        2 => (0, chroma, second),
        3 => (0, second, chroma),
        4 => (second, 0, chroma),
        _ => (chroma, 0, second),
    };

    let offset = (((lightness * 2) << 8) / 100 - chroma) / 2;
    pack_rgb(
        (red + offset) as u32,
        (green + offset) as u32,
        (blue + offset) as u32,
    )
}

const fn clamp_percent(value: i32) -> i32 {
    if value < 0 {
        0
    } else if value > 99 {
        99
    } else {
        value
    }
}

/// Convert a packed color to a `smart_leds` [`RGB8`].
#[must_use]
pub const fn packed_to_rgb8(rgb: u32) -> RGB8 {
    RGB8::new(unpack_r(rgb), unpack_g(rgb), unpack_b(rgb))
}

/// Convert a `smart_leds` [`RGB8`] to a packed color.
#[must_use]
pub const fn rgb8_to_packed(color: RGB8) -> u32 {
    rgb(color.r, color.g, color.b)
}

/// Convert a packed color to an `embedded_graphics` [`Rgb888`].
#[must_use]
pub const fn packed_to_rgb888(rgb: u32) -> Rgb888 {
    Rgb888::new(unpack_r(rgb), unpack_g(rgb), unpack_b(rgb))
}

/// Convert an `embedded_graphics` [`Rgb888`] to a packed color.
#[must_use]
pub fn rgb888_to_packed(color: Rgb888) -> u32 {
    rgb(color.r(), color.g(), color.b())
}
