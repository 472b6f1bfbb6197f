use derive_more::{Display, Error};

/// Errors reported by the checked (`try_*`) strip operations.
///
/// The unchecked operations never surface these: they log the error at debug level and carry on,
/// so a bad coordinate can never stop a device loop.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A pixel index fell outside the view.
    #[display("pixel index {index} is outside the view of {len} pixels")]
    PixelOutOfRange {
        /// Requested pixel index, relative to the view.
        index: usize,
        /// Number of pixels in the view.
        len: usize,
    },
    /// A matrix coordinate fell outside the panel.
    #[display("matrix coordinate ({x}, {y}) is outside the panel")]
    CoordinateOutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },
    /// A white-channel write on a strip without a white LED.
    #[display("white channel requires ColorMode::Rgbw")]
    WhiteChannelUnsupported,
    /// The character has no glyph in the built-in font.
    #[display("no glyph for character {_0:?}")]
    GlyphNotFound(#[error(not(source))] char),
    /// A non-serpentine matrix write on a view whose matrix width is 0.
    #[display("matrix width is not set on this view")]
    NotAMatrix,
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
