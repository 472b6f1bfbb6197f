//! Built-in 5×5 bitmap font for printable ASCII.
//!
//! Each glyph is five rows, one byte per row, top row first. Bit `x` of a row lights the column
//! `4 - x`, so the most significant of the five bits is the leftmost pixel. Most glyphs leave
//! column 4 empty, which gives one column of spacing when glyphs are placed five columns apart.

/// Character code of the first glyph (`'!'`).
pub const FIRST_CHAR: u32 = 33;

/// Number of glyphs in the table (`'!'` through `'~'`).
pub const GLYPH_COUNT: usize = 94;

/// Columns per glyph.
pub const GLYPH_WIDTH: usize = 5;

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Row masks for every glyph, [`GLYPH_HEIGHT`] bytes per glyph, in character-code order.
pub static FONT_5X5: [u8; GLYPH_COUNT * GLYPH_HEIGHT] = [
    0x08, 0x08, 0x08, 0x00, 0x08, // '!'
    0x0a, 0x0a, 0x00, 0x00, 0x00, // '"'
    0x0a, 0x1f, 0x0a, 0x1f, 0x0a, // '#'
    0x0e, 0x19, 0x0e, 0x13, 0x0e, // '$'
    0x19, 0x12, 0x04, 0x09, 0x13, // '%'
    0x0c, 0x12, 0x0c, 0x12, 0x0d, // '&'
    0x08, 0x08, 0x00, 0x00, 0x00, // '\''
    0x04, 0x08, 0x08, 0x08, 0x04, // '('
    0x08, 0x04, 0x04, 0x04, 0x08, // ')'
    0x00, 0x0a, 0x04, 0x0a, 0x00, // '*'
    0x00, 0x04, 0x0e, 0x04, 0x00, // '+'
    0x00, 0x00, 0x00, 0x04, 0x08, // ','
    0x00, 0x00, 0x0e, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x08, 0x00, // '.'
    0x01, 0x02, 0x04, 0x08, 0x10, // '/'
    0x0c, 0x12, 0x12, 0x12, 0x0c, // '0'
    0x04, 0x0c, 0x04, 0x04, 0x0e, // '1'
    0x1c, 0x02, 0x0c, 0x10, 0x1e, // '2'
    0x1e, 0x02, 0x04, 0x12, 0x0c, // '3'
    0x06, 0x0a, 0x12, 0x1f, 0x02, // '4'
    0x1f, 0x10, 0x1e, 0x01, 0x1e, // '5'
    0x02, 0x04, 0x0e, 0x11, 0x0e, // '6'
    0x1f, 0x02, 0x04, 0x08, 0x10, // '7'
    0x0e, 0x11, 0x0e, 0x11, 0x0e, // '8'
    0x0e, 0x11, 0x0e, 0x04, 0x08, // '9'
    0x00, 0x08, 0x00, 0x08, 0x00, // ':'
    0x00, 0x04, 0x00, 0x04, 0x08, // ';'
    0x02, 0x04, 0x08, 0x04, 0x02, // '<'
    0x00, 0x0e, 0x00, 0x0e, 0x00, // '='
    0x08, 0x04, 0x02, 0x04, 0x08, // '>'
    0x0e, 0x11, 0x06, 0x00, 0x04, // '?'
    0x0e, 0x11, 0x15, 0x13, 0x0c, // '@'
    0x0c, 0x12, 0x1e, 0x12, 0x12, // 'A'
    0x1c, 0x12, 0x1c, 0x12, 0x1c, // 'B'
    0x0e, 0x10, 0x10, 0x10, 0x0e, // 'C'
    0x1c, 0x12, 0x12, 0x12, 0x1c, // 'D'
    0x1e, 0x10, 0x1c, 0x10, 0x1e, // 'E'
    0x1e, 0x10, 0x1c, 0x10, 0x10, // 'F'
    0x0e, 0x10, 0x13, 0x11, 0x0e, // 'G'
    0x12, 0x12, 0x1e, 0x12, 0x12, // 'H'
    0x1c, 0x08, 0x08, 0x08, 0x1c, // 'I'
    0x1f, 0x02, 0x02, 0x12, 0x0c, // 'J'
    0x12, 0x14, 0x18, 0x14, 0x12, // 'K'
    0x10, 0x10, 0x10, 0x10, 0x1e, // 'L'
    0x11, 0x1b, 0x15, 0x11, 0x11, // 'M'
    0x11, 0x19, 0x15, 0x13, 0x11, // 'N'
    0x0c, 0x12, 0x12, 0x12, 0x0c, // 'O'
    0x1c, 0x12, 0x1c, 0x10, 0x10, // 'P'
    0x0c, 0x12, 0x12, 0x0c, 0x06, // 'Q'
    0x1c, 0x12, 0x1c, 0x12, 0x11, // 'R'
    0x0e, 0x10, 0x0c, 0x02, 0x1c, // 'S'
    0x1f, 0x04, 0x04, 0x04, 0x04, // 'T'
    0x12, 0x12, 0x12, 0x12, 0x0c, // 'U'
    0x11, 0x11, 0x11, 0x0a, 0x04, // 'V'
    0x11, 0x11, 0x15, 0x1b, 0x11, // 'W'
    0x12, 0x12, 0x0c, 0x12, 0x12, // 'X'
    0x11, 0x0a, 0x04, 0x04, 0x04, // 'Y'
    0x1e, 0x04, 0x08, 0x10, 0x1e, // 'Z'
    0x0e, 0x08, 0x08, 0x08, 0x0e, // '['
    0x10, 0x08, 0x04, 0x02, 0x01, // '\\'
    0x0e, 0x02, 0x02, 0x02, 0x0e, // ']'
    0x04, 0x0a, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x1f, // '_'
    0x08, 0x04, 0x00, 0x00, 0x00, // '`'
    0x00, 0x0e, 0x12, 0x12, 0x0f, // 'a'
    0x10, 0x10, 0x1c, 0x12, 0x1c, // 'b'
    0x00, 0x0e, 0x10, 0x10, 0x0e, // 'c'
    0x02, 0x02, 0x0e, 0x12, 0x0e, // 'd'
    0x0c, 0x12, 0x1c, 0x10, 0x0e, // 'e'
    0x06, 0x08, 0x1c, 0x08, 0x08, // 'f'
    0x0e, 0x12, 0x0e, 0x02, 0x0c, // 'g'
    0x10, 0x10, 0x1c, 0x12, 0x12, // 'h'
    0x08, 0x00, 0x08, 0x08, 0x08, // 'i'
    0x02, 0x00, 0x02, 0x02, 0x0c, // 'j'
    0x10, 0x14, 0x18, 0x14, 0x12, // 'k'
    0x08, 0x08, 0x08, 0x08, 0x06, // 'l'
    0x00, 0x1b, 0x15, 0x11, 0x11, // 'm'
    0x00, 0x1c, 0x12, 0x12, 0x12, // 'n'
    0x00, 0x0c, 0x12, 0x12, 0x0c, // 'o'
    0x00, 0x1c, 0x12, 0x1c, 0x10, // 'p'
    0x00, 0x0e, 0x12, 0x0e, 0x02, // 'q'
    0x00, 0x0e, 0x10, 0x10, 0x10, // 'r'
    0x00, 0x06, 0x08, 0x04, 0x18, // 's'
    0x08, 0x08, 0x0e, 0x08, 0x07, // 't'
    0x00, 0x12, 0x12, 0x12, 0x0f, // 'u'
    0x00, 0x11, 0x11, 0x0a, 0x04, // 'v'
    0x00, 0x11, 0x11, 0x15, 0x1b, // 'w'
    0x00, 0x12, 0x0c, 0x0c, 0x12, // 'x'
    0x00, 0x11, 0x0a, 0x04, 0x18, // 'y'
    0x00, 0x1e, 0x04, 0x08, 0x1e, // 'z'
    0x06, 0x04, 0x0c, 0x04, 0x06, // '{'
    0x08, 0x08, 0x08, 0x08, 0x08, // '|'
    0x18, 0x08, 0x0c, 0x08, 0x18, // '}'
    0x00, 0x00, 0x0c, 0x03, 0x00, // '~'
];

/// One glyph of [`FONT_5X5`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Look up the glyph for `ch`.
    ///
    /// Returns `None` for characters outside `'!'..='~'`, including space.
    #[must_use]
    pub fn for_char(ch: char) -> Option<Self> {
        let index = usize::try_from(u32::from(ch).checked_sub(FIRST_CHAR)?).ok()?;
        if index >= GLYPH_COUNT {
            return None;
        }
        let start = index * GLYPH_HEIGHT;
        let rows = FONT_5X5.get(start..start + GLYPH_HEIGHT)?.try_into().ok()?;
        Some(Self { rows })
    }

    /// Row masks, top row first.
    #[must_use]
    pub const fn rows(&self) -> [u8; GLYPH_HEIGHT] {
        self.rows
    }

    /// Whether the pixel at `(column, row)` is lit. Out-of-glyph positions are dark.
    #[must_use]
    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        if column >= GLYPH_WIDTH {
            return false;
        }
        self.rows
            .get(row)
            .is_some_and(|&mask| mask & (1_u8 << (GLYPH_WIDTH - 1 - column)) != 0)
    }

    /// Every lit pixel as `(column, row)`, row by row.
    pub fn lit_pixels(self) -> impl Iterator<Item = (usize, usize)> {
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH)
                .filter(move |&column| self.is_lit(column, row))
                .map(move |column| (column, row))
        })
    }
}
