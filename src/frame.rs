//! A full 4-cell frame and its HT16K33 display-RAM image.

use crate::glyph::{BLANK, Geometry};

/// The number of character cells on the display.
pub const CELL_COUNT: usize = 4;

/// Size in bytes of the HT16K33 display RAM that one frame overwrites.
pub const RAM_SIZE: usize = 16;

/// One display RAM image, written to the controller as a single block.
pub type Ram = [u8; RAM_SIZE];

/// Byte offsets of each cell for 14-segment backpacks (two bytes per cell).
const FOURTEEN_SEGMENT_CELLS: [usize; CELL_COUNT] = [0x00, 0x02, 0x04, 0x06];
/// Bit set in the high byte of cell 1 to light the colon on 14-segment backpacks.
const FOURTEEN_SEGMENT_COLON: u8 = 0x40;

/// Byte offsets of each cell for 7-segment backpacks. Address 0x04 is the colon.
const SEVEN_SEGMENT_CELLS: [usize; CELL_COUNT] = [0x00, 0x02, 0x06, 0x08];
const SEVEN_SEGMENT_COLON_ADDRESS: usize = 0x04;
const SEVEN_SEGMENT_COLON: u8 = 0x02;

/// Glyphs for all four cells plus the colon, always written together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    geometry: Geometry,
    glyphs: [u16; CELL_COUNT],
    colon: bool,
}

impl Frame {
    /// A frame with every cell and the colon dark.
    #[must_use]
    pub const fn blank(geometry: Geometry) -> Self {
        Self {
            geometry,
            glyphs: [BLANK; CELL_COUNT],
            colon: false,
        }
    }

    /// Encode up to four characters. Missing cells are padded with spaces and extra
    /// characters are ignored.
    #[must_use]
    pub fn from_text(geometry: Geometry, text: &[char], colon: bool) -> Self {
        let mut glyphs = [geometry.encode(' '); CELL_COUNT];
        for (glyph, &ch) in glyphs.iter_mut().zip(text) {
            *glyph = geometry.encode(ch);
        }
        Self {
            geometry,
            glyphs,
            colon,
        }
    }

    /// Convenience for [`Frame::from_text`] that takes a `&str`.
    #[must_use]
    pub fn new(geometry: Geometry, text: &str, colon: bool) -> Self {
        let chars: Vec<char> = text.chars().take(CELL_COUNT).collect();
        Self::from_text(geometry, &chars, colon)
    }

    #[must_use]
    pub const fn glyphs(&self) -> [u16; CELL_COUNT] {
        self.glyphs
    }

    #[must_use]
    pub const fn colon(&self) -> bool {
        self.colon
    }

    /// Lay the frame out as display RAM for the frame's geometry.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "All offsets are constants below RAM_SIZE"
    )]
    pub fn to_ram(&self) -> Ram {
        let mut ram = [0; RAM_SIZE];
        match self.geometry {
            Geometry::FourteenSegment => {
                for (&offset, &glyph) in FOURTEEN_SEGMENT_CELLS.iter().zip(&self.glyphs) {
                    let [low, high] = glyph.to_le_bytes();
                    ram[offset] = low;
                    ram[offset + 1] = high;
                }
                if self.colon {
                    ram[FOURTEEN_SEGMENT_CELLS[1] + 1] |= FOURTEEN_SEGMENT_COLON;
                }
            }
            Geometry::SevenSegment => {
                for (&offset, &glyph) in SEVEN_SEGMENT_CELLS.iter().zip(&self.glyphs) {
                    ram[offset] = glyph.to_le_bytes()[0];
                }
                if self.colon {
                    ram[SEVEN_SEGMENT_COLON_ADDRESS] = SEVEN_SEGMENT_COLON;
                }
            }
        }
        ram
    }
}
