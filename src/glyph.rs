//! Character to segment-bitmask encoding for 7- and 14-segment character cells.
//!
//! Both tables are indexed by ASCII code and built at compile time. A character outside a
//! table encodes as [`BLANK`]; encoding never fails.

/// The glyph with no segments lit.
pub const BLANK: u16 = 0x0000;

/// Upward arrow, used by the Wi-Fi password symbol labels to mark upper case and shifted digits.
pub const ARROW_UP: char = '↑';
/// Downward arrow, used by the Wi-Fi password symbol labels to mark lower case.
pub const ARROW_DOWN: char = '↓';

/// Segment geometry of the attached display.
///
/// The geometry is chosen once, when the [`crate::display::SegmentDisplay`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometry {
    /// Classic 7-segment digits with a separate center colon.
    SevenSegment,
    /// 14-segment alphanumeric cells with the colon wired to the second cell.
    #[default]
    FourteenSegment,
}

impl Geometry {
    /// Encode one character as the segment bitmask for this geometry.
    #[must_use]
    pub fn encode(self, ch: char) -> u16 {
        match self {
            Self::SevenSegment => lookup(&SEVEN_SEGMENT, ch),
            Self::FourteenSegment => match ch {
                ARROW_UP => 0x3800,
                ARROW_DOWN => 0x0700,
                _ => lookup(&FOURTEEN_SEGMENT, ch),
            },
        }
    }
}

fn lookup(table: &[u16; 128], ch: char) -> u16 {
    usize::try_from(u32::from(ch))
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or(BLANK)
}

#[expect(
    clippy::indexing_slicing,
    reason = "Every key is ASCII, checked at compile time"
)]
const fn ascii_table(pairs: &[(char, u16)]) -> [u16; 128] {
    let mut table = [BLANK; 128];
    let mut index = 0;
    while index < pairs.len() {
        let (ch, bits) = pairs[index];
        assert!(ch.is_ascii(), "glyph tables are ASCII only");
        table[ch as usize] = bits;
        index += 1;
    }
    table
}

/// Minimal alphabet for 7-segment cells: enough for digits and the menu labels.
const SEVEN_SEGMENT: [u16; 128] = ascii_table(&[
    (' ', 0x00),
    ('-', 0x40),
    ('_', 0x08),
    ('0', 0x3F),
    ('1', 0x06),
    ('2', 0x5B),
    ('3', 0x4F),
    ('4', 0x66),
    ('5', 0x6D),
    ('6', 0x7D),
    ('7', 0x07),
    ('8', 0x7F),
    ('9', 0x6F),
    ('A', 0x77),
    ('a', 0x5F),
    ('b', 0x7C),
    ('C', 0x39),
    ('c', 0x58),
    ('d', 0x5E),
    ('E', 0x79),
    ('e', 0x7B),
    ('F', 0x71),
    ('H', 0x76),
    ('h', 0x74),
    ('I', 0x06),
    ('i', 0x04),
    ('J', 0x1E),
    ('L', 0x38),
    ('n', 0x54),
    ('o', 0x5C),
    ('P', 0x73),
    ('r', 0x50),
    ('S', 0x6D),
    ('t', 0x78),
    ('U', 0x3E),
    ('Y', 0x6E),
    ('Z', 0x5B),
]);

/// Extended alphabet for 14-segment cells.
const FOURTEEN_SEGMENT: [u16; 128] = ascii_table(&[
    // Symbols
    (' ', 0x0000),
    ('-', 0x00C0),
    ('[', 0x0039),
    (']', 0x000F),
    ('_', 0x0008),
    ('!', 0x4002),
    ('@', 0x02BB),
    ('#', 0x12F8),
    ('$', 0x12ED),
    ('%', 0x0C24),
    ('^', 0x0120),
    ('&', 0x235D),
    ('*', 0x3FC0),
    ('(', 0x2400),
    (')', 0x0900),
    (',', 0x0800),
    ('.', 0x4000),
    ('?', 0x60A3),
    ('/', 0x0C00),
    ('\\', 0x2100),
    ('~', 0x0100),
    ('=', 0x00C8),
    ('+', 0x12C0),
    ('{', 0x0949),
    ('}', 0x2489),
    ('|', 0x1200),
    ('<', 0x0480),
    ('>', 0x0140),
    (':', 0x0030),
    (';', 0x0A00),
    ('\'', 0x0020),
    ('"', 0x0220),
    // Digits
    ('0', 0x003F),
    ('1', 0x0006),
    ('2', 0x00DB),
    ('3', 0x00CF),
    ('4', 0x00E6),
    ('5', 0x00ED),
    ('6', 0x00FD),
    ('7', 0x0007),
    ('8', 0x00FF),
    ('9', 0x00EF),
    // Letters
    ('A', 0x00F7),
    ('a', 0x00DF),
    ('B', 0x2479),
    ('b', 0x00FC),
    ('C', 0x0039),
    ('c', 0x00D8),
    ('D', 0x0930),
    ('d', 0x00DE),
    ('E', 0x0079),
    ('e', 0x00FB),
    ('F', 0x00F1),
    ('f', 0x0071),
    ('G', 0x00BD),
    ('g', 0x00EF),
    ('H', 0x00F6),
    ('h', 0x00F4),
    ('I', 0x1209),
    ('i', 0x1200),
    ('J', 0x001E),
    ('j', 0x001E),
    ('K', 0x2470),
    ('k', 0x2470),
    ('L', 0x0038),
    ('l', 0x0018),
    ('M', 0x0536),
    ('m', 0x0536),
    ('N', 0x2136),
    ('n', 0x00D4),
    ('O', 0x003F),
    ('o', 0x00DC),
    ('P', 0x00F3),
    ('p', 0x00F3),
    ('Q', 0x203F),
    ('q', 0x20E3),
    ('R', 0x20F3),
    ('r', 0x0050),
    ('S', 0x00ED),
    ('s', 0x00ED),
    ('T', 0x1201),
    ('t', 0x12C0),
    ('U', 0x003E),
    ('u', 0x001C),
    ('V', 0x0C30),
    ('v', 0x0810),
    ('W', 0x2836),
    ('w', 0x2814),
    ('X', 0x2D00),
    ('x', 0x2D00),
    ('Y', 0x1500),
    ('y', 0x1500),
    ('Z', 0x0C09),
    ('z', 0x0848),
]);
