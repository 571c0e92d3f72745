//! Glyph tables and the HT16K33 RAM layout.

use segment_clock::frame::{CELL_COUNT, RAM_SIZE};
use segment_clock::glyph::{ARROW_DOWN, ARROW_UP, BLANK};
use segment_clock::{Frame, Geometry};

#[test]
fn fourteen_segment_digits_and_letters() {
    let geometry = Geometry::FourteenSegment;
    assert_eq!(geometry.encode('0'), 0x003F);
    assert_eq!(geometry.encode('2'), 0x00DB);
    assert_eq!(geometry.encode('A'), 0x00F7);
    assert_eq!(geometry.encode('z'), 0x0848);
    assert_eq!(geometry.encode('"'), 0x0220);
    assert_eq!(geometry.encode(ARROW_UP), 0x3800);
    assert_eq!(geometry.encode(ARROW_DOWN), 0x0700);
}

#[test]
fn seven_segment_menu_alphabet() {
    let geometry = Geometry::SevenSegment;
    assert_eq!(geometry.encode('8'), 0x7F);
    assert_eq!(geometry.encode('-'), 0x40);
    assert_eq!(geometry.encode('F'), 0x71);
    assert_eq!(geometry.encode('L'), 0x38);
    assert_eq!(geometry.encode('n'), 0x54);
}

#[test]
fn unknown_characters_are_blank() {
    for geometry in [Geometry::SevenSegment, Geometry::FourteenSegment] {
        assert_eq!(geometry.encode('é'), BLANK);
        assert_eq!(geometry.encode('\u{7f}'), BLANK);
    }
    assert_eq!(Geometry::SevenSegment.encode('W'), BLANK);
    assert_eq!(Geometry::SevenSegment.encode(ARROW_UP), BLANK);
}

#[test]
fn short_text_is_padded_with_spaces() {
    let frame = Frame::new(Geometry::FourteenSegment, "IP", false);
    assert_eq!(frame.glyphs(), [0x1209, 0x00F3, BLANK, BLANK]);
    assert_eq!(frame.glyphs().len(), CELL_COUNT);
}

#[test]
fn fourteen_segment_layout_and_colon() {
    let ram = Frame::new(Geometry::FourteenSegment, "1205", true).to_ram();
    let mut expected = [0u8; RAM_SIZE];
    expected[0] = 0x06;
    expected[2] = 0xDB;
    expected[3] = 0x40;
    expected[4] = 0x3F;
    expected[6] = 0xED;
    assert_eq!(ram, expected);

    let dark = Frame::new(Geometry::FourteenSegment, "1205", false).to_ram();
    assert_eq!(dark[3], 0x00);
}

#[test]
fn fourteen_segment_high_bytes_are_kept() {
    let ram = Frame::new(Geometry::FourteenSegment, "BI", true).to_ram();
    assert_eq!(&ram[0..4], &[0x79, 0x24, 0x09, 0x12 | 0x40]);
}

#[test]
fn seven_segment_layout_and_colon() {
    let ram = Frame::new(Geometry::SevenSegment, "1234", true).to_ram();
    let mut expected = [0u8; RAM_SIZE];
    expected[0] = 0x06;
    expected[2] = 0x5B;
    expected[4] = 0x02;
    expected[6] = 0x4F;
    expected[8] = 0x66;
    assert_eq!(ram, expected);

    let dark = Frame::new(Geometry::SevenSegment, "1234", false).to_ram();
    assert_eq!(dark[4], 0x00);
}

#[test]
fn blank_frame_is_all_zero() {
    assert_eq!(Frame::blank(Geometry::SevenSegment).to_ram(), [0; RAM_SIZE]);
    assert_eq!(Frame::blank(Geometry::FourteenSegment).to_ram(), [0; RAM_SIZE]);
}
