//! Frame renderer: padding, scrolling, colon and bus faults.

mod common;

use common::{RecordingWriter, ram};
use embassy_futures::block_on;
use embassy_time::Duration;
use segment_clock::{Brightness, Geometry, SegmentDisplay};

fn display() -> SegmentDisplay<RecordingWriter> {
    SegmentDisplay::new(
        RecordingWriter::default(),
        Geometry::FourteenSegment,
        Duration::from_ticks(0),
        Brightness::new(7),
    )
    .expect("recording writer never fails")
}

#[test]
fn init_sets_brightness_and_blanks() {
    let display = display();
    assert_eq!(display.writer().inits, 1);
    assert_eq!(display.writer().brightness, vec![7]);
    assert_eq!(display.writer().frames, vec![[0; 16]]);
}

#[test]
fn short_text_is_one_write() {
    let mut display = display();
    block_on(display.display("24"));
    assert_eq!(display.writer().shown(), &[ram("24  ", false)]);
}

#[test]
fn long_text_scrolls_and_holds_last_window() {
    let mut display = display();
    block_on(display.display("FLASH  On"));
    let expected: Vec<_> = ["FLAS", "LASH", "ASH ", "SH  ", "H  O", "  On"]
        .into_iter()
        .map(|window| ram(window, false))
        .collect();
    assert_eq!(display.writer().shown(), expected.as_slice());
    assert_eq!(display.writer().last_frame(), Some(&ram("  On", false)));
}

#[test]
fn scroll_writes_len_minus_three_frames() {
    let mut display = display();
    let text = "ENTER PASSWORD";
    block_on(display.display(text));
    assert_eq!(display.writer().shown().len(), text.chars().count() - 3);
}

#[test]
fn multibyte_labels_count_characters() {
    let mut display = display();
    block_on(display.display("↑A A"));
    assert_eq!(display.writer().shown(), &[ram("↑A A", false)]);
}

#[test]
fn colon_applies_to_every_frame() {
    let mut display = display();
    display.set_colon(true);
    block_on(display.display("12345"));
    assert_eq!(
        display.writer().shown(),
        &[ram("1234", true), ram("2345", true)]
    );
}

#[test]
fn brightness_and_clear() {
    let mut display = display();
    display.set_brightness(Brightness::MAX);
    display.clear().expect("clear");
    assert_eq!(display.writer().brightness, vec![7, 15]);
    assert_eq!(display.writer().last_frame(), Some(&[0; 16]));
}

#[test]
fn bus_faults_skip_the_frame() {
    let mut display = SegmentDisplay::new(
        RecordingWriter::failing(),
        Geometry::FourteenSegment,
        Duration::from_ticks(0),
        Brightness::MIN,
    )
    .expect("init does not write frames through write_frame");
    block_on(display.display("GOOD"));
    block_on(display.display("SCROLLING"));
    assert_eq!(display.writer().shown().len(), 0);
    assert!(display.clear().is_err());
}
