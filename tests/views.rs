#![allow(missing_docs)]
//! Host-level tests for sub-range views sharing one buffer.

use neopixel_kit::{ColorMode, FrameRecorder, Strip, colors, create};

fn bright_strip(len: usize) -> Strip<FrameRecorder> {
    let mut strip = create(FrameRecorder::new(), 0, len, ColorMode::RgbGrb);
    strip.set_brightness(255);
    strip
}

#[test]
fn range_shares_buffer_both_ways() {
    let mut strip = bright_strip(10);
    let mut view = strip.range(3, 4);
    assert_eq!((view.start(), view.len()), (3, 4));

    view.set_pixel_color(0, colors::RED);
    assert_eq!(strip.pixel_color(3), Some(colors::RED));

    strip.set_pixel_color(6, colors::BLUE);
    assert_eq!(view.pixel_color(3), Some(colors::BLUE));
}

#[test]
fn range_is_clamped_to_parent() {
    let strip = bright_strip(10);

    let tail = strip.range(8, 5);
    assert_eq!((tail.start(), tail.len()), (8, 2));

    let past_end = strip.range(20, 3);
    assert_eq!((past_end.start(), past_end.len()), (9, 1));

    let nested = strip.range(2, 6).range(3, 10);
    assert_eq!((nested.start(), nested.len()), (5, 3));
}

#[test]
fn range_of_empty_strip_is_empty() {
    let strip = bright_strip(0);
    let view = strip.range(3, 3);
    assert!(view.is_empty());
    assert_eq!(view.start(), 0);
}

#[test]
fn range_copies_pin_and_brightness_but_not_matrix_width() {
    let mut strip = create(FrameRecorder::<u8>::new(), 2, 32, ColorMode::RgbGrb);
    strip.set_brightness(40);
    strip.set_matrix_width(8);

    let view = strip.range(0, 16);
    assert_eq!(view.pin(), 2);
    assert_eq!(view.brightness(), 40);
    assert_eq!(view.matrix_width(), 0);
    assert_eq!(view.mode(), ColorMode::RgbGrb);
}

#[test]
fn view_brightness_is_independent() {
    let mut strip = bright_strip(4);
    let mut view = strip.range(2, 2);
    view.set_brightness(128);

    strip.set_pixel_color(0, colors::WHITE);
    view.set_pixel_color(0, colors::WHITE);
    assert_eq!(strip.pixel_color(0), Some(colors::WHITE));
    assert_eq!(strip.pixel_color(2), Some(0x7F_7F_7F));
}

#[test]
fn view_writes_stay_inside_window() {
    let strip = bright_strip(6);
    let mut view = strip.range(2, 2);
    view.set_pixel_color(2, colors::RED);
    view.set_all_color(colors::GREEN);

    let pixels: Vec<u32> = (0..6).filter_map(|index| strip.pixel_color(index)).collect();
    assert_eq!(pixels, [0, 0, colors::GREEN, colors::GREEN, 0, 0]);
}

#[test]
fn clear_on_view_only_zeroes_its_window() {
    let mut strip = bright_strip(6);
    strip.set_all_color(colors::WHITE);
    strip.range(1, 3).clear();

    let pixels: Vec<u32> = (0..6).filter_map(|index| strip.pixel_color(index)).collect();
    assert_eq!(
        pixels,
        [colors::WHITE, 0, 0, 0, colors::WHITE, colors::WHITE]
    );
}

#[test]
fn shift_and_rotate_stay_inside_window() {
    let mut strip = bright_strip(6);
    for index in 0..6 {
        strip.set_pixel_color(index, u32::try_from(index + 1).unwrap_or_default());
    }

    let mut view = strip.range(1, 4);
    view.shift(1);
    let pixels: Vec<u32> = (0..6).filter_map(|index| strip.pixel_color(index)).collect();
    assert_eq!(pixels, [1, 0, 2, 3, 4, 6]);

    view.rotate(-1);
    let pixels: Vec<u32> = (0..6).filter_map(|index| strip.pixel_color(index)).collect();
    assert_eq!(pixels, [1, 2, 3, 4, 0, 6]);
}

#[test]
fn show_from_view_sends_whole_buffer() {
    let mut strip = bright_strip(4);
    strip.set_pixel_color(0, colors::RED);
    strip.range(3, 1).show();

    strip.with_transport(|recorder| {
        let bytes = &recorder.last().map(|frame| frame.bytes.clone()).unwrap_or_default();
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes[..3], [0, 255, 0]);
    });
}
