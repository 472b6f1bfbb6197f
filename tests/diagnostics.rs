#![allow(missing_docs)]
//! Host-level tests for rainbows, bar graphs, and the current estimate.

use neopixel_kit::diagnostics::{BAR_GRAPH_EMPTY, HueInterpolationDirection};
use neopixel_kit::{ColorMode, Current, FrameRecorder, Strip, colors, create, hsl, rgb};

fn bright_strip(len: usize, mode: ColorMode) -> Strip<FrameRecorder> {
    let mut strip = create(FrameRecorder::new(), 0, len, mode);
    strip.set_brightness(255);
    strip
}

fn pixels(strip: &Strip<FrameRecorder>) -> Vec<u32> {
    (0..strip.len())
        .filter_map(|index| strip.pixel_color(index))
        .collect()
}

fn flush_count(strip: &Strip<FrameRecorder>) -> usize {
    strip.with_transport(|recorder| recorder.len())
}

#[test]
fn rainbow_hits_both_endpoints_and_flushes() {
    let mut strip = bright_strip(3, ColorMode::RgbGrb);
    strip.show_rainbow(1, 360);
    assert_eq!(pixels(&strip), [0xFE_04_01, 0x01_FE_01, 0xFE_01_01]);
    assert_eq!(flush_count(&strip), 1);
}

#[test]
fn rainbow_interpolates_interior_in_hundredths() {
    let mut strip = bright_strip(4, ColorMode::RgbRgb);
    strip.show_rainbow(1, 360);
    assert_eq!(
        pixels(&strip),
        [0xFE_04_01, 0x7F_FE_01, 0x01_FE_FE, 0xFE_01_01]
    );
}

#[test]
fn rainbow_on_single_pixel_takes_first_step() {
    let mut strip = bright_strip(1, ColorMode::RgbGrb);
    strip.show_rainbow(1, 360);
    assert_eq!(pixels(&strip), [0x58_01_FE]);
}

#[test]
fn rainbow_on_empty_view_does_nothing() {
    let mut strip = bright_strip(0, ColorMode::RgbGrb);
    strip.show_rainbow(1, 360);
    assert_eq!(flush_count(&strip), 0);
}

#[test]
fn rainbow_uses_view_brightness() {
    let mut strip = create(FrameRecorder::<u8>::new(), 0, 2, ColorMode::RgbGrb);
    strip.show_rainbow(1, 360);
    assert_eq!(strip.pixel_color(0), Some(0x7F_02_00));
}

#[test]
fn rainbow_directions() {
    let mut strip = bright_strip(3, ColorMode::RgbGrb);

    strip.show_rainbow_with_direction(240, 0, HueInterpolationDirection::CounterClockwise);
    assert_eq!(pixels(&strip), [0x01_01_FE, 0x01_FE_A9, 0xFE_01_01]);

    strip.show_rainbow_with_direction(0, 90, HueInterpolationDirection::Shortest);
    assert_eq!(pixels(&strip), [0xFE_01_01, 0xFE_7F_01, 0x7F_FE_01]);

    strip.show_rainbow_with_direction(0, 270, HueInterpolationDirection::Shortest);
    assert_eq!(pixels(&strip), [0xFE_01_01, 0xFE_01_7F, 0x7F_01_FE]);

    assert_eq!(flush_count(&strip), 3);
}

#[test]
fn rainbow_accepts_extreme_hues() {
    let mut strip = bright_strip(3, ColorMode::RgbRgb);
    // i32::MAX is 127 degrees past a whole number of turns.
    strip.show_rainbow(i32::MAX, 0);
    assert_eq!(
        pixels(&strip),
        [hsl(127, 100, 50), hsl(84, 100, 50), hsl(0, 100, 50)]
    );

    strip.show_rainbow(1, i32::MAX);
    assert_eq!(strip.pixel_color(0), Some(hsl(1, 100, 50)));
    assert_eq!(strip.pixel_color(2), Some(hsl(127, 100, 50)));

    strip.show_rainbow(30_000_000, 0);
    strip.show_rainbow_with_direction(i32::MIN, i32::MAX, HueInterpolationDirection::Shortest);
    assert_eq!(flush_count(&strip), 4);
}

#[test]
fn bar_graph_without_high_shows_yellow_marker() {
    let mut strip = bright_strip(4, ColorMode::RgbGrb);
    strip.set_all_color(colors::WHITE);
    strip.show_bar_graph(5, 0);
    assert_eq!(pixels(&strip), [colors::YELLOW, 0, 0, 0]);
    assert_eq!(flush_count(&strip), 1);
}

#[test]
fn bar_graph_below_one_pixel_shows_dim_amber() {
    let mut strip = bright_strip(4, ColorMode::RgbGrb);
    strip.set_all_color(colors::WHITE);
    strip.show_bar_graph(1, 10);
    assert_eq!(pixels(&strip), [BAR_GRAPH_EMPTY, 0, 0, 0]);
    assert_eq!(flush_count(&strip), 1);
}

#[test]
fn bar_graph_fades_blue_to_red() {
    let mut strip = bright_strip(16, ColorMode::RgbGrb);
    strip.show_bar_graph(-11, 16);

    let expected: Vec<u32> = (0..16_u8)
        .map(|index| {
            if index <= 11 {
                rgb(index * 17, 0, 255 - index * 17)
            } else {
                0
            }
        })
        .collect();
    assert_eq!(pixels(&strip), expected);
}

#[test]
fn bar_graph_over_high_lights_everything() {
    let mut strip = bright_strip(4, ColorMode::RgbGrb);
    strip.show_bar_graph(100, 10);
    assert_eq!(
        pixels(&strip),
        [rgb(0, 0, 255), rgb(85, 0, 170), rgb(170, 0, 85), rgb(255, 0, 0)]
    );

    let mut single = bright_strip(1, ColorMode::RgbGrb);
    single.show_bar_graph(5, 5);
    assert_eq!(pixels(&single), [rgb(0, 0, 255)]);
}

#[test]
fn power_estimate_counts_stored_bytes() {
    let mut strip = bright_strip(10, ColorMode::RgbGrb);
    assert_eq!(strip.power(), 5);
    strip.set_all_color(colors::WHITE);
    assert_eq!(strip.power(), 336);
    assert_eq!(strip.range(0, 4).power(), 134);

    let mut rgbw = bright_strip(2, ColorMode::Rgbw);
    rgbw.set_all_color(colors::WHITE);
    rgbw.set_all_white(255);
    assert_eq!(rgbw.power(), 89);

    assert_eq!(bright_strip(0, ColorMode::RgbGrb).power(), 0);
}

#[test]
fn within_budget_compares_power_estimate() {
    let mut strip = bright_strip(10, ColorMode::RgbGrb);
    strip.set_all_color(colors::WHITE);
    assert!(strip.within_budget(Current::Milliamps(336)));
    assert!(!strip.within_budget(Current::Milliamps(335)));
    assert!(strip.within_budget(Current::Unlimited));
}
