//! Renders a rainbow, a bar graph, and an eased strip to PNG previews.
//!
//! Usage: `cargo run --features host --bin demo_rainbow_bar -- [output_dir]`

use std::error::Error;
use std::path::PathBuf;

use neopixel_kit::diagnostics::HueInterpolationDirection;
use neopixel_kit::to_png::{write_panel_png, write_strip_png};
use neopixel_kit::{ColorMode, Current, FrameRecorder, Strip, StripConfig, colors};

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/previews"), PathBuf::from);

    let config = StripConfig::new(256, ColorMode::RgbGrb)
        .with_brightness(255)
        .with_max_current(Current::Milliamps(5_000));
    let panel = Strip::with_config(FrameRecorder::<u8>::new(), 0, config);
    println!("brightness after current budget: {}", panel.brightness());

    // One row per effect, cut from the same buffer.
    let mut rainbow = panel.range(0, 16);
    rainbow.show_rainbow(1, 360);
    let mut counter = panel.range(16, 16);
    counter.show_rainbow_with_direction(240, 0, HueInterpolationDirection::CounterClockwise);
    let mut bar = panel.range(32, 16);
    bar.show_bar_graph(11, 16);
    let mut eased = panel.range(48, 16);
    eased.set_all_color(colors::WHITE);
    eased.ease_brightness();

    panel.show();
    println!("estimated draw: {} mA", panel.power());

    let bytes = panel.to_bytes();
    write_panel_png(&bytes, panel.mode(), output_dir.join("rainbow_bar_panel.png"), 24)?;
    let rainbow_bytes = rainbow.len() * panel.mode().stride();
    write_strip_png(
        &bytes[..rainbow_bytes],
        panel.mode(),
        output_dir.join("rainbow_strip.png"),
        24,
    )?;
    println!("wrote previews to {}", output_dir.display());
    Ok(())
}
