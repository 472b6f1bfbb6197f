//! Scrolls a message across a 16×16 panel and saves the animation as an APNG.
//!
//! Usage: `cargo run --features host --bin demo_scroll_text -- [message] [output_path]`

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use neopixel_kit::config::SCROLL_FRAME_DELAY_MS;
use neopixel_kit::to_png::write_panel_apng;
use neopixel_kit::{ColorMode, FrameRecorder, colors, create};

// Sleeps for real only when asked to, so previews render instantly by default.
struct HostDelay {
    sleep: bool,
}

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        if self.sleep {
            std::thread::sleep(Duration::from_nanos(u64::from(ns)));
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let message = args.next().unwrap_or_else(|| "Rust!".to_owned());
    let output_path = args
        .next()
        .map_or_else(|| PathBuf::from("target/previews/scroll_text.png"), PathBuf::from);
    let sleep = std::env::var_os("NEOPIXEL_DEMO_SLEEP").is_some();

    let mut panel = create(FrameRecorder::<u8>::new(), 0, 256, ColorMode::RgbGrb);
    panel.set_brightness(96);
    panel.show_text(&message, colors::ORANGE, 0, &mut HostDelay { sleep });
    panel.show_text(&message, colors::BLUE, 1, &mut HostDelay { sleep });

    let frames: Vec<Vec<u8>> = panel
        .with_transport(FrameRecorder::take)
        .into_iter()
        .map(|frame| frame.bytes)
        .collect();
    println!("recorded {} frames", frames.len());
    write_panel_apng(
        &frames,
        panel.mode(),
        &output_path,
        16,
        SCROLL_FRAME_DELAY_MS,
    )?;
    println!("wrote APNG to {}", output_path.display());
    Ok(())
}
