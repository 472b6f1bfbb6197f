#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for PNG and APNG previews of raw buffers.

use std::error::Error;
use std::fs::File;

use neopixel_kit::to_png::{
    decode_panel, decode_strip, write_panel_apng, write_panel_png, write_strip_png,
};
use neopixel_kit::{ColorMode, FrameRecorder, colors, create};
use smart_leds::RGB8;

fn read_png(path: &std::path::Path) -> Result<(png::OutputInfo, Vec<u8>, u32), Box<dyn Error>> {
    let decoder = png::Decoder::new(File::open(path)?);
    let mut reader = decoder.read_info()?;
    let frame_count = reader
        .info()
        .animation_control
        .as_ref()
        .map_or(1, |control| control.num_frames);
    let mut buffer = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buffer)?;
    buffer.truncate(info.buffer_size());
    Ok((info, buffer, frame_count))
}

#[test]
fn decode_panel_follows_serpentine_wiring() {
    let mut strip = create(FrameRecorder::<u8>::new(), 0, 256, ColorMode::RgbGrb);
    strip.set_brightness(255);
    strip.set_matrix_color_x_y(0, 0, colors::RED);
    strip.set_matrix_color_x_y(5, 1, colors::BLUE);

    let image = decode_panel(&strip.to_bytes(), ColorMode::RgbGrb);
    assert_eq!(image[0][0], RGB8::new(255, 0, 0));
    assert_eq!(image[1][5], RGB8::new(0, 0, 255));
    assert_eq!(image[0][1], RGB8::default());
}

#[test]
fn decode_strip_respects_mode() {
    let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(
        decode_strip(&bytes, ColorMode::RgbGrb),
        [RGB8::new(2, 1, 3), RGB8::new(5, 4, 6), RGB8::new(8, 7, 9)]
    );
    assert_eq!(
        decode_strip(&bytes, ColorMode::Rgbw),
        [RGB8::new(2, 1, 3), RGB8::new(6, 5, 7)]
    );
}

#[test]
fn panel_png_has_one_cell_per_led() -> Result<(), Box<dyn Error>> {
    let mut strip = create(FrameRecorder::<u8>::new(), 0, 256, ColorMode::RgbGrb);
    strip.set_brightness(255);
    strip.set_matrix_color_x_y(1, 0, colors::GREEN);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested/panel.png");
    write_panel_png(&strip.to_bytes(), strip.mode(), &path, 8)?;

    let (info, pixels, frames) = read_png(&path)?;
    assert_eq!((info.width, info.height), (128, 128));
    assert_eq!(frames, 1);

    // Center of cell (1, 0) is lit; its margin is dark.
    let center = ((4 * 128) + 8 + 4) * 3;
    assert_eq!(pixels[center..center + 3], [0, 255, 0]);
    let margin = 8 * 3;
    assert_eq!(pixels[margin..margin + 3], [0, 0, 0]);
    Ok(())
}

#[test]
fn strip_png_is_one_row() -> Result<(), Box<dyn Error>> {
    let mut strip = create(FrameRecorder::<u8>::new(), 0, 5, ColorMode::RgbRgb);
    strip.set_brightness(255);
    strip.show_rainbow(1, 360);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("strip.png");
    write_strip_png(&strip.to_bytes(), strip.mode(), &path, 4)?;

    let (info, _, _) = read_png(&path)?;
    assert_eq!((info.width, info.height), (20, 4));
    Ok(())
}

#[test]
fn scroll_frames_become_apng() -> Result<(), Box<dyn Error>> {
    struct NoDelay;
    impl embedded_hal::delay::DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    let mut strip = create(FrameRecorder::<u8>::new(), 0, 256, ColorMode::RgbGrb);
    strip.show_text("Hi", colors::ORANGE, 0, &mut NoDelay);
    let frames: Vec<Vec<u8>> = strip
        .with_transport(FrameRecorder::take)
        .into_iter()
        .map(|frame| frame.bytes)
        .collect();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scroll.png");
    write_panel_apng(&frames, strip.mode(), &path, 2, 150)?;

    let (info, _, frame_count) = read_png(&path)?;
    assert_eq!((info.width, info.height), (32, 32));
    assert_eq!(usize::try_from(frame_count)?, frames.len());
    Ok(())
}

#[test]
fn invalid_arguments_are_errors() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let bytes = vec![0_u8; 3 * 256];
    assert!(write_panel_png(&bytes, ColorMode::RgbGrb, dir.path().join("a.png"), 0).is_err());
    assert!(write_strip_png(&[], ColorMode::RgbGrb, dir.path().join("b.png"), 4).is_err());
    let no_frames: [Vec<u8>; 0] = [];
    let path = dir.path().join("c.png");
    assert!(write_panel_apng(&no_frames, ColorMode::RgbGrb, &path, 4, 150).is_err());
    let path = dir.path().join("d.png");
    assert!(write_panel_apng(&[bytes], ColorMode::RgbGrb, &path, 4, 0).is_err());
    Ok(())
}
