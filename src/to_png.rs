//! Host-only PNG previews of raw strip buffers.
//!
//! Buffers are decoded with the same [`ColorMode`] the strip used, so a preview shows exactly what
//! was (or would be) sent to the LEDs, brightness scaling included. Each LED is drawn as a square
//! cell with a dark margin.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};
use smart_leds::RGB8;

use crate::color::packed_to_rgb8;
use crate::matrix::{MATRIX_SIZE, serpentine_xy};
use crate::strip::ColorMode;

/// One 16×16 panel image, indexed `[y][x]`.
pub type PanelImage = [[RGB8; MATRIX_SIZE]; MATRIX_SIZE];

/// Decode every pixel of `bytes` in buffer order. A trailing partial pixel is dropped.
#[must_use]
pub fn decode_strip(bytes: &[u8], mode: ColorMode) -> Vec<RGB8> {
    bytes
        .chunks_exact(mode.stride())
        .filter_map(|pixel| mode.decode(pixel))
        .map(packed_to_rgb8)
        .collect()
}

/// Decode the first 256 pixels of `bytes` through the serpentine panel wiring.
///
/// Cells past the end of the buffer are black.
#[must_use]
pub fn decode_panel(bytes: &[u8], mode: ColorMode) -> PanelImage {
    let mut image = [[RGB8::default(); MATRIX_SIZE]; MATRIX_SIZE];
    for (index, color) in decode_strip(bytes, mode).into_iter().enumerate() {
        let Some((x, y)) = serpentine_xy(index) else {
            break;
        };
        image[y as usize][x as usize] = color;
    }
    image
}

/// Write `bytes` as a 16×16 panel PNG with `cell_size` pixels per LED.
///
/// # Errors
///
/// Fails if `cell_size` is 0, or if the file cannot be created or encoded.
pub fn write_panel_png(
    bytes: &[u8],
    mode: ColorMode,
    output_path: impl AsRef<Path>,
    cell_size: u32,
) -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_panel(&decode_panel(bytes, mode));
    write_png(&[grid], output_path.as_ref(), cell_size, None)
}

/// Write `bytes` as a single-row PNG with `cell_size` pixels per LED.
///
/// # Errors
///
/// Fails if the buffer holds no pixels, if `cell_size` is 0, or if the file cannot be created or
/// encoded.
pub fn write_strip_png(
    bytes: &[u8],
    mode: ColorMode,
    output_path: impl AsRef<Path>,
    cell_size: u32,
) -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_strip(decode_strip(bytes, mode));
    write_png(&[grid], output_path.as_ref(), cell_size, None)
}

/// Write a sequence of buffers as a looping 16×16 panel APNG, `frame_delay_ms` per frame.
///
/// Pairs with [`FrameRecorder`](crate::FrameRecorder): pass the bytes of each recorded flush to
/// preview a scroll animation.
///
/// # Errors
///
/// Fails if `frames` is empty, if `cell_size` or `frame_delay_ms` is 0, if `frame_delay_ms`
/// exceeds `u16::MAX`, or if the file cannot be created or encoded.
pub fn write_panel_apng<B: AsRef<[u8]>>(
    frames: &[B],
    mode: ColorMode,
    output_path: impl AsRef<Path>,
    cell_size: u32,
    frame_delay_ms: u32,
) -> Result<(), Box<dyn Error>> {
    if frame_delay_ms == 0 {
        return Err("frame_delay_ms must be positive".into());
    }
    let delay = u16::try_from(frame_delay_ms)?;
    let grids: Vec<Grid> = frames
        .iter()
        .map(|bytes| Grid::from_panel(&decode_panel(bytes.as_ref(), mode)))
        .collect();
    write_png(&grids, output_path.as_ref(), cell_size, Some(delay))
}

// Row-major LED colors.
struct Grid {
    width: u32,
    height: u32,
    cells: Vec<RGB8>,
}

impl Grid {
    fn from_panel(image: &PanelImage) -> Self {
        Self {
            width: MATRIX_SIZE as u32,
            height: MATRIX_SIZE as u32,
            cells: image.iter().flatten().copied().collect(),
        }
    }

    fn from_strip(cells: Vec<RGB8>) -> Self {
        Self {
            width: u32::try_from(cells.len()).unwrap_or(u32::MAX),
            height: 1,
            cells,
        }
    }

    // 8-bit RGB image data, `cell_size` pixels per LED, LEDs inset by a dark margin.
    fn render(&self, cell_size: u32) -> Vec<u8> {
        let margin = cell_size / 8;
        let width = self.width * cell_size;
        let height = self.height * cell_size;
        let mut bytes = vec![0_u8; (width * height * 3) as usize];
        for (index, color) in self.cells.iter().enumerate() {
            let index = index as u32;
            let origin_x = (index % self.width) * cell_size;
            let origin_y = (index / self.width) * cell_size;
            for local_y in margin..cell_size - margin {
                for local_x in margin..cell_size - margin {
                    let x = origin_x + local_x;
                    let y = origin_y + local_y;
                    let offset = ((y * width + x) * 3) as usize;
                    bytes[offset..offset + 3].copy_from_slice(&[color.r, color.g, color.b]);
                }
            }
        }
        bytes
    }
}

fn write_png(
    grids: &[Grid],
    output_path: &Path,
    cell_size: u32,
    frame_delay_ms: Option<u16>,
) -> Result<(), Box<dyn Error>> {
    if cell_size == 0 {
        return Err("cell_size must be positive".into());
    }
    let Some(first) = grids.first() else {
        return Err("no frames to write".into());
    };
    if first.cells.is_empty() {
        return Err("buffer holds no pixels".into());
    }
    let width = first.width * cell_size;
    let height = first.height * cell_size;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    if frame_delay_ms.is_some() {
        encoder.set_animated(u32::try_from(grids.len())?, 0)?;
    }
    let mut writer = encoder.write_header()?;
    for grid in grids {
        if let Some(delay) = frame_delay_ms {
            writer.set_frame_delay(delay, 1000)?;
        }
        writer.write_image_data(&grid.render(cell_size))?;
    }
    writer.finish()?;
    Ok(())
}
