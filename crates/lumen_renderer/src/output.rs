//! Writing rendered images to disk.
//!
//! `.ppm` files are written as plain-text P3. Anything else is handed to the
//! `image` crate, which picks the encoder from the extension. Both paths use
//! the same clamped 8-bit values.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {actual} pixels, expected {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Write `image` as ASCII PPM (P3).
///
/// Header `P3`, then `<width> <height>`, then `255`, then one `R G B` line per
/// pixel in row-major order.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    check_size(image)?;

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;
    for color in &image.pixels {
        let [r, g, b] = color.to_rgb8();
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    writer.flush()?;
    Ok(())
}

impl ImageBuffer {
    /// Save to `path`, choosing the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> OutputResult<()> {
        let path = path.as_ref();
        check_size(self)?;

        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let file = File::create(path)?;
            write_ppm(self, BufWriter::new(file))?;
        } else {
            let rgb = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8()).ok_or(
                OutputError::BufferSize {
                    width: self.width,
                    height: self.height,
                    actual: self.pixels.len(),
                },
            )?;
            rgb.save(path)?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

fn check_size(image: &ImageBuffer) -> OutputResult<()> {
    let expected = image.width as usize * image.height as usize;
    if image.pixels.len() != expected {
        return Err(OutputError::BufferSize {
            width: image.width,
            height: image.height,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    #[test]
    fn test_write_ppm() {
        let mut img = ImageBuffer::new(2, 2);
        img.set(0, 0, Color::new(255.0, 0.0, 0.0));
        img.set(1, 0, Color::new(12.7, 300.0, -1.0));
        img.set(1, 1, Color::splat(128.0));

        let mut out = Vec::new();
        write_ppm(&img, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 0 0\n12 255 0\n0 0 0\n128 128 128\n"
        );
    }

    #[test]
    fn test_write_ppm_rejects_bad_buffer() {
        let mut img = ImageBuffer::new(2, 2);
        img.pixels.pop();

        let err = write_ppm(&img, Vec::new()).unwrap_err();
        assert!(matches!(err, OutputError::BufferSize { actual: 3, .. }));
    }
}
