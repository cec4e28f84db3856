//! The two encoder strategies. Both implement the same
//! `(frames) -> file` contract; the session never cares which is in use.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{imageops, Delay, DynamicImage, Frame, RgbaImage};
use retrograde::prelude::*;
use std::io::Cursor;

/// Streams frames directly into an animated GIF.
pub struct GifFileEncoder {
    pub frame_rate: u32,
}

impl Encoder<RgbaImage> for GifFileEncoder {
    fn encode(&self, frames: &[RgbaImage], format: OutputFormat) -> Result<EncodedFile, EncodeError> {
        if frames.is_empty() {
            return Err(EncodeError::EncodeFailed("no frames captured".into()));
        }
        let fail = |e: image::ImageError| EncodeError::EncodeFailed(e.to_string());

        let mut data = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut data);
            encoder.set_repeat(Repeat::Infinite).map_err(fail)?;
            let delay = Delay::from_numer_denom_ms(1000, self.frame_rate.max(1));
            for frame in frames {
                encoder
                    .encode_frame(Frame::from_parts(frame.clone(), 0, 0, delay))
                    .map_err(fail)?;
            }
        }
        Ok(EncodedFile {
            data,
            extension: format.extension(),
        })
    }
}

/// Re-encodes every `stride`-th frame into a tiled PNG contact sheet.
/// This is the conversion path; adding it changed nothing in the
/// session logic.
pub struct SheetEncoder {
    pub columns: u32,
    pub stride: usize,
}

impl Default for SheetEncoder {
    fn default() -> Self {
        SheetEncoder {
            columns: 8,
            stride: 16,
        }
    }
}

impl Encoder<RgbaImage> for SheetEncoder {
    fn encode(&self, frames: &[RgbaImage], format: OutputFormat) -> Result<EncodedFile, EncodeError> {
        let picks: Vec<&RgbaImage> = frames.iter().step_by(self.stride.max(1)).collect();
        if picks.is_empty() {
            return Err(EncodeError::EncodeFailed("no frames captured".into()));
        }

        let (fw, fh) = picks[0].dimensions();
        let cols = self.columns.max(1);
        let rows = (picks.len() as u32).div_ceil(cols);
        let mut sheet = RgbaImage::new(fw * cols, fh * rows);
        for (i, frame) in picks.iter().enumerate() {
            let x = (i as u32 % cols) * fw;
            let y = (i as u32 / cols) * fh;
            imageops::overlay(&mut sheet, *frame, x as i64, y as i64);
        }

        let mut data = Vec::new();
        DynamicImage::ImageRgba8(sheet)
            .write_to(&mut Cursor::new(&mut data), image::ImageFormat::Png)
            .map_err(|e| EncodeError::EncodeFailed(e.to_string()))?;
        Ok(EncodedFile {
            data,
            extension: format.extension(),
        })
    }
}

/// Strategy selection from the requested output format.
pub fn encoder_for(format: OutputFormat, frame_rate: u32) -> Box<dyn Encoder<RgbaImage>> {
    match format {
        OutputFormat::Gif => Box::new(GifFileEncoder { frame_rate }),
        OutputFormat::Sheet => Box::new(SheetEncoder::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn frames(n: usize) -> Vec<RgbaImage> {
        (0..n)
            .map(|i| RgbaImage::from_pixel(8, 8, Rgba([i as u8, 0, 0, 255])))
            .collect()
    }

    #[test]
    fn gif_encoder_produces_a_gif() {
        let encoder = GifFileEncoder { frame_rate: 30 };
        let file = encoder.encode(&frames(3), OutputFormat::Gif).unwrap();
        assert_eq!(file.extension, "gif");
        assert!(!file.data.is_empty());
        // GIF89a magic
        assert_eq!(&file.data[0..6], b"GIF89a");
    }

    #[test]
    fn empty_capture_is_an_error() {
        let encoder = GifFileEncoder { frame_rate: 30 };
        assert!(encoder.encode(&[], OutputFormat::Gif).is_err());
        let sheet = SheetEncoder::default();
        assert!(sheet.encode(&[], OutputFormat::Sheet).is_err());
    }

    #[test]
    fn sheet_encoder_tiles_into_a_png() {
        let encoder = SheetEncoder {
            columns: 4,
            stride: 1,
        };
        let file = encoder.encode(&frames(10), OutputFormat::Sheet).unwrap();
        assert_eq!(file.extension, "png");
        // PNG signature
        assert_eq!(&file.data[0..4], &[0x89, b'P', b'N', b'G']);

        let sheet = image::load_from_memory(&file.data).unwrap();
        // 10 picks in 4 columns -> 3 rows
        assert_eq!(sheet.width(), 8 * 4);
        assert_eq!(sheet.height(), 8 * 3);
    }

    #[test]
    fn strategies_come_from_the_format() {
        let frames = frames(2);
        let gif = encoder_for(OutputFormat::Gif, 30)
            .encode(&frames, OutputFormat::Gif)
            .unwrap();
        let sheet = encoder_for(OutputFormat::Sheet, 30)
            .encode(&frames, OutputFormat::Sheet)
            .unwrap();
        assert_eq!(gif.extension, "gif");
        assert_eq!(sheet.extension, "png");
    }
}
