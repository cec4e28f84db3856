//! Side-by-side composite of the three views, matching the original
//! record canvas: three panels with 20 px gutters and a caption band
//! above. Captions are metadata; hosts that want them rasterized can
//! stamp the strings themselves.

use crate::raster::{BACKGROUND, VIEW_SIZE};
use image::{imageops, RgbaImage};

pub const PANEL_GAP: u32 = 20;
pub const CAPTION_BAND: u32 = 40;

pub const CAPTIONS: [&str; 3] = ["Solar system", "Earth observer", "Mercury trail"];

pub fn composite_size() -> (u32, u32) {
    (VIEW_SIZE * 3 + 2 * PANEL_GAP, VIEW_SIZE + CAPTION_BAND)
}

/// Lays out global, observer, and trail views left to right.
pub fn composite(views: [&RgbaImage; 3]) -> RgbaImage {
    let (w, h) = composite_size();
    let mut canvas = RgbaImage::from_pixel(w, h, BACKGROUND);
    for (i, view) in views.iter().enumerate() {
        let x = i as u32 * (VIEW_SIZE + PANEL_GAP);
        imageops::overlay(&mut canvas, *view, x as i64, CAPTION_BAND as i64);
    }
    canvas
}
