//! Initial pixel fill: file bytes × generator draws → first byte image.
//!
//! The loop runs `max(area, file_len)` steps so that every file byte is
//! consumed at least once even when the image is smaller than the file, and
//! the whole image is written even when the file is smaller than the image.
//! Both sequences wrap by modulo indexing.

use crate::image::{ImageRgb8, PixelRgb8};
use crate::rng::Lcg32;

/// Build the initial image from raw file bytes. Rejects empty input: with no
/// bytes there is nothing to hash.
pub fn initial_image(bytes: &[u8], width: usize, height: usize) -> Result<ImageRgb8, String> {
    if bytes.is_empty() {
        return Err("Input file is empty, nothing to hash".to_string());
    }

    let mut rng = Lcg32::seed_from_bytes(bytes);
    let mut img = ImageRgb8::new(width, height);
    let area = width * height;

    let steps = area.max(bytes.len());
    for i in 0..steps {
        let byte = bytes[i % bytes.len()];
        let draw = rng.next_u32();
        img.data[i % area] = combine(byte, draw);
    }
    Ok(img)
}

/// XOR a file byte against three byte lanes of one generator draw.
#[inline]
fn combine(byte: u8, draw: u32) -> PixelRgb8 {
    PixelRgb8 {
        r: byte ^ draw as u8,
        g: byte ^ (draw >> 8) as u8,
        b: byte ^ (draw >> 16) as u8,
    }
}
