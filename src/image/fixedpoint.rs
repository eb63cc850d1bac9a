//! Owned 3-channel fixed-point image used mid-pipeline.
//!
//! Channels hold `Fixed` values, typically integers in 0..=255 right after
//! conversion but unconstrained after blur/rescale steps. Conversion back to
//! bytes rounds half-up and truncates to 8 bits — wrapping, never clamping;
//! the iteration controller relies on the wrap.

use crate::fixed::Fixed;
use crate::image::rgb8::{ImageRgb8, PixelRgb8};

/// One fixed-point RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelFixed {
    pub r: Fixed,
    pub g: Fixed,
    pub b: Fixed,
}

/// Owned `w × h` grid of fixed-point pixels. Dimensions are fixed at
/// creation; exactly one owner holds the grid at a time, so replacing the
/// working image with a new one drops the predecessor's storage at the move.
#[derive(Clone, Debug)]
pub struct ImageFixed {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` pixels
    pub data: Vec<PixelFixed>,
}

impl ImageFixed {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![PixelFixed::default(); w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> PixelFixed {
        self.data[self.idx(x, y)]
    }

    /// Exact per-channel widening of a byte image; byte values are integers,
    /// so no rounding is involved.
    pub fn from_rgb8(img: &ImageRgb8) -> Self {
        let data = img
            .data
            .iter()
            .map(|p| PixelFixed {
                r: Fixed::from_int(p.r as i64),
                g: Fixed::from_int(p.g as i64),
                b: Fixed::from_int(p.b as i64),
            })
            .collect();
        Self {
            w: img.w,
            h: img.h,
            data,
        }
    }

    /// Round each channel half-up to an integer and truncate to 8 bits.
    /// Out-of-range values wrap; clamping is deliberately not done here.
    pub fn to_rgb8(&self) -> ImageRgb8 {
        let data = self
            .data
            .iter()
            .map(|p| PixelRgb8 {
                r: p.r.to_int_round() as u8,
                g: p.g.to_int_round() as u8,
                b: p.b.to_int_round() as u8,
            })
            .collect();
        ImageRgb8 {
            w: self.w,
            h: self.h,
            data,
        }
    }
}
