//! Parallel separable Gaussian blur.
//!
//! Design
//! - Two 1-D passes: vertical into a worker-private intermediate, then
//!   horizontal into the destination.
//! - Border handling clamps out-of-range indices to the nearest valid
//!   row/column (replicate border).
//! - The destination is split into contiguous row bands, one worker each;
//!   bands are disjoint, so no locking is needed. The source is shared
//!   read-only for the duration of the call, which is what makes neighbour
//!   lookups outside a worker's own band safe.
//! - The call is a full fork/join: it returns only once every band is done.
//!
//! Each channel keeps its own accumulator in both passes; the result is
//! independent of the worker count.

use crate::fixed::Fixed;
use crate::image::{ImageFixed, PixelFixed};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Blur `src` with a normalized 1-D kernel of `2·radius + 1` weights applied
/// on both axes, splitting the work across up to `njobs` row bands.
pub fn gaussian_blur(src: &ImageFixed, kernel: &[Fixed], radius: i64, njobs: usize) -> ImageFixed {
    debug_assert_eq!(kernel.len(), (2 * radius + 1) as usize);

    let mut dst = ImageFixed::new(src.w, src.h);
    if src.w == 0 || src.h == 0 {
        return dst;
    }

    let band_rows = rows_per_band(src.h, njobs);
    let band_len = band_rows * src.w;
    blur_bands(src, &mut dst.data, band_len, band_rows, kernel, radius);
    dst
}

/// Rows per worker band: `ceil(height / njobs)`, so the bands cover
/// `[0, height)` exactly and only the last band may fall short.
pub(crate) fn rows_per_band(height: usize, njobs: usize) -> usize {
    height.div_ceil(njobs.max(1)).max(1)
}

#[cfg(feature = "parallel")]
fn blur_bands(
    src: &ImageFixed,
    dst: &mut [PixelFixed],
    band_len: usize,
    band_rows: usize,
    kernel: &[Fixed],
    radius: i64,
) {
    dst.par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(job, band)| blur_band(src, band, job * band_rows, kernel, radius));
}

#[cfg(not(feature = "parallel"))]
fn blur_bands(
    src: &ImageFixed,
    dst: &mut [PixelFixed],
    band_len: usize,
    band_rows: usize,
    kernel: &[Fixed],
    radius: i64,
) {
    for (job, band) in dst.chunks_mut(band_len).enumerate() {
        blur_band(src, band, job * band_rows, kernel, radius);
    }
}

/// Convolve one band of rows starting at `y0`. The intermediate buffer is
/// private to the worker and sized like the full image; only this band's
/// rows are written to it and read back.
fn blur_band(src: &ImageFixed, band: &mut [PixelFixed], y0: usize, kernel: &[Fixed], radius: i64) {
    let w = src.w;
    let h = src.h;
    let rows = band.len() / w;

    let mut tmp = vec![PixelFixed::default(); w * h];

    // Vertical pass.
    for y in y0..y0 + rows {
        for x in 0..w {
            let mut r = Fixed::ZERO;
            let mut g = Fixed::ZERO;
            let mut b = Fixed::ZERO;
            for k in -radius..=radius {
                let yy = (y as i64 + k).clamp(0, h as i64 - 1) as usize;
                let p = src.data[yy * w + x];
                let wgt = kernel[(k + radius) as usize];
                r = r + wgt * p.r;
                g = g + wgt * p.g;
                b = b + wgt * p.b;
            }
            tmp[y * w + x] = PixelFixed { r, g, b };
        }
    }

    // Horizontal pass.
    for (dy, out_row) in band.chunks_mut(w).enumerate() {
        let y = y0 + dy;
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut r = Fixed::ZERO;
            let mut g = Fixed::ZERO;
            let mut b = Fixed::ZERO;
            for k in -radius..=radius {
                let xx = (x as i64 + k).clamp(0, w as i64 - 1) as usize;
                let p = tmp[y * w + xx];
                let wgt = kernel[(k + radius) as usize];
                r = r + wgt * p.r;
                g = g + wgt * p.g;
                b = b + wgt * p.b;
            }
            *out = PixelFixed { r, g, b };
        }
    }
}
