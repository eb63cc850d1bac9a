//! Owned 3-channel byte image in row-major layout.

/// One 8-bit RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Owned `w × h` grid of byte pixels. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` pixels
    pub data: Vec<PixelRgb8>,
}

impl ImageRgb8 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![PixelRgb8::default(); w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> PixelRgb8 {
        self.data[self.idx(x, y)]
    }

    /// Flatten into interleaved `r, g, b` bytes, the layout PNG encoders
    /// expect.
    pub fn to_interleaved(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for p in &self.data {
            out.extend_from_slice(&[p.r, p.g, p.b]);
        }
        out
    }
}
