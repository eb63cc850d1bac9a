//! Deterministic pseudo-random byte corpora for end-to-end tests.

/// Generate `len` bytes from a xorshift stream seeded by `seed`. Independent
/// of the library's own generator on purpose.
pub fn pseudo_random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.max(1);
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        out.push(state as u8);
    }
    out
}

/// Count pixels that differ between two same-sized images.
pub fn differing_pixels(a: &vishash::image::ImageRgb8, b: &vishash::image::ImageRgb8) -> usize {
    assert_eq!((a.w, a.h), (b.w, b.h));
    a.data.iter().zip(&b.data).filter(|(x, y)| x != y).count()
}
