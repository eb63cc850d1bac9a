//! 1-D Gaussian kernel in fixed point.
//!
//! The same kernel is applied on both axes; that is valid because the 2-D
//! Gaussian separates into the product of two 1-D Gaussians.

use crate::fixed::Fixed;

/// Build a normalized kernel of `2·radius + 1` weights for the given
/// standard deviation (`sigma > 0`). The weight at offset `k` is
/// `exp(−(k/σ)²/2)`; the whole kernel is then divided by its sum so the
/// weights sum to one within fixed-point tolerance.
///
/// The exponent is evaluated through `k/σ` (at most ~1.6 for any radius the
/// controller derives) rather than `k²/(2σ²)`, whose `k²` intermediate can
/// leave the Q12.52 range on large images.
pub fn gaussian_kernel_1d(radius: i64, sigma: Fixed) -> Vec<Fixed> {
    debug_assert!(radius >= 0);
    debug_assert!(sigma > Fixed::ZERO);

    let half = Fixed::from_ratio(1, 2);
    let mut kernel = Vec::with_capacity((2 * radius + 1) as usize);
    let mut sum = Fixed::ZERO;

    for k in -radius..=radius {
        let u = Fixed::from_int(k) / sigma;
        let v = (-(u * u * half)).exp();
        kernel.push(v);
        sum = sum + v;
    }

    for v in &mut kernel {
        *v = *v / sum;
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel_sum(radius: i64, sigma: f64) -> f64 {
        let kernel = gaussian_kernel_1d(radius, Fixed::from_f64(sigma));
        assert_eq!(kernel.len(), (2 * radius + 1) as usize);
        kernel.iter().map(|w| w.to_f64()).sum()
    }

    #[test]
    fn weights_sum_to_one() {
        for (radius, sigma) in [(0, 0.5), (1, 0.3), (2, 1.0), (7, 2.5), (31, 10.0), (91, 60.0)] {
            let sum = kernel_sum(radius, sigma);
            assert!((sum - 1.0).abs() < 1e-10, "radius={radius} sigma={sigma} sum={sum}");
        }
    }

    #[test]
    fn kernel_is_symmetric_and_peaked_at_centre() {
        let radius = 4;
        let kernel = gaussian_kernel_1d(radius, Fixed::from_f64(1.7));
        for k in 0..radius as usize {
            assert_eq!(kernel[k], kernel[kernel.len() - 1 - k]);
            assert!(kernel[k] < kernel[k + 1]);
        }
    }

    #[test]
    fn zero_radius_kernel_is_identity() {
        let kernel = gaussian_kernel_1d(0, Fixed::from_f64(0.016));
        assert_eq!(kernel.len(), 1);
        assert_eq!(kernel[0], Fixed::ONE);
    }
}
