//! Q12.52 fixed-point scalar used by the whole pixel pipeline.
//!
//! Purpose
//! - Replace floating point so the output image is bit-identical across
//!   machines and compilers: every operation is plain integer arithmetic.
//!
//! Design
//! - 64-bit signed storage, 12 integer bits, 52 fractional bits.
//! - Multiplication widens to i128 before shifting back down; division
//!   widens the dividend and shifts it up first.
//! - `to_int_round` rounds half-up (add half-unit bias, arithmetic shift).
//! - `exp` uses range reduction over ln 2 plus a Taylor series, enough
//!   precision to evaluate a Gaussian curve.
//!
//! Notes
//! - Every quantity this pipeline produces stays below 2048 in magnitude,
//!   which is why 12 integer bits suffice. Out-of-range values are silently
//!   wrong; nothing here checks for overflow.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 52;

const ONE_RAW: i64 = 1 << FRAC_BITS;
const HALF_RAW: i64 = 1 << (FRAC_BITS - 1);

/// ln 2 in Q12.52 (precomputed to the nearest representable value).
const LN_2: Fixed = Fixed(3_121_657_384_082_680);

/// Taylor terms for `exp` on `|r| <= ln2/2`; the 17th term is below one ulp.
const EXP_TAYLOR_TERMS: i64 = 16;

/// A Q12.52 fixed-point number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Fixed(i64);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(ONE_RAW);

    /// Construct from an integer.
    #[inline]
    pub const fn from_int(x: i64) -> Self {
        Fixed(x << FRAC_BITS)
    }

    /// Construct from a real number, rounding to the nearest representable.
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        Fixed((x * ONE_RAW as f64).round() as i64)
    }

    /// Exact fixed-point quotient `num / den` of two integers.
    ///
    /// Unlike `from_int(num) / from_int(den)` this never materializes `num`
    /// in Q12.52, so it stays correct when `num` alone would exceed the
    /// representable range (e.g. the controller's `i * scale`).
    #[inline]
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Fixed((((num as i128) << FRAC_BITS) / den as i128) as i64)
    }

    /// Round to the nearest integer, halves rounding up.
    #[inline]
    pub const fn to_int_round(self) -> i64 {
        (self.0 + HALF_RAW) >> FRAC_BITS
    }

    /// Lossy conversion for reporting only; never used in the pixel path.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / ONE_RAW as f64
    }

    /// Raw Q12.52 bits.
    #[inline]
    pub const fn to_bits(self) -> i64 {
        self.0
    }

    /// `e^self`.
    ///
    /// Splits `self = k·ln2 + r` with `|r| <= ln2/2`, evaluates `e^r` by
    /// Taylor series and scales by `2^k` with a raw shift.
    pub fn exp(self) -> Fixed {
        // Below this the result is under one ulp.
        if self <= Fixed::from_int(-36) {
            return Fixed::ZERO;
        }

        let k = (self / LN_2).to_int_round();
        let r = self - LN_2 * Fixed::from_int(k);

        let mut term = Fixed::ONE;
        let mut acc = Fixed::ONE;
        for i in 1..=EXP_TAYLOR_TERMS {
            term = term * r / Fixed::from_int(i);
            acc = acc + term;
        }

        if k >= 0 {
            Fixed(acc.0 << (k as u32).min(62))
        } else if k > -63 {
            Fixed(acc.0 >> (-k) as u32)
        } else {
            Fixed::ZERO
        }
    }
}

impl Add for Fixed {
    type Output = Fixed;
    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl Mul for Fixed {
    type Output = Fixed;
    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        let wide = self.0 as i128 * rhs.0 as i128;
        Fixed((wide >> FRAC_BITS) as i64)
    }
}

impl Div for Fixed {
    type Output = Fixed;
    #[inline]
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed((((self.0 as i128) << FRAC_BITS) / rhs.0 as i128) as i64)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({})", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        for x in [-2047i64, -256, -1, 0, 1, 127, 255, 2047] {
            assert_eq!(Fixed::from_int(x).to_int_round(), x);
        }
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(Fixed::from_f64(2.5).to_int_round(), 3);
        assert_eq!(Fixed::from_f64(2.499).to_int_round(), 2);
        assert_eq!(Fixed::from_f64(-2.5).to_int_round(), -2);
        assert_eq!(Fixed::from_f64(-2.501).to_int_round(), -3);
    }

    #[test]
    fn widened_multiply() {
        let a = Fixed::from_f64(1000.5);
        let b = Fixed::from_f64(2.0);
        assert!(((a * b).to_f64() - 2001.0).abs() < 1e-12);
        // A product whose naive 64-bit evaluation would overflow.
        let c = Fixed::from_int(1024);
        assert_eq!((c * Fixed::from_f64(0.5)).to_int_round(), 512);
    }

    #[test]
    fn division_matches_ratio() {
        let q = Fixed::from_int(3) / Fixed::from_int(7);
        assert_eq!(q, Fixed::from_ratio(3, 7));
        assert!((q.to_f64() - 3.0 / 7.0).abs() < 1e-15);
    }

    #[test]
    fn from_ratio_survives_large_numerators() {
        // 23 * 128 = 2944 does not fit the Q12.52 integer range, but the
        // quotient does.
        let sigma = Fixed::from_ratio(23 * 128, 125);
        assert!((sigma.to_f64() - 2944.0 / 125.0).abs() < 1e-12);
    }

    #[test]
    fn exp_matches_f64_on_kernel_range() {
        for i in 0..=400 {
            let x = -4.0 + i as f64 * 0.01; // [-4, 0]
            let got = Fixed::from_f64(x).exp().to_f64();
            assert!(
                (got - x.exp()).abs() < 1e-12,
                "exp({x}) = {got}, want {}",
                x.exp()
            );
        }
    }

    #[test]
    fn exp_positive_and_extremes() {
        for x in [0.5f64, 1.0, 3.0, 5.0] {
            let got = Fixed::from_f64(x).exp().to_f64();
            assert!((got - x.exp()).abs() / x.exp() < 1e-13);
        }
        assert_eq!(Fixed::from_int(-40).exp(), Fixed::ZERO);
        assert_eq!(Fixed::ZERO.exp(), Fixed::ONE);
    }
}
