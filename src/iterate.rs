//! Iteration controller: repeated blur + rescale rounds.
//!
//! Each round derives a growing sigma, blurs the working image into a fresh
//! buffer (the predecessor is dropped at the move), then re-amplifies every
//! channel with a contrast factor that decays from 7 toward 2, wrapping
//! intensities modulo 256. The wrap, not a clamp, is what keeps the diffused
//! signal visually busy instead of collapsing to flat gray.
//!
//! Rounds are strictly sequential; parallelism only happens inside a single
//! blur call.

use crate::blur::{gaussian_blur, gaussian_kernel_1d};
use crate::fixed::Fixed;
use crate::image::ImageFixed;
use serde::Serialize;
use std::time::Instant;

/// Parameters for one render's iteration loop.
#[derive(Clone, Copy, Debug)]
pub struct IterationParams {
    /// Characteristic image-size scalar (the square root of the pixel count).
    pub scale: i64,
    /// Detail constant K; smaller means more rounds and finer detail.
    pub detail: i64,
    /// Total round count n; rounds run for i in 1..n.
    pub rounds: i64,
    /// Worker count for each blur call.
    pub njobs: usize,
}

/// Timing and shape of one completed round, for diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct RoundTrace {
    pub round: i64,
    pub sigma: f64,
    pub kernel_width: i64,
    pub elapsed_ms: f64,
}

/// Drive `rounds − 1` blur/rescale rounds over `img` in place, returning a
/// per-round trace.
pub fn make_iterations(img: &mut ImageFixed, params: &IterationParams) -> Vec<RoundTrace> {
    let n = params.rounds;
    log::debug!(
        "starting {} iterations with K={} scale={}",
        n - 1,
        params.detail,
        params.scale
    );

    let mut trace = Vec::with_capacity((n - 1).max(0) as usize);
    for i in 1..n {
        log::info!("iteration {i}/{}", n - 1);
        let start = Instant::now();

        let sigma = Fixed::from_ratio(i * params.scale, params.detail);
        let kernel_width = (Fixed::from_int(3) * sigma + Fixed::ONE).to_int_round();
        let radius = kernel_width / 2;
        log::debug!(
            "gaussian blur: kernel_width={kernel_width} sigma={}",
            sigma.to_f64()
        );

        let kernel = gaussian_kernel_1d(radius, sigma);
        let blurred = gaussian_blur(img, &kernel, radius, params.njobs);
        *img = blurred; // predecessor buffer dropped here

        let factor =
            Fixed::from_int(2) + Fixed::from_int(5) * Fixed::from_ratio(n - i, n);
        rescale_wrap(img, factor);

        trace.push(RoundTrace {
            round: i,
            sigma: sigma.to_f64(),
            kernel_width,
            elapsed_ms: start.elapsed().as_secs_f64() * 1e3,
        });
    }
    trace
}

/// Multiply every channel by `factor`, round to an integer and wrap modulo
/// 256, then convert back to fixed point.
pub fn rescale_wrap(img: &mut ImageFixed, factor: Fixed) {
    for p in &mut img.data {
        p.r = Fixed::from_int((p.r * factor).to_int_round() % 256);
        p.g = Fixed::from_int((p.g * factor).to_int_round() % 256);
        p.b = Fixed::from_int((p.b * factor).to_int_round() % 256);
    }
}
