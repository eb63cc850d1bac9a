//! End-to-end render: file bytes → initial fill → iterations → byte image.

use crate::config::RenderOptions;
use crate::fill::initial_image;
use crate::image::io::load_file_bytes;
use crate::image::{ImageFixed, ImageRgb8};
use crate::iterate::{make_iterations, IterationParams, RoundTrace};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Stage timings and per-round traces of a completed render.
#[derive(Clone, Debug, Serialize)]
pub struct RenderReport {
    pub width: usize,
    pub height: usize,
    pub njobs: usize,
    pub detail: i64,
    pub rounds: i64,
    pub fill_ms: f64,
    pub iterations_ms: f64,
    pub total_ms: f64,
    pub round_traces: Vec<RoundTrace>,
}

/// Render the visual hash of in-memory bytes.
pub fn render_bytes(bytes: &[u8], options: &RenderOptions) -> Result<ImageRgb8, String> {
    render_bytes_with_report(bytes, options).map(|(img, _)| img)
}

/// Render the visual hash of a file on disk.
pub fn render_file(path: &Path, options: &RenderOptions) -> Result<ImageRgb8, String> {
    let bytes = load_file_bytes(path)?;
    render_bytes(&bytes, options)
}

/// As [`render_bytes`], also returning stage diagnostics.
pub fn render_bytes_with_report(
    bytes: &[u8],
    options: &RenderOptions,
) -> Result<(ImageRgb8, RenderReport), String> {
    options.validate()?;
    let total_start = Instant::now();

    let fill_start = Instant::now();
    let seeded = initial_image(bytes, options.width, options.height)?;
    let mut working = ImageFixed::from_rgb8(&seeded);
    drop(seeded); // the byte buffer is not needed past this point
    let fill_ms = fill_start.elapsed().as_secs_f64() * 1e3;

    let iter_start = Instant::now();
    let params = IterationParams {
        scale: options.scale(),
        detail: options.detail,
        rounds: options.rounds(),
        njobs: options.njobs,
    };
    let round_traces = make_iterations(&mut working, &params);
    let iterations_ms = iter_start.elapsed().as_secs_f64() * 1e3;

    let img = working.to_rgb8();
    let report = RenderReport {
        width: options.width,
        height: options.height,
        njobs: options.njobs,
        detail: options.detail,
        rounds: params.rounds,
        fill_ms,
        iterations_ms,
        total_ms: total_start.elapsed().as_secs_f64() * 1e3,
        round_traces,
    };
    Ok((img, report))
}

/// As [`render_file`], also returning stage diagnostics.
pub fn render_file_with_report(
    path: &Path,
    options: &RenderOptions,
) -> Result<(ImageRgb8, RenderReport), String> {
    let bytes = load_file_bytes(path)?;
    render_bytes_with_report(&bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_options() -> RenderOptions {
        RenderOptions {
            width: 16,
            height: 16,
            njobs: 2,
            detail: 600, // keeps the test at the 5-round floor
            verbose: false,
        }
    }

    #[test]
    fn report_counts_every_round() {
        let (_, report) = render_bytes_with_report(b"report", &small_options()).unwrap();
        assert_eq!(report.rounds, 5);
        assert_eq!(report.round_traces.len(), 4);
        assert_eq!(report.round_traces[0].round, 1);
        assert!(report.total_ms >= report.iterations_ms);
    }

    #[test]
    fn invalid_options_fail_before_any_work() {
        let bad = RenderOptions {
            njobs: 0,
            ..small_options()
        };
        assert!(render_bytes(b"data", &bad).is_err());
    }

    #[test]
    fn missing_file_is_a_terminal_error() {
        let err = render_file(Path::new("/nonexistent/input.bin"), &small_options());
        assert!(err.is_err());
    }
}
