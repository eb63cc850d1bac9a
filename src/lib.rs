#![doc = include_str!("../README.md")]

pub mod blur;
pub mod config;
pub mod fill;
pub mod fixed;
pub mod image;
pub mod iterate;
pub mod pipeline;
pub mod rng;

// --- High-level re-exports -------------------------------------------------

// Main entry points: render functions + options.
pub use crate::config::{load_options, RenderOptions};
pub use crate::pipeline::{
    render_bytes, render_bytes_with_report, render_file, render_file_with_report, RenderReport,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use vishash::prelude::*;
///
/// # fn main() {
/// let opts = RenderOptions {
///     width: 64,
///     height: 64,
///     ..Default::default()
/// };
/// let img = render_bytes(b"any file content", &opts).unwrap();
/// println!("{}x{} pixels", img.w, img.h);
/// # }
/// ```
pub mod prelude {
    pub use crate::config::RenderOptions;
    pub use crate::image::{ImageRgb8, PixelRgb8};
    pub use crate::pipeline::{render_bytes, render_file};
}
