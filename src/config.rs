//! Runtime options for a render, with serde defaults and JSON loading.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// User-facing knobs of the pipeline. All fields have defaults, so a JSON
/// config may specify any subset.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Maximal number of worker threads per blur call.
    pub njobs: usize,
    /// Detail constant K: smaller means more iterations and finer detail.
    /// 50 is coarse, 300 is very fine.
    pub detail: i64,
    /// Progress logging; has no effect on the output pixels.
    pub verbose: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            njobs: 4,
            detail: 125,
            verbose: false,
        }
    }
}

impl RenderOptions {
    /// Reject configurations before any image work begins.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Invalid image dimensions {}x{}",
                self.width, self.height
            ));
        }
        if self.njobs == 0 {
            return Err("njobs must be positive".to_string());
        }
        if self.detail <= 0 {
            return Err("K must be a positive integer".to_string());
        }
        Ok(())
    }

    /// Total round count, inversely proportional to K: more detail means
    /// more rounds, never fewer than 5.
    pub fn rounds(&self) -> i64 {
        (3000 / self.detail).max(5)
    }

    /// Characteristic size scalar: the truncated square root of the pixel
    /// count, so the blur radius scales with resolution.
    pub fn scale(&self) -> i64 {
        ((self.width * self.height) as f64).sqrt() as i64
    }
}

/// Load options from a JSON file; unspecified fields keep their defaults.
pub fn load_options(path: &Path) -> Result<RenderOptions, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let options: RenderOptions = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(options)
}
