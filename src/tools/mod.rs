use crate::encoder::mask::{rule1_runs, rule2_blocks, rule3_finder_like, rule4_balance};
use crate::models::QrMatrix;
use crate::render::PixelSurface;
use std::env;
use std::path::Path;

/// Display size used when no `--size` is given
pub const DEFAULT_TARGET_SIZE: u32 = 280;

/// Target size from `QR_TARGET_SIZE`, falling back to [`DEFAULT_TARGET_SIZE`]
pub fn target_size_from_env() -> u32 {
    match env::var("QR_TARGET_SIZE") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) | Err(_) => DEFAULT_TARGET_SIZE,
            Ok(v) => v,
        },
        Err(_) => DEFAULT_TARGET_SIZE,
    }
}

/// Write a pixel surface to disk; the format follows the file extension.
pub fn save_surface<P: AsRef<Path>>(surface: &PixelSurface, path: P) -> image::ImageResult<()> {
    surface.as_image().save(path)
}

/// Summary statistics for a finished symbol.
#[derive(Debug, Clone, Copy)]
pub struct MatrixStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the symbol.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Compute dark-module stats for a symbol.
pub fn matrix_stats(qr: &QrMatrix) -> MatrixStats {
    let dark = qr.modules.count_ones();
    let total = qr.size() * qr.size();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    MatrixStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

/// Per-rule penalty breakdown of a finished symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyReport {
    /// Runs of five or more.
    pub runs: u32,
    /// Uniform 2x2 blocks.
    pub blocks: u32,
    /// Finder-like sequences (reported even when not used for selection).
    pub finder_like: u32,
    /// Dark/light balance.
    pub balance: u32,
}

impl PenaltyReport {
    /// Sum of the rules used by default mask selection
    pub fn selection_total(&self) -> u32 {
        self.runs + self.blocks + self.balance
    }
}

/// Score every penalty rule against a symbol.
pub fn penalty_report(qr: &QrMatrix) -> PenaltyReport {
    PenaltyReport {
        runs: rule1_runs(&qr.modules),
        blocks: rule2_blocks(&qr.modules),
        finder_like: rule3_finder_like(&qr.modules),
        balance: rule4_balance(&qr.modules),
    }
}
