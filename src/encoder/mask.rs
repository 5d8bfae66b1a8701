//! Mask application, penalty scoring and mask selection
use log::{debug, trace};
use rayon::prelude::*;

use super::format::{stamp_format, stamp_version};
use crate::models::{BitMatrix, MaskPattern, Version};

/// Which optional penalty rules take part in scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenaltyRules {
    /// Finder-look-alike rule (1:1:3:1:1 with four light modules on one side)
    pub rule3: bool,
}

/// XOR `mask` into every unreserved module
pub fn apply_mask(matrix: &mut BitMatrix, reserved: &BitMatrix, mask: MaskPattern) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !reserved.get(x, y) && mask.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Score runs of five or more same-colour modules in every row and column
pub fn rule1_runs(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut score = 0;
    for i in 0..size {
        score += run_penalty((0..size).map(|j| matrix.get(j, i)));
        score += run_penalty((0..size).map(|j| matrix.get(i, j)));
    }
    score
}

fn run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut score = 0;
    let mut run = 0u32;
    let mut last = None;
    for module in line {
        if Some(module) == last {
            run += 1;
        } else {
            if run >= 5 {
                score += run - 2;
            }
            last = Some(module);
            run = 1;
        }
    }
    if run >= 5 {
        score += run - 2;
    }
    score
}

/// Score 3 for every 2x2 block of one colour (overlapping blocks counted)
pub fn rule2_blocks(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut score = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size.saturating_sub(1) {
            let c = matrix.get(x, y);
            if c == matrix.get(x + 1, y) && c == matrix.get(x, y + 1) && c == matrix.get(x + 1, y + 1)
            {
                score += 3;
            }
        }
    }
    score
}

const FINDER_LIKE: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

/// Score 40 for each dark-light-dark-dark-dark-light-dark run with four
/// light modules before or after it, in rows and columns
pub fn rule3_finder_like(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    if size < FINDER_LIKE.len() {
        return 0;
    }
    let mut score = 0;
    for i in 0..size {
        for start in 0..=size - FINDER_LIKE.len() {
            let row = |k: usize| matrix.get(start + k, i);
            let col = |k: usize| matrix.get(i, start + k);
            for get in [&row as &dyn Fn(usize) -> bool, &col] {
                let forward = (0..11).all(|k| get(k) == FINDER_LIKE[k]);
                let backward = (0..11).all(|k| get(k) == FINDER_LIKE[10 - k]);
                if forward {
                    score += 40;
                }
                if backward {
                    score += 40;
                }
            }
        }
    }
    score
}

/// Score 10 for every full 5% the dark ratio deviates from 50%
pub fn rule4_balance(matrix: &BitMatrix) -> u32 {
    let total = matrix.width() * matrix.height();
    if total == 0 {
        return 0;
    }
    let dark = matrix.count_ones();
    // floor(|100 * dark / total - 50| / 5) without floating point
    let deviation = (100 * dark).abs_diff(50 * total);
    (deviation / (5 * total)) as u32 * 10
}

/// Total penalty for a finished, masked symbol
pub fn penalty(matrix: &BitMatrix, rules: PenaltyRules) -> u32 {
    let mut score = rule1_runs(matrix) + rule2_blocks(matrix) + rule4_balance(matrix);
    if rules.rule3 {
        score += rule3_finder_like(matrix);
    }
    score
}

/// Masked copy of `base` with trial format and version info stamped in
pub fn candidate(
    base: &BitMatrix,
    reserved: &BitMatrix,
    version: Version,
    mask: MaskPattern,
) -> BitMatrix {
    let mut matrix = base.clone();
    apply_mask(&mut matrix, reserved, mask);
    stamp_format(&mut matrix, mask);
    stamp_version(&mut matrix, version);
    matrix
}

/// Outcome of the mask search
pub struct MaskChoice {
    pub mask: MaskPattern,
    pub matrix: BitMatrix,
    pub penalty: u32,
}

/// Evaluate all eight masks and keep the lowest penalty (lowest index on ties)
pub fn select_mask(
    base: &BitMatrix,
    reserved: &BitMatrix,
    version: Version,
    rules: PenaltyRules,
    parallel: bool,
) -> MaskChoice {
    let score = |mask: MaskPattern| {
        let matrix = candidate(base, reserved, version, mask);
        let penalty = penalty(&matrix, rules);
        trace!("mask {} penalty {}", mask.index(), penalty);
        MaskChoice {
            mask,
            matrix,
            penalty,
        }
    };

    let candidates: Vec<MaskChoice> = if parallel {
        MaskPattern::ALL.as_slice().par_iter().map(|&m| score(m)).collect()
    } else {
        MaskPattern::ALL.iter().map(|&m| score(m)).collect()
    };

    // ALL is ascending, so min_by_key's first-minimum rule keeps the lowest index
    let choice = candidates
        .into_iter()
        .min_by_key(|c| (c.penalty, c.mask.index()))
        .unwrap_or_else(|| score(MaskPattern::Pattern0));

    debug!(
        "selected mask {} (penalty {}) for version {}",
        choice.mask.index(),
        choice.penalty,
        version.number()
    );
    choice
}
