//! QR code encoding modules
//!
//! This module contains the byte-mode encoding pipeline at level L:
//! - Finite-field arithmetic and Reed-Solomon EC codewords
//! - Version capacity and alignment tables
//! - Bitstream construction and block interleaving
//! - Function patterns, codeword placement and mask selection

/// Bitstream construction and block interleaving
pub mod bitstream;
/// Encoder options (padding rule, penalty rules, parallelism)
pub mod config;
/// Format and version information tables and writers
pub mod format;
/// Finder, timing and alignment patterns plus reserved regions
pub mod function_patterns;
/// GF(256) arithmetic
pub mod gf256;
/// Mask application, penalty scoring and mask search
pub mod mask;
/// Zigzag codeword placement
pub mod placement;
/// Reed-Solomon EC codeword generation
pub mod reed_solomon;
/// Per-version capacity and alignment tables
pub mod tables;

use log::debug;

use crate::error::Result;
use crate::models::{ECLevel, QrMatrix};
use config::EncodeOptions;
use function_patterns::FunctionPatterns;
use mask::{PenaltyRules, select_mask};
use placement::place_codewords;

/// Byte-mode QR encoder
pub struct QrEncoder {
    options: EncodeOptions,
}

impl QrEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode `text` into the smallest level-L symbol that holds it
    pub fn encode(&self, text: &[u8]) -> Result<QrMatrix> {
        let (version, codewords) = bitstream::build_codewords(text, &self.options)?;
        debug!(
            "encoding {} bytes as version {} ({} codewords)",
            text.len(),
            version.number(),
            codewords.len()
        );

        let FunctionPatterns { grid, reserved, .. } = FunctionPatterns::build(version);
        let placement = place_codewords(grid, &reserved, &codewords);

        let rules = PenaltyRules {
            rule3: self.options.penalty_rule3,
        };
        let choice = select_mask(
            &placement.modules,
            &reserved,
            version,
            rules,
            self.options.parallel_masks,
        );

        Ok(QrMatrix {
            version,
            error_correction: ECLevel::L,
            mask_pattern: choice.mask,
            modules: choice.matrix,
        })
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}
