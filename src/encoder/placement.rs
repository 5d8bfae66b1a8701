/// Codeword placement in the zigzag data region
use crate::models::{BitMatrix, ModuleGrid};

/// Result of placing a codeword stream into a symbol
pub struct Placement {
    /// Unmasked dark/light modules, every cell set
    pub modules: BitMatrix,
    /// Unreserved modules filled light after the stream ran out
    pub remainder_bits: usize,
}

/// Visit every unreserved module in placement order: column pairs from the
/// right edge leftwards (column 6 skipped), alternating upward and downward,
/// right column of the pair before the left.
pub fn for_each_data_module(reserved: &BitMatrix, mut visit: impl FnMut(usize, usize)) {
    let size = reserved.width();
    let mut upward = true;
    let mut col = size as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            for c in [col, col - 1] {
                let x = c as usize;
                if !reserved.get(x, row) {
                    visit(x, row);
                }
            }
        }

        upward = !upward;
        col -= 2;
    }
}

/// Write `codewords` MSB-first into the unreserved modules of `grid`
pub fn place_codewords(mut grid: ModuleGrid, reserved: &BitMatrix, codewords: &[u8]) -> Placement {
    let total_bits = codewords.len() * 8;
    let mut bit_index = 0usize;
    let mut remainder_bits = 0usize;

    for_each_data_module(reserved, |x, y| {
        let dark = if bit_index < total_bits {
            (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 == 1
        } else {
            remainder_bits += 1;
            false
        };
        bit_index += 1;
        grid.set_dark(x, y, dark);
    });

    debug_assert!(bit_index >= total_bits, "codewords exceed data region");
    debug_assert_eq!(grid.unset_count(), 0);

    Placement {
        modules: grid.to_bit_matrix(),
        remainder_bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::FunctionPatterns;
    use crate::encoder::tables::descriptor;
    use crate::models::Version;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_traversal_starts_bottom_right_upward() {
        let patterns = FunctionPatterns::build(v(1));
        let mut order = Vec::new();
        for_each_data_module(&patterns.reserved, |x, y| order.push((x, y)));
        assert_eq!(&order[..4], &[(20, 20), (19, 20), (20, 19), (19, 19)]);
        // Second pair runs downward, starting below the top-right separator
        let second = order.iter().position(|&(x, _)| x == 18).unwrap();
        assert_eq!(order[second], (18, 9));
    }

    #[test]
    fn test_traversal_skips_timing_column() {
        let patterns = FunctionPatterns::build(v(2));
        let mut order = Vec::new();
        for_each_data_module(&patterns.reserved, |x, y| order.push((x, y)));
        assert!(order.iter().all(|&(x, _)| x != 6));
        assert_eq!(order.len(), patterns.data_modules_count());
        // Left-most pair is columns 1 and 0
        assert!(order.iter().any(|&(x, _)| x == 0));
    }

    #[test]
    fn test_place_codewords_fills_every_data_module() {
        for n in [1u8, 2, 7, 14, 21] {
            let version = v(n);
            let patterns = FunctionPatterns::build(version);
            let codewords = vec![0xFFu8; descriptor(version).total_codewords];
            let reserved = patterns.reserved.clone();
            let placed = place_codewords(patterns.grid, &reserved, &codewords);
            let data_modules = {
                let size = version.size();
                size * size - reserved.count_ones()
            };
            assert_eq!(placed.remainder_bits, data_modules - codewords.len() * 8);

            // All-ones stream: every data module dark except the remainder bits
            let mut dark_data = 0;
            for_each_data_module(&reserved, |x, y| {
                if placed.modules.get(x, y) {
                    dark_data += 1;
                }
            });
            assert_eq!(dark_data, codewords.len() * 8);
        }
    }

    #[test]
    fn test_first_byte_lands_in_bottom_right() {
        let patterns = FunctionPatterns::build(v(1));
        let reserved = patterns.reserved.clone();
        let mut codewords = vec![0u8; 26];
        codewords[0] = 0b1010_0000;
        let placed = place_codewords(patterns.grid, &reserved, &codewords);
        assert!(placed.modules.get(20, 20));
        assert!(!placed.modules.get(19, 20));
        assert!(placed.modules.get(20, 19));
        assert!(!placed.modules.get(19, 19));
        assert_eq!(placed.remainder_bits, 0);
    }
}
