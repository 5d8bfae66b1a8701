use super::format::{dark_module, format_positions, version_positions};
use super::tables::alignment_positions;
use crate::models::{BitMatrix, Module, ModuleGrid, Version};

/// Function-pattern layout for a specific QR version.
///
/// `reserved` is true for every module written here (finders, separators,
/// timing, alignment, format/version placeholders, dark module); data and
/// masking only touch the remaining modules.
pub struct FunctionPatterns {
    pub grid: ModuleGrid,
    pub reserved: BitMatrix,
    version: Version,
}

impl FunctionPatterns {
    pub fn build(version: Version) -> Self {
        let size = version.size();
        let mut grid = ModuleGrid::new(size);

        Self::place_finder(&mut grid, 0, 0);
        Self::place_finder(&mut grid, size - 7, 0);
        Self::place_finder(&mut grid, 0, size - 7);

        // Timing patterns (row 6 and column 6), between the finders
        for i in 0..size {
            if !grid.get(i, 6).is_set() {
                grid.set_dark(i, 6, i % 2 == 0);
            }
            if !grid.get(6, i).is_set() {
                grid.set_dark(6, i, i % 2 == 0);
            }
        }

        let align = alignment_positions(version);
        if let (Some(&first), Some(&last)) = (align.first(), align.last()) {
            for &cx in align {
                for &cy in align {
                    // Skip the three finder corners
                    let in_tl = cx == first && cy == first;
                    let in_tr = cx == last && cy == first;
                    let in_bl = cx == first && cy == last;
                    if in_tl || in_tr || in_bl {
                        continue;
                    }
                    Self::place_alignment(&mut grid, cx, cy);
                }
            }
        }

        // Format info placeholders
        for copy in format_positions(size) {
            for (x, y) in copy {
                grid.set(x, y, Module::Light);
            }
        }

        if version.has_version_info() {
            for copy in version_positions(size) {
                for (x, y) in copy {
                    grid.set(x, y, Module::Light);
                }
            }
        }

        let (dx, dy) = dark_module(size);
        grid.set(dx, dy, Module::Dark);

        let reserved = grid.set_mask();
        Self {
            grid,
            reserved,
            version,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved.get(x, y)
    }

    /// Modules left for codeword placement
    pub fn data_modules_count(&self) -> usize {
        let size = self.grid.size();
        size * size - self.reserved.count_ones()
    }

    /// 7x7 finder with its one-module light separator, clipped to bounds
    fn place_finder(grid: &mut ModuleGrid, x: usize, y: usize) {
        for dy in -1i32..=7 {
            for dx in -1i32..=7 {
                let xx = x as i32 + dx;
                let yy = y as i32 + dy;
                if xx < 0 || yy < 0 {
                    continue;
                }
                // Chebyshev distance from the finder centre
                let dist = (dx - 3).abs().max((dy - 3).abs());
                let dark = dist != 2 && dist != 4;
                grid.set_dark(xx as usize, yy as usize, dark);
            }
        }
    }

    /// 5x5 alignment pattern centred on (cx, cy)
    fn place_alignment(grid: &mut ModuleGrid, cx: usize, cy: usize) {
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                let dark = dx.abs().max(dy.abs()) != 1;
                grid.set_dark(
                    (cx as i32 + dx) as usize,
                    (cy as i32 + dy) as usize,
                    dark,
                );
            }
        }
    }
}
