use super::BitMatrix;

/// State of a single module while a symbol is under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written by any construction stage
    #[default]
    Unset,
    /// Dark module
    Dark,
    /// Light module
    Light,
}

impl Module {
    /// Module for a boolean "is dark" value
    pub fn from_dark(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// Whether any stage has written this module
    pub fn is_set(self) -> bool {
        self != Module::Unset
    }

    /// Whether this module is dark
    pub fn is_dark(self) -> bool {
        self == Module::Dark
    }
}

/// Square tri-state grid used while laying out a symbol
///
/// Coordinates follow [`BitMatrix`]: `(x, y)` = `(column, row)`.
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    /// Create a grid with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (x, y); out-of-range reads are unset
    pub fn get(&self, x: usize, y: usize) -> Module {
        if x >= self.size || y >= self.size {
            return Module::Unset;
        }
        self.cells[y * self.size + x]
    }

    /// Write a module; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.cells[y * self.size + x] = module;
    }

    /// Write a dark/light module
    pub fn set_dark(&mut self, x: usize, y: usize, dark: bool) {
        self.set(x, y, Module::from_dark(dark));
    }

    /// Number of modules still unset
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_set()).count()
    }

    /// Mask of every module that has been written
    pub fn set_mask(&self) -> BitMatrix {
        self.collect(Module::is_set)
    }

    /// Dark/light matrix; unset modules read as light
    pub fn to_bit_matrix(&self) -> BitMatrix {
        self.collect(Module::is_dark)
    }

    fn collect(&self, pred: impl Fn(Module) -> bool) -> BitMatrix {
        let mut out = BitMatrix::square(self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                if pred(self.cells[y * self.size + x]) {
                    out.set(x, y, true);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unset() {
        let grid = ModuleGrid::new(21);
        assert_eq!(grid.size(), 21);
        assert_eq!(grid.unset_count(), 21 * 21);
        assert_eq!(grid.get(0, 0), Module::Unset);
    }

    #[test]
    fn test_set_and_masks() {
        let mut grid = ModuleGrid::new(5);
        grid.set_dark(1, 2, true);
        grid.set_dark(3, 4, false);

        assert_eq!(grid.get(1, 2), Module::Dark);
        assert_eq!(grid.get(3, 4), Module::Light);
        assert_eq!(grid.unset_count(), 23);

        let set = grid.set_mask();
        assert!(set.get(1, 2) && set.get(3, 4));
        assert_eq!(set.count_ones(), 2);

        let dark = grid.to_bit_matrix();
        assert!(dark.get(1, 2));
        assert!(!dark.get(3, 4));
        assert_eq!(dark.count_ones(), 1);
    }
}
