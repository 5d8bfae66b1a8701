use super::BitMatrix;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version
    pub const MIN: Version = Version(1);
    /// Largest version
    pub const MAX: Version = Version(40);

    /// Version from its number, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Version(number))
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Versions 7 and up carry two copies of the 18-bit version info
    pub fn has_version_info(self) -> bool {
        self.0 >= 7
    }

    /// Width of the character-count field in byte mode
    pub fn char_count_bits(self) -> usize {
        if self.0 < 10 { 8 } else { 16 }
    }

    /// Iterate every version in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

/// Error correction level
///
/// Only level L (~7% recovery capacity) is produced by this encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    #[default]
    L,
}

impl ECLevel {
    /// 2-bit code used in the format information (L = 01)
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

type MaskFn = fn(usize, usize) -> bool;

// Indexed by mask number; arguments are (row, col).
const MASK_FUNCTIONS: [MaskFn; 8] = [
    |i, j| (i + j) % 2 == 0,
    |i, _| i % 2 == 0,
    |_, j| j % 3 == 0,
    |i, j| (i + j) % 3 == 0,
    |i, j| (i / 2 + j / 3) % 2 == 0,
    |i, j| (i * j) % 2 + (i * j) % 3 == 0,
    |i, j| ((i * j) % 2 + (i * j) % 3) % 2 == 0,
    |i, j| ((i + j) % 2 + (i * j) % 3) % 2 == 0,
];

impl MaskPattern {
    /// All patterns in ascending index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Numeric index (0-7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(self, i: usize, j: usize) -> bool {
        MASK_FUNCTIONS[self.index()](i, j)
    }
}

/// A finished QR symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    /// QR code version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask pattern used
    pub mask_pattern: MaskPattern,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
}

impl QrMatrix {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Whether the module at column `x`, row `y` is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Render as text, two characters per module, with `quiet_zone`
    /// light modules on each side
    pub fn to_ascii(&self, quiet_zone: usize) -> String {
        let size = self.size();
        let total = size + 2 * quiet_zone;
        let mut out = String::with_capacity(total * (total * 2 + 1));
        for y in 0..total {
            for x in 0..total {
                let dark = x >= quiet_zone
                    && y >= quiet_zone
                    && self.is_dark(x - quiet_zone, y - quiet_zone);
                out.push_str(if dark { "##" } else { "  " });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).map(Version::size), Some(21));
        assert_eq!(Version::new(2).map(Version::size), Some(25));
        assert_eq!(Version::MAX.size(), 177);
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
    }

    #[test]
    fn test_version_properties() {
        let sizes: Vec<usize> = Version::all().map(Version::size).collect();
        assert_eq!(sizes.len(), 40);
        assert!(sizes.iter().all(|s| s % 2 == 1));
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));

        assert!(!Version::new(6).is_some_and(Version::has_version_info));
        assert!(Version::new(7).is_some_and(Version::has_version_info));
        assert_eq!(Version::new(9).map(Version::char_count_bits), Some(8));
        assert_eq!(Version::new(10).map(Version::char_count_bits), Some(16));
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        assert!(MaskPattern::Pattern1.is_masked(2, 7));
        assert!(!MaskPattern::Pattern1.is_masked(3, 0));
        assert!(MaskPattern::Pattern2.is_masked(5, 3));
        assert!(!MaskPattern::Pattern2.is_masked(3, 5));
        assert!(MaskPattern::Pattern4.is_masked(0, 0));
        assert!(!MaskPattern::Pattern4.is_masked(0, 3));
        assert!(MaskPattern::Pattern5.is_masked(0, 5));
        assert!(!MaskPattern::Pattern5.is_masked(1, 1));
    }

    #[test]
    fn test_mask_from_bits() {
        for (i, mask) in MaskPattern::ALL.iter().enumerate() {
            assert_eq!(MaskPattern::from_bits(i as u8), Some(*mask));
            assert_eq!(mask.index(), i);
        }
        assert_eq!(MaskPattern::from_bits(8), None);
    }

    #[test]
    fn test_ascii_dump() {
        let mut modules = BitMatrix::square(21);
        modules.set(0, 0, true);
        let qr = QrMatrix {
            version: Version::MIN,
            error_correction: ECLevel::L,
            mask_pattern: MaskPattern::Pattern0,
            modules,
        };
        let text = qr.to_ascii(1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 23);
        assert_eq!(lines[0].trim(), "");
        assert!(lines[1].starts_with("  ##"));
    }
}
