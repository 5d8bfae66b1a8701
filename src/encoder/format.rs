/// Format and version information for QR symbols
///
/// Format info is 15 bits (5 data + 10 BCH), version info is 18 bits
/// (6 data + 12 BCH). Bit 0 is the least significant bit.
use crate::models::{BitMatrix, MaskPattern, Version};

/// Format info for level L, indexed by mask pattern (already XORed with 0x5412)
pub const FORMAT_INFO_L: [u16; 8] = [
    0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976,
];

// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

const fn build_version_info() -> [u32; 41] {
    let mut table = [0u32; 41];
    let mut version = 7;
    while version <= 40 {
        let mut rem = version as u32;
        let mut i = 0;
        while i < 12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
            i += 1;
        }
        table[version] = ((version as u32) << 12) | (rem & 0xFFF);
        version += 1;
    }
    table
}

/// Version info indexed by version number; zero below version 7
pub static VERSION_INFO: [u32; 41] = build_version_info();

/// Module positions `(x, y)` for both copies of the 15 format bits
pub fn format_positions(size: usize) -> [[(usize, usize); 15]; 2] {
    let mut first = [(0, 0); 15];
    let mut second = [(0, 0); 15];
    for (i, slot) in first.iter_mut().enumerate() {
        *slot = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
    }
    for (i, slot) in second.iter_mut().enumerate() {
        *slot = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
    }
    [first, second]
}

/// Module positions `(x, y)` for both copies of the 18 version bits
pub fn version_positions(size: usize) -> [[(usize, usize); 18]; 2] {
    let mut top_right = [(0, 0); 18];
    let mut bottom_left = [(0, 0); 18];
    for i in 0..18 {
        let a = size - 11 + i % 3;
        let b = i / 3;
        top_right[i] = (a, b);
        bottom_left[i] = (b, a);
    }
    [top_right, bottom_left]
}

/// The always-dark module beside the bottom-left finder
pub fn dark_module(size: usize) -> (usize, usize) {
    (8, size - 8)
}

/// Write both copies of the format info for `mask` at level L
pub fn stamp_format(matrix: &mut BitMatrix, mask: MaskPattern) {
    let bits = FORMAT_INFO_L[mask.index()];
    for copy in format_positions(matrix.width()) {
        for (i, (x, y)) in copy.into_iter().enumerate() {
            matrix.set(x, y, (bits >> i) & 1 == 1);
        }
    }
}

/// Write both copies of the version info; no-op below version 7
pub fn stamp_version(matrix: &mut BitMatrix, version: Version) {
    if !version.has_version_info() {
        return;
    }
    let bits = VERSION_INFO[version.number() as usize];
    for copy in version_positions(matrix.width()) {
        for (i, (x, y)) in copy.into_iter().enumerate() {
            matrix.set(x, y, (bits >> i) & 1 == 1);
        }
    }
}
