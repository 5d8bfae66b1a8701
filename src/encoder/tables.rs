use crate::models::Version;

/// Blocks of equal data length within one version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    pub blocks: usize,
    pub data_codewords: usize,
}

/// Codeword layout of one version at level L
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDescriptor {
    pub total_codewords: usize,
    pub ec_codewords_per_block: usize,
    /// Second group has zero blocks when the version uses a single block size
    pub groups: [BlockGroup; 2],
}

impl VersionDescriptor {
    /// Data codewords across all blocks
    pub fn data_codewords(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.blocks * g.data_codewords)
            .sum()
    }

    pub fn num_blocks(&self) -> usize {
        self.groups.iter().map(|g| g.blocks).sum()
    }

    /// Data length of each block in table order
    pub fn block_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .flat_map(|g| std::iter::repeat_n(g.data_codewords, g.blocks))
    }
}

const fn desc(total: usize, ec: usize, g1: (usize, usize), g2: (usize, usize)) -> VersionDescriptor {
    VersionDescriptor {
        total_codewords: total,
        ec_codewords_per_block: ec,
        groups: [
            BlockGroup {
                blocks: g1.0,
                data_codewords: g1.1,
            },
            BlockGroup {
                blocks: g2.0,
                data_codewords: g2.1,
            },
        ],
    }
}

// ISO/IEC 18004 Table 9, level L. Index: version - 1
static VERSIONS: [VersionDescriptor; 40] = [
    desc(26, 7, (1, 19), (0, 0)),
    desc(44, 10, (1, 34), (0, 0)),
    desc(70, 15, (1, 55), (0, 0)),
    desc(100, 20, (1, 80), (0, 0)),
    desc(134, 26, (1, 108), (0, 0)),
    desc(172, 18, (2, 68), (0, 0)),
    desc(196, 20, (2, 78), (0, 0)),
    desc(242, 24, (2, 97), (0, 0)),
    desc(292, 30, (2, 116), (0, 0)),
    desc(346, 18, (2, 68), (2, 69)),
    desc(404, 20, (4, 81), (0, 0)),
    desc(466, 24, (2, 92), (2, 93)),
    desc(532, 26, (4, 107), (0, 0)),
    desc(581, 30, (3, 115), (1, 116)),
    desc(655, 22, (5, 87), (1, 88)),
    desc(733, 24, (5, 98), (1, 99)),
    desc(815, 28, (1, 107), (5, 108)),
    desc(901, 30, (5, 120), (1, 121)),
    desc(991, 28, (3, 113), (4, 114)),
    desc(1085, 28, (3, 107), (5, 108)),
    desc(1156, 28, (4, 116), (4, 117)),
    desc(1258, 28, (2, 111), (7, 112)),
    desc(1364, 30, (4, 121), (5, 122)),
    desc(1474, 30, (6, 117), (4, 118)),
    desc(1588, 26, (8, 106), (4, 107)),
    desc(1706, 28, (10, 114), (2, 115)),
    desc(1828, 30, (8, 122), (4, 123)),
    desc(1921, 30, (3, 117), (10, 118)),
    desc(2051, 30, (7, 116), (7, 117)),
    desc(2185, 30, (5, 115), (10, 116)),
    desc(2323, 30, (13, 115), (3, 116)),
    desc(2465, 30, (17, 115), (0, 0)),
    desc(2611, 30, (17, 115), (1, 116)),
    desc(2761, 30, (13, 115), (6, 116)),
    desc(2876, 30, (12, 121), (7, 122)),
    desc(3034, 30, (6, 121), (14, 122)),
    desc(3196, 30, (17, 122), (4, 123)),
    desc(3362, 30, (4, 122), (18, 123)),
    desc(3532, 30, (20, 117), (4, 118)),
    desc(3706, 30, (19, 118), (6, 119)),
];

// Alignment pattern centre coordinates (rows and columns). Index: version - 1
static ALIGNMENT_POSITIONS: [&[usize]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

pub fn descriptor(version: Version) -> &'static VersionDescriptor {
    &VERSIONS[version.number() as usize - 1]
}

/// Data codewords available at level L
pub fn data_capacity(version: Version) -> usize {
    descriptor(version).data_codewords()
}

/// Alignment pattern centres; every pair of entries is a candidate centre
pub fn alignment_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}
