/// Byte-mode bitstream construction and codeword interleaving
use super::config::{EncodeOptions, PadStyle};
use super::reed_solomon::ReedSolomonEncoder;
use super::tables::{data_capacity, descriptor};
use crate::error::{EncodeError, Result};
use crate::models::Version;

const MODE_BYTE: u32 = 0b0100;
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Append-only bit accumulator, most significant bit first
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, MSB first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pack into bytes, zero-padding the final partial byte
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Mode indicator plus character count field
fn overhead_bits(version: Version) -> usize {
    4 + version.char_count_bits()
}

fn fits(len: usize, version: Version) -> bool {
    8 * data_capacity(version) >= overhead_bits(version) + 8 * len
}

/// Largest byte-mode payload any version can hold at level L
pub fn max_payload_len() -> usize {
    (8 * data_capacity(Version::MAX) - overhead_bits(Version::MAX)) / 8
}

/// Smallest version whose data capacity holds `len` payload bytes
pub fn select_version(len: usize) -> Result<Version> {
    Version::all()
        .find(|&v| fits(len, v))
        .ok_or(EncodeError::DataTooLarge {
            len,
            max: max_payload_len(),
        })
}

/// Mode, count, payload, terminator and filler for `version`'s data capacity
pub fn encode_payload(text: &[u8], version: Version, pad: PadStyle) -> Vec<u8> {
    let capacity = data_capacity(version);
    let capacity_bits = 8 * capacity;

    let mut buffer = BitBuffer::new();
    buffer.append_bits(MODE_BYTE, 4);
    buffer.append_bits(text.len() as u32, version.char_count_bits());
    for &byte in text {
        buffer.append_bits(byte as u32, 8);
    }

    let terminator = 4usize.min(capacity_bits.saturating_sub(buffer.len()));
    buffer.append_bits(0, terminator);

    let mut bytes = buffer.to_bytes();
    let mut filler = 0usize;
    while bytes.len() < capacity {
        let next = match pad {
            PadStyle::Canonical => PAD_BYTES[filler % 2],
            PadStyle::OffsetParity => PAD_BYTES[bytes.len() % 2],
        };
        bytes.push(next);
        filler += 1;
    }
    bytes
}

/// Split `payload` into blocks, append EC codewords and interleave
pub fn interleave(payload: &[u8], version: Version) -> Vec<u8> {
    let desc = descriptor(version);
    debug_assert_eq!(payload.len(), desc.data_codewords());

    let rs = ReedSolomonEncoder::new(desc.ec_codewords_per_block);
    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(desc.num_blocks());
    let mut ec_blocks: Vec<Vec<u8>> = Vec::with_capacity(desc.num_blocks());

    let mut offset = 0;
    for len in desc.block_lengths() {
        let block = &payload[offset..offset + len];
        offset += len;
        ec_blocks.push(rs.encode_block(block));
        data_blocks.push(block);
    }

    let mut out = Vec::with_capacity(desc.total_codewords);
    let longest = data_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..longest {
        out.extend(data_blocks.iter().filter_map(|b| b.get(i)));
    }
    for i in 0..desc.ec_codewords_per_block {
        out.extend(ec_blocks.iter().map(|b| b[i]));
    }
    out
}

/// Version selection, payload encoding and interleaving in one step
pub fn build_codewords(text: &[u8], options: &EncodeOptions) -> Result<(Version, Vec<u8>)> {
    let version = select_version(text.len())?;
    let payload = encode_payload(text, version, options.pad_style);
    Ok((version, interleave(&payload, version)))
}
