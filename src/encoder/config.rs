use std::sync::OnceLock;

/// Filler-byte rule used once the payload and terminator are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadStyle {
    /// 0xEC, 0x11, 0xEC, ... starting with the first filler byte
    #[default]
    Canonical,
    /// 0xEC on even byte offsets, 0x11 on odd offsets of the data stream
    OffsetParity,
}

impl PadStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "canonical" => Some(PadStyle::Canonical),
            "offset-parity" | "offset_parity" | "parity" => Some(PadStyle::OffsetParity),
            _ => None,
        }
    }
}

/// Tunables for a single encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Filler-byte rule
    pub pad_style: PadStyle,
    /// Score the finder-look-alike penalty during mask selection
    pub penalty_rule3: bool,
    /// Evaluate the eight mask candidates on the rayon pool
    pub parallel_masks: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            pad_style: PadStyle::Canonical,
            penalty_rule3: false,
            parallel_masks: true,
        }
    }
}

impl EncodeOptions {
    /// Options from `QR_PAD_STYLE`, `QR_PENALTY_RULE3` and `QR_PARALLEL_MASKS`,
    /// read once per process
    pub fn from_env() -> Self {
        static FROM_ENV: OnceLock<EncodeOptions> = OnceLock::new();
        *FROM_ENV.get_or_init(|| {
            let defaults = EncodeOptions::default();
            EncodeOptions {
                pad_style: std::env::var("QR_PAD_STYLE")
                    .ok()
                    .and_then(|v| PadStyle::parse(&v))
                    .unwrap_or(defaults.pad_style),
                penalty_rule3: parse_env_bool_u8("QR_PENALTY_RULE3", defaults.penalty_rule3),
                parallel_masks: parse_env_bool_u8("QR_PARALLEL_MASKS", defaults.parallel_masks),
            }
        })
    }
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}
