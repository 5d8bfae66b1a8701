/// GF(256) arithmetic with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
///
/// Both tables are generated at compile time; `EXP` is doubled so that
/// `LOG[a] + LOG[b]` indexes it directly without a modulo.
pub struct Gf256;

const PRIMITIVE: u16 = 0x11D;

const fn build_exp() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        table[i + 255] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    // 510 and 511 are unreachable from mul (max index 254 + 254)
    table[510] = table[0];
    table[511] = table[1];
    table
}

const fn build_log(exp: &[u8; 512]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const EXP: [u8; 512] = build_exp();
static EXP_TABLE: [u8; 512] = EXP;
static LOG_TABLE: [u8; 256] = build_log(&EXP);

impl Gf256 {
    /// alpha^i, for any `i` (reduced mod 255)
    pub fn exp(i: usize) -> u8 {
        EXP_TABLE[i % 255]
    }

    /// Discrete log of a nonzero element; `log(0)` is meaningless and returns 0
    pub fn log(a: u8) -> u8 {
        LOG_TABLE[a as usize]
    }

    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        EXP_TABLE[LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Carry-less multiply reduced by the primitive polynomial
    fn slow_mul(a: u8, b: u8) -> u8 {
        let mut acc: u16 = 0;
        let mut a = a as u16;
        let mut b = b;
        while b != 0 {
            if b & 1 != 0 {
                acc ^= a;
            }
            a <<= 1;
            if a & 0x100 != 0 {
                a ^= PRIMITIVE;
            }
            b >>= 1;
        }
        acc as u8
    }

    #[test]
    fn test_gf256_basic() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);
        assert_eq!(Gf256::mul(2, 128), 0x1D);
    }

    #[test]
    fn test_known_table_values() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(8), 29);
        assert_eq!(Gf256::exp(25), 3);
        assert_eq!(Gf256::exp(254), 142);
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(Gf256::log(2), 1);
        assert_eq!(Gf256::log(3), 25);
        assert_eq!(Gf256::log(29), 8);
    }

    #[test]
    fn test_exp_generates_all_elements() {
        let mut seen = [false; 256];
        for i in 0..255 {
            seen[Gf256::exp(i) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_log_exp_inverse() {
        for a in 1..=255u8 {
            assert_eq!(Gf256::exp(Gf256::log(a) as usize), a);
        }
    }

    #[test]
    fn test_mul_matches_polynomial_multiplication() {
        for a in 0..=255u8 {
            for b in (0..=255u8).step_by(7) {
                assert_eq!(Gf256::mul(a, b), slow_mul(a, b), "{a} * {b}");
            }
        }
    }
}
