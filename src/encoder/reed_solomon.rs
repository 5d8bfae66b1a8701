/// Reed-Solomon error correction for QR codes
///
/// Codewords are systematic: the EC bytes are the remainder of
/// `data(x) * x^n` divided by `g(x) = (x - a^0)(x - a^1)...(x - a^(n-1))`.
use super::gf256::Gf256;

/// Generator polynomial of degree `ec_len`, coefficients in descending
/// order with the leading (monic) coefficient first.
pub fn generator_polynomial(ec_len: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..ec_len {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coef) in poly.iter().enumerate() {
            // (coef * x) contributes to the higher degree, (coef * root) in place
            next[j] ^= coef;
            next[j + 1] ^= Gf256::mul(coef, root);
        }
        poly = next;
    }
    poly
}

/// Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(ec_len: usize) -> Self {
        Self {
            generator: generator_polynomial(ec_len),
        }
    }

    /// Number of EC codewords produced per block
    pub fn ec_len(&self) -> usize {
        self.generator.len() - 1
    }

    /// Compute the EC codewords for one data block
    pub fn encode_block(&self, data: &[u8]) -> Vec<u8> {
        let ec_len = self.ec_len();
        let mut register = vec![0u8; ec_len];
        if ec_len == 0 {
            return register;
        }

        for &byte in data {
            let factor = byte ^ register[0];
            register.rotate_left(1);
            register[ec_len - 1] = 0;
            if factor != 0 {
                for (slot, &coef) in register.iter_mut().zip(&self.generator[1..]) {
                    *slot ^= Gf256::mul(coef, factor);
                }
            }
        }

        register
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_degree_and_monic() {
        for n in [7, 10, 18, 30] {
            let g = generator_polynomial(n);
            assert_eq!(g.len(), n + 1);
            assert_eq!(g[0], 1);
        }
    }

    #[test]
    fn test_generator_known_coefficients() {
        // g(x) for 7 EC codewords, as exponents of alpha: 0 87 229 146 149 238 102 21
        let expected: Vec<u8> = [0usize, 87, 229, 146, 149, 238, 102, 21]
            .iter()
            .map(|&e| Gf256::exp(e))
            .collect();
        assert_eq!(generator_polynomial(7), expected);
    }

    #[test]
    fn test_generator_roots() {
        let g = generator_polynomial(10);
        for i in 0..10 {
            let x = Gf256::exp(i);
            // Horner evaluation
            let value = g.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c);
            assert_eq!(value, 0, "alpha^{i} should be a root");
        }
    }

    #[test]
    fn test_iso_annex_example() {
        // "01234567" at version 1-M
        let data = [
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        let ec = ReedSolomonEncoder::new(10).encode_block(&data);
        assert_eq!(
            ec,
            vec![0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55]
        );
    }

    #[test]
    fn test_hello_world_example() {
        // "HELLO WORLD" alphanumeric at version 1-M
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let ec = ReedSolomonEncoder::new(10).encode_block(&data);
        assert_eq!(ec, vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_zero_data_has_zero_remainder() {
        let ec = ReedSolomonEncoder::new(7).encode_block(&[0u8; 19]);
        assert_eq!(ec, vec![0u8; 7]);
    }

    #[test]
    fn test_codeword_is_multiple_of_generator() {
        let data: Vec<u8> = b"rust_qr_encode".to_vec();
        let encoder = ReedSolomonEncoder::new(12);
        let mut codeword = data.clone();
        codeword.extend(encoder.encode_block(&data));
        for i in 0..12 {
            let x = Gf256::exp(i);
            let value = codeword.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c);
            assert_eq!(value, 0);
        }
    }
}
