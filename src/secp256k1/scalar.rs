//! secp256k1 scalar parsing and validation (private key domain)
//! n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141

/// Scalar element for secp256k1
/// Candidate keys are checked as-is, so no mod-n arithmetic lives here:
/// a scalar is parsed, range-checked and fed to point multiplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar {
    pub d: [u64; 4],
}

// Curve order n
const N: [u64; 4] = [
    0xBFD25E8CD0364141,
    0xBAAEDCE6AF48A03B,
    0xFFFFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFFFFF,
];

impl Scalar {
    pub const ZERO: Self = Self { d: [0, 0, 0, 0] };
    pub const ONE: Self = Self { d: [1, 0, 0, 0] };

    #[inline]
    pub fn new(d: [u64; 4]) -> Self {
        Self { d }
    }

    /// Interpret 32 big-endian bytes as a scalar
    #[inline]
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut d = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            d[3 - i] = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        Self { d }
    }

    /// Parse exactly 64 hex characters (case-insensitive) as a scalar.
    /// Returns None on any other length or on a non-hex character.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 64 {
            return None;
        }
        let decoded = hex::decode(s).ok()?;
        let bytes: [u8; 32] = decoded.try_into().ok()?;
        Some(Self::from_bytes(&bytes))
    }

    /// Big-endian byte representation
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&self.d[3 - i].to_be_bytes());
        }
        bytes
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.d == [0, 0, 0, 0]
    }

    /// Check if scalar is a valid private key (0 < s < n)
    pub fn is_valid(&self) -> bool {
        !self.is_zero() && !self.gte_n()
    }

    #[inline]
    fn gte_n(&self) -> bool {
        for i in (0..4).rev() {
            if self.d[i] > N[i] {
                return true;
            }
            if self.d[i] < N[i] {
                return false;
            }
        }
        true // equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_round_trip() {
        let s = Scalar::from_hex("0000000000000000000000000000000000000000000000000000000000000001")
            .unwrap();
        assert_eq!(s, Scalar::ONE);
        assert_eq!(hex::encode(s.to_bytes()), "0000000000000000000000000000000000000000000000000000000000000001");
    }

    #[test]
    fn test_from_hex_case_insensitive() {
        let lower = Scalar::from_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        let upper = Scalar::from_hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
        assert_eq!(lower, upper);
        assert!(lower.is_some());
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Scalar::from_hex("").is_none());
        assert!(Scalar::from_hex("abc").is_none());
        // 63 and 65 chars
        assert!(Scalar::from_hex(&"0".repeat(63)).is_none());
        assert!(Scalar::from_hex(&"0".repeat(65)).is_none());
        // Non-hex character
        assert!(Scalar::from_hex(&format!("g{}", "0".repeat(63))).is_none());
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(!Scalar::ZERO.is_valid());
        assert!(Scalar::ONE.is_valid());

        // n itself is invalid, n - 1 is the largest valid key
        let n = Scalar::new([
            0xBFD25E8CD0364141,
            0xBAAEDCE6AF48A03B,
            0xFFFFFFFFFFFFFFFE,
            0xFFFFFFFFFFFFFFFF,
        ]);
        assert!(!n.is_valid());
        let n_minus_1 = Scalar::new([
            0xBFD25E8CD0364140,
            0xBAAEDCE6AF48A03B,
            0xFFFFFFFFFFFFFFFE,
            0xFFFFFFFFFFFFFFFF,
        ]);
        assert!(n_minus_1.is_valid());
    }
}
