//! secp256k1 field element arithmetic (mod p)
//! p = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F

#![allow(clippy::needless_range_loop)] // Indexed loops clearer for low-level math

/// Prime field element for secp256k1
/// p = 2^256 - 2^32 - 977, stored as four little-endian u64 limbs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement {
    pub d: [u64; 4],
}

// Field prime p
const P: [u64; 4] = [
    0xFFFFFFFEFFFFFC2F,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
];

// p - 2, the exponent for Fermat inversion
const P_MINUS_2: [u64; 4] = [
    0xFFFFFFFEFFFFFC2D,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
];

/// Add with carry: returns (sum, carry out)
#[inline]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Subtract with borrow: returns (diff, borrow out)
#[inline]
fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (t as u64, (t >> 127) as u64)
}

impl FieldElement {
    pub const ZERO: Self = Self { d: [0, 0, 0, 0] };
    pub const ONE: Self = Self { d: [1, 0, 0, 0] };

    #[inline]
    pub fn new(d: [u64; 4]) -> Self {
        Self { d }
    }

    /// Interpret 32 big-endian bytes as a field element
    #[inline]
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut d = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            d[3 - i] = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        Self { d }
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

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.d[0] & 1 == 1
    }

    /// Modular addition
    pub fn add(&self, other: &Self) -> Self {
        let mut r = [0u64; 4];
        let mut carry = 0u64;
        for i in 0..4 {
            let (sum, c) = adc(self.d[i], other.d[i], carry);
            r[i] = sum;
            carry = c;
        }

        let mut result = Self { d: r };
        if carry != 0 || result.gte_p() {
            result.sub_p();
        }
        result
    }

    /// Modular subtraction
    pub fn sub(&self, other: &Self) -> Self {
        let mut r = [0u64; 4];
        let mut borrow = 0u64;
        for i in 0..4 {
            let (diff, b) = sbb(self.d[i], other.d[i], borrow);
            r[i] = diff;
            borrow = b;
        }

        let mut result = Self { d: r };
        if borrow != 0 {
            result.add_p();
        }
        result
    }

    /// Modular multiplication: schoolbook 512-bit product, then reduce
    pub fn mul(&self, other: &Self) -> Self {
        let mut t = [0u64; 8];

        for i in 0..4 {
            let mut carry = 0u128;
            for j in 0..4 {
                let prod =
                    (self.d[i] as u128) * (other.d[j] as u128) + (t[i + j] as u128) + carry;
                t[i + j] = prod as u64;
                carry = prod >> 64;
            }
            t[i + 4] = carry as u64;
        }

        Self::reduce_wide(&t)
    }

    /// Reduce a 512-bit product mod p using 2^256 ≡ 0x1000003D1 (mod p)
    fn reduce_wide(t: &[u64; 8]) -> Self {
        const K: u128 = 0x1000003D1;

        // Fold the high 256 bits into the low 256 bits
        let mut r = [0u64; 4];
        let mut carry = 0u128;
        for i in 0..4 {
            let v = (t[i] as u128) + (t[i + 4] as u128) * K + carry;
            r[i] = v as u64;
            carry = v >> 64;
        }

        // Fold the carry limb; the loop runs a second time only when the
        // first fold wraps all four limbs
        let mut overflow = carry as u64;
        while overflow != 0 {
            let mut v = (overflow as u128) * K + (r[0] as u128);
            r[0] = v as u64;
            v >>= 64;
            for i in 1..4 {
                v += r[i] as u128;
                r[i] = v as u64;
                v >>= 64;
            }
            overflow = v as u64;
        }

        let mut result = Self { d: r };
        if result.gte_p() {
            result.sub_p();
        }
        result
    }

    /// Modular square
    #[inline]
    pub fn sqr(&self) -> Self {
        self.mul(self)
    }

    /// Modular negation
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        let mut r = [0u64; 4];
        let mut borrow = 0u64;
        for i in 0..4 {
            let (diff, b) = sbb(P[i], self.d[i], borrow);
            r[i] = diff;
            borrow = b;
        }
        Self { d: r }
    }

    /// Modular exponentiation, square-and-multiply MSB first
    fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut acc = Self::ONE;
        for &limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.sqr();
                if (limb >> bit) & 1 == 1 {
                    acc = acc.mul(self);
                }
            }
        }
        acc
    }

    /// Modular inverse via Fermat's little theorem
    /// a^(-1) = a^(p-2) mod p, valid since p is prime
    pub fn inv(&self) -> Self {
        self.pow(&P_MINUS_2)
    }

    #[inline]
    fn gte_p(&self) -> bool {
        for i in (0..4).rev() {
            if self.d[i] > P[i] {
                return true;
            }
            if self.d[i] < P[i] {
                return false;
            }
        }
        true // equal
    }

    #[inline]
    fn sub_p(&mut self) {
        let mut borrow = 0u64;
        for i in 0..4 {
            let (diff, b) = sbb(self.d[i], P[i], borrow);
            self.d[i] = diff;
            borrow = b;
        }
    }

    #[inline]
    fn add_p(&mut self) {
        let mut carry = 0u64;
        for i in 0..4 {
            let (sum, c) = adc(self.d[i], P[i], carry);
            self.d[i] = sum;
            carry = c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_add() {
        let a = FieldElement::new([1, 0, 0, 0]);
        let b = FieldElement::new([2, 0, 0, 0]);
        assert_eq!(a.add(&b).d[0], 3);
    }

    #[test]
    fn test_field_add_wraps_mod_p() {
        let p_minus_1 = FieldElement::new([
            0xFFFFFFFEFFFFFC2E,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
        ]);
        let two = FieldElement::new([2, 0, 0, 0]);
        assert_eq!(p_minus_1.add(&two), FieldElement::ONE);
    }

    #[test]
    fn test_field_sub_borrows() {
        let a = FieldElement::new([1, 0, 0, 0]);
        let b = FieldElement::new([2, 0, 0, 0]);
        // 1 - 2 = p - 1
        let expected = FieldElement::new([
            0xFFFFFFFEFFFFFC2E,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
        ]);
        assert_eq!(a.sub(&b), expected);
    }

    #[test]
    fn test_field_mul_p_minus_1_squared() {
        // (p - 1)² ≡ (-1)² ≡ 1, exercises the full reduction path
        let p_minus_1 = FieldElement::new([
            0xFFFFFFFEFFFFFC2E,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
        ]);
        assert_eq!(p_minus_1.mul(&p_minus_1), FieldElement::ONE);
        assert_eq!(p_minus_1, FieldElement::ONE.neg());
    }

    #[test]
    fn test_field_mul() {
        let a = FieldElement::new([2, 0, 0, 0]);
        let b = FieldElement::new([3, 0, 0, 0]);
        assert_eq!(a.mul(&b).d[0], 6);
    }

    #[test]
    fn test_field_inv() {
        let a = FieldElement::new([7, 0, 0, 0]);
        let inv = a.inv();
        assert_eq!(a.mul(&inv), FieldElement::ONE);
    }

    #[test]
    fn test_field_inv_full_width() {
        // Inversion of a full 256-bit element (the generator x coordinate)
        let x = FieldElement::new([
            0x59F2815B16F81798,
            0x029BFCDB2DCE28D9,
            0x55A06295CE870B07,
            0x79BE667EF9DCBBAC,
        ]);
        assert_eq!(x.mul(&x.inv()), FieldElement::ONE);
    }

    #[test]
    fn test_field_neg() {
        let a = FieldElement::new([42, 0, 0, 0]);
        assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn test_bytes_round_trip() {
        let a = FieldElement::new([
            0x59F2815B16F81798,
            0x029BFCDB2DCE28D9,
            0x55A06295CE870B07,
            0x79BE667EF9DCBBAC,
        ]);
        assert_eq!(FieldElement::from_bytes(&a.to_bytes()), a);
        // Big-endian: most significant limb first
        assert_eq!(a.to_bytes()[0], 0x79);
    }
}
