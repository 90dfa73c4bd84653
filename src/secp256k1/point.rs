//! secp256k1 elliptic curve point operations

use super::field::FieldElement;
use super::scalar::Scalar;

/// Point on the secp256k1 curve (affine coordinates), or the point at
/// infinity when the flag is set. Points are value types and never mutated;
/// every operation produces a new point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
    pub infinity: bool,
}

// Generator point G
pub const G: Point = Point {
    x: FieldElement {
        d: [
            0x59F2815B16F81798,
            0x029BFCDB2DCE28D9,
            0x55A06295CE870B07,
            0x79BE667EF9DCBBAC,
        ],
    },
    y: FieldElement {
        d: [
            0x9C47D08FFB10D4B8,
            0xFD17B448A6855419,
            0x5DA4FBFC0E1108A8,
            0x483ADA7726A3C465,
        ],
    },
    infinity: false,
};

impl Point {
    pub const INFINITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: true,
    };

    #[inline]
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Point addition.
    /// Inputs are trusted to lie on the curve; validation happens once at
    /// the address-deriver boundary, which only ever supplies G.
    pub fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            // Additive inverses: vertical chord
            return Self::INFINITY;
        }

        // λ = (y2 - y1) / (x2 - x1)
        let slope = other.y.sub(&self.y).mul(&other.x.sub(&self.x).inv());

        // x3 = λ² - x1 - x2, y3 = λ(x1 - x3) - y1
        let x3 = slope.sqr().sub(&self.x).sub(&other.x);
        let y3 = slope.mul(&self.x.sub(&x3)).sub(&self.y);

        Self::new(x3, y3)
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        if self.infinity || self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = 3x² / 2y (curve coefficient a = 0)
        let x_sq = self.x.sqr();
        let three_x_sq = x_sq.add(&x_sq).add(&x_sq);
        let two_y = self.y.add(&self.y);
        let slope = three_x_sq.mul(&two_y.inv());

        // x3 = λ² - 2x, y3 = λ(x - x3) - y
        let x3 = slope.sqr().sub(&self.x).sub(&self.x);
        let y3 = slope.mul(&self.x.sub(&x3)).sub(&self.y);

        Self::new(x3, y3)
    }

    /// Point negation
    pub fn neg(&self) -> Self {
        if self.infinity {
            Self::INFINITY
        } else {
            Self::new(self.x, self.y.neg())
        }
    }

    /// Scalar multiplication using double-and-add, least significant bit
    /// first. A zero scalar never takes the accumulate branch and yields
    /// the identity.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let mut result = Self::INFINITY;
        let mut addend = *self;

        for i in 0..4 {
            let mut k = scalar.d[i];
            for _ in 0..64 {
                if k & 1 == 1 {
                    result = result.add(&addend);
                }
                addend = addend.double();
                k >>= 1;
            }
        }

        result
    }

    /// Compressed public key bytes (33 bytes): parity prefix ‖ x
    pub fn to_compressed(&self) -> [u8; 33] {
        let mut result = [0u8; 33];
        result[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        result[1..33].copy_from_slice(&self.x.to_bytes());
        result
    }

    /// Uncompressed public key bytes (65 bytes): 0x04 ‖ x ‖ y
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut result = [0u8; 65];
        result[0] = 0x04;
        result[1..33].copy_from_slice(&self.x.to_bytes());
        result[33..65].copy_from_slice(&self.y.to_bytes());
        result
    }
}
