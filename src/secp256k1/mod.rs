//! secp256k1 elliptic curve cryptography

pub mod field;
pub mod point;
pub mod scalar;

pub use field::FieldElement;
pub use point::{Point, G};
pub use scalar::Scalar;
