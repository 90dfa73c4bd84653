//! Hash functions

pub mod ripemd160;
pub mod sha256;

pub use ripemd160::{ripemd160, Ripemd160};
pub use sha256::{sha256, sha256d, Sha256};

/// Compute Hash160 (RIPEMD160(SHA256(data)))
/// Bitcoin's standard public key hash
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160::ripemd160(&sha256::sha256(data))
}
