//! Private-key-to-address derivation and target matching
//!
//! The forward pipeline every candidate key goes through:
//! hex key -> scalar -> public point -> pubkey bytes -> hash160 ->
//! versioned payload -> Base58Check address.

use crate::base58;
use crate::hash::hash160;
use crate::secp256k1::{Scalar, G};
use serde::Serialize;
use thiserror::Error;

/// Version byte for mainnet P2PKH addresses
pub const VERSION_P2PKH: u8 = 0x00;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Input is not exactly 64 hexadecimal characters
    #[error("private key must be exactly 64 hex characters")]
    InvalidFormat,
    /// Key value is outside [1, n-1]; no address exists for it
    #[error("private key is out of range [1, n-1]")]
    InvalidKey,
}

/// Public key serialization kind. A private key controls one address per
/// kind; both must be checked against any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Uncompressed,
    Compressed,
}

impl KeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::Uncompressed => "uncompressed",
            KeyKind::Compressed => "compressed",
        }
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_key(private_key_hex: &str) -> Result<Scalar, KeyError> {
    let scalar = Scalar::from_hex(private_key_hex).ok_or(KeyError::InvalidFormat)?;
    if !scalar.is_valid() {
        return Err(KeyError::InvalidKey);
    }
    Ok(scalar)
}

fn address_from_pubkey(pubkey: &[u8]) -> String {
    let h160 = hash160(pubkey);
    let mut payload = Vec::with_capacity(21);
    payload.push(VERSION_P2PKH);
    payload.extend_from_slice(&h160);
    base58::encode_check(&payload)
}

/// Derive the two candidate mainnet addresses for a private key,
/// uncompressed first, then compressed.
pub fn derive_addresses(private_key_hex: &str) -> Result<[(KeyKind, String); 2], KeyError> {
    let key = parse_key(private_key_hex)?;

    let public_point = G.mul(&key);
    if public_point.is_infinity() {
        // Unreachable once is_valid passed; kept so a degenerate point can
        // never flow into serialization
        return Err(KeyError::InvalidKey);
    }

    Ok([
        (
            KeyKind::Uncompressed,
            address_from_pubkey(&public_point.to_uncompressed()),
        ),
        (
            KeyKind::Compressed,
            address_from_pubkey(&public_point.to_compressed()),
        ),
    ])
}

/// Check a candidate key against a target address. Total: malformed or
/// out-of-range keys yield false rather than an error, so search loops can
/// feed it arbitrary guesses.
pub fn matches_target(private_key_hex: &str, target_address: &str) -> bool {
    match derive_addresses(private_key_hex) {
        Ok(addresses) => addresses.iter().any(|(_, addr)| addr == target_address),
        Err(_) => false,
    }
}
