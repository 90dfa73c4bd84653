//! WIF (Wallet Import Format) encoding for found keys

use crate::base58;
use crate::secp256k1::Scalar;

/// Encode a private key to WIF
pub fn encode_wif(private_key: &Scalar, compressed: bool, mainnet: bool) -> String {
    let mut data = Vec::with_capacity(34);

    data.push(if mainnet { 0x80 } else { 0xEF });
    data.extend_from_slice(&private_key.to_bytes());
    if compressed {
        data.push(0x01);
    }

    base58::encode_check(&data)
}
