//! Base58 and Base58Check encoding

use crate::hash::sha256d;

const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes to Base58. The input is treated as a big-endian integer;
/// leading zero bytes are not captured by the integer conversion and are
/// restored as leading '1' characters.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    let mut digits = Vec::new();
    let mut bytes = data[zeros..].to_vec();

    // Repeated division by 58, collecting remainders least significant first
    while !bytes.is_empty() {
        let mut remainder = 0u32;
        let mut quotient = Vec::with_capacity(bytes.len());
        for &byte in &bytes {
            let value = (remainder << 8) + byte as u32;
            let q = (value / 58) as u8;
            remainder = value % 58;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q);
            }
        }
        digits.push(ALPHABET[remainder as usize]);
        bytes = quotient;
    }

    digits.extend(std::iter::repeat(b'1').take(zeros));
    digits.reverse();
    String::from_utf8(digits).expect("base58 alphabet is ASCII")
}

/// Decode a Base58 string. Returns None on characters outside the alphabet.
pub fn decode(s: &str) -> Option<Vec<u8>> {
    let ones = s.bytes().take_while(|&b| b == b'1').count();

    let mut bytes: Vec<u8> = Vec::new();
    for c in s[ones..].bytes() {
        let mut carry = ALPHABET.iter().position(|&a| a == c)? as u32;
        for byte in bytes.iter_mut() {
            let value = (*byte as u32) * 58 + carry;
            *byte = value as u8;
            carry = value >> 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    // bytes is little-endian at this point
    bytes.extend(std::iter::repeat(0).take(ones));
    bytes.reverse();
    Some(bytes)
}

/// Encode with a 4-byte double-SHA256 checksum appended
pub fn encode_check(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut full = payload.to_vec();
    full.extend_from_slice(&checksum[..4]);
    encode(&full)
}

/// Decode and verify the 4-byte checksum, returning the payload
pub fn decode_check(s: &str) -> Option<Vec<u8>> {
    let full = decode(s)?;
    if full.len() < 4 {
        return None;
    }
    let (payload, checksum) = full.split_at(full.len() - 4);
    if sha256d(payload)[..4] != *checksum {
        return None;
    }
    Some(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
    }

    #[test]
    fn test_leading_zeros_become_ones() {
        let data = [0x00, 0x00, 0x01, 0x02];
        let encoded = encode(&data);
        assert!(encoded.starts_with("11"));
        assert!(!encoded.starts_with("111"));
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_round_trip() {
        let cases: &[&[u8]] = &[
            b"",
            &[0x00],
            &[0x00, 0x00, 0x00, 0xFF],
            &[0xFF; 32],
            b"The quick brown fox",
        ];
        for &data in cases {
            assert_eq!(decode(&encode(data)).unwrap(), data, "case {:02x?}", data);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_chars() {
        // 0, O, I, l are not in the alphabet
        assert!(decode("0").is_none());
        assert!(decode("O").is_none());
        assert!(decode("I").is_none());
        assert!(decode("l").is_none());
    }

    #[test]
    fn test_check_round_trip() {
        let payload = [0x00, 0xde, 0xad, 0xbe, 0xef];
        let encoded = encode_check(&payload);
        assert_eq!(decode_check(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_check_detects_corruption() {
        let encoded = encode_check(&[0x00, 0xde, 0xad, 0xbe, 0xef]);
        // Flip the final character to another alphabet character
        let mut corrupted: Vec<char> = encoded.chars().collect();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == '2' { '3' } else { '2' };
        let corrupted: String = corrupted.into_iter().collect();
        assert!(decode_check(&corrupted).is_none());
    }
}
