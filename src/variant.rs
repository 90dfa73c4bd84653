//! Candidate key transformations
//!
//! Brute-force callers tend to retry every guess under the same handful of
//! cheap reinterpretations. Those live here as a declarative list feeding
//! one shared address check, instead of per-strategy derivation logic.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// The candidate as given
    Identity,
    /// Hex string reversed character by character
    Reversed,
    /// Byte order reversed (hex digit pairs swapped end to end)
    ByteSwapped,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Identity, Variant::Reversed, Variant::ByteSwapped];

    /// Apply the transformation. Total on any input string; malformed
    /// candidates are weeded out later by the address deriver.
    pub fn apply(&self, key: &str) -> String {
        match self {
            Variant::Identity => key.to_string(),
            Variant::Reversed => key.chars().rev().collect(),
            Variant::ByteSwapped => {
                let bytes = key.as_bytes();
                let mut out = Vec::with_capacity(bytes.len());
                for pair in bytes.chunks(2).rev() {
                    out.extend_from_slice(pair);
                }
                String::from_utf8(out).unwrap_or_else(|_| key.to_string())
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Identity => "identity",
            Variant::Reversed => "reversed",
            Variant::ByteSwapped => "byte-swapped",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Variant::Identity.apply("abcdef"), "abcdef");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Variant::Reversed.apply("abcdef"), "fedcba");
    }

    #[test]
    fn test_byte_swapped() {
        assert_eq!(Variant::ByteSwapped.apply("aabbcc"), "ccbbaa");
        assert_eq!(Variant::ByteSwapped.apply("0102"), "0201");
    }

    #[test]
    fn test_byte_swapped_recovers_key_one() {
        // 01 followed by 62 zeros byte-swaps back to ...0001
        let candidate = format!("01{}", "0".repeat(62));
        let expected = format!("{}01", "0".repeat(62));
        assert_eq!(Variant::ByteSwapped.apply(&candidate), expected);
    }

    #[test]
    fn test_apply_total_on_odd_length() {
        // Not valid hex, but must not panic
        assert_eq!(Variant::ByteSwapped.apply("abc"), "cab");
        assert_eq!(Variant::Reversed.apply("abc"), "cba");
    }
}
