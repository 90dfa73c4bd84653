//! Match formatting and progress stats

use crate::scanner::Match;
use serde::Serialize;

/// A match flattened into printable fields
#[derive(Debug, Clone, Serialize)]
pub struct FormattedMatch {
    pub candidate: String,
    pub variant: String,
    pub kind: String,
    pub address: String,
    pub private_key: String,
    pub wif: String,
}

impl FormattedMatch {
    pub fn from_match(m: &Match) -> Self {
        Self {
            candidate: m.candidate.clone(),
            variant: m.variant.as_str().to_string(),
            kind: m.kind.as_str().to_string(),
            address: m.address.clone(),
            private_key: m.private_key_hex.clone(),
            wif: m.wif.clone(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "========== FOUND ==========\n\
             Address:           {}\n\
             Private Key (HEX): 0x{}\n\
             WIF (Mainnet):     {}\n\
             Serialization:     {}\n\
             Candidate:         {} ({})\n\
             ==========================",
            self.address, self.private_key, self.wif, self.kind, self.candidate, self.variant
        )
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.candidate, self.variant, self.kind, self.address, self.private_key, self.wif
        )
    }
}

/// Throughput stats for progress reporting
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub keys_per_second: f64,
    pub total_keys: u64,
    pub matches_found: u64,
    pub elapsed_secs: f64,
}

impl Stats {
    pub fn format(&self) -> String {
        format!(
            "[{:.0} key/s] [Checked: {}] [Found: {}] [{:.1}s]",
            self.keys_per_second, self.total_keys, self.matches_found, self.elapsed_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::KeyKind;
    use crate::variant::Variant;

    fn sample() -> Match {
        Match {
            candidate: "01".repeat(32),
            variant: Variant::Identity,
            kind: KeyKind::Compressed,
            address: "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH".to_string(),
            private_key_hex: "01".repeat(32),
            wif: "Kwxyz".to_string(),
        }
    }

    #[test]
    fn test_text_contains_fields() {
        let text = FormattedMatch::from_match(&sample()).to_text();
        assert!(text.contains("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));
        assert!(text.contains("compressed"));
    }

    #[test]
    fn test_json_is_valid() {
        let json = FormattedMatch::from_match(&sample()).to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["kind"], "compressed");
        assert_eq!(parsed["variant"], "identity");
    }

    #[test]
    fn test_csv_field_count() {
        let csv = FormattedMatch::from_match(&sample()).to_csv();
        assert_eq!(csv.split(',').count(), 6);
    }

    #[test]
    fn test_stats_format() {
        let stats = Stats {
            keys_per_second: 1234.0,
            total_keys: 99,
            matches_found: 1,
            elapsed_secs: 0.5,
        };
        let line = stats.format();
        assert!(line.contains("1234"));
        assert!(line.contains("99"));
    }
}
