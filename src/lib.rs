//! keycheck: Bitcoin private-key-to-address derivation and candidate checking
//!
//! The core turns a 256-bit private key into its two candidate mainnet
//! addresses (uncompressed and compressed P2PKH) and tests them against a
//! target address. A parallel scanner feeds lists of candidate keys, under
//! optional reinterpretation variants, through the same check.

pub mod address;
pub mod base58;
pub mod hash;
pub mod output;
pub mod scanner;
pub mod secp256k1;
pub mod variant;
pub mod wif;

pub use address::{derive_addresses, matches_target, KeyError, KeyKind};
pub use output::{FormattedMatch, Stats};
pub use scanner::{Match, ScanConfig, Scanner};
pub use variant::Variant;
