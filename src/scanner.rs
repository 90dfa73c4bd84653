//! Parallel candidate key scanner
//!
//! Fans a finite list of candidate keys across a thread pool and feeds each
//! one, under each configured variant, through the shared address check.
//! Every check is pure and independent, so the only coordination is the stop
//! flag and the result channel.

use crate::address::{derive_addresses, KeyKind};
use crate::secp256k1::Scalar;
use crate::variant::Variant;
use crate::wif::encode_wif;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// A candidate key that derived the target address
#[derive(Debug, Clone)]
pub struct Match {
    /// The candidate exactly as it was supplied
    pub candidate: String,
    /// Transformation under which it matched
    pub variant: Variant,
    /// Which serialization produced the matching address
    pub kind: KeyKind,
    pub address: String,
    /// The effective private key (candidate after the variant)
    pub private_key_hex: String,
    pub wif: String,
}

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of threads (0 = auto)
    pub threads: usize,
    /// Target Base58Check address
    pub target: String,
    /// Transformations tried per candidate
    pub variants: Vec<Variant>,
    /// Stop after this many matches (0 = check everything)
    pub max_matches: u64,
}

impl ScanConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            threads: 0,
            target: target.into(),
            variants: vec![Variant::Identity],
            max_matches: 0,
        }
    }
}

/// Parallel scanner over a candidate list
pub struct Scanner {
    config: ScanConfig,
    stop: Arc<AtomicBool>,
    keys_checked: Arc<AtomicU64>,
    matches_found: Arc<AtomicU64>,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            stop: Arc::new(AtomicBool::new(false)),
            keys_checked: Arc::new(AtomicU64::new(0)),
            matches_found: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Check every candidate under every configured variant, sending matches
    /// on the channel. Returns when the list is exhausted or the scanner is
    /// stopped.
    pub fn run(&self, candidates: &[String], results_tx: Sender<Match>) {
        let threads = if self.config.threads == 0 {
            num_cpus::get()
        } else {
            self.config.threads
        };
        let threads = threads.min(candidates.len()).max(1);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();

        let chunk_size = candidates.len().div_ceil(threads).max(1);
        let target = self.config.target.as_str();
        let variants = self.config.variants.as_slice();
        let max_matches = self.config.max_matches;

        pool.scope(|s| {
            for chunk in candidates.chunks(chunk_size) {
                let stop = Arc::clone(&self.stop);
                let keys_checked = Arc::clone(&self.keys_checked);
                let matches_found = Arc::clone(&self.matches_found);
                let results_tx = results_tx.clone();

                s.spawn(move |_| {
                    for candidate in chunk {
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }

                        for variant in variants {
                            let key = variant.apply(candidate);
                            keys_checked.fetch_add(1, Ordering::Relaxed);

                            let addresses = match derive_addresses(&key) {
                                Ok(a) => a,
                                // Malformed guesses are skipped, not fatal
                                Err(_) => continue,
                            };

                            for (kind, address) in addresses {
                                if address != target {
                                    continue;
                                }

                                let wif = Scalar::from_hex(&key)
                                    .map(|k| encode_wif(&k, kind == KeyKind::Compressed, true))
                                    .unwrap_or_default();

                                matches_found.fetch_add(1, Ordering::Relaxed);
                                let _ = results_tx.send(Match {
                                    candidate: candidate.clone(),
                                    variant: *variant,
                                    kind,
                                    address,
                                    private_key_hex: key.clone(),
                                    wif,
                                });

                                if max_matches > 0
                                    && matches_found.load(Ordering::Relaxed) >= max_matches
                                {
                                    stop.store(true, Ordering::Relaxed);
                                }
                            }
                        }
                    }
                });
            }
        });

        // List exhausted (or stopped); either way the scan is over
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Stop the scan
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Number of derivations attempted so far
    pub fn keys_checked(&self) -> u64 {
        self.keys_checked.load(Ordering::Relaxed)
    }

    /// Number of matches found so far
    pub fn matches_found(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }

    /// Check if the scan has finished or been stopped
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
