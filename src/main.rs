//! keycheck CLI

use anyhow::{bail, Context, Result};
use clap::Parser;
use keycheck::{FormattedMatch, ScanConfig, Scanner, Stats, Variant};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "keycheck")]
#[command(version = "0.1.0")]
#[command(about = "Check candidate Bitcoin private keys against a target address", long_about = None)]
struct Args {
    /// Target Base58Check address
    target: String,

    /// Candidate private keys (64 hex chars each)
    keys: Vec<String>,

    /// File with one candidate key per line ('#' lines are comments)
    #[arg(short = 'f', long)]
    keys_file: Option<String>,

    /// Number of threads (0 = auto)
    #[arg(short = 't', long, default_value = "0")]
    threads: usize,

    /// Also try reversed and byte-swapped forms of every candidate
    #[arg(short = 'a', long)]
    all_variants: bool,

    /// Stop after finding N matches (0 = check everything)
    #[arg(short = 'm', long, default_value = "0")]
    max_found: u64,

    /// Output format: text, json, csv
    #[arg(short = 'o', long, default_value = "text")]
    output_format: String,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output_file: Option<String>,

    /// Quiet mode (no progress output)
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn load_candidates(args: &Args) -> Result<Vec<String>> {
    let mut candidates = args.keys.clone();

    if let Some(path) = &args.keys_file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read keys file {}", path))?;
        candidates.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }

    if candidates.is_empty() {
        bail!("no candidate keys given (pass keys as arguments or via --keys-file)");
    }
    Ok(candidates)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let candidates = load_candidates(&args)?;

    let variants = if args.all_variants {
        Variant::ALL.to_vec()
    } else {
        vec![Variant::Identity]
    };

    if !args.quiet {
        eprintln!("keycheck v0.1.0");
        eprintln!("Target: {}", args.target);
        eprintln!(
            "Candidates: {} ({} variants each)",
            candidates.len(),
            variants.len()
        );
        eprintln!();
    }

    let config = ScanConfig {
        threads: args.threads,
        target: args.target.clone(),
        variants,
        max_matches: args.max_found,
    };

    let scanner = Arc::new(Scanner::new(config));
    let (tx, rx) = mpsc::channel();

    let scan_handle = {
        let scanner = Arc::clone(&scanner);
        std::thread::spawn(move || {
            scanner.run(&candidates, tx);
        })
    };

    let start_time = Instant::now();
    let mut last_stats_time = Instant::now();
    let mut output_file: Option<std::fs::File> = match &args.output_file {
        Some(path) => Some(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create output file {}", path))?,
        ),
        None => None,
    };

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(m) => {
                let formatted = FormattedMatch::from_match(&m);
                let output = match args.output_format.as_str() {
                    "json" => formatted.to_json(),
                    "csv" => formatted.to_csv(),
                    _ => formatted.to_text(),
                };

                if let Some(ref mut file) = output_file {
                    use std::io::Write;
                    writeln!(file, "{}", output).context("failed to write to output file")?;
                } else {
                    println!("{}", output);
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if scanner.is_stopped() {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if !args.quiet && last_stats_time.elapsed() >= Duration::from_secs(1) {
            let elapsed = start_time.elapsed().as_secs_f64();
            let stats = Stats {
                keys_per_second: scanner.keys_checked() as f64 / elapsed,
                total_keys: scanner.keys_checked(),
                matches_found: scanner.matches_found(),
                elapsed_secs: elapsed,
            };
            eprint!("\r{}", stats.format());
            last_stats_time = Instant::now();
        }
    }

    // Drain anything still queued after the scan finished
    while let Ok(m) = rx.try_recv() {
        let formatted = FormattedMatch::from_match(&m);
        let output = match args.output_format.as_str() {
            "json" => formatted.to_json(),
            "csv" => formatted.to_csv(),
            _ => formatted.to_text(),
        };
        if let Some(ref mut file) = output_file {
            use std::io::Write;
            writeln!(file, "{}", output).context("failed to write to output file")?;
        } else {
            println!("{}", output);
        }
    }

    let _ = scan_handle.join();

    let matches_found = scanner.matches_found();
    if !args.quiet {
        let elapsed = start_time.elapsed().as_secs_f64();
        eprintln!();
        eprintln!("Scan completed.");
        eprintln!("Total time: {:.2}s", elapsed);
        eprintln!("Keys checked: {}", scanner.keys_checked());
        eprintln!("Matches found: {}", matches_found);
    }

    if matches_found == 0 {
        std::process::exit(1);
    }
    Ok(())
}
