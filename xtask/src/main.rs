//! Custom cargo commands for the fragasm crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, with and without the parallel feature
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask fuzz      - Short fuzzing session on every target
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["overlap_matching", "greedy_assembly"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + defaults)
  test      Run all Rust tests, parallel and serial builds
  check     Quick check (cargo check + test + clippy)
  fuzz      Run each fuzz target for 60 seconds (needs cargo-fuzz, nightly)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fragasm Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running tests (parallel)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Parallel build passed\n");

    println!("[3/5] Running tests (serial)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Serial build passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Checking documented defaults...");
    verify_defaults()?;
    println!("✓ Defaults aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Both engine paths: the rayon candidate scan and the serial one.
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&fuzz_dir)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to resolve working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The JSON example in the config module docs must show the real defaults.
fn verify_defaults() -> Result<()> {
    let root = project_root()?;
    let config_rs = std::fs::read_to_string(root.join("src/config.rs"))
        .context("Failed to read config.rs")?;

    let pairs = [
        ("DEFAULT_MIN_OVERLAP", "minOverlap"),
        ("DEFAULT_READ_COUNT", "readCount"),
        ("DEFAULT_MIN_READ_LEN", "minReadLen"),
        ("DEFAULT_MAX_READ_LEN", "maxReadLen"),
        ("DEFAULT_SEED", "seed"),
    ];

    for (constant, key) in pairs {
        let Some(code) = extract_const(&config_rs, constant) else {
            bail!("{} not found in config.rs", constant);
        };
        let Some(doc) = extract_doc_value(&config_rs, key) else {
            bail!("\"{}\" missing from the config.rs doc example", key);
        };
        if code != doc {
            bail!("{}={} but the doc example says {}={}", constant, code, key, doc);
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u64> {
    // Look for "pub const NAME: usize = 20;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|rest| rest.trim().trim_end_matches(';').trim().parse().ok())
}

fn extract_doc_value(content: &str, key: &str) -> Option<u64> {
    // Look for `"key": 20` inside `//!` lines
    let needle = format!("\"{}\":", key);
    content
        .lines()
        .filter(|line| line.trim_start().starts_with("//!"))
        .find_map(|line| {
            let rest = &line[line.find(&needle)? + needle.len()..];
            let digits: String = rest
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        })
}
