use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fragasm::sampler::expected_coverage;
use fragasm::{
    fragments_from_lines, sample_fragments, sequence_from_fasta, Assembly, AssemblyConfig,
    AssemblyReport, FragmentStore, GreedyAssembler,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Assemble {
            fragments,
            min_overlap,
            max_passes,
            config,
            reference,
            json,
        } => run_assemble(AssembleArgs {
            fragments,
            min_overlap,
            max_passes,
            config,
            reference,
            json,
            quiet: cli.quiet,
        }),
        Commands::Simulate {
            source,
            reads,
            min_len,
            max_len,
            seed,
            min_overlap,
            config,
            json,
        } => run_simulate(SimulateArgs {
            source,
            reads,
            min_len,
            max_len,
            seed,
            min_overlap,
            config,
            json,
            quiet: cli.quiet,
        }),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

struct AssembleArgs {
    fragments: PathBuf,
    min_overlap: Option<usize>,
    max_passes: Option<usize>,
    config: Option<PathBuf>,
    reference: Option<PathBuf>,
    json: bool,
    quiet: bool,
}

struct SimulateArgs {
    source: PathBuf,
    reads: Option<usize>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    seed: Option<u64>,
    min_overlap: Option<usize>,
    config: Option<PathBuf>,
    json: bool,
    quiet: bool,
}

fn run_assemble(args: AssembleArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(k) = args.min_overlap {
        config.min_overlap = k;
    }
    if args.max_passes.is_some() {
        config.max_passes = args.max_passes;
    }

    let fragments = fragments_from_lines(&read_input(&args.fragments)?);
    info!(
        fragments = fragments.len(),
        min_overlap = config.min_overlap,
        "loaded fragments"
    );

    let reference = match &args.reference {
        Some(path) => Some(sequence_from_fasta(&read_input(path)?)),
        None => None,
    };

    let assembly = run_engine(&fragments, &config, !(args.quiet || args.json))?;

    if args.json {
        let report = AssemblyReport::new(&assembly, reference.as_deref());
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{}", assembly.sequence);
        if let Some(reference) = &reference {
            let diag = assembly.diagnostics(reference);
            info!(
                exact_match = diag.exact_match,
                assembled_in_reference = diag.assembled_in_reference,
                reference_in_assembled = diag.reference_in_assembled,
                "compared against reference"
            );
        }
    }
    Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(k) = args.min_overlap {
        config.min_overlap = k;
    }
    let sampler = &mut config.sampler;
    if let Some(n) = args.reads {
        sampler.read_count = n;
    }
    if let Some(n) = args.min_len {
        sampler.min_read_len = n;
    }
    if let Some(n) = args.max_len {
        sampler.max_read_len = n;
    }
    if let Some(seed) = args.seed {
        sampler.seed = seed;
    }

    let source = sequence_from_fasta(&read_input(&args.source)?);
    let fragments = sample_fragments(&source, &config.sampler)
        .with_context(|| format!("Failed to sample from {}", args.source.display()))?;
    info!(
        source_len = source.len(),
        fragments = fragments.len(),
        "sampled fragments"
    );

    let assembly = run_engine(&fragments, &config, !(args.quiet || args.json))?;
    let report = AssemblyReport::new(&assembly, Some(&source));

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_simulation(&config, source.len(), &assembly, &report);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AssemblyConfig> {
    match path {
        Some(path) => Ok(AssemblyConfig::from_json_file(path)?),
        None => Ok(AssemblyConfig::default()),
    }
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn run_engine(fragments: &[String], config: &AssemblyConfig, progress: bool) -> Result<Assembly> {
    config.validate_for(fragments)?;
    let store = FragmentStore::new(fragments.iter().map(String::as_str), config.min_overlap)?;
    let engine = GreedyAssembler::new(store, config.options());

    #[cfg(feature = "parallel")]
    let assembly = {
        let spinner = progress.then(pass_spinner);
        let assembly = engine.run_with(|stats| {
            if let Some(pb) = &spinner {
                pb.set_message(format!(
                    "pass {} · {} merges · {} active",
                    stats.pass, stats.merges, stats.active_after
                ));
            }
        });
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        assembly
    };

    #[cfg(not(feature = "parallel"))]
    let assembly = {
        let _ = progress;
        engine.run()
    };

    Ok(assembly)
}

#[cfg(feature = "parallel")]
fn pass_spinner() -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_prefix("Merging");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_simulation(
    config: &AssemblyConfig,
    source_len: usize,
    assembly: &Assembly,
    report: &AssemblyReport,
) {
    let sampler = &config.sampler;

    title("FRAGASM SIMULATION");

    section_top("Input");
    field("source", &bases(source_len));
    field("fragments", &sampler.read_count.to_string());
    field(
        "read length",
        &format!("{}-{} bp", sampler.min_read_len, sampler.max_read_len),
    );
    field("seed", &sampler.seed.to_string());
    field(
        "coverage",
        &format!("{:.1}x", expected_coverage(sampler, source_len)),
    );
    field("min overlap", &config.min_overlap.to_string());

    section_mid("Assembly");
    field("passes", &report.passes.to_string());
    field("merges", &report.merges.to_string());
    field("converged", &verdict(report.converged));
    field("contigs", &contig_count(report.contig_count));
    field("contig lengths", &length_list(&report.contig_lengths, 5));
    field("assembled", &bases(report.assembled_len));
    field("crc32", &report.digest);

    if let Some(diag) = &report.diagnostics {
        section_mid("Reconstruction");
        field("exact match", &verdict(diag.exact_match));
        field("assembled in source", &verdict(diag.assembled_in_reference));
        field("source in assembled", &verdict(diag.reference_in_assembled));
    }

    section_mid("Sequence");
    row(&format!("  {}", elide(&assembly.sequence, BOX_WIDTH - 4)));
    section_bot();
}
