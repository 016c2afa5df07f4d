//! Cleavescan CLI - command-line cut-site analysis for DNA sequences.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use cleavescan::analysis::enzymes;
use cleavescan::{analyze_with, AnalysisOptions, Report};

/// Cleavescan - Restriction cut-site analysis
#[derive(Parser, Debug)]
#[command(name = "cleavescan")]
#[command(author, version, about = "Finds restriction cut sites in DNA sequences", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel scanning
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a DNA sequence against a cutting agent.
    ///
    /// The agent may be a catalog enzyme name (e.g. "EcoRI") or a raw
    /// IUPAC recognition pattern (e.g. "GAATTC").
    Analyze {
        /// DNA sequence to analyze
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        sequence: Option<String>,

        /// Read the sequence from a file instead
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Cutting agent: enzyme name or IUPAC pattern
        #[arg(short, long)]
        agent: String,

        /// Context window for efficiency scoring (bases each side)
        #[arg(long, default_value = "4")]
        window: usize,

        /// Reject sequences longer than this many bases
        #[arg(long)]
        max_length: Option<usize>,

        /// Fail when no cut sites are found
        #[arg(long)]
        require_matches: bool,

        /// Partition the scan across worker threads
        #[arg(long)]
        parallel: bool,

        /// Output format (pretty, csv, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in restriction enzyme catalog.
    Enzymes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Analyze {
            sequence,
            input,
            agent,
            window,
            max_length,
            require_matches,
            parallel,
            format,
            output,
        } => {
            let raw = match (sequence, input) {
                (Some(text), None) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read sequence from {}", path.display()))?,
                _ => bail!("provide a sequence argument or --input, not both"),
            };

            let options = AnalysisOptions {
                window,
                max_sequence_length: max_length,
                require_matches,
                parallel,
            };
            let report = analyze_with(&raw, &agent, &options)?;

            let rendered = match format.as_str() {
                "pretty" => render_pretty(&raw, &agent, &report),
                "csv" => render_csv(&report),
                "json" => serde_json::to_string_pretty(&report)?,
                other => bail!("unknown format: {other} (expected pretty, csv, or json)"),
            };

            match output {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
        Commands::Enzymes => {
            print_enzymes();
        }
    }

    Ok(())
}

/// Human-readable label for the agent: catalog enzymes show their name and
/// site, raw patterns show the normalized pattern.
fn agent_label(agent: &str) -> String {
    match enzymes::lookup(agent) {
        Some(enzyme) => format!("{} ({})", enzyme.name, enzyme.recognition),
        None => agent
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<String>()
            .to_ascii_uppercase(),
    }
}

fn render_pretty(raw_sequence: &str, agent: &str, report: &Report) -> String {
    let bases = raw_sequence
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .count();

    let mut out = String::new();
    let _ = writeln!(out, "\n🧬 Analysis Results");
    let _ = writeln!(out, "  • Sequence: {bases} bp");
    let _ = writeln!(out, "  • Cutting Agent: {}", agent_label(agent));
    let _ = writeln!(out, "  • Sites Found: {}", report.len());

    if report.is_empty() {
        let _ = writeln!(out, "\n  No cut sites found.");
        return out;
    }

    let site_width = report
        .iter()
        .map(|s| s.matched().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {:>8}  {:<site_width$}  Strand  Efficiency",
        "Position", "Site"
    );
    for site in report {
        let _ = writeln!(
            out,
            "  {:>8}  {:<site_width$}  {:^6}  {} {:>5.1}%",
            site.position(),
            site.matched().to_string(),
            site.strand().symbol(),
            efficiency_bar(site.efficiency()),
            site.efficiency() * 100.0
        );
    }
    out
}

/// Render an efficiency in [0, 1] as a fixed-width bar, mirroring the
/// percentage bar of the results table.
fn efficiency_bar(efficiency: f64) -> String {
    const WIDTH: usize = 20;
    let filled = (efficiency.clamp(0.0, 1.0) * WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

fn render_csv(report: &Report) -> String {
    let mut out = String::from("position,site,strand,efficiency\n");
    for site in report {
        let _ = writeln!(
            out,
            "{},{},{},{:.6}",
            site.position(),
            site.matched(),
            site.strand().symbol(),
            site.efficiency()
        );
    }
    out
}

fn print_enzymes() {
    println!("\n🧪 Restriction Enzyme Catalog");
    let name_width = enzymes::CATALOG
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(8);
    for enzyme in enzymes::CATALOG {
        println!("  • {:<name_width$}  {}", enzyme.name, enzyme.recognition);
    }
    println!();
}
