//! Prodload CLI - Generate the product import SQL script
//!
//! # Main Command
//!
//! ```bash
//! prodload generate                 # producto.txt -> importar-todos-productos-completo.sql
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! prodload parse producto.txt      # Dump normalized records as JSON
//! prodload rules                   # Show the category assignment rules
//! ```

use clap::{Parser, Subcommand};
use prodload::{
    generate, load_file, parse_catalog, rules_description, GenerateOptions, RunSummary,
    SkipReason, SkippedLine, SqlTemplate, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "prodload")]
#[command(about = "Generate the bulk product import SQL script from a catalog export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: catalog export -> SQL import script
    Generate {
        /// Input catalog file (tab-separated)
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output SQL file (overwritten each run)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Parse the catalog and output normalized records as JSON
    Parse {
        /// Input catalog file (tab-separated)
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the category assignment rules
    Rules,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { input, output } => cmd_generate(&input, &output),
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),
        Commands::Rules => cmd_rules(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_generate(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading catalog: {}", input.display());

    let options = GenerateOptions {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        template: SqlTemplate::default(),
    };
    let summary = generate(&options)?;

    eprintln!(
        "   Encoding: {} (chardet guess: {})",
        summary.encoding, summary.detected_charset
    );
    print_skip_report(&summary.skipped);

    eprintln!("✅ SQL generated successfully!");
    eprintln!("📊 Records processed: {}", summary.record_count);
    eprintln!("📁 Output file: {}", summary.output.display());

    print_sample(&summary);
    Ok(())
}

fn print_sample(summary: &RunSummary) {
    if summary.sample.is_empty() {
        return;
    }
    eprintln!("\n🔍 Sample records:");
    for (i, tuple) in summary.sample.iter().enumerate() {
        eprintln!("   {}. {}", i + 1, tuple.trim_start());
    }
    if summary.remaining > 0 {
        eprintln!("   ... and {} more", summary.remaining);
    }
}

/// Print data-line skips grouped by reason. The header row is skipped on
/// every run and is not worth reporting.
fn print_skip_report(skipped: &[SkippedLine]) {
    let data_skips: Vec<&SkippedLine> = skipped
        .iter()
        .filter(|s| s.reason != SkipReason::Header)
        .collect();
    if data_skips.is_empty() {
        return;
    }

    eprintln!("   ⚠️  {} lines skipped:", data_skips.len());
    let mut by_reason: Vec<(SkipReason, Vec<usize>)> = Vec::new();
    for skip in data_skips {
        match by_reason.iter_mut().find(|(reason, _)| *reason == skip.reason) {
            Some((_, lines)) => lines.push(skip.line),
            None => by_reason.push((skip.reason, vec![skip.line])),
        }
    }

    for (reason, lines) in by_reason {
        let sample: Vec<String> = lines.iter().take(5).map(|l| l.to_string()).collect();
        let more = if lines.len() > 5 {
            format!(" ... +{}", lines.len() - 5)
        } else {
            String::new()
        };
        eprintln!("      • {} (lines: {}{})", reason.describe(), sample.join(", "), more);
    }
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing catalog: {}", input.display());

    let loaded = load_file(input)?;
    eprintln!("   Encoding: {}", loaded.encoding);

    let parsed = parse_catalog(&loaded);
    print_skip_report(&parsed.skipped);
    eprintln!("✅ Parsed {} records", parsed.records.len());

    let json = serde_json::to_string_pretty(&parsed.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_rules() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", rules_description());
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
