//! ts-case-rename: CLI for assigning case identifiers to touchstone files

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use touchstone_case::{rename_cases, RenameConfig};

#[derive(Parser, Debug)]
#[command(name = "ts-case-rename")]
#[command(about = "Assign case identifiers to touchstone files and rewrite their port labels")]
#[command(version)]
struct Args {
    /// Directory containing touchstone files
    dir: PathBuf,

    /// Touchstone extension to match
    #[arg(long, default_value = ".s40p")]
    extension: String,

    /// Manifest filename, written inside DIR
    #[arg(long, default_value = "case_mapping.csv")]
    manifest_name: String,

    /// Also process files already carrying a C<n>_ prefix (stacks another prefix)
    #[arg(long)]
    reprocess_prefixed: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = RenameConfig {
        extension: args.extension,
        manifest_name: args.manifest_name,
        reprocess_prefixed: args.reprocess_prefixed,
    };

    let summary = rename_cases(&args.dir, &config)
        .with_context(|| format!("Failed to process touchstone directory: {:?}", args.dir))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Processed {} files. Case mapping written to {}.",
            summary.files_processed,
            summary.manifest_path.display()
        );
    }

    Ok(())
}
