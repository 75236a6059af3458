use anyhow::{Context, Result};
use clap::Parser;
use enrich_lib::{enrich, EnrichmentRequest};
use log::info;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Select the most likely phone numbers for a borrower from a batch of
/// scraped person-profile candidates.
#[derive(Parser, Debug)]
#[command(name = "enrich", about)]
struct Args {
    /// JSON file holding the target name/address and the candidate batch.
    input: PathBuf,

    /// Also print the rank-annotated matching candidates.
    #[arg(long)]
    show_matches: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read request file {}", args.input.display()))?;
    let request: EnrichmentRequest =
        serde_json::from_str(&raw).context("Failed to parse enrichment request JSON")?;

    info!(
        "Enriching '{}' ({} candidates)",
        request.target_name,
        request.candidates.len()
    );

    let (selection, matches) = enrich(&request);

    info!(
        "Selected {} phone(s) across {} ranked match(es)",
        selection.phones().len(),
        matches.len()
    );

    let output = if args.show_matches {
        json!({ "selection": selection, "matches": matches })
    } else {
        json!({ "selection": selection })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
