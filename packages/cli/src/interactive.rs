//! Interactive menu for the staff directory scraper.
//!
//! Provides a `dialoguer` flow for running a scrape without memorizing CLI
//! flags: pick a page set, pick an output format, optionally override the
//! name schema.

use dialoguer::{Confirm, Input, Select};
use staff_directory_cli_utils::MultiProgress;
use staff_directory_source::registry::all_page_sets;

use crate::report::OutputFormat;

/// Prompts for a page set and output options, then runs the scrape.
///
/// # Errors
///
/// Returns an error if a prompt fails or the scrape cannot run.
pub async fn run(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let sets = all_page_sets();
    if sets.is_empty() {
        println!("No page sets configured.");
        return Ok(());
    }

    let labels: Vec<String> = sets
        .iter()
        .map(|s| format!("{}: {} ({} pages)", s.id(), s.name(), s.urls.len()))
        .collect();

    let idx = Select::new()
        .with_prompt("Which page set should be scraped?")
        .items(&labels)
        .default(0)
        .interact()?;
    let mut page_set = sets[idx].clone();

    let format_labels: Vec<&str> = OutputFormat::ALL.iter().map(AsRef::as_ref).collect();
    let format_idx = Select::new()
        .with_prompt("Output format")
        .items(&format_labels)
        .default(0)
        .interact()?;
    let format = OutputFormat::ALL[format_idx];

    page_set.options.split_name = Confirm::new()
        .with_prompt("Split names into first/last?")
        .default(page_set.options.split_name)
        .interact()?;

    let output: String = Input::new()
        .with_prompt("Output file (empty for stdout)")
        .allow_empty(true)
        .interact_text()?;
    let output = output.trim();
    let output = (!output.is_empty()).then(|| std::path::Path::new(output));

    crate::run_scrape(multi, &page_set, format, output).await
}
