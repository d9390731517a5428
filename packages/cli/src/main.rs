#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the staff directory scraper.
//!
//! Scrapes an embedded or file-based page set, one page at a time, and
//! prints the combined records as a table, CSV or JSON. Running with no
//! subcommand opens an interactive menu.
//!
//! Uses `indicatif-log-bridge` (via [`staff_directory_cli_utils::init_logger`])
//! so that skipped-page notices and the page progress bar share the
//! terminal cleanly.

mod interactive;
mod report;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use staff_directory_cli_utils::{IndicatifProgress, MultiProgress};
use staff_directory_scraper::scrape_all;
use staff_directory_source::page_set::{PageSet, load_page_set};
use staff_directory_source::registry::{DEFAULT_PAGE_SET, all_page_sets, find_page_set};

use crate::report::OutputFormat;

#[derive(Parser)]
#[command(name = "staff_directory", about = "Staff directory table scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a page set and print the combined records
    Scrape {
        /// Embedded page set id (see `sets`). Defaults to "`mens_soccer`"
        #[arg(long, conflicts_with = "file")]
        set: Option<String>,
        /// Page set TOML file to load instead of an embedded set
        #[arg(long)]
        file: Option<PathBuf>,
        /// Page URL to scrape instead of the set's list (repeatable)
        #[arg(long = "url")]
        urls: Vec<String>,
        /// Output format: table, csv or json
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Do not resolve organization names
        #[arg(long)]
        no_organization: bool,
        /// Emit First Name / Last Name columns
        #[arg(long, conflicts_with = "full_name")]
        split_name: bool,
        /// Emit a single Name column
        #[arg(long)]
        full_name: bool,
    },
    /// List embedded page sets
    Sets,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = staff_directory_cli_utils::init_logger();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run(&multi).await;
    };

    match command {
        Commands::Sets => {
            let sets = all_page_sets();
            println!("{:<20} {:>5}  NAME", "ID", "PAGES");
            println!("{}", "-".repeat(60));
            for set in &sets {
                println!("{:<20} {:>5}  {}", set.id(), set.urls.len(), set.name());
            }
        }
        Commands::Scrape {
            set,
            file,
            urls,
            format,
            output,
            no_organization,
            split_name,
            full_name,
        } => {
            let mut page_set = match file {
                Some(path) => load_page_set(&path)?,
                None => find_page_set(set.as_deref().unwrap_or(DEFAULT_PAGE_SET))?,
            };
            if !urls.is_empty() {
                page_set.urls = urls;
            }
            if no_organization {
                page_set.options.include_organization = false;
            }
            if split_name {
                page_set.options.split_name = true;
            } else if full_name {
                page_set.options.split_name = false;
            }

            run_scrape(&multi, &page_set, format, output.as_deref()).await?;
        }
    }

    Ok(())
}

/// Scrapes every page of `page_set` in order and writes the report.
///
/// # Errors
///
/// Returns an error if the scraper cannot be configured or the report
/// cannot be written. Individual page failures are logged and skipped.
pub async fn run_scrape(
    multi: &MultiProgress,
    page_set: &PageSet,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scraper = page_set.scraper()?;
    log::info!(
        "Scraping {} page(s) from '{}'",
        page_set.urls.len(),
        page_set.id()
    );

    let progress = IndicatifProgress::pages_bar(multi, page_set.name());
    let report = scrape_all(&scraper, &page_set.urls, &progress).await?;

    match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            report::render(&report.records, scraper.options(), format, file)?;
            log::info!(
                "Wrote {} records to {}",
                report.records.len(),
                path.display()
            );
        }
        None => {
            report::render(&report.records, scraper.options(), format, std::io::stdout().lock())?;
        }
    }

    report::log_skipped(&report);

    Ok(())
}
