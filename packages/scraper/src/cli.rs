//! Command-line interface for the scraper.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    current_year, resolve_unions, validate_year, ScraperConfig, RSEQ_HEADERS,
    SPORTSMANAGER_HEADERS,
};
use crate::error::{Result, ScraperError};
use crate::http::HttpFeed;
use crate::output::{region_dir, RawDump};
use crate::provider::{run_region, Provider};
use crate::rseq::{RseqConfig, RseqScrape, RSEQ_REGION};
use crate::sportsmanager::UnionScrape;

/// Rugby Scraper - Collect Canadian rugby league data from public feeds.
#[derive(Parser)]
#[command(name = "rugby-scraper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging and raw payload dumps under <region>/<year>/raw/.
    /// Dumps are written as responses arrive, so a failed region keeps its
    /// raw/ directory (but no documents).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape provincial unions from the union feed.
    Unions {
        /// Union codes (e.g., BC QC AB), or ALL
        #[arg(required = true, num_args = 1..)]
        codes: Vec<String>,

        /// Competition year in YYYY format (default: current year)
        #[arg(short, long)]
        year: Option<String>,

        /// Output directory (default: data/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scrape the RSEQ student leagues.
    Rseq {
        /// Season year in YYYY format, used for the output directory (default: current year)
        #[arg(short, long)]
        year: Option<String>,

        /// Output directory (default: data/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// League and logo configuration file (default: built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Unions {
            codes,
            year,
            output,
        } => unions_command(&codes, year, output, cli.debug),
        Commands::Rseq {
            year,
            output,
            config,
        } => rseq_command(year, output, config.as_deref(), cli.debug),
    }
}

/// Resolve the year and runtime settings shared by both commands.
fn prepare(year: Option<String>, output: Option<PathBuf>) -> Result<(String, ScraperConfig)> {
    let year = year.unwrap_or_else(current_year);
    validate_year(&year)?;

    let mut settings = ScraperConfig::from_env()?;
    if let Some(output) = output {
        settings = settings.with_output_dir(output);
    }
    Ok((year, settings))
}

/// Execute the unions command.
fn unions_command(
    codes: &[String],
    year: Option<String>,
    output: Option<PathBuf>,
    debug: bool,
) -> Result<()> {
    let (year, settings) = prepare(year, output)?;
    let unions = resolve_unions(codes)?;
    let feed = HttpFeed::new(
        &settings.sportsmanager_url,
        SPORTSMANAGER_HEADERS,
        settings.timeout,
    )?;

    println!(
        "{} {} union(s) for {}",
        style("Scraping").bold(),
        style(unions.len()).cyan(),
        style(&year).green()
    );
    println!();

    let mut failed = Vec::new();
    for union in unions {
        let mut scrape = UnionScrape::new(union).with_target_year(&year);
        if debug {
            scrape = scrape.with_raw_dump(RawDump::new(&region_dir(
                &settings.output_dir,
                union.code,
                &year,
            )));
        }

        if let Err(e) = scrape_region(&scrape, &feed, &settings.output_dir, &year) {
            tracing::error!(union = union.code, error = %e, "Union failed");
            println!(
                "{} {}: {}",
                style("Failed").red().bold(),
                style(union.code).cyan(),
                e
            );
            failed.push(union.code.to_string());
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ScraperError::RegionsFailed { regions: failed })
    }
}

/// Execute the rseq command.
fn rseq_command(
    year: Option<String>,
    output: Option<PathBuf>,
    config: Option<&Path>,
    debug: bool,
) -> Result<()> {
    let (year, settings) = prepare(year, output)?;
    let config = match config {
        Some(path) => RseqConfig::from_file(path)?,
        None => RseqConfig::builtin()?,
    };
    let feed = HttpFeed::new(&settings.rseq_url, RSEQ_HEADERS, settings.timeout)?;

    println!(
        "{} {} league(s) for {}",
        style("Scraping").bold(),
        style(config.leagues.len()).cyan(),
        style(&year).green()
    );
    println!();

    let mut scrape = RseqScrape::new(config);
    if debug {
        scrape = scrape.with_raw_dump(RawDump::new(&region_dir(
            &settings.output_dir,
            RSEQ_REGION,
            &year,
        )));
    }

    scrape_region(&scrape, &feed, &settings.output_dir, &year)
}

/// Run one region behind a spinner and report where it was saved.
fn scrape_region<P: Provider>(
    provider: &P,
    feed: &HttpFeed,
    output_dir: &Path,
    year: &str,
) -> Result<()> {
    let pb = spinner(format!("Scraping {}...", provider.region_code()));
    let result = run_region(provider, feed, output_dir, year);
    pb.finish_and_clear();

    let dir = result?;
    println!(
        "{} {} → {}",
        style("Saved").green().bold(),
        style(provider.region_code()).cyan(),
        dir.display()
    );
    Ok(())
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_unions() {
        let cli = Cli::parse_from(["rugby-scraper", "unions", "BC", "qc"]);
        assert!(!cli.debug);

        let Commands::Unions {
            codes,
            year,
            output,
        } = cli.command
        else {
            panic!("expected unions command");
        };
        assert_eq!(codes, vec!["BC", "qc"]);
        assert!(year.is_none());
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_unions_with_options() {
        let cli = Cli::parse_from([
            "rugby-scraper",
            "unions",
            "ALL",
            "--year",
            "2025",
            "--output",
            "out",
            "--debug",
        ]);
        assert!(cli.debug);

        let Commands::Unions {
            codes,
            year,
            output,
        } = cli.command
        else {
            panic!("expected unions command");
        };
        assert_eq!(codes, vec!["ALL"]);
        assert_eq!(year, Some("2025".to_string()));
        assert_eq!(output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_cli_unions_requires_codes() {
        assert!(Cli::try_parse_from(["rugby-scraper", "unions"]).is_err());
    }

    #[test]
    fn test_cli_parse_rseq() {
        let cli = Cli::parse_from([
            "rugby-scraper",
            "--debug",
            "rseq",
            "--config",
            "leagues.yaml",
        ]);
        assert!(cli.debug);

        let Commands::Rseq { year, config, .. } = cli.command else {
            panic!("expected rseq command");
        };
        assert!(year.is_none());
        assert_eq!(config, Some(PathBuf::from("leagues.yaml")));
    }

    #[test]
    fn test_debug_help_mentions_failed_regions() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("a failed region keeps its"));
    }

    #[test]
    fn test_invalid_year_fails_before_any_request() {
        let cli = Cli::parse_from(["rugby-scraper", "unions", "QC", "--year", "26"]);
        let err = run(cli).unwrap_err();
        assert!(matches!(err, ScraperError::InvalidYear(_)));
    }
}
