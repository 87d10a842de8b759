//! Hazcode Extractor
//!
//! Pulls H-, P- and EUH-statements and the water-hazard class out of
//! safety data sheets, given as PDF files or pasted text, and prints lines
//! ready to paste into a spreadsheet.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use hazcode_utils::{init_logging, AppConfig, OutputFormat};
use tracing::debug;

mod extraction;
mod input;
mod pdf_processor;
mod sources;

use extraction::SheetExtractor;
use input::PromptReader;

#[derive(Parser, Debug)]
#[command(
    name = "hazcode",
    version,
    about = "Extract H/P/EUH statements and WGK from safety data sheets"
)]
struct Cli {
    /// PDF files or glob patterns (e.g. `sheets/*.pdf`). Prompts for input when omitted.
    patterns: Vec<String>,

    /// Print results as JSON instead of `;`-separated lines
    #[arg(long)]
    json: bool,

    /// Number of leading PDF pages to read
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if let Some(max_pages) = self.max_pages {
            config.extraction.max_pdf_pages = max_pages;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    cli.apply(&mut config);
    init_logging(&config.logging)?;
    debug!(?config, "Configuration loaded");

    let extractor = SheetExtractor::new(&config);

    if !cli.patterns.is_empty() {
        let output = extractor
            .run(cli.patterns.iter().map(String::as_str))
            .context("Failed to render results")?;
        println!("{}", output);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut prompt = PromptReader::new(stdin.lock(), io::stdout(), &config.extraction.quit_keyword);
    extractor
        .run_interactive(&mut prompt)
        .context("Interactive session failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["hazcode", "--json", "--max-pages", "5", "a.pdf", "b/*.PDF"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.extraction.max_pdf_pages, 5);
        assert_eq!(cli.patterns, vec!["a.pdf", "b/*.PDF"]);
    }

    #[test]
    fn test_cli_defaults_keep_config() {
        let cli = Cli::parse_from(["hazcode"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.extraction.max_pdf_pages, 3);
        assert!(cli.patterns.is_empty());
    }
}
