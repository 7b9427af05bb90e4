//! Argument parsing and top-level command execution

use clap::Parser;
use std::io;
use std::path::PathBuf;

use machim_core::{SplitConfig, Splitter};

use crate::error::CliResult;
use crate::input;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter, TsvFormatter};

/// Split Korean text into sentences
#[derive(Debug, Parser)]
#[command(name = "machim", version, about)]
pub struct Cli {
    /// Input files (reads stdin when none are given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keep boundaries found inside quotes and brackets
    #[arg(long)]
    pub no_enclosure_protection: bool,

    /// Disable the spoken-register template pass
    #[arg(long)]
    pub no_colloquial: bool,

    /// Print sentence and character counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with byte spans
    Json,
    /// Tab-separated `start end text` rows
    Tsv,
}

impl Cli {
    /// Execute the splitting run over all inputs.
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        let splitter = Splitter::new(self.split_config());
        let documents = input::read_documents(&self.files)?;
        log::info!("splitting {} document(s)", documents.len());

        let mut formatter = self.formatter();
        let mut sentence_count = 0usize;
        let mut char_count = 0usize;

        for document in &documents {
            log::debug!(
                "splitting {} ({} bytes)",
                document.source,
                document.text.len()
            );
            for sentence in splitter.split(&document.text) {
                // The whole-input fallback span can be pure whitespace.
                if sentence.text.chars().all(char::is_whitespace) {
                    continue;
                }
                formatter.format_sentence(sentence.text, sentence.start, sentence.end)?;
                sentence_count += 1;
            }
            char_count += document.text.chars().count();
        }
        formatter.finish()?;

        if self.stats {
            eprintln!("{sentence_count} sentences, {char_count} characters");
        }
        Ok(())
    }

    /// Splitting configuration implied by the flags.
    pub fn split_config(&self) -> SplitConfig {
        SplitConfig::builder()
            .enclosure_protection(!self.no_enclosure_protection)
            .colloquial_templates(!self.no_colloquial)
            .build()
    }

    fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
            OutputFormat::Tsv => Box::new(TsvFormatter::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_read_stdin_as_text() {
        let cli = Cli::try_parse_from(["machim"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.no_enclosure_protection);
        assert!(!cli.no_colloquial);
        assert!(!cli.stats);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::try_parse_from([
            "machim",
            "a.txt",
            "b.txt",
            "-f",
            "json",
            "--no-enclosure-protection",
            "--no-colloquial",
            "--stats",
            "-q",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_enclosure_protection);
        assert!(cli.no_colloquial);
        assert!(cli.stats);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_tsv_format_parses() {
        let cli = Cli::try_parse_from(["machim", "-f", "tsv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Tsv);
    }

    #[test]
    fn test_flags_invert_into_the_split_config() {
        let cli = Cli::try_parse_from(["machim", "--no-colloquial"]).unwrap();
        let config = cli.split_config();
        assert!(config.enclosure_protection());
        assert!(!config.colloquial_templates());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["machim", "-f", "xml"]).is_err());
    }
}
