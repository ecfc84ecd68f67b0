//! CLI argument parsing

use clap::{ArgAction, Parser};
use skywalker_core::i18n::Language;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skywalker")]
#[command(author, version, about = "AI-assisted security dashboard")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the data directory (preferences and scan history)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Override the interface language (en, az)
    #[arg(long)]
    pub language: Option<String>,

    /// Verbose output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse the language override, ignoring unknown codes
    pub fn parse_language(&self) -> Option<Language> {
        self.language.as_deref().and_then(Language::from_code)
    }

    /// Log filter for the verbosity count, used when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_override() {
        let args = Args::parse_from(["skywalker", "--language", "az"]);
        assert_eq!(args.parse_language(), Some(Language::Az));

        let args = Args::parse_from(["skywalker", "--language", "xx"]);
        assert_eq!(args.parse_language(), None);

        let args = Args::parse_from(["skywalker"]);
        assert_eq!(args.parse_language(), None);
    }

    #[test]
    fn test_verbosity_maps_to_log_filter() {
        assert_eq!(Args::parse_from(["skywalker"]).log_filter(), "warn");
        assert_eq!(Args::parse_from(["skywalker", "-v"]).log_filter(), "info");
        assert_eq!(Args::parse_from(["skywalker", "-vv"]).log_filter(), "debug");
        assert_eq!(Args::parse_from(["skywalker", "-vvv"]).log_filter(), "trace");
    }
}
