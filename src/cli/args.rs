//! Command line argument parsing for the hanseg CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::matcher::{MatchOptions, MatchParameter};

/// Hanseg - A Chinese/English word segmenter
#[derive(Parser, Debug, Clone)]
#[command(name = "hanseg")]
#[command(about = "A dictionary-driven Chinese/English word segmenter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HansegArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HansegArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Segment text given as an argument, or each line of standard input
    Segment(SegmentArgs),

    /// Print the dictionary entry of words
    Lookup(LookupArgs),
}

/// Where the dictionaries and settings come from.
#[derive(Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// Dictionary directory (overrides the configuration file)
    #[arg(short, long, value_name = "DIR", env = "HANSEG_DICT_DIR")]
    pub dict: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for segmenting text
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Text to segment (reads standard input when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Recognize Chinese personal names
    #[arg(long)]
    pub names: bool,

    /// Rank tilings by frequency before single-character words
    #[arg(long)]
    pub frequency_first: bool,

    /// Output only the best tiling
    #[arg(long)]
    pub single_best: bool,

    /// Additionally output every Chinese character
    #[arg(long)]
    pub force_single: bool,

    /// Keep each out-of-vocabulary character separate
    #[arg(long)]
    pub no_unknown: bool,

    /// Keep stop words
    #[arg(long)]
    pub keep_stop_words: bool,

    /// Keep whitespace runs
    #[arg(long)]
    pub keep_space: bool,

    /// Lower-case English words
    #[arg(long)]
    pub ignore_case: bool,

    /// Output lower-case forms and stems of English words
    #[arg(long)]
    pub english_segment: bool,

    /// Split English words at letter/digit boundaries
    #[arg(long)]
    pub english_split: bool,

    /// Output synonyms
    #[arg(long)]
    pub synonyms: bool,

    /// Number of extra ranked tilings to output
    #[arg(short, long)]
    pub redundancy: Option<usize>,
}

impl SegmentArgs {
    /// Apply the flags that are set on top of configured options.
    pub fn apply(&self, options: &mut MatchOptions, params: &mut MatchParameter) {
        options.chinese_name_identify |= self.names;
        options.frequency_first |= self.frequency_first;
        options.force_single_word |= self.force_single;
        options.ignore_capital |= self.ignore_case;
        options.english_segment |= self.english_segment;
        options.english_multi_dimensionality |= self.english_split;
        options.synonym_output |= self.synonyms;
        if self.single_best {
            options.multi_dimensionality = false;
        }
        if self.no_unknown {
            options.unknown_word_identify = false;
        }
        if self.keep_stop_words {
            options.filter_stop_words = false;
        }
        if self.keep_space {
            options.ignore_space = false;
        }
        if let Some(redundancy) = self.redundancy {
            params.redundancy = redundancy;
        }
    }
}

/// Arguments for dictionary lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_command() {
        let args = HansegArgs::parse_from([
            "hanseg",
            "-vv",
            "segment",
            "中华人民共和国",
            "--dict",
            "/tmp/dict",
            "--names",
            "--single-best",
            "-r",
            "2",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Human);
        let Command::Segment(segment) = args.command else {
            panic!("expected segment command");
        };
        assert_eq!(segment.text.as_deref(), Some("中华人民共和国"));
        assert_eq!(segment.dictionary.dict, Some(PathBuf::from("/tmp/dict")));

        let mut options = MatchOptions::default();
        let mut params = MatchParameter::default();
        segment.apply(&mut options, &mut params);
        assert!(options.chinese_name_identify);
        assert!(!options.multi_dimensionality);
        assert!(options.unknown_word_identify);
        assert_eq!(params.redundancy, 2);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = HansegArgs::parse_from(["hanseg", "-q", "-v", "-f", "json", "lookup", "中国"]);
        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_lookup_requires_words() {
        assert!(HansegArgs::try_parse_from(["hanseg", "lookup"]).is_err());
    }
}
