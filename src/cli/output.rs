//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{HansegArgs, OutputFormat};
use crate::dictionary::PartOfSpeech;
use crate::error::Result;

/// Result of segmenting one line of text.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentResult {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Result of looking up one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
    pub pos: Option<PartOfSpeech>,
    pub frequency: Option<f64>,
}

/// Output a segmentation result in the requested format.
pub fn output_segment(result: &SegmentResult, args: &HansegArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{}", result.text);
            }
            println!("{}", format_tokens(&result.tokens));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output lookup results in the requested format.
pub fn output_lookup(results: &[LookupResult], args: &HansegArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for result in results {
                match (result.pos, result.frequency) {
                    (Some(pos), Some(frequency)) => {
                        println!("{}\tpos={}\tfrequency={}", result.word, pos, frequency)
                    }
                    _ => println!("{}\tnot found", result.word),
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&results, args),
    }
}

/// Render tokens as `word(position,rank)/` pairs.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}({},{})/", t.text, t.position, t.rank))
        .collect()
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HansegArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
