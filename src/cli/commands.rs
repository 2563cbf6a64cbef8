//! Command implementations for the hanseg CLI.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::analysis::tokenizer::Segmenter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SegmentConfig;
use crate::dictionary::Dictionaries;
use crate::error::{Result, SegmentError};

/// Execute a CLI command.
pub fn execute_command(args: HansegArgs) -> Result<()> {
    match &args.command {
        Command::Segment(segment_args) => segment_text(segment_args, &args),
        Command::Lookup(lookup_args) => lookup_words(lookup_args, &args),
    }
}

/// Resolve the configuration: the config file if given, then the dictionary
/// directory from the command line.
fn load_config(args: &DictionaryArgs) -> Result<SegmentConfig> {
    let mut config = match &args.config {
        Some(path) => SegmentConfig::from_file(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?,
        None => SegmentConfig::default(),
    };
    if let Some(dir) = &args.dict {
        config.dict_dir = Some(dir.clone());
    }
    Ok(config)
}

fn load_dictionaries(config: &SegmentConfig) -> Result<Dictionaries> {
    let dir = config
        .dict_dir
        .as_ref()
        .ok_or_else(|| SegmentError::config("no dictionary directory (use --dict or dict_dir)"))?;

    let start = Instant::now();
    let dictionaries = Dictionaries::load(dir)
        .with_context(|| format!("failed to load dictionaries from {}", dir.display()))?;
    info!(
        "Loaded {} words from {} in {:?}",
        dictionaries.lexicon.len(),
        dir.display(),
        start.elapsed()
    );
    Ok(dictionaries)
}

/// Segment the text argument, or every line of standard input.
fn segment_text(args: &SegmentArgs, cli_args: &HansegArgs) -> Result<()> {
    let mut config = load_config(&args.dictionary)?;
    args.apply(&mut config.options, &mut config.params);

    let segmenter = Segmenter::new(Arc::new(load_dictionaries(&config)?))
        .with_options(config.options)
        .with_params(config.params);

    let segment_line = |text: String| -> Result<()> {
        let tokens = segmenter.segment(&text)?;
        output_segment(&SegmentResult { text, tokens }, cli_args)
    };

    match &args.text {
        Some(text) => segment_line(text.clone()),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read standard input")?;
                segment_line(line)?;
            }
            Ok(())
        }
    }
}

/// Print the dictionary attributes of each word.
fn lookup_words(args: &LookupArgs, cli_args: &HansegArgs) -> Result<()> {
    let config = load_config(&args.dictionary)?;
    let dictionaries = load_dictionaries(&config)?;

    let results: Vec<LookupResult> = args
        .words
        .iter()
        .map(|word| {
            let attr = dictionaries.lexicon.get(word);
            LookupResult {
                word: word.clone(),
                found: attr.is_some(),
                pos: attr.map(|a| a.pos),
                frequency: attr.map(|a| a.frequency),
            }
        })
        .collect();

    output_lookup(&results, cli_args)
}
