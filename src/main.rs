use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

mod cli;

use cli::Args;
use topic_words::analyze::{
    accumulate_frequencies, format_and_print_frequency_groups, rank_into_groups, StopWordSet,
};

struct AnalyzeParams {
    file: Option<PathBuf>,
    top: usize,
    stop_words: Option<PathBuf>,
    format: String,
}

/// Reads the text to analyze from the given file, or from stdin when no file
/// was provided
fn read_input_text(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

/// Builds the stop word set once, from a user-supplied list when given,
/// otherwise from the bundled English list
fn load_stop_words(path: Option<&PathBuf>) -> Result<StopWordSet> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read stop word list {}", path.display()))?;
            Ok(StopWordSet::load(contents.split_whitespace()))
        }
        None => Ok(StopWordSet::bundled()),
    }
}

fn handle_analyze(params: AnalyzeParams) -> Result<()> {
    let terminal_output = params.format != "json";

    if terminal_output {
        match &params.file {
            Some(path) => println!("{} {}", "Source:".bold().green(), path.display()),
            None => println!("{} {}", "Source:".bold().green(), "stdin"),
        }
        if params.top != 6 {
            println!("{} {}", "Groups:".bold().green(), params.top);
        }
        if let Some(path) = &params.stop_words {
            println!("{} {}", "Stop words:".bold().green(), path.display());
        }
    }

    let start_time = Instant::now();

    let stop_words = load_stop_words(params.stop_words.as_ref())?;
    let text = read_input_text(params.file.as_ref())?;

    let frequencies = accumulate_frequencies(&text, &stop_words);
    let groups = rank_into_groups(&frequencies, params.top);

    let duration = start_time.elapsed();

    if groups.is_empty() {
        if terminal_output {
            println!("{}", "No candidate words found.".yellow().bold());
            println!("Analysis completed in {:.2?}", duration);
        } else {
            format_and_print_frequency_groups(&groups, &params.format);
        }
    } else {
        if terminal_output {
            println!("Analysis completed in {:.2?}", duration);
            println!();
        }
        format_and_print_frequency_groups(&groups, &params.format);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    handle_analyze(AnalyzeParams {
        file: args.file,
        top: args.top as usize,
        stop_words: args.stop_words,
        format: args.format,
    })
}
