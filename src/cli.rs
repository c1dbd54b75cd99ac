use clap::Parser as ClapParser;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a plain-text file to analyze (reads stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum number of frequency groups to display
    #[arg(short = 't', long = "top", default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub top: u8,

    /// Path to a custom stop word list, one word per line (bundled English list by default)
    #[arg(long = "stop-words")]
    pub stop_words: Option<PathBuf>,

    /// Output format for the frequency groups
    #[arg(short = 'o', long = "format", default_value = "terminal", value_parser = ["terminal", "json"])]
    pub format: String,
}
