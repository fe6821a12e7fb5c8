use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Timestamped,
    Json,
}

#[derive(Parser)]
#[command(name = "ytscribe", about = "YouTube transcript fetcher", version)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Preferred transcript language (first available track if omitted)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output format: text (default), timestamped, json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List available transcript tracks and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Show selection and track metadata on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
