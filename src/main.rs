use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::info;

mod cli;

use clap::Parser;
use cli::{Cli, OutputFormat};
use ytscribe::provider::TranscriptProvider;
use ytscribe::youtube::YouTubeProvider;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytscribe.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytscribe")
        .join("logs")
}

fn resolve_format(cli_format: Option<OutputFormat>, config_format: Option<&str>) -> OutputFormat {
    if let Some(format) = cli_format {
        return format;
    }
    match config_format {
        Some("json") => OutputFormat::Json,
        Some("timestamped") => OutputFormat::Timestamped,
        _ => OutputFormat::Text,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytscribe::config::Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = ytscribe::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    let lang = cli.lang.clone().or_else(|| config.default_lang.clone());
    let format = resolve_format(cli.format, config.default_format.as_deref());

    let client = reqwest::Client::new();
    let provider = YouTubeProvider::new(client);

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytscribe <URL>\n       echo <URL> | ytscribe");
    }

    for url_input in &urls {
        let url_input = url_input.trim().to_string();
        if url_input.is_empty() {
            continue;
        }

        let video_id = ytscribe::resolve_video_id(&url_input)
            .ok_or_else(|| eyre::eyre!("could not extract video ID from: {url_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  <11-character video ID>"))?;

        if cli.list_languages {
            let tracks = provider.list_tracks(&video_id).await?;
            for track in &tracks {
                let generated = if track.is_generated { " (auto-generated)" } else { "" };
                println!("{}\t{}{}", track.code, track.name, generated);
            }
            continue;
        }

        let result = ytscribe::transcript::fetch_transcript(&provider, &video_id, lang.as_deref()).await?;

        if cli.verbose {
            eprintln!(
                "Video: {}\nTracks: {}\nSegments: {}",
                result.video_id,
                result.languages.len(),
                result.segments.len(),
            );
        }

        let rendered = match format {
            OutputFormat::Text => result.plain_text.clone(),
            OutputFormat::Timestamped => result.timestamped_text.clone(),
            OutputFormat::Json => ytscribe::output::render_json(&result)?,
        };

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    Ok(())
}
