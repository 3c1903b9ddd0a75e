//! # Micropad - A Minimal Highlighting Editor Core
//!
//! Reads a file, runs the full highlighting pipeline over it, and renders
//! the result to the terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Highlight a file (language detected from the filename)
//! cargo run -- path/to/file.py
//!
//! # Force a language
//! cargo run -- notes.txt --language html
//!
//! # Use the built-in light theme, or a theme file
//! cargo run -- main.rs --light
//! cargo run -- main.rs --theme mytheme.json
//! ```

mod config;
mod surface;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use micropad_highlight::{HighlightEngine, Theme};
use micropad_syntax::{detect_language, supported_languages};
use surface::TerminalSurface;

/// Micropad - minimal text editor core with live syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "micropad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to highlight
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Highlighting language (default: filename detection, then config)
    #[arg(short, long)]
    language: Option<String>,

    /// Theme file (JSON)
    #[arg(short, long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Use the built-in light theme
    #[arg(long)]
    light: bool,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Micropad v{}", env!("CARGO_PKG_VERSION"));

    if args.list_languages {
        for language in supported_languages() {
            println!("{language}");
        }
        return Ok(());
    }

    let Some(file) = args.file else {
        anyhow::bail!("no file given (see --help)");
    };

    let config = Config::load();

    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;

    let language = args
        .language
        .or_else(|| {
            file.file_name()
                .and_then(|name| name.to_str())
                .and_then(detect_language)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| config.language.clone());

    let theme = match args.theme.as_ref().or(config.theme.as_ref()) {
        Some(path) => Theme::load(path)
            .with_context(|| format!("loading theme {}", path.display()))?,
        None if args.light => Theme::light(),
        None => Theme::dark(),
    };

    tracing::debug!(language = %language, theme = %theme.name, "highlighting");

    let engine = HighlightEngine::new(&language, theme)?;
    let mut surface = TerminalSurface::new(text);
    engine.rehighlight(&mut surface)?;

    print!("{}", surface.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["micropad"]);
        assert!(args.file.is_none());
        assert!(!args.light);
    }

    #[test]
    fn test_args_with_file_and_language() {
        let args = Args::parse_from(["micropad", "test.py", "--language", "python"]);
        assert_eq!(args.file, Some(PathBuf::from("test.py")));
        assert_eq!(args.language.as_deref(), Some("python"));
    }
}
