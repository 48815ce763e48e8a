//! CLI for chatmark - renders chat message Markdown to safe HTML

use chatmark::{render_with_options, BulletStyle, Error, RenderOptions, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file path (reads stdin if omitted or "-")
    input: Option<PathBuf>,

    /// Output HTML file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Treat any leading run of whitespace, '-' and '*' as a bullet marker
    #[arg(long)]
    lenient_bullets: bool,

    /// Do not add language-* classes to fenced code blocks
    #[arg(long)]
    no_language_class: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let options = RenderOptions {
        bullets: if args.lenient_bullets {
            BulletStyle::Lenient
        } else {
            BulletStyle::Strict
        },
        language_classes: !args.no_language_class,
    };

    let markdown = read_input(args.input.as_ref())?;
    let html = render_with_options(&markdown, &options);

    match args.output {
        Some(output) => {
            std::fs::write(&output, &html)?;
            tracing::info!(path = %output.display(), "Wrote rendered HTML");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", html)?;
        }
    }
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    let (name, bytes) = match input {
        Some(path) if path.as_path() != Path::new("-") => {
            (path.display().to_string(), std::fs::read(path)?)
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            ("stdin".to_string(), buf)
        }
    };
    String::from_utf8(bytes)
        .map_err(|_| Error::InvalidInput(format!("{} is not valid UTF-8", name)))
}
