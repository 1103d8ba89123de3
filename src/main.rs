use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use md2html::{Config, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "md2html")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(input) = cli.input.as_deref() else {
        // No input: print usage to stdout and exit 0
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        println!();
        return;
    };

    if let Err(e) = run(input, &cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(input: &Path, cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };

    let html = md2html::convert_file(input, &config)?;

    match &cli.output {
        Some(output) => {
            fs::write(output, &html).map_err(|source| Error::Write {
                path: output.clone(),
                source,
            })?;
            info!(input = %input.display(), output = %output.display(), "wrote html");
        }
        None => print!("{}", html),
    }

    Ok(())
}
