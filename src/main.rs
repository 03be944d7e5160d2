use std::fs;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use biblatex::Bibliography;
use clap::{Parser, ValueEnum};

use publist::{Config, OutputFormat, Record};

/// Generate a static publication list from a BibTeX database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file; when this flag is omitted, a `publist.yaml` in the
    /// working directory is picked up if present
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: Format,

    /// Input BibTeX file
    bibtex: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Html,
    Markdown,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Markdown => OutputFormat::Markdown,
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = "publist.yaml";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;

    let source = fs::read_to_string(&args.bibtex)
        .map_err(|error| format!("could not read '{}': {}", args.bibtex.display(), error))?;
    let bibliography = parse_bibliography(&args.bibtex, &source)?;
    let records = Record::resolve_all(&bibliography);

    let output = OutputFormat::from(args.format)
        .renderer(config)
        .render(&records)?;

    let mut out = BufWriter::new(stdout());
    out.write_all(output.as_bytes())?;
    Ok(())
}

/// Load the config file. An explicitly given path must exist; the default
/// path is skipped silently when absent.
fn load_config(path: Option<&Path>) -> Result<Config, publist::ConfigError> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(Config::default());
            }
            default
        }
    };
    log::info!("evaluating config file '{}'", path.display());
    Config::from_path(path)
}

/// Parse the bibliography, reporting failures on stderr before aborting.
fn parse_bibliography(
    path: &Path,
    source: &str,
) -> Result<Bibliography, Box<dyn std::error::Error>> {
    match Bibliography::parse(source) {
        Ok(bibliography) => Ok(bibliography),
        Err(error) => {
            #[cfg(feature = "diagnostics")]
            eprintln!(
                "{}",
                publist::diagnostics::render_parse_error(
                    &path.display().to_string(),
                    source,
                    &error
                )
            );
            #[cfg(not(feature = "diagnostics"))]
            eprintln!("error parsing '{}': {}", path.display(), error);
            Err("could not parse the bibliography".into())
        }
    }
}
