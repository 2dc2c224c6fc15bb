//! scene-convert - convert playground scene descriptions.
//!
//! Usage: scene-convert [-v] [--config converter.json] scene.json...

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use scene_converter::{ConverterConfig, JsonConverter};
use scene_loaders::LoaderRegistry;
use scene_playground::{
    data_sources, playground_registry, register_playground_loaders, render, PlaygroundError,
    PlaygroundResult,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "usage: scene-convert [-v] [--config converter.json] scene.json...";

#[derive(Debug, PartialEq)]
struct Args {
    verbose: bool,
    config: Option<PathBuf>,
    files: Vec<PathBuf>,
}

/// Parse arguments, excluding the program name.
fn parse_args<I>(argv: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args {
        verbose: false,
        config: None,
        files: Vec::new(),
    };

    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => args.verbose = true,
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            _ => args.files.push(PathBuf::from(arg)),
        }
    }

    if args.files.is_empty() {
        return Err(USAGE.into());
    }
    Ok(args)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read(path: &Path) -> PlaygroundResult<String> {
    fs::read_to_string(path).map_err(|e| PlaygroundError::file_read(path, e))
}

fn load_config(path: Option<&Path>) -> PlaygroundResult<ConverterConfig> {
    match path {
        Some(path) => ConverterConfig::from_json_str(&read(path)?)
            .map_err(|e| PlaygroundError::convert(path, e)),
        None => Ok(ConverterConfig::default()),
    }
}

fn run(args: &Args) -> PlaygroundResult<()> {
    let registry = playground_registry()?;
    let mut loaders = LoaderRegistry::with_defaults();
    register_playground_loaders(&mut loaders)?;

    let converter = JsonConverter::with_config(&registry, load_config(args.config.as_deref())?);

    for path in &args.files {
        let scene = converter
            .convert_str(&read(path)?)
            .map_err(|e| PlaygroundError::convert(path, e))?;

        for source in data_sources(&scene, &loaders) {
            match source.loader {
                Some(loader) => info!(layer = %source.layer, url = %source.url, %loader, "Data source"),
                None => warn!(layer = %source.layer, url = %source.url, "No loader for data source"),
            }
        }

        let rendered = serde_json::to_string_pretty(&render(&scene))
            .unwrap_or_else(|_| scene.to_string());
        println!("{}", rendered);
    }
    Ok(())
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
