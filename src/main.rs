mod cli;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use locmap::config::Config;
use locmap::loc::{self, LineWindow, LocOptions};
use locmap::{map, walk};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("locmap=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print every supported file below `root` with its dialect.
fn find(
    root: &Path,
    pattern: Option<&str>,
    include_tests: bool,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    for path in walk::find_files(root, pattern, include_tests)? {
        if let Some(dialect) = config.dialect_for(&path) {
            println!("{:<5} {}", dialect.name(), path.display());
        }
    }
    Ok(())
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "locmap", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Commands::Loc {
            paths,
            begin,
            end,
            json,
            listing,
            include_tests,
            pattern,
        } => {
            let paths = if paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                paths
            };
            let options = LocOptions {
                window: LineWindow::new(begin, end),
                json,
                listing,
                include_tests: include_tests || config.include_tests,
                pattern: pattern.or_else(|| config.pattern.clone()),
            };
            loc::run(&paths, &options, &config)
        }
        Commands::Map {
            file,
            dialect,
            json,
        } => map::run(&file, dialect, json, &config),
        Commands::Find {
            root,
            pattern,
            include_tests,
        } => {
            let root = root.unwrap_or_else(|| PathBuf::from("."));
            let pattern = pattern.or_else(|| config.pattern.clone());
            find(
                &root,
                pattern.as_deref(),
                include_tests || config.include_tests,
                &config,
            )
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = dispatch(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
