//! Command-line front end for the explorer window.
//!
//! `browse` drives a window over the host filesystem from stdin.
//! `snapshot` writes a manifest the browser front end can load.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use explorer_cli::{Command, Flow, Session, SessionError};
use explorer_core::{
    normalize_path, DirectoryBundle, EmbeddedBundle, ExplorerConfig, ExplorerError,
    ExplorerWindow, FsModel, LocalSource, Manifest, ResourceBundle, SystemLocations,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "explorer-cli")]
#[command(about = "Browse the filesystem through the explorer window")]
struct Cli {
    /// Window configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and print the views after each one
    Browse {
        /// Load the stylesheet and icons from this directory
        #[arg(long)]
        resources: Option<PathBuf>,

        /// Model root, overriding the configuration
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Capture filesystem metadata and standard locations as JSON
    Snapshot {
        /// Directory to capture, defaults to the OS root
        #[arg(long)]
        root: Option<PathBuf>,

        /// Directory levels listed below the root and each location
        #[arg(short, long, default_value_t = 2)]
        depth: usize,

        /// Include dot-files
        #[arg(long)]
        hidden: bool,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "explorer-cli failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };

    match cli.command {
        Commands::Browse { resources, root } => browse(config, resources.as_deref(), root),
        Commands::Snapshot {
            root,
            depth,
            hidden,
            output,
        } => snapshot(&config, root, depth, hidden, output.as_deref()),
    }
}

// =============================================================================
// Browse
// =============================================================================

/// Resolve symlinks and `..` in a root given on the command line or in the
/// configuration. Paths that do not exist are only folded lexically.
fn resolve_root(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| normalize_path(path))
}

fn browse(
    mut config: ExplorerConfig,
    resources: Option<&Path>,
    root: Option<PathBuf>,
) -> Result<(), CliError> {
    if root.is_some() {
        config.root_path = root;
    }
    config.root_path = config.root_path.as_deref().map(resolve_root);

    let bundle: Box<dyn ResourceBundle> = match resources {
        Some(dir) => Box::new(DirectoryBundle::new(dir)),
        None => Box::new(EmbeddedBundle),
    };
    let model = FsModel::new(LocalSource).with_hidden(config.show_hidden);
    let window = ExplorerWindow::new(&config, bundle.as_ref(), model, SystemLocations)?;
    info!(title = window.title(), "window ready");

    let mut session = Session::new(window);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    session.render_list(&mut stdout)?;
    loop {
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(explorer_cli::CommandError::Empty) => continue,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        match session.execute(command, &mut stdout) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            // Navigation failures are reported and the session goes on.
            Err(SessionError::Explorer(err)) => writeln!(stdout, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

fn snapshot(
    config: &ExplorerConfig,
    root: Option<PathBuf>,
    depth: usize,
    hidden: bool,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let root = resolve_root(&root.unwrap_or_else(|| config.root_path()));
    let show_hidden = hidden || config.show_hidden;
    info!(root = %root.display(), depth, "capturing snapshot");

    let manifest = Manifest::capture(&LocalSource, &root, depth, &SystemLocations, show_hidden);
    let json = manifest.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(
                path = %path.display(),
                entries = manifest.entries.len(),
                "snapshot written"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
