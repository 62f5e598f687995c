//! Entry point: prints the CI job matrix for the configured locales.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use i18n_matrix::config::{
    ConfigManager,
    MatrixSettings,
};
use i18n_matrix::{
    Error,
    LocaleId,
    emit_matrix,
};
use tracing_subscriber::EnvFilter;

/// Partition locales into batches and print a CI job matrix as JSON.
///
/// Only the matrix is written to stdout. Logs go to stderr (`RUST_LOG` controls the level).
#[derive(Debug, Parser)]
#[command(name = "i18n-matrix", version, about)]
struct Cli {
    /// Directory holding `.i18n-matrix.json` and the resource mapping
    #[arg(long, default_value = ".")]
    workspace: PathBuf,

    /// Max locales per batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Parallelism bound for the CI layer
    #[arg(long)]
    max_parallel: Option<usize>,

    /// Comma-separated locale list, replacing the priority tiers
    #[arg(long, value_delimiter = ',')]
    locales: Option<Vec<String>>,

    /// Resource mapping file (JSON)
    #[arg(long)]
    resources: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the file settings.
    fn apply(&self, settings: &mut MatrixSettings) {
        if let Some(batch_size) = self.batch_size {
            settings.batch_size = batch_size;
        }
        if let Some(max_parallel) = self.max_parallel {
            settings.max_parallel = max_parallel;
        }
        if let Some(locales) = &self.locales {
            settings.locales = Some(locales.iter().map(|id| LocaleId::new(id.trim())).collect());
        }
        if let Some(resources) = &self.resources {
            settings.resources_file = resources.to_string_lossy().into_owned();
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(filter).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads settings, applies overrides and writes the matrix to stdout.
fn run(cli: &Cli) -> Result<(), Error> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(cli.workspace.clone())?;
    config_manager.apply_overrides(|settings| cli.apply(settings))?;

    let resources = config_manager.load_resources()?;
    let stdout = std::io::stdout();
    emit_matrix(config_manager.get_settings(), &resources, stdout.lock())?;

    Ok(())
}
