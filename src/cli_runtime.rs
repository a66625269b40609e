use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vlab::model::LabConfig;
use vlab::notebook::{FileStorage, NotebookStore, RemoteSync};
use vlab::remote::RemoteClient;
use vlab::store::LocalStore;

use crate::cli_commands::Commands;

#[derive(Parser)]
#[command(name = "vlab")]
#[command(about = "Virtual science lab client", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides config.json and VLAB_API)
    #[arg(long, global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Settings every command handler may need, resolved once per invocation.
pub(crate) struct Runtime {
    api_override: Option<String>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let rt = Runtime {
        api_override: cli
            .api
            .or_else(|| std::env::var("VLAB_API").ok())
            .filter(|s| !s.trim().is_empty()),
    };
    crate::cli_exec::handle_command(&rt, cli.command)
}

/// Log level comes from `VLAB_LOG` (EnvFilter syntax); warnings by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("VLAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

impl Runtime {
    pub(crate) fn discover_store(&self) -> Result<LocalStore> {
        LocalStore::discover(&std::env::current_dir().context("get current dir")?)
    }

    /// Config from the nearest `.vlab`, or defaults when there is none.
    pub(crate) fn config(&self) -> Result<LabConfig> {
        let mut cfg = match self.discover_store() {
            Ok(store) => store.read_config()?,
            Err(_) => LabConfig::default(),
        };
        if let Some(api) = &self.api_override {
            cfg.api_base = api.clone();
        }
        Ok(cfg)
    }

    pub(crate) fn remote_client(&self) -> Result<RemoteClient> {
        RemoteClient::new(&self.config()?)
    }

    pub(crate) fn open_notebook(&self) -> Result<(LabConfig, NotebookStore<FileStorage>)> {
        let store = self.discover_store()?;
        let mut cfg = store.read_config()?;
        if let Some(api) = &self.api_override {
            cfg.api_base = api.clone();
        }
        let sync = if cfg.remote_sync {
            RemoteSync::new(std::sync::Arc::new(RemoteClient::new(&cfg)?))
        } else {
            RemoteSync::disabled()
        };
        let notebook = NotebookStore::open(store.storage()?, sync);
        Ok((cfg, notebook))
    }
}
