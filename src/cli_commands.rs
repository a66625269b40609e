use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli_subcommands::{CalcCommands, CatalogCommands, NotebookCommands, RouteCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a lab directory (.vlab)
    Init(InitArgs),

    /// Resolve and replay tab routing
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },

    /// Manage saved findings
    Notebook {
        #[command(subcommand)]
        command: NotebookCommands,
    },

    /// Mix chemicals on the bench, run the experiment and record a finding
    Run(RunArgs),

    /// Browse reactions, tools and chemicals
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Chemistry calculators
    Calc {
        #[command(subcommand)]
        command: CalcCommands,
    },
}

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .vlab already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
    /// Backend base URL to store in config.json
    #[arg(long)]
    pub(crate) api: Option<String>,
    /// Keep findings local; never post them to the backend
    #[arg(long)]
    pub(crate) no_remote_sync: bool,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Lab discipline: chemistry, biology or physics
    #[arg(long, default_value = "chemistry")]
    pub(crate) lab: String,
    /// Chemical to add to the beaker (repeatable)
    #[arg(long = "chemical", required = true)]
    pub(crate) chemicals: Vec<String>,
    /// Tool to use (repeatable)
    #[arg(long = "tool")]
    pub(crate) tools: Vec<String>,
    /// Heat level, 0-10
    #[arg(long, default_value_t = 0)]
    pub(crate) heat: u8,
    /// Volume in milliliters, 1-1000
    #[arg(long, default_value_t = vlab::lab::DEFAULT_VOLUME_ML)]
    pub(crate) volume_ml: u32,
    #[arg(long)]
    pub(crate) json: bool,
}
