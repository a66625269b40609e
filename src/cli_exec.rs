use anyhow::{Context, Result};

use crate::cli_commands::Commands;
use crate::cli_runtime::Runtime;

mod catalog;
mod lab;
mod local;
mod notebook;
mod route;

pub(super) fn handle_command(rt: &Runtime, command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => local::handle_init_command(args),
        Commands::Route { command } => route::handle_route_command(command),
        Commands::Notebook { command } => notebook::handle_notebook_command(rt, command),
        Commands::Run(args) => lab::handle_run_command(rt, args),
        Commands::Catalog { command } => catalog::handle_catalog_command(rt, command),
        Commands::Calc { command } => catalog::handle_calc_command(rt, command),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, label: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", label))?
    );
    Ok(())
}
