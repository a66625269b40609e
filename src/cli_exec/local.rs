use super::*;

use vlab::model::LabConfig;
use vlab::store::LocalStore;

use crate::cli_commands::InitArgs;

pub(super) fn handle_init_command(args: InitArgs) -> Result<()> {
    let root = match args.path {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };
    let mut cfg = LabConfig::default();
    if let Some(api) = args.api {
        cfg.api_base = api;
    }
    cfg.remote_sync = !args.no_remote_sync;

    LocalStore::init(&root, args.force, &cfg)?;
    println!("Initialized virtual lab at {}", root.display());
    Ok(())
}
