use super::*;

use serde::Serialize;

use vlab::model::{Mode, Tab};
use vlab::router::{History, Location, MemoryHistory, TabChange, TabController, resolve_tab};

use crate::cli_subcommands::RouteCommands;

#[derive(Serialize)]
struct Resolution {
    location: Location,
    tab: Tab,
    mode: Mode,
    canonical_path: &'static str,
}

#[derive(Serialize)]
struct TabRow {
    tab: Tab,
    label: &'static str,
    path: &'static str,
    mode: Mode,
}

#[derive(Serialize)]
struct WalkStep {
    step: String,
    change: Option<TabChange>,
    path: String,
    mode: Mode,
}

pub(super) fn handle_route_command(command: RouteCommands) -> Result<()> {
    match command {
        RouteCommands::Resolve { location, json } => {
            let location = Location::parse(&location);
            let tab = resolve_tab(&location);
            let res = Resolution {
                canonical_path: tab.canonical_path(),
                mode: tab.mode(),
                tab,
                location,
            };
            if json {
                print_json(&res, "resolution")?;
            } else {
                println!("{} {} ({})", res.tab, res.canonical_path, res.mode);
            }
        }
        RouteCommands::Tabs { json } => {
            let rows = Tab::ALL
                .into_iter()
                .map(|tab| TabRow {
                    tab,
                    label: tab.label(),
                    path: tab.canonical_path(),
                    mode: tab.mode(),
                })
                .collect::<Vec<_>>();
            if json {
                print_json(&rows, "tabs")?;
            } else {
                for r in rows {
                    println!("{:<10} {:<11} {}", r.tab, r.path, r.mode);
                }
            }
        }
        RouteCommands::Walk { start, steps, json } => {
            let mut ctl = TabController::mount(MemoryHistory::new(&start));
            let mut out = Vec::with_capacity(steps.len());
            for step in steps {
                let change = match step.trim().to_ascii_lowercase().as_str() {
                    "back" => ctl.back(),
                    "forward" => ctl.forward(),
                    "web" => Some(ctl.switch_mode(Mode::Web)),
                    "app" => Some(ctl.switch_mode(Mode::App)),
                    other => Some(ctl.navigate_slug(other)),
                };
                out.push(WalkStep {
                    step,
                    change,
                    path: ctl.history().location().to_href(),
                    mode: ctl.mode(),
                });
            }

            let history = ctl.history();
            if json {
                print_json(
                    &serde_json::json!({
                        "steps": out,
                        "active": ctl.active(),
                        "pushes": history.pushes(),
                        "replaces": history.replaces(),
                        "entries": history.len(),
                    }),
                    "walk",
                )?;
            } else {
                for s in &out {
                    let pushed = s.change.map(|c| c.pushed).unwrap_or(false);
                    println!(
                        "{:<10} -> {:<11} {}{}",
                        s.step,
                        s.path,
                        s.mode,
                        if pushed { " (push)" } else { "" }
                    );
                }
                println!(
                    "active: {}  pushes: {}  replaces: {}",
                    ctl.active(),
                    history.pushes(),
                    history.replaces()
                );
            }
        }
    }
    Ok(())
}
