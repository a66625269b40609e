use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;

use super::*;

use vlab::model::{Finding, FindingPatch, LabConfig};
use vlab::notebook::{FileStorage, MountGuard, NotebookStore, spawn_remote_fetch};
use vlab::remote::RemoteClient;

use crate::cli_subcommands::NotebookCommands;

pub(super) fn handle_notebook_command(rt: &Runtime, command: NotebookCommands) -> Result<()> {
    let (cfg, mut notebook) = rt.open_notebook()?;

    match command {
        NotebookCommands::List { local, json } => {
            if !local {
                merge_on_load(&cfg, &mut notebook)?;
            }
            if json {
                print_json(notebook.findings(), "findings")?;
            } else if notebook.is_empty() {
                println!("No findings yet");
            } else {
                for f in notebook.findings() {
                    println!("{} {} {}", f.id, f.created_at, f.title);
                }
            }
        }
        NotebookCommands::Show { id, local, json } => {
            if !local {
                merge_on_load(&cfg, &mut notebook)?;
            }
            let f = notebook
                .get(&id)
                .with_context(|| format!("finding {} not found", id))?;
            if json {
                print_json(f, "finding")?;
            } else {
                print_finding(f);
            }
        }
        NotebookCommands::New {
            title,
            notes,
            observations,
            conclusion,
            lab,
            chemicals,
            tools,
            json,
        } => {
            if title.trim().is_empty() {
                anyhow::bail!("a finding needs a title");
            }
            let mut f = Finding::draft(title.trim())?;
            f.notes = notes;
            f.observations = observations;
            f.conclusion = conclusion;
            f.lab = lab;
            f.chemicals = chemicals;
            f.tools = tools;

            notebook.append(f.clone())?;
            notebook.sync_mut().flush();
            if json {
                print_json(&f, "finding")?;
            } else {
                println!("{}", f.id);
            }
        }
        NotebookCommands::Edit {
            id,
            title,
            notes,
            observations,
            conclusion,
            safety,
            lab,
        } => {
            let patch = FindingPatch {
                title,
                notes,
                observations,
                conclusion,
                safety,
                lab,
                ..FindingPatch::default()
            };
            if patch.is_empty() {
                anyhow::bail!("nothing to change (pass at least one field flag)");
            }
            if notebook.update(&id, patch)? {
                println!("Updated {}", id);
            } else {
                println!("No finding {}", id);
            }
        }
        NotebookCommands::Delete { id, yes } => {
            let removed = notebook.remove(&id, |f| yes || confirm_delete(f))?;
            if removed {
                println!("Deleted {}", id);
            } else if notebook.get(&id).is_some() {
                println!("Kept {}", id);
            } else {
                println!("No finding {}", id);
            }
        }
        NotebookCommands::Sync { json } => {
            let added = fetch_and_merge(&cfg, &mut notebook)?;
            if json {
                print_json(
                    &serde_json::json!({ "added": added, "total": notebook.len() }),
                    "sync",
                )?;
            } else {
                println!("Merged {} finding(s), {} total", added, notebook.len());
            }
        }
    }
    Ok(())
}

/// Load-time merge of the remote collection, skipped when remote sync is off.
fn merge_on_load(cfg: &LabConfig, notebook: &mut NotebookStore<FileStorage>) -> Result<()> {
    if cfg.remote_sync {
        fetch_and_merge(cfg, notebook)?;
    }
    Ok(())
}

fn fetch_and_merge(cfg: &LabConfig, notebook: &mut NotebookStore<FileStorage>) -> Result<usize> {
    let remote = Arc::new(RemoteClient::new(cfg)?);
    let guard = MountGuard::new();
    let pending = spawn_remote_fetch(remote);
    Ok(notebook.apply_fetch(pending, &guard)?.unwrap_or(0))
}

fn print_finding(f: &Finding) {
    println!("id: {}", f.id);
    println!("title: {}", f.title);
    println!("created_at: {}", f.created_at);
    if let Some(ts) = &f.updated_at {
        println!("updated_at: {}", ts);
    }
    if !f.lab.is_empty() {
        println!("lab: {}", f.lab);
    }
    if !f.chemicals.is_empty() {
        println!("chemicals: {}", f.chemicals.join(", "));
    }
    if !f.tools.is_empty() {
        println!("tools: {}", f.tools.join(", "));
    }
    if !f.observations.is_empty() {
        println!("observations: {}", f.observations);
    }
    if !f.conclusion.is_empty() {
        println!("conclusion: {}", f.conclusion);
    }
    if !f.safety.is_empty() {
        println!("safety: {}", f.safety);
    }
    if let Some(m) = &f.measurements {
        println!(
            "measurements: temperature={}C ph={} rate={} heat={}",
            m.temperature_c, m.ph, m.rate, m.heat_level
        );
    }
    if !f.notes.is_empty() {
        println!();
        println!("{}", f.notes);
    }
}

/// Asks on stdin. Without a terminal the answer is no.
fn confirm_delete(f: &Finding) -> bool {
    if !io::stdin().is_terminal() {
        eprintln!("refusing to delete without confirmation (pass --yes)");
        return false;
    }
    eprint!("Delete \"{}\"? [y/N] ", f.title);
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
