use super::*;

use vlab::model::{filter_reactions, filter_tools};

use crate::cli_subcommands::{CalcCommands, CatalogCommands};

/// Passive notice shown when the backend could not be reached.
fn connection_banner(error: &Option<String>) {
    if let Some(err) = error {
        eprintln!("Connection error: backend unavailable, showing placeholder data ({})", err);
    }
}

pub(super) fn handle_catalog_command(rt: &Runtime, command: CatalogCommands) -> Result<()> {
    let client = rt.remote_client()?;
    match command {
        CatalogCommands::Stats { json } => {
            let stats = client.stats_soft();
            connection_banner(&stats.error);
            let s = stats.value;
            if json {
                print_json(&s, "stats")?;
            } else {
                println!("reactions: {}", s.total_reactions);
                println!("tools: {}", s.total_tools);
                println!("experiments: {}", s.total_experiments);
                println!("categories: {}", s.categories);
                println!("exothermic: {}  endothermic: {}", s.exothermic, s.endothermic);
            }
        }
        CatalogCommands::Reactions {
            query,
            category,
            json,
        } => {
            let reactions = client.reactions_soft();
            connection_banner(&reactions.error);
            let shown = filter_reactions(&reactions.value, &query, category.as_deref());
            if json {
                print_json(&shown, "reactions")?;
            } else if shown.is_empty() {
                println!("No reactions found");
            } else {
                for r in shown {
                    println!("{} | {} | {} | {}", r.name, r.equation, r.category, r.kind);
                }
            }
        }
        CatalogCommands::Categories { tools } => {
            let cats = if tools {
                client.tool_categories_soft()
            } else {
                client.categories_soft()
            };
            connection_banner(&cats.error);
            for c in cats.value {
                println!("{}", c);
            }
        }
        CatalogCommands::Tools { category, json } => {
            let tools = client.tools_soft();
            connection_banner(&tools.error);
            let shown = filter_tools(&tools.value, category.as_deref());
            if json {
                print_json(&shown, "tools")?;
            } else if shown.is_empty() {
                println!("No tools found");
            } else {
                for t in shown {
                    println!("{} [{}] {}", t.name, t.category, t.description);
                }
            }
        }
        CatalogCommands::Chemicals { json } => {
            let chems = client.chemicals_soft();
            connection_banner(&chems.error);
            if json {
                print_json(&chems.value, "chemicals")?;
            } else {
                for c in chems.value {
                    println!("{} ({}) {}", c.name, c.symbol, c.category);
                }
            }
        }
        CatalogCommands::Experiments { lab, json } => {
            let exps = client.experiments(lab.as_deref())?;
            if json {
                print_json(&exps, "experiments")?;
            } else {
                for e in exps {
                    println!("{} [{}] {}", e.name, e.lab, e.chemicals.join(" + "));
                }
            }
        }
        CatalogCommands::Search { query, json } => {
            let hits = client.search(&query)?;
            if json {
                print_json(&hits, "search results")?;
            } else {
                for r in hits {
                    println!("{} | {}", r.name, r.equation);
                }
            }
        }
    }
    Ok(())
}

pub(super) fn handle_calc_command(rt: &Runtime, command: CalcCommands) -> Result<()> {
    let client = rt.remote_client()?;
    match command {
        CalcCommands::MolecularWeight { formula } => {
            let r = client.molecular_weight(&formula)?;
            println!("{}: {} g/mol", r.formula, r.molecular_weight);
        }
        CalcCommands::Molarity { moles, liters } => {
            let r = client.molarity(moles, liters)?;
            println!("{} M", r.molarity);
        }
        CalcCommands::Ph { concentration } => {
            let r = client.ph(concentration)?;
            println!("pH {}  pOH {}", r.ph, r.poh);
        }
        CalcCommands::Stoichiometry {
            reactant_moles,
            reactant_coeff,
            product_coeff,
        } => {
            let r = client.stoichiometry(reactant_moles, reactant_coeff, product_coeff)?;
            println!("product moles: {}", r.product_moles);
        }
    }
    Ok(())
}
