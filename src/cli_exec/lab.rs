use super::*;

use vlab::lab::LabBench;
use vlab::model::LabKind;
use vlab::remote::RemoteClient;

use crate::cli_commands::RunArgs;

pub(super) fn handle_run_command(rt: &Runtime, args: RunArgs) -> Result<()> {
    let lab = LabKind::parse(&args.lab)
        .with_context(|| format!("unknown lab {:?} (chemistry, biology, physics)", args.lab))?;

    let mut bench = LabBench::new(lab);
    for c in &args.chemicals {
        bench.add_chemical(c);
    }
    for t in &args.tools {
        bench.toggle_tool(t);
    }
    bench.set_heat(args.heat);
    bench.set_volume(args.volume_ml);

    let (cfg, mut notebook) = rt.open_notebook()?;
    let client = RemoteClient::new(&cfg)?;
    let finding = bench.run(&client, &mut notebook)?;
    notebook.sync_mut().flush();

    if args.json {
        print_json(&finding, "finding")?;
    } else {
        println!("{}", finding.title);
        println!("observation: {}", finding.observations);
        println!("result: {}", finding.conclusion);
        println!("safety: {}", finding.safety);
        println!("saved as {}", finding.id);
    }
    Ok(())
}
