use std::cell::RefCell;

use super::*;
use crate::notebook::{MemoryStorage, RemoteSync};

#[derive(Default)]
struct FakeRunner {
    fail: bool,
    seen: RefCell<Vec<ExperimentRequest>>,
}

impl ExperimentRunner for FakeRunner {
    fn run_experiment(&self, req: &ExperimentRequest) -> Result<ExperimentResponse> {
        self.seen.borrow_mut().push(req.clone());
        if self.fail {
            anyhow::bail!("run-experiment: No chemicals selected");
        }
        Ok(ExperimentResponse {
            observation: "Bubbles form".to_string(),
            result: "Hydrogen gas".to_string(),
            timestamp: "2024-04-04T08:00:00Z".to_string(),
            ..ExperimentResponse::default()
        })
    }
}

fn notebook() -> NotebookStore<MemoryStorage> {
    NotebookStore::open(MemoryStorage::new(), RemoteSync::disabled())
}

#[test]
fn new_bench_is_idle_with_defaults() {
    let bench = LabBench::default();
    assert_eq!(bench.lab(), LabKind::Chemistry);
    assert_eq!(bench.stage(), RunStage::Idle);
    assert_eq!(bench.heat(), 0);
    assert_eq!(bench.volume_ml(), DEFAULT_VOLUME_ML);
}

#[test]
fn chemicals_are_deduplicated_and_trimmed() {
    let mut bench = LabBench::default();
    assert!(bench.add_chemical(" HCl "));
    assert!(!bench.add_chemical("HCl"));
    assert!(!bench.add_chemical("   "));
    assert!(bench.add_chemical("Zn"));
    assert_eq!(bench.chemicals(), ["HCl", "Zn"]);

    assert!(bench.remove_chemical("HCl"));
    assert!(!bench.remove_chemical("HCl"));
    assert_eq!(bench.chemicals(), ["Zn"]);
}

#[test]
fn tools_toggle() {
    let mut bench = LabBench::default();
    assert!(bench.toggle_tool("Thermometer"));
    assert_eq!(bench.tools(), ["Thermometer"]);
    assert!(!bench.toggle_tool("Thermometer"));
    assert!(bench.tools().is_empty());
    assert!(!bench.toggle_tool(""));
}

#[test]
fn conditions_are_clamped() {
    let mut bench = LabBench::default();
    bench.set_heat(42);
    assert_eq!(bench.heat(), MAX_HEAT);
    bench.set_volume(0);
    assert_eq!(bench.volume_ml(), MIN_VOLUME_ML);
    bench.set_volume(5000);
    assert_eq!(bench.volume_ml(), MAX_VOLUME_ML);
}

#[test]
fn switching_lab_empties_beaker() {
    let mut bench = LabBench::default();
    bench.add_chemical("HCl");
    bench.toggle_tool("Beaker");

    bench.select_lab(LabKind::Chemistry);
    assert_eq!(bench.chemicals().len(), 1);

    bench.select_lab(LabKind::Biology);
    assert!(bench.chemicals().is_empty());
    assert_eq!(bench.tools(), ["Beaker"]);
    assert_eq!(bench.lab(), LabKind::Biology);
}

#[test]
fn empty_beaker_cannot_run() {
    let runner = FakeRunner::default();
    let mut nb = notebook();
    let mut bench = LabBench::default();

    assert!(bench.run(&runner, &mut nb).is_err());
    assert!(runner.seen.borrow().is_empty());
    assert!(nb.is_empty());
    assert_eq!(bench.stage(), RunStage::Idle);
}

#[test]
fn successful_run_records_active_finding() -> Result<()> {
    let runner = FakeRunner::default();
    let mut nb = notebook();
    let mut bench = LabBench::new(LabKind::Chemistry);
    bench.add_chemical("Zn");
    bench.add_chemical("HCl");
    bench.toggle_tool("Test Tube");
    bench.set_heat(4);
    bench.set_volume(250);

    let finding = bench.run(&runner, &mut nb)?;

    assert_eq!(bench.stage(), RunStage::Done);
    let req = runner.seen.borrow()[0].clone();
    assert_eq!(req.kind, "chemistry");
    assert_eq!(req.chemicals, vec!["Zn", "HCl"]);
    assert_eq!(req.heat, 4);
    assert_eq!(req.volume_ml, 250);

    assert_eq!(finding.title, "Chemistry Experiment: Zn");
    assert_eq!(finding.observations, "Bubbles form");
    assert_eq!(nb.active().map(|f| &f.id), Some(&finding.id));
    assert_eq!(nb.len(), 1);
    Ok(())
}

#[test]
fn failed_run_returns_to_idle_and_records_nothing() {
    let runner = FakeRunner {
        fail: true,
        ..FakeRunner::default()
    };
    let mut nb = notebook();
    let mut bench = LabBench::default();
    bench.add_chemical("HCl");

    let err = bench.run(&runner, &mut nb).unwrap_err();
    assert!(format!("{:#}", err).contains("No chemicals selected"));
    assert_eq!(bench.stage(), RunStage::Idle);
    assert!(nb.is_empty());
    assert_eq!(bench.chemicals(), ["HCl"]);
}

#[test]
fn adding_after_done_resets_stage() -> Result<()> {
    let runner = FakeRunner::default();
    let mut nb = notebook();
    let mut bench = LabBench::default();
    bench.add_chemical("NaCl");
    bench.run(&runner, &mut nb)?;
    assert_eq!(bench.stage(), RunStage::Done);

    bench.add_chemical("AgNO3");
    assert_eq!(bench.stage(), RunStage::Idle);
    Ok(())
}

struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        anyhow::bail!("storage is read-only ({})", key)
    }
}

#[test]
fn failed_save_returns_to_idle() {
    let runner = FakeRunner::default();
    let mut nb = NotebookStore::open(ReadOnlyStorage, RemoteSync::disabled());
    let mut bench = LabBench::default();
    bench.add_chemical("HCl");

    let err = bench.run(&runner, &mut nb).unwrap_err();
    assert!(format!("{:#}", err).contains("record experiment finding"));
    assert_eq!(runner.seen.borrow().len(), 1);
    assert_eq!(bench.stage(), RunStage::Idle);
    assert!(nb.is_empty());
}
