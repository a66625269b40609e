//! The experiment workbench: what is in the beaker, which tools are in use,
//! and the conditions a run is performed under.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{ExperimentRequest, ExperimentResponse, Finding, LabKind};
use crate::notebook::{NotebookStore, Storage};
use crate::remote::RemoteClient;

pub const MAX_HEAT: u8 = 10;
pub const MIN_VOLUME_ML: u32 = 1;
pub const MAX_VOLUME_ML: u32 = 1000;
pub const DEFAULT_VOLUME_ML: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStage {
    #[default]
    Idle,
    Mixing,
    Reacting,
    Done,
}

/// Anything that can perform a run for the bench.
pub trait ExperimentRunner {
    fn run_experiment(&self, req: &ExperimentRequest) -> Result<ExperimentResponse>;
}

impl ExperimentRunner for RemoteClient {
    fn run_experiment(&self, req: &ExperimentRequest) -> Result<ExperimentResponse> {
        RemoteClient::run_experiment(self, req)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabBench {
    lab: LabKind,
    chemicals: Vec<String>,
    tools: Vec<String>,
    heat: u8,
    volume_ml: u32,
    stage: RunStage,
}

impl Default for LabBench {
    fn default() -> Self {
        Self::new(LabKind::default())
    }
}

impl LabBench {
    pub fn new(lab: LabKind) -> Self {
        Self {
            lab,
            chemicals: Vec::new(),
            tools: Vec::new(),
            heat: 0,
            volume_ml: DEFAULT_VOLUME_ML,
            stage: RunStage::Idle,
        }
    }

    pub fn lab(&self) -> LabKind {
        self.lab
    }

    /// Switching discipline starts from an empty beaker.
    pub fn select_lab(&mut self, lab: LabKind) {
        if self.lab != lab {
            self.lab = lab;
            self.clear();
        }
    }

    pub fn chemicals(&self) -> &[String] {
        &self.chemicals
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn heat(&self) -> u8 {
        self.heat
    }

    pub fn volume_ml(&self) -> u32 {
        self.volume_ml
    }

    pub fn stage(&self) -> RunStage {
        self.stage
    }

    /// Adds a chemical to the beaker; repeats and blank names are ignored.
    pub fn add_chemical(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.chemicals.iter().any(|c| c == name) {
            return false;
        }
        self.chemicals.push(name.to_string());
        self.stage = RunStage::Idle;
        true
    }

    pub fn remove_chemical(&mut self, name: &str) -> bool {
        let before = self.chemicals.len();
        self.chemicals.retain(|c| c != name.trim());
        before != self.chemicals.len()
    }

    /// Returns whether the tool is selected after the toggle.
    pub fn toggle_tool(&mut self, name: &str) -> bool {
        let name = name.trim();
        if let Some(pos) = self.tools.iter().position(|t| t == name) {
            self.tools.remove(pos);
            false
        } else if name.is_empty() {
            false
        } else {
            self.tools.push(name.to_string());
            true
        }
    }

    pub fn set_heat(&mut self, heat: u8) {
        self.heat = heat.min(MAX_HEAT);
    }

    pub fn set_volume(&mut self, volume_ml: u32) {
        self.volume_ml = volume_ml.clamp(MIN_VOLUME_ML, MAX_VOLUME_ML);
    }

    /// Empties the beaker. Tool selection and conditions are kept.
    pub fn clear(&mut self) {
        self.chemicals.clear();
        self.stage = RunStage::Idle;
    }

    pub fn request(&self) -> Result<ExperimentRequest> {
        if self.chemicals.is_empty() {
            anyhow::bail!("add chemicals to the beaker first");
        }
        Ok(ExperimentRequest {
            chemicals: self.chemicals.clone(),
            kind: self.lab.as_type().to_string(),
            tools: self.tools.clone(),
            heat: self.heat,
            volume_ml: self.volume_ml,
        })
    }

    /// Performs a run and records it: the resulting finding is appended to
    /// the notebook (becoming its active entry) and returned.
    pub fn run<R, S>(&mut self, runner: &R, notebook: &mut NotebookStore<S>) -> Result<Finding>
    where
        R: ExperimentRunner + ?Sized,
        S: Storage,
    {
        let req = self.request()?;

        self.stage = RunStage::Mixing;
        tracing::debug!(lab = %self.lab, chemicals = ?req.chemicals, "mixing");

        self.stage = RunStage::Reacting;
        match self.react(runner, notebook, &req) {
            Ok(finding) => {
                self.stage = RunStage::Done;
                tracing::info!(id = %finding.id, "experiment recorded");
                Ok(finding)
            }
            Err(err) => {
                self.stage = RunStage::Idle;
                Err(err)
            }
        }
    }

    fn react<R, S>(
        &self,
        runner: &R,
        notebook: &mut NotebookStore<S>,
        req: &ExperimentRequest,
    ) -> Result<Finding>
    where
        R: ExperimentRunner + ?Sized,
        S: Storage,
    {
        let resp = runner
            .run_experiment(req)
            .context("experiment run failed")?;
        let finding = Finding::from_experiment(self.lab, &self.chemicals, &self.tools, &resp)?;
        notebook
            .append(finding.clone())
            .context("record experiment finding")?;
        Ok(finding)
    }
}

#[cfg(test)]
#[path = "tests/lab/lab_tests.rs"]
mod tests;
