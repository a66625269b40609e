use super::*;

use crate::model::{ExperimentRequest, ExperimentResponse};

impl RemoteClient {
    pub fn run_experiment(&self, req: &ExperimentRequest) -> Result<ExperimentResponse> {
        // Not retried: a run is not idempotent from the lab's point of view.
        self.post_json("/run-experiment", req, "run experiment")
    }
}
