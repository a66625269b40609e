mod catalog;
mod config;
mod experiment;
mod finding;
mod ids;
mod tab;

pub use self::catalog::{
    Chemical, ExperimentTemplate, Reaction, Species, Stats, Tool, filter_reactions, filter_tools,
};
pub use self::config::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, LabConfig};
pub use self::experiment::{
    ExperimentRequest, ExperimentResponse, LabKind, Measurements, ReactionSummary,
};
pub(crate) use self::experiment::lenient_string;
pub use self::finding::{Finding, FindingPatch};
pub use self::ids::{FindingId, now_ts};
pub use self::tab::{Mode, Tab};
