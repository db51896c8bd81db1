use serde::{Deserialize, Serialize};
use setlayout::io::ext_repr::{ExtLayoutSolution, ExtPlan};

use crate::config::CliConfig;

/// Everything written to the solution file: the resulting plan, its score and the config used.
/// The plan part can be read back in as input.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub plan: ExtPlan,
    pub solution: ExtLayoutSolution,
    pub config: CliConfig,
}
