use serde::{Deserialize, Serialize};
use setlayout::util::LayoutConfig;

/// Configuration of the command line interface
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct CliConfig {
    /// Configuration of the layout optimizer
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Seed for the PRNG. If undefined, layouts are non-deterministic and seeded from OS entropy
    #[serde(default)]
    pub prng_seed: Option<u64>,
}
