use serde::{Deserialize, Serialize};

/// Default number of boundary rays used by the discretized approximators.
pub const DEFAULT_DISCRETIZATION_LEVEL: usize = 40;

/// Configuration of the discretized approximators (cone and pyramid against sphere and ellipsoid)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Number of lateral-surface rays sampled from the apex
    #[serde(default = "default_discretization_level")]
    pub discretization_level: usize,
    /// Only keep the points visible from the apex (the first hit along every ray)
    #[serde(default)]
    pub only_in_sight: bool,
}

impl SamplingConfig {
    pub fn new(discretization_level: usize, only_in_sight: bool) -> Self {
        Self {
            discretization_level,
            only_in_sight,
        }
    }

    pub fn with_level(mut self, discretization_level: usize) -> Self {
        self.discretization_level = discretization_level;
        self
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            discretization_level: DEFAULT_DISCRETIZATION_LEVEL,
            only_in_sight: false,
        }
    }
}

fn default_discretization_level() -> usize {
    DEFAULT_DISCRETIZATION_LEVEL
}
