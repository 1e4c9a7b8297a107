use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Values every freshly entered example screen is seeded with.
    #[serde(default = "default_seed")]
    pub seed: Vec<i64>,
    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_seed() -> Vec<i64> {
    vec![1, 2, 3]
}

fn default_tick_rate_ms() -> u64 {
    250
}
