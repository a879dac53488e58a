use serde::{Deserialize, Serialize};

/// Root configuration structure for spreadkit
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SpreadkitConfig {
    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,

    /// Random element removal
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print JSON results
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RandomConfig {
    /// Fixed seed; unset means a fresh thread-local generator per run
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Effective settings after command-line flags are laid over the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub pretty: bool,
    pub seed: Option<u64>,
}

impl RunSettings {
    /// Flags win over file values; a bare `--pretty` can only turn pretty output on.
    pub fn resolve(config: &SpreadkitConfig, pretty_flag: bool, seed_flag: Option<u64>) -> Self {
        Self {
            pretty: pretty_flag || config.output.pretty,
            seed: seed_flag.or(config.random.seed),
        }
    }
}
