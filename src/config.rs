//! Capacity configuration for a dispatch cycle.

use serde::{Deserialize, Serialize};

const DEFAULT_MAX_COMMANDS: usize = 32;
const DEFAULT_MAX_OPTIONS: usize = 32;

/// Upper bounds checked at the start of every dispatch cycle.
///
/// `max_commands` bounds the declared command catalog. `max_options` bounds
/// both the declared option catalog and the per-cycle accumulator of resolved
/// options. Violations are configuration errors, raised before any token is
/// examined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_commands")]
    pub max_commands: usize,
    #[serde(default = "default_max_options")]
    pub max_options: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_commands: DEFAULT_MAX_COMMANDS,
            max_options: DEFAULT_MAX_OPTIONS,
        }
    }
}

fn default_max_commands() -> usize {
    DEFAULT_MAX_COMMANDS
}

fn default_max_options() -> usize {
    DEFAULT_MAX_OPTIONS
}
