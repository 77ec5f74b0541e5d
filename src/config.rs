use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BorgError, Result};

pub const DEFAULT_PHRASE_CHANCE: f64 = 0.12;
pub const DEFAULT_SKIP_PREFIX: &str = "-- ";

/// Knobs for one [`Assimilator`](crate::Assimilator). Every field has a default,
/// so a config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Probability that a terminated sentence gets a flavor phrase appended.
    pub phrase_chance: f64,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Run the idiom pre-pass before tokenizing.
    pub idioms: bool,
    /// Consult the first-person table ("I", "I'm", ...) ahead of the pronouns.
    pub extended_pronouns: bool,
    /// Lines whose trimmed content starts with this are emitted untouched.
    pub skip_prefix: Option<String>,
    pub phrase_open: String,
    pub phrase_close: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phrase_chance: DEFAULT_PHRASE_CHANCE,
            seed: None,
            idioms: true,
            extended_pronouns: true,
            skip_prefix: Some(DEFAULT_SKIP_PREFIX.to_string()),
            phrase_open: "<".to_string(),
            phrase_close: ">".to_string(),
        }
    }
}

impl Config {
    /// Deterministic config: fixed seed, no flavor phrases.
    pub fn quiet(seed: u64) -> Self {
        Self {
            phrase_chance: 0.0,
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BorgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.phrase_chance) {
            return Err(BorgError::InvalidChance(self.phrase_chance));
        }
        Ok(())
    }
}
