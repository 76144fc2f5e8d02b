use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Schema entry for one boolean option, as shown in the host's
/// configuration UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionToggle {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub default: bool,
}

/// A flat struct of named boolean toggles that can also be addressed by key.
pub trait ToggleSet {
    /// Schema for every toggle, in declared order.
    fn schema() -> &'static [OptionToggle];

    /// Value of a toggle, or `None` if the key is not part of the schema.
    fn flag(&self, key: &str) -> Option<bool>;

    /// Mutable access to a toggle, or `None` if the key is unknown.
    fn flag_mut(&mut self, key: &str) -> Option<&mut bool>;

    /// Value of a toggle; unknown keys read as off.
    fn get(&self, key: &str) -> bool {
        self.flag(key).unwrap_or(false)
    }

    /// Set a toggle by key. Returns false (and logs) if the key is unknown.
    fn set(&mut self, key: &str, value: bool) -> bool {
        match self.flag_mut(key) {
            Some(flag) => {
                *flag = value;
                true
            }
            None => {
                warn!(key, "ignoring unknown option");
                false
            }
        }
    }

    /// Keys of every toggle currently on, in schema order.
    fn enabled_keys(&self) -> Vec<&'static str> {
        Self::schema()
            .iter()
            .filter(|toggle| self.get(toggle.key))
            .map(|toggle| toggle.key)
            .collect()
    }
}

/// Parse an option set from a RON string. Omitted flags take their defaults.
pub fn parse_options<T: DeserializeOwned>(input: &str) -> Result<T, OptionsError> {
    Ok(ron::from_str(input)?)
}

/// Load an option set from a RON file.
pub fn load_options<T: DeserializeOwned>(path: &Path) -> Result<T, OptionsError> {
    let contents = std::fs::read_to_string(path)?;
    parse_options(&contents)
}
