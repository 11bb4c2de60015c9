//! Runtime configuration
//!
//! The launch arguments are probed, never parsed, so settings come from the
//! environment instead:
//!
//! | variable              | meaning                              | default |
//! |-----------------------|--------------------------------------|---------|
//! | `SEGSCOPE_ALLOC_SIZE` | scratch block size in bytes          | `16`    |
//! | `SEGSCOPE_VIEW`       | `lines` or `map`                     | `lines` |
//! | `SEGSCOPE_VERBOSE`    | `1`/`true` for stderr diagnostics    | off     |

use crate::probe::DEFAULT_SCRATCH_SIZE;
use std::fmt;

pub const ALLOC_SIZE_VAR: &str = "SEGSCOPE_ALLOC_SIZE";
pub const VIEW_VAR: &str = "SEGSCOPE_VIEW";
pub const VERBOSE_VAR: &str = "SEGSCOPE_VERBOSE";

/// How the report is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// One `<label> [<address>]` line per entry on stdout
    #[default]
    Lines,
    /// Interactive memory map
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub alloc_size: usize,
    pub view: View,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            alloc_size: DEFAULT_SCRATCH_SIZE,
            view: View::Lines,
            verbose: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value, reason } => {
                write!(f, "Invalid value '{}' for {}: {}", value, var, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ALLOC_SIZE_VAR) {
            config.alloc_size = match value.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        var: ALLOC_SIZE_VAR,
                        value,
                        reason: "must be positive",
                    })
                }
                Ok(size) => size,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        var: ALLOC_SIZE_VAR,
                        value,
                        reason: "expected a byte count",
                    })
                }
            };
        }

        if let Some(value) = lookup(VIEW_VAR) {
            config.view = match value.trim().to_ascii_lowercase().as_str() {
                "" | "lines" => View::Lines,
                "map" => View::Map,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: VIEW_VAR,
                        value,
                        reason: "expected 'lines' or 'map'",
                    })
                }
            };
        }

        if let Some(value) = lookup(VERBOSE_VAR) {
            config.verbose = match value.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" => false,
                "1" | "true" | "yes" => true,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: VERBOSE_VAR,
                        value,
                        reason: "expected a boolean",
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_in(&[])).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.alloc_size, 16);
        assert_eq!(config.view, View::Lines);
        assert!(!config.verbose);
    }

    #[test]
    fn test_all_values_set() {
        let config = Config::from_lookup(lookup_in(&[
            (ALLOC_SIZE_VAR, "64"),
            (VIEW_VAR, "MAP"),
            (VERBOSE_VAR, "1"),
        ]))
        .expect("valid values");
        assert_eq!(config.alloc_size, 64);
        assert_eq!(config.view, View::Map);
        assert!(config.verbose);
    }

    #[test]
    fn test_zero_alloc_size_rejected() {
        let err = Config::from_lookup(lookup_in(&[(ALLOC_SIZE_VAR, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: ALLOC_SIZE_VAR,
                value: "0".to_string(),
                reason: "must be positive",
            }
        );
    }

    #[test]
    fn test_garbage_values_rejected() {
        assert!(Config::from_lookup(lookup_in(&[(ALLOC_SIZE_VAR, "sixteen")])).is_err());
        assert!(Config::from_lookup(lookup_in(&[(VIEW_VAR, "tree")])).is_err());

        let err = Config::from_lookup(lookup_in(&[(VERBOSE_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'maybe' for SEGSCOPE_VERBOSE: expected a boolean"
        );
    }
}
