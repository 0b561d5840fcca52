use crate::consts::{DEFAULT_ARR_LEN, DEFAULT_CASE_INSENSITIVE, DEFAULT_POPULATION_COUNT};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Construction parameters. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_population_count")]
    pub population_count: usize,

    #[serde(default = "default_arr_len")]
    pub arr_len: usize,

    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

fn default_population_count() -> usize { DEFAULT_POPULATION_COUNT }
fn default_arr_len() -> usize { DEFAULT_ARR_LEN }
fn default_case_insensitive() -> bool { DEFAULT_CASE_INSENSITIVE }

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            population_count: DEFAULT_POPULATION_COUNT,
            arr_len: DEFAULT_ARR_LEN,
            case_insensitive: DEFAULT_CASE_INSENSITIVE,
        }
    }
}

impl FilterConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: FilterConfig = serde_json::from_str(s)?;
        Ok(cfg)
    }
}
