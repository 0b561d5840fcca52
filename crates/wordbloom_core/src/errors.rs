use thiserror::Error;

#[derive(Debug, Error)]
pub enum BloomError {
    #[error("Invalid parameter: {name} must be greater than 0 (got {value})")]
    InvalidParameter { name: &'static str, value: usize },

    #[error(
        "Array size is too small for population count {population_count} (arr_len {arr_len}). \
         Increase arr_len or decrease population_count such that: \
         (arr_len / population_count) * ln(2) >= 1"
    )]
    ConfigurationTooSmall { population_count: usize, arr_len: usize },

    #[error("Config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BloomError>;
