//! Hash-count sizing for a fixed bit vector.
//!
//! Uses the optimal-k formula `k = (m / n) * ln 2` (m = `arr_len`, n = `population_count`),
//! truncated toward zero. Nothing here adapts k after construction.
use crate::errors::{BloomError, Result};

/// Returns `floor((arr_len / population_count) * ln 2)`, or an error when either
/// parameter is zero or the result would be less than one round.
pub fn hash_count_for(population_count: usize, arr_len: usize) -> Result<usize> {
    if population_count == 0 {
        return Err(BloomError::InvalidParameter { name: "population_count", value: population_count });
    }
    if arr_len == 0 {
        return Err(BloomError::InvalidParameter { name: "arr_len", value: arr_len });
    }
    let k = (arr_len as f64 / population_count as f64 * std::f64::consts::LN_2).floor();
    if k < 1.0 {
        return Err(BloomError::ConfigurationTooSmall { population_count, arr_len });
    }
    // `as` saturates for absurd ratios
    Ok(k as usize)
}
