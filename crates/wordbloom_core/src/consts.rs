// crates/wordbloom_core/src/consts.rs

/// Expected number of distinct words when the caller does not say otherwise.
pub const DEFAULT_POPULATION_COUNT: usize = 500_000;

/// Bit vector length when the caller does not say otherwise.
pub const DEFAULT_ARR_LEN: usize = 4_000_000;

pub const DEFAULT_CASE_INSENSITIVE: bool = true;

// defaults must size to at least one hash round: 4_000_000 / 500_000 * ln 2 = 5.54
const _: () = { assert!(DEFAULT_ARR_LEN / DEFAULT_POPULATION_COUNT >= 2); };
