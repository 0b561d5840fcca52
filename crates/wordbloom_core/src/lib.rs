pub mod consts;
pub mod errors;
pub mod config;
pub mod digest;
pub mod sizing;
pub mod filter;

pub use config::FilterConfig;
pub use errors::{BloomError, Result};
pub use filter::BloomFilter;
pub use sizing::hash_count_for;
