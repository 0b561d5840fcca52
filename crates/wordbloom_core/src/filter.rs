//! Fixed-size Bloom filter over strings with salted MD5 rounds.
use crate::config::FilterConfig;
use crate::digest::Digests;
use crate::errors::Result;
use crate::sizing::hash_count_for;
use tracing::{debug, warn};

/// Bit vector plus a hash count fixed at construction. Bits are only ever set.
///
/// `add` takes `&mut self` and `contains` takes `&self`, so sharing one filter across
/// threads means a single writer (e.g. behind `RwLock`) or a finished build phase.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    arr_len: usize,
    hash_count: usize,
    case_insensitive: bool,
    bits: Vec<u8>,
    insertions: u64,
}

impl BloomFilter {
    /// Sizes the filter with `hash_count = floor((arr_len / population_count) * ln 2)`.
    ///
    /// Fails with `InvalidParameter` for a zero argument and with `ConfigurationTooSmall`
    /// when that formula gives less than one round.
    pub fn new(population_count: usize, arr_len: usize, case_insensitive: bool) -> Result<Self> {
        let hash_count = match hash_count_for(population_count, arr_len) {
            Ok(k) => k,
            Err(e) => {
                warn!(population_count, arr_len, error = %e, "bloom filter rejected");
                return Err(e);
            }
        };
        let bytes = arr_len.div_ceil(8);
        debug!(arr_len, hash_count, case_insensitive, bytes, "bloom filter allocated");
        Ok(Self { arr_len, hash_count, case_insensitive, bits: vec![0u8; bytes], insertions: 0 })
    }

    pub fn from_config(cfg: &FilterConfig) -> Result<Self> {
        Self::new(cfg.population_count, cfg.arr_len, cfg.case_insensitive)
    }

    #[inline]
    fn digests(&self, word: &str) -> Digests {
        Digests::new(word, self.case_insensitive, self.hash_count, self.arr_len)
    }

    /// Sets every bit of `word`'s salted digests. Adding twice changes nothing but
    /// [`insertions`](Self::insertions).
    pub fn add(&mut self, word: &str) {
        for bit in self.digests(word) {
            self.bits[bit / 8] |= 1u8 << (bit & 7);
        }
        self.insertions += 1;
    }

    /// `false` means `word` was never added. `true` may be a false positive.
    pub fn contains(&self, word: &str) -> bool {
        self.digests(word).all(|bit| self.bits[bit / 8] & (1u8 << (bit & 7)) != 0)
    }

    pub fn hash_count(&self) -> usize { self.hash_count }
    pub fn arr_len(&self) -> usize { self.arr_len }
    pub fn case_insensitive(&self) -> bool { self.case_insensitive }

    /// Number of `add` calls so far, duplicates included. Diagnostic only: nothing
    /// compares it against the population count the filter was sized for.
    pub fn insertions(&self) -> u64 { self.insertions }
}
