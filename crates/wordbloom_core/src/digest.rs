//! Salted MD5 digests mapped onto bit-vector indexes.
//!
//! Round `i` hashes `word + i.to_string()` (after optional lowercase folding), reads the
//! 128-bit digest as a big-endian integer and reduces it modulo the vector length.
use md5::{Digest, Md5};
use std::fmt::Write as _;

/// Lazy, finite sequence of bit indexes for one word. Built per call, never shared.
#[derive(Debug, Clone)]
pub struct Digests {
    salted: String,
    word_len: usize,
    round: usize,
    rounds: usize,
    arr_len: u128,
}

impl Digests {
    pub fn new(word: &str, case_insensitive: bool, rounds: usize, arr_len: usize) -> Self {
        let mut salted = if case_insensitive { word.to_lowercase() } else { word.to_owned() };
        let word_len = salted.len();
        // room for the decimal salt
        salted.reserve(20);
        Self { salted, word_len, round: 0, rounds, arr_len: arr_len as u128 }
    }
}

/// MD5 of `bytes` as an unsigned integer, reduced into `[0, arr_len)`.
#[inline]
pub fn index_of(bytes: &[u8], arr_len: u128) -> usize {
    let dig = Md5::digest(bytes);
    let mut be = [0u8; 16];
    be.copy_from_slice(&dig);
    (u128::from_be_bytes(be) % arr_len) as usize
}

impl Iterator for Digests {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.round >= self.rounds {
            return None;
        }
        self.salted.truncate(self.word_len);
        // writing into a String cannot fail
        let _ = write!(self.salted, "{}", self.round);
        self.round += 1;
        Some(index_of(self.salted.as_bytes(), self.arr_len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rounds - self.round;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Digests {}
