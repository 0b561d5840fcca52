use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

/// Deterministic stand-in for a downloaded word list.
#[allow(dead_code)]
pub fn dictionary(seed: u64, n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let len = rng.random_range(3..=10);
        let w = random_word(&mut rng, len);
        if seen.insert(w.clone()) {
            out.push(w);
        }
    }
    out
}
