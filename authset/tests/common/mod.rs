use authset::{Options, Sha2Factory, Tree};
use rand::{RngCore as _, SeedableRng as _};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

const ENV_NAME: &str = "AUTHSET_LOG";

/// Install a subscriber printing through the test harness. Filtered by `AUTHSET_LOG`, which
/// defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_NAME).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn build<T: AsRef<[u8]>>(data: &[T]) -> Tree<Sha2Factory> {
    init_tracing();
    Tree::build(Options::new(Sha2Factory::new()), data).unwrap()
}

/// `count` distinct, non-empty payloads of varying length, deterministic in `seed`.
#[allow(dead_code)]
pub fn payloads(seed: u64, count: usize) -> Vec<Vec<u8>> {
    let mut rng_seed = [0; 16];
    rng_seed[0..8].copy_from_slice(&seed.to_le_bytes());
    let mut rng = rand_pcg::Lcg64Xsh32::from_seed(rng_seed);

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let len = 1 + (rng.next_u32() % 48) as usize;
        let mut payload = vec![0; len];
        rng.fill_bytes(&mut payload);
        if seen.insert(payload.clone()) {
            out.push(payload);
        }
    }
    out
}

/// Remove empty and repeated payloads, keeping the first occurrence.
#[allow(dead_code)]
pub fn distinct(data: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    let mut seen = HashSet::new();
    data.into_iter()
        .filter(|p| !p.is_empty() && seen.insert(p.clone()))
        .collect()
}

/// The proof length for a tree over `count` leaves: the number of times the count has to be
/// halved, rounding up, to reach one. A lone leaf still has depth one.
#[allow(dead_code)]
pub fn expected_depth(count: usize) -> usize {
    let slots = count.max(2).next_power_of_two();
    slots.trailing_zeros() as usize
}
