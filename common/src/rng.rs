use rand::prelude::{SeedableRng, StdRng};

/// A seeded generator when a seed is given, otherwise one seeded from OS entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
