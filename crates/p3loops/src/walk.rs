//! Seeded random walks over admissible extensions.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single `StdRng`, so a
//! walk can be regenerated from its token alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cfg::SameGeneratorRule;
use crate::domain::Domain;
use crate::path::DiscretePath;
use crate::search::extensions;
use crate::validate::Validator;

/// Reproducible identity of one random draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// SplitMix64-style mixing of `(seed, index)` into one RNG seed.
    pub fn rng(&self) -> StdRng {
        #[inline]
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Walk from the domain's seed edge, extending uniformly at random among admissible
/// extensions until none is left or the path has `max_edges` edges.
pub fn random_walk(
    domain: &Domain,
    token: ReplayToken,
    max_edges: usize,
    rule: SameGeneratorRule,
) -> DiscretePath {
    let validator = Validator::discrete(domain, rule);
    let mut rng = token.rng();
    let mut state = DiscretePath::seed(domain);
    while state.path().len() < max_edges {
        let mut options = extensions(&validator, &state);
        if options.is_empty() {
            debug!(?token, edges = state.path().len(), "walk stuck");
            break;
        }
        let pick = rng.gen_range(0..options.len());
        state = options.swap_remove(pick).1;
    }
    state
}
