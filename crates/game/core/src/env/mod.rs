//! Read-only facts the engine consults while applying a transition.
//!
//! [`RoundEnv`] bundles the injected random source and the tunable
//! configuration so transitions never reach for globals.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed, context};

use crate::config::GameConfig;

/// Environment handed to every transition.
#[derive(Clone, Copy)]
pub struct RoundEnv<'a> {
    rng: &'a dyn RngOracle,
    config: &'a GameConfig,
}

impl<'a> RoundEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, config: &'a GameConfig) -> Self {
        Self { rng, config }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for RoundEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RoundEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
