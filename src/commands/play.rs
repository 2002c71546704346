//! Interactive play command
//!
//! Wires the game session to the process's stdin and stdout.

use crate::game::GameSession;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;

/// Configuration for an interactive session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Fixed seed for reproducible secrets; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Build the random source for this session
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                info!(seed, "using fixed seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}

/// Run games on the console until the player stops
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn run_play(config: &PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut session = GameSession::new(stdin.lock(), io::stdout().lock(), config.rng());
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeLength, DuplicatePolicy, generate};

    #[test]
    fn seeded_config_is_reproducible() {
        let config = PlayConfig::new(Some(31));

        let first = generate(CodeLength::Eight, DuplicatePolicy::Allowed, &mut config.rng());
        let second = generate(CodeLength::Eight, DuplicatePolicy::Allowed, &mut config.rng());

        assert_eq!(first, second);
    }

    #[test]
    fn default_config_has_no_seed() {
        assert_eq!(PlayConfig::default().seed, None);
    }
}
