//! Knockout bracket rules
//!
//! How many ranked teams qualify for the knockout stage. The seed count
//! must be a power of two so winners pair cleanly round after round.

use crate::error::{Result, StandingsError};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

/// Rules for seeding a knockout stage from ranked standings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRules {
    /// Number of teams taken from the top of the table as seeds
    pub seed_count: usize,
}

impl Default for BracketRules {
    fn default() -> Self {
        Self { seed_count: 8 }
    }
}

impl BracketRules {
    /// Load bracket rules from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut rules = Self::default();

        if let Ok(count) = env::var("PAVILION_SEED_COUNT") {
            rules.seed_count = count
                .parse()
                .map_err(|_| anyhow!("Invalid PAVILION_SEED_COUNT value: {}", count))?;
        }

        rules.validate()?;
        Ok(rules)
    }

    /// Validate rule parameters
    pub fn validate(&self) -> Result<()> {
        if self.seed_count < 2 {
            return Err(StandingsError::InvalidRules {
                message: "Seed count must be at least 2".to_string(),
            }
            .into());
        }

        if !self.seed_count.is_power_of_two() {
            return Err(StandingsError::InvalidRules {
                message: format!(
                    "Seed count must be a power of two, got {}",
                    self.seed_count
                ),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = BracketRules::default();
        assert_eq!(rules.seed_count, 8);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_non_power_of_two_rejected() {
        let rules = BracketRules { seed_count: 6 };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_single_seed_rejected() {
        let rules = BracketRules { seed_count: 1 };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_four_seeds_accepted() {
        let rules = BracketRules { seed_count: 4 };
        assert!(rules.validate().is_ok());
    }
}
