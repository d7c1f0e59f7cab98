//! League scoring rules
//!
//! Points awarded per match outcome. Defaults follow the standard limited-
//! overs convention: two points for a win, one for a tie, one for a match
//! abandoned without a result, nothing for a loss.

use crate::error::{Result, StandingsError};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

/// Points awarded per match outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub points_per_win: u32,
    pub points_per_tie: u32,
    pub points_per_no_result: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_win: 2,
            points_per_tie: 1,
            points_per_no_result: 1,
        }
    }
}

impl ScoringRules {
    /// Load scoring rules from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut rules = Self::default();

        if let Ok(points) = env::var("PAVILION_POINTS_PER_WIN") {
            rules.points_per_win = points.parse().map_err(|_| {
                anyhow!("Invalid PAVILION_POINTS_PER_WIN value: {}", points)
            })?;
        }
        if let Ok(points) = env::var("PAVILION_POINTS_PER_TIE") {
            rules.points_per_tie = points.parse().map_err(|_| {
                anyhow!("Invalid PAVILION_POINTS_PER_TIE value: {}", points)
            })?;
        }
        if let Ok(points) = env::var("PAVILION_POINTS_PER_NO_RESULT") {
            rules.points_per_no_result = points.parse().map_err(|_| {
                anyhow!("Invalid PAVILION_POINTS_PER_NO_RESULT value: {}", points)
            })?;
        }

        rules.validate()?;
        Ok(rules)
    }

    /// Validate rule parameters
    pub fn validate(&self) -> Result<()> {
        if self.points_per_win == 0 {
            return Err(StandingsError::InvalidRules {
                message: "Points per win must be positive".to_string(),
            }
            .into());
        }

        if self.points_per_tie > self.points_per_win
            || self.points_per_no_result > self.points_per_win
        {
            return Err(StandingsError::InvalidRules {
                message: "A win cannot award fewer points than a tie or no-result".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Total points for a team's outcome tallies
    ///
    /// Losses contribute zero.
    pub fn points_for(&self, wins: u32, ties: u32, no_results: u32) -> u32 {
        self.points_per_win * wins
            + self.points_per_tie * ties
            + self.points_per_no_result * no_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = ScoringRules::default();
        assert_eq!(rules.points_per_win, 2);
        assert_eq!(rules.points_per_tie, 1);
        assert_eq!(rules.points_per_no_result, 1);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_points_for() {
        let rules = ScoringRules::default();
        assert_eq!(rules.points_for(0, 0, 0), 0);
        assert_eq!(rules.points_for(3, 1, 2), 9);
    }

    #[test]
    fn test_zero_win_points_rejected() {
        let rules = ScoringRules {
            points_per_win: 0,
            points_per_tie: 0,
            points_per_no_result: 0,
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_tie_worth_more_than_win_rejected() {
        let rules = ScoringRules {
            points_per_win: 2,
            points_per_tie: 3,
            points_per_no_result: 1,
        };
        assert!(rules.validate().is_err());
    }
}
