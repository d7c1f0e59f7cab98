//! Seeding from ranked standings
//!
//! The top of the table qualifies for the knockout stage; seed 1 is the
//! league winner. Fewer eligible teams than the rules require is an
//! explicit error, never a partial bracket.

use crate::config::BracketRules;
use crate::error::{Result, StandingsError};
use crate::types::{StandingsTable, TeamId};
use serde::{Deserialize, Serialize};

/// A qualified team and its bracket position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// 1-based seed position; seed 1 topped the table
    pub position: u32,
    pub team: TeamId,
}

/// Take the top of a ranked table as knockout seeds
pub fn seed_from_standings(table: &StandingsTable, rules: &BracketRules) -> Result<Vec<Seed>> {
    rules.validate()?;

    if table.standings.len() < rules.seed_count {
        return Err(StandingsError::NotEnoughTeams {
            required: rules.seed_count,
            available: table.standings.len(),
        }
        .into());
    }

    let seeds = table
        .standings
        .iter()
        .take(rules.seed_count)
        .enumerate()
        .map(|(i, standing)| Seed {
            position: i as u32 + 1,
            team: standing.team.clone(),
        })
        .collect();

    Ok(seeds)
}
