//! Single-elimination fixtures and bracket progression
//!
//! The opening round uses mirrored seeding (1v8, 2v7, 3v6, 4v5 for eight
//! seeds); later rounds pair winners in bracket order, so the top two seeds
//! can only meet in the final.

use crate::bracket::seeding::{seed_from_standings, Seed};
use crate::config::BracketRules;
use crate::error::{Result, StandingsError};
use crate::types::{FixtureId, StandingsTable};
use crate::utils::generate_fixture_id;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One knockout pairing between two seeded entrants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutFixture {
    pub id: FixtureId,
    pub home: Seed,
    pub away: Seed,
}

impl KnockoutFixture {
    fn new(home: Seed, away: Seed) -> Self {
        Self {
            id: generate_fixture_id(),
            home,
            away,
        }
    }

    /// The entrant matching a team id, if either side does
    pub fn entrant(&self, team: &str) -> Option<&Seed> {
        if self.home.team == team {
            Some(&self.home)
        } else if self.away.team == team {
            Some(&self.away)
        } else {
            None
        }
    }
}

/// One round of a knockout stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutRound {
    pub name: String,
    pub fixtures: Vec<KnockoutFixture>,
}

/// Conventional name for a round with the given number of entrants
pub fn round_name(entrants: usize) -> String {
    match entrants {
        2 => "Final".to_string(),
        4 => "Semifinal".to_string(),
        8 => "Quarterfinal".to_string(),
        n => format!("Round of {}", n),
    }
}

/// A single-elimination bracket, populated one round at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutBracket {
    rounds: Vec<KnockoutRound>,
    champion: Option<Seed>,
}

impl KnockoutBracket {
    /// Build a bracket with its opening round from an ordered seed list
    ///
    /// Seed i plays seed N+1-i, so the opening round for eight seeds is
    /// (1,8), (2,7), (3,6), (4,5).
    pub fn from_seeds(seeds: Vec<Seed>) -> Result<Self> {
        if seeds.len() < 2 || !seeds.len().is_power_of_two() {
            return Err(StandingsError::InvalidRules {
                message: format!(
                    "Bracket needs a power-of-two seed list of at least 2, got {}",
                    seeds.len()
                ),
            }
            .into());
        }

        let half = seeds.len() / 2;
        let mut fixtures = Vec::with_capacity(half);
        let mut tail = seeds;
        let head = tail.drain(..half).collect::<Vec<_>>();

        for (top, bottom) in head.into_iter().zip(tail.into_iter().rev()) {
            fixtures.push(KnockoutFixture::new(top, bottom));
        }

        let opening = KnockoutRound {
            name: round_name(half * 2),
            fixtures,
        };

        Ok(Self {
            rounds: vec![opening],
            champion: None,
        })
    }

    /// All rounds generated so far, oldest first
    pub fn rounds(&self) -> &[KnockoutRound] {
        &self.rounds
    }

    /// The round currently awaiting results
    pub fn current_round(&self) -> &KnockoutRound {
        // Invariant: from_seeds always pushes the opening round
        self.rounds.last().expect("bracket has at least one round")
    }

    /// The champion, once the final has been decided
    pub fn champion(&self) -> Option<&Seed> {
        self.champion.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.champion.is_some()
    }

    /// Report the current round's winners, in fixture order
    ///
    /// Winners pair in bracket order to form the next round; the winner of
    /// the final becomes the champion. Each winner must be an entrant of
    /// its fixture.
    pub fn advance(&mut self, winners: &[String]) -> Result<()> {
        if self.is_complete() {
            return Err(StandingsError::BracketComplete.into());
        }

        let current = self.current_round();
        if winners.len() != current.fixtures.len() {
            return Err(StandingsError::WinnerCountMismatch {
                expected: current.fixtures.len(),
                actual: winners.len(),
            }
            .into());
        }

        let mut advancing = Vec::with_capacity(winners.len());
        for (fixture, winner) in current.fixtures.iter().zip(winners) {
            let seed = fixture.entrant(winner).ok_or_else(|| StandingsError::UnknownWinner {
                team: winner.clone(),
                fixture_id: fixture.id.to_string(),
            })?;
            advancing.push(seed.clone());
        }

        if advancing.len() == 1 {
            debug!(champion = %advancing[0].team, "bracket complete");
            self.champion = advancing.pop();
            return Ok(());
        }

        let fixtures = advancing
            .chunks_exact(2)
            .map(|pair| KnockoutFixture::new(pair[0].clone(), pair[1].clone()))
            .collect::<Vec<_>>();

        debug!(
            round = %round_name(fixtures.len() * 2),
            fixtures = fixtures.len(),
            "advanced bracket"
        );

        self.rounds.push(KnockoutRound {
            name: round_name(fixtures.len() * 2),
            fixtures,
        });

        Ok(())
    }
}

/// Seed a table's top teams and build the opening knockout round
pub fn generate_knockout_fixtures(
    table: &StandingsTable,
    rules: &BracketRules,
) -> Result<KnockoutBracket> {
    let seeds = seed_from_standings(table, rules)?;
    KnockoutBracket::from_seeds(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds(n: u32) -> Vec<Seed> {
        (1..=n)
            .map(|position| Seed {
                position,
                team: format!("team-{}", position),
            })
            .collect()
    }

    fn pairing(round: &KnockoutRound) -> Vec<(u32, u32)> {
        round
            .fixtures
            .iter()
            .map(|f| (f.home.position, f.away.position))
            .collect()
    }

    #[test]
    fn test_opening_round_mirrored_seeding() {
        let bracket = KnockoutBracket::from_seeds(seeds(8)).unwrap();

        let round = bracket.current_round();
        assert_eq!(round.name, "Quarterfinal");
        assert_eq!(pairing(round), vec![(1, 8), (2, 7), (3, 6), (4, 5)]);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(KnockoutBracket::from_seeds(seeds(6)).is_err());
        assert!(KnockoutBracket::from_seeds(seeds(1)).is_err());
        assert!(KnockoutBracket::from_seeds(vec![]).is_err());
    }

    #[test]
    fn test_winners_pair_in_bracket_order() {
        let mut bracket = KnockoutBracket::from_seeds(seeds(8)).unwrap();

        // Upsets in the bottom half: 7 beats 2, 5 beats 4
        bracket
            .advance(&[
                "team-1".to_string(),
                "team-7".to_string(),
                "team-3".to_string(),
                "team-5".to_string(),
            ])
            .unwrap();

        let semis = bracket.current_round();
        assert_eq!(semis.name, "Semifinal");
        assert_eq!(pairing(semis), vec![(1, 7), (3, 5)]);
    }

    #[test]
    fn test_full_progression_to_champion() {
        let mut bracket = KnockoutBracket::from_seeds(seeds(4)).unwrap();
        assert_eq!(bracket.current_round().name, "Semifinal");

        bracket
            .advance(&["team-1".to_string(), "team-2".to_string()])
            .unwrap();
        assert_eq!(bracket.current_round().name, "Final");
        assert!(!bracket.is_complete());

        bracket.advance(&["team-2".to_string()]).unwrap();
        assert!(bracket.is_complete());
        assert_eq!(bracket.champion().unwrap().team, "team-2");
        assert_eq!(bracket.rounds().len(), 2);
    }

    #[test]
    fn test_unknown_winner_rejected() {
        let mut bracket = KnockoutBracket::from_seeds(seeds(4)).unwrap();

        let result = bracket.advance(&["team-1".to_string(), "team-9".to_string()]);
        assert!(result.is_err());
        // Bracket is unchanged after the failed advance
        assert_eq!(bracket.rounds().len(), 1);
    }

    #[test]
    fn test_winner_count_mismatch_rejected() {
        let mut bracket = KnockoutBracket::from_seeds(seeds(4)).unwrap();

        let result = bracket.advance(&["team-1".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_advance_after_completion_rejected() {
        let mut bracket = KnockoutBracket::from_seeds(seeds(2)).unwrap();
        assert_eq!(bracket.current_round().name, "Final");

        bracket.advance(&["team-1".to_string()]).unwrap();
        let result = bracket.advance(&["team-1".to_string()]);
        assert!(result.is_err());
    }
}
