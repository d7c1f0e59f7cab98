//! Standings calculator trait and league implementation
//!
//! This module defines the interface for deriving a ranked points table
//! from completed match results, and the league-rules implementation used
//! for round-robin competitions.

use crate::config::ScoringRules;
use crate::error::Result;
use crate::standings::net_run_rate::compute_net_run_rate;
use crate::standings::ranking::rank_standings;
use crate::types::{MatchOutcome, MatchResult, StandingsTable, TeamStanding};
use crate::utils::current_timestamp;
use std::collections::HashMap;
use tracing::debug;

/// Trait for deriving ranked standings from match results
pub trait StandingsCalculator: Send + Sync {
    /// Compute the ranked table for a competition from its completed matches
    ///
    /// The table is rebuilt from scratch on every call; match input order
    /// does not affect the totals.
    fn compute_standings(
        &self,
        competition: &str,
        matches: &[MatchResult],
    ) -> Result<StandingsTable>;

    /// Scoring rules this calculator applies
    fn scoring_rules(&self) -> &ScoringRules;
}

/// Standings calculator applying league scoring rules
#[derive(Debug, Clone)]
pub struct LeagueStandingsCalculator {
    rules: ScoringRules,
}

impl LeagueStandingsCalculator {
    /// Create a calculator with the given scoring rules
    pub fn new(rules: ScoringRules) -> Result<Self> {
        rules.validate()?;

        Ok(Self { rules })
    }

    /// Accumulate raw tallies per team, in order of first appearance
    fn accumulate(&self, matches: &[MatchResult]) -> Vec<TeamStanding> {
        let mut standings: Vec<TeamStanding> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for result in matches {
            let home = Self::slot(&mut standings, &mut index, &result.home_team);
            Self::tally_outcome(&mut standings[home], result, true);

            let away = Self::slot(&mut standings, &mut index, &result.away_team);
            Self::tally_outcome(&mut standings[away], result, false);
        }

        for standing in &mut standings {
            standing.points =
                self.rules
                    .points_for(standing.wins, standing.ties, standing.no_results);
            standing.net_run_rate = compute_net_run_rate(
                standing.runs_for,
                standing.balls_for,
                standing.runs_against,
                standing.balls_against,
            );
        }

        standings
    }

    fn slot(
        standings: &mut Vec<TeamStanding>,
        index: &mut HashMap<String, usize>,
        team: &str,
    ) -> usize {
        if let Some(&position) = index.get(team) {
            return position;
        }

        standings.push(TeamStanding::new(team.to_string()));
        let position = standings.len() - 1;
        index.insert(team.to_string(), position);
        position
    }

    fn tally_outcome(standing: &mut TeamStanding, result: &MatchResult, is_home: bool) {
        standing.played += 1;

        match (result.outcome, is_home) {
            (MatchOutcome::HomeWin, true) | (MatchOutcome::AwayWin, false) => standing.wins += 1,
            (MatchOutcome::HomeWin, false) | (MatchOutcome::AwayWin, true) => {
                standing.losses += 1
            }
            (MatchOutcome::Tie, _) => standing.ties += 1,
            (MatchOutcome::NoResult, _) => standing.no_results += 1,
        }

        // Abandoned matches carry no innings into the run-rate ledger
        if result.outcome == MatchOutcome::NoResult {
            return;
        }

        let (own, opposition) = if is_home {
            (&result.home, &result.away)
        } else {
            (&result.away, &result.home)
        };

        standing.runs_for += own.runs;
        standing.balls_for += own.balls;
        standing.runs_against += opposition.runs;
        standing.balls_against += opposition.balls;
    }
}

impl Default for LeagueStandingsCalculator {
    fn default() -> Self {
        Self {
            rules: ScoringRules::default(),
        }
    }
}

impl StandingsCalculator for LeagueStandingsCalculator {
    fn compute_standings(
        &self,
        competition: &str,
        matches: &[MatchResult],
    ) -> Result<StandingsTable> {
        let standings = rank_standings(self.accumulate(matches));

        debug!(
            competition,
            matches = matches.len(),
            teams = standings.len(),
            "computed standings table"
        );

        Ok(StandingsTable {
            competition: competition.to_string(),
            standings,
            computed_at: current_timestamp(),
        })
    }

    fn scoring_rules(&self) -> &ScoringRules {
        &self.rules
    }
}

/// Fetch a competition's matches through a provider and compute its table
pub fn table_for_competition(
    provider: &dyn crate::ingest::MatchProvider,
    calculator: &dyn StandingsCalculator,
    competition: &str,
) -> Result<StandingsTable> {
    let matches = provider.matches_for(competition)?;
    calculator.compute_standings(competition, &matches)
}
