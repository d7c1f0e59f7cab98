//! Common types used throughout the standings engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for teams, as issued by the backing document store
pub type TeamId = String;

/// Unique identifier for competitions
pub type CompetitionId = String;

/// Unique identifier for generated knockout fixtures
pub type FixtureId = Uuid;

/// Outcome of a completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Tie,
    NoResult,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::HomeWin => write!(f, "HomeWin"),
            MatchOutcome::AwayWin => write!(f, "AwayWin"),
            MatchOutcome::Tie => write!(f, "Tie"),
            MatchOutcome::NoResult => write!(f, "NoResult"),
        }
    }
}

/// Runs scored and legal deliveries faced by one side in one match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsScore {
    pub runs: u32,
    pub balls: u32,
}

/// Scores extracted from a raw match record, both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScores {
    pub home: InningsScore,
    pub away: InningsScore,
}

/// One completed fixture between two teams
///
/// Produced by match-scoring functionality upstream and consumed read-only
/// by the standings calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home: InningsScore,
    pub away: InningsScore,
    pub outcome: MatchOutcome,
    /// When the match was played, if the source record carried a date
    pub played_at: Option<DateTime<Utc>>,
}

/// Accumulated record of one team across a competition
///
/// Pure projection over the match set; rebuilt from scratch on every query
/// and never persisted as authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: TeamId,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub no_results: u32,
    /// Aggregate runs scored
    pub runs_for: u32,
    /// Aggregate legal deliveries faced
    pub balls_for: u32,
    /// Aggregate runs conceded
    pub runs_against: u32,
    /// Aggregate legal deliveries bowled
    pub balls_against: u32,
    pub points: u32,
    pub net_run_rate: f64,
}

impl TeamStanding {
    /// Create an empty standing for a team
    pub fn new(team: TeamId) -> Self {
        Self {
            team,
            played: 0,
            wins: 0,
            losses: 0,
            ties: 0,
            no_results: 0,
            runs_for: 0,
            balls_for: 0,
            runs_against: 0,
            balls_against: 0,
            points: 0,
            net_run_rate: 0.0,
        }
    }
}

/// Ranked standings for a competition at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable {
    pub competition: CompetitionId,
    /// Standings in rank order, best first
    pub standings: Vec<TeamStanding>,
    pub computed_at: DateTime<Utc>,
}

impl StandingsTable {
    /// Look up a team's standing by id
    pub fn standing_for(&self, team: &str) -> Option<&TeamStanding> {
        self.standings.iter().find(|s| s.team == team)
    }

    /// Rank of a team (1 = top of the table)
    pub fn rank_of(&self, team: &str) -> Option<usize> {
        self.standings.iter().position(|s| s.team == team).map(|i| i + 1)
    }
}
