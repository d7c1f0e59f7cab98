//! Test fixtures and record builders for integration testing

use pavilion::types::{InningsScore, MatchOutcome, MatchResult};
use serde_json::{json, Value};

/// A completed twenty-over match with both sides batting their full allocation
pub fn completed_match(home_team: &str, away_team: &str, home_runs: u32, away_runs: u32) -> MatchResult {
    let outcome = match home_runs.cmp(&away_runs) {
        std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
        std::cmp::Ordering::Less => MatchOutcome::AwayWin,
        std::cmp::Ordering::Equal => MatchOutcome::Tie,
    };

    MatchResult {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        home: InningsScore {
            runs: home_runs,
            balls: 120,
        },
        away: InningsScore {
            runs: away_runs,
            balls: 120,
        },
        outcome,
        played_at: None,
    }
}

/// A raw document-store record with composite score strings
pub fn raw_record(home_team: &str, away_team: &str, home_score: &str, away_score: &str) -> Value {
    json!({
        "homeTeamId": home_team,
        "awayTeamId": away_team,
        "homeScore": home_score,
        "awayScore": away_score,
        "overs": 20,
        "date": "2025-06-14"
    })
}

/// A full round-robin of raw records where earlier-listed teams always win
///
/// Gives team i a score margin over team j proportional to the gap in list
/// position, so the expected final order matches the input order.
pub fn dominant_round_robin(teams: &[&str]) -> Vec<Value> {
    let mut records = Vec::new();

    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate().skip(i + 1) {
            let margin = ((j - i) * 10) as u32;
            records.push(json!({
                "homeTeamId": home,
                "awayTeamId": away,
                "homeScore": 140 + margin,
                "awayScore": 140,
                "overs": 20
            }));
        }
    }

    records
}
