//! Tolerant parsing of raw match records
//!
//! Document-store match records express scores either as discrete numeric
//! fields (`homeScore: 150`) or as composite "runs/wickets" strings
//! (`homeScore: "150/4"`), with numeric fields taking precedence. Ball
//! counts come from per-innings fields when present, otherwise both sides
//! derive from the single shared `overs` field. Records without per-innings
//! counts therefore assume both innings bowled the same number of legal
//! deliveries; rain-affected matches break that assumption, and the shared
//! value is applied uniformly regardless.

use crate::types::{InningsScore, MatchOutcome, MatchResult, MatchScores};
use crate::utils::overs_to_balls;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tracing::warn;

/// Extract both sides' runs and ball counts from a raw match record
///
/// Total over arbitrary JSON; unparseable or missing fields contribute zero.
pub fn extract_match_scores(record: &Value) -> MatchScores {
    let home_runs = side_runs(record, "homeScore", "homeScoreText");
    let away_runs = side_runs(record, "awayScore", "awayScoreText");

    let shared_balls = shared_over_balls(record);
    let home_balls = side_balls(record, "homeBalls", "homeOvers", shared_balls);
    let away_balls = side_balls(record, "awayBalls", "awayOvers", shared_balls);

    MatchScores {
        home: InningsScore {
            runs: home_runs,
            balls: home_balls,
        },
        away: InningsScore {
            runs: away_runs,
            balls: away_balls,
        },
    }
}

/// Parse a full match record into a typed result
///
/// Team ids are read from `homeTeamId`/`awayTeamId` (falling back to
/// `homeTeam`/`awayTeam`), scores via [`extract_match_scores`], the outcome
/// from an explicit status or winner tag when present and from the score
/// comparison otherwise, and the match date from `date`/`playedAt`.
pub fn parse_match_record(record: &Value) -> MatchResult {
    let home_team = string_field(record, &["homeTeamId", "homeTeam"]).unwrap_or_default();
    let away_team = string_field(record, &["awayTeamId", "awayTeam"]).unwrap_or_default();

    let scores = extract_match_scores(record);
    let outcome = parse_outcome(record, &home_team, &away_team, &scores);
    let played_at = parse_played_at(record);

    MatchResult {
        home_team,
        away_team,
        home: scores.home,
        away: scores.away,
        outcome,
        played_at,
    }
}

/// Runs for one side, preferring a discrete number over a composite string
fn side_runs(record: &Value, key: &str, text_key: &str) -> u32 {
    match record.get(key) {
        Some(Value::Number(n)) => number_as_u32(n.as_f64()),
        Some(Value::String(text)) => leading_runs(text).unwrap_or_else(|| {
            warn!(field = key, value = %text, "unparseable score, defaulting to 0");
            0
        }),
        Some(other) => {
            warn!(field = key, value = %other, "unexpected score shape, defaulting to 0");
            0
        }
        None => match record.get(text_key).and_then(Value::as_str) {
            Some(text) => leading_runs(text).unwrap_or_else(|| {
                warn!(field = text_key, value = %text, "unparseable score, defaulting to 0");
                0
            }),
            None => 0,
        },
    }
}

/// Leading integer of a composite "runs/wickets" score string
fn leading_runs(text: &str) -> Option<u32> {
    let runs = text.split('/').next()?.trim();
    runs.parse().ok()
}

/// Ball count for one side
///
/// Per-innings balls win, then per-innings overs, then the shared value.
fn side_balls(record: &Value, balls_key: &str, overs_key: &str, shared_balls: u32) -> u32 {
    if let Some(balls) = numeric_field(record, balls_key) {
        return number_as_u32(Some(balls));
    }
    if let Some(overs) = numeric_field(record, overs_key) {
        return overs_to_balls(overs);
    }
    shared_balls
}

/// Balls derived from the shared `overs` field, applied to both innings
fn shared_over_balls(record: &Value) -> u32 {
    numeric_field(record, "overs").map(overs_to_balls).unwrap_or(0)
}

fn parse_outcome(
    record: &Value,
    home_team: &str,
    away_team: &str,
    scores: &MatchScores,
) -> MatchOutcome {
    if let Some(status) = string_field(record, &["status", "result", "outcome"]) {
        let status = status.to_lowercase();
        if status.contains("abandon") || status.contains("no result") || status.contains("no_result")
        {
            return MatchOutcome::NoResult;
        }
        if status.contains("tie") || status.contains("draw") {
            return MatchOutcome::Tie;
        }
    }

    if let Some(winner) = string_field(record, &["winner", "winnerId"]) {
        if winner == home_team || winner.eq_ignore_ascii_case("home") {
            return MatchOutcome::HomeWin;
        }
        if winner == away_team || winner.eq_ignore_ascii_case("away") {
            return MatchOutcome::AwayWin;
        }
        warn!(%winner, "winner tag matches neither side, falling back to scores");
    }

    // A record with no tag and no score data never took place
    if scores.home == InningsScore::default() && scores.away == InningsScore::default() {
        return MatchOutcome::NoResult;
    }

    match scores.home.runs.cmp(&scores.away.runs) {
        std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
        std::cmp::Ordering::Less => MatchOutcome::AwayWin,
        std::cmp::Ordering::Equal => MatchOutcome::Tie,
    }
}

fn parse_played_at(record: &Value) -> Option<DateTime<Utc>> {
    let text = string_field(record, &["date", "playedAt"])?;

    if let Ok(stamp) = DateTime::parse_from_rfc3339(&text) {
        return Some(stamp.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    warn!(value = %text, "unparseable match date");
    None
}

/// First present string value among the given keys
fn string_field(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Numeric value under a key, accepting numbers and numeric strings
fn numeric_field(record: &Value, key: &str) -> Option<f64> {
    match record.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    }
}

fn number_as_u32(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v.round() as u32,
        _ => 0,
    }
}
