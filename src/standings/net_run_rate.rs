//! Net run rate calculation
//!
//! Net run rate compares a team's scoring rate to its conceding rate across
//! a competition, expressed in runs per over. Ball counts convert to overs
//! at six legal deliveries per over.

use crate::utils::{balls_to_overs, round_to_third};

/// Runs per over for one side of the ledger
///
/// Defined as exactly 0.0 when no deliveries were faced.
pub fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    runs as f64 / balls_to_overs(balls)
}

/// Net run rate across a competition, rounded to three decimal places
///
/// Defined as exactly 0.0 when either ball count is zero, so a team that
/// has only appeared in abandoned matches carries a neutral rate instead of
/// dividing by zero.
pub fn compute_net_run_rate(
    runs_for: u32,
    balls_for: u32,
    runs_against: u32,
    balls_against: u32,
) -> f64 {
    if balls_for == 0 || balls_against == 0 {
        return 0.0;
    }

    let scored = run_rate(runs_for, balls_for);
    let conceded = run_rate(runs_against, balls_against);

    round_to_third(scored - conceded)
}
