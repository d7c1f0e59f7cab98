//! Standings computation for league competitions
//!
//! This module aggregates completed match results into a points table,
//! derives net run rate, and ranks teams with the standard tie-break chain
//! (points, then net run rate, then wins).

pub mod calculator;
pub mod net_run_rate;
pub mod points;
pub mod ranking;

// Re-export commonly used types
pub use calculator::{table_for_competition, LeagueStandingsCalculator, StandingsCalculator};
pub use net_run_rate::compute_net_run_rate;
pub use points::compute_points;
pub use ranking::rank_standings;
