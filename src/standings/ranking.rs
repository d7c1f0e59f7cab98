//! Ranking and tie-break ordering
//!
//! Teams order by points, then net run rate, then wins, all descending.
//! Teams still level after all three keys keep their input order, so the
//! ranking is deterministic for any input.

use crate::types::TeamStanding;
use std::cmp::Ordering;

/// Order standings best-first using the tie-break chain
///
/// The underlying sort is stable; standings identical on points, net run
/// rate, and wins come out in the order they went in.
pub fn rank_standings(mut standings: Vec<TeamStanding>) -> Vec<TeamStanding> {
    standings.sort_by(compare_standings);
    standings
}

fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.net_run_rate.total_cmp(&a.net_run_rate))
        .then_with(|| b.wins.cmp(&a.wins))
}
