//! Match provider traits and implementations
//!
//! This module defines the interface for supplying the finite set of match
//! records belonging to a competition, along with a static in-memory
//! implementation. The backing document store sits behind this seam; the
//! calculator itself never talks to it.

use crate::error::{Result, StandingsError};
use crate::ingest::record::parse_match_record;
use crate::types::{CompetitionId, MatchResult};
use serde_json::Value;
use std::collections::HashMap;

/// Trait for supplying a competition's completed match records
///
/// Implementations may return matches in any order; the calculator sorts
/// deterministically regardless of input order.
pub trait MatchProvider: Send + Sync {
    /// All completed matches for a competition
    fn matches_for(&self, competition: &str) -> Result<Vec<MatchResult>>;

    /// Competitions this provider knows about
    fn competitions(&self) -> Vec<CompetitionId>;
}

/// Static in-memory match provider
///
/// Holds already-fetched match records keyed by competition. Useful for
/// tests and for callers that batch-load records before computing.
#[derive(Debug, Clone, Default)]
pub struct StaticMatchProvider {
    matches: HashMap<CompetitionId, Vec<MatchResult>>,
}

impl StaticMatchProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
        }
    }

    /// Register a typed match result under a competition
    pub fn register_match(&mut self, competition: &str, result: MatchResult) {
        self.matches
            .entry(competition.to_string())
            .or_default()
            .push(result);
    }

    /// Register raw document-store records under a competition
    ///
    /// Records pass through the tolerant parser; nothing here fails on
    /// malformed input. Registering an empty batch still registers the
    /// competition itself.
    pub fn register_records(&mut self, competition: &str, records: &[Value]) {
        self.matches.entry(competition.to_string()).or_default();
        for record in records {
            self.register_match(competition, parse_match_record(record));
        }
    }

    /// Number of matches registered for a competition
    pub fn match_count(&self, competition: &str) -> usize {
        self.matches.get(competition).map_or(0, Vec::len)
    }
}

impl MatchProvider for StaticMatchProvider {
    fn matches_for(&self, competition: &str) -> Result<Vec<MatchResult>> {
        self.matches
            .get(competition)
            .cloned()
            .ok_or_else(|| {
                StandingsError::CompetitionNotFound {
                    competition_id: competition.to_string(),
                }
                .into()
            })
    }

    fn competitions(&self) -> Vec<CompetitionId> {
        self.matches.keys().cloned().collect()
    }
}
