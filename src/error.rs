//! Error types for the standings engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the library.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific standings and bracket scenarios
#[derive(Debug, thiserror::Error)]
pub enum StandingsError {
    #[error("Not enough teams for seeding: required {required}, available {available}")]
    NotEnoughTeams { required: usize, available: usize },

    #[error("Invalid competition rules: {message}")]
    InvalidRules { message: String },

    #[error("Competition not found: {competition_id}")]
    CompetitionNotFound { competition_id: String },

    #[error("Winner {team} is not an entrant of fixture {fixture_id}")]
    UnknownWinner { team: String, fixture_id: String },

    #[error("Expected {expected} winners for the round, got {actual}")]
    WinnerCountMismatch { expected: usize, actual: usize },

    #[error("Bracket is already complete")]
    BracketComplete,
}
