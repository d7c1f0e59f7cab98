//! Pavilion - standings engine for cricket club competitions
//!
//! This crate derives ranked team standings (points, net run rate,
//! tie-break order) from completed match records and seeds
//! single-elimination knockout brackets from the resulting order.

pub mod bracket;
pub mod config;
pub mod error;
pub mod ingest;
pub mod standings;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, StandingsError};
pub use types::*;

// Re-export key components
pub use bracket::{generate_knockout_fixtures, KnockoutBracket};
pub use ingest::{MatchProvider, StaticMatchProvider};
pub use standings::{LeagueStandingsCalculator, StandingsCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
