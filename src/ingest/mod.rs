//! Match record ingestion
//!
//! This module turns raw match records from the backing document store into
//! typed match results. Source records vary in shape between clubs and
//! seasons, so parsing is tolerant: recognized fields are read under several
//! names, and anything missing or malformed degrades to zero rather than
//! failing the whole computation.

pub mod provider;
pub mod record;

// Re-export commonly used types
pub use provider::{MatchProvider, StaticMatchProvider};
pub use record::{extract_match_scores, parse_match_record};
