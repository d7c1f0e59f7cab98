//! Configuration for the standings engine
//!
//! This module defines the explicit, injected rule sets for scoring and
//! bracket construction, with environment overrides and validation. Nothing
//! here is ambient; callers pass rules into the calculator and bracket
//! builders directly.

pub mod bracket;
pub mod scoring;

// Re-export commonly used types
pub use bracket::BracketRules;
pub use scoring::ScoringRules;
