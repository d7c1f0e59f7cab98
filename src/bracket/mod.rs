//! Knockout bracket construction
//!
//! This module seeds a single-elimination bracket from ranked standings and
//! advances winners round by round until a champion remains.

pub mod knockout;
pub mod seeding;

// Re-export commonly used types
pub use knockout::{
    generate_knockout_fixtures, KnockoutBracket, KnockoutFixture, KnockoutRound,
};
pub use seeding::{seed_from_standings, Seed};
