//! Utility functions for the standings engine

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Legal deliveries in one over
pub const BALLS_PER_OVER: u32 = 6;

/// Generate a new unique fixture ID
pub fn generate_fixture_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Convert a ball count to overs
pub fn balls_to_overs(balls: u32) -> f64 {
    balls as f64 / BALLS_PER_OVER as f64
}

/// Convert an over count to balls
pub fn overs_to_balls(overs: f64) -> u32 {
    (overs * BALLS_PER_OVER as f64).round() as u32
}

/// Round a value to three decimal places, half away from zero
pub fn round_to_third(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
