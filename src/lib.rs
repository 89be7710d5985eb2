//! Cham Cham Cham - face orientation and leaderboard engine
//!
//! This library provides the two pieces of game logic behind the face-tracking
//! "cham cham cham" game: classifying which way a detected face is looking,
//! and ranking scored players with joint-rank semantics.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{rank, AlignmentTracker, PoseClassifier, RankEngine, RankError};
pub use models::{Classification, FormattedRankEntry, LandmarkSet, Orientation, Point, RankEntry, Rejection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let ranked = rank(vec![RankEntry::new("a", 1.0)]).unwrap();
        assert_eq!(ranked[0].joint_group, 0);
    }
}
