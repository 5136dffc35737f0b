//! Mentor Match - batch mentor/mentee matching for survey rosters
//!
//! Mentees are assigned to mentors within each discipline by a greedy,
//! multi-pass algorithm: a mentor must be more senior than the mentee, each
//! mentee goes to the open mentor offering the most of what they asked for,
//! and mentor capacity grows by one per pass up to a configured ceiling.

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{interest_overlap, partition_by_role, run_pass, MatchState, Matcher};
pub use error::MatchError;
pub use models::{DisciplineMode, Interest, InterestProfile, Pairing, Person, RunSummary};

