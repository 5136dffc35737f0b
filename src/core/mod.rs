// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod state;

pub use filters::{discover_disciplines, is_eligible_mentor, matches_discipline, normalize_role, partition_by_role};
pub use matcher::{find_mentor, run_pass, MatchResult, Matcher, PassOutcome};
pub use scoring::interest_overlap;
pub use state::MatchState;
