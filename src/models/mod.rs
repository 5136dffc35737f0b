// Model exports
pub mod domain;
pub mod summary;

pub use domain::{DisciplineMode, Interest, InterestProfile, Pairing, Person, PersonKey, RosterKind, UNKNOWN_BAND};
pub use summary::{DisciplineSummary, PersonSummary, RunSummary};
