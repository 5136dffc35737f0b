use std::collections::{HashMap, HashSet};
use crate::models::{Person, PersonKey};

/// Matching state threaded from pass to pass
///
/// Person records stay read-only; who is mentored and how many mentees each
/// mentor holds lives here. Counts only grow and the mentored set only gains
/// members, because `record` is the sole mutator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    mentoring: HashMap<PersonKey, u32>,
    mentored: HashSet<PersonKey>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mentees currently assigned to this person
    #[inline]
    pub fn mentoring_count(&self, person: &Person) -> u32 {
        self.mentoring.get(&person.key).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_mentored(&self, person: &Person) -> bool {
        self.mentored.contains(&person.key)
    }

    /// Total pairings recorded so far
    pub fn pairings(&self) -> usize {
        self.mentored.len()
    }

    /// Record that `mentor` took `mentee`, returning the mentor's new count
    pub(crate) fn record(&mut self, mentee: &Person, mentor: &Person) -> u32 {
        self.mentored.insert(mentee.key);
        let count = self.mentoring.entry(mentor.key).or_insert(0);
        *count += 1;
        *count
    }
}
