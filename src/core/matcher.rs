use crate::models::{DisciplineMode, DisciplineSummary, Pairing, Person};
use crate::core::{
    filters::{is_eligible_mentor, partition_by_role},
    scoring::interest_overlap,
    state::MatchState,
};

/// Pairings produced by a single pass and the state after it
#[derive(Debug)]
pub struct PassOutcome<'a> {
    pub pairings: Vec<Pairing<'a>>,
    pub state: MatchState,
}

/// Result of matching every discipline
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub pairings: Vec<Pairing<'a>>,
    pub state: MatchState,
    pub disciplines: Vec<DisciplineSummary>,
}

/// Pick the best mentor for a mentee from the open mentors
///
/// Highest overlap wins, ties keep the first candidate seen, and a zero
/// overlap is never a match. Capacity is read from the live state so a mentor
/// filled earlier in the same pass is skipped.
pub fn find_mentor<'a>(
    mentee: &Person,
    mentors: &[&'a Person],
    capacity: u32,
    state: &MatchState,
) -> Option<(&'a Person, u32)> {
    let mut best: Option<&'a Person> = None;
    let mut best_overlap = 0;

    for mentor in mentors.iter().copied() {
        if !is_eligible_mentor(mentee, mentor, state.mentoring_count(mentor), capacity) {
            continue;
        }

        let overlap = interest_overlap(&mentee.wants, &mentor.offers);
        if overlap > best_overlap {
            best = Some(mentor);
            best_overlap = overlap;
        }
    }

    best.map(|mentor| (mentor, best_overlap))
}

/// Run one greedy assignment pass at the given capacity ceiling
///
/// Mentors already at the ceiling and mentees already mentored are dropped
/// up front, then mentees are served in pool order.
pub fn run_pass<'a>(
    mentors: &[&'a Person],
    mentees: &[&'a Person],
    capacity: u32,
    state: MatchState,
) -> PassOutcome<'a> {
    let mut state = state;

    let open_mentors: Vec<&'a Person> = mentors
        .iter()
        .copied()
        .filter(|mentor| state.mentoring_count(mentor) < capacity)
        .collect();

    let waiting: Vec<&'a Person> = mentees
        .iter()
        .copied()
        .filter(|mentee| !state.is_mentored(mentee))
        .collect();

    let mut pairings = Vec::new();

    for mentee in waiting {
        if let Some((mentor, score)) = find_mentor(mentee, &open_mentors, capacity, &state) {
            state.record(mentee, mentor);
            pairings.push(Pairing {
                mentee,
                mentor,
                score,
                pass: capacity,
            });
        }
    }

    PassOutcome { pairings, state }
}

/// Runs the per-discipline, per-capacity pass loop
///
/// Capacity grows one mentee at a time so mentees spread across distinct
/// mentors before any mentor takes a second one.
#[derive(Debug, Clone)]
pub struct Matcher {
    max_mentees_per_mentor: u32,
    mode: DisciplineMode,
}

impl Matcher {
    pub fn new(max_mentees_per_mentor: u32, mode: DisciplineMode) -> Self {
        Self {
            max_mentees_per_mentor,
            mode,
        }
    }

    pub fn max_mentees_per_mentor(&self) -> u32 {
        self.max_mentees_per_mentor
    }

    pub fn mode(&self) -> DisciplineMode {
        self.mode
    }

    /// Match a single discipline, threading `state` through every pass
    ///
    /// `mentors` and `mentees` may be the same slice when a combined roster
    /// is used; pools are built from the intent flags.
    pub fn match_discipline<'a>(
        &self,
        label: &str,
        mentors: &'a [Person],
        mentees: &'a [Person],
        state: MatchState,
    ) -> (Vec<Pairing<'a>>, MatchState, DisciplineSummary) {
        let mentor_pool: Vec<&'a Person> = partition_by_role(label, mentors, self.mode)
            .into_iter()
            .filter(|person| person.can_mentor)
            .collect();
        let mentee_pool: Vec<&'a Person> = partition_by_role(label, mentees, self.mode)
            .into_iter()
            .filter(|person| person.wants_mentoring)
            .collect();

        let mut summary = DisciplineSummary {
            label: label.to_string(),
            mentors: mentor_pool.len(),
            mentees: mentee_pool.len(),
            ..Default::default()
        };

        if mentor_pool.is_empty() || mentee_pool.is_empty() {
            tracing::debug!(
                "Skipping discipline '{}' ({} mentors, {} mentees)",
                label,
                mentor_pool.len(),
                mentee_pool.len()
            );
            summary.skipped = true;
            summary.unmatched = mentee_pool.iter().filter(|m| !state.is_mentored(m)).count();
            summary.idle_mentors = mentor_pool.iter().filter(|m| state.mentoring_count(m) == 0).count();
            return (Vec::new(), state, summary);
        }

        let mut pairings = Vec::new();
        let mut state = state;

        for capacity in 1..=self.max_mentees_per_mentor {
            let outcome = run_pass(&mentor_pool, &mentee_pool, capacity, state);
            tracing::debug!(
                "Discipline '{}' pass {}: {} pairings",
                label,
                capacity,
                outcome.pairings.len()
            );
            summary.pairings_per_pass.push(outcome.pairings.len());
            pairings.extend(outcome.pairings);
            state = outcome.state;
        }

        summary.unmatched = mentee_pool.iter().filter(|m| !state.is_mentored(m)).count();
        summary.idle_mentors = mentor_pool.iter().filter(|m| state.mentoring_count(m) == 0).count();

        (pairings, state, summary)
    }

    /// Match every discipline in order, accumulating pairings
    pub fn run<'a, S: AsRef<str>>(
        &self,
        disciplines: &[S],
        mentors: &'a [Person],
        mentees: &'a [Person],
    ) -> MatchResult<'a> {
        let mut pairings = Vec::new();
        let mut summaries = Vec::with_capacity(disciplines.len());
        let mut state = MatchState::new();

        for label in disciplines {
            let (found, next, summary) = self.match_discipline(label.as_ref(), mentors, mentees, state);
            pairings.extend(found);
            summaries.push(summary);
            state = next;
        }

        MatchResult {
            pairings,
            state,
            disciplines: summaries,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(1, DisciplineMode::Exact)
    }
}
