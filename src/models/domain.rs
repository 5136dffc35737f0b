use serde::{Deserialize, Serialize};

/// Band assigned when the seniority column cannot be parsed
pub const UNKNOWN_BAND: i32 = -1;

/// The areas people can ask for or offer mentoring in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    CareerAdvice,
    SkillsGrowth,
    ExpandNetwork,
    LifeAdvice,
    SocialConnection,
    LearnDiscipline,
    LearnTech,
    NewCareer,
}

impl Interest {
    /// Column order used by every roster and survey format
    pub const ALL: [Interest; 8] = [
        Interest::CareerAdvice,
        Interest::SkillsGrowth,
        Interest::ExpandNetwork,
        Interest::LifeAdvice,
        Interest::SocialConnection,
        Interest::LearnDiscipline,
        Interest::LearnTech,
        Interest::NewCareer,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Interest flags a person asks for or offers, plus a free-text note
///
/// The note is carried through to the survey output but never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestProfile {
    flags: [bool; 8],
    pub other: Option<String>,
}

impl InterestProfile {
    pub fn new(flags: [bool; 8], other: Option<String>) -> Self {
        Self { flags, other }
    }

    /// Build a profile with the given interests set and no note
    pub fn with_interests(interests: &[Interest]) -> Self {
        let mut profile = Self::default();
        for interest in interests {
            profile.set(*interest);
        }
        profile
    }

    #[inline]
    pub fn has(&self, interest: Interest) -> bool {
        self.flags[interest.index()]
    }

    pub fn set(&mut self, interest: Interest) {
        self.flags[interest.index()] = true;
    }

    pub fn flags(&self) -> [bool; 8] {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|f| *f)
    }
}

/// Which input file a person was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterKind {
    Mentees,
    Mentors,
    Combined,
}

/// Stable identity of a loaded person
///
/// Survey ids are not guaranteed unique across the two rosters, so state is
/// keyed by roster and data row instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonKey {
    pub roster: RosterKind,
    pub row: usize,
}

/// One survey respondent
#[derive(Debug, Clone)]
pub struct Person {
    pub key: PersonKey,
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Lower-cased, trimmed discipline label
    pub role: String,
    pub band: i32,
    pub wants_mentoring: bool,
    pub wants: InterestProfile,
    pub can_mentor: bool,
    pub offers: InterestProfile,
}

impl Person {
    /// Whether two records describe the same human
    ///
    /// Emails are compared trimmed and ignoring ASCII case. Two blank emails
    /// are equal, so records without an address never pair with each other.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.key == other.key || self.email.trim().eq_ignore_ascii_case(other.email.trim())
    }
}

/// A mentee assigned to a mentor during one pass
#[derive(Debug, Clone, Copy)]
pub struct Pairing<'a> {
    pub mentee: &'a Person,
    pub mentor: &'a Person,
    /// Overlap at the moment the pairing was made
    pub score: u32,
    /// Capacity ceiling of the pass that produced the pairing
    pub pass: u32,
}

/// How a discipline label selects people from a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineMode {
    /// Role must equal the label
    #[default]
    Exact,
    /// Role must contain the label; "dev" also selects "devops"
    Substring,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(roster: RosterKind, row: usize, email: &str) -> Person {
        Person {
            key: PersonKey { roster, row },
            id: row as u32,
            name: "Test".to_string(),
            email: email.to_string(),
            role: "dev".to_string(),
            band: 1,
            wants_mentoring: true,
            wants: InterestProfile::default(),
            can_mentor: true,
            offers: InterestProfile::default(),
        }
    }

    #[test]
    fn test_with_interests_sets_only_listed_flags() {
        let profile = InterestProfile::with_interests(&[Interest::LifeAdvice, Interest::NewCareer]);

        assert!(profile.has(Interest::LifeAdvice));
        assert!(profile.has(Interest::NewCareer));
        assert!(!profile.has(Interest::CareerAdvice));
        assert_eq!(profile.flags().iter().filter(|f| **f).count(), 2);
    }

    #[test]
    fn test_same_person_by_email_ignores_case() {
        let a = person(RosterKind::Mentees, 1, "Ana@Example.com");
        let b = person(RosterKind::Mentors, 1, " ana@example.com ");

        assert!(a.is_same_person(&b));
    }

    #[test]
    fn test_blank_emails_are_the_same_identity() {
        let a = person(RosterKind::Mentees, 1, "");
        let b = person(RosterKind::Mentors, 1, "  ");

        assert!(a.is_same_person(&b));
        assert!(b.is_same_person(&a));
    }

    #[test]
    fn test_blank_email_differs_from_real_address() {
        let a = person(RosterKind::Mentees, 1, "");
        let b = person(RosterKind::Mentors, 1, "kim@example.com");

        assert!(!a.is_same_person(&b));
        assert!(a.is_same_person(&a.clone()));
    }
}
