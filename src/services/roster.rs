use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::normalize_role;
use crate::models::{Interest, InterestProfile, Person, PersonKey, RosterKind, UNKNOWN_BAND};
use crate::services::csv::split_csv_line;

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Split roster columns: id, role, band, email, name, eight flags, note
const SPLIT_FLAGS_START: usize = 5;
const SPLIT_NOTE: usize = 13;

// Combined sheet columns: id, role, band, email, name, wants, can,
// eight want flags, one unused column, eight offer flags
const COMBINED_WANTS: usize = 5;
const COMBINED_CAN: usize = 6;
const COMBINED_WANT_FLAGS_START: usize = 7;
const COMBINED_OFFER_FLAGS_START: usize = 16;

/// People read from one input file
#[derive(Debug, Clone)]
pub struct Roster {
    pub kind: RosterKind,
    pub people: Vec<Person>,
    /// Blank rows skipped for matching
    pub blank_rows: usize,
}

impl Roster {
    /// Parse roster text
    ///
    /// Split rosters start with a header line which is skipped; the combined
    /// survey sheet has none. Malformed values are defaulted rather than
    /// rejected.
    pub fn parse(text: &str, kind: RosterKind) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let skip = match kind {
            RosterKind::Mentees | RosterKind::Mentors => 1,
            RosterKind::Combined => 0,
        };

        let mut people = Vec::new();
        let mut blank_rows = 0;

        for (row, line) in text.lines().skip(skip).enumerate() {
            let fields = split_csv_line(line);
            if fields.iter().all(|f| f.trim().is_empty()) {
                blank_rows += 1;
                continue;
            }

            let key = PersonKey { roster: kind, row };
            let person = match kind {
                RosterKind::Combined => parse_combined_row(&fields, key),
                RosterKind::Mentees | RosterKind::Mentors => parse_split_row(&fields, key),
            };
            people.push(person);
        }

        tracing::debug!(
            "Parsed {:?} roster: {} people, {} blank rows",
            kind,
            people.len(),
            blank_rows
        );

        Self {
            kind,
            people,
            blank_rows,
        }
    }

    /// Read and parse a roster file
    pub fn load<P: AsRef<Path>>(path: P, kind: RosterKind) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Loading {:?} roster from {}", kind, path.display());
        Ok(Self::parse(&text, kind))
    }

    /// Highest id among people asking for a mentor
    pub fn last_mentee_id(&self) -> Option<u32> {
        self.people
            .iter()
            .filter(|p| p.wants_mentoring)
            .map(|p| p.id)
            .max()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Parse one row of a mentee or mentor roster
pub fn parse_split_row(fields: &[String], key: PersonKey) -> Person {
    let profile = parse_profile(fields, SPLIT_FLAGS_START, Some(SPLIT_NOTE));
    let is_mentee = key.roster == RosterKind::Mentees;

    let mut person = parse_identity(fields, key);
    person.wants_mentoring = is_mentee;
    person.can_mentor = !is_mentee;
    if is_mentee {
        person.wants = profile;
    } else {
        person.offers = profile;
    }
    person
}

/// Parse one row of the combined survey sheet
pub fn parse_combined_row(fields: &[String], key: PersonKey) -> Person {
    let mut person = parse_identity(fields, key);
    person.wants_mentoring = parse_yes(field(fields, COMBINED_WANTS));
    person.can_mentor = parse_yes(field(fields, COMBINED_CAN));
    person.wants = parse_profile(fields, COMBINED_WANT_FLAGS_START, None);
    person.offers = parse_profile(fields, COMBINED_OFFER_FLAGS_START, None);
    person
}

fn parse_identity(fields: &[String], key: PersonKey) -> Person {
    let raw_id = field(fields, 0);
    let id = raw_id.parse::<u32>().unwrap_or_else(|_| {
        tracing::warn!("Row {} of {:?} roster has non-numeric id '{}', using 0", key.row, key.roster, raw_id);
        0
    });

    let band = field(fields, 2).parse::<i32>().unwrap_or(UNKNOWN_BAND);

    Person {
        key,
        id,
        name: field(fields, 4).to_string(),
        email: field(fields, 3).to_string(),
        role: normalize_role(field(fields, 1)),
        band,
        wants_mentoring: false,
        wants: InterestProfile::default(),
        can_mentor: false,
        offers: InterestProfile::default(),
    }
}

fn parse_profile(fields: &[String], start: usize, note: Option<usize>) -> InterestProfile {
    let mut flags = [false; 8];
    for (offset, flag) in flags.iter_mut().enumerate() {
        *flag = field(fields, start + offset) == "1";
    }
    debug_assert_eq!(flags.len(), Interest::ALL.len());

    let other = note
        .map(|i| field(fields, i))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    InterestProfile::new(flags, other)
}

#[inline]
fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(|f| f.trim()).unwrap_or("")
}

#[inline]
fn parse_yes(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes")
}
