use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::{interest_overlap, MatchState};
use crate::models::Pairing;
use crate::services::csv::escape_csv;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

pub const REPORT_HEADER: [&str; 8] = [
    "Mentee Name",
    "Mentee Email",
    "Mentee Band",
    "Mentor Name",
    "Mentor Email",
    "Mentor Band",
    "Mentees Mentored",
    "Areas of Interest Overlap",
];

/// A matched mentee as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub mentee_id: u32,
    pub mentee_name: String,
    pub mentee_email: String,
    pub mentee_band: i32,
    pub mentor_name: String,
    pub mentor_email: String,
    pub mentor_band: i32,
    /// Mentor's mentee count at the end of the run
    pub mentees_mentored: u32,
    pub overlap: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    /// Keeps output rows aligned with survey ids that have no match
    Placeholder,
    Match(MatchRow),
}

impl ReportRow {
    fn to_csv(&self) -> String {
        match self {
            ReportRow::Placeholder => vec![""; REPORT_HEADER.len()].join(","),
            ReportRow::Match(row) => format!(
                "{},{},{},{},{},{},{},{}",
                escape_csv(&row.mentee_name),
                escape_csv(&row.mentee_email),
                row.mentee_band,
                escape_csv(&row.mentor_name),
                escape_csv(&row.mentor_email),
                row.mentor_band,
                row.mentees_mentored,
                row.overlap,
            ),
        }
    }
}

/// Order pairings by mentee id and pad id gaps with placeholder rows
///
/// Ids are expected to start at 1 so row N of the report lines up with
/// survey id N. Padding continues through `last_mentee_id` so unmatched
/// mentees at the end of the sheet still get a row. Overlap is recomputed
/// from the pair's profiles and the mentor count is read from the final
/// state.
pub fn assemble_report(
    pairings: &[Pairing<'_>],
    state: &MatchState,
    last_mentee_id: Option<u32>,
) -> Vec<ReportRow> {
    let mut ordered: Vec<&Pairing<'_>> = pairings.iter().collect();
    ordered.sort_by_key(|p| p.mentee.id);

    let mut rows = Vec::with_capacity(ordered.len());
    let mut next_id: u32 = 1;

    for pairing in ordered {
        let mentee = pairing.mentee;
        let mentor = pairing.mentor;

        while next_id < mentee.id {
            rows.push(ReportRow::Placeholder);
            next_id += 1;
        }

        rows.push(ReportRow::Match(MatchRow {
            mentee_id: mentee.id,
            mentee_name: mentee.name.clone(),
            mentee_email: mentee.email.clone(),
            mentee_band: mentee.band,
            mentor_name: mentor.name.clone(),
            mentor_email: mentor.email.clone(),
            mentor_band: mentor.band,
            mentees_mentored: state.mentoring_count(mentor),
            overlap: interest_overlap(&mentee.wants, &mentor.offers),
        }));
        next_id = next_id.max(mentee.id.saturating_add(1));
    }

    if let Some(last) = last_mentee_id {
        while next_id <= last {
            rows.push(ReportRow::Placeholder);
            next_id += 1;
        }
    }

    rows
}

/// Serialize report rows with a header line
pub fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), ReportError> {
    let mut out = BufWriter::new(writer);
    writeln!(out, "{}", REPORT_HEADER.join(","))?;
    for row in rows {
        writeln!(out, "{}", row.to_csv())?;
    }
    out.flush()?;
    Ok(())
}

/// Write the report to a file, creating parent directories as needed
pub fn save_report<P: AsRef<Path>>(path: P, rows: &[ReportRow]) -> Result<(), ReportError> {
    let path = path.as_ref();
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    write_report(rows, file)?;

    tracing::info!("Wrote {} report rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interest, InterestProfile, Person, PersonKey, RosterKind};

    fn create_test_person(roster: RosterKind, id: u32, band: i32, interests: &[Interest]) -> Person {
        let profile = InterestProfile::with_interests(interests);
        Person {
            key: PersonKey { roster, row: id as usize },
            id,
            name: format!("P{}", id),
            email: format!("p{}@{:?}.example", id, roster),
            role: "dev".to_string(),
            band,
            wants_mentoring: roster == RosterKind::Mentees,
            wants: profile.clone(),
            can_mentor: roster == RosterKind::Mentors,
            offers: profile,
        }
    }

    #[test]
    fn test_rows_sorted_and_gaps_filled() {
        let mentee_2 = create_test_person(RosterKind::Mentees, 2, 1, &[Interest::CareerAdvice]);
        let mentee_4 = create_test_person(RosterKind::Mentees, 4, 1, &[Interest::CareerAdvice]);
        let mentor = create_test_person(RosterKind::Mentors, 1, 3, &[Interest::CareerAdvice]);

        let mut state = MatchState::new();
        state.record(&mentee_4, &mentor);
        state.record(&mentee_2, &mentor);

        let pairings = vec![
            Pairing { mentee: &mentee_4, mentor: &mentor, score: 1, pass: 1 },
            Pairing { mentee: &mentee_2, mentor: &mentor, score: 1, pass: 2 },
        ];

        let rows = assemble_report(&pairings, &state, Some(5));

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ReportRow::Placeholder);
        assert!(matches!(&rows[1], ReportRow::Match(r) if r.mentee_id == 2 && r.mentees_mentored == 2));
        assert_eq!(rows[2], ReportRow::Placeholder);
        assert!(matches!(&rows[3], ReportRow::Match(r) if r.mentee_id == 4));
        assert_eq!(rows[4], ReportRow::Placeholder);
    }

    #[test]
    fn test_overlap_is_recomputed() {
        let mentee = create_test_person(RosterKind::Mentees, 1, 1, &[Interest::CareerAdvice, Interest::LifeAdvice]);
        let mentor = create_test_person(RosterKind::Mentors, 1, 3, &[Interest::CareerAdvice, Interest::LifeAdvice]);
        let mut state = MatchState::new();
        state.record(&mentee, &mentor);

        // Stale score on the pairing is ignored
        let pairings = vec![Pairing { mentee: &mentee, mentor: &mentor, score: 0, pass: 1 }];
        let rows = assemble_report(&pairings, &state, None);

        assert!(matches!(&rows[0], ReportRow::Match(r) if r.overlap == 2));
    }

    #[test]
    fn test_zero_id_does_not_stall() {
        let mentee = create_test_person(RosterKind::Mentees, 0, 1, &[Interest::CareerAdvice]);
        let mentor = create_test_person(RosterKind::Mentors, 1, 3, &[Interest::CareerAdvice]);
        let state = MatchState::new();

        let pairings = vec![Pairing { mentee: &mentee, mentor: &mentor, score: 1, pass: 1 }];
        let rows = assemble_report(&pairings, &state, Some(1));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ReportRow::Placeholder);
    }

    #[test]
    fn test_write_report_format() {
        let row = ReportRow::Match(MatchRow {
            mentee_id: 1,
            mentee_name: "Lee, Sam".to_string(),
            mentee_email: "sam@example.com".to_string(),
            mentee_band: -1,
            mentor_name: "Kim".to_string(),
            mentor_email: "kim@example.com".to_string(),
            mentor_band: 4,
            mentees_mentored: 1,
            overlap: 3,
        });

        let mut buf = Vec::new();
        write_report(&[ReportRow::Placeholder, row], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], REPORT_HEADER.join(","));
        assert_eq!(lines[1], ",,,,,,,");
        assert_eq!(lines[2], "\"Lee, Sam\",sam@example.com,-1,Kim,kim@example.com,4,1,3");
    }
}
