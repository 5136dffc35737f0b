//! Converts free-text survey answers into interest flag columns
//!
//! The survey export lists picked options separated by `;` in no fixed order,
//! e.g. `Career advice;Skills, growth, problem solving;Social connection;`.
//! Each answer line becomes one row of eight `0/1` columns plus a quoted note
//! that can be pasted back next to the original sheet.

use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::{Interest, InterestProfile};

/// Errors that can occur while normalizing a survey export
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Failed to read survey {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write survey output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Answer phrases and the interest they select, checked in order
const ANSWER_PHRASES: [(&str, Interest); 9] = [
    ("Career advice", Interest::CareerAdvice),
    ("Skills, growth, problem solving", Interest::SkillsGrowth),
    ("Expanding my network", Interest::ExpandNetwork),
    ("Life advice", Interest::LifeAdvice),
    ("Social connection", Interest::SocialConnection),
    ("Learning a new discipline", Interest::LearnDiscipline),
    ("Learning a new technology", Interest::LearnTech),
    ("Exploring a new career journey", Interest::NewCareer),
    ("Learning about other career journeys", Interest::NewCareer),
];

/// Parse one line of survey answers
///
/// Unrecognized non-empty answers are kept as the free-text note, joined
/// with `; ` when there are several.
pub fn parse_survey_answers(line: &str) -> InterestProfile {
    let mut profile = InterestProfile::default();
    let mut notes: Vec<&str> = Vec::new();

    for item in line.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        match ANSWER_PHRASES.iter().find(|(phrase, _)| item.contains(phrase)) {
            Some((_, interest)) => profile.set(*interest),
            None => notes.push(item),
        }
    }

    if !notes.is_empty() {
        profile.other = Some(notes.join("; "));
    }
    profile
}

/// Format a profile as flag columns followed by the quoted note
pub fn profile_to_csv(profile: &InterestProfile) -> String {
    let flags: Vec<&str> = profile
        .flags()
        .iter()
        .map(|f| if *f { "1" } else { "0" })
        .collect();
    let note = profile.other.as_deref().unwrap_or("").replace('"', "\"\"");

    format!("{},\"{}\"", flags.join(","), note)
}

/// Normalize every line of a survey export
///
/// Blank lines become all-zero rows so output rows line up with input rows.
pub fn normalize_survey(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| profile_to_csv(&parse_survey_answers(line)))
        .collect()
}

/// Read a survey export and write the normalized rows
pub fn normalize_survey_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<usize, SurveyError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = std::fs::read_to_string(input).map_err(|source| SurveyError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let rows = normalize_survey(&text);
    let mut body = rows.join("\n");
    body.push('\n');

    std::fs::write(output, body).map_err(|source| SurveyError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!("Normalized {} survey rows into {}", rows.len(), output.display());
    Ok(rows.len())
}
