//! End-to-end batch: load rosters, match every discipline, write the report

use std::path::Path;
use crate::config::{InputSettings, Settings};
use crate::core::{discover_disciplines, MatchResult, Matcher};
use crate::error::MatchError;
use crate::models::{Person, PersonSummary, RosterKind, RunSummary};
use crate::services::{assemble_report, save_report, Roster};

/// Rosters loaded for one run
#[derive(Debug, Clone)]
pub enum Rosters {
    Split { mentees: Roster, mentors: Roster },
    Combined(Roster),
}

impl Rosters {
    pub fn load(input: &InputSettings) -> Result<Self, MatchError> {
        match &input.roster {
            Some(path) => Ok(Rosters::Combined(Roster::load(path, RosterKind::Combined)?)),
            None => Ok(Rosters::Split {
                mentees: Roster::load(&input.mentees, RosterKind::Mentees)?,
                mentors: Roster::load(&input.mentors, RosterKind::Mentors)?,
            }),
        }
    }

    pub fn mentors(&self) -> &[Person] {
        match self {
            Rosters::Split { mentors, .. } => &mentors.people,
            Rosters::Combined(roster) => &roster.people,
        }
    }

    pub fn mentees(&self) -> &[Person] {
        match self {
            Rosters::Split { mentees, .. } => &mentees.people,
            Rosters::Combined(roster) => &roster.people,
        }
    }

    pub fn last_mentee_id(&self) -> Option<u32> {
        match self {
            Rosters::Split { mentees, .. } => mentees.last_mentee_id(),
            Rosters::Combined(roster) => roster.last_mentee_id(),
        }
    }
}

/// Discipline labels for this run, configured or discovered
pub fn resolve_disciplines(settings: &Settings, rosters: &Rosters) -> Vec<String> {
    if settings.matching.discover_disciplines {
        let found = discover_disciplines(rosters.mentors().iter().chain(rosters.mentees()));
        tracing::info!("Discovered {} disciplines: {:?}", found.len(), found);
        found
    } else {
        settings
            .matching
            .disciplines
            .iter()
            .filter(|d| !d.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Build the run summary from a finished match
pub fn summarize(matcher: &Matcher, rosters: &Rosters, result: &MatchResult<'_>) -> RunSummary {
    let mentees: Vec<&Person> = rosters.mentees().iter().filter(|p| p.wants_mentoring).collect();
    let mentors = rosters.mentors().iter().filter(|p| p.can_mentor).count();

    let unmatched_mentees = mentees
        .iter()
        .filter(|p| !result.state.is_mentored(p))
        .map(|p| PersonSummary::from(*p))
        .collect();

    RunSummary {
        run_id: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        max_mentees_per_mentor: matcher.max_mentees_per_mentor(),
        discipline_mode: matcher.mode(),
        disciplines: result.disciplines.clone(),
        total_mentees: mentees.len(),
        total_mentors: mentors,
        total_pairings: result.pairings.len(),
        unmatched_mentees,
    }
}

fn summary_error(path: &Path) -> impl FnOnce(std::io::Error) -> MatchError + '_ {
    move |source| MatchError::Summary {
        path: path.to_path_buf(),
        source,
    }
}

/// Create the directory a summary will be written into
fn prepare_summary_dir(path: &Path) -> Result<(), MatchError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(summary_error(path))?;
    }
    Ok(())
}

fn write_summary(path: &Path, json: &str) -> Result<(), MatchError> {
    std::fs::write(path, json).map_err(summary_error(path))?;
    tracing::info!("Wrote run summary to {}", path.display());
    Ok(())
}

/// Write a summary as pretty JSON, creating parent directories as needed
pub fn save_summary<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<(), MatchError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary)?;
    prepare_summary_dir(path)?;
    write_summary(path, &json)
}

/// Run the whole batch described by `settings`
///
/// Nothing is written until every roster has loaded and matching finished.
pub fn run_batch(settings: &Settings) -> Result<RunSummary, MatchError> {
    settings.validate()?;

    let rosters = Rosters::load(&settings.input)?;
    let disciplines = resolve_disciplines(settings, &rosters);
    let matcher = Matcher::new(
        settings.matching.max_mentees_per_mentor,
        settings.matching.discipline_mode,
    );

    tracing::info!(
        "Matching {} mentees against {} mentors across {} disciplines (max {} per mentor, {:?} mode)",
        rosters.mentees().iter().filter(|p| p.wants_mentoring).count(),
        rosters.mentors().iter().filter(|p| p.can_mentor).count(),
        disciplines.len(),
        matcher.max_mentees_per_mentor(),
        matcher.mode()
    );

    let result = matcher.run(&disciplines, rosters.mentors(), rosters.mentees());

    for discipline in &result.disciplines {
        if discipline.skipped {
            tracing::info!(
                "Discipline '{}' skipped ({} mentors, {} mentees)",
                discipline.label,
                discipline.mentors,
                discipline.mentees
            );
        } else {
            tracing::info!(
                "Discipline '{}': {} pairings, {} unmatched mentees, {} idle mentors",
                discipline.label,
                discipline.pairings(),
                discipline.unmatched,
                discipline.idle_mentors
            );
        }
    }

    let rows = assemble_report(&result.pairings, &result.state, rosters.last_mentee_id());
    let summary = summarize(&matcher, &rosters, &result);

    // The summary is serialized and its directory created before the report
    // is touched, so those failures leave no output behind.
    let pending_summary = match &settings.output.summary {
        Some(path) => {
            let json = serde_json::to_string_pretty(&summary)?;
            prepare_summary_dir(path)?;
            Some((path, json))
        }
        None => None,
    };

    save_report(&settings.output.report, &rows)?;

    if let Some((path, json)) = pending_summary {
        if let Err(err) = write_summary(path, &json) {
            tracing::warn!(
                "Removing report {} after summary write failed",
                settings.output.report.display()
            );
            let _ = std::fs::remove_file(&settings.output.report);
            return Err(err);
        }
    }

    tracing::info!(
        "Matched {} of {} mentees",
        summary.total_pairings,
        summary.total_mentees
    );

    Ok(summary)
}
