use serde::{Deserialize, Serialize};
use crate::models::domain::{DisciplineMode, Person};

/// Machine-readable record of a matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(rename = "runId")]
    pub run_id: uuid::Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "maxMenteesPerMentor")]
    pub max_mentees_per_mentor: u32,
    #[serde(rename = "disciplineMode")]
    pub discipline_mode: DisciplineMode,
    pub disciplines: Vec<DisciplineSummary>,
    #[serde(rename = "totalMentees")]
    pub total_mentees: usize,
    #[serde(rename = "totalMentors")]
    pub total_mentors: usize,
    #[serde(rename = "totalPairings")]
    pub total_pairings: usize,
    #[serde(rename = "unmatchedMentees")]
    pub unmatched_mentees: Vec<PersonSummary>,
}

/// Outcome for one discipline bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineSummary {
    pub label: String,
    pub mentors: usize,
    pub mentees: usize,
    /// Pairings made by each pass, index 0 being capacity 1
    #[serde(rename = "pairingsPerPass")]
    pub pairings_per_pass: Vec<usize>,
    pub unmatched: usize,
    #[serde(rename = "idleMentors")]
    pub idle_mentors: usize,
    pub skipped: bool,
}

impl DisciplineSummary {
    pub fn pairings(&self) -> usize {
        self.pairings_per_pass.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            email: person.email.clone(),
            role: person.role.clone(),
        }
    }
}
