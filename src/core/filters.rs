use crate::models::{DisciplineMode, Person};

/// Normalize a role or discipline label for comparison
#[inline]
pub fn normalize_role(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Check whether a person belongs to a discipline bucket
#[inline]
pub fn matches_discipline(person: &Person, label: &str, mode: DisciplineMode) -> bool {
    let label = normalize_role(label);
    if label.is_empty() {
        return false;
    }

    let role = normalize_role(&person.role);
    match mode {
        DisciplineMode::Exact => role == label,
        DisciplineMode::Substring => role.contains(&label),
    }
}

/// Return the people in a discipline, in roster order
///
/// No other filtering is done; intent flags and matching state are applied
/// by the caller.
pub fn partition_by_role<'a>(
    label: &str,
    people: &'a [Person],
    mode: DisciplineMode,
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| matches_discipline(person, label, mode))
        .collect()
}

/// Collect the distinct non-blank roles across rosters, in first-seen order
pub fn discover_disciplines<'a, I>(people: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut roles: Vec<String> = Vec::new();
    for person in people {
        let role = normalize_role(&person.role);
        if !role.is_empty() && !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}

/// Check if a mentor may take this mentee under the current capacity
///
/// Seniority must be strictly higher, the mentor must still be under the
/// pass ceiling, and nobody mentors themselves.
#[inline]
pub fn is_eligible_mentor(
    mentee: &Person,
    mentor: &Person,
    mentor_load: u32,
    capacity: u32,
) -> bool {
    mentor.band > mentee.band
        && mentor_load < capacity
        && !mentee.is_same_person(mentor)
}
