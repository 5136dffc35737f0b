use crate::models::{Interest, InterestProfile};

/// Count the interests expressed in `wanted` that `offered` also covers
///
/// Scoring formula, for each of the eight interests:
/// score += 1 if wanted[i] && wanted[i] == offered[i]
///
/// Only the first argument's true flags are inspected, so shared absence never
/// scores and argument order matters. The engine always calls this with the
/// mentee's wants first and the mentor's offers second. The free-text note is
/// ignored.
#[inline]
pub fn interest_overlap(wanted: &InterestProfile, offered: &InterestProfile) -> u32 {
    Interest::ALL
        .iter()
        .filter(|interest| {
            let want = wanted.has(**interest);
            want && want == offered.has(**interest)
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interest::*;

    #[test]
    fn test_shared_absence_does_not_score() {
        let a = InterestProfile::default();
        let b = InterestProfile::default();

        assert_eq!(interest_overlap(&a, &b), 0);
    }

    #[test]
    fn test_counts_shared_interests() {
        let a = InterestProfile::with_interests(&[CareerAdvice, SkillsGrowth, LifeAdvice]);
        let b = InterestProfile::with_interests(&[CareerAdvice, LifeAdvice, LearnTech]);

        assert_eq!(interest_overlap(&a, &b), 2);
    }

    #[test]
    fn test_disjoint_profiles_score_zero_both_ways() {
        let a = InterestProfile::with_interests(&[CareerAdvice]);
        let b = InterestProfile::with_interests(&[SkillsGrowth]);

        assert_eq!(interest_overlap(&a, &b), 0);
        assert_eq!(interest_overlap(&b, &a), 0);
    }

    #[test]
    fn test_subset_profiles_in_both_orders() {
        let a = InterestProfile::with_interests(&[CareerAdvice]);
        let b = InterestProfile::with_interests(&[CareerAdvice, SkillsGrowth]);

        assert_eq!(interest_overlap(&a, &b), 1);
        assert_eq!(interest_overlap(&b, &a), 1);
    }

    #[test]
    fn test_full_profile_against_single_interest() {
        let all = InterestProfile::new([true; 8], None);
        let one = InterestProfile::with_interests(&[CareerAdvice]);

        assert_eq!(interest_overlap(&all, &one), 1);
        assert_eq!(interest_overlap(&one, &all), 1);
        assert_eq!(interest_overlap(&all, &all), 8);
    }

    #[test]
    fn test_note_is_not_scored() {
        let a = InterestProfile::new([false; 8], Some("mentoring on public speaking".to_string()));
        let b = InterestProfile::new([false; 8], Some("mentoring on public speaking".to_string()));

        assert_eq!(interest_overlap(&a, &b), 0);
    }
}
