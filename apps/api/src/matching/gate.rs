use super::normalizer::{NormalizedJob, NormalizedProfile};

pub const MISSING_MUST_HAVE_REASON: &str = "Missing must-have skills";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Pass,
    /// Missing skills in posting order, display spelling.
    Fail { missing: Vec<String> },
}

/// Hard rule: every must-have skill has to be on the resume.
/// No must-haves means the gate always passes.
pub fn check_must_haves(profile: &NormalizedProfile, job: &NormalizedJob) -> GateOutcome {
    let missing: Vec<String> = job
        .must_have_skills
        .iter()
        .filter(|skill| !profile.skills.contains(&skill.key))
        .map(|skill| skill.display.clone())
        .collect();

    if missing.is_empty() {
        GateOutcome::Pass
    } else {
        GateOutcome::Fail { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::normalize_skills;

    fn profile_with(skills: &[&str]) -> NormalizedProfile {
        NormalizedProfile {
            skills: skills.iter().map(|s| s.to_lowercase()).collect(),
            ..NormalizedProfile::default()
        }
    }

    fn job_requiring(must_haves: &[&str]) -> NormalizedJob {
        let raw: Vec<String> = must_haves.iter().map(|s| s.to_string()).collect();
        NormalizedJob {
            must_have_skills: normalize_skills(&raw),
            ..NormalizedJob::default()
        }
    }

    #[test]
    fn test_empty_must_haves_pass() {
        let outcome = check_must_haves(&profile_with(&[]), &job_requiring(&[]));
        assert_eq!(outcome, GateOutcome::Pass);
    }

    #[test]
    fn test_all_must_haves_present_pass() {
        let outcome = check_must_haves(&profile_with(&["go", "sql"]), &job_requiring(&["Go", "SQL"]));
        assert_eq!(outcome, GateOutcome::Pass);
    }

    #[test]
    fn test_single_missing_skill_fails() {
        let outcome = check_must_haves(
            &profile_with(&["go"]),
            &job_requiring(&["Go", "Kubernetes", "SQL"]),
        );
        assert_eq!(
            outcome,
            GateOutcome::Fail {
                missing: vec!["Kubernetes".to_string(), "SQL".to_string()]
            }
        );
    }
}
