use std::collections::HashSet;

use crate::models::profile::{CandidateProfile, JobPosting, SeniorityLevel};

/// Sentinel location that matches any other location.
pub const REMOTE: &str = "remote";

/// A skill in canonical form, with the spelling it was first seen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub key: String,
    pub display: String,
}

/// A trimmed location. `key` is case-folded for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub key: String,
    pub display: String,
}

impl Location {
    pub fn is_remote(&self) -> bool {
        self.key == REMOTE
    }
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedProfile {
    pub skills: HashSet<String>,
    pub seniority: SeniorityLevel,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedJob {
    pub id: String,
    /// Deduplicated, in posting order.
    pub skills: Vec<Skill>,
    pub must_have_skills: Vec<Skill>,
    pub seniority: SeniorityLevel,
    pub location: Option<Location>,
}

/// Canonical comparison key for a skill. Blank input yields `None`.
pub fn skill_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes a skill list, keeping first occurrence order.
pub fn normalize_skills(raw: &[String]) -> Vec<Skill> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter_map(|s| {
            let key = skill_key(s)?;
            seen.insert(key.clone()).then(|| Skill {
                key,
                display: s.trim().to_string(),
            })
        })
        .collect()
}

pub fn normalize_location(raw: Option<&str>) -> Option<Location> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(Location {
        key: trimmed.to_lowercase(),
        display: trimmed.to_string(),
    })
}

pub fn normalize_profile(profile: &CandidateProfile) -> NormalizedProfile {
    NormalizedProfile {
        skills: profile
            .resume_skills
            .iter()
            .filter_map(|s| skill_key(s))
            .collect(),
        seniority: profile.seniority_level,
        location: normalize_location(profile.location.as_deref()),
    }
}

pub fn normalize_job(job: &JobPosting) -> NormalizedJob {
    NormalizedJob {
        id: job.id.clone(),
        skills: normalize_skills(&job.skills),
        must_have_skills: normalize_skills(&job.must_have_skills),
        seniority: job.seniority_level,
        location: normalize_location(job.location.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_are_trimmed_folded_and_deduped() {
        let skills = normalize_skills(&strings(&[" TypeScript ", "typescript", "React", "  "]));
        let keys: Vec<_> = skills.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["typescript", "react"]);
        assert_eq!(skills[0].display, "TypeScript");
    }

    #[test]
    fn test_profile_skill_set_is_case_folded() {
        let profile = CandidateProfile {
            resume_skills: strings(&["Rust", "RUST", " go "]),
            ..CandidateProfile::default()
        };
        let normalized = normalize_profile(&profile);
        assert_eq!(normalized.skills.len(), 2);
        assert!(normalized.skills.contains("rust"));
        assert!(normalized.skills.contains("go"));
    }

    #[test]
    fn test_blank_location_is_absent() {
        assert!(normalize_location(Some("   ")).is_none());
        assert!(normalize_location(None).is_none());
    }

    #[test]
    fn test_remote_location_detected_case_insensitively() {
        let loc = normalize_location(Some(" REMOTE ")).unwrap();
        assert!(loc.is_remote());
        assert_eq!(loc.display, "REMOTE");
    }

    #[test]
    fn test_job_preserves_posting_order() {
        let job = JobPosting {
            id: "j".to_string(),
            skills: strings(&["Node.js", "TypeScript", "node.js", "React"]),
            ..JobPosting::default()
        };
        let normalized = normalize_job(&job);
        let displays: Vec<_> = normalized.skills.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, vec!["Node.js", "TypeScript", "React"]);
    }
}
