//! Aggregation of sub-scores and the reasons that justify them.

use crate::models::match_result::{ScoreBreakdown, MAX_SCORE};
use crate::models::profile::SeniorityLevel;

use super::skills::SkillScore;

pub const NO_MATCH_REASON: &str = "No significant match";

pub fn aggregate(skill: f64, seniority: f64, location: f64) -> ScoreBreakdown {
    ScoreBreakdown {
        skill,
        seniority,
        location,
        total: (skill + seniority + location).clamp(0.0, MAX_SCORE),
    }
}

/// Reasons for every factor that contributed, always skill, seniority, location.
/// Order does not depend on score magnitude.
pub fn build_reasons(
    scores: &ScoreBreakdown,
    skill: &SkillScore,
    job_seniority: SeniorityLevel,
    job_location: Option<&str>,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.skill > 0.0 {
        reasons.push(format!(
            "Matched {}/{} required skills: {}",
            skill.matched.len(),
            skill.job_skill_count,
            skill.matched.join(", ")
        ));
    }

    if scores.seniority > 0.0 {
        reasons.push(format!("Seniority level matches ({job_seniority})"));
    }

    if scores.location > 0.0 {
        if let Some(value) = job_location {
            reasons.push(format!("Location matches ({value})"));
        }
    }

    if reasons.is_empty() {
        reasons.push(NO_MATCH_REASON.to_string());
    }

    reasons
}
