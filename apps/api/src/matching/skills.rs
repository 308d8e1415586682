use super::normalizer::{NormalizedJob, NormalizedProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub score: f64,
    /// Overlapping skills in posting order.
    pub matched: Vec<String>,
    pub job_skill_count: usize,
}

/// `weight * overlap / |job.skills|`, capped at `weight`.
/// A posting without skills scores 0: there is nothing to match against.
pub fn score_skills(profile: &NormalizedProfile, job: &NormalizedJob, weight: f64) -> SkillScore {
    let matched: Vec<String> = job
        .skills
        .iter()
        .filter(|skill| profile.skills.contains(&skill.key))
        .map(|skill| skill.display.clone())
        .collect();

    let job_skill_count = job.skills.len();
    let score = (weight * matched.len() as f64 / job_skill_count.max(1) as f64).min(weight);

    SkillScore {
        score,
        matched,
        job_skill_count,
    }
}
