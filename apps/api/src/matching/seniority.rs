use crate::models::profile::SeniorityLevel;

use super::weights::ADJACENT_SENIORITY_FACTOR;

/// Full weight on an exact match, partial credit one level apart, else 0.
/// Distance is measured on the junior..staff scale; `Unknown` never scores.
pub fn score_seniority(candidate: SeniorityLevel, job: SeniorityLevel, weight: f64) -> f64 {
    let (Some(c), Some(j)) = (candidate.rank(), job.rank()) else {
        return 0.0;
    };

    match c.abs_diff(j) {
        0 => weight,
        1 => weight * ADJACENT_SENIORITY_FACTOR,
        _ => 0.0,
    }
}
