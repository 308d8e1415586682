use serde::{Deserialize, Serialize};

/// Upper bound of `ScoreBreakdown::total`.
pub const MAX_SCORE: f64 = 100.0;

/// Per-factor contributions and their clamped sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub seniority: f64,
    pub location: f64,
    pub total: f64, // 0..=MAX_SCORE
}

/// Outcome of scoring one (profile, job) pair. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub scores: ScoreBreakdown,
    pub reasons: Vec<String>,
}
