//! Rule-based fit engine: normalize → must-have gate → sub-scorers → aggregate/explain.
//!
//! Stateless apart from its weights, so one `MatchEngine` can be shared across
//! threads and tasks without locking.

use std::num::NonZeroUsize;
use std::thread;

use tracing::debug;

use crate::models::match_result::{MatchResult, ScoreBreakdown};
use crate::models::profile::{CandidateProfile, JobPosting};

use super::explain::{aggregate, build_reasons};
use super::gate::{check_must_haves, GateOutcome, MISSING_MUST_HAVE_REASON};
use super::location::score_location;
use super::normalizer::{normalize_job, normalize_profile, NormalizedProfile};
use super::seniority::score_seniority;
use super::skills::score_skills;
use super::weights::ScoringWeights;

/// Batches smaller than this are scored on the calling thread.
const PARALLEL_BATCH_THRESHOLD: usize = 256;

/// Seam for swapping scoring backends behind `AppState`.
pub trait FitScorer: Send + Sync {
    fn score(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchResult;

    /// Scores every posting against one profile. Output order matches `jobs`.
    fn score_batch(&self, profile: &CandidateProfile, jobs: &[JobPosting]) -> Vec<MatchResult>;
}

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    fn score_normalized(&self, profile: &NormalizedProfile, job: &JobPosting) -> MatchResult {
        let job = normalize_job(job);

        if let GateOutcome::Fail { missing } = check_must_haves(profile, &job) {
            debug!(job_id = %job.id, missing = ?missing, "must-have gate failed");
            return MatchResult {
                job_id: job.id,
                scores: ScoreBreakdown::default(),
                reasons: vec![MISSING_MUST_HAVE_REASON.to_string()],
            };
        }

        let skill = score_skills(profile, &job, self.weights.skill);
        let seniority = score_seniority(profile.seniority, job.seniority, self.weights.seniority);
        let location = score_location(
            profile.location.as_ref(),
            job.location.as_ref(),
            self.weights.location,
        );

        let scores = aggregate(skill.score, seniority, location);
        let reasons = build_reasons(
            &scores,
            &skill,
            job.seniority,
            job.location.as_ref().map(|l| l.display.as_str()),
        );

        MatchResult {
            job_id: job.id,
            scores,
            reasons,
        }
    }
}

impl FitScorer for MatchEngine {
    fn score(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchResult {
        self.score_normalized(&normalize_profile(profile), job)
    }

    /// Normalizes the profile once, then fans contiguous chunks of postings out
    /// over scoped threads for large batches.
    fn score_batch(&self, profile: &CandidateProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
        let profile = normalize_profile(profile);

        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        if jobs.len() < PARALLEL_BATCH_THRESHOLD || workers == 1 {
            return jobs
                .iter()
                .map(|job| self.score_normalized(&profile, job))
                .collect();
        }

        let chunk_size = jobs.len().div_ceil(workers);
        let profile = &profile;
        thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|job| self.score_normalized(profile, job))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(results) => results,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect()
        })
    }
}
