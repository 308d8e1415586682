//! Axum route handlers for the Match API.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::match_result::MatchResult;
use crate::models::profile::{CandidateProfile, JobPosting};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: CandidateProfile,
    pub job: JobPosting,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub profile: CandidateProfile,
    pub jobs: Vec<JobPosting>,
    /// Drop results scoring below this total. Keeps everything when absent.
    pub min_total: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<MatchResult>,
    pub evaluated: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores a single posting against a profile.
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    Ok(Json(state.scorer.score(&request.profile, &request.job)))
}

/// POST /api/v1/match/rank
///
/// Scores every posting, filters by `min_total`, and sorts by total descending.
/// Equal totals keep their input order.
pub async fn handle_rank(
    State(state): State<AppState>,
    AppJson(request): AppJson<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let max_batch = state.config.max_batch_size;
    if request.jobs.len() > max_batch {
        return Err(AppError::PayloadTooLarge(format!(
            "{} postings submitted; at most {max_batch} are allowed per request",
            request.jobs.len()
        )));
    }

    let min_total = request.min_total.unwrap_or(0.0);

    let started = Instant::now();
    let evaluated = request.jobs.len();
    let scorer = state.scorer.clone();
    let RankRequest { profile, jobs, .. } = request;

    let scored = tokio::task::spawn_blocking(move || scorer.score_batch(&profile, &jobs))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("scoring task failed: {e}")))?;

    let results = rank_results(scored, min_total);

    info!(
        evaluated,
        returned = results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ranked job postings"
    );

    Ok(Json(RankResponse { results, evaluated }))
}

fn rank_results(mut results: Vec<MatchResult>, min_total: f64) -> Vec<MatchResult> {
    results.retain(|r| r.scores.total >= min_total);
    results.sort_by(|a, b| b.scores.total.total_cmp(&a.scores.total));
    results
}
