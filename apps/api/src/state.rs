use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable fit scorer. Default: the rule-based `MatchEngine`.
    pub scorer: Arc<dyn FitScorer>,
}
