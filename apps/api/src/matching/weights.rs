use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::models::match_result::MAX_SCORE;

/// Share of the seniority weight granted for a one-level mismatch.
pub const ADJACENT_SENIORITY_FACTOR: f64 = 0.5;

/// Points each factor contributes at a full match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub seniority: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 60.0,
            seniority: 20.0,
            location: 20.0,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.seniority + self.location
    }

    /// Rejects weights that could push a total outside `[0, MAX_SCORE]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("skill", self.skill),
            ("seniority", self.seniority),
            ("location", self.location),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} weight must be a finite, non-negative number (got {value})");
            }
        }
        if self.sum() > MAX_SCORE {
            bail!(
                "weights sum to {} which exceeds the maximum score of {MAX_SCORE}",
                self.sum()
            );
        }
        Ok(())
    }
}
