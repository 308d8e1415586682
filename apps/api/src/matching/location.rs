use super::normalizer::Location;

/// Case-insensitive exact match, or Remote on either side. Missing data never matches.
pub fn score_location(candidate: Option<&Location>, job: Option<&Location>, weight: f64) -> f64 {
    match (candidate, job) {
        (Some(c), Some(j)) if c.key == j.key || c.is_remote() || j.is_remote() => weight,
        _ => 0.0,
    }
}
