// Candidate-job fit scoring.
// Pure and synchronous: no I/O, no shared mutable state. Handlers wrap it for HTTP.

pub mod engine;
pub mod explain;
pub mod gate;
pub mod handlers;
pub mod location;
pub mod normalizer;
pub mod seniority;
pub mod skills;
pub mod weights;
