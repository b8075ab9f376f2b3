// Scoring — keyword densities, per-document metrics, baseline deltas and
// the final risk classification.

pub mod baseline;
pub mod density;
pub mod keywords;
pub mod metrics;
pub mod risk;
