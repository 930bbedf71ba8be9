//! The relative-delta metric between two timings.

use crate::{DeltaError, DeltaResult};

use super::schema::MeasurementKey;

/// Relative difference `(baseline - candidate) / candidate`.
///
/// Positive means the candidate is faster than the baseline. A zero
/// candidate timing is rejected so the report never carries an infinite or
/// NaN fraction; `key` names the offending measurement in the diagnostic.
pub fn relative_delta(key: &MeasurementKey, baseline: u64, candidate: u64) -> DeltaResult<f64> {
    if candidate == 0 {
        return Err(DeltaError::InvalidTiming(key.to_string()));
    }
    Ok((baseline as f64 - candidate as f64) / candidate as f64)
}

/// Fixed two-decimal rendering of a delta fraction.
pub fn format_delta(delta: f64) -> String {
    format!("{delta:.2}")
}
