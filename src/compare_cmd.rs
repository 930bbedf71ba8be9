//! Compare benchmark result feeds and print per-key relative deltas.
//!
//! One feed: benchmark names embed both competitor labels. Two feeds:
//! candidate and baseline results are joined by key.

use std::path::PathBuf;

use tracing::debug;

use crate::core::delta::{format_delta, relative_delta};
use crate::core::schema::{MeasurementKey, ResultFeed};
use crate::core::table::{CompetitorTimings, dual_feed_table, single_feed_table};
use crate::report::{self, DeltaRecord};
use crate::{DeltaError, DeltaResult};

/// Competitor label carrying the reference timings in single-feed names.
pub const BASELINE_COMPETITOR: &str = "std";
/// Competitor label carrying the candidate timings in single-feed names.
pub const CANDIDATE_COMPETITOR: &str = "fcpp";

fn competitor_timing(
    key: &MeasurementKey,
    timings: &CompetitorTimings,
    competitor: &str,
) -> DeltaResult<u64> {
    timings
        .get(competitor)
        .copied()
        .ok_or_else(|| DeltaError::MissingCompetitor {
            key: key.to_string(),
            competitor: competitor.to_string(),
        })
}

fn to_record(key: &MeasurementKey, delta: f64) -> DeltaRecord {
    DeltaRecord {
        function: key.function.clone(),
        variant_type: key.variant_type.clone(),
        size: key.size.clone(),
        delta: format_delta(delta),
    }
}

/// Per-key deltas for a feed whose names embed both competitors.
///
/// A key lacking either competitor's timing aborts the report.
pub fn single_feed_report(feed: &ResultFeed) -> DeltaResult<Vec<DeltaRecord>> {
    let table = single_feed_table(feed)?;
    let mut records = Vec::with_capacity(table.len());

    for (key, timings) in table.iter() {
        debug!(key = %key, ?timings, "computing delta");
        let baseline = competitor_timing(key, timings, BASELINE_COMPETITOR)?;
        let candidate = competitor_timing(key, timings, CANDIDATE_COMPETITOR)?;
        records.push(to_record(key, relative_delta(key, baseline, candidate)?));
    }

    Ok(records)
}

/// Per-key deltas joining a candidate feed against a baseline feed.
///
/// Iteration follows the candidate feed's key order; a key the baseline
/// feed lacks aborts the report.
pub fn dual_feed_report(
    candidate: &ResultFeed,
    baseline: &ResultFeed,
) -> DeltaResult<Vec<DeltaRecord>> {
    let candidate_table = dual_feed_table(candidate)?;
    let baseline_table = dual_feed_table(baseline)?;
    let mut records = Vec::with_capacity(candidate_table.len());

    for (key, &candidate_time) in candidate_table.iter() {
        let &baseline_time = baseline_table
            .get(key)
            .ok_or_else(|| DeltaError::MissingKey(key.to_string()))?;
        debug!(key = %key, baseline_time, candidate_time, "computing delta");
        records.push(to_record(key, relative_delta(key, baseline_time, candidate_time)?));
    }

    Ok(records)
}

/// Entry point: load the feed(s), build the report, print it to stdout.
pub fn run(candidate: PathBuf, baseline: Option<PathBuf>) -> DeltaResult<()> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();

    match baseline {
        Some(baseline) => {
            let candidate_feed = ResultFeed::from_path(candidate)?;
            let baseline_feed = ResultFeed::from_path(baseline)?;
            let records = dual_feed_report(&candidate_feed, &baseline_feed)?;
            report::render_csv(&records, handle)
        }
        None => {
            let feed = ResultFeed::from_path(candidate)?;
            let records = single_feed_report(&feed)?;
            report::render_plain(&records, handle)
        }
    }
}
