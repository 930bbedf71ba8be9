//! Timing tables - one per decoded feed, keyed by measurement.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::warn;

use crate::{DeltaError, DeltaResult};

use super::name::{self, FeedMode};
use super::schema::{MeasurementKey, ResultFeed};

/// Per-competitor timings under one key (single-feed mode).
pub type CompetitorTimings = HashMap<String, u64>;

/// Mapping from `MeasurementKey` to per-feed timing data.
///
/// Iteration yields keys in first-seen order, so report lines group the way
/// the feed listed its benchmarks. Built once per feed and read-only
/// afterwards.
#[derive(Debug)]
pub struct TimingTable<V> {
    entries: HashMap<MeasurementKey, V>,
    order: Vec<MeasurementKey>,
}

impl<V> TimingTable<V> {
    pub fn new() -> Self {
        TimingTable {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn get(&self, key: &MeasurementKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys and values in the order keys were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = (&MeasurementKey, &V)> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get_key_value(k))
    }

    /// Insert a value, returning the value it replaced.
    ///
    /// Only a first insertion extends the iteration order.
    pub fn insert(&mut self, key: MeasurementKey, value: V) -> Option<V> {
        let previous = self.entries.insert(key.clone(), value);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Value slot for `key`, created from `V::default()` on first access.
    pub fn slot(&mut self, key: &MeasurementKey) -> &mut V
    where
        V: Default,
    {
        match self.entries.entry(key.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(key.clone());
                entry.insert(V::default())
            }
        }
    }
}

impl<V> Default for TimingTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the nested single-feed table: timings per competitor under each key.
///
/// A repeated (key, competitor) pair keeps the later timing; the overwrite
/// is logged, not rejected.
pub fn single_feed_table(feed: &ResultFeed) -> DeltaResult<TimingTable<CompetitorTimings>> {
    let mut table = TimingTable::new();

    for entry in &feed.benchmarks {
        let decoded = name::decode(&entry.name, FeedMode::SingleFeed)?;
        let Some(competitor) = decoded.competitor else {
            return Err(DeltaError::MalformedIdentifier(entry.name.clone()));
        };

        let timings = table.slot(&decoded.key);
        if let Some(previous) = timings.insert(competitor.clone(), entry.cpu_time_units()) {
            warn!(
                key = %decoded.key,
                competitor = %competitor,
                previous,
                "duplicate measurement overwrites earlier timing"
            );
        }
    }

    Ok(table)
}

/// Build the flat dual-feed table: one timing per key.
///
/// Overwrite semantics match the single-feed loader.
pub fn dual_feed_table(feed: &ResultFeed) -> DeltaResult<TimingTable<u64>> {
    let mut table = TimingTable::new();

    for entry in &feed.benchmarks {
        let decoded = name::decode(&entry.name, FeedMode::DualFeed)?;
        if let Some(previous) = table.insert(decoded.key.clone(), entry.cpu_time_units()) {
            warn!(
                key = %decoded.key,
                previous,
                "duplicate measurement overwrites earlier timing"
            );
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::BenchmarkEntry;

    fn feed(entries: &[(&str, f64)]) -> ResultFeed {
        ResultFeed {
            benchmarks: entries
                .iter()
                .map(|(name, cpu_time)| BenchmarkEntry {
                    name: name.to_string(),
                    cpu_time: *cpu_time,
                })
                .collect(),
        }
    }

    fn key(function: &str, variant_type: &str, size: &str) -> MeasurementKey {
        MeasurementKey {
            function: function.to_string(),
            variant_type: variant_type.to_string(),
            size: size.to_string(),
        }
    }

    #[test]
    fn test_single_feed_table_nests_by_competitor() {
        let feed = feed(&[
            ("BM_Select_int_std/4096", 200.0),
            ("BM_Select_int_fcpp/4096", 100.0),
        ]);

        let table = single_feed_table(&feed).unwrap();
        assert_eq!(table.len(), 1);

        let timings = table.get(&key("Select", "int", "4096")).unwrap();
        assert_eq!(timings.get("std"), Some(&200));
        assert_eq!(timings.get("fcpp"), Some(&100));
    }

    #[test]
    fn test_single_feed_table_last_write_wins() {
        let feed = feed(&[
            ("BM_Select_int_std/4096", 200.0),
            ("BM_Select_int_std/4096", 300.0),
        ]);

        let table = single_feed_table(&feed).unwrap();
        let timings = table.get(&key("Select", "int", "4096")).unwrap();
        assert_eq!(timings.get("std"), Some(&300));
    }

    #[test]
    fn test_dual_feed_table_last_write_wins() {
        let feed = feed(&[("BM_Select_int/4096", 200.0), ("BM_Select_int/4096", 50.0)]);

        let table = dual_feed_table(&feed).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&key("Select", "int", "4096")), Some(&50));
    }

    #[test]
    fn test_iteration_preserves_first_seen_order() {
        let feed = feed(&[
            ("BM_Sort_int/16", 10.0),
            ("BM_Select_int/16", 20.0),
            ("BM_Sort_int/16", 30.0),
            ("BM_Filter_string/16", 40.0),
        ]);

        let table = dual_feed_table(&feed).unwrap();
        let functions: Vec<&str> = table.iter().map(|(k, _)| k.function.as_str()).collect();
        assert_eq!(functions, ["Sort", "Select", "Filter"]);
    }

    #[test]
    fn test_malformed_name_aborts_load() {
        let feed = feed(&[("BM_Select_int/16", 10.0), ("garbage", 20.0)]);
        let err = dual_feed_table(&feed).unwrap_err();
        assert!(matches!(err, DeltaError::MalformedIdentifier(_)));
    }
}
