//! Benchmark identifier decoding.
//!
//! Identifiers follow the Google Benchmark convention `{path}/{size}` where
//! the path is an underscore-separated segment list led by a fixed marker
//! token, e.g. `BM_Select_int_std/4096`.

use crate::{DeltaError, DeltaResult};

use super::schema::MeasurementKey;

/// How competitor identity is encoded in a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    /// One feed; names carry a trailing competitor segment.
    SingleFeed,
    /// Two feeds; competitor identity comes from which feed is decoded.
    DualFeed,
}

/// A decoded identifier: the grouping key, plus the competitor label when
/// the mode embeds one in the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub key: MeasurementKey,
    pub competitor: Option<String>,
}

/// Split an identifier into its structural fields for the given mode.
///
/// The path must contain exactly four segments in single-feed mode
/// (`marker_function_type_competitor`) or three in dual-feed mode
/// (`marker_function_type`). The marker segment is discarded; competitor
/// labels are lowercased. Anything else is a `MalformedIdentifier` with no
/// partial recovery.
pub fn decode(name: &str, mode: FeedMode) -> DeltaResult<DecodedName> {
    let malformed = || DeltaError::MalformedIdentifier(name.to_string());

    let mut parts = name.split('/');
    let (path, size) = match (parts.next(), parts.next(), parts.next()) {
        (Some(path), Some(size), None) => (path, size),
        _ => return Err(malformed()),
    };

    let segments: Vec<&str> = path.split('_').collect();
    let (function, variant_type, competitor) = match (mode, segments.as_slice()) {
        (FeedMode::SingleFeed, [_marker, function, variant_type, competitor]) => {
            (*function, *variant_type, Some(competitor.to_lowercase()))
        }
        (FeedMode::DualFeed, [_marker, function, variant_type]) => {
            (*function, *variant_type, None)
        }
        _ => return Err(malformed()),
    };

    Ok(DecodedName {
        key: MeasurementKey {
            function: function.to_string(),
            variant_type: variant_type.to_string(),
            size: size.to_string(),
        },
        competitor,
    })
}
