//! Reconciled response of a batched fetch.

use std::collections::BTreeMap;

use crate::TimeInfo;

/// Points for one series; `None` marks a gap the backend reported as null.
pub type Points = Vec<Option<f64>>;

/// The uniform result of one batched fetch.
///
/// Every requested path has an entry in `series`, empty when the backend
/// had no data for it, so consumers never need to distinguish "unknown
/// path" from "known path without points".
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricData {
    /// Sampling window shared by every series in the batch.
    pub time_info: TimeInfo,

    /// Points per metric path.
    pub series: BTreeMap<String, Points>,
}

impl MetricData {
    /// Create an empty response with the given window.
    pub fn new(time_info: TimeInfo) -> Self {
        Self {
            time_info,
            series: BTreeMap::new(),
        }
    }

    /// Points for a path, if the path was part of the fetch.
    pub fn get(&self, path: &str) -> Option<&[Option<f64>]> {
        self.series.get(path).map(Vec::as_slice)
    }

    /// Number of series in the response.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the response holds no series at all.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterate over `(path, points)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Points)> {
        self.series.iter()
    }
}
