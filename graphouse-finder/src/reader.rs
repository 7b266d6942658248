//! Single-path reader view over the batched fetch.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::blocking::Client;

use graphouse_types::{IntervalSet, Points, TimeInfo};

use crate::data;
use crate::error::FinderError;

/// Reader for one metric path.
///
/// Holds the path, the backend URL and a handle to the shared HTTP client;
/// every call is an independent request/response round trip with no state
/// kept in between.
#[derive(Debug, Clone)]
pub struct GraphouseReader {
    path: String,
    url: String,
    client: Client,
}

impl GraphouseReader {
    pub(crate) fn new(path: String, url: String, client: Client) -> Self {
        Self { path, url, client }
    }

    /// The metric path this reader is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Time ranges this reader can be queried over.
    ///
    /// A single interval from epoch 0 to now: Graphouse does not expose
    /// per-metric retention, so any historical range up to the present is
    /// considered queryable. This is a static approximation, not derived
    /// from actual data presence.
    pub fn get_intervals(&self) -> IntervalSet {
        IntervalSet::single(0, current_epoch_secs())
    }

    /// Fetch this path's points over `[start, end]`.
    ///
    /// Delegates to the batched fetch with a singleton path set and pulls
    /// this reader's own series out of the result, empty when the backend
    /// had nothing.
    pub fn fetch(&self, start: i64, end: i64) -> Result<(TimeInfo, Points), FinderError> {
        let paths = [self.path.as_str()];
        let mut data =
            data::load_data(&self.client, &self.url, &paths, start, end, data::DEFAULT_REQKEY)?;
        let points = data.series.remove(&self.path).unwrap_or_default();
        Ok((data.time_info, points))
    }
}

/// Seconds since the Unix epoch.
fn current_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
