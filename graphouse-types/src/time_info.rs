//! Sampling-window descriptor for a batch of series.

/// The `(start, end, step)` window that applies to a batch of returned
/// series, in seconds since the Unix epoch.
///
/// One window describes the whole batch: the embedding front end consumes a
/// single `TimeInfo` per fetch, so the adaptor keeps the window of the
/// first path the backend knew about and drops any divergent ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInfo {
    /// Window start.
    pub start: i64,

    /// Window end.
    pub end: i64,

    /// Sampling resolution in seconds.
    pub step: i64,
}

impl TimeInfo {
    /// Create a window.
    pub const fn new(start: i64, end: i64, step: i64) -> Self {
        Self { start, end, step }
    }
}

impl Default for TimeInfo {
    /// The no-data window, `(0, 0, 1)`.
    ///
    /// Returned by a fetch that found none of the requested paths.
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}
