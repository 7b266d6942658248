//! Batched metric-data fetch against the Graphouse `metricData` endpoint.
//!
//! One POST round trip covers a whole set of metric paths. The backend
//! answers only for the paths it knows about, with whatever window each
//! series happens to have; this module reconciles that into a uniform
//! [`MetricData`] response where every requested path is present and a
//! single window describes the batch.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, error};

use graphouse_types::{MetricData, TimeInfo};

use crate::error::FinderError;

/// Request-tracing key sent when the caller does not supply one.
pub(crate) const DEFAULT_REQKEY: &str = "empty";

/// Per-path entry of the `metricData` response body.
///
/// Every field is optional on the wire: Graphouse omits what it does not
/// know and uses `null` for gaps inside `points`.
#[derive(Debug, Deserialize)]
struct MetricEntry {
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
    #[serde(default)]
    points: Vec<Option<f64>>,
}

/// Fetch series for `paths` over `[start, end]` with one POST round trip.
///
/// Fails with [`FinderError::BackendUnavailable`] when the call does not
/// complete or comes back non-2xx; no partial result is ever returned.
pub(crate) fn load_data<S: AsRef<str>>(
    client: &Client,
    base_url: &str,
    paths: &[S],
    start: i64,
    end: i64,
    reqkey: &str,
) -> Result<MetricData, FinderError> {
    let started = Instant::now();

    let url = format!("{base_url}/metricData");
    let metrics = join_paths(paths);
    let start_param = start.to_string();
    let end_param = end.to_string();
    let query = [
        ("metrics", metrics.as_str()),
        ("start", start_param.as_str()),
        ("end", end_param.as_str()),
        ("reqKey", reqkey),
    ];

    debug!(
        url = url.as_str(),
        metrics = metrics.as_str(),
        start,
        end,
        reqkey,
        "graphouse data query"
    );

    let response = match client
        .post(&url)
        .query(&query)
        .send()
        .and_then(|response| response.error_for_status())
    {
        Ok(response) => response,
        Err(err) => {
            error!(reqkey, error = %err, "failed to fetch metric data");
            return Err(err.into());
        }
    };
    let body = response.text()?;
    let fetched = started.elapsed();

    // A null entry behaves exactly like an absent one.
    let entries: HashMap<String, Option<MetricEntry>> = serde_json::from_str(&body)?;
    let parsed = started.elapsed();

    let data = reconcile(paths, &entries);
    let converted = started.elapsed();

    debug!(
        reqkey,
        total_ms = converted.as_millis() as u64,
        fetch_ms = fetched.as_millis() as u64,
        parse_ms = (parsed - fetched).as_millis() as u64,
        convert_ms = (converted - parsed).as_millis() as u64,
        "graphouse data query timings"
    );

    Ok(data)
}

/// Comma-join metric paths, backslash-escaping single quotes first.
///
/// The escaping is part of the Graphouse wire contract for the `metrics`
/// parameter.
fn join_paths<S: AsRef<str>>(paths: &[S]) -> String {
    paths
        .iter()
        .map(|path| path.as_ref().replace('\'', "\\'"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Fold per-path backend entries into one uniform response.
///
/// Every requested path gets a series, empty when the backend had nothing
/// for it. The window comes from the first path in request order with a
/// backend entry; the front end consumes a single window per batch, so
/// later windows are dropped even when they differ.
fn reconcile<S: AsRef<str>>(
    paths: &[S],
    entries: &HashMap<String, Option<MetricEntry>>,
) -> MetricData {
    let mut time_info = None;
    let mut series = BTreeMap::new();

    for path in paths {
        let path = path.as_ref();
        match entries.get(path).and_then(|entry| entry.as_ref()) {
            Some(entry) => {
                if time_info.is_none() {
                    time_info = Some(TimeInfo::new(
                        entry.start.unwrap_or(0),
                        entry.end.unwrap_or(0),
                        entry.step.unwrap_or(1),
                    ));
                }
                series.insert(path.to_string(), entry.points.clone());
            }
            None => {
                series.insert(path.to_string(), Vec::new());
            }
        }
    }

    MetricData {
        time_info: time_info.unwrap_or_default(),
        series,
    }
}
