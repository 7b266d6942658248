//! # graphouse-finder
//!
//! Storage adaptor that lets a Graphite-style query front end resolve
//! metric names and fetch series from a [Graphouse] backend over HTTP.
//!
//! Two capabilities are exposed:
//!
//! - **Node discovery**: [`GraphouseFinder::find_nodes`] resolves a
//!   wildcard metric pattern into branch and leaf [`Node`]s via the
//!   backend's `/search` endpoint. Wildcard syntax is understood by the
//!   backend alone; this crate never interprets it.
//! - **Data fetching**: [`GraphouseFinder::fetch_multi`] retrieves points
//!   for a whole set of metric paths with a single `/metricData` round
//!   trip, reconciled into one uniform [`MetricData`] response.
//!   [`GraphouseReader::fetch`] is the single-path view over the same
//!   routine.
//!
//! All I/O is blocking and stateless: every operation is one HTTP
//! request/response round trip with no retries, no caching and no session
//! state. Timeout policy belongs to the embedding caller and is set on the
//! underlying HTTP client through the builder.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graphouse_finder::GraphouseFinder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finder = GraphouseFinder::builder()
//!         .url("http://graphouse.local:2005")
//!         .build()?;
//!
//!     for node in finder.find_nodes("servers.web*.cpu.*")? {
//!         println!("{}", node.path());
//!     }
//!
//!     let data = finder.fetch_multi(&["servers.web1.cpu.user"], 1700000000, 1700003600)?;
//!     println!("fetched {} series", data.len());
//!     Ok(())
//! }
//! ```
//!
//! [Graphouse]: https://github.com/ClickHouse/graphouse

pub mod config;
pub mod error;
pub mod finder;
pub mod reader;

mod data;

#[cfg(test)]
mod testutil;

pub use config::GraphouseConfig;
pub use error::FinderError;
pub use finder::{GraphouseFinder, GraphouseFinderBuilder, LeafNode, Node, Nodes};
pub use reader::GraphouseReader;

// Re-export the result schema for convenience
pub use graphouse_types::{Interval, IntervalSet, MetricData, Points, TimeInfo};
