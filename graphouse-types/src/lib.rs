//! # graphouse-types
//!
//! Result schema for the Graphouse storage adaptor. These are the types the
//! adaptor hands to an embedding query front end: the sampling window of a
//! batch of series ([`TimeInfo`]), the time ranges a reader can be queried
//! over ([`Interval`] / [`IntervalSet`]) and the reconciled response of a
//! batched fetch ([`MetricData`]).
//!
//! ## Design Goals
//!
//! - **Plain data**: no I/O and no backend knowledge here; the adaptor
//!   crate owns the wire formats.
//! - **Optional serialization**: enable the `serde` feature when the front
//!   end needs to persist or forward these values.
//!
//! ## Example
//!
//! ```rust
//! use graphouse_types::{MetricData, TimeInfo};
//!
//! let mut data = MetricData::new(TimeInfo::new(100, 200, 10));
//! data.series
//!     .insert("servers.web1.cpu.user".to_string(), vec![Some(0.5), None, Some(0.7)]);
//!
//! assert_eq!(data.len(), 1);
//! assert_eq!(data.get("servers.web1.cpu.user").map(|p| p.len()), Some(3));
//! ```

mod interval;
mod metric_data;
mod time_info;

pub use interval::*;
pub use metric_data::*;
pub use time_info::*;
