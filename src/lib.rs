//! polltop: terminal dashboard for a remote system-metrics HTTP endpoint.
//!
//! The binary polls `GET /data` on a fixed cadence, decodes the JSON body
//! into a [`types::MetricSample`], feeds bounded chart histories, and draws
//! the panels. Everything that decides *what* to show lives in the pure
//! modules ([`present`], [`sort`], [`history`], [`net`]); the `ui` modules
//! only apply those results to the terminal.

pub mod app;
pub mod history;
pub mod net;
pub mod poll;
pub mod present;
pub mod profiles;
pub mod sort;
pub mod types;
pub mod ui;
