//! UI module root: exposes drawing functions for individual panels.

pub mod activity;
pub mod bars;
pub mod battery;
pub mod charts;
pub mod detail;
pub mod header;
pub mod processes;
pub mod status;
pub mod theme;
