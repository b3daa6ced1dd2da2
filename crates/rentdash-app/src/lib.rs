//! # rentdash-app
//!
//! Wires the rentdash pipeline together: configuration, dataset load,
//! interactive range selection, and the synchronous recompute-and-render
//! pass behind every range change.

pub mod dashboard;

pub use dashboard::{Dashboard, DashboardData};
