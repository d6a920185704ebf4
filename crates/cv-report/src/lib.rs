//! cv-report: pure rendering of cycle results into formatted table rows.
//!
//! Everything here is a total function of a [`cv_model::CycleResult`] slice
//! and a [`cv_core::DisplayScale`]; no ambient unit state, no I/O.

pub mod headers;
pub mod summary;
pub mod tables;

pub use headers::{HeaderColumn, header_labels};
pub use summary::{SummaryText, render_summary};
pub use tables::{ProcessRow, ProcessTable, StateRow, process_table, state_rows};
