//! Trajectory reconstruction from integrator output
//!
//! Decodes the integrator's multiplexed time-series text format into
//! per-body ordered position histories, and resolves body selections
//! against them.

pub mod error;
pub mod history;


pub use error::{HistoryError, HistoryResult};
pub use history::Histories;
