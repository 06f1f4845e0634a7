//! The tools module provides the plumbing around the coding core.
//!
//! The tools are:
//! - cli: Command line interface for hufftext.
//! - freq_count: Symbol frequency count over the input text.
//! - listing: The report sections, code table, encoded and decoded text.
//! - stats: Entropy and mean code length measurements.
//! - timer: Per-stage wall-clock timing.
pub mod cli;
pub mod freq_count;
pub mod listing;
pub mod stats;
pub mod timer;
