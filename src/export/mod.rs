//! Export Module
//!
//! Persists normalized records as timestamped CSV files.

pub mod csv;

pub use csv::ResultsExporter;
