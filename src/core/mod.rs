//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run model (config, file records, stats, output buffer)
//! - Error type shared by every stage of the pipeline
//! - Path normalization and extension matching
//! - File reading with encoding fallback
//! - Header and segment rendering
//! - Human-readable status reporting

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod report;
