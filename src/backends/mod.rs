//! Backends module - Filesystem access used by the flows
//!
//! This module provides:
//! - Source directory validation
//! - Recursive, sorted directory walking

pub mod scan;
