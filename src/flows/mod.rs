//! Flows module - End-to-end pipelines built from core and backends
//!
//! Available flows:
//! - concat: Walk a source directory and write every matching file into one output

pub mod concat;
