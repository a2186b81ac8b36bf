//! Code Analyzer Module
//!
//! The first stage of the pipeline:
//! - Python source parsing (structural extraction)
//! - File scanning with gitignore support
//! - Whole-tree aggregation

pub mod aggregate;
pub mod parser;
pub mod scanner;

pub use aggregate::analyze_tree;
