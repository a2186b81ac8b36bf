//! pystruct - Structural Maps of Python Codebases
//!
//! Extracts a structural summary (imports, functions, classes, methods) from
//! every Python file under a directory tree and renders it either as an
//! indented text tree or as a Graphviz dot file.
//!
//! ## Pipeline
//!
//! 1. [`analyzer::scanner`] discovers `.py` files in stable sorted order
//! 2. [`analyzer::parser`] turns each file into a [`StructuralUnit`]
//! 3. [`analyzer::aggregate`] collects units into a path-keyed [`ModuleMap`]
//! 4. [`render`] projects the model into text or dot output
//!
//! Malformed files degrade to empty units with a warning; a single broken
//! file never aborts a run.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pystruct::{RenderConfig, analyze_tree, render_text};
//!
//! let model = analyze_tree(Path::new("."), false)?;
//! print!("{}", render_text(&model, &RenderConfig::default()));
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod render;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use analyzer::aggregate::analyze_tree;
pub use analyzer::parser::StructureParser;
pub use analyzer::scanner::FileScanner;
pub use config::{OutputMode, RenderConfig};
pub use render::{render_dot, render_text};
pub use types::{ModuleMap, Result, StructError, StructuralUnit};
