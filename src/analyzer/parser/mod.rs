//! Structural Parser Module
//!
//! Tree-sitter based extraction of one file's structural shape.
//!
//! ```rust,ignore
//! use pystruct::analyzer::parser::StructureParser;
//!
//! let parser = StructureParser::new()?;
//! let unit = parser.parse("app.py", source, false)?;
//! ```

pub mod python;

pub use python::StructureParser;

use crate::types::{Result, StructError};

/// Create a tree-sitter parser with the Python grammar loaded.
pub fn create_ts_parser() -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| StructError::Config(format!("Failed to set Python language: {}", e)))?;
    Ok(parser)
}

/// Extract text content from a tree-sitter node.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
pub fn get_node_text<'a>(node: tree_sitter::Node, content: &'a [u8]) -> &'a str {
    node.utf8_text(content).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}:{}-{}:{}: {}",
            node.start_position().row + 1,
            node.start_position().column,
            node.end_position().row + 1,
            node.end_position().column,
            e
        );
        ""
    })
}
