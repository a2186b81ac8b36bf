//! Run Configuration
//!
//! All configuration is fixed at run start from CLI arguments; nothing is
//! read from the environment or from config files. The renderer receives
//! this value explicitly rather than reaching for ambient state, so repeated
//! invocations with different settings are safe.

use std::fmt;

use clap::ValueEnum;

use crate::constants::render::{DEFAULT_CLASS_SYMBOL, DEFAULT_FUNC_SYMBOL};

/// Which projection of the aggregate model to emit.
///
/// Deriving `ValueEnum` makes clap reject an unsupported mode before any
/// file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Indented text tree on stdout
    Print,
    /// Graphviz dot file written into the scanned root
    Dot,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print => write!(f, "print"),
            Self::Dot => write!(f, "dot"),
        }
    }
}

/// Immutable per-run rendering configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Drop the `imports` field from every unit entirely
    pub exclude_imports: bool,
    pub output: OutputMode,
    /// Glyph shown before function names (text output only)
    pub func_symbol: String,
    /// Glyph shown before class names (text output only)
    pub class_symbol: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            exclude_imports: false,
            output: OutputMode::Print,
            func_symbol: DEFAULT_FUNC_SYMBOL.to_string(),
            class_symbol: DEFAULT_CLASS_SYMBOL.to_string(),
        }
    }
}
