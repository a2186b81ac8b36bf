//! Global Constants
//!
//! Centralized constants for scanning and rendering.

/// File scanner constants
pub mod scanner {
    /// Maximum file size eligible for analysis (1MB)
    pub const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Directories that never contain analyzable Python sources
    pub const SKIP_DIRS: &[&str] = &[
        "__pycache__",
        ".git",
        ".venv",
        "venv",
        ".tox",
        ".mypy_cache",
        ".pytest_cache",
        "node_modules",
        "build",
        "dist",
        ".eggs",
    ];
}

/// Renderer constants
pub mod render {
    /// Default glyph prepended to function names in text output
    pub const DEFAULT_FUNC_SYMBOL: &str = "ƒ";

    /// Default glyph prepended to class names in text output
    pub const DEFAULT_CLASS_SYMBOL: &str = "ℂ";

    /// Indent applied to every line under a file header
    pub const TEXT_INDENT: &str = "    ";

    /// Name of the graph description file written into the scanned root
    pub const DOT_FILENAME: &str = "structure.dot";
}
