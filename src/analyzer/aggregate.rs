//! Tree Aggregator
//!
//! Applies the structural parser to every discovered file under a root,
//! producing the whole-tree [`ModuleMap`]. Per-file failures never abort the
//! batch: a file that cannot be read or parsed contributes an empty unit and
//! a warning, and the run moves on.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::analyzer::parser::StructureParser;
use crate::analyzer::scanner::FileScanner;
use crate::types::{ModuleMap, Result, StructuralUnit};

/// Analyze every Python file under `root` into a path-keyed model.
///
/// Exactly one entry per recognized file, keyed by its POSIX-style relative
/// path, in the scanner's (sorted, stable) discovery order.
pub fn analyze_tree(root: &Path, exclude_imports: bool) -> Result<ModuleMap> {
    let parser = StructureParser::new()?;
    let files = FileScanner::python(root).scan()?;

    let mut model = ModuleMap::new();
    for file in files {
        let unit = match fs::read_to_string(&file.path) {
            Ok(source) => match parser.parse(&file.relative, &source, exclude_imports) {
                Ok(unit) => unit,
                Err(e) => {
                    warn!("{}", e);
                    StructuralUnit::new(exclude_imports)
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", file.relative, e);
                StructuralUnit::new(exclude_imports)
            }
        };
        model.insert(file.relative, unit);
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_one_unit_per_recognized_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "def f():\n    pass\n");
        write(dir.path(), "pkg/b.py", "import os\n");
        write(dir.path(), "README.md", "not python");

        let model = analyze_tree(dir.path(), false).unwrap();
        let keys: Vec<_> = model.keys().collect();
        assert_eq!(keys, ["a.py", "pkg/b.py"]);
        assert_eq!(model["a.py"].functions, ["f"]);
        assert_eq!(model["pkg/b.py"].imports, Some(vec!["import os".to_string()]));
    }

    #[test]
    fn test_syntax_error_file_contributes_empty_unit() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.py", "def broken(:\n");
        write(dir.path(), "good.py", "def g():\n    pass\n");

        let model = analyze_tree(dir.path(), false).unwrap();
        assert_eq!(model.len(), 2);

        let bad = &model["bad.py"];
        assert_eq!(bad.imports, Some(Vec::new()));
        assert!(bad.functions.is_empty());
        assert!(bad.classes.is_empty());

        assert_eq!(model["good.py"].functions, ["g"]);
    }

    #[test]
    fn test_non_utf8_file_contributes_empty_unit() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("binary.py"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        write(dir.path(), "ok.py", "x = 1\n");

        let model = analyze_tree(dir.path(), false).unwrap();
        assert_eq!(model.len(), 2);
        assert!(model["binary.py"].is_empty());
    }

    #[test]
    fn test_exclude_imports_flag_reaches_every_unit() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "import os\n");
        write(dir.path(), "bad.py", "def broken(:\n");

        let model = analyze_tree(dir.path(), true).unwrap();
        assert!(model["a.py"].imports.is_none());
        // The recovery unit honors the flag too
        assert!(model["bad.py"].imports.is_none());
    }
}
