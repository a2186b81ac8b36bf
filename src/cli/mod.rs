//! Command Execution
//!
//! Ties the pipeline together: scan + aggregate, then hand the model to
//! exactly one renderer and deliver its output (stdout for text, a file in
//! the scanned root for dot).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::analyzer::analyze_tree;
use crate::config::{OutputMode, RenderConfig};
use crate::constants::render::DOT_FILENAME;
use crate::render::{render_dot, render_text};
use crate::types::{Result, StructError};

pub fn run(root: &Path, config: &RenderConfig) -> Result<()> {
    if !root.is_dir() {
        return Err(StructError::Config(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let model = analyze_tree(root, config.exclude_imports)?;
    debug!("analyzed {} files under {}", model.len(), root.display());

    match config.output {
        OutputMode::Print => {
            println!("{}/", root.display());
            print!("{}", render_text(&model, config));
        }
        OutputMode::Dot => {
            let dest = root.join(DOT_FILENAME);
            write_committed(&dest, &render_dot(&model))?;
            println!("Dot file created at {}", dest.display());
        }
    }

    Ok(())
}

/// Write via a temporary file and rename, so a failed run leaves no partial
/// output behind.
fn write_committed(dest: &Path, content: &str) -> Result<()> {
    let tmp = dest.with_extension("dot.tmp");
    let result = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, dest));
    result.map_err(|source| {
        let _ = fs::remove_file(&tmp);
        StructError::Output {
            path: dest.display().to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_a_config_error() {
        let err = run(
            &PathBuf::from("/definitely/not/a/real/dir"),
            &RenderConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, StructError::Config(_)));
    }

    #[test]
    fn test_dot_mode_writes_file_into_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "def f():\n    pass\n").unwrap();

        let config = RenderConfig {
            output: OutputMode::Dot,
            ..RenderConfig::default()
        };
        run(dir.path(), &config).unwrap();

        let dot = fs::read_to_string(dir.path().join(DOT_FILENAME)).unwrap();
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("a_py_func_f"));
        // No leftover temp file
        assert!(!dir.path().join("structure.dot.tmp").exists());
    }

    #[test]
    fn test_write_committed_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join(DOT_FILENAME);
        fs::write(&dest, "old").unwrap();

        write_committed(&dest, "new").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_committed_failure_names_destination() {
        let dir = TempDir::new().unwrap();
        // Destination parent does not exist
        let dest = dir.path().join("missing").join(DOT_FILENAME);
        let err = write_committed(&dest, "content").unwrap_err();
        match err {
            StructError::Output { path, .. } => assert!(path.contains(DOT_FILENAME)),
            other => panic!("expected output error, got {}", other),
        }
    }
}
