use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

use crate::constants::scanner::{MAX_FILE_SIZE, SKIP_DIRS};
use crate::types::Result;

/// Recursive discovery of Python source files under a root directory.
///
/// Discovery order is sorted by path so that a run's output is reproducible;
/// gitignored files and well-known junk directories are skipped.
pub struct FileScanner {
    root: PathBuf,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl FileScanner {
    /// Scanner with the default junk-directory exclusions.
    pub fn python<P: AsRef<Path>>(root: P) -> Self {
        let exclude = SKIP_DIRS.iter().map(|d| format!("**/{}/**", d)).collect();
        Self {
            root: root.as_ref().to_path_buf(),
            exclude,
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .sort_by_file_path(|a, b| a.cmp(b));

        for entry in builder.build().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() || !is_python_file(path) {
                continue;
            }

            let Some(relative) = self.relative_posix(path) else {
                continue;
            };

            if self.should_exclude(&relative) {
                continue;
            }

            if let Ok(metadata) = path.metadata() {
                if metadata.len() > self.max_file_size {
                    tracing::debug!("skipping {} ({} bytes)", relative, metadata.len());
                    continue;
                }

                files.push(ScannedFile {
                    path: path.to_path_buf(),
                    relative,
                });
            }
        }

        Ok(files)
    }

    /// Path relative to the scanned root, with POSIX separators.
    fn relative_posix(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(p) => Some(p.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }

    fn should_exclude(&self, relative: &str) -> bool {
        self.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(relative))
                .unwrap_or(false)
        })
    }
}

fn is_python_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("py")
}

/// One discovered source file: absolute location plus its model key.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative: String,
}
