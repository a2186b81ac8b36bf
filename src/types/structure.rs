//! Structural Model
//!
//! The extracted shape of one Python file and the whole-tree aggregate.
//! Both are built once by the analyzer and read-only afterwards; renderers
//! take them by shared reference.

use indexmap::IndexMap;

/// Whole-tree model: relative POSIX path -> extracted file shape.
///
/// Keys are unique; iteration order is discovery order, which the scanner
/// keeps stable (sorted by path) so repeated runs render identically.
pub type ModuleMap = IndexMap<String, StructuralUnit>;

/// The extracted shape of a single Python source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralUnit {
    /// Canonical import renderings (`import os`, `from a import b, c`).
    ///
    /// `None` when import extraction is disabled: the field is absent from
    /// the unit, not merely empty. `Some(vec![])` means imports were looked
    /// for and none were found.
    pub imports: Option<Vec<String>>,

    /// Names of every function definition found by a full-tree walk,
    /// regardless of nesting depth. Methods therefore show up here as well
    /// as under their class.
    pub functions: Vec<String>,

    /// Class name -> direct-child method names, in declaration order.
    ///
    /// A duplicate class name later in the file replaces the earlier method
    /// list but keeps the original insertion position, matching single-pass
    /// construction.
    pub classes: IndexMap<String, Vec<String>>,
}

impl StructuralUnit {
    /// Fresh unit with the import field present or absent per the flag.
    pub fn new(exclude_imports: bool) -> Self {
        Self {
            imports: (!exclude_imports).then(Vec::new),
            functions: Vec::new(),
            classes: IndexMap::new(),
        }
    }

    /// True when nothing was extracted (imports may still be present-but-empty).
    pub fn is_empty(&self) -> bool {
        self.imports.as_ref().is_none_or(Vec::is_empty)
            && self.functions.is_empty()
            && self.classes.is_empty()
    }
}
