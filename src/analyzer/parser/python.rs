//! Python Structural Parser
//!
//! Converts one file's source text into a [`StructuralUnit`] by walking the
//! full tree-sitter syntax tree and classifying every node. The walk is
//! depth-first and visits every node, not just top-level statements, so
//! nested functions and methods land in the flat `functions` list in
//! addition to any class method list they belong to.

use tree_sitter::Node;

use super::{create_ts_parser, get_node_text};
use crate::types::{Result, StructError, StructuralUnit};

pub struct StructureParser;

impl StructureParser {
    pub fn new() -> Result<Self> {
        // Validate that the grammar is available
        let _ = create_ts_parser()?;
        Ok(Self)
    }

    /// Parse one file's source text into its structural shape.
    ///
    /// Returns `Err(StructError::Parse)` when the text is not valid Python;
    /// the caller decides whether that aborts anything (the aggregator
    /// recovers with an empty unit).
    pub fn parse(&self, path: &str, source: &str, exclude_imports: bool) -> Result<StructuralUnit> {
        let mut parser = create_ts_parser()?;

        let tree = parser.parse(source, None).ok_or_else(|| StructError::Parse {
            path: path.to_string(),
            message: "parser produced no tree".to_string(),
        })?;

        let root = tree.root_node();

        // tree-sitter is error-tolerant; a tree containing ERROR or MISSING
        // nodes stands in for the syntax-error case a strict parser raises.
        if root.has_error() {
            return Err(StructError::Parse {
                path: path.to_string(),
                message: describe_syntax_error(root),
            });
        }

        let mut unit = StructuralUnit::new(exclude_imports);
        collect(root, source.as_bytes(), &mut unit);
        Ok(unit)
    }
}

/// Classification of syntax-tree nodes the extraction cares about.
///
/// Every visited node maps into exactly one variant; matching is exhaustive
/// so a new classification cannot be added without handling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Import,
    ImportFrom,
    FunctionDef,
    ClassDef,
    Other,
}

impl NodeKind {
    fn of(kind: &str) -> Self {
        match kind {
            "import_statement" => Self::Import,
            "import_from_statement" => Self::ImportFrom,
            "function_definition" => Self::FunctionDef,
            "class_definition" => Self::ClassDef,
            _ => Self::Other,
        }
    }
}

/// Depth-first walk over the whole tree, appending to the unit as it goes.
fn collect(node: Node, source: &[u8], unit: &mut StructuralUnit) {
    match NodeKind::of(node.kind()) {
        NodeKind::Import => {
            if let Some(imports) = unit.imports.as_mut() {
                for module in plain_import_modules(node, source) {
                    imports.push(format!("import {}", module));
                }
            }
        }
        NodeKind::ImportFrom => {
            if let Some(imports) = unit.imports.as_mut() {
                imports.push(render_from_import(node, source));
            }
        }
        NodeKind::FunctionDef => {
            if let Some(name) = field_text(node, "name", source) {
                unit.functions.push(name);
            }
        }
        NodeKind::ClassDef => {
            if let Some(name) = field_text(node, "name", source) {
                // Last write wins for a duplicate class name
                unit.classes.insert(name, class_methods(node, source));
            }
        }
        NodeKind::Other => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, unit);
    }
}

fn field_text(node: Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)
        .map(|n| get_node_text(n, source).to_string())
        .filter(|name| !name.is_empty())
}

/// Module names of a plain import, one per alias: `import a.b, c as d`
/// yields `["a.b", "c"]`.
fn plain_import_modules(node: Node, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "dotted_name" => Some(get_node_text(child, source).to_string()),
            "aliased_import" => child
                .child_by_field_name("name")
                .map(|n| get_node_text(n, source).to_string()),
            _ => None,
        })
        .filter(|module| !module.is_empty())
        .collect()
}

/// Canonical rendering of a from-import: `from <module> import <a, b, c>`.
///
/// The imported names are comma-joined in source order; `from x import *`
/// renders the wildcard literally. Relative imports keep their source text
/// (`.`, `..pkg`) as the module.
fn render_from_import(node: Node, source: &[u8]) -> String {
    let module = node
        .child_by_field_name("module_name")
        .map(|n| get_node_text(n, source).to_string())
        .unwrap_or_default();

    let mut cursor = node.walk();
    let mut names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .filter_map(|child| match child.kind() {
            "aliased_import" => child
                .child_by_field_name("name")
                .map(|n| get_node_text(n, source).to_string()),
            _ => Some(get_node_text(child, source).to_string()),
        })
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        let mut cursor = node.walk();
        if node
            .named_children(&mut cursor)
            .any(|c| c.kind() == "wildcard_import")
        {
            names.push("*".to_string());
        }
    }

    format!("from {} import {}", module, names.join(", "))
}

/// Direct-child function definitions of a class body, in declaration order.
/// Decorated methods are unwrapped; nested classes' methods are not reached
/// here (the full walk picks their classes up separately).
fn class_methods(class_node: Node, source: &[u8]) -> Vec<String> {
    let Some(body) = class_node.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        let def = match stmt.kind() {
            "function_definition" => Some(stmt),
            "decorated_definition" => stmt
                .child_by_field_name("definition")
                .filter(|d| d.kind() == "function_definition"),
            _ => None,
        };
        if let Some(def) = def
            && let Some(name) = field_text(def, "name", source)
        {
            methods.push(name);
        }
    }
    methods
}

/// Locate the first ERROR or MISSING node for the diagnostic message.
fn describe_syntax_error(root: Node) -> String {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return format!(
                "invalid syntax at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            );
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return "invalid syntax".to_string();
            }
        }
    }
}
