//! Graph Renderer
//!
//! Projects the aggregate model into a Graphviz digraph describing lexical
//! containment: file -> function, file -> class, class -> method. Arrowheads
//! are disabled globally since the graph is a tree, not a flow graph.
//!
//! Node identifiers are derived from sanitized paths and member names; a
//! per-run registry appends a numeric disambiguator whenever two different
//! inputs sanitize to the same identifier.

use std::collections::{HashMap, HashSet};

use crate::types::ModuleMap;

const FILE_ATTRS: &str = r#"fillcolor="lightblue", shape=box"#;
const CLASS_ATTRS: &str = r#"fillcolor="lightgreen", shape=ellipse"#;
const FUNCTION_ATTRS: &str = r#"fillcolor="lightyellow", shape=note"#;

/// Render the model as a single DOT digraph.
///
/// Functions that appear in a class's method list are drawn only under the
/// class; the renderer derives containment solely from `functions` and
/// `classes` and does not attempt to reconstruct lexical nesting beyond
/// that.
pub fn render_dot(model: &ModuleMap) -> String {
    let mut lines = vec![
        "digraph G {".to_string(),
        "    rankdir=LR;".to_string(),
        r#"    node [style=filled, fontname="Helvetica"];"#.to_string(),
        "    edge [arrowhead=none];".to_string(),
    ];

    let mut ids = IdRegistry::default();

    for (path, unit) in model {
        let file_id = ids.claim(sanitize(path));
        lines.push(format!(
            "    {} [{}, label=\"{}\"];",
            file_id,
            FILE_ATTRS,
            escape_label(path)
        ));

        let method_names: HashSet<&str> = unit
            .classes
            .values()
            .flatten()
            .map(String::as_str)
            .collect();

        for func in &unit.functions {
            if method_names.contains(func.as_str()) {
                continue;
            }
            let func_id = ids.claim(format!("{}_func_{}", file_id, sanitize(func)));
            lines.push(format!(
                "    {} [{}, label=\"{}()\"];",
                func_id,
                FUNCTION_ATTRS,
                escape_label(func)
            ));
            lines.push(format!("    {} -> {};", file_id, func_id));
        }

        for (class, methods) in &unit.classes {
            let class_id = ids.claim(format!("{}_cls_{}", file_id, sanitize(class)));
            lines.push(format!(
                "    {} [{}, label=\"{}\"];",
                class_id,
                CLASS_ATTRS,
                escape_label(class)
            ));
            lines.push(format!("    {} -> {};", file_id, class_id));

            for method in methods {
                let method_id = ids.claim(format!("{}_meth_{}", class_id, sanitize(method)));
                lines.push(format!(
                    "    {} [{}, label=\"{}()\"];",
                    method_id,
                    FUNCTION_ATTRS,
                    escape_label(method)
                ));
                lines.push(format!("    {} -> {};", class_id, method_id));
            }
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Map a path or member name onto the DOT identifier alphabet.
fn sanitize(raw: &str) -> String {
    let mut id: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}

fn escape_label(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Tracks identifiers handed out so far and disambiguates collisions.
#[derive(Default)]
struct IdRegistry {
    used: HashMap<String, usize>,
}

impl IdRegistry {
    fn claim(&mut self, candidate: String) -> String {
        if let Some(count) = self.used.get(&candidate).copied() {
            let next = count + 1;
            self.used.insert(candidate.clone(), next);
            // The synthesized id may itself collide with a literal candidate
            return self.claim(format!("{}_{}", candidate, next));
        }
        self.used.insert(candidate.clone(), 1);
        candidate
    }
}
