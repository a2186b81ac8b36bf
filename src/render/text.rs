//! Text Renderer
//!
//! Projects the aggregate model into a human-readable indented listing.
//! Pure function of (model, config): deterministic, byte-identical on
//! repeat, suitable for golden-output testing.

use crate::config::RenderConfig;
use crate::constants::render::TEXT_INDENT;
use crate::types::ModuleMap;

/// Render every file block in model order.
///
/// Per file: a `path:` header, an `Imports:` section when imports are
/// present (and not excluded by config), one line per function and class,
/// methods indented under their class, and a trailing blank line.
pub fn render_text(model: &ModuleMap, config: &RenderConfig) -> String {
    let mut out = String::new();

    for (path, unit) in model {
        out.push_str(path);
        out.push_str(":\n");

        if !config.exclude_imports
            && let Some(imports) = &unit.imports
            && !imports.is_empty()
        {
            out.push_str(TEXT_INDENT);
            out.push_str("Imports:\n");
            for import in imports {
                out.push_str(&format!("{}  - {}\n", TEXT_INDENT, import));
            }
        }

        for func in &unit.functions {
            out.push_str(&format!("{}{} {}()\n", TEXT_INDENT, config.func_symbol, func));
        }

        for (class, methods) in &unit.classes {
            out.push_str(&format!("{}{} {}\n", TEXT_INDENT, config.class_symbol, class));
            for method in methods {
                out.push_str(&format!("{}  - {}()\n", TEXT_INDENT, method));
            }
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StructuralUnit;

    fn sample_model() -> ModuleMap {
        let mut unit = StructuralUnit::new(false);
        unit.imports = Some(vec!["import os".to_string()]);
        unit.functions = vec!["f".to_string(), "m".to_string()];
        unit.classes
            .insert("C".to_string(), vec!["m".to_string()]);

        let mut model = ModuleMap::new();
        model.insert("app.py".to_string(), unit);
        model
    }

    #[test]
    fn test_full_file_block() {
        let out = render_text(&sample_model(), &RenderConfig::default());
        assert_eq!(
            out,
            "app.py:\n    Imports:\n      - import os\n    ƒ f()\n    ƒ m()\n    ℂ C\n      - m()\n\n"
        );
    }

    #[test]
    fn test_custom_symbols() {
        let config = RenderConfig {
            func_symbol: "fn".to_string(),
            class_symbol: "cls".to_string(),
            ..RenderConfig::default()
        };
        let out = render_text(&sample_model(), &config);
        assert!(out.contains("    fn f()"));
        assert!(out.contains("    cls C"));
    }

    #[test]
    fn test_exclude_imports_drops_section() {
        let config = RenderConfig {
            exclude_imports: true,
            ..RenderConfig::default()
        };
        let out = render_text(&sample_model(), &config);
        assert!(!out.contains("Imports:"));
        assert!(out.contains("ƒ f()"));
    }

    #[test]
    fn test_empty_import_list_has_no_section() {
        let mut model = ModuleMap::new();
        model.insert("bare.py".to_string(), StructuralUnit::new(false));

        let out = render_text(&model, &RenderConfig::default());
        assert_eq!(out, "bare.py:\n\n");
    }

    #[test]
    fn test_block_count_matches_file_count() {
        let mut model = sample_model();
        model.insert("second.py".to_string(), StructuralUnit::new(false));
        model.insert("third.py".to_string(), StructuralUnit::new(false));

        let out = render_text(&model, &RenderConfig::default());
        let headers = out
            .lines()
            .filter(|l| !l.starts_with(' ') && l.ends_with(':'))
            .count();
        assert_eq!(headers, model.len());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let model = sample_model();
        let config = RenderConfig::default();
        assert_eq!(render_text(&model, &config), render_text(&model, &config));
    }
}
