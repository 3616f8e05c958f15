//! Rust serde struct backend

use super::{is_identifier, sanitize_identifier, Backend, IdentifierScope, Renderer};
use crate::codegen::{ClassDecl, TypeHint, TypeTranslator};
use crate::types::JsonType;

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Emits `serde` structs. Struct names keep the synthesized class names,
/// so the file opts out of the naming lints.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend;

pub static RUST_BACKEND: RustBackend = RustBackend;

fn struct_name(name: &str) -> String {
    if is_identifier(name) && !RUST_KEYWORDS.contains(&name) {
        name.to_string()
    } else {
        format!("{}_", sanitize_identifier(name))
    }
}

/// Field identifier, and whether serde needs a rename to find the JSON key
fn field_ident(name: &str) -> (String, bool) {
    if RUST_KEYWORDS.contains(&name) || name == "_" {
        (format!("{}_", name), true)
    } else if is_identifier(name) {
        (name.to_string(), false)
    } else {
        (sanitize_identifier(name), true)
    }
}

impl TypeTranslator for RustBackend {
    fn type_expression(&self, kind: JsonType, hint: TypeHint<'_>) -> String {
        match (kind, hint) {
            (JsonType::String, _) => "String".to_string(),
            (JsonType::Number, _) => "f64".to_string(),
            (JsonType::Boolean, _) => "bool".to_string(),
            (JsonType::Object, TypeHint::Class(name)) => struct_name(name),
            (JsonType::Array, TypeHint::Class(name)) => format!("Vec<{}>", struct_name(name)),
            (JsonType::Array, TypeHint::Element(element)) => {
                format!("Vec<{}>", self.type_expression(element, TypeHint::None))
            }
            (JsonType::Array, _) => "Vec<serde_json::Value>".to_string(),
            (JsonType::Object, _) | (JsonType::Null, _) => "serde_json::Value".to_string(),
        }
    }
}

impl Renderer for RustBackend {
    fn render(&self, classes: &[ClassDecl]) -> String {
        let mut out = String::from("#![allow(non_camel_case_types, non_snake_case)]\n\nuse serde::{Deserialize, Serialize};\n");

        for class in classes {
            out.push_str("\n#[derive(Debug, Clone, Serialize, Deserialize)]\n");
            out.push_str(&format!("pub struct {} {{\n", struct_name(&class.name)));
            let mut scope = IdentifierScope::new();
            for field in &class.fields {
                let (base, renamed) = field_ident(&field.name);
                let ident = scope.claim(base.clone());
                if renamed || ident != base {
                    let key = serde_json::Value::String(field.name.clone()).to_string();
                    out.push_str(&format!("    #[serde(rename = {})]\n", key));
                }
                out.push_str(&format!("    pub {}: {},\n", ident, field.type_expr));
            }
            out.push_str("}\n");
        }

        out
    }
}

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn translator(&self) -> &dyn TypeTranslator {
        self
    }

    fn renderer(&self) -> &dyn Renderer {
        self
    }
}
