//! Python dataclass backend

use super::{is_identifier, sanitize_identifier, Backend, IdentifierScope, Renderer};
use crate::codegen::{ClassDecl, TypeHint, TypeTranslator};
use crate::types::JsonType;

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Emits `@dataclass` classes.
///
/// The file starts with `from __future__ import annotations`, so a parent
/// class may name a nested class that is declared further down.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonBackend;

pub static PYTHON_BACKEND: PythonBackend = PythonBackend;

/// Python identifier for a JSON field or class name; keywords get a leading `_`
pub fn python_identifier(name: &str) -> String {
    if PYTHON_KEYWORDS.contains(&name) {
        return format!("_{}", name);
    }
    if is_identifier(name) {
        name.to_string()
    } else {
        sanitize_identifier(name)
    }
}

impl TypeTranslator for PythonBackend {
    fn type_expression(&self, kind: JsonType, hint: TypeHint<'_>) -> String {
        match (kind, hint) {
            (JsonType::String, _) => "str".to_string(),
            (JsonType::Number, _) => "Union[int, float]".to_string(),
            (JsonType::Boolean, _) => "bool".to_string(),
            (JsonType::Object, TypeHint::Class(name)) => python_identifier(name),
            (JsonType::Array, TypeHint::Class(name)) => format!("list[{}]", python_identifier(name)),
            (JsonType::Array, TypeHint::Element(element)) => {
                format!("list[{}]", self.type_expression(element, TypeHint::None))
            }
            (JsonType::Array, _) => "list".to_string(),
            (JsonType::Object, _) | (JsonType::Null, _) => "object".to_string(),
        }
    }
}

impl Renderer for PythonBackend {
    fn render(&self, classes: &[ClassDecl]) -> String {
        let mut out = String::from(
            "from __future__ import annotations\n\nfrom dataclasses import dataclass\nfrom typing import Union\n",
        );

        for class in classes {
            let name = python_identifier(&class.name);
            out.push_str("\n\n@dataclass\n");
            out.push_str(&format!("class {}:\n", name));
            out.push_str(&format!("    \"\"\"{} dataclass\"\"\"\n", name));

            if !class.fields.is_empty() {
                out.push('\n');
            }
            let mut scope = IdentifierScope::new();
            for field in &class.fields {
                let ident = scope.claim(python_identifier(&field.name));
                out.push_str(&format!("    {}: {}\n", ident, field.type_expr));
            }
        }

        out
    }
}

impl Backend for PythonBackend {
    fn name(&self) -> &'static str {
        "python"
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn translator(&self) -> &dyn TypeTranslator {
        self
    }

    fn renderer(&self) -> &dyn Renderer {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::FieldDecl;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_expressions() {
        let t = PythonBackend;
        assert_eq!(t.type_expression(JsonType::String, TypeHint::None), "str");
        assert_eq!(t.type_expression(JsonType::Number, TypeHint::None), "Union[int, float]");
        assert_eq!(
            t.type_expression(JsonType::Array, TypeHint::Element(JsonType::Number)),
            "list[Union[int, float]]"
        );
        assert_eq!(t.type_expression(JsonType::Null, TypeHint::None), "object");
        assert_eq!(t.type_expression(JsonType::Array, TypeHint::Element(JsonType::Boolean)), "list[bool]");
        assert_eq!(t.type_expression(JsonType::Array, TypeHint::Class("root_pets")), "list[root_pets]");
        assert_eq!(t.type_expression(JsonType::Object, TypeHint::Class("root_a-b")), "root_a_b");
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(python_identifier("finally"), "_finally");
        assert_eq!(python_identifier("class"), "_class");
        assert_eq!(python_identifier("first-name"), "first_name");
        assert_eq!(python_identifier("layerOne"), "layerOne");
    }

    #[test]
    fn test_render() {
        let classes = vec![
            ClassDecl {
                name: "root".to_string(),
                fields: vec![FieldDecl {
                    name: "meta".to_string(),
                    type_expr: "root_meta".to_string(),
                }],
            },
            ClassDecl {
                name: "root_meta".to_string(),
                fields: vec![],
            },
        ];

        let expected = r#"from __future__ import annotations

from dataclasses import dataclass
from typing import Union


@dataclass
class root:
    """root dataclass"""

    meta: root_meta


@dataclass
class root_meta:
    """root_meta dataclass"""
"#;
        assert_eq!(PythonBackend.render(&classes), expected);
    }

    #[test]
    fn test_render_keeps_colliding_fields_apart() {
        let classes = vec![ClassDecl {
            name: "root".to_string(),
            fields: vec![
                FieldDecl { name: "_finally".to_string(), type_expr: "str".to_string() },
                FieldDecl { name: "a-b".to_string(), type_expr: "bool".to_string() },
                FieldDecl { name: "a_b".to_string(), type_expr: "str".to_string() },
                FieldDecl { name: "finally".to_string(), type_expr: "str".to_string() },
            ],
        }];

        let rendered = PythonBackend.render(&classes);
        assert!(rendered.contains("    _finally: str\n"));
        assert!(rendered.contains("    a_b: bool\n"));
        assert!(rendered.contains("    a_b_2: str\n"));
        assert!(rendered.contains("    _finally_2: str\n"));
    }
}
