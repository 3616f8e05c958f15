//! TypeScript interface backend

use super::{is_identifier, sanitize_identifier, Backend, Renderer};
use crate::codegen::{ClassDecl, TypeHint, TypeTranslator};
use crate::types::JsonType;

/// Emits `export interface` declarations. Interfaces may reference each
/// other regardless of declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptBackend;

pub static TYPESCRIPT_BACKEND: TypeScriptBackend = TypeScriptBackend;

fn interface_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        sanitize_identifier(name)
    }
}

/// Property key, quoted when it is not a plain identifier
fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}

impl TypeTranslator for TypeScriptBackend {
    fn type_expression(&self, kind: JsonType, hint: TypeHint<'_>) -> String {
        match (kind, hint) {
            (JsonType::String, _) => "string".to_string(),
            (JsonType::Number, _) => "number".to_string(),
            (JsonType::Boolean, _) => "boolean".to_string(),
            (JsonType::Object, TypeHint::Class(name)) => interface_name(name),
            (JsonType::Array, TypeHint::Class(name)) => format!("{}[]", interface_name(name)),
            (JsonType::Array, TypeHint::Element(element)) => {
                format!("{}[]", self.type_expression(element, TypeHint::None))
            }
            (JsonType::Array, _) => "any[]".to_string(),
            (JsonType::Object, _) | (JsonType::Null, _) => "any".to_string(),
        }
    }
}

impl Renderer for TypeScriptBackend {
    fn render(&self, classes: &[ClassDecl]) -> String {
        let mut blocks = Vec::with_capacity(classes.len());

        for class in classes {
            let mut block = format!("export interface {} {{\n", interface_name(&class.name));
            for field in &class.fields {
                block.push_str(&format!("  {}: {};\n", property_key(&field.name), field.type_expr));
            }
            block.push_str("}\n");
            blocks.push(block);
        }

        blocks.join("\n")
    }
}

impl Backend for TypeScriptBackend {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn translator(&self) -> &dyn TypeTranslator {
        self
    }

    fn renderer(&self) -> &dyn Renderer {
        self
    }
}
