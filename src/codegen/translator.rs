//! Type expressions for a target language

use crate::types::JsonType;

/// Extra information needed to render a container type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint<'a> {
    /// Nothing beyond the kind is known
    None,
    /// Kind of an array's elements, when they get no class of their own
    Element(JsonType),
    /// Generated class describing an object, or the elements of an array of objects
    Class(&'a str),
}

/// Maps an inferred kind to a type expression in one target language.
///
/// Implementations must be pure. `Null` and anything the language cannot
/// express precisely fall back to its "any" type.
pub trait TypeTranslator {
    fn type_expression(&self, kind: JsonType, hint: TypeHint<'_>) -> String;
}

/// Language-neutral notation: `string`, `number`, `boolean`, `any`,
/// class names for objects and `array<T>` for arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaNotation;

impl TypeTranslator for SchemaNotation {
    fn type_expression(&self, kind: JsonType, hint: TypeHint<'_>) -> String {
        match (kind, hint) {
            (JsonType::String, _) => "string".to_string(),
            (JsonType::Number, _) => "number".to_string(),
            (JsonType::Boolean, _) => "boolean".to_string(),
            (JsonType::Object, TypeHint::Class(name)) => name.to_string(),
            (JsonType::Array, TypeHint::Class(name)) => format!("array<{}>", name),
            (JsonType::Array, TypeHint::Element(element)) => {
                format!("array<{}>", self.type_expression(element, TypeHint::None))
            }
            (JsonType::Array, _) => "array<any>".to_string(),
            (JsonType::Object, _) | (JsonType::Null, _) => "any".to_string(),
        }
    }
}
