//! Class generation from an inferred schema tree
//!
//! The generator walks the tree depth-first, one class per object node.
//! A class's slot in the output is reserved before its fields are visited,
//! so a parent always precedes the classes nested under it. Fields are
//! visited in name order, making the output independent of JSON key order.

use crate::codegen::translator::{TypeHint, TypeTranslator};
use crate::types::{GeneratorConfig, JsonType, SchemaNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One declared attribute of a generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name exactly as it appeared in the JSON
    pub name: String,

    /// Type expression produced by the translator
    pub type_expr: String,
}

/// A generated class: its name and its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Turns a schema tree into an ordered list of class declarations
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    config: GeneratorConfig,
}

impl CodeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        CodeGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every class reachable from `root`.
    ///
    /// A root that is not an object yields no classes.
    pub fn generate(&self, root: &SchemaNode, translator: &dyn TypeTranslator) -> Vec<ClassDecl> {
        let mut classes: IndexMap<String, Vec<FieldDecl>> = IndexMap::new();
        self.emit_class(&self.config.root_name, root, translator, &mut classes);

        classes
            .into_iter()
            .map(|(name, fields)| ClassDecl { name, fields })
            .collect()
    }

    /// Emit the class `name` for `node`, then its nested classes as they are reached.
    ///
    /// Two paths that synthesize the same name share one entry.
    fn emit_class(
        &self,
        name: &str,
        node: &SchemaNode,
        translator: &dyn TypeTranslator,
        classes: &mut IndexMap<String, Vec<FieldDecl>>,
    ) {
        if !node.is_object() {
            debug!(class = name, kind = %node.kind, "not an object, no class emitted");
            return;
        }

        classes.entry(name.to_string()).or_default();

        for field in node.sorted_fields() {
            let type_expr = match (field.kind, field.element()) {
                (JsonType::Object, _) => {
                    let nested = self.config.nested_name(name, &field.name);
                    self.emit_class(&nested, field, translator, classes);
                    translator.type_expression(JsonType::Object, TypeHint::Class(&nested))
                }
                (JsonType::Array, Some(element)) if element.is_object() => {
                    let nested = self.config.nested_name(name, &field.name);
                    self.emit_class(&nested, element, translator, classes);
                    translator.type_expression(JsonType::Array, TypeHint::Class(&nested))
                }
                (JsonType::Array, Some(element)) => {
                    translator.type_expression(JsonType::Array, TypeHint::Element(element.kind))
                }
                (kind, _) => translator.type_expression(kind, TypeHint::None),
            };

            classes.entry(name.to_string()).or_default().push(FieldDecl {
                name: field.name.clone(),
                type_expr,
            });
        }

        debug!(class = name, fields = node.children.len(), "class emitted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::translator::SchemaNotation;
    use crate::schema::infer_schema;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn generate(samples: &[serde_json::Value]) -> Vec<ClassDecl> {
        let schema = infer_schema(samples);
        CodeGenerator::default().generate(&schema, &SchemaNotation)
    }

    fn class_names(classes: &[ClassDecl]) -> Vec<&str> {
        classes.iter().map(|c| c.name.as_str()).collect()
    }

    fn fields(class: &ClassDecl) -> Vec<(&str, &str)> {
        class
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.type_expr.as_str()))
            .collect()
    }

    #[test]
    fn test_flat_object_sorted_fields() {
        let classes = generate(&[json!({"name": "bob", "age": 3})]);
        assert_eq!(class_names(&classes), vec!["root"]);
        assert_eq!(fields(&classes[0]), vec![("age", "number"), ("name", "string")]);
    }

    #[test]
    fn test_top_level_array_union() {
        let classes = generate(&[json!([{"a": 1}, {"a": 1, "b": "x"}])]);
        assert_eq!(class_names(&classes), vec!["root"]);
        assert_eq!(fields(&classes[0]), vec![("a", "number"), ("b", "string")]);
    }

    #[test]
    fn test_array_of_objects_gets_class() {
        let classes = generate(&[json!({
            "pets": [{"name": "Rex"}, {"name": "Mia", "type": "dog"}]
        })]);
        assert_eq!(class_names(&classes), vec!["root", "root_pets"]);
        assert_eq!(fields(&classes[0]), vec![("pets", "array<root_pets>")]);
        assert_eq!(fields(&classes[1]), vec![("name", "string"), ("type", "string")]);
    }

    #[test]
    fn test_deep_nesting_in_ancestor_order() {
        let classes = generate(&[json!({
            "layerOne": {"layerTwo": {"layerThree": [{"layerFour": {"finally": "x"}}]}}
        })]);

        assert_eq!(
            class_names(&classes),
            vec![
                "root",
                "root_layerOne",
                "root_layerOne_layerTwo",
                "root_layerOne_layerTwo_layerThree",
                "root_layerOne_layerTwo_layerThree_layerFour",
            ]
        );
        assert_eq!(fields(&classes[0]), vec![("layerOne", "root_layerOne")]);
        assert_eq!(fields(&classes[1]), vec![("layerTwo", "root_layerOne_layerTwo")]);
        assert_eq!(
            fields(&classes[2]),
            vec![("layerThree", "array<root_layerOne_layerTwo_layerThree>")]
        );
        assert_eq!(
            fields(&classes[3]),
            vec![("layerFour", "root_layerOne_layerTwo_layerThree_layerFour")]
        );
        assert_eq!(fields(&classes[4]), vec![("finally", "string")]);
    }

    #[test]
    fn test_nested_classes_interleave_by_field_order() {
        let classes = generate(&[json!({
            "b": {"inner": {"v": 1}},
            "a": {"w": true}
        })]);
        assert_eq!(class_names(&classes), vec!["root", "root_a", "root_b", "root_b_inner"]);
    }

    #[test]
    fn test_same_field_name_under_different_parents() {
        let classes = generate(&[json!({"a": {"x": {"p": 1}}, "b": {"x": {"q": 2}}})]);
        assert_eq!(class_names(&classes), vec!["root", "root_a", "root_a_x", "root_b", "root_b_x"]);
        assert_eq!(fields(&classes[2]), vec![("p", "number")]);
        assert_eq!(fields(&classes[4]), vec![("q", "number")]);
    }

    #[test]
    fn test_output_independent_of_key_order() {
        let one = generate(&[json!({"z": 1, "m": {"k": "v", "b": [1]}, "a": null})]);
        let two = generate(&[json!({"a": null, "m": {"b": [1], "k": "v"}, "z": 1})]);
        assert_eq!(one, two);

        let schema = infer_schema(&[json!({"z": 1, "m": {"k": "v"}})]);
        let generator = CodeGenerator::default();
        assert_eq!(
            generator.generate(&schema, &SchemaNotation),
            generator.generate(&schema, &SchemaNotation)
        );
    }

    #[test]
    fn test_scalar_arrays_and_fallbacks() {
        let classes = generate(&[json!({
            "tags": ["a", "b"],
            "empty": [],
            "grid": [[1, 2]],
            "nothing": null
        })]);
        assert_eq!(class_names(&classes), vec!["root"]);
        assert_eq!(
            fields(&classes[0]),
            vec![
                ("empty", "array<any>"),
                ("grid", "array<array<any>>"),
                ("nothing", "any"),
                ("tags", "array<string>"),
            ]
        );
    }

    #[test]
    fn test_null_then_number_keeps_fallback() {
        let classes = generate(&[json!({"x": null}), json!({"x": 5})]);
        assert_eq!(fields(&classes[0]), vec![("x", "any")]);
    }

    #[test]
    fn test_non_object_root_is_noop() {
        let node = SchemaNode::new("root", JsonType::String);
        assert!(CodeGenerator::default().generate(&node, &SchemaNotation).is_empty());
    }

    #[test]
    fn test_empty_nested_object_still_declared() {
        let classes = generate(&[json!({"meta": {}})]);
        assert_eq!(class_names(&classes), vec!["root", "root_meta"]);
        assert!(classes[1].fields.is_empty());
    }

    #[test]
    fn test_custom_root_and_separator() {
        let config = GeneratorConfig::default().with_root_name("Api").with_separator("__");
        let schema = infer_schema(&[json!({"user": {"id": 1}})]);
        let classes = CodeGenerator::new(config).generate(&schema, &SchemaNotation);
        assert_eq!(class_names(&classes), vec!["Api", "Api__user"]);
        assert_eq!(classes[0].field("user").unwrap().type_expr, "Api__user");
    }
}
