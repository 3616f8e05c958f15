//! Schema builder that merges sample documents into one attribute tree
//!
//! Every sample is folded into the same [`SchemaNode`] root. Fields are only
//! ever added, never removed, and a field keeps the kind it was first seen
//! with. Nested objects (including the objects inside arrays) are merged
//! recursively, which is how repeated samples accumulate the union of their
//! fields.

use crate::types::{JsonType, SchemaNode, ARRAY_CONTENT};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Shape of a top-level document
#[derive(Debug, Clone, Copy)]
pub enum Document<'a> {
    /// A single object, merged once into the root
    Object(&'a Map<String, Value>),
    /// An array whose object elements are each merged into the root
    Array(&'a [Value]),
    /// A top-level scalar, which carries no fields
    Scalar(JsonType),
}

impl<'a> Document<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(obj) => Document::Object(obj),
            Value::Array(arr) => Document::Array(arr),
            other => Document::Scalar(JsonType::from_value(other)),
        }
    }
}

/// A later observation that disagreed with the kind already recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeConflict {
    /// Dotted path of the field, `[]` marking array elements
    pub path: String,
    pub kept: JsonType,
    pub ignored: JsonType,
}

/// Accumulates sample documents into a single schema tree
#[derive(Debug)]
pub struct SchemaBuilder {
    root: SchemaNode,
    document_count: usize,
    conflicts: Vec<TypeConflict>,
}

impl SchemaBuilder {
    /// Create a builder with an empty root object
    pub fn new() -> Self {
        SchemaBuilder {
            root: SchemaNode::root(),
            document_count: 0,
            conflicts: Vec::new(),
        }
    }

    /// Merge one decoded document into the root
    pub fn add_value(&mut self, value: &Value) {
        self.document_count += 1;

        match Document::classify(value) {
            Document::Object(obj) => {
                merge_object_at(&mut self.root, obj, "", &mut self.conflicts);
            }
            Document::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    match item {
                        Value::Object(obj) => {
                            merge_object_at(&mut self.root, obj, "", &mut self.conflicts);
                        }
                        other => {
                            trace!(index = idx, kind = %JsonType::from_value(other), "skipping non-object top-level element");
                        }
                    }
                }
            }
            Document::Scalar(kind) => {
                debug!(%kind, "top-level scalar carries no fields, nothing merged");
            }
        }
    }

    /// Merge several documents in order
    pub fn add_values(&mut self, values: &[Value]) {
        for value in values {
            self.add_value(value);
        }
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Number of documents passed to [`add_value`](Self::add_value)
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Conflicting observations ignored so far, in the order they were seen
    pub fn conflicts(&self) -> &[TypeConflict] {
        &self.conflicts
    }

    /// Finish inference and hand back the tree
    pub fn build(self) -> SchemaNode {
        debug!(
            documents = self.document_count,
            fields = self.root.children.len(),
            conflicts = self.conflicts.len(),
            "schema inference finished"
        );
        self.root
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge every field of `object` into `node`
pub fn merge_object(node: &mut SchemaNode, object: &Map<String, Value>) {
    let mut conflicts = Vec::new();
    merge_object_at(node, object, "", &mut conflicts);
}

fn merge_object_at(
    node: &mut SchemaNode,
    object: &Map<String, Value>,
    path: &str,
    conflicts: &mut Vec<TypeConflict>,
) {
    for (key, value) in object.iter() {
        let field_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path, key)
        };
        merge_field(node, key, value, &field_path, conflicts);
    }
}

fn merge_field(
    parent: &mut SchemaNode,
    name: &str,
    value: &Value,
    path: &str,
    conflicts: &mut Vec<TypeConflict>,
) {
    let kind = JsonType::from_value(value);

    if let Some(existing) = parent.children.get_mut(name) {
        match value {
            Value::Object(obj) if existing.is_object() => {
                merge_object_at(existing, obj, path, conflicts);
            }
            Value::Array(items) if existing.is_array() => {
                merge_array_elements(existing, items, path, conflicts);
            }
            _ if existing.kind != kind => {
                debug!(path, kept = %existing.kind, ignored = %kind, "conflicting kind ignored, first observation wins");
                conflicts.push(TypeConflict {
                    path: path.to_string(),
                    kept: existing.kind,
                    ignored: kind,
                });
            }
            _ => {}
        }
        return;
    }

    let child = match value {
        Value::Object(obj) => {
            let mut child = SchemaNode::new(name, JsonType::Object);
            merge_object_at(&mut child, obj, path, conflicts);
            child
        }
        Value::Array(items) => {
            let mut child = SchemaNode::new(name, JsonType::Array);
            merge_array_elements(&mut child, items, path, conflicts);
            child
        }
        _ => SchemaNode::new(name, kind),
    };
    parent.children.insert(name.to_string(), child);
}

/// Record or extend the element schema of an array node.
///
/// The element kind comes from the first element of the first array seen;
/// an empty array falls back to `Null`. When the element kind is `Object`,
/// every object element is merged into the element schema.
fn merge_array_elements(
    node: &mut SchemaNode,
    items: &[Value],
    path: &str,
    conflicts: &mut Vec<TypeConflict>,
) {
    let first_kind = items.first().map(JsonType::from_value);
    let element_path = format!("{}[]", path);

    let content = node
        .children
        .entry(ARRAY_CONTENT.to_string())
        .or_insert_with(|| SchemaNode::new(ARRAY_CONTENT, first_kind.unwrap_or(JsonType::Null)));

    if let Some(kind) = first_kind {
        if kind != content.kind {
            debug!(path = %element_path, kept = %content.kind, ignored = %kind, "conflicting element kind ignored, first observation wins");
            conflicts.push(TypeConflict {
                path: element_path.clone(),
                kept: content.kind,
                ignored: kind,
            });
        }
    }

    if !content.is_object() {
        return;
    }

    for item in items {
        if let Value::Object(obj) = item {
            merge_object_at(content, obj, &element_path, conflicts);
        }
    }
}

/// Infer one schema tree from a list of sample documents
pub fn infer_schema(examples: &[Value]) -> SchemaNode {
    let mut builder = SchemaBuilder::new();
    builder.add_values(examples);
    builder.build()
}

/// Debug view of a schema tree, one line per node
pub fn describe(node: &SchemaNode) -> String {
    let mut out = String::new();
    describe_into(node, 0, &mut out);
    out
}

fn describe_into(node: &SchemaNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&node.name);
    out.push_str(": ");
    out.push_str(node.kind.as_str());
    out.push('\n');
    for child in node.children.values() {
        describe_into(child, depth + 1, out);
    }
}
