use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name given to the synthetic node that holds the top-level document
pub const ROOT_NAME: &str = "root";

/// Name of the single child describing an array's element schema
pub const ARRAY_CONTENT: &str = "content";

/// The six kinds of JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Object,
    Array,
    Boolean,
    Null,
}

impl JsonType {
    /// Integers and floats both collapse into `Number`
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed attribute position in the document tree.
///
/// Objects hold one child per field, in first-seen order. Arrays hold a
/// single child named [`ARRAY_CONTENT`] once an array has been observed.
/// Scalars hold nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Attribute name as it appeared in the JSON
    pub name: String,

    /// Kind observed first at this position
    pub kind: JsonType,

    /// Owned children, keyed by name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, SchemaNode>,
}

impl SchemaNode {
    pub fn new(name: impl Into<String>, kind: JsonType) -> Self {
        SchemaNode {
            name: name.into(),
            kind,
            children: IndexMap::new(),
        }
    }

    /// Empty object node used as the inference root
    pub fn root() -> Self {
        SchemaNode::new(ROOT_NAME, JsonType::Object)
    }

    pub fn is_object(&self) -> bool {
        self.kind == JsonType::Object
    }

    pub fn is_array(&self) -> bool {
        self.kind == JsonType::Array
    }

    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.get(name)
    }

    /// Element schema of an array node
    pub fn element(&self) -> Option<&SchemaNode> {
        if self.is_array() {
            self.children.get(ARRAY_CONTENT)
        } else {
            None
        }
    }

    pub fn element_kind(&self) -> Option<JsonType> {
        self.element().map(|e| e.kind)
    }

    /// Field nodes of an object, empty for any other kind
    pub fn fields(&self) -> impl Iterator<Item = &SchemaNode> {
        let fields = if self.is_object() { Some(self.children.values()) } else { None };
        fields.into_iter().flatten()
    }

    /// Fields sorted by name
    pub fn sorted_fields(&self) -> Vec<&SchemaNode> {
        let mut fields: Vec<&SchemaNode> = self.fields().collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        fields
    }
}

/// Configuration for code generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Class name given to the top-level document
    pub root_name: String,

    /// Separator between ancestor names in synthesized class names
    pub separator: String,
}

impl GeneratorConfig {
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Name of the class generated for `field` nested under `parent`
    pub fn nested_name(&self, parent: &str, field: &str) -> String {
        format!("{}{}{}", parent, self.separator, field)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            root_name: String::from(ROOT_NAME),
            separator: String::from("_"),
        }
    }
}
