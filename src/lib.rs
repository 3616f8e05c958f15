//! # json2dataclass - typed records from sample JSON
//!
//! Infers one structural schema from sample JSON documents and generates
//! record types (Python dataclasses, TypeScript interfaces or Rust structs)
//! that match it.
//!
//! ## Modules
//!
//! - **schema**: merge sample documents into a single attribute tree
//! - **codegen**: walk the tree into ordered class declarations
//! - **backend**: per-language type expressions and declaration syntax
//! - **input**: decode JSON / NDJSON samples
//!
//! ## Quick Start
//!
//! ```rust
//! use json2dataclass::{backend, generate_code, GeneratorConfig};
//! use serde_json::json;
//!
//! # fn main() -> json2dataclass::Result<()> {
//! let samples = vec![
//!     json!({"name": "Rex", "age": 3}),
//!     json!({"name": "Mia", "owner": {"id": 7}}),
//! ];
//!
//! let python = backend::get_backend("python")?;
//! let source = generate_code(&samples, &GeneratorConfig::default(), python);
//!
//! assert!(source.contains("class root_owner:"));
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod codegen;
pub mod error;
pub mod input;
pub mod schema;
pub mod types;

pub use backend::{get_backend, Backend, Renderer};
pub use codegen::{ClassDecl, CodeGenerator, FieldDecl, SchemaNotation, TypeHint, TypeTranslator};
pub use error::{Error, Result};
pub use input::InputFormat;
pub use schema::{infer_schema, SchemaBuilder};
pub use types::{GeneratorConfig, JsonType, SchemaNode};

/// Infer a schema from `samples` and generate its class declarations
pub fn generate_classes(
    samples: &[serde_json::Value],
    config: &GeneratorConfig,
    translator: &dyn TypeTranslator,
) -> Vec<ClassDecl> {
    let schema = infer_schema(samples);
    CodeGenerator::new(config.clone()).generate(&schema, translator)
}

/// Main entry point: samples in, rendered source out
pub fn generate_code(
    samples: &[serde_json::Value],
    config: &GeneratorConfig,
    backend: &dyn Backend,
) -> String {
    let classes = generate_classes(samples, config, backend.translator());
    backend.renderer().render(&classes)
}

/// Generate source from a JSON string
pub fn generate_code_from_json(
    json: &str,
    config: &GeneratorConfig,
    backend: &dyn Backend,
) -> Result<String> {
    let document = input::from_str(json)?;
    Ok(generate_code(&[document], config, backend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_python_pipeline() {
        let json = r#"{"layerOne": {"layerTwo": {"layerThree": [{"layerFour": {"finally": "x"}}]}}}"#;
        let source = generate_code_from_json(json, &GeneratorConfig::default(), &backend::PYTHON_BACKEND).unwrap();

        let expected = r#"from __future__ import annotations

from dataclasses import dataclass
from typing import Union


@dataclass
class root:
    """root dataclass"""

    layerOne: root_layerOne


@dataclass
class root_layerOne:
    """root_layerOne dataclass"""

    layerTwo: root_layerOne_layerTwo


@dataclass
class root_layerOne_layerTwo:
    """root_layerOne_layerTwo dataclass"""

    layerThree: list[root_layerOne_layerTwo_layerThree]


@dataclass
class root_layerOne_layerTwo_layerThree:
    """root_layerOne_layerTwo_layerThree dataclass"""

    layerFour: root_layerOne_layerTwo_layerThree_layerFour


@dataclass
class root_layerOne_layerTwo_layerThree_layerFour:
    """root_layerOne_layerTwo_layerThree_layerFour dataclass"""

    _finally: str
"#;
        assert_eq!(source, expected);
    }

    #[test]
    fn test_typescript_pipeline() {
        let json = r#"[{"id": 1, "tags": ["a"]}, {"id": 2, "owner": {"name": "x"}}, 42]"#;
        let source = generate_code_from_json(json, &GeneratorConfig::default(), &backend::TYPESCRIPT_BACKEND).unwrap();

        let expected = "export interface root {\n  id: number;\n  owner: root_owner;\n  tags: string[];\n}\n\nexport interface root_owner {\n  name: string;\n}\n";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_generate_classes_with_notation() {
        let samples = vec![serde_json::json!({"pets": [{"name": "Rex"}, {"name": "Mia", "type": "dog"}]})];
        let classes = generate_classes(&samples, &GeneratorConfig::default(), &SchemaNotation);

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].field("pets").unwrap().type_expr, "array<root_pets>");
        assert_eq!(classes[1].name, "root_pets");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = generate_code_from_json("{", &GeneratorConfig::default(), &backend::RUST_BACKEND);
        assert!(err.is_err());
    }
}
