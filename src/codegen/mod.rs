//! Code generation
//!
//! Walks an inferred schema tree and produces class declarations. The only
//! language-specific piece is the [`TypeTranslator`] passed in; rendering the
//! declarations to source text is left to a [`Backend`](crate::backend::Backend).

pub mod generator;
pub mod translator;
pub mod writer;

pub use generator::{ClassDecl, CodeGenerator, FieldDecl};
pub use translator::{SchemaNotation, TypeHint, TypeTranslator};
pub use writer::{write_to_path, SourceWriter};
