//! Schema inference
//!
//! Folds sample JSON documents into a single [`SchemaNode`](crate::types::SchemaNode)
//! tree describing their shared structure.

pub mod builder;

pub use builder::{describe, infer_schema, merge_object, Document, SchemaBuilder, TypeConflict};
