//! Target-language backends.
//!
//! A backend pairs a [`TypeTranslator`] with a [`Renderer`] that turns the
//! generator's class list into source text. Built-in backends are looked up
//! by name with [`get_backend`].

pub mod python;
pub mod rust;
pub mod typescript;

pub use python::{PythonBackend, PYTHON_BACKEND};
pub use rust::{RustBackend, RUST_BACKEND};
pub use typescript::{TypeScriptBackend, TYPESCRIPT_BACKEND};

use crate::codegen::{ClassDecl, TypeTranslator};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap()
});

static INVALID_IDENTIFIER_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_]").unwrap()
});

/// Declaration syntax for one target language
pub trait Renderer {
    /// Render all classes, in the given order, as one source file
    fn render(&self, classes: &[ClassDecl]) -> String;
}

/// A code generation backend.
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "python")
    fn name(&self) -> &'static str;

    /// File extension for generated code (e.g., "py")
    fn extension(&self) -> &'static str;

    fn translator(&self) -> &dyn TypeTranslator;

    fn renderer(&self) -> &dyn Renderer;
}

static BACKENDS: [&dyn Backend; 3] = [&PYTHON_BACKEND, &TYPESCRIPT_BACKEND, &RUST_BACKEND];

/// All built-in backends
pub fn backends() -> &'static [&'static dyn Backend] {
    &BACKENDS
}

/// Look up a built-in backend by name
pub fn get_backend(name: &str) -> Result<&'static dyn Backend> {
    backends()
        .iter()
        .find(|b| b.name() == name)
        .copied()
        .ok_or_else(|| Error::UnknownBackend {
            name: name.to_string(),
            available: backend_names().join(", "),
        })
}

pub fn backend_names() -> Vec<&'static str> {
    backends().iter().map(|b| b.name()).collect()
}

/// Whether `name` is an ASCII identifier in C-like languages
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// Replace characters that cannot appear in an identifier with `_`,
/// prefixing `_` when the result would start with a digit or be empty.
pub fn sanitize_identifier(name: &str) -> String {
    let cleaned = INVALID_IDENTIFIER_CHAR_REGEX.replace_all(name, "_");
    match cleaned.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", cleaned),
        Some(_) => cleaned.into_owned(),
    }
}

/// Identifiers already declared in one class.
///
/// Sanitizing can map distinct JSON keys (`a-b` and `a_b`) to one
/// identifier; later claims get a `_2`, `_3`, ... suffix.
#[derive(Debug, Default)]
pub struct IdentifierScope {
    used: HashSet<String>,
}

impl IdentifierScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `ident`, or the first free suffixed variant of it
    pub fn claim(&mut self, ident: String) -> String {
        if self.used.insert(ident.clone()) {
            return ident;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", ident, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
