//! Reading sample documents
//!
//! Whole documents go through simd-json first and fall back to serde_json,
//! which also produces the error message when the input is malformed.
//! simd-json has no recursion limit, so documents nested deeper than
//! serde_json allows skip the fast path entirely.

use crate::error::{Error, Result};
use serde_json::Value;
use std::io::{BufReader, Read};
use tracing::debug;

/// serde_json's default recursion limit
const MAX_FAST_PATH_DEPTH: usize = 128;

/// How the input text is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// One JSON document
    #[default]
    Json,
    /// One JSON document per non-blank line
    Ndjson,
}

/// Read every document from `reader`
pub fn read_documents<R: Read>(reader: R, format: InputFormat) -> Result<Vec<Value>> {
    let mut content = Vec::new();
    BufReader::new(reader).read_to_end(&mut content)?;

    match format {
        InputFormat::Json => Ok(vec![parse_document(&content)?]),
        InputFormat::Ndjson => parse_ndjson(&String::from_utf8(content)?),
    }
}

/// Parse a single JSON document
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    if exceeds_depth(bytes, MAX_FAST_PATH_DEPTH) {
        debug!("input nested too deeply for simd-json, using serde_json");
        return Ok(serde_json::from_slice(bytes)?);
    }

    // simd-json parses in place, keep the original for the fallback
    let mut scratch = bytes.to_vec();
    match simd_json::serde::from_slice::<Value>(&mut scratch) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!(error = %err, "simd-json rejected input, retrying with serde_json");
            Ok(serde_json::from_slice(bytes)?)
        }
    }
}

/// Whether brackets outside of string literals nest deeper than `limit`
fn exceeds_depth(bytes: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &b in bytes {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Parse newline-delimited JSON, skipping blank lines
pub fn parse_ndjson(text: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = serde_json::from_str(line).map_err(|source| Error::JsonLine {
            line: idx + 1,
            source,
        })?;
        documents.push(value);
    }
    Ok(documents)
}

/// Parse a JSON string held in memory
pub fn from_str(json: &str) -> Result<Value> {
    parse_document(json.as_bytes())
}
