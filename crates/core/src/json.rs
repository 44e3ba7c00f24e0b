//! Minimal JSON tree reader with lazy, path-tracked navigation.
//!
//! [`parse`] never fails: malformed input degrades to an empty object so
//! callers only deal with errors at the point of access. Navigation via
//! [`JsonReader::get`] and [`JsonReader::at`] records the traversal path
//! without touching the document; only terminal accessors resolve it, and a
//! failed access reports the full path plus the value actually found.

use serde_json::Value;
use thiserror::Error;

/// Error raised when a terminal accessor finds a missing or mismatched value.
///
/// The message carries the full traversal path (e.g. `android/[0]/code`) so
/// diagnostics stay precise without a schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to read key '{path}', actual value: {actual}")]
pub struct JsonMismatch {
    pub path: String,
    pub actual: String,
}

/// A parsed JSON document.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    root: Value,
}

/// Parse a JSON document. Malformed or empty input yields a document
/// positioned over an empty object, never an error.
pub fn parse(input: &str) -> JsonDocument {
    let root = serde_json::from_str(input).unwrap_or_else(|_| Value::Object(Default::default()));
    JsonDocument { root }
}

impl JsonDocument {
    /// Reader positioned at the document root.
    pub fn reader(&self) -> JsonReader<'_> {
        JsonReader {
            root: &self.root,
            path: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Lazy handle into a [`JsonDocument`].
///
/// A reader is the root reference plus the path taken to reach it; nothing is
/// resolved until a terminal accessor runs. Handles are cheap to clone and
/// never outlive their document.
#[derive(Debug, Clone)]
pub struct JsonReader<'a> {
    root: &'a Value,
    path: Vec<Segment>,
}

impl<'a> JsonReader<'a> {
    /// Child reader for an object key. Does not resolve the document.
    pub fn get(&self, key: impl Into<String>) -> JsonReader<'a> {
        let mut path = self.path.clone();
        path.push(Segment::Key(key.into()));
        JsonReader {
            root: self.root,
            path,
        }
    }

    /// Child reader for an array index. Does not resolve the document.
    pub fn at(&self, index: usize) -> JsonReader<'a> {
        let mut path = self.path.clone();
        path.push(Segment::Index(index));
        JsonReader {
            root: self.root,
            path,
        }
    }

    /// Whether the path resolves to a non-null value.
    pub fn exists(&self) -> bool {
        self.element().is_some_and(|value| !value.is_null())
    }

    pub fn as_string(&self) -> Result<String, JsonMismatch> {
        self.try_string().ok_or_else(|| self.mismatch())
    }

    pub fn as_i64(&self) -> Result<i64, JsonMismatch> {
        self.try_i64().ok_or_else(|| self.mismatch())
    }

    pub fn as_f64(&self) -> Result<f64, JsonMismatch> {
        self.try_f64().ok_or_else(|| self.mismatch())
    }

    pub fn as_bool(&self) -> Result<bool, JsonMismatch> {
        self.try_bool().ok_or_else(|| self.mismatch())
    }

    pub fn as_list(&self) -> Result<Vec<JsonReader<'a>>, JsonMismatch> {
        self.try_list().ok_or_else(|| self.mismatch())
    }

    pub fn try_string(&self) -> Option<String> {
        match self.element()? {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Integer access. Accepts both JSON numbers and numeric strings, which
    /// remote endpoints frequently conflate.
    pub fn try_i64(&self) -> Option<i64> {
        match self.element()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn try_f64(&self) -> Option<f64> {
        match self.element()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn try_bool(&self) -> Option<bool> {
        match self.element()? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn try_list(&self) -> Option<Vec<JsonReader<'a>>> {
        match self.element()? {
            Value::Array(items) => Some((0..items.len()).map(|i| self.at(i)).collect()),
            _ => None,
        }
    }

    /// Walk the recorded path from the root. `None` when any step is missing
    /// or traverses a non-container.
    fn element(&self) -> Option<&'a Value> {
        let mut current = self.root;
        for segment in &self.path {
            current = match segment {
                Segment::Key(key) => current.as_object()?.get(key)?,
                Segment::Index(index) => current.as_array()?.get(*index)?,
            };
        }
        Some(current)
    }

    fn path_string(&self) -> String {
        let segments: Vec<String> = self
            .path
            .iter()
            .map(|segment| match segment {
                Segment::Key(key) => key.clone(),
                Segment::Index(index) => format!("[{index}]"),
            })
            .collect();
        segments.join("/")
    }

    fn mismatch(&self) -> JsonMismatch {
        let actual = match self.element() {
            Some(value) => value.to_string(),
            None => "element not found".to_string(),
        };
        JsonMismatch {
            path: self.path_string(),
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_integer_access() {
        let document = parse(r#"{"a":{"b":5}}"#);
        assert_eq!(document.reader().get("a").get("b").as_i64(), Ok(5));
    }

    #[test]
    fn missing_key_as_nullable_returns_none() {
        let document = parse(r#"{"a":{"b":5}}"#);
        assert_eq!(document.reader().get("a").get("c").try_string(), None);
    }

    #[test]
    fn missing_key_failure_reports_full_path() {
        let document = parse(r#"{"a":{"b":5}}"#);
        let error = document.reader().get("a").get("c").as_string().unwrap_err();
        assert!(error.to_string().contains("a/c"), "message: {error}");
        assert!(error.to_string().contains("element not found"));
    }

    #[test]
    fn mismatched_type_reports_actual_value() {
        let document = parse(r#"{"a":{"b":5}}"#);
        let error = document.reader().get("a").get("b").as_bool().unwrap_err();
        assert_eq!(error.path, "a/b");
        assert!(error.actual.contains('5'));
    }

    #[test]
    fn numeric_strings_convert_lazily() {
        let document = parse(r#"{"android":"280000"}"#);
        assert_eq!(document.reader().get("android").as_i64(), Ok(280000));
        assert_eq!(
            parse(r#"{"ratio":"1.5"}"#).reader().get("ratio").as_f64(),
            Ok(1.5)
        );
    }

    #[test]
    fn array_children_are_indexed_in_the_path() {
        let document = parse(r#"{"items":[{"code":"x"},{"code":true}]}"#);
        let items = document.reader().get("items").as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("code").as_string(), Ok("x".to_string()));

        let error = items[1].get("code").as_string().unwrap_err();
        assert_eq!(error.path, "items/[1]/code");
    }

    #[test]
    fn malformed_input_degrades_to_empty_object() {
        let document = parse("{not json");
        assert!(!document.reader().get("anything").exists());
        assert_eq!(document.reader().get("anything").try_i64(), None);

        let empty = parse("");
        assert!(!empty.reader().get("anything").exists());
    }

    #[test]
    fn exists_distinguishes_null_from_present() {
        let document = parse(r#"{"a":null,"b":1}"#);
        assert!(!document.reader().get("a").exists());
        assert!(document.reader().get("b").exists());
        assert!(!document.reader().get("c").exists());
    }
}
