//! JSON destination documents
//!
//! A document is an arbitrary JSON object. Conversion only ever touches its
//! `voxels` key, which is replaced wholesale; every other field is written
//! back unchanged and in its original order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SparseVoxelMap;
use crate::core::error::{Error, Result};

/// Top-level key holding the sparse voxel map
pub const VOXELS_KEY: &str = "voxels";

/// A JSON object document that carries a sparse voxel map
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoxelDocument {
    fields: Map<String, Value>,
}

impl VoxelDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::Document(format!(
                "expected a JSON object at top level, found {}",
                json_kind(&other),
            ))),
        }
    }

    /// Parse a document from JSON text
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Load a document from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Replace the `voxels` key with `map`, creating it if absent
    pub fn replace_voxels(&mut self, map: &SparseVoxelMap) -> Result<()> {
        self.fields.insert(VOXELS_KEY.to_string(), serde_json::to_value(map)?);
        Ok(())
    }

    /// Read the `voxels` key back as a sparse map; empty if the key is absent
    pub fn voxels(&self) -> Result<SparseVoxelMap> {
        match self.fields.get(VOXELS_KEY) {
            None => Ok(SparseVoxelMap::new()),
            Some(value) => SparseVoxelMap::deserialize(value)
                .map_err(|e| Error::Document(format!("invalid {} object: {}", VOXELS_KEY, e))),
        }
    }

    /// Top-level field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Render as pretty JSON with `indent` spaces per level
    pub fn to_string_pretty(&self, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.fields.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::Document(e.to_string()))
    }

    /// Write the document to a file as pretty JSON
    pub fn save(&self, path: &Path, indent: usize) -> Result<()> {
        let json = self.to_string_pretty(indent)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
