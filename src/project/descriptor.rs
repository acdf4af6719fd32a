//! `package.json` project descriptor
//!
//! The descriptor belongs to the user and may carry hand-written fields, so it
//! is kept as a JSON object with its original key order; only the fields the
//! tool owns are touched.

use serde_json::{Map, Value};

use crate::project::error::SyncError;

const DOCUMENT: &str = "package.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
    fields: Map<String, Value>,
}

impl ProjectDescriptor {
    pub fn parse(content: &str) -> Result<Self, SyncError> {
        let value: Value = serde_json::from_str(content).map_err(|source| {
            SyncError::InvalidJson {
                document: DOCUMENT,
                source,
            }
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(SyncError::NotAnObject(DOCUMENT)),
        }
    }

    /// Pretty-printed with two-space indentation
    pub fn to_json_string(&self) -> Result<String, SyncError> {
        let mut out = serde_json::to_string_pretty(&self.fields).map_err(|source| {
            SyncError::Serialize {
                document: DOCUMENT,
                source,
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    pub fn version(&self) -> Option<&str> {
        self.str_field("version")
    }

    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.fields
            .get("dependencies")
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }

    /// Set `name` and `productName`
    pub fn set_name(&mut self, name: &str) {
        self.fields.insert("name".into(), name.into());
        self.fields.insert("productName".into(), name.into());
    }

    pub fn set_description(&mut self, description: &str) {
        self.fields.insert("description".into(), description.into());
    }

    pub fn set_version(&mut self, version: &str) {
        self.fields.insert("version".into(), version.into());
    }

    /// Set `dependencies[package]`, creating the map when absent.
    ///
    /// A `dependencies` value that is not an object is left alone and reported.
    pub fn set_dependency(&mut self, package: &str, version: &str) -> Result<(), SyncError> {
        match self
            .fields
            .entry("dependencies")
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(deps) => {
                deps.insert(package.to_string(), version.into());
                Ok(())
            }
            _ => Err(SyncError::NotAnObject("package.json `dependencies`")),
        }
    }
}
