//! Compose Descriptor Reader
//!
//! Only the top-level `services` mapping matters here; everything else in
//! the file belongs to the compose tool.

use std::fs;
use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::{DoxyError, DoxyResult};

/// Sub-service names declared in a descriptor, in document order.
pub fn sub_services(descriptor: &Path) -> DoxyResult<Vec<String>> {
    let content = fs::read_to_string(descriptor)?;
    parse_sub_services(&content, descriptor)
}

fn parse_sub_services(content: &str, file: &Path) -> DoxyResult<Vec<String>> {
    let schema = |message: &str| DoxyError::DescriptorSchema {
        file: file.to_path_buf(),
        message: message.to_string(),
    };

    let doc: Value = serde_yaml_ng::from_str(content).map_err(|e| DoxyError::DescriptorParse {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let Value::Mapping(top) = doc else {
        return Err(schema("top level is not a mapping"));
    };

    match top.get("services") {
        None => Err(schema("no 'services' key")),
        Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Mapping(services)) => services
            .keys()
            .map(|key| key_name(key).ok_or_else(|| schema("service names must be scalars")))
            .collect(),
        Some(_) => Err(schema("'services' is not a mapping")),
    }
}

fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
