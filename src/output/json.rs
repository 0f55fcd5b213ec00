//
//  floe-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! JSON serialization utilities.

use anyhow::Result;
use serde::Serialize;

/// Serializes a value as pretty-printed JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serializes a value as compact JSON.
pub fn to_json_compact<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_is_indented() {
        let out = to_json_pretty(&serde_json::json!({"name": "rnaseq"})).unwrap();
        assert!(out.contains("\n"));
        assert!(out.contains("\"name\": \"rnaseq\""));
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let out = to_json_compact(&serde_json::json!({"name": "rnaseq"})).unwrap();
        assert_eq!(out, r#"{"name":"rnaseq"}"#);
    }
}
