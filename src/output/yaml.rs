//
//  floe-cli
//  output/yaml.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! YAML serialization utilities.

use anyhow::Result;
use serde::Serialize;

/// Serializes a value as YAML.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_output() {
        let out = to_yaml(&serde_json::json!({"name": "rnaseq", "id": 7})).unwrap();
        assert!(out.contains("name: rnaseq"));
        assert!(out.contains("id: 7"));
    }
}
