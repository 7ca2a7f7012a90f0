// Dweve Tokenweave - Design Token Structure Builder
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structure to JSON conversion

use crate::error::{JsonError, JsonResult};
use serde_json::{Map, Number, Value as JsonValue};
use tokenweave_core::{Entry, Structure, TokenValue};

/// How absent markers are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentPolicy {
    /// Keep the key with a `null` value.
    #[default]
    Null,
    /// Drop the key.
    Omit,
    /// Keep the key with `{}`.
    EmptyObject,
}

/// Configuration for JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Representation of absent subtrees
    pub absent: AbsentPolicy,
    /// Pretty-print string output
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            absent: AbsentPolicy::Null,
            pretty: true,
        }
    }
}

/// Convert a structure to a JSON string
pub fn to_json(structure: &Structure, config: &ToJsonConfig) -> JsonResult<String> {
    let value = to_json_value(structure, config);
    let result = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    result.map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Convert a structure to serde_json::Value, keeping insertion order
pub fn to_json_value(structure: &Structure, config: &ToJsonConfig) -> JsonValue {
    JsonValue::Object(structure_to_map(structure, config))
}

fn structure_to_map(structure: &Structure, config: &ToJsonConfig) -> Map<String, JsonValue> {
    let mut map = Map::with_capacity(structure.len());

    for (key, entry) in structure {
        let value = match entry {
            Entry::Leaf(value) => token_value_to_json(value),
            Entry::Group(group) => JsonValue::Object(structure_to_map(group, config)),
            Entry::Absent => match config.absent {
                AbsentPolicy::Null => JsonValue::Null,
                AbsentPolicy::Omit => continue,
                AbsentPolicy::EmptyObject => JsonValue::Object(Map::new()),
            },
        };
        map.insert(key.to_string(), value);
    }

    map
}

/// Convert a single leaf value
pub fn token_value_to_json(value: &TokenValue) -> JsonValue {
    match value {
        TokenValue::String(s) => JsonValue::String(s.clone()),
        // NaN and infinities have no JSON form
        TokenValue::Number(n) => Number::from_f64(*n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        TokenValue::Composite(fields) => {
            let mut map = Map::with_capacity(fields.len());
            for (key, field) in fields {
                map.insert(key.clone(), token_value_to_json(field));
            }
            JsonValue::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Structure {
        let mut shades = Structure::new();
        shades.insert_leaf("light", TokenValue::string("#eeeeee"));
        let mut brand = Structure::new();
        brand.insert_leaf("primary", TokenValue::string("#3366ff"));
        brand.insert("Shades", Entry::Group(shades));
        let mut root = Structure::new();
        root.insert("Brand", Entry::Group(brand));
        root.insert("Neutral", Entry::Absent);
        root
    }

    // ==================== ToJsonConfig tests ====================

    #[test]
    fn test_to_json_config_default() {
        let config = ToJsonConfig::default();
        assert_eq!(config.absent, AbsentPolicy::Null);
        assert!(config.pretty);
    }

    // ==================== token_value_to_json tests ====================

    #[test]
    fn test_token_value_string() {
        assert_eq!(token_value_to_json(&TokenValue::string("4px")), json!("4px"));
    }

    #[test]
    fn test_token_value_number() {
        assert_eq!(token_value_to_json(&TokenValue::Number(1.5)), json!(1.5));
    }

    #[test]
    fn test_token_value_nan_is_null() {
        assert_eq!(token_value_to_json(&TokenValue::Number(f64::NAN)), JsonValue::Null);
    }

    #[test]
    fn test_token_value_composite() {
        let value = TokenValue::Composite(vec![
            ("fontFamily".to_string(), TokenValue::string("Inter")),
            ("lineHeight".to_string(), TokenValue::Number(1.25)),
        ]);
        assert_eq!(
            token_value_to_json(&value),
            json!({"fontFamily": "Inter", "lineHeight": 1.25})
        );
    }

    // ==================== absent policy tests ====================

    #[test]
    fn test_absent_null() {
        let value = to_json_value(&sample(), &ToJsonConfig::default());
        assert_eq!(
            value,
            json!({
                "Brand": {"primary": "#3366ff", "Shades": {"light": "#eeeeee"}},
                "Neutral": null
            })
        );
    }

    #[test]
    fn test_absent_omit() {
        let config = ToJsonConfig {
            absent: AbsentPolicy::Omit,
            ..ToJsonConfig::default()
        };
        let value = to_json_value(&sample(), &config);
        assert!(value.get("Neutral").is_none());
        assert!(value.get("Brand").is_some());
    }

    #[test]
    fn test_absent_empty_object() {
        let config = ToJsonConfig {
            absent: AbsentPolicy::EmptyObject,
            ..ToJsonConfig::default()
        };
        assert_eq!(to_json_value(&sample(), &config)["Neutral"], json!({}));
    }

    // ==================== ordering tests ====================

    #[test]
    fn test_insertion_order_preserved() {
        let mut structure = Structure::new();
        structure.insert_leaf("zeta", TokenValue::string("1"));
        structure.insert_leaf("alpha", TokenValue::string("2"));
        let compact = ToJsonConfig {
            pretty: false,
            ..ToJsonConfig::default()
        };
        assert_eq!(to_json(&structure, &compact).unwrap(), r#"{"zeta":"1","alpha":"2"}"#);
    }

    #[test]
    fn test_empty_structure() {
        let compact = ToJsonConfig {
            pretty: false,
            ..ToJsonConfig::default()
        };
        assert_eq!(to_json(&Structure::new(), &compact).unwrap(), "{}");
    }
}
