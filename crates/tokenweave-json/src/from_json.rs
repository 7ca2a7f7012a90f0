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

//! Token repository snapshots from JSON
//!
//! A snapshot is an object with `tokens` and `groups` arrays. Either key may
//! be omitted; unknown keys are ignored.

use crate::error::{JsonError, JsonResult};
use serde_json::Value as JsonValue;
use tokenweave_core::TokenSet;

/// Parse a token set from a JSON string
pub fn from_json(json: &str) -> JsonResult<TokenSet> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(value)
}

/// Build a token set from an already parsed value
pub fn from_json_value(value: JsonValue) -> JsonResult<TokenSet> {
    if !value.is_object() {
        return Err(JsonError::InvalidRoot(json_kind(&value).to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize a token set back into snapshot form
pub fn snapshot_to_json(set: &TokenSet, pretty: bool) -> JsonResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(set)
    } else {
        serde_json::to_string(set)
    };
    result.map_err(|e| JsonError::Serialize(e.to_string()))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenweave_core::{TokenCategory, TokenPayload, Unit};

    const SNAPSHOT: &str = r##"{
        "tokens": [
            {"id": "t1", "name": "primary", "category": "color",
             "payload": {"kind": "color", "r": 51, "g": 102, "b": 255, "a": 1.0}},
            {"id": "t2", "name": "small", "category": "dimension", "deprecated": true,
             "payload": {"kind": "dimension", "measure": 4.0, "unit": "rem"}}
        ],
        "groups": [
            {"id": "g1", "name": "Color", "category": "color", "childrenIds": ["g2"]},
            {"id": "g2", "name": "Brand", "category": "color", "parentGroupId": "g1",
             "tokenIds": ["t1"]}
        ]
    }"##;

    // ==================== from_json tests ====================

    #[test]
    fn test_from_json_snapshot() {
        let set = from_json(SNAPSHOT).unwrap();
        assert_eq!(set.tokens.len(), 2);
        assert_eq!(set.groups.len(), 2);

        let brand = set.group_by_name("Brand").unwrap();
        assert_eq!(brand.parent_group_id.as_deref(), Some("g1"));
        assert_eq!(brand.token_ids, vec!["t1".to_string()]);
        assert!(brand.children_ids.is_empty());

        let small = set.token_by_id("t2").unwrap();
        assert!(small.deprecated);
        assert_eq!(small.category, TokenCategory::Dimension);
        match &small.payload {
            TokenPayload::Dimension(d) => assert_eq!(d.unit, Unit::Rem),
            other => panic!("expected dimension payload, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_missing_keys() {
        let set = from_json("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
    }

    #[test]
    fn test_from_json_array_root() {
        let err = from_json("[]").unwrap_err();
        assert_eq!(err, JsonError::InvalidRoot("array".to_string()));
    }

    #[test]
    fn test_from_json_unknown_category() {
        let json = r#"{
            "tokens": [
                {"id": "t", "name": "soft", "category": "blur", "payload": {"kind": "blur"}}
            ],
            "groups": [{"id": "g", "name": "X", "category": "fontFamily"}]
        }"#;
        let set = from_json(json).unwrap();
        assert_eq!(set.tokens[0].category, TokenCategory::Other);
        assert_eq!(set.tokens[0].payload, TokenPayload::Other);
        assert_eq!(set.groups[0].category, TokenCategory::Other);
    }

    // ==================== snapshot_to_json tests ====================

    #[test]
    fn test_snapshot_reparses() {
        let set = from_json(SNAPSHOT).unwrap();
        let text = snapshot_to_json(&set, false).unwrap();
        assert_eq!(from_json(&text).unwrap(), set);
    }
}
