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

//! End-to-end exports through the facade.

use serde_json::json;
use tokenweave::json::{to_json_value, AbsentPolicy, ToJsonConfig};
use tokenweave::{
    BuildConfig, Entry, ExclusionPolicy, Exporter, StructureErrorKind, Token, TokenCategory,
    TokenGroup, TokenSet, TokenValue, TokenweaveError,
};
use tokenweave_test::fixtures;
use tokenweave_test::fixtures::builders::rgb_data;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing for tests.
fn init_tracing() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_target(true)
        .with_test_writer()
        .try_init();
}

fn omit_absent() -> ToJsonConfig {
    ToJsonConfig {
        absent: AbsentPolicy::Omit,
        pretty: false,
    }
}

// =============================================================================
// Combined export
// =============================================================================

#[test]
fn test_color_container_with_brand() {
    init_tracing();

    let mut color = TokenGroup::new("g-color", "Color", TokenCategory::Color);
    color.add_child("g-brand");
    let mut brand =
        TokenGroup::new("g-brand", "Brand", TokenCategory::Color).with_parent("g-color");
    brand.add_child("g-shades");
    brand.add_token("t-primary");
    let mut shades =
        TokenGroup::new("g-shades", "Shades", TokenCategory::Color).with_parent("g-brand");
    shades.add_child("g-deep");
    shades.add_token("t-light");
    let deep = TokenGroup::new("g-deep", "Deep", TokenCategory::Color).with_parent("g-shades");

    let set = TokenSet::new(
        vec![
            Token::color("t-primary", "primary", rgb_data(0x3366ff)),
            Token::color("t-light", "light", rgb_data(0xeeeeee)),
        ],
        vec![color, brand, shades, deep],
    );

    let all = Exporter::default().export_all(&set).unwrap();
    assert_eq!(
        to_json_value(&all, &omit_absent()),
        json!({
            "Color": {
                "Brand": {
                    "primary": "#3366ff",
                    "Shades": { "light": "#eeeeee" }
                }
            }
        })
    );
}

#[test]
fn test_export_all_comprehensive() {
    init_tracing();

    let all = Exporter::default().export_all(&fixtures::comprehensive()).unwrap();
    let keys: Vec<&str> = all.keys().collect();
    assert_eq!(keys, vec!["Color", "Dimension", "Typography"]);

    assert_eq!(
        all.get_path(&["Color", "Brand", "Shades", "accent"]).and_then(Entry::as_leaf),
        Some(&TokenValue::string("var(--color-brand-primary)"))
    );
    assert_eq!(
        all.get_path(&["Dimension", "padding", "Inline", "small"]).and_then(Entry::as_leaf),
        Some(&TokenValue::string("4px"))
    );
    assert!(all.get_path(&["Typography", "Heading", "h1"]).is_some());
}

#[test]
fn test_export_all_empty_set() {
    let all = Exporter::default().export_all(&TokenSet::default()).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|(_, entry)| entry.is_absent()));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_unified_exclusions_drop_alias_root() {
    let config = BuildConfig::builder()
        .exclusions(ExclusionPolicy::unified())
        .build();
    let structure = Exporter::new(config)
        .export(&fixtures::color_tree(), TokenCategory::Color)
        .unwrap();
    assert!(!structure.contains_key("brandAlias"));
    assert!(structure.contains_key("Brand"));
}

#[test]
fn test_depth_limit_error() {
    init_tracing();

    let config = BuildConfig::builder().max_depth(1).build();
    let err = Exporter::new(config)
        .export(&fixtures::dimension_roots(), TokenCategory::Dimension)
        .unwrap_err();
    match err {
        TokenweaveError::Structure(e) => assert_eq!(e.kind, StructureErrorKind::DepthLimit),
        other => panic!("expected structure error, got {:?}", other),
    }
}

#[test]
fn test_cycle_error_carries_path() {
    init_tracing();

    let mut set = fixtures::color_tree();
    let shades = set.groups.iter_mut().find(|g| g.id == "shades").unwrap();
    shades.add_child("brand");

    let err = Exporter::default().export(&set, TokenCategory::Color).unwrap_err();
    let TokenweaveError::Structure(e) = err else {
        panic!("expected structure error");
    };
    assert_eq!(e.kind, StructureErrorKind::Cycle);
    assert_eq!(e.group_id, "brand");
    assert_eq!(e.path_string(), "Brand/Shades/Brand");
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_export_json_null_markers() {
    let text = Exporter::default()
        .export_json(
            &fixtures::typography_export(),
            TokenCategory::Typography,
            &ToJsonConfig::default(),
        )
        .unwrap();
    assert!(text.contains("\"Body\": null"));
}

#[test]
fn test_snapshot_through_facade() {
    let text = tokenweave::json::snapshot_to_json(&fixtures::color_tree(), false).unwrap();
    let set = tokenweave::from_json(&text).unwrap();
    let structure = tokenweave::export(&set, TokenCategory::Color).unwrap();
    assert!(structure.get_path(&["Brand", "primary"]).is_some());
}
