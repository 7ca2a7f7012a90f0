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

//! Category exports over a whole token set.

use crate::error::Result;
use tokenweave_core::{
    build_root_group_structures, BuildConfig, BuildContext, CssValueBuilders, DeprecationFilter,
    Entry, FlagDeprecationFilter, StatsCollector, Structure, TokenCategory, TokenSet,
    ValueBuilders,
};
use tokenweave_json::ToJsonConfig;
use tracing::{debug, info, info_span, warn};

/// Owns a build configuration and the value and deprecation seams.
///
/// # Examples
///
/// ```rust
/// use tokenweave::{Exporter, TokenCategory, TokenSet};
///
/// let exporter = Exporter::default();
/// let structure = exporter.export(&TokenSet::default(), TokenCategory::Color).unwrap();
/// assert!(structure.is_empty());
/// ```
pub struct Exporter {
    config: BuildConfig,
    values: Box<dyn ValueBuilders + Send + Sync>,
    deprecation: Box<dyn DeprecationFilter + Send + Sync>,
}

impl Exporter {
    /// Exporter with CSS values and flag-based deprecation.
    pub fn new(config: BuildConfig) -> Self {
        let values = CssValueBuilders::new(&config.limits);
        Self {
            config,
            values: Box::new(values),
            deprecation: Box::new(FlagDeprecationFilter),
        }
    }

    /// Replace the value builders.
    pub fn with_value_builders(
        mut self,
        values: impl ValueBuilders + Send + Sync + 'static,
    ) -> Self {
        self.values = Box::new(values);
        self
    }

    /// Replace the deprecation filter.
    pub fn with_deprecation_filter(
        mut self,
        filter: impl DeprecationFilter + Send + Sync + 'static,
    ) -> Self {
        self.deprecation = Box::new(filter);
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    fn context(&self) -> BuildContext<'_> {
        BuildContext::new(&self.config, self.values.as_ref(), self.deprecation.as_ref())
    }

    /// Build the structure for one category.
    pub fn export(&self, set: &TokenSet, category: TokenCategory) -> Result<Structure> {
        let span = info_span!("export", category = %category);
        let _enter = span.enter();
        debug!(
            tokens = set.tokens.len(),
            groups = set.groups.len(),
            "building category structure"
        );

        let structure =
            match build_root_group_structures(&set.groups, &set.tokens, category, &self.context()) {
                Ok(structure) => structure,
                Err(err) => {
                    warn!(
                        kind = %err.kind,
                        group = %err.group_id,
                        path = %err.path_string(),
                        "group graph rejected"
                    );
                    return Err(err.into());
                }
            };

        let stats = StatsCollector::collect(&structure);
        info!(
            roots = structure.len(),
            leaves = stats.leaf_count,
            groups = stats.group_count,
            absent = stats.absent_count,
            depth = stats.max_depth,
            "category exported"
        );
        Ok(structure)
    }

    /// Build every exported category, keyed by its label.
    ///
    /// Categories without output appear as absent entries.
    pub fn export_all(&self, set: &TokenSet) -> Result<Structure> {
        let mut all = Structure::with_capacity(TokenCategory::EXPORTED.len());
        for category in TokenCategory::EXPORTED {
            let structure = self.export(set, category)?;
            let subtree = (!structure.is_empty()).then_some(structure);
            all.insert(category.label(), Entry::from_subtree(subtree));
        }
        Ok(all)
    }

    /// Build one category and serialize it.
    pub fn export_json(
        &self,
        set: &TokenSet,
        category: TokenCategory,
        config: &ToJsonConfig,
    ) -> Result<String> {
        let structure = self.export(set, category)?;
        Ok(tokenweave_json::to_json(&structure, config)?)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenweaveError;
    use tokenweave_core::{ColorData, GroupIndex, Token, TokenGroup, TokenLookup, TokenValue};

    fn brand_set() -> TokenSet {
        let mut color = TokenGroup::new("c", "Color", TokenCategory::Color);
        color.add_child("b");
        let mut brand = TokenGroup::new("b", "Brand", TokenCategory::Color).with_parent("c");
        brand.add_child("s");
        brand.add_token("t1");
        brand.add_token("t2");
        let mut shades = TokenGroup::new("s", "Shades", TokenCategory::Color).with_parent("b");
        shades.add_child("d");
        shades.add_token("t3");
        let deep = TokenGroup::new("d", "Deep", TokenCategory::Color).with_parent("s");
        TokenSet::new(
            vec![
                Token::color("t1", "primary", ColorData::rgb(0, 0, 255)),
                Token::color("t2", "old", ColorData::rgb(1, 1, 1)).with_deprecated(true),
                Token::color("t3", "light", ColorData::rgb(255, 255, 255)),
            ],
            vec![color, brand, shades, deep],
        )
    }

    struct Upper;

    impl ValueBuilders for Upper {
        fn color(&self, token: &Token, _: &TokenLookup<'_>, _: &GroupIndex<'_>) -> TokenValue {
            TokenValue::string(token.name.to_uppercase())
        }

        fn dimension(&self, _: &Token) -> TokenValue {
            TokenValue::Number(0.0)
        }

        fn typography(&self, _: &Token, _: &TokenLookup<'_>) -> TokenValue {
            TokenValue::Composite(Vec::new())
        }
    }

    struct KeepAll;

    impl DeprecationFilter for KeepAll {
        fn retain(&self, token_ids: &[String], _: &TokenLookup<'_>) -> Vec<String> {
            token_ids.to_vec()
        }
    }

    // ==================== export tests ====================

    #[test]
    fn test_export_color() {
        let structure = Exporter::default().export(&brand_set(), TokenCategory::Color).unwrap();
        let primary = structure.get_path(&["Brand", "primary"]).and_then(Entry::as_leaf);
        assert_eq!(primary, Some(&TokenValue::string("#0000ff")));
        assert!(structure.get_path(&["Brand", "old"]).is_none());
    }

    #[test]
    fn test_custom_value_builders() {
        let exporter = Exporter::default().with_value_builders(Upper);
        let structure = exporter.export(&brand_set(), TokenCategory::Color).unwrap();
        let light = structure.get_path(&["Brand", "Shades", "light"]).and_then(Entry::as_leaf);
        assert_eq!(light, Some(&TokenValue::string("LIGHT")));
    }

    #[test]
    fn test_custom_deprecation_filter() {
        let exporter = Exporter::default().with_deprecation_filter(KeepAll);
        let structure = exporter.export(&brand_set(), TokenCategory::Color).unwrap();
        assert!(structure.get_path(&["Brand", "old"]).is_some());
    }

    #[test]
    fn test_export_cycle_is_error() {
        let mut set = brand_set();
        set.groups[2].add_child("b");
        let err = Exporter::default().export(&set, TokenCategory::Color).unwrap_err();
        assert!(matches!(err, TokenweaveError::Structure(_)));
    }

    // ==================== export_all tests ====================

    #[test]
    fn test_export_all_labels() {
        let all = Exporter::default().export_all(&brand_set()).unwrap();
        let keys: Vec<&str> = all.keys().collect();
        assert_eq!(keys, vec!["Color", "Dimension", "Typography"]);
        assert!(all.get("Color").and_then(Entry::as_group).is_some());
        assert_eq!(all.get("Dimension"), Some(&Entry::Absent));
        assert_eq!(all.get("Typography"), Some(&Entry::Absent));
    }

    #[test]
    fn test_export_json() {
        let config = ToJsonConfig {
            pretty: false,
            ..ToJsonConfig::default()
        };
        let json = Exporter::default()
            .export_json(&brand_set(), TokenCategory::Color, &config)
            .unwrap();
        assert_eq!(
            json,
            r##"{"Brand":{"primary":"#0000ff","Shades":{"light":"#ffffff"}}}"##
        );
    }
}
