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

//! Fluent builders for token graphs.
//!
//! Links are kept consistent: adding a child group records both the parent
//! id on the child and the child id on the parent, and adding a token records
//! its id on the owning group.

use tokenweave_core::{
    ColorData, DimensionData, Token, TokenCategory, TokenGroup, TokenSet, TypographyData,
};

/// Builder for [`TokenSet`] fixtures.
///
/// # Examples
///
/// ```
/// use tokenweave_test::fixtures::builders::TokenSetBuilder;
/// use tokenweave_core::TokenCategory;
///
/// let set = TokenSetBuilder::new(TokenCategory::Color)
///     .root("c", "Color")
///     .child("c", "b", "Brand")
///     .color("b", "t1", "primary", 0x3366ff)
///     .build();
///
/// assert_eq!(set.groups.len(), 2);
/// assert_eq!(set.group_by_id("c").unwrap().children_ids, vec!["b".to_string()]);
/// assert_eq!(set.group_by_id("b").unwrap().token_ids, vec!["t1".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct TokenSetBuilder {
    category: TokenCategory,
    groups: Vec<TokenGroup>,
    tokens: Vec<Token>,
}

impl TokenSetBuilder {
    /// Start a set whose groups default to `category`.
    pub fn new(category: TokenCategory) -> Self {
        Self {
            category,
            groups: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Switch the category used for subsequently added groups.
    pub fn category(mut self, category: TokenCategory) -> Self {
        self.category = category;
        self
    }

    /// Add a top-level group.
    pub fn root(mut self, id: &str, name: &str) -> Self {
        self.groups.push(TokenGroup::new(id, name, self.category));
        self
    }

    /// Add a group under `parent_id`, linking both directions.
    ///
    /// Panics if the parent has not been added yet.
    pub fn child(mut self, parent_id: &str, id: &str, name: &str) -> Self {
        self.group_mut(parent_id).add_child(id);
        self.groups
            .push(TokenGroup::new(id, name, self.category).with_parent(parent_id));
        self
    }

    /// Record a child id on `parent_id` without creating the child.
    pub fn dangling_child(mut self, parent_id: &str, id: &str) -> Self {
        self.group_mut(parent_id).add_child(id);
        self
    }

    /// Add a group as-is, without touching other groups.
    pub fn raw_group(mut self, group: TokenGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Add a token that no group lists.
    pub fn raw_token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    /// Add a token and list it on `group_id`.
    pub fn token(mut self, group_id: &str, token: Token) -> Self {
        self.group_mut(group_id).add_token(token.id.as_str());
        self.tokens.push(token);
        self
    }

    /// Add an opaque color token from a `0xRRGGBB` literal.
    pub fn color(self, group_id: &str, id: &str, name: &str, rgb: u32) -> Self {
        self.token(group_id, Token::color(id, name, rgb_data(rgb)))
    }

    /// Add a pixel dimension token.
    pub fn dimension(self, group_id: &str, id: &str, name: &str, px: f64) -> Self {
        self.token(group_id, Token::dimension(id, name, DimensionData::px(px)))
    }

    /// Add a typography token.
    pub fn typography(
        self,
        group_id: &str,
        id: &str,
        name: &str,
        family: &str,
        weight: &str,
        size_px: f64,
    ) -> Self {
        self.token(
            group_id,
            Token::typography(
                id,
                name,
                TypographyData::new(family, weight, DimensionData::px(size_px)),
            ),
        )
    }

    pub fn build(self) -> TokenSet {
        TokenSet::new(self.tokens, self.groups)
    }

    fn group_mut(&mut self, id: &str) -> &mut TokenGroup {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .unwrap_or_else(|| panic!("fixture group '{}' not defined", id))
    }
}

/// Color data from a `0xRRGGBB` literal.
pub fn rgb_data(rgb: u32) -> ColorData {
    ColorData::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
