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

//! Token storage model: tokens, groups and snapshots of both.
//!
//! The model is flat. Groups list their child group ids and their token ids;
//! tokens do not point back at their group. No tree object exists until the
//! builder produces a [`Structure`](crate::Structure).

use std::fmt;

/// Category tag shared by tokens and groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenCategory {
    Color,
    Dimension,
    Typography,
    Shadow,
    Border,
    Gradient,
    Opacity,
    String,
    /// Any category name not listed above.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl TokenCategory {
    /// Categories the structure builder knows how to export.
    pub const EXPORTED: [TokenCategory; 3] = [Self::Color, Self::Dimension, Self::Typography];

    /// Human-facing label, used as the top-level key of combined exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Dimension => "Dimension",
            Self::Typography => "Typography",
            Self::Shadow => "Shadow",
            Self::Border => "Border",
            Self::Gradient => "Gradient",
            Self::Opacity => "Opacity",
            Self::String => "String",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of a dimension measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    #[default]
    Pixels,
    Rem,
    Em,
    Percent,
    Points,
    /// Unitless number.
    Raw,
}

impl Unit {
    /// CSS suffix for this unit (empty for [`Unit::Raw`]).
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Percent => "%",
            Self::Points => "pt",
            Self::Raw => "",
        }
    }
}

/// Color payload. `reference` aliases another color token by id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColorData {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference: Option<String>,
}

impl ColorData {
    /// Opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a,
            reference: None,
        }
    }

    /// Alias another color token, keeping this value as the fallback.
    pub fn with_reference(mut self, token_id: impl Into<String>) -> Self {
        self.reference = Some(token_id.into());
        self
    }
}

/// Dimension payload.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DimensionData {
    pub measure: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: Unit,
    /// Alias target id. Carried through loading but not resolved:
    /// dimension values always emit their own measure.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference: Option<String>,
}

impl DimensionData {
    pub fn new(measure: f64, unit: Unit) -> Self {
        Self {
            measure,
            unit,
            reference: None,
        }
    }

    pub fn px(measure: f64) -> Self {
        Self::new(measure, Unit::Pixels)
    }

    /// Record an alias target. See [`DimensionData::reference`].
    pub fn with_reference(mut self, token_id: impl Into<String>) -> Self {
        self.reference = Some(token_id.into());
        self
    }
}

/// Composite typography payload.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TypographyData {
    pub font_family: String,
    pub font_weight: String,
    pub font_size: DimensionData,
    #[cfg_attr(feature = "serde", serde(default))]
    pub line_height: Option<DimensionData>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub letter_spacing: Option<DimensionData>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_case: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference: Option<String>,
}

impl TypographyData {
    pub fn new(
        font_family: impl Into<String>,
        font_weight: impl Into<String>,
        font_size: DimensionData,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            font_weight: font_weight.into(),
            font_size,
            ..Self::default()
        }
    }

    pub fn with_line_height(mut self, line_height: DimensionData) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn with_letter_spacing(mut self, letter_spacing: DimensionData) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    pub fn with_reference(mut self, token_id: impl Into<String>) -> Self {
        self.reference = Some(token_id.into());
        self
    }
}

/// Category-specific data consumed by the matching value builder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum TokenPayload {
    Color(ColorData),
    Dimension(DimensionData),
    Typography(TypographyData),
    /// Payload of a category the builder does not export.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// A single named design value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Token {
    pub id: String,
    pub name: String,
    pub category: TokenCategory,
    pub payload: TokenPayload,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deprecated: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl Token {
    /// Create a token. The payload is expected to match the category.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: TokenCategory,
        payload: TokenPayload,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            payload,
            deprecated: false,
            description: None,
        }
    }

    pub fn color(id: impl Into<String>, name: impl Into<String>, data: ColorData) -> Self {
        Self::new(id, name, TokenCategory::Color, TokenPayload::Color(data))
    }

    pub fn dimension(id: impl Into<String>, name: impl Into<String>, data: DimensionData) -> Self {
        Self::new(id, name, TokenCategory::Dimension, TokenPayload::Dimension(data))
    }

    pub fn typography(
        id: impl Into<String>,
        name: impl Into<String>,
        data: TypographyData,
    ) -> Self {
        Self::new(id, name, TokenCategory::Typography, TokenPayload::Typography(data))
    }

    /// A token of a category without a dedicated payload.
    pub fn other(id: impl Into<String>, name: impl Into<String>, category: TokenCategory) -> Self {
        Self::new(id, name, category, TokenPayload::Other)
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Alias target declared by the payload, if any.
    pub fn reference(&self) -> Option<&str> {
        match &self.payload {
            TokenPayload::Color(c) => c.reference.as_deref(),
            TokenPayload::Dimension(d) => d.reference.as_deref(),
            TokenPayload::Typography(t) => t.reference.as_deref(),
            TokenPayload::Other => None,
        }
    }
}

/// A node in the grouping hierarchy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TokenGroup {
    pub id: String,
    pub name: String,
    /// `None` for top-level groups.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent_group_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children_ids: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub token_ids: Vec<String>,
    pub category: TokenCategory,
}

impl TokenGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_group_id: None,
            children_ids: Vec::new(),
            token_ids: Vec::new(),
            category,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_group_id = Some(parent_id.into());
        self
    }

    pub fn add_child(&mut self, group_id: impl Into<String>) {
        self.children_ids.push(group_id.into());
    }

    pub fn add_token(&mut self, token_id: impl Into<String>) {
        self.token_ids.push(token_id.into());
    }

    /// True when the group lists at least one child group id.
    pub fn has_child_groups(&self) -> bool {
        !self.children_ids.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent_group_id.is_none()
    }
}

/// An immutable snapshot of a token repository.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenSet {
    #[cfg_attr(feature = "serde", serde(default))]
    pub tokens: Vec<Token>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub groups: Vec<TokenGroup>,
}

impl TokenSet {
    pub fn new(tokens: Vec<Token>, groups: Vec<TokenGroup>) -> Self {
        Self { tokens, groups }
    }

    /// First token with the given id.
    pub fn token_by_id(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// First group with the given id.
    pub fn group_by_id(&self, id: &str) -> Option<&TokenGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// First group with exactly the given name.
    pub fn group_by_name(&self, name: &str) -> Option<&TokenGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Tokens and groups tagged with `category`, in input order.
    pub fn filter_category(&self, category: TokenCategory) -> (Vec<&Token>, Vec<&TokenGroup>) {
        (
            self.tokens.iter().filter(|t| t.category == category).collect(),
            self.groups.iter().filter(|g| g.category == category).collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TokenCategory tests ====================

    #[test]
    fn test_category_label() {
        assert_eq!(TokenCategory::Color.label(), "Color");
        assert_eq!(TokenCategory::Typography.to_string(), "Typography");
    }

    #[test]
    fn test_exported_categories() {
        assert_eq!(
            TokenCategory::EXPORTED,
            [
                TokenCategory::Color,
                TokenCategory::Dimension,
                TokenCategory::Typography
            ]
        );
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(Unit::Pixels.suffix(), "px");
        assert_eq!(Unit::Percent.suffix(), "%");
        assert_eq!(Unit::Raw.suffix(), "");
    }

    // ==================== Token tests ====================

    #[test]
    fn test_token_color_constructor() {
        let token = Token::color("t1", "primary", ColorData::rgb(255, 0, 0));
        assert_eq!(token.category, TokenCategory::Color);
        assert!(!token.deprecated);
        assert_eq!(token.reference(), None);
    }

    #[test]
    fn test_token_reference() {
        let token = Token::color(
            "t2",
            "accent",
            ColorData::rgb(0, 0, 0).with_reference("t1"),
        );
        assert_eq!(token.reference(), Some("t1"));
    }

    #[test]
    fn test_token_deprecated_builder() {
        let token = Token::dimension("d1", "small", DimensionData::px(4.0)).with_deprecated(true);
        assert!(token.deprecated);
    }

    #[test]
    fn test_token_other_payload() {
        let token = Token::other("s1", "shadow", TokenCategory::Shadow);
        assert_eq!(token.payload, TokenPayload::Other);
        assert_eq!(token.reference(), None);
    }

    // ==================== TokenGroup tests ====================

    #[test]
    fn test_group_new_is_root() {
        let group = TokenGroup::new("g1", "Color", TokenCategory::Color);
        assert!(group.is_root());
        assert!(!group.has_child_groups());
    }

    #[test]
    fn test_group_add_child_and_token() {
        let mut group = TokenGroup::new("g1", "Brand", TokenCategory::Color).with_parent("g0");
        group.add_child("g2");
        group.add_token("t1");
        assert!(!group.is_root());
        assert!(group.has_child_groups());
        assert_eq!(group.token_ids, vec!["t1".to_string()]);
    }

    // ==================== TokenSet tests ====================

    #[test]
    fn test_token_set_lookup_first_wins() {
        let set = TokenSet::new(
            vec![
                Token::color("t1", "first", ColorData::rgb(1, 1, 1)),
                Token::color("t1", "second", ColorData::rgb(2, 2, 2)),
            ],
            vec![TokenGroup::new("g1", "Color", TokenCategory::Color)],
        );
        assert_eq!(set.token_by_id("t1").map(|t| t.name.as_str()), Some("first"));
        assert!(set.group_by_id("g1").is_some());
        assert!(set.group_by_name("color").is_none());
    }

    #[test]
    fn test_token_set_filter_category() {
        let set = TokenSet::new(
            vec![
                Token::color("t1", "red", ColorData::rgb(255, 0, 0)),
                Token::dimension("t2", "small", DimensionData::px(2.0)),
            ],
            vec![
                TokenGroup::new("g1", "Color", TokenCategory::Color),
                TokenGroup::new("g2", "padding", TokenCategory::Dimension),
            ],
        );
        let (tokens, groups) = set.filter_category(TokenCategory::Dimension);
        assert_eq!(tokens.len(), 1);
        assert_eq!(groups[0].name, "padding");
    }

    #[test]
    fn test_token_set_default_is_empty() {
        assert!(TokenSet::default().is_empty());
    }
}
