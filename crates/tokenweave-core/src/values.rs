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

//! Per-category value builders.
//!
//! The structure builder treats these as black boxes: one token plus lookup
//! context in, one serialized [`TokenValue`] out. [`CssValueBuilders`] is the
//! stock implementation producing CSS-ready strings.

use crate::lookup::{GroupIndex, TokenLookup};
use crate::{
    ColorData, DimensionData, Limits, Token, TokenPayload, TokenValue, TypographyData, Unit,
};
use std::collections::HashSet;
use tracing::trace;

/// Converts single tokens into serialized leaf values.
pub trait ValueBuilders {
    /// Build a color value. `groups` is the category-filtered group list.
    fn color(&self, token: &Token, lookup: &TokenLookup<'_>, groups: &GroupIndex<'_>)
        -> TokenValue;

    /// Build a dimension value.
    fn dimension(&self, token: &Token) -> TokenValue;

    /// Build a typography value.
    fn typography(&self, token: &Token, lookup: &TokenLookup<'_>) -> TokenValue;
}

/// Value builders emitting CSS literals and custom-property references.
///
/// - colors: `var(--path-to-token)` for resolvable aliases, otherwise
///   `#rrggbb` or `rgba(r, g, b, a)`
/// - dimensions: `16px`, `1.5rem`, or a bare number for unitless values
/// - typography: a composite of CSS-ready fields
#[derive(Debug, Clone)]
pub struct CssValueBuilders {
    max_alias_depth: usize,
}

impl Default for CssValueBuilders {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl CssValueBuilders {
    pub fn new(limits: &Limits) -> Self {
        Self {
            max_alias_depth: limits.max_alias_depth,
        }
    }

    /// Follow typography aliases until a non-alias token, a repeated token
    /// or the hop limit.
    fn resolve_typography<'a>(
        &self,
        token: &'a Token,
        data: &'a TypographyData,
        lookup: &TokenLookup<'a>,
    ) -> &'a TypographyData {
        let mut visited: HashSet<&str> = HashSet::from([token.id.as_str()]);
        let mut current = data;
        for _ in 0..self.max_alias_depth {
            let Some(target_id) = current.reference.as_deref() else {
                break;
            };
            let Some(target) = lookup.get(target_id) else {
                trace!(target_id, "typography alias unresolved, using own value");
                break;
            };
            if !visited.insert(target.id.as_str()) {
                trace!(target_id, "typography alias cycle, stopping");
                break;
            }
            match &target.payload {
                TokenPayload::Typography(next) => current = next,
                _ => {
                    trace!(target_id, "typography alias targets another category");
                    break;
                }
            }
        }
        current
    }
}

impl ValueBuilders for CssValueBuilders {
    fn color(
        &self,
        token: &Token,
        lookup: &TokenLookup<'_>,
        groups: &GroupIndex<'_>,
    ) -> TokenValue {
        let TokenPayload::Color(data) = &token.payload else {
            trace!(token = %token.id, "color token without color payload");
            return TokenValue::string("");
        };
        if let Some(target) = data.reference.as_deref().and_then(|id| lookup.get(id)) {
            let mut segments: Vec<&str> = match groups.owner_of(&target.id) {
                Some(owner) => groups.name_path(owner),
                None => Vec::new(),
            };
            segments.push(&target.name);
            return TokenValue::String(format!("var(--{})", css_variable_name(&segments)));
        }
        TokenValue::String(color_literal(data))
    }

    fn dimension(&self, token: &Token) -> TokenValue {
        match &token.payload {
            TokenPayload::Dimension(data) => dimension_value(data),
            _ => {
                trace!(token = %token.id, "dimension token without dimension payload");
                TokenValue::string("")
            }
        }
    }

    fn typography(&self, token: &Token, lookup: &TokenLookup<'_>) -> TokenValue {
        let TokenPayload::Typography(data) = &token.payload else {
            trace!(token = %token.id, "typography token without typography payload");
            return TokenValue::Composite(Vec::new());
        };
        let data = self.resolve_typography(token, data, lookup);

        let mut fields = vec![
            ("fontFamily".to_string(), TokenValue::string(data.font_family.as_str())),
            ("fontWeight".to_string(), TokenValue::string(data.font_weight.as_str())),
            ("fontSize".to_string(), dimension_value(&data.font_size)),
        ];
        if let Some(line_height) = &data.line_height {
            fields.push(("lineHeight".to_string(), dimension_value(line_height)));
        }
        if let Some(letter_spacing) = &data.letter_spacing {
            fields.push(("letterSpacing".to_string(), dimension_value(letter_spacing)));
        }
        if let Some(text_case) = &data.text_case {
            fields.push(("textCase".to_string(), TokenValue::string(text_case.as_str())));
        }
        TokenValue::Composite(fields)
    }
}

/// `#rrggbb` for opaque colors, `rgba(r, g, b, a)` otherwise.
pub fn color_literal(color: &ColorData) -> String {
    if color.a >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a.max(0.0))
    }
}

/// Measure plus unit suffix; unitless measures stay numeric.
pub fn dimension_value(dimension: &DimensionData) -> TokenValue {
    match dimension.unit {
        Unit::Raw => TokenValue::Number(dimension.measure),
        unit => TokenValue::String(format!("{}{}", dimension.measure, unit.suffix())),
    }
}

/// Join name segments into a kebab-case custom property name.
pub fn css_variable_name(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| {
            segment
                .trim()
                .chars()
                .map(|c| {
                    if c.is_whitespace() || c == '_' || c == '/' {
                        '-'
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect::<String>()
        })
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
