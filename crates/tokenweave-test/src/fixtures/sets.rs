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

//! Canonical token sets, one per exported category plus combinations.

use super::builders::{rgb_data, TokenSetBuilder};
use tokenweave_core::{DimensionData, Token, TokenCategory, TokenSet, TypographyData, Unit};

/// Color tree exercising every builder rule.
///
/// ```text
/// Color
/// ├── Brand            primary, secondary, blue500 (digits), legacy (deprecated)
/// │   └── Shades       light, dark, accent (alias of primary)
/// │       └── Tints    soft                (no subgroups: dropped)
/// ├── Neutral          gray                (no subgroups: absent marker)
/// ├── brandAlias       (excluded when nested; passes the exact root check)
/// │   └── Links
/// ├── system           (excluded at root)
/// │   └── Ramps
/// └── _internal        (underscore: absent marker)
///     └── Hidden
/// ```
pub fn color_tree() -> TokenSet {
    TokenSetBuilder::new(TokenCategory::Color)
        .root("color", "Color")
        .child("color", "brand", "Brand")
        .color("brand", "c-primary", "primary", 0x3366ff)
        .color("brand", "c-secondary", "secondary", 0xff6633)
        .color("brand", "c-blue500", "blue500", 0x0000ff)
        .token(
            "brand",
            Token::color("c-legacy", "legacy", rgb_data(0x999999)).with_deprecated(true),
        )
        .child("brand", "shades", "Shades")
        .color("shades", "c-light", "light", 0xeeeeee)
        .color("shades", "c-dark", "dark", 0x111111)
        .token(
            "shades",
            Token::color("c-accent", "accent", rgb_data(0x000000).with_reference("c-primary")),
        )
        .child("shades", "tints", "Tints")
        .color("tints", "c-soft", "soft", 0xf0f0ff)
        .child("color", "neutral", "Neutral")
        .color("neutral", "c-gray", "gray", 0x808080)
        .child("color", "alias", "brandAlias")
        .child("alias", "links", "Links")
        .child("color", "system", "system")
        .child("system", "ramps", "Ramps")
        .child("color", "internal", "_internal")
        .child("internal", "hidden", "Hidden")
        .build()
}

/// Typography export container with one qualifying and one leaf-only child.
///
/// ```text
/// export
/// ├── Heading    h1, h2
/// │   └── Display   hero
/// └── Body       regular  (no subgroups: absent marker)
/// ```
pub fn typography_export() -> TokenSet {
    TokenSetBuilder::new(TokenCategory::Typography)
        .root("export", "export")
        .child("export", "heading", "Heading")
        .typography("heading", "ty-h1", "h1", "Inter", "700", 32.0)
        .token(
            "heading",
            Token::typography(
                "ty-h2",
                "h2",
                TypographyData::new("Inter", "600", DimensionData::px(24.0))
                    .with_line_height(DimensionData::new(1.25, Unit::Raw)),
            ),
        )
        .child("heading", "display", "Display")
        .typography("display", "ty-hero", "hero", "Inter", "800", 64.0)
        .dangling_child("display", "display-variants")
        .child("export", "body", "Body")
        .typography("body", "ty-regular", "regular", "Inter", "400", 16.0)
        .build()
}

/// Dimension roots in non-canonical input order.
///
/// ```text
/// gap       (input first, output last)
/// └── Stack     sm
///     └── Dense
/// sizes     (not an allowed root)
/// padding
/// ├── Inline    small, medium
/// │   └── Tight     xs
/// │       └── Extra
/// radius    round (no subgroups: absent marker)
/// ```
pub fn dimension_roots() -> TokenSet {
    TokenSetBuilder::new(TokenCategory::Dimension)
        .root("gap", "gap")
        .child("gap", "stack", "Stack")
        .dimension("stack", "d-sm", "sm", 8.0)
        .child("stack", "dense", "Dense")
        .root("sizes", "sizes")
        .child("sizes", "icon", "Icon")
        .dimension("icon", "d-icon", "icon", 24.0)
        .root("padding", "padding")
        .child("padding", "inline", "Inline")
        .dimension("inline", "d-small", "small", 4.0)
        .dimension("inline", "d-medium", "medium", 12.0)
        .child("inline", "tight", "Tight")
        .dimension("tight", "d-xs", "xs", 2.0)
        .child("tight", "extra", "Extra")
        .root("radius", "radius")
        .dimension("radius", "d-round", "round", 999.0)
        .build()
}

/// Brand group whose only token is deprecated.
pub fn with_deprecated() -> TokenSet {
    TokenSetBuilder::new(TokenCategory::Color)
        .root("color", "Color")
        .child("color", "brand", "Brand")
        .token(
            "brand",
            Token::color("c-old", "old", rgb_data(0x123456)).with_deprecated(true),
        )
        .child("brand", "shades", "Shades")
        .dangling_child("shades", "ghost")
        .build()
}

/// All category fixtures merged into one repository snapshot, plus tokens of
/// categories the builder ignores.
pub fn comprehensive() -> TokenSet {
    let mut set = TokenSet::default();
    for part in [color_tree(), typography_export(), dimension_roots()] {
        set.tokens.extend(part.tokens);
        set.groups.extend(part.groups);
    }
    set.tokens
        .push(Token::other("s-elevated", "elevated", TokenCategory::Shadow));
    set
}
