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

//! Core data model and structure builder for design token export.
//!
//! Token repositories store design tokens flat: groups list child group ids
//! and token ids, and nothing links a token back to its group. This crate
//! turns that graph into a nested [`Structure`] that mirrors the semantic
//! grouping, one token category at a time.
//!
//! # Building
//!
//! ```
//! use tokenweave_core::{
//!     build_root_group_structures, BuildConfig, BuildContext, ColorData, CssValueBuilders,
//!     FlagDeprecationFilter, Token, TokenCategory, TokenGroup,
//! };
//!
//! let mut color = TokenGroup::new("c", "Color", TokenCategory::Color);
//! color.add_child("b");
//! let mut brand = TokenGroup::new("b", "Brand", TokenCategory::Color).with_parent("c");
//! brand.add_child("s");
//! brand.add_token("t1");
//! let shades = TokenGroup::new("s", "Shades", TokenCategory::Color).with_parent("b");
//!
//! let groups = vec![color, brand, shades];
//! let tokens = vec![Token::color("t1", "primary", ColorData::rgb(0, 0, 255))];
//!
//! let config = BuildConfig::default();
//! let values = CssValueBuilders::new(&config.limits);
//! let ctx = BuildContext::new(&config, &values, &FlagDeprecationFilter);
//!
//! let structure =
//!     build_root_group_structures(&groups, &tokens, TokenCategory::Color, &ctx).unwrap();
//! let primary = structure.get_path(&["Brand", "primary"]).unwrap();
//! assert_eq!(primary.as_leaf().and_then(|v| v.as_str()), Some("#0000ff"));
//! ```
//!
//! # Failure model
//!
//! Missing containers, dangling ids, excluded or internal names and empty
//! subtrees all degrade to absent results. Only a group graph that is not a
//! forest produces a [`StructureError`].

pub mod builder;
pub mod config;
mod deprecation;
mod error;
mod limits;
pub mod lookup;
mod model;
pub mod roots;
mod structure;
pub mod traverse;
pub mod values;

pub use builder::{
    build_group_structure, build_root_group_structures, explain_group_structure,
    is_alphabetic_name, BuildContext, GroupOutcome, SkipReason,
};
pub use config::{BuildConfig, BuildConfigBuilder, ExclusionPolicy, NameMatching, RootSelection};
pub use deprecation::{DeprecationFilter, FlagDeprecationFilter};
pub use error::{StructureError, StructureErrorKind, StructureResult};
pub use limits::Limits;
pub use lookup::{find_token_by_id, GroupIndex, TokenLookup};
pub use model::{
    ColorData, DimensionData, Token, TokenCategory, TokenGroup, TokenPayload, TokenSet,
    TypographyData, Unit,
};
pub use roots::select_roots;
pub use structure::{Entry, Iter as StructureIter, Structure, TokenValue};
pub use traverse::{traverse, StatsCollector, StructureVisitor, VisitorContext};
pub use values::{CssValueBuilders, ValueBuilders};
