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

//! Shared test fixtures and utilities for tokenweave crates.
//!
//! # Quick Start
//!
//! ```rust
//! use tokenweave_test::fixtures;
//! use tokenweave_test::fixtures::builders::TokenSetBuilder;
//! use tokenweave_core::TokenCategory;
//!
//! let set = fixtures::color_tree();
//! assert!(set.group_by_name("Color").is_some());
//!
//! let custom = TokenSetBuilder::new(TokenCategory::Color)
//!     .root("c", "Color")
//!     .child("c", "b", "Brand")
//!     .build();
//! assert_eq!(custom.groups.len(), 2);
//! ```

use tokenweave_core::{Token, TokenSet};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> TokenSet)>;

/// Canonical token set fixtures.
pub mod fixtures;

pub use fixtures::*;

/// Ids of deprecated tokens in `set`.
pub fn deprecated_ids(set: &TokenSet) -> Vec<&str> {
    set.tokens
        .iter()
        .filter(|t| t.deprecated)
        .map(|t| t.id.as_str())
        .collect()
}

/// Names of tokens in `set` matching `predicate`.
pub fn token_names<F>(set: &TokenSet, predicate: F) -> Vec<&str>
where
    F: Fn(&Token) -> bool,
{
    set.tokens
        .iter()
        .filter(|t| predicate(t))
        .map(|t| t.name.as_str())
        .collect()
}
