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

//! Deprecation filtering of group token lists.

use crate::lookup::TokenLookup;

/// Removes retired tokens from a group's token id list.
pub trait DeprecationFilter {
    /// Return the subset of `token_ids` to export, preserving order.
    fn retain(&self, token_ids: &[String], lookup: &TokenLookup<'_>) -> Vec<String>;
}

/// Drops ids whose token carries the `deprecated` flag.
///
/// Unknown ids pass through; the builder skips them when resolving.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagDeprecationFilter;

impl DeprecationFilter for FlagDeprecationFilter {
    fn retain(&self, token_ids: &[String], lookup: &TokenLookup<'_>) -> Vec<String> {
        token_ids
            .iter()
            .filter(|id| !lookup.get(id).is_some_and(|token| token.deprecated))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorData, Token};

    #[test]
    fn test_flag_filter_drops_deprecated() {
        let tokens = vec![
            Token::color("a", "alive", ColorData::rgb(0, 0, 0)),
            Token::color("d", "dead", ColorData::rgb(0, 0, 0)).with_deprecated(true),
        ];
        let lookup = TokenLookup::new(&tokens);
        let ids = vec!["d".to_string(), "a".to_string(), "unknown".to_string()];
        assert_eq!(
            FlagDeprecationFilter.retain(&ids, &lookup),
            vec!["a".to_string(), "unknown".to_string()]
        );
    }

    #[test]
    fn test_flag_filter_empty() {
        let lookup = TokenLookup::default();
        assert!(FlagDeprecationFilter.retain(&[], &lookup).is_empty());
    }
}
