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

//! Id-based indexes over borrowed tokens and groups.

use crate::{Token, TokenGroup};
use std::collections::HashMap;

/// Find the first token with the given id.
pub fn find_token_by_id<'a>(id: &str, tokens: &'a [Token]) -> Option<&'a Token> {
    tokens.iter().find(|token| token.id == id)
}

/// Id -> token index handed to value builders for alias resolution.
///
/// When ids repeat, the first token wins, matching [`find_token_by_id`].
#[derive(Debug, Clone, Default)]
pub struct TokenLookup<'a> {
    by_id: HashMap<&'a str, &'a Token>,
}

impl<'a> TokenLookup<'a> {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut by_id = HashMap::new();
        for token in tokens {
            by_id.entry(token.id.as_str()).or_insert(token);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Token> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Id -> group index plus the ordered group list it was built from.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex<'a> {
    ordered: Vec<&'a TokenGroup>,
    by_id: HashMap<&'a str, &'a TokenGroup>,
}

impl<'a> GroupIndex<'a> {
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenGroup>,
    {
        let ordered: Vec<&'a TokenGroup> = groups.into_iter().collect();
        let mut by_id = HashMap::with_capacity(ordered.len());
        for group in &ordered {
            by_id.entry(group.id.as_str()).or_insert(*group);
        }
        Self { ordered, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a TokenGroup> {
        self.by_id.get(id).copied()
    }

    /// Groups in input order.
    pub fn as_slice(&self) -> &[&'a TokenGroup] {
        &self.ordered
    }

    /// The group whose token list contains `token_id`.
    pub fn owner_of(&self, token_id: &str) -> Option<&'a TokenGroup> {
        self.ordered
            .iter()
            .copied()
            .find(|g| g.token_ids.iter().any(|id| id == token_id))
    }

    /// Names from the top-most ancestor down to `group`, stopping at groups
    /// missing from the index. Bounded by the number of indexed groups.
    pub fn name_path(&self, group: &'a TokenGroup) -> Vec<&'a str> {
        let mut path = vec![group.name.as_str()];
        let mut current = group;
        while let Some(parent) = current
            .parent_group_id
            .as_deref()
            .and_then(|id| self.get(id))
        {
            if path.len() > self.ordered.len() {
                break;
            }
            path.push(parent.name.as_str());
            current = parent;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
