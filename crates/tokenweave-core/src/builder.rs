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

//! Recursive structure building over the flat group graph.
//!
//! [`build_root_group_structures`] is the entry point used per category. It
//! selects the category's roots, narrows tokens and groups to the category and
//! runs [`build_group_structure`] for each root.
//!
//! A group contributes a subtree only when it has at least one child group,
//! is not in the exclusion set and has no `_` in its name. Everything else
//! degrades to an absent result; only a malformed group graph (a cycle or
//! nesting beyond [`Limits::max_depth`](crate::Limits)) is an error.

use crate::config::{BuildConfig, INTERNAL_NAME_MARKER};
use crate::deprecation::DeprecationFilter;
use crate::lookup::{GroupIndex, TokenLookup};
use crate::roots::select_roots;
use crate::values::ValueBuilders;
use crate::{
    Entry, Structure, StructureError, StructureResult, Token, TokenCategory, TokenGroup,
};
use std::fmt;
use tracing::{debug, trace};

/// Collaborators and configuration for one build.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub config: &'a BuildConfig,
    pub values: &'a dyn ValueBuilders,
    pub deprecation: &'a dyn DeprecationFilter,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        config: &'a BuildConfig,
        values: &'a dyn ValueBuilders,
        deprecation: &'a dyn DeprecationFilter,
    ) -> Self {
        Self {
            config,
            values,
            deprecation,
        }
    }
}

impl fmt::Debug for BuildContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// Why a group contributed no structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No group was supplied or the id did not resolve.
    Missing,
    /// The group lists no child groups.
    NoChildGroups,
    /// The name is in the exclusion set.
    Excluded,
    /// The name carries the internal marker.
    InternalName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::NoChildGroups => write!(f, "no child groups"),
            Self::Excluded => write!(f, "excluded name"),
            Self::InternalName => write!(f, "internal name"),
        }
    }
}

/// Reason-tagged result of building one group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    Built(Structure),
    Skipped(SkipReason),
}

impl GroupOutcome {
    /// Collapse to the public absent-or-structure form.
    pub fn into_option(self) -> Option<Structure> {
        match self {
            Self::Built(structure) => Some(structure),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Built(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }
}

/// Build the subtree for `group`, or `None` when it contributes nothing.
pub fn build_group_structure<'a>(
    group: Option<&'a TokenGroup>,
    groups: &'a [TokenGroup],
    tokens: &'a [Token],
    ctx: &BuildContext<'_>,
) -> StructureResult<Option<Structure>> {
    explain_group_structure(group, groups, tokens, ctx).map(GroupOutcome::into_option)
}

/// Like [`build_group_structure`] but keeps the reason for a skip.
pub fn explain_group_structure<'a>(
    group: Option<&'a TokenGroup>,
    groups: &'a [TokenGroup],
    tokens: &'a [Token],
    ctx: &BuildContext<'_>,
) -> StructureResult<GroupOutcome> {
    let mut walker = Walker::new(GroupIndex::new(groups), TokenLookup::new(tokens), ctx);
    walker.build(group)
}

/// Build the output structure for every root of `category`.
///
/// Each selected root is keyed by its name. Roots whose own build yields
/// nothing keep their key with an [`Entry::Absent`] marker; roots matching
/// the exclusion set under the root-level rule get no key.
pub fn build_root_group_structures(
    groups: &[TokenGroup],
    tokens: &[Token],
    category: TokenCategory,
    ctx: &BuildContext<'_>,
) -> StructureResult<Structure> {
    let roots = select_roots(groups, category, ctx.config);

    let filtered_tokens = TokenLookup::new(tokens.iter().filter(|t| t.category == category));
    let filtered_groups = GroupIndex::new(groups.iter().filter(|g| g.category == category));
    let mut walker = Walker::new(filtered_groups, filtered_tokens, ctx);

    let mut structure = Structure::with_capacity(roots.len());
    for root in roots {
        if ctx.config.exclusions.excludes_root(&root.name) {
            debug!(root = %root.name, "root group excluded");
            continue;
        }
        let outcome = walker.build(Some(root))?;
        if let Some(reason) = outcome.skip_reason() {
            debug!(root = %root.name, %reason, "root group produced no structure");
        }
        structure.insert(root.name.clone(), Entry::from_subtree(outcome.into_option()));
    }

    debug!(
        %category,
        keys = structure.len(),
        leaves = structure.leaf_count(),
        "built root group structures"
    );
    Ok(structure)
}

/// True when the name is ASCII letters only (the empty name qualifies).
pub fn is_alphabetic_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic())
}

struct Walker<'a, 'c> {
    groups: GroupIndex<'a>,
    tokens: TokenLookup<'a>,
    ctx: &'c BuildContext<'c>,
    path: Vec<&'a TokenGroup>,
}

impl<'a, 'c> Walker<'a, 'c> {
    fn new(groups: GroupIndex<'a>, tokens: TokenLookup<'a>, ctx: &'c BuildContext<'c>) -> Self {
        Self {
            groups,
            tokens,
            ctx,
            path: Vec::new(),
        }
    }

    /// Rules shared by the group itself and its children.
    fn skip_reason(&self, group: &TokenGroup) -> Option<SkipReason> {
        if !group.has_child_groups() {
            Some(SkipReason::NoChildGroups)
        } else if self.ctx.config.exclusions.excludes_nested(&group.name) {
            Some(SkipReason::Excluded)
        } else if group.name.contains(INTERNAL_NAME_MARKER) {
            Some(SkipReason::InternalName)
        } else {
            None
        }
    }

    fn build(&mut self, group: Option<&'a TokenGroup>) -> StructureResult<GroupOutcome> {
        let Some(group) = group else {
            return Ok(GroupOutcome::Skipped(SkipReason::Missing));
        };
        if let Some(reason) = self.skip_reason(group) {
            trace!(group = %group.name, %reason, "group skipped");
            return Ok(GroupOutcome::Skipped(reason));
        }
        self.enter(group)?;
        let result = self.build_contents(group);
        self.path.pop();
        result.map(GroupOutcome::Built)
    }

    fn enter(&mut self, group: &'a TokenGroup) -> StructureResult<()> {
        if self.path.iter().any(|g| g.id == group.id) {
            return Err(StructureError::cycle(
                format!("group '{}' is its own ancestor", group.name),
                group.id.as_str(),
            )
            .with_path(self.name_path(group)));
        }
        if self.path.len() > self.ctx.config.limits.max_depth {
            return Err(StructureError::depth_limit(
                format!(
                    "nesting exceeds maximum depth of {}",
                    self.ctx.config.limits.max_depth
                ),
                group.id.as_str(),
            )
            .with_path(self.name_path(group)));
        }
        self.path.push(group);
        Ok(())
    }

    fn name_path(&self, last: &TokenGroup) -> Vec<String> {
        self.path
            .iter()
            .map(|g| g.name.clone())
            .chain(std::iter::once(last.name.clone()))
            .collect()
    }

    fn build_contents(&mut self, group: &'a TokenGroup) -> StructureResult<Structure> {
        let mut structure =
            Structure::with_capacity(group.token_ids.len() + group.children_ids.len());

        let token_ids = self.ctx.deprecation.retain(&group.token_ids, &self.tokens);
        for token_id in &token_ids {
            let Some(token) = self.tokens.get(token_id) else {
                trace!(token = %token_id, group = %group.name, "token id not found");
                continue;
            };
            self.emit_token(token, &mut structure);
        }

        for child_id in &group.children_ids {
            let Some(child) = self.groups.get(child_id) else {
                trace!(child = %child_id, group = %group.name, "child group not found");
                continue;
            };
            if let Some(reason) = self.skip_reason(child) {
                trace!(child = %child.name, %reason, "child group skipped");
                continue;
            }
            let outcome = self.build(Some(child))?;
            structure.insert(child.name.clone(), Entry::from_subtree(outcome.into_option()));
        }

        Ok(structure)
    }

    fn emit_token(&self, token: &Token, structure: &mut Structure) {
        let values = self.ctx.values;
        let value = match token.category {
            TokenCategory::Color if is_alphabetic_name(&token.name) => {
                values.color(token, &self.tokens, &self.groups)
            }
            TokenCategory::Color => {
                trace!(token = %token.name, "color token name is not alphabetic");
                return;
            }
            TokenCategory::Dimension => values.dimension(token),
            TokenCategory::Typography => values.typography(token, &self.tokens),
            _ => return,
        };
        if structure.insert_leaf(token.name.clone(), value).is_some() {
            trace!(token = %token.name, "duplicate key overwritten");
        }
    }
}
