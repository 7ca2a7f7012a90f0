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

//! Root selection: which groups start each category's output tree.

use crate::config::{BuildConfig, RootSelection};
use crate::{TokenCategory, TokenGroup};
use tracing::debug;

/// Select the root groups for `category` from the full group list.
///
/// A missing container yields an empty list; it is not an error.
pub fn select_roots<'a>(
    groups: &'a [TokenGroup],
    category: TokenCategory,
    config: &BuildConfig,
) -> Vec<&'a TokenGroup> {
    let roots = apply_selection(groups, &config.root_selection(category));
    debug!(%category, roots = roots.len(), "selected root groups");
    roots
}

/// Apply one selection strategy.
pub fn apply_selection<'a>(
    groups: &'a [TokenGroup],
    selection: &RootSelection,
) -> Vec<&'a TokenGroup> {
    match selection {
        RootSelection::AllowList(names) => names
            .iter()
            .flat_map(|name| groups.iter().filter(move |g| &g.name == name))
            .collect(),
        RootSelection::Container(container) => {
            let Some(container) = groups.iter().find(|g| &g.name == container) else {
                debug!(container = %container, "root container not found");
                return Vec::new();
            };
            groups
                .iter()
                .filter(|g| g.parent_group_id.as_deref() == Some(container.id.as_str()))
                .collect()
        }
    }
}
