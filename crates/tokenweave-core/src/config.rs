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

//! Build configuration: exclusion policy, root selection and limits.

use crate::{Limits, TokenCategory};
use std::collections::BTreeSet;

/// Administrative groups that never reach the output, stored lowercase.
pub const DEFAULT_EXCLUDED_GROUPS: &[&str] = &[
    "brandalias",
    "systemramps",
    "system",
    "systemtypography",
    "figma-inline-links",
];

/// Groups whose names contain this marker are internal.
pub const INTERNAL_NAME_MARKER: char = '_';

/// Default container for color roots.
pub const DEFAULT_COLOR_CONTAINER: &str = "Color";

/// Default container for typography roots.
pub const DEFAULT_TYPOGRAPHY_CONTAINER: &str = "export";

/// Default semantic roots for dimensions, in output order.
pub const DEFAULT_DIMENSION_ROOTS: &[&str] = &["padding", "border", "radius", "gap"];

/// How a group name is compared against the exclusion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatching {
    /// The name must equal an entry verbatim.
    Exact,
    /// The name is lowercased before comparison.
    CaseInsensitive,
}

/// One normalized exclusion set consulted with a per-level matching rule.
///
/// Root groups are matched [`NameMatching::Exact`] and nested groups
/// [`NameMatching::CaseInsensitive`] by default, so a root named `System`
/// survives while a nested `System` is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    names: BTreeSet<String>,
    root_matching: NameMatching,
    nested_matching: NameMatching,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_GROUPS.iter().copied())
    }
}

impl ExclusionPolicy {
    /// Build a policy from names; entries are normalized to lowercase.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().to_lowercase()).collect(),
            root_matching: NameMatching::Exact,
            nested_matching: NameMatching::CaseInsensitive,
        }
    }

    /// The default names matched case-insensitively at every level.
    pub fn unified() -> Self {
        Self::default().with_root_matching(NameMatching::CaseInsensitive)
    }

    pub fn with_root_matching(mut self, matching: NameMatching) -> Self {
        self.root_matching = matching;
        self
    }

    pub fn with_nested_matching(mut self, matching: NameMatching) -> Self {
        self.nested_matching = matching;
        self
    }

    pub fn root_matching(&self) -> NameMatching {
        self.root_matching
    }

    pub fn nested_matching(&self) -> NameMatching {
        self.nested_matching
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` is excluded under `matching`.
    pub fn matches(&self, name: &str, matching: NameMatching) -> bool {
        match matching {
            NameMatching::Exact => self.names.contains(name),
            NameMatching::CaseInsensitive => self.names.contains(&name.to_lowercase()),
        }
    }

    pub fn excludes_root(&self, name: &str) -> bool {
        self.matches(name, self.root_matching)
    }

    pub fn excludes_nested(&self, name: &str) -> bool {
        self.matches(name, self.nested_matching)
    }
}

/// Strategy for picking the entry points of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSelection {
    /// Groups named exactly one of these, in list order.
    AllowList(Vec<String>),
    /// Direct children of the first group with this exact name.
    Container(String),
}

/// Configuration for one structure build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub exclusions: ExclusionPolicy,
    pub color_container: String,
    pub typography_container: String,
    pub dimension_roots: Vec<String>,
    pub limits: Limits,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionPolicy::default(),
            color_container: DEFAULT_COLOR_CONTAINER.to_string(),
            typography_container: DEFAULT_TYPOGRAPHY_CONTAINER.to_string(),
            dimension_roots: DEFAULT_DIMENSION_ROOTS.iter().map(|s| s.to_string()).collect(),
            limits: Limits::default(),
        }
    }
}

impl BuildConfig {
    /// Create a builder for ergonomic configuration.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
    }

    /// Root selection strategy for `category`.
    ///
    /// Dimension and typography have dedicated strategies; every other
    /// category goes through the color container.
    pub fn root_selection(&self, category: TokenCategory) -> RootSelection {
        match category {
            TokenCategory::Dimension => RootSelection::AllowList(self.dimension_roots.clone()),
            TokenCategory::Typography => {
                RootSelection::Container(self.typography_container.clone())
            }
            _ => RootSelection::Container(self.color_container.clone()),
        }
    }
}

/// Builder for [`BuildConfig`].
///
/// # Examples
///
/// ```
/// use tokenweave_core::{BuildConfig, ExclusionPolicy};
///
/// let config = BuildConfig::builder()
///     .color_container("Colors")
///     .exclusions(ExclusionPolicy::unified())
///     .max_depth(16)
///     .build();
///
/// assert_eq!(config.color_container, "Colors");
/// assert_eq!(config.limits.max_depth, 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildConfigBuilder {
    config: BuildConfig,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclusions(mut self, exclusions: ExclusionPolicy) -> Self {
        self.config.exclusions = exclusions;
        self
    }

    pub fn color_container(mut self, name: impl Into<String>) -> Self {
        self.config.color_container = name.into();
        self
    }

    pub fn typography_container(mut self, name: impl Into<String>) -> Self {
        self.config.typography_container = name.into();
        self
    }

    pub fn dimension_roots<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.dimension_roots = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Set the maximum group nesting depth (default: 64).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.limits.max_depth = depth;
        self
    }

    /// Set the maximum alias chain length (default: 8).
    pub fn max_alias_depth(mut self, depth: usize) -> Self {
        self.config.limits.max_alias_depth = depth;
        self
    }

    pub fn build(self) -> BuildConfig {
        self.config
    }
}
