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

//! Recursion limits for structure building.

/// Bounds applied while walking the group forest.
///
/// The group graph is expected to be shallow (tens of levels). These limits
/// turn malformed input into a [`StructureError`](crate::StructureError)
/// instead of unbounded recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum group nesting depth below a root (default: 64).
    pub max_depth: usize,
    /// Maximum alias hops a value builder follows (default: 8).
    pub max_alias_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_alias_depth: 8,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_alias_depth: usize::MAX,
        }
    }
}
