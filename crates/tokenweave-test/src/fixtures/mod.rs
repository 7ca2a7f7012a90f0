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

//! Canonical token sets covering the structure builder's rules.
//!
//! - **sets**: per-category repositories and their combination
//! - **builders**: fluent builder for custom token graphs

pub mod builders;
mod sets;

pub use sets::*;

use crate::FixtureList;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("color_tree", color_tree),
        ("typography_export", typography_export),
        ("dimension_roots", dimension_roots),
        ("with_deprecated", with_deprecated),
        ("comprehensive", comprehensive),
    ]
}
