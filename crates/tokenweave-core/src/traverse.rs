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

//! Structure traversal for emitters and analysis.
//!
//! The visitor pattern separates walking a [`Structure`] from what is done
//! with each entry. Emitters implement [`StructureVisitor`]; [`traverse`]
//! handles the recursion.
//!
//! # Example
//!
//! ```
//! use tokenweave_core::traverse::{traverse, StatsCollector};
//! use tokenweave_core::{Entry, Structure, TokenValue};
//!
//! let mut structure = Structure::new();
//! structure.insert_leaf("primary", TokenValue::string("#0000ff"));
//! structure.insert("Legacy", Entry::Absent);
//!
//! let mut stats = StatsCollector::default();
//! traverse(&structure, &mut stats).unwrap();
//! assert_eq!(stats.leaf_count, 1);
//! assert_eq!(stats.absent_count, 1);
//! ```

use crate::{Entry, Structure, TokenValue};

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Default)]
pub struct VisitorContext<'a> {
    /// Current nesting depth (0 = top level).
    pub depth: usize,
    /// Keys from the top level to the current group.
    pub path: Vec<&'a str>,
}

impl<'a> VisitorContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child context with incremented depth.
    pub fn child(&self, key: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(key);
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// Get the current path as a string (for diagnostics).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

/// Trait for visiting entries of a [`Structure`].
///
/// Only [`visit_leaf`](StructureVisitor::visit_leaf) is required.
pub trait StructureVisitor {
    /// Error type returned by visitor methods.
    type Error;

    /// Called when visiting a leaf value.
    fn visit_leaf(
        &mut self,
        key: &str,
        value: &TokenValue,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error>;

    /// Called before the entries of a nested group.
    fn begin_group(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the entries of a nested group.
    fn end_group(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for an absent marker.
    fn visit_absent(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Traverse a structure in insertion order, calling visitor methods.
pub fn traverse<V: StructureVisitor>(
    structure: &Structure,
    visitor: &mut V,
) -> Result<(), V::Error> {
    traverse_entries(structure, visitor, &VisitorContext::new())
}

fn traverse_entries<'a, V: StructureVisitor>(
    structure: &'a Structure,
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    for (key, entry) in structure {
        match entry {
            Entry::Leaf(value) => visitor.visit_leaf(key, value, ctx)?,
            Entry::Group(group) => {
                visitor.begin_group(key, ctx)?;
                traverse_entries(group, visitor, &ctx.child(key))?;
                visitor.end_group(key, ctx)?;
            }
            Entry::Absent => visitor.visit_absent(key, ctx)?,
        }
    }
    Ok(())
}

/// Statistics collector visitor for testing and summaries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsCollector {
    /// Number of leaves visited.
    pub leaf_count: usize,
    /// Number of nested groups visited.
    pub group_count: usize,
    /// Number of absent markers visited.
    pub absent_count: usize,
    /// Maximum depth reached.
    pub max_depth: usize,
}

impl StatsCollector {
    /// Collect statistics for `structure`.
    pub fn collect(structure: &Structure) -> Self {
        let mut stats = Self::default();
        match traverse(structure, &mut stats) {
            Ok(()) => stats,
            Err(never) => match never {},
        }
    }
}

impl StructureVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn visit_leaf(
        &mut self,
        _key: &str,
        _value: &TokenValue,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        self.leaf_count += 1;
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }

    fn begin_group(&mut self, _key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.group_count += 1;
        self.max_depth = self.max_depth.max(ctx.depth + 1);
        Ok(())
    }

    fn visit_absent(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.absent_count += 1;
        Ok(())
    }
}
