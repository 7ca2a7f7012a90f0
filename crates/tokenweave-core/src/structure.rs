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

//! Output structure produced by the builder.

use std::collections::HashMap;

/// A serialized leaf value produced by a value builder.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    String(String),
    Number(f64),
    /// Ordered composite, e.g. a typography style.
    Composite(Vec<(String, TokenValue)>),
}

impl TokenValue {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Look up a field of a composite value.
    pub fn field(&self, key: &str) -> Option<&TokenValue> {
        match self {
            Self::Composite(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Composite(fields) => {
                write!(f, "{{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// A value stored under a key of a [`Structure`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A token value.
    Leaf(TokenValue),
    /// A nested subgroup.
    Group(Structure),
    /// A qualifying group whose own build contributed nothing.
    Absent,
}

impl Entry {
    /// Wrap an optional subtree, mapping `None` to [`Entry::Absent`].
    pub fn from_subtree(subtree: Option<Structure>) -> Self {
        match subtree {
            Some(structure) => Self::Group(structure),
            None => Self::Absent,
        }
    }

    pub fn as_leaf(&self) -> Option<&TokenValue> {
        match self {
            Self::Leaf(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Structure> {
        match self {
            Self::Group(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Insertion-ordered mapping from token or group names to entries.
///
/// Re-inserting an existing key replaces its entry and keeps the original
/// position, so later tokens silently win name collisions. Keys are indexed,
/// so lookups and inserts do not scan the entry list.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    entries: Vec<(String, Entry)>,
    positions: HashMap<String, usize>,
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, entry)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
                None
            }
        }
    }

    pub fn insert_leaf(&mut self, key: impl Into<String>, value: TokenValue) -> Option<Entry> {
        self.insert(key, Entry::Leaf(value))
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.positions.get(key).map(|&position| &self.entries[position].1)
    }

    /// Follow a chain of group keys; the last key may name any entry.
    pub fn get_path(&self, path: &[&str]) -> Option<&Entry> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for key in parents {
            current = current.get(key)?.as_group()?;
        }
        current.get(last)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Number of leaves in this structure and all nested groups.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, e)| match e {
                Entry::Leaf(_) => 1,
                Entry::Group(s) => s.leaf_count(),
                Entry::Absent => 0,
            })
            .sum()
    }
}

/// Iterator over the entries of a [`Structure`] in insertion order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Entry)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, e)| (k.as_str(), e))
    }
}

impl<'a> IntoIterator for &'a Structure {
    type Item = (&'a str, &'a Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.iter(),
        }
    }
}
