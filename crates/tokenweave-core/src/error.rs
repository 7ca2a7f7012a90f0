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

//! Error types for structure building.
//!
//! Data-quality problems never surface here; they degrade to absent subtrees.
//! Only violations of the group forest invariant are reported.

use std::fmt;
use thiserror::Error;

/// The kind of structural error that occurred while building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureErrorKind {
    /// A group id reappeared on its own ancestor path.
    Cycle,
    /// Group nesting exceeded [`Limits::max_depth`](crate::Limits).
    DepthLimit,
}

impl fmt::Display for StructureErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle => write!(f, "CycleError"),
            Self::DepthLimit => write!(f, "DepthLimitError"),
        }
    }
}

/// An error raised when the group graph is not a well-formed forest.
#[derive(Debug, Clone, Error)]
#[error("{kind} at group '{group_id}': {message}")]
pub struct StructureError {
    /// The kind of error.
    pub kind: StructureErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Id of the group where the violation was detected.
    pub group_id: String,
    /// Group names from the root down to the offending group.
    pub path: Vec<String>,
}

impl StructureError {
    /// Create a new error.
    pub fn new(
        kind: StructureErrorKind,
        message: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            group_id: group_id.into(),
            path: Vec::new(),
        }
    }

    /// Attach the name path leading to the offending group.
    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }

    pub fn cycle(message: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self::new(StructureErrorKind::Cycle, message, group_id)
    }

    pub fn depth_limit(message: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self::new(StructureErrorKind::DepthLimit, message, group_id)
    }

    /// The path joined with `/`, or `root` when empty.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join("/")
        }
    }
}

/// Result type for structure building.
pub type StructureResult<T> = Result<T, StructureError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== StructureErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display_cycle() {
        assert_eq!(format!("{}", StructureErrorKind::Cycle), "CycleError");
    }

    #[test]
    fn test_error_kind_display_depth_limit() {
        assert_eq!(
            format!("{}", StructureErrorKind::DepthLimit),
            "DepthLimitError"
        );
    }

    // ==================== StructureError tests ====================

    #[test]
    fn test_error_display() {
        let err = StructureError::cycle("group revisits its ancestor", "g-7");
        let msg = format!("{}", err);
        assert!(msg.contains("CycleError"));
        assert!(msg.contains("g-7"));
        assert!(msg.contains("group revisits its ancestor"));
    }

    #[test]
    fn test_error_with_path() {
        let err = StructureError::depth_limit("too deep", "g-1")
            .with_path(vec!["Brand".to_string(), "Shades".to_string()]);
        assert_eq!(err.kind, StructureErrorKind::DepthLimit);
        assert_eq!(err.path_string(), "Brand/Shades");
    }

    #[test]
    fn test_error_path_string_empty() {
        let err = StructureError::cycle("loop", "g-1");
        assert_eq!(err.path_string(), "root");
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(StructureError::cycle("test", "g"));
    }
}
