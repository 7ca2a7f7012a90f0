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

//! Facade error type.

use tokenweave_core::StructureError;
use tokenweave_json::JsonError;

/// Errors surfaced by [`Exporter`](crate::Exporter).
#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenweaveError {
    /// Group graph is not a forest or nests too deeply
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    /// JSON conversion failed
    #[error(transparent)]
    Json(#[from] JsonError),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, TokenweaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_conversion() {
        let err: TokenweaveError = StructureError::cycle("group revisited", "g1").into();
        assert!(matches!(err, TokenweaveError::Structure(_)));
        assert!(err.to_string().starts_with("structure error: CycleError"));
    }

    #[test]
    fn test_json_error_is_transparent() {
        let err: TokenweaveError = JsonError::Parse("EOF".to_string()).into();
        assert_eq!(err.to_string(), "JSON parse error: EOF");
    }
}
