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

//! # Tokenweave
//!
//! Turns a flat design token repository, groups that list child group ids
//! and token ids, into nested structures ready for style-dictionary style
//! exports.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenweave::{from_json, to_json, Exporter, TokenCategory};
//!
//! let snapshot = r##"{
//!   "tokens": [
//!     {"id": "t1", "name": "primary", "category": "color",
//!      "payload": {"kind": "color", "r": 51, "g": 102, "b": 255, "a": 1.0}}
//!   ],
//!   "groups": [
//!     {"id": "g1", "name": "Color", "category": "color", "childrenIds": ["g2"]},
//!     {"id": "g2", "name": "Brand", "category": "color", "parentGroupId": "g1",
//!      "childrenIds": ["g3"], "tokenIds": ["t1"]},
//!     {"id": "g3", "name": "Shades", "category": "color", "parentGroupId": "g2"}
//!   ]
//! }"##;
//!
//! let set = from_json(snapshot).unwrap();
//! let structure = Exporter::default().export(&set, TokenCategory::Color).unwrap();
//! let json = to_json(&structure).unwrap();
//! assert!(json.contains("\"primary\": \"#3366ff\""));
//! ```
//!
//! ## Modules
//!
//! - [`json`]: JSON output and snapshot loading
//!
//! The data model, builder and traversal live in `tokenweave-core`; the
//! commonly used types are re-exported here.
//!
//! ## Logging
//!
//! Every export runs inside an `export` span tagged with the category and
//! ends with an `info` summary. Skipped groups and tokens are reported at
//! `trace`. Install any `tracing` subscriber to see them.

mod error;
mod exporter;

pub use error::{Result, TokenweaveError};
pub use exporter::Exporter;

// Re-export core types
pub use tokenweave_core::{
    BuildConfig, BuildConfigBuilder, CssValueBuilders, DeprecationFilter, Entry, ExclusionPolicy,
    FlagDeprecationFilter, Limits, NameMatching, StatsCollector, Structure, StructureError,
    StructureErrorKind, Token, TokenCategory, TokenGroup, TokenSet, TokenValue, ValueBuilders,
};

pub mod json {
    //! JSON conversion utilities
    pub use tokenweave_json::{
        from_json, from_json_value, snapshot_to_json, to_json, to_json_value,
        token_value_to_json, AbsentPolicy, JsonError, JsonResult, ToJsonConfig,
    };
}

/// Load a token set snapshot from JSON.
///
/// # Examples
///
/// ```rust
/// use tokenweave::from_json;
///
/// let set = from_json(r#"{"tokens": [], "groups": []}"#).unwrap();
/// assert!(set.is_empty());
/// ```
#[inline]
pub fn from_json(json: &str) -> Result<TokenSet> {
    Ok(tokenweave_json::from_json(json)?)
}

/// Serialize a structure as pretty JSON with `null` absent markers.
#[inline]
pub fn to_json(structure: &Structure) -> Result<String> {
    Ok(tokenweave_json::to_json(
        structure,
        &tokenweave_json::ToJsonConfig::default(),
    )?)
}

/// Export one category with the default configuration.
///
/// # Examples
///
/// ```rust
/// use tokenweave::{export, TokenCategory, TokenSet};
///
/// let structure = export(&TokenSet::default(), TokenCategory::Typography).unwrap();
/// assert!(structure.is_empty());
/// ```
#[inline]
pub fn export(set: &TokenSet, category: TokenCategory) -> Result<Structure> {
    Exporter::default().export(set, category)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_empty() {
        assert!(from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(from_json("[1]"), Err(TokenweaveError::Json(_))));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&Structure::new()).unwrap(), "{}");
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
