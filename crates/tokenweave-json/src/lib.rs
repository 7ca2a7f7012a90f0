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

//! JSON conversion for token structures.
//!
//! Two directions are covered:
//!
//! - [`to_json`] / [`to_json_value`]: write a built [`Structure`] as nested
//!   JSON objects, keys in structure order.
//! - [`from_json`]: load a [`TokenSet`] snapshot of `tokens` and `groups`.
//!
//! # Examples
//!
//! ```rust
//! use tokenweave_core::{Entry, Structure, TokenValue};
//! use tokenweave_json::{to_json, AbsentPolicy, ToJsonConfig};
//!
//! let mut brand = Structure::new();
//! brand.insert_leaf("primary", TokenValue::string("#3366ff"));
//! let mut root = Structure::new();
//! root.insert("Brand", Entry::Group(brand));
//! root.insert("Neutral", Entry::Absent);
//!
//! let config = ToJsonConfig { absent: AbsentPolicy::Omit, pretty: false };
//! assert_eq!(to_json(&root, &config).unwrap(), r##"{"Brand":{"primary":"#3366ff"}}"##);
//! ```
//!
//! [`Structure`]: tokenweave_core::Structure
//! [`TokenSet`]: tokenweave_core::TokenSet

mod error;
mod from_json;
mod to_json;

pub use error::{JsonError, JsonResult};
pub use from_json::{from_json, from_json_value, snapshot_to_json};
pub use to_json::{to_json, to_json_value, token_value_to_json, AbsentPolicy, ToJsonConfig};
