// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural validation and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validation** (`validate_store`) that walks the arena and the prefix
//!    index and returns the first inconsistency as an `InvariantError`.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch bugs during development.
//!
//! Diagnostics against a known original live here too, since they answer the
//! same question from the outside: did the engine do what it claims?

mod types;
pub mod contracts;

pub use types::*;
