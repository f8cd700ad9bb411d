// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures that keep merge-candidate lookup cheap.
//!
//! There is only one today: a fixed-length prefix index rebound on every merge.

mod prefix;

pub use prefix::*;
