// Copyright 2026 the Mapfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration test suite for `mapfont`.
//!
//! - The `util` module builds the synthesized font containers shared by the
//!   tests.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easier to share utilities between test modules.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
