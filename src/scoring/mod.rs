// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The key idea is that field weight dominates match quality. A slightly
//! misspelled name match still beats a perfect hit deep in the description.

mod core;
pub mod ranking;

pub use core::*;
