// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Strided accumulation over a fixed-length sequence.
//!
//! The default workload allocates ten zeros, then for each `i` in `0..10`
//! adds `i` to every element reached by stepping through the sequence 1024
//! positions at a time. The step is wider than the sequence, so only index 0
//! is ever written and the reduction is `0 + 1 + ... + 9 = 45`.

mod demo;
mod sequence;

pub use demo::{run, run_default, Report};
pub use sequence::Sequence;
