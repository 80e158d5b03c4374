// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod accumulator;   // sequence + strided write pass
pub mod config;        // workload shape + loaders
pub mod errors;        // error handling
pub mod observability;
