// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use stride_sum::accumulator::run_default;
use stride_sum::observability::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let report = run_default();
    println!("{}", report);

    Ok(())
}
