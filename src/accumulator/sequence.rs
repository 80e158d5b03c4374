// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fixed-length, zero-initialized integer sequence.

/// A run of `i32` values whose length is fixed when it is created.
///
/// The backing storage is a boxed slice, so nothing can grow or shrink it
/// after [`Sequence::zeroed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Box<[i32]>,
}

impl Sequence {
    /// Allocate `length` zeros.
    pub fn zeroed(length: usize) -> Self {
        Self {
            values: vec![0; length].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Strided write pass.
    ///
    /// For every outer index `i` in `0..iterations`, adds `i` to each element
    /// at `0, stride, 2 * stride, ...` below the sequence length. Returns how
    /// many element writes were made. Additions wrap on overflow.
    ///
    /// # Panics
    /// Panics if `stride` is zero. Workload validation rejects a zero stride
    /// before a sequence is ever built.
    ///
    /// ```
    /// use stride_sum::accumulator::Sequence;
    ///
    /// let mut seq = Sequence::zeroed(10);
    /// let writes = seq.strided_accumulate(10, 1024);
    ///
    /// assert_eq!(writes, 10);
    /// assert_eq!(seq.get(0), Some(45));
    /// ```
    pub fn strided_accumulate(&mut self, iterations: usize, stride: usize) -> usize {
        let mut writes = 0;
        // Tracks the outer index `i` modulo 2^32 as an `i32`.
        let mut addend = 0i32;
        for _ in 0..iterations {
            for j in (0..self.values.len()).step_by(stride) {
                self.values[j] = self.values[j].wrapping_add(addend);
                writes += 1;
            }
            addend = addend.wrapping_add(1);
        }
        writes
    }

    /// Reduce to a single scalar. Wraps on overflow.
    pub fn sum(&self) -> i32 {
        self.values
            .iter()
            .fold(0i32, |acc, &value| acc.wrapping_add(value))
    }
}
