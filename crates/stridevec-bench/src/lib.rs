//! Benchmark fixtures for the stridevec container.
//!
//! Provides pre-filled containers at the sizes and element widths the
//! benchmarks exercise, so every bench iterates over identical state.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stridevec::{StrideConfig, StrideVec};

/// Element width used by the scalar benchmarks.
pub const SCALAR_WIDTH: usize = 8;

/// Element width used by the wide-payload benchmarks (a cache line).
pub const WIDE_WIDTH: usize = 64;

/// Build a container of `count` sequential `u64` elements.
pub fn filled_scalar(count: usize) -> StrideVec {
    let config = StrideConfig {
        element_size: SCALAR_WIDTH,
        initial_capacity: count,
    };
    let mut vec = StrideVec::new(config).expect("bench fixture allocation");
    for value in 0..count as u64 {
        vec.push(&value.to_ne_bytes()).expect("bench fixture push");
    }
    vec
}

/// Build a container of `count` wide elements with distinct leading bytes.
pub fn filled_wide(count: usize) -> StrideVec {
    let config = StrideConfig {
        element_size: WIDE_WIDTH,
        initial_capacity: count,
    };
    let mut vec = StrideVec::new(config).expect("bench fixture allocation");
    let mut element = [0u8; WIDE_WIDTH];
    for value in 0..count {
        element[0] = value as u8;
        vec.push(&element).expect("bench fixture push");
    }
    vec
}
