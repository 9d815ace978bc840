//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move path enumeration against published node counts
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `check_pin.rs` - Check context, pins and the three generation regimes
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod check_pin;
mod make_unmake;
mod proptest;
