//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm. Every simulator in this crate draws
//! through [`RngManager`] so that a seed fully determines the output.

mod xorshift;

pub use xorshift::RngManager;
