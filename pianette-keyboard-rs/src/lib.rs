//! Keyboard model for the pianette touch piano.
//!
//! Everything in this crate is pure, deterministic, and heap-free: the
//! chromatic note table, the derived key geometry, touch resolution, the
//! octave-shift state, and the per-frame sound policy. Hardware lives in
//! the sibling driver crates; this one runs anywhere, including host tests.

#![no_std]

pub mod keyboard;
