//! One-octave keyboard model.
//!
//! This module is the shared model behind the renderer, the touch input
//! path, and the buzzer: which notes exist, where their keys sit on the
//! screen, what a touch resolves to, and what should be sounding this
//! frame.
//!
//! # Architecture
//!
//! ```text
//! TouchSample ──▶ KeyboardLayout::resolve ──▶ TouchTarget
//!                                                 │
//!                          OctaveShift ◀──────────┤ (octave controls)
//!                                │                │
//!                                ▼                ▼
//!                          advance_frame ──▶ FrameOutcome
//!                                             ├─ highlight: Option<Note>
//!                                             └─ sound: SoundCommand
//! ```
//!
//! Key rectangles are derived arithmetically from the display bounds at
//! [`KeyboardLayout`] construction — there is no per-key geometry table.
//! The octave-shift controls are a construction-time toggle
//! ([`LayoutConfig::octave_control`]); with the toggle off the layout has
//! no control rectangles and the offset never moves, which reproduces the
//! flat fixed-frequency behavior.
//!
//! # `no_std` compatibility
//!
//! No heap allocation anywhere. The optional `defmt` feature adds
//! `defmt::Format` derives for the public types.

mod frame;
mod layout;
mod note;
mod octave;
mod resolve;

pub use frame::{advance_frame, FrameOutcome, SoundCommand};
pub use layout::{KeyboardLayout, LayoutConfig, Rect};
pub use note::{Note, BLACK_SLOTS, NOTE_COUNT, WHITE_NOTES};
pub use octave::{OctaveShift, BASE_OCTAVE_NUMBER, MAX_OCTAVE_SHIFT};
pub use resolve::{TouchSample, TouchTarget};

/// Number of white keys in one octave (and of black-key slots between them).
pub const WHITE_KEY_COUNT: usize = 7;
