//! Touch resolution: from a raw sample to the thing under the finger.

use super::layout::KeyboardLayout;
use super::note::Note;

/// One frame's single-contact reading from the touch sensor.
///
/// Coordinates are display pixels; `pressed` is whether any contact is
/// down this frame. Nothing persists across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl TouchSample {
    /// The no-contact sample, used when the sensor has nothing (or the
    /// read failed and the frame degrades to "released").
    pub const RELEASED: TouchSample = TouchSample { x: 0, y: 0, pressed: false };
}

/// What a touch sample resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchTarget {
    /// No contact this frame.
    NoTouch,
    /// Contact outside every key and control rectangle. Normal, not an
    /// error.
    Background,
    OctaveDown,
    OctaveUp,
    Key(Note),
}

impl KeyboardLayout {
    /// Resolve a touch sample against the layout.
    ///
    /// Priority order, first match wins: octave-down button, octave-up
    /// button, black keys in slot order, white keys in order. All tests
    /// are inclusive on the rectangle edges; where rectangles overlap
    /// (black keys over white keys, shared boundary columns) the order
    /// decides.
    pub fn resolve(&self, sample: TouchSample) -> TouchTarget {
        if !sample.pressed {
            return TouchTarget::NoTouch;
        }
        let (x, y) = (sample.x, sample.y);

        if let Some(rect) = self.octave_down_rect() {
            if rect.contains(x, y) {
                return TouchTarget::OctaveDown;
            }
        }
        if let Some(rect) = self.octave_up_rect() {
            if rect.contains(x, y) {
                return TouchTarget::OctaveUp;
            }
        }
        for (note, rect) in self.black_keys() {
            if rect.contains(x, y) {
                return TouchTarget::Key(note);
            }
        }
        for (note, rect) in self.white_keys() {
            if rect.contains(x, y) {
                return TouchTarget::Key(note);
            }
        }
        TouchTarget::Background
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
