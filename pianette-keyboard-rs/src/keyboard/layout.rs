//! Screen geometry: key and control rectangles derived from the display
//! bounds.

use super::note::{Note, BLACK_SLOTS, WHITE_NOTES};
use super::WHITE_KEY_COUNT;

// ── Rect ─────────────────────────────────────────────────────────────

/// Axis-aligned screen rectangle.
///
/// Containment is **inclusive on all four edges**, so a rectangle of
/// width `w` accepts x coordinates in `x..=x + w`. Adjacent keys share
/// their boundary column; the resolver's fixed test order decides such
/// ties. This is also why the `embedded-graphics` rectangle (exclusive at
/// the far edges) is not used for hit-testing — drawing code converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// X coordinate of the right edge (inclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Y coordinate of the bottom edge (inclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

// ── LayoutConfig ─────────────────────────────────────────────────────

/// Construction-time layout configuration.
///
/// All geometry lives here — there are no module-level layout constants.
/// [`LayoutConfig::default()`] targets the 128×64 panel. The two program
/// variants (with and without octave shifting) are one code path gated by
/// [`octave_control`](Self::octave_control).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutConfig {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Whether the octave-shift controls exist at all. Default: `true`.
    pub octave_control: bool,
    /// Width of each octave button in pixels. Default: 24.
    pub button_width: u32,
    /// Height of each octave button in pixels. Default: 12.
    pub button_height: u32,
    /// Gap between the octave buttons and the display corners. Default: 2.
    pub button_margin: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 64,
            octave_control: true,
            button_width: 24,
            button_height: 12,
            button_margin: 2,
        }
    }
}

// ── KeyboardLayout ───────────────────────────────────────────────────

/// Deterministic rectangles for every key and control on the screen.
///
/// White keys span the bottom quarter of the display at equal width; black
/// keys are half a white key wide, two-thirds a white key tall, centered
/// on the boundary between adjacent white keys, with the two standard
/// gaps. Everything is computed once at construction.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    config: LayoutConfig,
    white: [Rect; WHITE_KEY_COUNT],
    black: [Option<Rect>; WHITE_KEY_COUNT],
    octave_down: Rect,
    octave_up: Rect,
}

impl KeyboardLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let white_width = config.display_width / WHITE_KEY_COUNT as u32;
        let white_height = config.display_height / 4;
        let keyboard_y = (config.display_height - white_height) as i32;

        let black_width = white_width / 2;
        let black_height = white_height * 2 / 3;

        let mut white = [Rect { x: 0, y: 0, width: 0, height: 0 }; WHITE_KEY_COUNT];
        for (i, rect) in white.iter_mut().enumerate() {
            *rect = Rect {
                x: i as i32 * white_width as i32,
                y: keyboard_y,
                width: white_width,
                height: white_height,
            };
        }

        let mut black = [None; WHITE_KEY_COUNT];
        for (i, slot) in black.iter_mut().enumerate() {
            if BLACK_SLOTS[i].is_some() {
                *slot = Some(Rect {
                    x: (i as i32 + 1) * white_width as i32 - black_width as i32 / 2,
                    y: keyboard_y,
                    width: black_width,
                    height: black_height,
                });
            }
        }

        let margin = config.button_margin as i32;
        let octave_down = Rect {
            x: margin,
            y: margin,
            width: config.button_width,
            height: config.button_height,
        };
        let octave_up = Rect {
            x: config.display_width as i32 - margin - config.button_width as i32,
            y: margin,
            width: config.button_width,
            height: config.button_height,
        };

        Self { config, white, black, octave_down, octave_up }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// White keys left to right, paired with their notes.
    pub fn white_keys(&self) -> impl Iterator<Item = (Note, &Rect)> {
        WHITE_NOTES.iter().copied().zip(self.white.iter())
    }

    /// Occupied black-key slots left to right, paired with their notes.
    pub fn black_keys(&self) -> impl Iterator<Item = (Note, &Rect)> {
        BLACK_SLOTS
            .iter()
            .zip(self.black.iter())
            .filter_map(|(note, rect)| Some(((*note)?, rect.as_ref()?)))
    }

    /// Rectangle of the key sounding `note`.
    pub fn key_rect(&self, note: Note) -> &Rect {
        if let Some(i) = WHITE_NOTES.iter().position(|&n| n == note) {
            return &self.white[i];
        }
        // Every sharp note occupies exactly one black slot.
        let i = BLACK_SLOTS
            .iter()
            .position(|&n| n == Some(note))
            .expect("sharp note has a slot");
        self.black[i].as_ref().expect("occupied slot has a rect")
    }

    /// The octave-down button, when octave controls are enabled.
    pub fn octave_down_rect(&self) -> Option<&Rect> {
        self.config.octave_control.then_some(&self.octave_down)
    }

    /// The octave-up button, when octave controls are enabled.
    pub fn octave_up_rect(&self) -> Option<&Rect> {
        self.config.octave_control.then_some(&self.octave_up)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
