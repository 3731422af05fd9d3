//! Keyboard rendering with `embedded-graphics`.
//!
//! [`render_keyboard`] draws one complete frame — white keys, black keys,
//! optional octave controls and status label, and the highlight overlay —
//! into any [`DrawTarget`]. The full keyboard is redrawn every frame;
//! there is no diffing or dirty-rectangle tracking, the buffered driver
//! flush is cheap enough at this frame rate.
//!
//! Colors come from a [`Palette`] so the same code serves the 1-bit panel
//! and any richer target; the [`Default`] palette maps the piano onto
//! [`BinaryColor`].

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_4X6, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Text},
};
use heapless::String;

use pianette::keyboard::{KeyboardLayout, Note, Rect};

// ── Palette ──────────────────────────────────────────────────────────────

/// Colors for every element of the keyboard.
///
/// The default instance targets the monochrome panel: white keys are clear
/// with a set border and label, black keys are solid with inverted labels,
/// and the highlight is a solid fill over the hit key.
pub struct Palette<C> {
    pub white_key: C,
    pub white_key_border: C,
    pub white_key_label: C,
    pub black_key: C,
    pub black_key_label: C,
    pub control: C,
    pub control_label: C,
    pub status_label: C,
    pub highlight: C,
}

impl Default for Palette<BinaryColor> {
    fn default() -> Self {
        Self {
            white_key: BinaryColor::Off,
            white_key_border: BinaryColor::On,
            white_key_label: BinaryColor::On,
            black_key: BinaryColor::On,
            black_key_label: BinaryColor::Off,
            control: BinaryColor::On,
            control_label: BinaryColor::Off,
            status_label: BinaryColor::On,
            highlight: BinaryColor::On,
        }
    }
}

// ── FrameView ────────────────────────────────────────────────────────────

/// Everything the renderer needs beyond the static layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView {
    /// Key to overlay in the highlight color, if one is pressed.
    pub highlight: Option<Note>,
    /// Octave number for the status label (`Some(5)` renders "C5");
    /// `None` when octave controls are disabled.
    pub octave_number: Option<u8>,
}

impl FrameView {
    /// The idle frame: nothing pressed.
    pub fn idle(octave_number: Option<u8>) -> Self {
        Self { highlight: None, octave_number }
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Convert a model rectangle into an `embedded-graphics` one.
///
/// The model's inclusive hit-box extends one pixel past the drawn area on
/// the right and bottom; drawing uses the nominal width and height, which
/// is what makes adjacent keys share a single boundary column.
fn to_rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.width, rect.height),
    )
}

/// Baseline for a label centered-ish in `rect`, two-thirds down.
fn label_baseline(rect: &Rect) -> Point {
    Point::new(
        rect.x + rect.width as i32 / 2,
        rect.y + rect.height as i32 * 2 / 3,
    )
}

/// Octave status text, e.g. "C5".
fn status_text(octave_number: u8) -> String<4> {
    let mut s = String::new();
    // A u8 always fits in four bytes after the leading letter's one.
    let _ = write!(s, "C{}", octave_number);
    s
}

/// Render one frame of the keyboard.
///
/// Draw order: white keys, black keys (over the white ones), octave
/// controls and status label, highlight overlay. The caller clears the
/// frame buffer first and presents afterwards.
pub fn render_keyboard<D>(
    display: &mut D,
    layout: &KeyboardLayout,
    view: &FrameView,
    palette: &Palette<D::Color>,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let white_style = PrimitiveStyleBuilder::new()
        .fill_color(palette.white_key)
        .stroke_color(palette.white_key_border)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    let white_label = MonoTextStyle::new(&FONT_6X10, palette.white_key_label);
    let black_label = MonoTextStyle::new(&FONT_4X6, palette.black_key_label);

    // ── White keys ───────────────────────────────────────────────────
    for (note, rect) in layout.white_keys() {
        to_rectangle(rect).into_styled(white_style).draw(display)?;
        Text::with_alignment(
            note.label(),
            label_baseline(rect),
            white_label,
            Alignment::Center,
        )
        .draw(display)?;
    }

    // ── Black keys, on top ───────────────────────────────────────────
    for (note, rect) in layout.black_keys() {
        to_rectangle(rect)
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .fill_color(palette.black_key)
                    .build(),
            )
            .draw(display)?;
        Text::with_alignment(
            note.label(),
            label_baseline(rect),
            black_label,
            Alignment::Center,
        )
        .draw(display)?;
    }

    // ── Octave controls ──────────────────────────────────────────────
    let control_style = PrimitiveStyleBuilder::new()
        .fill_color(palette.control)
        .build();
    let control_label = MonoTextStyle::new(&FONT_4X6, palette.control_label);

    if let Some(rect) = layout.octave_down_rect() {
        to_rectangle(rect).into_styled(control_style).draw(display)?;
        Text::with_alignment("DOWN", label_baseline(rect), control_label, Alignment::Center)
            .draw(display)?;
    }
    if let Some(rect) = layout.octave_up_rect() {
        to_rectangle(rect).into_styled(control_style).draw(display)?;
        Text::with_alignment("UP", label_baseline(rect), control_label, Alignment::Center)
            .draw(display)?;
    }

    if let Some(octave_number) = view.octave_number {
        let config = layout.config();
        let anchor = Point::new(
            config.display_width as i32 / 2,
            (config.button_margin + config.button_height) as i32 - 2,
        );
        Text::with_alignment(
            status_text(octave_number).as_str(),
            anchor,
            MonoTextStyle::new(&FONT_6X10, palette.status_label),
            Alignment::Center,
        )
        .draw(display)?;
    }

    // ── Highlight overlay ────────────────────────────────────────────
    if let Some(note) = view.highlight {
        to_rectangle(layout.key_rect(note))
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .fill_color(palette.highlight)
                    .build(),
            )
            .draw(display)?;
    }

    Ok(())
}

// ── Unit Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::Pixel;
    use pianette::keyboard::LayoutConfig;

    const WIDTH: usize = 128;
    const HEIGHT: usize = 64;

    /// Plain in-memory 1-bit frame, so rendering runs on the host.
    struct Canvas {
        pixels: [[bool; WIDTH]; HEIGHT],
    }

    impl Canvas {
        fn new() -> Self {
            Self { pixels: [[false; WIDTH]; HEIGHT] }
        }

        fn lit(&self, x: i32, y: i32) -> bool {
            self.pixels[y as usize][x as usize]
        }

        fn any_lit(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
            (y0..=y1).any(|y| (x0..=x1).any(|x| self.lit(x, y)))
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<BinaryColor>>,
        {
            for Pixel(point, color) in pixels {
                if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                    self.pixels[point.y as usize][point.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn rendered(view: FrameView, config: LayoutConfig) -> Canvas {
        let mut canvas = Canvas::new();
        let layout = KeyboardLayout::new(config);
        render_keyboard(&mut canvas, &layout, &view, &Palette::default()).unwrap();
        canvas
    }

    #[test]
    fn idle_frame_draws_key_outlines_and_black_fills() {
        let canvas = rendered(FrameView::idle(Some(5)), LayoutConfig::default());

        // Top-left corner of the C white key border.
        assert!(canvas.lit(0, 48));
        // Bottom border row of the keyboard.
        assert!(canvas.lit(4, 63));
        // White key interior stays clear (away from the label glyphs).
        assert!(!canvas.lit(2, 61));
        // Inside the C# black key fill, clear of its label glyphs.
        assert!(canvas.lit(14, 57));
    }

    #[test]
    fn highlight_fills_the_hit_key() {
        let idle = rendered(FrameView::idle(Some(5)), LayoutConfig::default());
        assert!(!idle.lit(2, 61));

        let held = rendered(
            FrameView { highlight: Some(Note::C), octave_number: Some(5) },
            LayoutConfig::default(),
        );
        assert!(held.lit(2, 61));
    }

    #[test]
    fn highlight_covers_black_keys_too() {
        let held = rendered(
            FrameView { highlight: Some(Note::Cs), octave_number: Some(5) },
            LayoutConfig::default(),
        );
        // Still solid — highlight refills the same rectangle.
        assert!(held.lit(14, 57));
    }

    #[test]
    fn octave_controls_render_only_when_enabled() {
        let with = rendered(FrameView::idle(Some(5)), LayoutConfig::default());
        // Inside the down and up buttons.
        assert!(with.lit(3, 3));
        assert!(with.lit(124, 3));
        // Status label glyphs near the top center.
        assert!(with.any_lit(56, 2, 72, 13));

        let without = rendered(
            FrameView::idle(None),
            LayoutConfig { octave_control: false, ..LayoutConfig::default() },
        );
        assert!(!without.lit(3, 3));
        assert!(!without.lit(124, 3));
        assert!(!without.any_lit(56, 2, 72, 13));
    }

    #[test]
    fn status_text_formats_the_octave_number() {
        assert_eq!(status_text(5).as_str(), "C5");
        assert_eq!(status_text(7).as_str(), "C7");
    }
}
