//! Per-frame policy: one touch target in, one sound command out.

use super::note::Note;
use super::octave::OctaveShift;
use super::resolve::TouchTarget;

/// The single authoritative sound state for one frame.
///
/// Level-triggered: the loop applies the command unconditionally every
/// frame, with no comparison against the previous frame, so repeated
/// identical commands are expected and harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundCommand {
    /// Sound a square wave at the given frequency.
    Play(u32),
    /// Zero duty cycle — silence.
    Silence,
}

/// Everything one frame of input produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameOutcome {
    /// Key to redraw in the highlight color, if one was hit.
    pub highlight: Option<Note>,
    /// What the buzzer should do this frame.
    pub sound: SoundCommand,
}

/// Advance one frame: mutate the octave on control touches and decide the
/// frame's highlight and sound.
///
/// Exactly one [`SoundCommand`] comes out of every frame. Only a key hit
/// plays; octave controls, background contact, and no contact are all
/// silent frames.
pub fn advance_frame(target: TouchTarget, octave: &mut OctaveShift) -> FrameOutcome {
    match target {
        TouchTarget::Key(note) => FrameOutcome {
            highlight: Some(note),
            sound: SoundCommand::Play(octave.frequency_hz(note)),
        },
        TouchTarget::OctaveDown => {
            octave.shift_down();
            FrameOutcome { highlight: None, sound: SoundCommand::Silence }
        }
        TouchTarget::OctaveUp => {
            octave.shift_up();
            FrameOutcome { highlight: None, sound: SoundCommand::Silence }
        }
        TouchTarget::NoTouch | TouchTarget::Background => {
            FrameOutcome { highlight: None, sound: SoundCommand::Silence }
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layout::{KeyboardLayout, LayoutConfig};
    use crate::keyboard::resolve::TouchSample;

    fn pressed(x: i32, y: i32) -> TouchSample {
        TouchSample { x, y, pressed: true }
    }

    #[test]
    fn key_hit_plays_and_highlights() {
        let mut octave = OctaveShift::new();
        let outcome = advance_frame(TouchTarget::Key(Note::A), &mut octave);
        assert_eq!(outcome.highlight, Some(Note::A));
        assert_eq!(outcome.sound, SoundCommand::Play(880));
    }

    #[test]
    fn key_hit_respects_the_octave_shift() {
        let mut octave = OctaveShift::new();
        octave.shift_up();
        let outcome = advance_frame(TouchTarget::Key(Note::C), &mut octave);
        assert_eq!(outcome.sound, SoundCommand::Play(1046));
    }

    #[test]
    fn octave_controls_mutate_and_stay_silent() {
        let mut octave = OctaveShift::new();
        let up = advance_frame(TouchTarget::OctaveUp, &mut octave);
        assert_eq!(octave.offset(), 1);
        assert_eq!(up.sound, SoundCommand::Silence);
        assert_eq!(up.highlight, None);

        let down = advance_frame(TouchTarget::OctaveDown, &mut octave);
        assert_eq!(octave.offset(), 0);
        assert_eq!(down.sound, SoundCommand::Silence);
    }

    #[test]
    fn background_and_release_are_silent() {
        let mut octave = OctaveShift::new();
        for target in [TouchTarget::Background, TouchTarget::NoTouch] {
            let outcome = advance_frame(target, &mut octave);
            assert_eq!(outcome.highlight, None);
            assert_eq!(outcome.sound, SoundCommand::Silence);
        }
    }

    // ── End-to-end scenarios through layout + frame ──────────────────

    #[test]
    fn touching_g_center_plays_783_then_release_silences() {
        let layout = KeyboardLayout::new(LayoutConfig::default());
        let mut octave = OctaveShift::new();

        let g = layout.key_rect(Note::G);
        let x = g.x + g.width as i32 / 2;
        let y = g.bottom() - 2;
        let hit = layout.resolve(pressed(x, y));
        let outcome = advance_frame(hit, &mut octave);
        assert_eq!(outcome.highlight, Some(Note::G));
        assert_eq!(outcome.sound, SoundCommand::Play(783));

        // Next frame the finger is up.
        let released = layout.resolve(TouchSample::RELEASED);
        let outcome = advance_frame(released, &mut octave);
        assert_eq!(outcome.sound, SoundCommand::Silence);
        assert_eq!(outcome.highlight, None);
    }

    #[test]
    fn c_sharp_over_c_overlap_plays_c_sharp() {
        let layout = KeyboardLayout::new(LayoutConfig::default());
        let mut octave = OctaveShift::new();

        let cs = layout.key_rect(Note::Cs);
        let hit = layout.resolve(pressed(cs.x + 1, cs.y + 1));
        let outcome = advance_frame(hit, &mut octave);
        assert_eq!(outcome.highlight, Some(Note::Cs));
        assert_eq!(outcome.sound, SoundCommand::Play(554));
    }

    #[test]
    fn saturated_octave_plays_quadrupled_frequencies() {
        let layout = KeyboardLayout::new(LayoutConfig::default());
        let mut octave = OctaveShift::new();
        let up = *layout.octave_up_rect().unwrap();

        // Four presses: saturates at +2.
        for _ in 0..4 {
            let hit = layout.resolve(pressed(up.x + 1, up.y + 1));
            advance_frame(hit, &mut octave);
        }
        let outcome = advance_frame(TouchTarget::Key(Note::C), &mut octave);
        assert_eq!(outcome.sound, SoundCommand::Play(523 * 4));
    }

    #[test]
    fn fixed_variant_always_plays_base_frequencies() {
        let layout = KeyboardLayout::new(LayoutConfig {
            octave_control: false,
            ..LayoutConfig::default()
        });
        let mut octave = OctaveShift::new();

        // Where the up button would be, there is nothing to press.
        let corner = layout.resolve(pressed(125, 3));
        advance_frame(corner, &mut octave);
        assert_eq!(octave.offset(), 0);

        let g = layout.key_rect(Note::G);
        let hit = layout.resolve(pressed(g.x + 2, g.bottom() - 2));
        assert_eq!(
            advance_frame(hit, &mut octave).sound,
            SoundCommand::Play(783)
        );
    }
}
