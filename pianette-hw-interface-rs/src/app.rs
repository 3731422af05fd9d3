//! The render/input/sound frame loop.
//!
//! A single steady state: sample the touch controller, resolve the sample
//! against the keyboard layout, advance the frame (octave mutation, sound
//! command, highlight), redraw the whole keyboard, apply the sound, flush,
//! sleep. Peripheral failures are logged and degraded — a failed touch
//! read counts as "released", which also silences the buzzer — so the loop
//! never exits in-band.
//!
//! This is a regular generic `async fn`; `main.rs` wraps it in a thin
//! concrete Embassy task, since tasks cannot be generic.

use defmt::{error, info, warn};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_hal_async::i2c::I2c;

use pianette::keyboard::{
    advance_frame, KeyboardLayout, LayoutConfig, OctaveShift, TouchSample,
};
use pianette_oled_display_rs::{render_keyboard, FrameView, OledDriver, Palette};
use touch_driver::{Ft6x36, TouchPoint};

use crate::buzzer::PwmBuzzer;

/// End-of-frame delay. Everything else in the frame is I2C-bound.
const FRAME_DELAY_MS: u64 = 10;

/// Run the frame loop until the task is torn down.
///
/// The buzzer is moved in so that every exit path — including the early
/// return when the display never answers — drops it and leaves the PWM
/// slice silent.
pub async fn run<DI2C, TI2C>(
    mut oled: OledDriver<DI2C>,
    mut touch: Ft6x36<TI2C>,
    mut buzzer: PwmBuzzer<'_>,
) where
    DI2C: I2c,
    TI2C: I2c,
{
    // ── Initialisation ───────────────────────────────────────────────
    if let Err(e) = oled.init().await {
        error!("OLED init failed: {}", e);
        return;
    }
    info!("OLED initialised");

    let layout = KeyboardLayout::new(LayoutConfig::default());
    let mut octave = OctaveShift::new();
    let palette = Palette::default();

    // First frame before any input arrives.
    draw(&mut oled, &layout, FrameView::idle(status(&layout, &octave)), &palette);
    present(&mut oled).await;

    info!("Frame loop running");

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        let sample = match touch.sample().await {
            Ok(point) => to_sample(point),
            Err(_) => {
                warn!("Touch read failed; treating as released");
                TouchSample::RELEASED
            }
        };

        let target = layout.resolve(sample);
        let outcome = advance_frame(target, &mut octave);

        oled.clear_buffer();
        let view = FrameView {
            highlight: outcome.highlight,
            octave_number: status(&layout, &octave),
        };
        draw(&mut oled, &layout, view, &palette);

        // Applied unconditionally every frame — level-triggered, no edge
        // detection.
        buzzer.apply(outcome.sound);

        present(&mut oled).await;

        Timer::after_millis(FRAME_DELAY_MS).await;
    }
}

/// Octave number for the status label, or `None` when the octave controls
/// are disabled.
fn status(layout: &KeyboardLayout, octave: &OctaveShift) -> Option<u8> {
    layout
        .config()
        .octave_control
        .then(|| octave.octave_number())
}

fn to_sample(point: TouchPoint) -> TouchSample {
    TouchSample {
        x: i32::from(point.x),
        y: i32::from(point.y),
        pressed: point.touched,
    }
}

/// Render into the frame buffer. Buffered drawing does no I2C.
fn draw<DI2C>(
    oled: &mut OledDriver<DI2C>,
    layout: &KeyboardLayout,
    view: FrameView,
    palette: &Palette<BinaryColor>,
) where
    DI2C: I2c,
{
    if let Some(display) = oled.display_mut() {
        if let Err(_e) = render_keyboard(display, layout, &view, palette) {
            error!("Render failed");
        }
    }
}

/// Flush the frame buffer to the panel, logging failures.
async fn present<DI2C>(oled: &mut OledDriver<DI2C>)
where
    DI2C: I2c,
{
    if let Err(e) = oled.flush().await {
        error!("Flush failed: {}", e);
    }
}
