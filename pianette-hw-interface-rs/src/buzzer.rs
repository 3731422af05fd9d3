//! PWM piezo buzzer driver.
//!
//! A square wave at a target frequency is one PWM slice programmed so that
//! `clk_sys / (divider × (top + 1))` lands on the frequency, with the
//! compare level at half the period. Silence is the same slice with the
//! compare at zero — the frequency registers keep whatever they last held,
//! which is harmless at zero duty.
//!
//! The driver is stateless by design: the frame loop applies its command
//! every frame and repeated identical writes are fine. Dropping the buzzer
//! silences it, so any exit path out of the frame loop releases the slice
//! quiet.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;

use pianette::keyboard::SoundCommand;

/// PWM clock divider.
///
/// At the 150 MHz system clock this puts the whole playable range
/// (523 Hz at the reference octave up to 987 Hz × 4 at full shift) well
/// inside the 16-bit counter.
const CLOCK_DIVIDER: u8 = 8;

/// Piezo buzzer on one PWM slice.
pub struct PwmBuzzer<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmBuzzer<'d> {
    /// Take ownership of a configured PWM slice and start silent.
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.divider = CLOCK_DIVIDER.to_fixed();
        let mut buzzer = Self { pwm, config };
        buzzer.stop();
        buzzer
    }

    /// Sound a square wave at `frequency_hz`.
    ///
    /// Frequencies below the counter range clamp to the slowest
    /// representable wrap rather than wrapping around.
    pub fn play(&mut self, frequency_hz: u32) {
        let ticks = clk_sys_freq() / (u32::from(CLOCK_DIVIDER) * frequency_hz);
        let top = ticks.saturating_sub(1).min(u32::from(u16::MAX)) as u16;
        self.config.top = top;
        // 50 % duty. Both outputs carry it so the slice works from either pin.
        self.config.compare_a = top / 2;
        self.config.compare_b = top / 2;
        self.pwm.set_config(&self.config);
    }

    /// Zero the duty cycle — silence.
    pub fn stop(&mut self) {
        self.config.compare_a = 0;
        self.config.compare_b = 0;
        self.pwm.set_config(&self.config);
    }

    /// Apply one frame's sound command.
    pub fn apply(&mut self, command: SoundCommand) {
        match command {
            SoundCommand::Play(frequency_hz) => self.play(frequency_hz),
            SoundCommand::Silence => self.stop(),
        }
    }
}

impl Drop for PwmBuzzer<'_> {
    fn drop(&mut self) {
        self.stop();
    }
}
