//! Core OLED driver wrapping the `ssd1306` crate in async buffered
//! graphics mode.
//!
//! [`OledDriver`] owns the display lifecycle: construction without I2C
//! traffic, explicit async initialisation, frame-buffer drawing through
//! `embedded-graphics`, and flush-to-hardware.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::OledError;

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for an SSD1306 128×64 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 initialisation sequence.
/// 3. Draw into the frame buffer via [`OledDriver::display_mut()`].
/// 4. [`OledDriver::flush()`] — transfers the frame buffer to hardware.
///
/// Drawing never touches the bus; only `init()` and `flush()` do, which
/// keeps the frame loop free to render while nothing is in flight.
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    /// Set once `init()` succeeds; gates `flush()` and `display_mut()`.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. [`init()`](Self::init) must succeed
    /// before any display operation.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display =
            Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
                .into_buffered_graphics_mode();

        Self { display, initialized: false }
    }

    /// Send the SSD1306 initialisation command sequence.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer.
    ///
    /// No I2C traffic — the panel is unchanged until
    /// [`flush()`](Self::flush).
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Transfer the frame buffer to the panel.
    ///
    /// At 100 kHz I2C a full 1024-byte frame takes tens of milliseconds;
    /// the frame loop's cadence absorbs this.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before a successful
    /// [`init()`](Self::init), [`OledError::Display`] on bus failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// Mutable access to the frame buffer as an `embedded-graphics`
    /// [`DrawTarget`], or `None` before initialisation.
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        self.initialized.then_some(&mut self.display)
    }

    /// Whether [`init()`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
