//! Error types for the touch controller driver.

use core::fmt;

/// Errors that can occur when communicating with the touch controller.
#[derive(Debug)]
pub enum TouchError<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// The device at the probed address did not identify as a FocalTech
    /// FT6x36-family controller.
    UnknownChip {
        vendor: u8,
        chip: u8,
    },
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for TouchError<E> {
    fn from(error: E) -> Self {
        TouchError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for TouchError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TouchError::I2c(e) => write!(f, "I2C error: {:?}", e),
            TouchError::UnknownChip { vendor, chip } => write!(
                f,
                "Unrecognized touch controller (vendor 0x{:02X}, chip 0x{:02X})",
                vendor, chip
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for TouchError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TouchError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            TouchError::UnknownChip { vendor, chip } => defmt::write!(
                f,
                "Unrecognized touch controller (vendor {=u8:#04x}, chip {=u8:#04x})",
                vendor,
                chip
            ),
        }
    }
}
