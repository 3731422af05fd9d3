//! FT6x36 driver: probe, configuration, and single-contact sampling.

use embedded_hal_async::i2c::I2c;

use crate::error::TouchError;
use crate::registers::{
    CHIP_ID, DEFAULT_THRESHOLD, DEV_MODE, FOCALTECH_ID, KNOWN_CHIP_IDS, P1_XH, P1_XL, P1_YH,
    P1_YL, SAMPLE_LEN, TD_STATUS, TH_GROUP, VENDOR_FOCALTECH,
};

/// One sample of the first contact point.
///
/// Coordinates are panel pixels; `touched` is whether a contact is down.
/// When `touched` is `false` the coordinates are whatever the controller
/// last latched and carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
    pub touched: bool,
}

/// Async driver for an FT6x36-family capacitive touch controller.
///
/// Reads the status/coordinate register block in one bus transaction per
/// sample. Only the first contact point is reported.
pub struct Ft6x36<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ft6x36<I2C>
where
    I2C: I2c,
{
    /// Create a new driver.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit device address (typically
    ///   [`DEFAULT_ADDRESS`](crate::registers::DEFAULT_ADDRESS))
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Probe the controller identity and apply the default touch
    /// threshold.
    ///
    /// # Errors
    /// * [`TouchError::UnknownChip`] if the vendor or chip registers do
    ///   not match a FocalTech FT6x36-family part
    /// * [`TouchError::I2c`] on communication failure
    pub async fn init(&mut self) -> Result<(), TouchError<I2C::Error>> {
        let vendor = self.read_register(FOCALTECH_ID).await?;
        let chip = self.read_register(CHIP_ID).await?;
        if vendor != VENDOR_FOCALTECH || !KNOWN_CHIP_IDS.contains(&chip) {
            return Err(TouchError::UnknownChip { vendor, chip });
        }

        self.i2c
            .write(self.address, &[TH_GROUP, DEFAULT_THRESHOLD])
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Read the current first-contact sample.
    ///
    /// One `write_read` transaction covering the whole status/coordinate
    /// block; decoding is pure (see [`decode_sample`]).
    ///
    /// # Errors
    /// Returns [`TouchError::I2c`] on communication failure.
    pub async fn sample(&mut self) -> Result<TouchPoint, TouchError<I2C::Error>> {
        let mut buf = [0u8; SAMPLE_LEN];
        self.i2c
            .write_read(self.address, &[DEV_MODE], &mut buf)
            .await?;
        Ok(decode_sample(&buf))
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    /// Read a single register.
    async fn read_register(&mut self, register: u8) -> Result<u8, TouchError<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .await?;
        Ok(buf[0])
    }
}

/// Decode the raw status/coordinate block into a [`TouchPoint`].
///
/// The contact count is the low nibble of TD_STATUS; 1 or 2 means a
/// contact is down. An undriven controller can float the register to 0x0F,
/// so anything above 2 is treated as no contact. Coordinates are the
/// 12-bit values from the XH/XL and YH/YL pairs with the event-flag and
/// touch-ID bits masked off the high bytes.
pub fn decode_sample(buf: &[u8; SAMPLE_LEN]) -> TouchPoint {
    // The block starts at DEV_MODE (0x00), so register addresses double
    // as buffer offsets.
    let contacts = buf[TD_STATUS as usize] & 0x0F;
    let touched = (1..=2).contains(&contacts);

    let x = u16::from(buf[P1_XH as usize] & 0x0F) << 8 | u16::from(buf[P1_XL as usize]);
    let y = u16::from(buf[P1_YH as usize] & 0x0F) << 8 | u16::from(buf[P1_YL as usize]);

    TouchPoint { x, y, touched }
}

// ── Unit Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn block(contacts: u8, xh: u8, xl: u8, yh: u8, yl: u8) -> [u8; SAMPLE_LEN] {
        [0, 0, contacts, xh, xl, yh, yl]
    }

    #[test]
    fn no_contacts_means_untouched() {
        let point = decode_sample(&block(0, 0, 0, 0, 0));
        assert!(!point.touched);
    }

    #[test]
    fn one_and_two_contacts_mean_touched() {
        assert!(decode_sample(&block(1, 0, 50, 0, 60)).touched);
        assert!(decode_sample(&block(2, 0, 50, 0, 60)).touched);
    }

    #[test]
    fn floating_status_nibble_means_untouched() {
        // 0x0F is what an undriven bus reads back.
        assert!(!decode_sample(&block(0x0F, 0, 0, 0, 0)).touched);
        assert!(!decode_sample(&block(0x03, 0, 0, 0, 0)).touched);
    }

    #[test]
    fn upper_status_bits_are_ignored() {
        // Device-mode bits above the count nibble must not register.
        assert!(decode_sample(&block(0xF1, 0, 0, 0, 0)).touched);
        assert!(!decode_sample(&block(0xF0, 0, 0, 0, 0)).touched);
    }

    #[test]
    fn coordinates_combine_high_and_low_bytes() {
        let point = decode_sample(&block(1, 0x01, 0x23, 0x00, 0x40));
        assert_eq!(point.x, 0x123);
        assert_eq!(point.y, 0x40);
    }

    #[test]
    fn event_flag_and_id_bits_are_masked() {
        // Bits 7:6 of XH are the event flag, bits 7:4 of YH the touch ID.
        let point = decode_sample(&block(1, 0x81, 0x23, 0xF0, 0x40));
        assert_eq!(point.x, 0x123);
        assert_eq!(point.y, 0x40);
    }

    #[test]
    fn zero_coordinates_survive() {
        let point = decode_sample(&block(1, 0, 0, 0, 0));
        assert_eq!((point.x, point.y), (0, 0));
    }
}
