//! FT6x36 register addresses and device constants.
//!
//! Single-byte register addressing. The coordinate registers pack a 12-bit
//! value across a high/low byte pair; the top bits of the high byte carry
//! event flags and must be masked off.

// ---------------------------------------------------------------------------
// Operating registers
// ---------------------------------------------------------------------------

/// First register of the status/coordinate block (device mode).
pub const DEV_MODE: u8 = 0x00;

/// Number of active touch points, in the low nibble.
pub const TD_STATUS: u8 = 0x02;

/// Point 1 X high byte: event flag in bits 7:6, X\[11:8\] in bits 3:0.
pub const P1_XH: u8 = 0x03;

/// Point 1 X low byte.
pub const P1_XL: u8 = 0x04;

/// Point 1 Y high byte: touch ID in bits 7:4, Y\[11:8\] in bits 3:0.
pub const P1_YH: u8 = 0x05;

/// Point 1 Y low byte.
pub const P1_YL: u8 = 0x06;

// ---------------------------------------------------------------------------
// Configuration registers
// ---------------------------------------------------------------------------

/// Touch-detection threshold. Smaller is more sensitive.
pub const TH_GROUP: u8 = 0x80;

/// Chip identifier: 0x06 (FT6206), 0x36 (FT6236) or 0x64 (FT6336).
pub const CHIP_ID: u8 = 0xA3;

/// Vendor identifier, always 0x11 on FocalTech parts.
pub const FOCALTECH_ID: u8 = 0xA8;

// ---------------------------------------------------------------------------
// Device constants
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address for FT6x36 controllers.
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Expected value of [`FOCALTECH_ID`].
pub const VENDOR_FOCALTECH: u8 = 0x11;

/// Known [`CHIP_ID`] values across the family.
pub const KNOWN_CHIP_IDS: [u8; 3] = [0x06, 0x36, 0x64];

/// Default [`TH_GROUP`] threshold, matching the vendor recommendation.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Length of the status/coordinate block read each sample, starting at
/// [`DEV_MODE`] and ending at [`P1_YL`].
pub const SAMPLE_LEN: usize = 7;
