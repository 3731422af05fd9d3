//! Async driver for FT6x36-family capacitive touch controllers.
//!
//! The FT6x06/FT6x36 parts share one register map: a touch-count status
//! register followed by per-point coordinate pairs. This driver reads the
//! first contact point only, which is all the keyboard needs.
//!
//! # Example
//!
//! ```ignore
//! use touch_driver::{Ft6x36, DEFAULT_ADDRESS};
//!
//! // `i2c` is any `embedded-hal-async` I2C implementation
//! let mut touch = Ft6x36::new(i2c, DEFAULT_ADDRESS);
//! touch.init().await?;
//!
//! let point = touch.sample().await?;
//! if point.touched {
//!     // point.x / point.y are panel coordinates
//! }
//! ```

#![no_std]

pub mod driver;
pub mod error;
pub mod registers;

pub use driver::{Ft6x36, TouchPoint};
pub use error::TouchError;
pub use registers::DEFAULT_ADDRESS;
