//! Async OLED display driver and keyboard renderer for the pianette.
//!
//! This crate provides [`OledDriver`], a wrapper around the [`ssd1306`]
//! crate in async buffered-graphics mode, and [`render_keyboard`], which
//! draws one frame of the piano (keys, octave controls, status label,
//! highlight) into any `embedded-graphics` draw target.
//!
//! # Quick Start
//!
//! ```ignore
//! use pianette::keyboard::{KeyboardLayout, LayoutConfig};
//! use pianette_oled_display_rs::{render_keyboard, FrameView, OledDriver, Palette};
//!
//! let mut oled = OledDriver::new(i2c, 0x3C);
//! oled.init().await?;
//!
//! let layout = KeyboardLayout::new(LayoutConfig::default());
//! let view = FrameView { highlight: None, octave_number: Some(5) };
//!
//! oled.clear_buffer();
//! if let Some(target) = oled.display_mut() {
//!     render_keyboard(target, &layout, &view, &Palette::default())?;
//! }
//! oled.flush().await?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** *(default)* — structured logging via [`defmt`].

#![no_std]

pub mod driver;
pub mod error;
pub mod render;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::OledDriver;
pub use error::OledError;
pub use render::{render_keyboard, FrameView, Palette};
