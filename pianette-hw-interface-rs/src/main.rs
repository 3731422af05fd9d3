//! pianette-hw-interface
//!
//! Touch piano firmware for the Raspberry Pi Pico 2. Wires the library
//! crates into one live loop:
//!
//! 1. The FT6x36 touch controller reports the finger position.
//! 2. The keyboard model resolves it to a key or an octave control.
//! 3. The renderer redraws the keyboard (with the hit key highlighted)
//!    into the SSD1306 frame buffer and flushes it.
//! 4. The PWM buzzer sounds the resolved note, or goes quiet.
//!
//! The display and the touch controller share I2C0; the buzzer owns one
//! PWM slice, acquired here and silenced on drop.

#![no_std]
#![no_main]

mod app;
mod buzzer;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{self, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pianette_oled_display_rs::OledDriver;
use touch_driver::{Ft6x36, DEFAULT_ADDRESS as TOUCH_ADDRESS};

use crate::buzzer::PwmBuzzer;

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared I2C0 bus — the touch controller and the OLED display access it
/// through I2cDevice wrappers that serialise transactions.
static I2C_BUS: StaticCell<
    Mutex<CriticalSectionRawMutex, I2c<'static, I2C0, i2c::Async>>,
> = StaticCell::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the OLED display, sharing I2C_BUS.
type OledI2c = I2cDevice<
    'static,
    CriticalSectionRawMutex,
    I2c<'static, I2C0, i2c::Async>,
>;

/// Concrete I2C type for the touch controller, sharing I2C_BUS.
type TouchI2c = I2cDevice<
    'static,
    CriticalSectionRawMutex,
    I2c<'static, I2C0, i2c::Async>,
>;

/// Standard SSD1306 I2C address.
const OLED_ADDRESS: u8 = 0x3C;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic frame loop so it can be
/// spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn piano_task(
    oled: OledDriver<OledI2c>,
    touch: Ft6x36<TouchI2c>,
    buzzer: PwmBuzzer<'static>,
) {
    app::run(oled, touch, buzzer).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("pianette-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C_SDA → GP4   (p.PIN_4)
    // I2C_SCL → GP5   (p.PIN_5)
    // BUZZER  → GP15  (p.PIN_15)  PWM slice 7, output B
    // ———————————————————————————————————————————————————————————————————————

    // Initialise I2C0, shared between the touch controller and the display.
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_5, // SCL
        p.PIN_4, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // Wrap in a mutex so both drivers can share the peripheral safely.
    let i2c_bus = I2C_BUS.init(Mutex::new(i2c));

    // Each driver gets its own I2cDevice wrapper. The wrapper acquires the
    // mutex around each transaction, serialising bus access automatically.
    let i2c_touch = I2cDevice::new(i2c_bus);
    let i2c_oled = I2cDevice::new(i2c_bus);

    let mut touch = Ft6x36::new(i2c_touch, TOUCH_ADDRESS);
    let oled = OledDriver::new(i2c_oled, OLED_ADDRESS);

    // The buzzer's PWM slice is acquired exactly once, here; it travels
    // into the frame-loop task and is silenced when that task drops it.
    let pwm = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, pwm::Config::default());
    let buzzer = PwmBuzzer::new(pwm);

    // Probe the touch controller before entering the loop. On failure we
    // log and continue — the keyboard still renders, it just cannot hear.
    match touch.init().await {
        Ok(()) => info!("Touch controller ready"),
        Err(_) => error!("Touch controller probe failed"),
    }

    spawner.spawn(piano_task(oled, touch, buzzer)).unwrap();

    info!("Frame loop spawned");
}
