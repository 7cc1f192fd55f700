//! dotmat OLED Display Engine
//!
//! Character rendering and cursor addressing for page-addressed
//! monochrome OLED controllers (SSD1306, SH1106). One bit per pixel,
//! eight-pixel-tall pages, fixed-width bitmap fonts of any height.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TextDisplay                                                 │
//! │  - Cursor & addressing state, glyph renderer, region clears │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FontRef / DeviceDescriptor                                  │
//! │  - Raw byte tables read through ByteSource                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DisplayTransport (trait)                                    │
//! │  - Command / RAM / buffered-RAM byte delivery               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![no_std]

pub mod commands;
pub mod device;
pub mod display;
pub mod font;

pub use device::DeviceDescriptor;
pub use display::TextDisplay;
pub use font::FontRef;

use dotmat_driver_traits::DisplayTransport;
use spin::Mutex;

/// Transport type accepted by the process-wide display slot
pub type SharedTransport = &'static mut dyn DisplayTransport;

/// Global display instance
static DISPLAY: Mutex<Option<TextDisplay<'static, SharedTransport>>> = Mutex::new(None);

/// Register a display over `transport` as the process-wide instance,
/// replacing any previous one. The display still needs `init` and
/// `set_font`, typically from within the first `with_display` call.
pub fn install(transport: SharedTransport) {
    *DISPLAY.lock() = Some(TextDisplay::new(transport));
}

/// Run `f` against the process-wide display, if one is installed.
///
/// The slot's lock is held for the duration of `f`; this is the only
/// synchronization the crate provides.
pub fn with_display<R>(f: impl FnOnce(&mut TextDisplay<'static, SharedTransport>) -> R) -> Option<R> {
    DISPLAY.lock().as_mut().map(f)
}
