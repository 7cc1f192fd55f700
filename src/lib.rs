//! dotmat - text on page-addressed monochrome OLEDs
//!
//! Umbrella crate re-exporting the display stack: the hardware seam
//! traits, the rendering engine, and the builtin font tables.
//!
//! ```ignore
//! use dotmat::{device, FontRef, TextDisplay};
//!
//! let mut display = TextDisplay::new(transport);
//! display.init(&device::SSD1306_128X64)?;
//! display.set_font(FontRef::new(&dotmat::fonts::FONT_5X7_TABLE));
//! display.put_str("hello");
//! ```

#![no_std]

pub use dotmat_driver_oled::{
    commands, device, install, with_display, DeviceDescriptor, FontRef, SharedTransport,
    TextDisplay,
};
pub use dotmat_driver_traits::{
    ByteSource, DisplayTransport, DriverError, DriverResult, MappedTable, RamTable, WriteMode,
};
pub use dotmat_fonts as fonts;
