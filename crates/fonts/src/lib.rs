//! Builtin Font Tables for dotmat
//!
//! Raw byte tables in the engine's font layout: a four-byte header
//! (width, height, first code, count) followed by page-major glyph
//! bitmaps. Each table is paired with a ready [`RamTable`] wrapper so a
//! font handle is one expression away:
//!
//! ```ignore
//! display.set_font(FontRef::new(&dotmat_fonts::FONT_5X7_TABLE));
//! ```

#![no_std]

mod font5x7;
mod font8x16_digits;

pub use font5x7::FONT_5X7;
pub use font8x16_digits::FONT_8X16_DIGITS;

use dotmat_driver_traits::RamTable;

/// 5x7 system font as a byte source
pub static FONT_5X7_TABLE: RamTable<'static> = RamTable::new(&FONT_5X7);

/// 8x16 numeric font as a byte source
pub static FONT_8X16_DIGITS_TABLE: RamTable<'static> = RamTable::new(&FONT_8X16_DIGITS);
