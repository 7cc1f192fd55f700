//! 8x16 segment-style numeric font, codes 0x2D-0x3A ('-' through ':')
//!
//! Two pages per glyph, page-major: eight top-half column bytes, then
//! eight bottom-half column bytes. Intended for counters and readouts
//! where digits should dominate the panel.

/// Raw font table: 4-byte header plus 14 glyphs of 16 bytes each
#[rustfmt::skip]
pub static FONT_8X16_DIGITS: [u8; 228] = [
    8, 16, 0x2D, 14,
    // '-'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    // '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0xE0, 0x00, 0x00, 0x00,
    // '/'
    0x00, 0x00, 0x00, 0x00, 0xC0, 0x30, 0x0C, 0x03,
    0xC0, 0x30, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00,
    // '0'
    0xFF, 0xFF, 0x03, 0x03, 0x03, 0x03, 0xFF, 0xFF,
    0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xFF,
    // '1'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF,
    // '2'
    0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0xFF, 0xFF,
    0xFF, 0xFF, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1,
    // '3'
    0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0xFF, 0xFF,
    0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xFF, 0xFF,
    // '4'
    0xFF, 0xFF, 0x80, 0x80, 0x80, 0x80, 0xFF, 0xFF,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFF, 0xFF,
    // '5'
    0xFF, 0xFF, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83,
    0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xFF, 0xFF,
    // '6'
    0xFF, 0xFF, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83,
    0xFF, 0xFF, 0xC1, 0xC1, 0xC1, 0xC1, 0xFF, 0xFF,
    // '7'
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF,
    // '8'
    0xFF, 0xFF, 0x83, 0x83, 0x83, 0x83, 0xFF, 0xFF,
    0xFF, 0xFF, 0xC1, 0xC1, 0xC1, 0xC1, 0xFF, 0xFF,
    // '9'
    0xFF, 0xFF, 0x83, 0x83, 0x83, 0x83, 0xFF, 0xFF,
    0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0xFF, 0xFF,
    // ':'
    0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00,
];
