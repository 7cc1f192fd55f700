//! SSD1306/SH1106 controller commands
//!
//! Values are controller constants and must be preserved bit-exactly.
//! Column and page commands carry their operand OR'd into the low bits.

/// Set lower column start address (OR low nibble of column)
pub const SET_LOW_COLUMN: u8 = 0x00;
/// Set higher column start address (OR high nibble of column)
pub const SET_HIGH_COLUMN: u8 = 0x10;
/// Set memory addressing mode (followed by mode byte)
pub const MEMORY_MODE: u8 = 0x20;
/// Set display start line (OR line 0-63)
pub const SET_START_LINE: u8 = 0x40;
/// Set contrast (followed by contrast byte)
pub const SET_CONTRAST: u8 = 0x81;
/// Charge pump setting (followed by enable byte, SSD1306)
pub const CHARGE_PUMP: u8 = 0x8D;
/// Segment remap (OR 1 to mirror horizontally)
pub const SEG_REMAP: u8 = 0xA0;
/// Resume display from RAM content
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
/// Non-inverted display
pub const NORMAL_DISPLAY: u8 = 0xA6;
/// Inverted display
pub const INVERT_DISPLAY: u8 = 0xA7;
/// Set multiplex ratio (followed by ratio byte)
pub const SET_MULTIPLEX: u8 = 0xA8;
/// DC-DC converter control (followed by on/off byte, SH1106)
pub const DC_DC_CONTROL: u8 = 0xAD;
/// Display off (sleep)
pub const DISPLAY_OFF: u8 = 0xAE;
/// Display on
pub const DISPLAY_ON: u8 = 0xAF;
/// Set page start address (OR page 0-7)
pub const SET_START_PAGE: u8 = 0xB0;
/// COM output scan from COM0
pub const COM_SCAN_INC: u8 = 0xC0;
/// COM output scan to COM0
pub const COM_SCAN_DEC: u8 = 0xC8;
/// Set display offset (followed by offset byte)
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
/// Set display clock divide ratio (followed by ratio byte)
pub const SET_CLOCK_DIV: u8 = 0xD5;
/// Set pre-charge period (followed by period byte)
pub const SET_PRECHARGE: u8 = 0xD9;
/// Set COM pins hardware configuration (followed by config byte)
pub const SET_COM_PINS: u8 = 0xDA;
/// Set VCOMH deselect level (followed by level byte)
pub const SET_VCOM_DETECT: u8 = 0xDB;
