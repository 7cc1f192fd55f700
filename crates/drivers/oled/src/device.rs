//! Device descriptors
//!
//! A descriptor bundles the controller bring-up command table with the
//! panel geometry. Builtin descriptors cover the common SSD1306 and
//! SH1106 module variants; boards with other panels supply their own.

use dotmat_driver_traits::{ByteSource, RamTable};

use crate::commands::*;

/// Everything bring-up needs to know about a display module.
pub struct DeviceDescriptor<'a> {
    /// Initialization command table, sent verbatim
    pub init_cmds: &'a dyn ByteSource,
    /// Number of command bytes in the table
    pub init_len: u8,
    /// Panel width in pixels
    pub width: u8,
    /// Panel height in pixels, must be a multiple of 8
    pub height: u8,
    /// Controller column origin shift (SH1106 RAM is wider than the panel)
    pub col_offset: u8,
}

const SSD1306_128X64_SEQ: &[u8] = &[
    DISPLAY_OFF,
    SET_CLOCK_DIV, 0x80,
    SET_MULTIPLEX, 0x3F,
    SET_DISPLAY_OFFSET, 0x00,
    SET_START_LINE,
    CHARGE_PUMP, 0x14,
    MEMORY_MODE, 0x02,
    SEG_REMAP | 0x01,
    COM_SCAN_DEC,
    SET_COM_PINS, 0x12,
    SET_CONTRAST, 0xCF,
    SET_PRECHARGE, 0xF1,
    SET_VCOM_DETECT, 0x40,
    DISPLAY_ALL_ON_RESUME,
    NORMAL_DISPLAY,
    DISPLAY_ON,
];

const SSD1306_128X32_SEQ: &[u8] = &[
    DISPLAY_OFF,
    SET_CLOCK_DIV, 0x80,
    SET_MULTIPLEX, 0x1F,
    SET_DISPLAY_OFFSET, 0x00,
    SET_START_LINE,
    CHARGE_PUMP, 0x14,
    MEMORY_MODE, 0x02,
    SEG_REMAP | 0x01,
    COM_SCAN_DEC,
    SET_COM_PINS, 0x02,
    SET_CONTRAST, 0x8F,
    SET_PRECHARGE, 0xF1,
    SET_VCOM_DETECT, 0x40,
    DISPLAY_ALL_ON_RESUME,
    NORMAL_DISPLAY,
    DISPLAY_ON,
];

const SH1106_128X64_SEQ: &[u8] = &[
    DISPLAY_OFF,
    SET_CLOCK_DIV, 0x80,
    SET_MULTIPLEX, 0x3F,
    SET_DISPLAY_OFFSET, 0x00,
    SET_START_LINE,
    DC_DC_CONTROL, 0x8B,
    SEG_REMAP | 0x01,
    COM_SCAN_DEC,
    SET_COM_PINS, 0x12,
    SET_CONTRAST, 0x80,
    SET_PRECHARGE, 0x22,
    SET_VCOM_DETECT, 0x35,
    DISPLAY_ALL_ON_RESUME,
    NORMAL_DISPLAY,
    DISPLAY_ON,
];

static SSD1306_128X64_TABLE: RamTable<'static> = RamTable::new(SSD1306_128X64_SEQ);
static SSD1306_128X32_TABLE: RamTable<'static> = RamTable::new(SSD1306_128X32_SEQ);
static SH1106_128X64_TABLE: RamTable<'static> = RamTable::new(SH1106_128X64_SEQ);

/// 0.96" 128x64 SSD1306 module
pub static SSD1306_128X64: DeviceDescriptor<'static> = DeviceDescriptor {
    init_cmds: &SSD1306_128X64_TABLE,
    init_len: SSD1306_128X64_SEQ.len() as u8,
    width: 128,
    height: 64,
    col_offset: 0,
};

/// 0.91" 128x32 SSD1306 module
pub static SSD1306_128X32: DeviceDescriptor<'static> = DeviceDescriptor {
    init_cmds: &SSD1306_128X32_TABLE,
    init_len: SSD1306_128X32_SEQ.len() as u8,
    width: 128,
    height: 32,
    col_offset: 0,
};

/// 1.3" 128x64 SH1106 module. The controller RAM is 132 columns wide and
/// the panel is centered, hence the column offset.
pub static SH1106_128X64: DeviceDescriptor<'static> = DeviceDescriptor {
    init_cmds: &SH1106_128X64_TABLE,
    init_len: SH1106_128X64_SEQ.len() as u8,
    width: 128,
    height: 64,
    col_offset: 2,
};
