//! Text display engine
//!
//! Owns the cursor/addressing state for one page-addressed panel and
//! drives a [`DisplayTransport`] with addressing commands and glyph data.
//! The controller's internal column/page pointers never diverge from the
//! logical cursor: every addressing change is mirrored by explicit
//! commands before any data write.

use core::fmt;

use dotmat_driver_traits::{debug_oled, DisplayTransport, DriverError, DriverResult, WriteMode};

use crate::commands::*;
use crate::device::DeviceDescriptor;
use crate::font::FontRef;

/// Character renderer for one display instance.
///
/// Geometry is zero until [`init`](TextDisplay::init) runs; every
/// operation on an uninitialized display is a clamped no-op. No font is
/// selected by default; [`set_font`](TextDisplay::set_font) must be
/// called before text can render.
pub struct TextDisplay<'a, T> {
    transport: T,
    width: u8,
    height: u8,
    col_offset: u8,
    col: u8,
    row: u8,
    skip: u8,
    invert_mask: u8,
    letter_spacing: u8,
    font: Option<FontRef<'a>>,
}

impl<'a, T: DisplayTransport> TextDisplay<'a, T> {
    /// Create an engine over a transport. The display is unusable until
    /// `init` has applied a device descriptor.
    pub fn new(transport: T) -> Self {
        TextDisplay {
            transport,
            width: 0,
            height: 0,
            col_offset: 0,
            col: 0,
            row: 0,
            skip: 0,
            invert_mask: 0,
            letter_spacing: 1,
            font: None,
        }
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the underlying transport mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Bring up the controller from a device descriptor: reset the
    /// cursor, latch the geometry, replay the init command table, then
    /// clear display RAM.
    ///
    /// Geometry is latched once; re-running `init` with a different
    /// descriptor is the only supported way to change it.
    pub fn init(&mut self, dev: &DeviceDescriptor<'_>) -> DriverResult<()> {
        if dev.width == 0 || dev.height == 0 || dev.height % 8 != 0 {
            return Err(DriverError::InvalidParameter);
        }
        self.col = 0;
        self.row = 0;
        self.width = dev.width;
        self.height = dev.height;
        self.col_offset = dev.col_offset;
        for i in 0..dev.init_len as usize {
            let cmd = dev.init_cmds.read_byte(i);
            self.write_cmd(cmd);
        }
        debug_oled!("init {}x{} col_offset {}", dev.width, dev.height, dev.col_offset);
        self.clear();
        Ok(())
    }

    // === Geometry ===

    /// Panel width in pixels
    pub fn display_width(&self) -> u8 {
        self.width
    }

    /// Panel height in pixels
    pub fn display_height(&self) -> u8 {
        self.height
    }

    /// Panel height in pages (8-pixel rows)
    pub fn display_rows(&self) -> u8 {
        self.height / 8
    }

    // === Cursor & addressing ===

    /// Current cursor column
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Current cursor row (page)
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Move the cursor to `col`, mirroring it to the controller's column
    /// registers. Out-of-range columns are ignored.
    pub fn set_col(&mut self, col: u8) {
        if col < self.width {
            self.col = col;
            let col = col.wrapping_add(self.col_offset);
            self.write_cmd(SET_LOW_COLUMN | (col & 0xF));
            self.write_cmd(SET_HIGH_COLUMN | (col >> 4));
        }
    }

    /// Move the cursor to page `row`, mirroring it to the controller's
    /// page register. Out-of-range rows are ignored.
    pub fn set_row(&mut self, row: u8) {
        if row < self.display_rows() {
            self.row = row;
            self.write_cmd(SET_START_PAGE | row);
        }
    }

    /// Move the cursor; each coordinate clamps independently
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        self.set_col(col);
        self.set_row(row);
    }

    /// Move the cursor to the top-left corner
    pub fn home(&mut self) {
        self.set_cursor(0, 0);
    }

    /// Arm the skip counter: the next `n` buffered RAM writes are
    /// discarded without advancing the column. Used to re-enter a glyph
    /// mid-column after a page transition.
    pub fn skip_columns(&mut self, n: u8) {
        self.skip = n;
    }

    // === Controller settings ===

    /// Set panel contrast
    pub fn set_contrast(&mut self, value: u8) {
        self.write_cmd(SET_CONTRAST);
        self.write_cmd(value);
    }

    /// Flip display orientation via segment remap and COM scan direction
    pub fn display_remap(&mut self, flipped: bool) {
        self.write_cmd(if flipped { SEG_REMAP } else { SEG_REMAP | 1 });
        self.write_cmd(if flipped { COM_SCAN_INC } else { COM_SCAN_DEC });
    }

    /// Render inverted (white-on-black becomes black-on-white) without
    /// controller support. The mask covers every outgoing byte,
    /// commands included.
    pub fn set_invert_mode(&mut self, on: bool) {
        self.invert_mask = if on { 0xFF } else { 0x00 };
    }

    // === Font ===

    /// Select the active font. Takes effect on the next render.
    pub fn set_font(&mut self, font: FontRef<'a>) {
        self.font = Some(font);
    }

    /// Active font glyph width, 0 when no font is selected
    pub fn font_width(&self) -> u8 {
        self.font.map_or(0, |f| f.glyph_width())
    }

    /// Pages per glyph of the active font, 0 when no font is selected
    pub fn font_rows(&self) -> u8 {
        self.font.map_or(0, |f| f.pages())
    }

    /// Separator columns emitted after each glyph
    pub fn letter_spacing(&self) -> u8 {
        self.letter_spacing
    }

    /// Set the separator column count (default 1)
    pub fn set_letter_spacing(&mut self, n: u8) {
        self.letter_spacing = n;
    }

    /// Width in pixels of a field of `n` character cells
    pub fn field_width(&self, n: u8) -> u16 {
        n as u16 * (self.font_width() as u16 + self.letter_spacing as u16)
    }

    // === Write paths ===

    /// Send a controller command byte
    pub fn write_cmd(&mut self, c: u8) {
        self.transport.write(c ^ self.invert_mask, WriteMode::Command);
    }

    /// Send one display RAM byte at the cursor, advancing the column.
    /// Dropped beyond the right edge.
    pub fn write_ram(&mut self, b: u8) {
        if self.col < self.width {
            self.transport.write(b ^ self.invert_mask, WriteMode::Ram);
            self.col += 1;
        }
    }

    /// Send one display RAM byte on the buffered path: honors the skip
    /// counter, dropped beyond the right edge.
    pub fn write_ram_buf(&mut self, b: u8) {
        if self.skip > 0 {
            self.skip -= 1;
        } else if self.col < self.width {
            self.transport.write(b ^ self.invert_mask, WriteMode::RamBuffered);
            self.col += 1;
        }
    }

    // === Clearing ===

    /// Zero-fill columns `[c0, c1]` across rows `[r0, r1]`, leaving the
    /// cursor at `(c0, r0)`. Rows beyond the panel are not touched.
    pub fn clear_region(&mut self, c0: u8, c1: u8, r0: u8, r1: u8) {
        self.skip = 0;
        let r1 = r1.min(self.display_rows().saturating_sub(1));
        for r in r0..=r1 {
            self.set_cursor(c0, r);
            for _ in c0..=c1 {
                self.write_ram_buf(0);
            }
        }
        self.set_cursor(c0, r0);
    }

    /// Clear the whole display, homing the cursor
    pub fn clear(&mut self) {
        self.clear_region(
            0,
            self.width.saturating_sub(1),
            0,
            self.display_rows().saturating_sub(1),
        );
    }

    /// Clear from the cursor to the right edge, across the active
    /// font's page rows
    pub fn clear_to_eol(&mut self) {
        let r1 = self.row.saturating_add(self.font_rows().saturating_sub(1));
        self.clear_region(self.col, self.width.saturating_sub(1), self.row, r1);
    }

    /// Clear `n` character cells starting at `(col, row)`
    pub fn clear_field(&mut self, col: u8, row: u8, n: u8) {
        let c1 = (col as u16 + self.field_width(n))
            .saturating_sub(1)
            .min(u8::MAX as u16) as u8;
        let r1 = row.saturating_add(self.font_rows().saturating_sub(1));
        self.clear_region(col, c1, row, r1);
    }

    // === Rendering ===

    /// Render one character code at the cursor.
    ///
    /// Codes with a glyph advance the column by glyph width plus letter
    /// spacing. Codes without one: carriage return resets the column,
    /// line feed resets the column and advances the row by the font's
    /// page count (clamped at the bottom edge), anything else is
    /// ignored. Returns how many codes were consumed (0 or 1).
    pub fn put_char(&mut self, ch: u8) -> usize {
        let font = match self.font {
            Some(f) => f,
            None => return 0,
        };
        let w = font.glyph_width();
        let pages = font.pages();

        if !font.contains(ch) {
            if ch == b'\r' {
                self.set_col(0);
                return 1;
            }
            if ch == b'\n' {
                self.set_col(0);
                let row = self.row.saturating_add(pages);
                self.set_row(row);
                return 1;
            }
            return 0;
        }

        let glyph = font.glyph_offset(ch);
        let start_col = self.col;
        let start_row = self.row;
        let skip = self.skip;
        for r in 0..pages {
            // each page row repeats the elision the caller requested
            self.skip_columns(skip);
            if r != 0 {
                let row = self.row.saturating_add(1);
                self.set_cursor(start_col, row);
            }
            for c in 0..w {
                let mut b = font.read(glyph + c as usize + r as usize * w as usize);
                if font.trim() != 0 && r + 1 == pages {
                    b >>= font.trim();
                }
                self.write_ram_buf(b);
            }
            for _ in 0..self.letter_spacing {
                self.write_ram_buf(0);
            }
        }
        // callers address vertical position in glyph cells, not pages
        self.set_row(start_row);
        1
    }

    /// Render a string, returning how many bytes were consumed.
    /// Unrenderable bytes are skipped without advancing the cursor.
    pub fn put_str(&mut self, s: &str) -> usize {
        let mut n = 0;
        for &b in s.as_bytes() {
            n += self.put_char(b);
        }
        n
    }
}

impl<T: DisplayTransport> fmt::Write for TextDisplay<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s);
        Ok(())
    }
}
