//! Display Transport Trait
//!
//! Implemented by bus glue (I2C, SPI, bit-bang) that delivers bytes to the
//! display controller. The engine tags every byte with how the controller
//! must interpret it; the transport maps the tag onto the wire (D/C line,
//! control byte, buffering).

/// How a byte sent to the controller is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Controller command byte
    Command,
    /// Display RAM data byte, written immediately
    Ram,
    /// Display RAM data byte on the buffered path.
    ///
    /// Same data semantics as [`Ram`](WriteMode::Ram); the engine has
    /// already applied skip elision, so the transport may coalesce these.
    RamBuffered,
}

/// Byte transport to a display controller.
///
/// The transport is assumed infallible; a failing bus must be handled
/// below this seam.
pub trait DisplayTransport: Send {
    /// Deliver one byte to the controller.
    fn write(&mut self, byte: u8, mode: WriteMode);
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    fn write(&mut self, byte: u8, mode: WriteMode) {
        (**self).write(byte, mode);
    }
}
