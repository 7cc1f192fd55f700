//! Hardware Seam Traits for dotmat
//!
//! This crate defines the two capabilities the display engine consumes:
//! a byte-oriented transport to the display controller and an addressable
//! byte source for font and command tables. Board/bus code implements
//! these traits; the engine never touches hardware directly.
//!
//! # Debug Features
//!
//! Enable debug output at compile time:
//! ```toml
//! dotmat-driver-traits = { path = "...", features = ["debug-oled"] }
//! ```
//!
//! Available features:
//! - `debug-all`: Enable all debug output
//! - `debug-oled`: display engine operations

#![no_std]

pub mod source;
pub mod transport;
mod debug;

pub use debug::*;
pub use source::*;
pub use transport::*;

/// Common error type for driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// Invalid parameter (e.g. a malformed device descriptor)
    InvalidParameter,
}

pub type DriverResult<T> = Result<T, DriverError>;
