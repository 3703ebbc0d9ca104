#![no_std]

//! Decoders for the uplink payloads sent by Pysense sensor nodes over
//! LoRaWAN.
//!
//! Three payload formats are supported, each with its own module:
//!
//! - [`compact`]: 6 bytes of temperature, humidity and pressure, pre-scaled by
//! the node firmware.
//! - [`multi`]: 20 bytes covering every sensor on the board, including light,
//! acceleration and battery voltage.
//! - [`raw`]: 7 bytes of uncalibrated sensor codes, converted here with the
//! manufacturers' transfer functions.
//!
//! Decoding is pure: no allocation, no I/O, and no state between calls. A
//! payload either decodes completely or is rejected with a
//! [`DecodeError`](error::DecodeError).
//!
//! Most users should begin with [`format::decode`], which selects a decoder by
//! payload length, or with a [`PortMap`](format::PortMap) when formats are
//! distinguished by LoRaWAN port.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `serde`: derive serialization for readings and calibration, and enable
//! the [`Outcome`](format::Outcome) interchange shape (default).
//! - `std`: enable the port-based dispatch table (default).

#[cfg(feature = "std")]
extern crate std;

pub mod calibration;
pub mod compact;
pub mod error;
pub mod format;
pub mod frame;
pub mod multi;
pub mod raw;

pub use calibration::Calibration;
pub use error::{DecodeError, FormatError};
pub use format::{DecodedReading, Format};
