//! Selection of a decoder for an uplink.
//!
//! Each payload format has a distinct length, so [`decode`] can select a
//! decoder from the payload alone. Where a network assigns formats to
//! LoRaWAN ports instead, a [`PortMap`] selects by port.

use core::fmt::{self, Display};

use crate::{
    compact::{self, CompactReading},
    error::{DecodeError, FormatError},
    multi::{self, MultiSensorReading},
    raw::{self, RawReading},
};

/// A payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Format {
    Compact,
    MultiSensor,
    Raw,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Compact, Format::MultiSensor, Format::Raw];

    /// The exact length of payloads in this format.
    pub const fn expected_len(self) -> usize {
        match self {
            Format::Compact => compact::LEN,
            Format::MultiSensor => multi::LEN,
            Format::Raw => raw::LEN,
        }
    }

    /// The format whose payloads have this length, if any.
    pub fn from_len(len: usize) -> Option<Format> {
        Self::ALL.into_iter().find(|f| f.expected_len() == len)
    }

    /// Decode a payload in this format with the default calibration.
    pub fn decode(self, r: &[u8], port: u8) -> Result<DecodedReading, DecodeError> {
        Ok(match self {
            Format::Compact => DecodedReading::Compact(compact::decode(r, port)?),
            Format::MultiSensor => DecodedReading::MultiSensor(multi::decode(r, port)?),
            Format::Raw => DecodedReading::Raw(raw::decode(r, port)?),
        })
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Compact => "compact",
            Format::MultiSensor => "multi-sensor",
            Format::Raw => "raw",
        })
    }
}

/// A reading decoded from any payload format.
///
/// Serializes exactly as the reading it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DecodedReading {
    Compact(CompactReading),
    MultiSensor(MultiSensorReading),
    Raw(RawReading),
}

impl DecodedReading {
    pub fn format(&self) -> Format {
        match self {
            DecodedReading::Compact(_) => Format::Compact,
            DecodedReading::MultiSensor(_) => Format::MultiSensor,
            DecodedReading::Raw(_) => Format::Raw,
        }
    }
}

/// Decode an uplink, selecting the format by payload length.
///
/// The port is passed through to the decoder and does not affect selection.
pub fn decode(r: &[u8], port: u8) -> Result<DecodedReading, FormatError> {
    let Some(format) = Format::from_len(r.len()) else {
        log::debug!("no format for {}-byte payload on port {port}", r.len());
        return Err(FormatError::UnrecognizedLength { length: r.len() });
    };

    log::trace!("decoding {}-byte payload on port {port} as {format}", r.len());

    Ok(format.decode(r, port)?)
}

/// Assignment of payload formats to LoRaWAN ports.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PortMap(std::collections::BTreeMap<u8, Format>);

#[cfg(feature = "std")]
impl PortMap {
    /// A map without any assigned ports.
    pub fn empty() -> Self {
        Self(std::collections::BTreeMap::new())
    }

    /// Assign a format to a port, returning the format it replaces.
    pub fn insert(&mut self, port: u8, format: Format) -> Option<Format> {
        self.0.insert(port, format)
    }

    pub fn format_for(&self, port: u8) -> Option<Format> {
        self.0.get(&port).copied()
    }

    /// Decode an uplink in the format assigned to its port.
    ///
    /// Payloads on unassigned ports are rejected, whatever their length.
    pub fn decode(&self, r: &[u8], port: u8) -> Result<DecodedReading, FormatError> {
        let Some(format) = self.format_for(port) else {
            log::debug!("no format assigned to port {port}");
            return Err(FormatError::UnmappedPort { port });
        };

        log::trace!("decoding {}-byte payload on port {port} as {format}", r.len());

        Ok(format.decode(r, port)?)
    }
}

/// Maps the multi-sensor firmware's port, the only one fixed by a node.
#[cfg(feature = "std")]
impl Default for PortMap {
    fn default() -> Self {
        Self(std::collections::BTreeMap::from([(multi::PORT, Format::MultiSensor)]))
    }
}

/// The interchange shape of a decoding attempt.
///
/// Serializes a success as the fields of its reading, and a failure as a map
/// with a single `error` message.
///
/// _Requires Cargo feature `serde`._
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<E>(pub Result<DecodedReading, E>);

#[cfg(feature = "serde")]
impl<E> From<Result<DecodedReading, E>> for Outcome<E> {
    fn from(result: Result<DecodedReading, E>) -> Self {
        Self(result)
    }
}

#[cfg(feature = "serde")]
impl<E: Display> serde::Serialize for Outcome<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match &self.0 {
            Ok(reading) => serde::Serialize::serialize(reading, serializer),
            Err(err) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &Message(err))?;
                map.end()
            }
        }
    }
}

/// Serializes an error as its message.
#[cfg(feature = "serde")]
struct Message<'a, E>(&'a E);

#[cfg(feature = "serde")]
impl<E: Display> serde::Serialize for Message<'_, E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self.0)
    }
}
