//! The 6-byte compact payload.
//!
//! The node firmware reads converted values from its sensor drivers and packs
//! them as hundredths: a signed temperature, then unsigned humidity and
//! pressure.
//!
//! | Bytes | Field       | Type  | Unit        |
//! |-------|-------------|-------|-------------|
//! | 0..2  | temperature | `i16` | 0.01 °C     |
//! | 2..4  | humidity    | `u16` | 0.01 %RH    |
//! | 4..6  | pressure    | `u16` | 0.01 hPa    |

use zerocopy::{FromBytes, IntoBytes};

use crate::{
    calibration::{CENTI, COMPACT_PRESSURE_SCALE, Calibration},
    error::DecodeError,
    frame::{self, read_i16, read_u16, round2, saturate_i16, saturate_u16},
};

/// Length of a compact payload in bytes.
pub const LEN: usize = size_of::<Frame>();

#[repr(C, packed)]
#[derive(FromBytes, IntoBytes)]
struct Frame {
    temperature: [u8; 2],
    humidity: [u8; 2],
    pressure: [u8; 2],
}

/// A decoded compact payload. Values are rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompactReading {
    pub temperature_c: f64,
    pub humidity: f64,
    pub pressure_hpa: f64,
}

/// Decode a compact payload with the default calibration.
///
/// The port is accepted for symmetry with other formats, and is unused.
pub fn decode(r: &[u8], port: u8) -> Result<CompactReading, DecodeError> {
    decode_with(r, port, &Calibration::default())
}

/// Decode a compact payload, applying a calibration to its temperature.
pub fn decode_with(
    r: &[u8],
    _port: u8,
    calibration: &Calibration,
) -> Result<CompactReading, DecodeError> {
    let Frame {
        temperature,
        humidity,
        pressure,
    } = frame::parse(r)?;

    let temperature_c = read_i16(temperature) as f64 / CENTI + calibration.temperature_offset_c;
    let humidity = read_u16(humidity) as f64 / CENTI;
    let pressure_hpa = read_u16(pressure) as f64 / COMPACT_PRESSURE_SCALE;

    Ok(CompactReading {
        temperature_c: round2(temperature_c),
        humidity: round2(humidity),
        pressure_hpa: round2(pressure_hpa),
    })
}

/// Encode a reading as a compact payload, as the node firmware would.
///
/// The calibration offset is removed from the temperature before packing, so
/// decoding with the same calibration recovers the reading. Values beyond the
/// range of a field saturate.
pub fn encode(reading: &CompactReading, calibration: &Calibration) -> [u8; LEN] {
    let temperature = reading.temperature_c - calibration.temperature_offset_c;

    let frame = Frame {
        temperature: saturate_i16(temperature * CENTI).to_be_bytes(),
        humidity: saturate_u16(reading.humidity * CENTI).to_be_bytes(),
        pressure: saturate_u16(reading.pressure_hpa * COMPACT_PRESSURE_SCALE).to_be_bytes(),
    };

    zerocopy::transmute!(frame)
}
