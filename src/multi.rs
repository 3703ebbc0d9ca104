//! The 20-byte multi-sensor payload.
//!
//! Carries a reading of every sensor on the Pysense board as ten big-endian
//! 16-bit words, consumed strictly in order:
//!
//! | Bytes  | Field              | Type  | Unit     |
//! |--------|--------------------|-------|----------|
//! | 0..2   | temperature        | `i16` | 0.01 °C  |
//! | 2..4   | humidity           | `u16` | 0.01 %RH |
//! | 4..6   | pressure           | `u16` | 0.1 hPa  |
//! | 6..8   | altitude           | `i16` | m        |
//! | 8..10  | light, blue        | `u16` | count    |
//! | 10..12 | light, red         | `u16` | count    |
//! | 12..18 | acceleration x,y,z | `i16` | mg       |
//! | 18..20 | battery voltage    | `u16` | mV       |
//!
//! Unlike the other formats, decoded values are not rounded. The firmware
//! applies its own calibration, so no temperature offset is added.

use zerocopy::{FromBytes, IntoBytes};

use crate::{
    calibration::{CENTI, MULTI_PRESSURE_SCALE},
    error::DecodeError,
    frame::{self, read_i16, read_u16, saturate_i16, saturate_u16},
};

/// Length of a multi-sensor payload in bytes.
pub const LEN: usize = size_of::<Frame>();

/// LoRaWAN port the multi-sensor firmware sends on.
pub const PORT: u8 = 1;

#[repr(C, packed)]
#[derive(FromBytes, IntoBytes)]
struct Frame {
    temperature: [u8; 2],
    humidity: [u8; 2],
    pressure: [u8; 2],
    altitude: [u8; 2],
    light_blue: [u8; 2],
    light_red: [u8; 2],
    accel: [[u8; 2]; 3],
    vbat: [u8; 2],
}

/// A decoded multi-sensor payload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSensorReading {
    pub temperature_c: f64,
    pub humidity_rh: f64,
    pub pressure_hpa: f64,
    pub altitude_m: i16,
    /// Raw count of the ambient light sensor's blue channel.
    pub light_blue: u16,
    /// Raw count of the ambient light sensor's red channel.
    pub light_red: u16,
    #[cfg_attr(feature = "serde", serde(rename = "accel_mg"))]
    pub acceleration: Acceleration,
    #[cfg_attr(feature = "serde", serde(rename = "vbat_mV"))]
    pub battery_mv: u16,
}

/// Acceleration along each axis, in thousandths of standard gravity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Decode a multi-sensor payload.
///
/// The port is accepted for symmetry with other formats, and is unused.
pub fn decode(r: &[u8], _port: u8) -> Result<MultiSensorReading, DecodeError> {
    let Frame {
        temperature,
        humidity,
        pressure,
        altitude,
        light_blue,
        light_red,
        accel: [x, y, z],
        vbat,
    } = frame::parse(r)?;

    Ok(MultiSensorReading {
        temperature_c: read_i16(temperature) as f64 / CENTI,
        humidity_rh: read_u16(humidity) as f64 / CENTI,
        pressure_hpa: read_u16(pressure) as f64 / MULTI_PRESSURE_SCALE,
        altitude_m: read_i16(altitude),
        light_blue: read_u16(light_blue),
        light_red: read_u16(light_red),
        acceleration: Acceleration {
            x: read_i16(x),
            y: read_i16(y),
            z: read_i16(z),
        },
        battery_mv: read_u16(vbat),
    })
}

/// Encode a reading as a multi-sensor payload, as the node firmware would.
///
/// Scaled values are rounded to the nearest unit and saturate at the range of
/// their field.
pub fn encode(reading: &MultiSensorReading) -> [u8; LEN] {
    let Acceleration { x, y, z } = reading.acceleration;

    let frame = Frame {
        temperature: saturate_i16(reading.temperature_c * CENTI).to_be_bytes(),
        humidity: saturate_u16(reading.humidity_rh * CENTI).to_be_bytes(),
        pressure: saturate_u16(reading.pressure_hpa * MULTI_PRESSURE_SCALE).to_be_bytes(),
        altitude: reading.altitude_m.to_be_bytes(),
        light_blue: reading.light_blue.to_be_bytes(),
        light_red: reading.light_red.to_be_bytes(),
        accel: [x.to_be_bytes(), y.to_be_bytes(), z.to_be_bytes()],
        vbat: reading.battery_mv.to_be_bytes(),
    };

    zerocopy::transmute!(frame)
}
