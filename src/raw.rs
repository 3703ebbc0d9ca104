//! The 7-byte raw payload.
//!
//! The node forwards the measurement registers of its sensors untouched, so
//! conversion to physical units happens here:
//!
//! | Bytes | Field       | Source     | Encoding                          |
//! |-------|-------------|------------|-----------------------------------|
//! | 0..2  | humidity    | SI7006-A20 | `u16` code                        |
//! | 2..4  | temperature | SI7006-A20 | `u16` code                        |
//! | 4..7  | pressure    | MPL3115A2  | Q18.2 pascals, left-justified     |

use zerocopy::{FromBytes, IntoBytes};

use crate::{
    calibration::{
        ADC_FULL_SCALE, Calibration, SI7006_RH_OFFSET, SI7006_RH_SPAN, SI7006_T_OFFSET,
        SI7006_T_SPAN,
    },
    error::DecodeError,
    frame::{self, PressureWord, read_u16, round2},
};

/// Length of a raw payload in bytes.
pub const LEN: usize = size_of::<Frame>();

#[repr(C, packed)]
#[derive(FromBytes, IntoBytes)]
struct Frame {
    humidity: [u8; 2],
    temperature: [u8; 2],
    pressure: [u8; 3],
}

/// Sensor codes carried by a raw payload, before conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodes {
    /// SI7006-A20 relative humidity code.
    pub humidity: u16,
    /// SI7006-A20 temperature code.
    pub temperature: u16,
    /// MPL3115A2 pressure in quarter pascals (Q18.2). Only the low 20 bits
    /// are transmitted.
    pub pressure: u32,
}

impl RawCodes {
    /// Extract the sensor codes from a raw payload.
    pub fn parse(r: &[u8]) -> Result<Self, DecodeError> {
        let Frame {
            humidity,
            temperature,
            pressure,
        } = frame::parse(r)?;

        Ok(Self {
            humidity: read_u16(humidity),
            temperature: read_u16(temperature),
            pressure: PressureWord::from_bytes(pressure).code(),
        })
    }

    /// Relative humidity in percent, per the SI7006-A20 transfer function.
    pub fn humidity_rh(&self) -> f64 {
        self.humidity as f64 * SI7006_RH_SPAN / ADC_FULL_SCALE + SI7006_RH_OFFSET
    }

    /// Temperature in degrees Celsius, per the SI7006-A20 transfer function,
    /// without calibration.
    pub fn temperature_c(&self) -> f64 {
        self.temperature as f64 * SI7006_T_SPAN / ADC_FULL_SCALE + SI7006_T_OFFSET
    }

    /// Pressure in hectopascals.
    pub fn pressure_hpa(&self) -> f64 {
        PressureWord::from_code(self.pressure).hpa()
    }
}

/// A decoded raw payload. Values are rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawReading {
    pub humidity: f64,
    pub temperature_c: f64,
    pub pressure_hpa: f64,
}

/// Decode a raw payload with the default calibration.
///
/// The port is accepted for symmetry with other formats, and is unused.
pub fn decode(r: &[u8], port: u8) -> Result<RawReading, DecodeError> {
    decode_with(r, port, &Calibration::default())
}

/// Decode a raw payload, applying a calibration to its temperature.
pub fn decode_with(
    r: &[u8],
    _port: u8,
    calibration: &Calibration,
) -> Result<RawReading, DecodeError> {
    let codes = RawCodes::parse(r)?;

    Ok(RawReading {
        humidity: round2(codes.humidity_rh()),
        temperature_c: round2(codes.temperature_c() + calibration.temperature_offset_c),
        pressure_hpa: round2(codes.pressure_hpa()),
    })
}

/// Encode sensor codes as a raw payload, as the node firmware would.
pub fn encode(codes: &RawCodes) -> [u8; LEN] {
    let frame = Frame {
        humidity: codes.humidity.to_be_bytes(),
        temperature: codes.temperature.to_be_bytes(),
        pressure: PressureWord::from_code(codes.pressure).to_bytes(),
    };

    zerocopy::transmute!(frame)
}
