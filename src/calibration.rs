//! Sensor constants and runtime calibration.
//!
//! The constants encode hardware facts (datasheet transfer functions and the
//! fixed-point scales chosen by the node firmware). Replacing a sensor means
//! changing them here, not in the decoders.

/// Offset added to every temperature measured on the SI7006-A20, which reads
/// high on the Pysense board due to self-heating.
pub const TEMPERATURE_OFFSET_C: f64 = -3.0;

/// Full scale of a 16-bit analog-to-digital converter code.
pub const ADC_FULL_SCALE: f64 = 65536.0;

/// SI7006-A20 humidity transfer: `RH = code * 125 / 65536 - 6`.
pub const SI7006_RH_SPAN: f64 = 125.0;
pub const SI7006_RH_OFFSET: f64 = -6.0;

/// SI7006-A20 temperature transfer: `T = code * 175.72 / 65536 - 46.85`.
pub const SI7006_T_SPAN: f64 = 175.72;
pub const SI7006_T_OFFSET: f64 = -46.85;

/// Divisor resolving the two fractional bits of an MPL3115A2 Q18.2 pressure.
pub const Q18_2_SCALE: f64 = 4.0;

pub const PA_PER_HPA: f64 = 100.0;

/// Firmware scale of temperature and humidity (hundredths).
pub const CENTI: f64 = 100.0;

/// Firmware scale of pressure in the compact payload (hundredths of a hPa).
pub const COMPACT_PRESSURE_SCALE: f64 = 100.0;

/// Firmware scale of pressure in the multi-sensor payload (tenths of a hPa).
pub const MULTI_PRESSURE_SCALE: f64 = 10.0;

/// Runtime calibration applied while decoding.
///
/// The multi-sensor payload is calibrated on the node and ignores this.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Calibration {
    /// Added to decoded temperatures, in degrees Celsius.
    pub temperature_offset_c: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            temperature_offset_c: TEMPERATURE_OFFSET_C,
        }
    }
}
