//! Fixed-width wire primitives shared by every payload format.
//!
//! Payloads are declared as packed structs of byte arrays, in wire order, and
//! reinterpreted from the received bytes in one step. Multi-byte integers are
//! big-endian throughout.

use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::{
    calibration::{PA_PER_HPA, Q18_2_SCALE},
    error::DecodeError,
};

/// Reinterpret a payload as a frame, if it has exactly the frame's length.
pub fn parse<F: FromBytes>(r: &[u8]) -> Result<F, DecodeError> {
    F::read_from_bytes(r).map_err(|_| DecodeError::InvalidLength {
        expected: size_of::<F>(),
        actual: r.len(),
    })
}

/// Read a big-endian unsigned 16-bit word.
pub fn read_u16(r: [u8; 2]) -> u16 {
    u16::from_be_bytes(r)
}

/// Read a big-endian two's-complement 16-bit word.
///
/// Words with bit 15 clear read as their unsigned value.
pub fn read_i16(r: [u8; 2]) -> i16 {
    i16::from_be_bytes(r)
}

/// Round to two decimal places, with halves rounding toward positive infinity.
pub fn round2(x: f64) -> f64 {
    libm::floor(x * 100.0 + 0.5) / 100.0
}

/// Round to the nearest integer and saturate to the `i16` range.
pub(crate) fn saturate_i16(x: f64) -> i16 {
    libm::floor(x + 0.5).clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Round to the nearest integer and saturate to the `u16` range.
pub(crate) fn saturate_u16(x: f64) -> u16 {
    libm::floor(x + 0.5).clamp(u16::MIN as f64, u16::MAX as f64) as u16
}

bitfield! {
    /// MPL3115A2 pressure output (`OUT_P_MSB..OUT_P_LSB`) as a 24-bit word.
    ///
    /// The upper 20 bits hold pressure in pascals as Q18.2 fixed point; the
    /// lower 4 bits are padding.
    pub struct PressureWord(u32) {
        [4..24] q18_2: u32,
        [4..6] quarters: u8,
        [6..24] whole: u32,
    }
}

impl PressureWord {
    /// Largest Q18.2 code the word can hold.
    pub const MAX_CODE: u32 = 0xF_FFFF;

    pub fn from_bytes(r: [u8; 3]) -> Self {
        let [a, b, c] = r;
        Self(u32::from_be_bytes([0, a, b, c]))
    }

    /// Left-justify a Q18.2 code, discarding bits above the 20th.
    pub fn from_code(code: u32) -> Self {
        Self((code & Self::MAX_CODE) << 4)
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        let [_, a, b, c] = self.0.to_be_bytes();
        [a, b, c]
    }

    /// The Q18.2 code: pressure in quarter pascals.
    pub fn code(&self) -> u32 {
        self.q18_2()
    }

    /// Whole pascals, without the fractional bits.
    pub fn pascals(&self) -> u32 {
        self.whole()
    }

    /// Fractional quarter pascals (0 to 3).
    pub fn fraction(&self) -> u8 {
        self.quarters()
    }

    /// Pressure in hectopascals, unrounded.
    pub fn hpa(&self) -> f64 {
        self.q18_2() as f64 / Q18_2_SCALE / PA_PER_HPA
    }
}
