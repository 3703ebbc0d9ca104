use pysense_uplink::{
    Calibration, DecodeError,
    compact::{self, CompactReading},
};

#[test]
fn decode_positive_temperature() {
    let reading = compact::decode(&[0x08, 0xFC, 0x17, 0x70, 0x27, 0x10], 2).unwrap();

    assert_eq!(
        reading,
        CompactReading {
            temperature_c: 20.0,
            humidity: 60.0,
            pressure_hpa: 100.0,
        }
    );
}

#[test]
fn decode_negative_temperature() {
    let reading = compact::decode(&[0xFF, 0x9C, 0x00, 0x00, 0x00, 0x00], 2).unwrap();

    assert_eq!(reading.temperature_c, -4.0);
    assert_eq!(reading.humidity, 0.0);
    assert_eq!(reading.pressure_hpa, 0.0);
}

#[test]
fn decode_sign_boundary() {
    // 0x7FFF is the largest positive word and must not be sign-corrected.
    let reading = compact::decode(&[0x7F, 0xFF, 0, 0, 0, 0], 2).unwrap();
    assert_eq!(reading.temperature_c, 324.67);

    let reading = compact::decode(&[0x80, 0x00, 0, 0, 0, 0], 2).unwrap();
    assert_eq!(reading.temperature_c, -330.68);
}

#[test]
fn decode_humidity_and_pressure_unsigned() {
    let reading = compact::decode(&[0, 0, 0xFF, 0xFF, 0x80, 0x00], 2).unwrap();

    assert_eq!(reading.humidity, 655.35);
    assert_eq!(reading.pressure_hpa, 327.68);
}

#[test]
fn decode_rejects_other_lengths() {
    let payload = [0x5A; 32];

    for len in (0..=payload.len()).filter(|&len| len != compact::LEN) {
        assert_eq!(
            compact::decode(&payload[..len], 2),
            Err(DecodeError::InvalidLength {
                expected: 6,
                actual: len,
            })
        );
    }
}

#[test]
fn decode_is_deterministic() {
    let payload = [0x09, 0x61, 0x1A, 0x2B, 0x26, 0xF4];

    let a = compact::decode(&payload, 2).unwrap();
    let b = compact::decode(&payload, 2).unwrap();

    assert_eq!(a.temperature_c.to_bits(), b.temperature_c.to_bits());
    assert_eq!(a.humidity.to_bits(), b.humidity.to_bits());
    assert_eq!(a.pressure_hpa.to_bits(), b.pressure_hpa.to_bits());
}

#[test]
fn decode_ignores_port() {
    let payload = [0x09, 0x61, 0x1A, 0x2B, 0x26, 0xF4];

    let expected = compact::decode(&payload, 0).unwrap();
    for port in [1, 2, 42, 223, 255] {
        assert_eq!(compact::decode(&payload, port).unwrap(), expected);
    }
}

#[test]
fn decode_recovers_signed_temperatures() {
    for raw in (i16::MIN..=i16::MAX).step_by(97) {
        let [a, b] = raw.to_be_bytes();
        let reading = compact::decode(&[a, b, 0, 0, 0, 0], 2).unwrap();

        let expected = (raw as f64 / 100.0 - 3.0) * 100.0;
        assert!(
            (reading.temperature_c * 100.0 - expected).abs() < 1e-6,
            "{raw}: {}",
            reading.temperature_c,
        );
    }
}

#[test]
fn decode_with_calibration() {
    let calibration = Calibration {
        temperature_offset_c: 0.5,
    };

    let reading =
        compact::decode_with(&[0x08, 0xFC, 0x17, 0x70, 0x27, 0x10], 2, &calibration).unwrap();

    assert_eq!(reading.temperature_c, 23.5);
    assert_eq!(reading.humidity, 60.0);
}

#[test]
fn decode_rounds_halves_up() {
    let calibration = Calibration {
        temperature_offset_c: 0.005,
    };

    // -0.03 °C + 0.005 °C is exactly halfway, and rounds toward zero.
    let reading = compact::decode_with(&[0xFF, 0xFD, 0, 0, 0, 0], 2, &calibration).unwrap();
    assert_eq!(reading.temperature_c, -0.02);
}

#[test]
fn encode_matches_firmware_packing() {
    let reading = CompactReading {
        temperature_c: 20.0,
        humidity: 60.0,
        pressure_hpa: 100.0,
    };

    assert_eq!(
        compact::encode(&reading, &Calibration::default()),
        [0x08, 0xFC, 0x17, 0x70, 0x27, 0x10]
    );
}

#[test]
fn encode_then_decode() {
    let calibration = Calibration::default();
    let reading = CompactReading {
        temperature_c: -12.34,
        humidity: 41.07,
        pressure_hpa: 101.32,
    };

    let payload = compact::encode(&reading, &calibration);
    assert_eq!(compact::decode_with(&payload, 2, &calibration), Ok(reading));
}

#[test]
fn encode_saturates() {
    let reading = CompactReading {
        temperature_c: 1000.0,
        humidity: -5.0,
        pressure_hpa: 1013.25,
    };

    let payload = compact::encode(&reading, &Calibration::default());
    assert_eq!(payload, [0x7F, 0xFF, 0x00, 0x00, 0xFF, 0xFF]);
}
