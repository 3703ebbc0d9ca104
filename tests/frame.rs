use pysense_uplink::{
    DecodeError,
    frame::{self, PressureWord, read_i16, read_u16, round2},
};

#[test]
fn words_are_big_endian() {
    assert_eq!(read_u16([0x12, 0x34]), 0x1234);
    assert_eq!(read_i16([0x12, 0x34]), 0x1234);
}

#[test]
fn sign_correction_only_with_top_bit() {
    assert_eq!(read_i16([0x7F, 0xFF]), 32767);
    assert_eq!(read_i16([0x80, 0x00]), -32768);
    assert_eq!(read_i16([0xFF, 0x9C]), -100);
    assert_eq!(read_u16([0xFF, 0x9C]), 65436);

    for word in 0..=u16::MAX {
        let expected = if word & 0x8000 != 0 {
            word as i32 - 0x10000
        } else {
            word as i32
        };
        assert_eq!(read_i16(word.to_be_bytes()) as i32, expected);
    }
}

#[test]
fn round_to_hundredths() {
    assert_eq!(round2(20.0), 20.0);
    assert_eq!(round2(54.791015625), 54.79);
    assert_eq!(round2(118.99809265136719), 119.0);
    assert_eq!(round2(1000.0075), 1000.01);
}

#[test]
fn round_halves_toward_positive_infinity() {
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.12);
    assert_eq!(round2(-4.005), -4.0);
}

#[test]
fn parse_requires_exact_length() {
    assert_eq!(frame::parse::<[u8; 4]>(&[1, 2, 3, 4]), Ok([1, 2, 3, 4]));
    assert_eq!(
        frame::parse::<[u8; 4]>(&[1, 2, 3]),
        Err(DecodeError::InvalidLength {
            expected: 4,
            actual: 3,
        })
    );
    assert_eq!(
        frame::parse::<[u8; 4]>(&[1, 2, 3, 4, 5]),
        Err(DecodeError::InvalidLength {
            expected: 4,
            actual: 5,
        })
    );
}

#[test]
fn pressure_word_fields() {
    let word = PressureWord::from_bytes([0x61, 0xA8, 0x30]);

    assert_eq!(word.code(), 400_003);
    assert_eq!(word.pascals(), 100_000);
    assert_eq!(word.fraction(), 3);
    assert_eq!(word.hpa(), 1000.0075);
}

#[test]
fn pressure_word_padding() {
    let word = PressureWord::from_bytes([0x61, 0xA8, 0x0F]);

    assert_eq!(word.code(), 400_000);
    assert_eq!(word.hpa(), 1000.0);
}

#[test]
fn pressure_word_from_code() {
    assert_eq!(PressureWord::from_code(400_000).to_bytes(), [0x61, 0xA8, 0x00]);
    assert_eq!(
        PressureWord::from_code(PressureWord::MAX_CODE).to_bytes(),
        [0xFF, 0xFF, 0xF0]
    );

    // Bits above the 20th are not representable.
    assert_eq!(PressureWord::from_code(0x10_0001).code(), 1);
}
