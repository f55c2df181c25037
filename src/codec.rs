//! Conversions between raw register contents and degrees.
//!
//! The temperature register and the threshold registers use different
//! formats: Temp holds an 11-bit two's complement value (0.125 °C per LSB)
//! while Tos and Thyst hold a 9-bit one (0.5 °C per LSB). Both are left
//! justified in a big-endian 16-bit word.

use byteorder::{BigEndian, ByteOrder};

use crate::Register;

/// Lowest temperature the sensor converts, °C
pub const MIN_CELSIUS: f32 = -55.0;

/// Highest temperature the sensor converts, °C
pub const MAX_CELSIUS: f32 = 125.0;

/// Resolution of the temperature register, °C per LSB
pub const TEMPERATURE_LSB: f32 = 0.125;

/// Resolution of the threshold registers, °C per LSB
pub const THRESHOLD_LSB: f32 = 0.5;

const TEMPERATURE_SHIFT: u16 = 5;
const TEMPERATURE_SIGN: u16 = 0x400;
const TEMPERATURE_MAGNITUDE: u16 = 0x3ff;

/// Kind of temperature threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Threshold {
    /// Overtemperature shutdown threshold (Tos)
    Overtemperature,
    /// Hysteresis threshold (Thyst), re-arms the OS output
    Hysteresis,
}

impl Threshold {
    pub fn register(&self) -> Register {
        match self {
            Threshold::Overtemperature => Register::Tos,
            Threshold::Hysteresis => Register::Thyst,
        }
    }
}

/// Decode the Temp register, most significant byte first, into °C
pub fn decode_temperature(raw: [u8; 2]) -> f32 {
    let value = BigEndian::read_u16(&raw) >> TEMPERATURE_SHIFT;
    if value & TEMPERATURE_SIGN == 0 {
        value as f32 * TEMPERATURE_LSB
    } else {
        let magnitude = 1024 - (value & TEMPERATURE_MAGNITUDE);
        -(magnitude as f32 * TEMPERATURE_LSB)
    }
}

/// Encode a threshold in °C for the Tos or Thyst register.
///
/// The value is saturated to the conversion range and rounded down to the
/// half degree grid.
pub fn encode_threshold(celsius: f32) -> [u8; 2] {
    let half_degrees = libm::floorf(celsius.clamp(MIN_CELSIUS, MAX_CELSIUS) * 2.0) as i16;
    let mut raw = [0u8; 2];
    BigEndian::write_i16(&mut raw, half_degrees << 7);
    raw
}

/// Decode the Tos or Thyst register into °C
pub fn decode_threshold(raw: [u8; 2]) -> f32 {
    // the low byte carries only the least significant bit in its MSB
    let half_degrees = BigEndian::read_i16(&raw) >> 7;
    half_degrees as f32 * THRESHOLD_LSB
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn temperature_conv() {
        assert_eq!(decode_temperature([0x00, 0x00]), 0.0);
        assert_eq!(decode_temperature([0x7d, 0x00]), 125.0);
        assert_eq!(decode_temperature([0x19, 0x20]), 25.125);
        assert_eq!(decode_temperature([0x00, 0x20]), 0.125);
        assert_eq!(decode_temperature([0xff, 0xe0]), -0.125);
        assert_eq!(decode_temperature([0xe7, 0x00]), -25.0);
        assert_eq!(decode_temperature([0xc9, 0x00]), -55.0);
    }

    #[test]
    fn temperature_ignores_unused_bits() {
        assert_eq!(decode_temperature([0x7d, 0x1f]), 125.0);
        assert_eq!(decode_temperature([0xff, 0xff]), -0.125);
    }

    #[test]
    fn threshold_conv() {
        assert_eq!(encode_threshold(80.0), [0x50, 0x00]);
        assert_eq!(encode_threshold(75.5), [0x4b, 0x80]);
        assert_eq!(encode_threshold(0.0), [0x00, 0x00]);
        assert_eq!(encode_threshold(-0.5), [0xff, 0x80]);
        assert_eq!(encode_threshold(-55.0), [0xc9, 0x00]);
        assert_eq!(encode_threshold(125.0), [0x7d, 0x00]);

        assert_eq!(decode_threshold([0x50, 0x00]), 80.0);
        assert_eq!(decode_threshold([0x4b, 0x80]), 75.5);
        assert_eq!(decode_threshold([0xff, 0x80]), -0.5);
        assert_eq!(decode_threshold([0xc9, 0x00]), -55.0);
        assert_eq!(decode_threshold([0x4b, 0xff]), 75.5);
    }

    #[test]
    fn threshold_grid_is_bijective() {
        for half_degrees in -110i16..=250 {
            let celsius = half_degrees as f32 / 2.0;
            let raw = encode_threshold(celsius);
            assert_eq!(decode_threshold(raw), celsius);
            assert_eq!(encode_threshold(decode_threshold(raw)), raw);
        }
    }

    #[test]
    fn threshold_off_grid_rounds_down() {
        assert_eq!(encode_threshold(20.3), encode_threshold(20.0));
        assert_eq!(encode_threshold(20.9), encode_threshold(20.5));
        assert_eq!(encode_threshold(-0.3), encode_threshold(-0.5));
        assert_eq!(encode_threshold(-10.7), encode_threshold(-11.0));
    }

    #[test]
    fn threshold_saturates() {
        assert_eq!(encode_threshold(200.0), encode_threshold(125.0));
        assert_eq!(encode_threshold(-100.0), encode_threshold(-55.0));
        assert_eq!(encode_threshold(f32::INFINITY), [0x7d, 0x00]);
        assert_eq!(encode_threshold(f32::NEG_INFINITY), [0xc9, 0x00]);
    }

    #[test]
    fn threshold_nan_is_zero() {
        assert_eq!(encode_threshold(f32::NAN), [0x00, 0x00]);
    }

    #[test]
    fn threshold_register() {
        assert_eq!(Threshold::Overtemperature.register(), Register::Tos);
        assert_eq!(Threshold::Hysteresis.register(), Register::Thyst);
    }

    #[test]
    fn fahrenheit() {
        assert!(close(celsius_to_fahrenheit(0.0), 32.0));
        assert!(close(celsius_to_fahrenheit(100.0), 212.0));
        assert!(close(celsius_to_fahrenheit(-55.0), -67.0));

        assert!(close(fahrenheit_to_celsius(32.0), 0.0));
        assert!(close(fahrenheit_to_celsius(212.0), 100.0));
        assert!(close(fahrenheit_to_celsius(-67.0), -55.0));
    }
}
