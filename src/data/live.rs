//! Live telemetry data structures.
//!
//! Contains the power source and operating mode enums and the aggregate
//! live data record decoded from the bulk live-data characteristic.

use crate::error::{Error, Result};

/// Power source the iron is currently running from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PowerSource {
    /// Barrel jack / fixed DC input.
    Dc = 0,
    /// Quick Charge negotiation.
    Qc = 1,
    /// USB-PD without negotiation (VBUS).
    PdVbus = 2,
    /// Negotiated USB-PD.
    Pd = 3,
}

impl PowerSource {
    /// Create from a raw wire value.
    pub fn from_raw(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Dc),
            1 => Ok(Self::Qc),
            2 => Ok(Self::PdVbus),
            3 => Ok(Self::Pd),
            other => Err(Error::decode(format!("unknown power source: {other}"))),
        }
    }

    /// Convert to the raw wire value.
    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

/// Operating mode reported by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OperatingMode {
    /// Idle on the home screen.
    Idle = 0,
    /// Actively soldering.
    Soldering = 1,
    /// Boost temperature active.
    Boost = 2,
    /// Sleeping at reduced temperature.
    Sleeping = 3,
    /// In the settings menu.
    Settings = 4,
    /// Debug menu.
    Debug = 5,
}

impl OperatingMode {
    /// Create from a raw wire value.
    pub fn from_raw(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Soldering),
            2 => Ok(Self::Boost),
            3 => Ok(Self::Sleeping),
            4 => Ok(Self::Settings),
            5 => Ok(Self::Debug),
            other => Err(Error::decode(format!("unknown operating mode: {other}"))),
        }
    }

    /// Convert to the raw wire value.
    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

/// Normalized live telemetry, decoded from one bulk read.
///
/// The bulk live-data characteristic returns 14 consecutive 32-bit
/// little-endian unsigned integers in a single payload. Field order and
/// per-field scaling are a fixed protocol contract.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiveDataResponse {
    /// Current tip temperature in °C.
    pub live_temp: u32,
    /// Current setpoint temperature in °C.
    pub setpoint_temp: u32,
    /// DC input voltage in V.
    pub dc_voltage: f64,
    /// Handle temperature in °C.
    pub handle_temp: f64,
    /// Power level in percent (0-100).
    pub pwm_level: u8,
    /// Current power source.
    pub power_src: PowerSource,
    /// Tip resistance in Ω.
    pub tip_resistance: f64,
    /// Uptime in seconds.
    pub uptime: f64,
    /// Seconds since last movement.
    pub movement_time: f64,
    /// Maximum attainable tip temperature in °C.
    pub max_tip_temp_ability: u32,
    /// Raw tip voltage in mV.
    pub tip_voltage: u32,
    /// Hall effect sensor reading.
    pub hall_sensor: u32,
    /// Current operating mode.
    pub operating_mode: OperatingMode,
    /// Estimated power draw in W.
    pub estimated_power: f64,
}

impl LiveDataResponse {
    /// Exact payload size: 14 x uint32.
    pub const PAYLOAD_SIZE: usize = 56;

    /// Parse the bulk live-data payload.
    ///
    /// Field-by-field transforms, in wire order:
    /// - `[0]` live temp (°C, raw)
    /// - `[1]` setpoint temp (°C, raw)
    /// - `[2]` DC voltage (tenths of a volt)
    /// - `[3]` handle temp (tenths of a degree)
    /// - `[4]` PWM level (0-255, rescaled to percent)
    /// - `[5]` power source enum
    /// - `[6]` tip resistance (tenths of an ohm)
    /// - `[7]` uptime (deciseconds)
    /// - `[8]` movement time (deciseconds)
    /// - `[9]` max tip temp ability (°C, raw)
    /// - `[10]` raw tip voltage (mV)
    /// - `[11]` hall sensor (raw)
    /// - `[12]` operating mode enum
    /// - `[13]` estimated power (tenths of a watt)
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != Self::PAYLOAD_SIZE {
            return Err(Error::decode(format!(
                "live data payload is {} bytes (expected {})",
                data.len(),
                Self::PAYLOAD_SIZE
            )));
        }

        let word = |index: usize| -> u32 {
            let base = index * 4;
            u32::from_le_bytes([data[base], data[base + 1], data[base + 2], data[base + 3]])
        };

        Ok(Self {
            live_temp: word(0),
            setpoint_temp: word(1),
            dc_voltage: f64::from(word(2)) / 10.0,
            handle_temp: f64::from(word(3)) / 10.0,
            pwm_level: pwm_to_percent(word(4)),
            power_src: PowerSource::from_raw(word(5))?,
            tip_resistance: f64::from(word(6)) / 10.0,
            uptime: f64::from(word(7)) / 10.0,
            movement_time: f64::from(word(8)) / 10.0,
            max_tip_temp_ability: word(9),
            tip_voltage: word(10),
            hall_sensor: word(11),
            operating_mode: OperatingMode::from_raw(word(12))?,
            estimated_power: f64::from(word(13)) / 10.0,
        })
    }
}

/// Rescale a 0-255 PWM value to percent with integer truncation.
pub(crate) fn pwm_to_percent(raw: u32) -> u8 {
    ((u64::from(raw) * 100) / 255).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload(words: [u32; 14]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_parse_reference_payload() {
        let raw = payload([241, 240, 201, 299, 255, 3, 62, 581, 194, 440, 5726, 0, 1, 25]);
        let live = LiveDataResponse::parse(&raw).unwrap();

        assert_eq!(
            live,
            LiveDataResponse {
                live_temp: 241,
                setpoint_temp: 240,
                dc_voltage: 20.1,
                handle_temp: 29.9,
                pwm_level: 100,
                power_src: PowerSource::Pd,
                tip_resistance: 6.2,
                uptime: 58.1,
                movement_time: 19.4,
                max_tip_temp_ability: 440,
                tip_voltage: 5726,
                hall_sensor: 0,
                operating_mode: OperatingMode::Soldering,
                estimated_power: 2.5,
            }
        );
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            LiveDataResponse::parse(&[0u8; 55]),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            LiveDataResponse::parse(&[0u8; 57]),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_enum_value() {
        let raw = payload([0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            LiveDataResponse::parse(&raw),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_pwm_to_percent() {
        assert_eq!(pwm_to_percent(0), 0);
        assert_eq!(pwm_to_percent(8), 3);
        assert_eq!(pwm_to_percent(128), 50);
        assert_eq!(pwm_to_percent(255), 100);
    }

    #[test]
    fn test_pwm_to_percent_matches_float_truncation() {
        // The integer form must agree with truncated raw / 255 * 100
        // over the whole wire domain.
        for raw in 0u32..=255 {
            assert_eq!(
                pwm_to_percent(raw),
                (f64::from(raw) / 255.0 * 100.0) as u8,
                "raw {raw}"
            );
        }
    }

    #[test]
    fn test_enum_raw_roundtrip() {
        for source in [
            PowerSource::Dc,
            PowerSource::Qc,
            PowerSource::PdVbus,
            PowerSource::Pd,
        ] {
            assert_eq!(
                PowerSource::from_raw(u32::from(source.to_raw())).unwrap(),
                source
            );
        }
        assert!(PowerSource::from_raw(4).is_err());
        assert!(OperatingMode::from_raw(6).is_err());
    }
}
