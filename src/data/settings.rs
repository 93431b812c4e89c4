//! Setting value enums and the aggregated settings record.
//!
//! Enum-valued settings wrap a small closed integer domain. Unlike the
//! UI language (which falls back to the raw hash), decoding an
//! out-of-domain integer here is a decode error: the firmware documents
//! these domains exactly.

use crate::data::language::Language;
use crate::error::{Error, Result};
use crate::protocol::registry::{CharSetting, CharValue};

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Create from a raw wire value.
            pub fn from_raw(value: u32) -> Result<Self> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    other => Err(Error::decode(format!(
                        concat!("unknown ", stringify!($name), " value: {}"),
                        other
                    ))),
                }
            }

            /// Convert to the raw wire value.
            pub fn to_raw(self) -> u8 {
                self as u8
            }
        }
    };
}

closed_enum! {
    /// Battery pack the undervoltage cutoff is calibrated for.
    BatteryType {
        /// Fixed supply, no undervoltage cutoff.
        NoBattery = 0,
        /// 3-cell lithium pack.
        Cells3S = 1,
        /// 4-cell lithium pack.
        Cells4S = 2,
        /// 5-cell lithium pack.
        Cells5S = 3,
        /// 6-cell lithium pack.
        Cells6S = 4,
    }
}

closed_enum! {
    /// Screen orientation.
    ScreenOrientation {
        /// Right-handed layout.
        RightHanded = 0,
        /// Left-handed layout.
        LeftHanded = 1,
        /// Follow the accelerometer.
        Auto = 2,
    }
}

closed_enum! {
    /// Menu animation speed.
    AnimationSpeed {
        /// Animations disabled.
        Off = 0,
        Slow = 1,
        Medium = 2,
        Fast = 3,
    }
}

closed_enum! {
    /// Behavior on power-up.
    AutostartMode {
        /// Stay on the home screen.
        Disabled = 0,
        /// Heat straight to the setpoint.
        Soldering = 1,
        /// Start in sleep temperature until moved.
        Sleeping = 2,
        /// Start idle until moved.
        Idle = 3,
    }
}

closed_enum! {
    /// Temperature display unit.
    TempUnit {
        Celsius = 0,
        Fahrenheit = 1,
    }
}

closed_enum! {
    /// Menu description scroll speed.
    ScrollSpeed {
        Slow = 0,
        Fast = 1,
    }
}

closed_enum! {
    /// Button locking behavior while soldering.
    LockingMode {
        /// Buttons never locked.
        Off = 0,
        /// Only the boost button stays active.
        BoostOnly = 1,
        /// Both buttons locked.
        FullLocking = 2,
    }
}

closed_enum! {
    /// How long the boot logo is shown.
    LogoDuration {
        /// Skip the logo.
        Off = 0,
        Seconds1 = 1,
        Seconds2 = 2,
        Seconds3 = 3,
        Seconds4 = 4,
        Seconds5 = 5,
        /// Show until a button is pressed.
        Loop = 6,
    }
}

closed_enum! {
    /// USB-PD negotiation mode.
    UsbPdMode {
        /// PD disabled.
        Off = 0,
        /// Full PD with PPS/EPR.
        On = 1,
        /// PD without dynamic renegotiation.
        Safe = 2,
    }
}

closed_enum! {
    /// Installed soldering tip model.
    TipType {
        /// Auto-sense from tip resistance.
        Auto = 0,
        /// TS100 long tip.
        Ts100Long = 1,
        /// Pinecil short tip.
        PineShort = 2,
        /// PTS200 tip.
        Pts200 = 3,
    }
}

/// Aggregated settings, populated only for the settings actually read.
///
/// One `Option` field per persisted setting, in wire order. Numeric
/// fields are normalized: fixed-point tenths become volts, display
/// brightness becomes its 1-5 step, booleans are decoded from nonzero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsDataResponse {
    /// Setpoint temperature in °C (10-450).
    pub setpoint_temp: Option<u16>,
    /// Sleep temperature in °C (10-450).
    pub sleep_temp: Option<u16>,
    /// Sleep timeout in minutes (0-15).
    pub sleep_timeout: Option<u16>,
    /// Battery pack type for the undervoltage cutoff.
    pub min_dc_voltage_cells: Option<BatteryType>,
    /// Minimum voltage per cell in V (2.4-3.8).
    pub min_voltage_per_cell: Option<f64>,
    /// Quick Charge ideal voltage in V (9.0-22.0).
    pub qc_ideal_voltage: Option<f64>,
    /// Screen orientation.
    pub orientation_mode: Option<ScreenOrientation>,
    /// Motion sensitivity (0-9).
    pub accel_sensitivity: Option<u16>,
    /// Whether menu animations loop.
    pub animation_loop: Option<bool>,
    /// Menu animation speed.
    pub animation_speed: Option<AnimationSpeed>,
    /// Behavior on power-up.
    pub autostart_mode: Option<AutostartMode>,
    /// Shutdown time in minutes (0-60).
    pub shutdown_time: Option<u16>,
    /// Blink the temperature on the cooldown screen.
    pub cooling_temp_blink: Option<bool>,
    /// Detailed idle screen.
    pub idle_screen_details: Option<bool>,
    /// Detailed soldering screen.
    pub solder_screen_details: Option<bool>,
    /// Temperature display unit.
    pub temp_unit: Option<TempUnit>,
    /// Menu description scroll speed.
    pub desc_scroll_speed: Option<ScrollSpeed>,
    /// Button locking behavior.
    pub locking_mode: Option<LockingMode>,
    /// Keep-awake pulse power in W (0.0-9.9).
    pub keep_awake_pulse: Option<f64>,
    /// Keep-awake pulse wait in multiples of 2.5 s (0-9).
    pub keep_awake_pulse_wait: Option<u16>,
    /// Keep-awake pulse duration in multiples of 250 ms (0-9).
    pub keep_awake_pulse_duration: Option<u16>,
    /// Voltage divider calibration (360-900).
    pub voltage_div: Option<u16>,
    /// Boost temperature in °C (0-450).
    pub boost_temp: Option<u16>,
    /// Calibration offset in µV (100-2500).
    pub calibration_offset: Option<u16>,
    /// Power limit in W (0-120).
    pub power_limit: Option<u16>,
    /// Swap the + and - buttons.
    pub invert_buttons: Option<bool>,
    /// Long-press temperature increment in °C (5-90).
    pub temp_increment_long: Option<u16>,
    /// Short-press temperature increment in °C (1-50).
    pub temp_increment_short: Option<u16>,
    /// Hall effect sensitivity (0-9).
    pub hall_sensitivity: Option<u16>,
    /// Motion warning counter (0-9).
    pub accel_warn_counter: Option<u16>,
    /// USB-PD warning counter (0-9).
    pub pd_warn_counter: Option<u16>,
    /// UI language.
    pub ui_language: Option<Language>,
    /// USB-PD negotiation timeout in seconds (0.0-5.0).
    pub pd_negotiation_timeout: Option<f64>,
    /// Invert the display colors.
    pub display_invert: Option<bool>,
    /// Display brightness step (1-5).
    pub display_brightness: Option<u16>,
    /// Boot logo duration.
    pub logo_duration: Option<LogoDuration>,
    /// Cold junction calibration pending.
    pub calibrate_cjc: Option<bool>,
    /// Whether BLE stays enabled.
    pub ble_enabled: Option<bool>,
    /// USB-PD negotiation mode.
    pub usb_pd_mode: Option<UsbPdMode>,
    /// Hall effect sleep time in seconds (0-60, stored in 5-second steps).
    pub hall_sleep_time: Option<u16>,
    /// Installed soldering tip model.
    pub tip_type: Option<TipType>,
    /// Transient flag reported after a save trigger.
    pub settings_save: Option<bool>,
    /// Transient flag reported after a reset trigger.
    pub settings_reset: Option<bool>,
}

impl SettingsDataResponse {
    /// Record one decoded setting value.
    ///
    /// The decoder table and this record are kept in step; a value of an
    /// unexpected shape for its key is ignored rather than misfiled.
    pub(crate) fn apply(&mut self, setting: CharSetting, value: CharValue) {
        use CharSetting as S;
        use CharValue as V;

        match (setting, value) {
            (S::SetpointTemp, V::UInt(v)) => self.setpoint_temp = Some(v as u16),
            (S::SleepTemp, V::UInt(v)) => self.sleep_temp = Some(v as u16),
            (S::SleepTimeout, V::UInt(v)) => self.sleep_timeout = Some(v as u16),
            (S::MinDcVoltageCells, V::BatteryType(v)) => self.min_dc_voltage_cells = Some(v),
            (S::MinVoltagePerCell, V::Float(v)) => self.min_voltage_per_cell = Some(v),
            (S::QcIdealVoltage, V::Float(v)) => self.qc_ideal_voltage = Some(v),
            (S::OrientationMode, V::ScreenOrientation(v)) => self.orientation_mode = Some(v),
            (S::AccelSensitivity, V::UInt(v)) => self.accel_sensitivity = Some(v as u16),
            (S::AnimationLoop, V::Bool(v)) => self.animation_loop = Some(v),
            (S::AnimationSpeed, V::AnimationSpeed(v)) => self.animation_speed = Some(v),
            (S::AutostartMode, V::AutostartMode(v)) => self.autostart_mode = Some(v),
            (S::ShutdownTime, V::UInt(v)) => self.shutdown_time = Some(v as u16),
            (S::CoolingTempBlink, V::Bool(v)) => self.cooling_temp_blink = Some(v),
            (S::IdleScreenDetails, V::Bool(v)) => self.idle_screen_details = Some(v),
            (S::SolderScreenDetails, V::Bool(v)) => self.solder_screen_details = Some(v),
            (S::TempUnit, V::TempUnit(v)) => self.temp_unit = Some(v),
            (S::DescScrollSpeed, V::ScrollSpeed(v)) => self.desc_scroll_speed = Some(v),
            (S::LockingMode, V::LockingMode(v)) => self.locking_mode = Some(v),
            (S::KeepAwakePulse, V::Float(v)) => self.keep_awake_pulse = Some(v),
            (S::KeepAwakePulseWait, V::UInt(v)) => self.keep_awake_pulse_wait = Some(v as u16),
            (S::KeepAwakePulseDuration, V::UInt(v)) => {
                self.keep_awake_pulse_duration = Some(v as u16)
            }
            (S::VoltageDiv, V::UInt(v)) => self.voltage_div = Some(v as u16),
            (S::BoostTemp, V::UInt(v)) => self.boost_temp = Some(v as u16),
            (S::CalibrationOffset, V::UInt(v)) => self.calibration_offset = Some(v as u16),
            (S::PowerLimit, V::UInt(v)) => self.power_limit = Some(v as u16),
            (S::InvertButtons, V::Bool(v)) => self.invert_buttons = Some(v),
            (S::TempIncrementLong, V::UInt(v)) => self.temp_increment_long = Some(v as u16),
            (S::TempIncrementShort, V::UInt(v)) => self.temp_increment_short = Some(v as u16),
            (S::HallSensitivity, V::UInt(v)) => self.hall_sensitivity = Some(v as u16),
            (S::AccelWarnCounter, V::UInt(v)) => self.accel_warn_counter = Some(v as u16),
            (S::PdWarnCounter, V::UInt(v)) => self.pd_warn_counter = Some(v as u16),
            (S::UiLanguage, V::Language(v)) => self.ui_language = Some(v),
            (S::PdNegotiationTimeout, V::Float(v)) => self.pd_negotiation_timeout = Some(v),
            (S::DisplayInvert, V::Bool(v)) => self.display_invert = Some(v),
            (S::DisplayBrightness, V::UInt(v)) => self.display_brightness = Some(v as u16),
            (S::LogoDuration, V::LogoDuration(v)) => self.logo_duration = Some(v),
            (S::CalibrateCjc, V::Bool(v)) => self.calibrate_cjc = Some(v),
            (S::BleEnabled, V::Bool(v)) => self.ble_enabled = Some(v),
            (S::UsbPdMode, V::UsbPdMode(v)) => self.usb_pd_mode = Some(v),
            (S::HallSleepTime, V::UInt(v)) => self.hall_sleep_time = Some(v as u16),
            (S::TipType, V::TipType(v)) => self.tip_type = Some(v),
            (S::SettingsSave, V::Bool(v)) => self.settings_save = Some(v),
            (S::SettingsReset, V::Bool(v)) => self.settings_reset = Some(v),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_from_raw_in_domain() {
        assert_eq!(BatteryType::from_raw(0).unwrap(), BatteryType::NoBattery);
        assert_eq!(BatteryType::from_raw(4).unwrap(), BatteryType::Cells6S);
        assert_eq!(
            ScreenOrientation::from_raw(2).unwrap(),
            ScreenOrientation::Auto
        );
        assert_eq!(LogoDuration::from_raw(6).unwrap(), LogoDuration::Loop);
        assert_eq!(UsbPdMode::from_raw(2).unwrap(), UsbPdMode::Safe);
    }

    #[test]
    fn test_enum_from_raw_out_of_domain_is_error() {
        // Narrower than the language-code case: raise, never coerce.
        assert!(matches!(
            BatteryType::from_raw(5),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(TempUnit::from_raw(2), Err(Error::Decode { .. })));
        assert!(matches!(TipType::from_raw(9), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_enum_raw_roundtrip() {
        for speed in [
            AnimationSpeed::Off,
            AnimationSpeed::Slow,
            AnimationSpeed::Medium,
            AnimationSpeed::Fast,
        ] {
            assert_eq!(
                AnimationSpeed::from_raw(u32::from(speed.to_raw())).unwrap(),
                speed
            );
        }
    }

    #[test]
    fn test_apply_populates_only_requested_fields() {
        let mut response = SettingsDataResponse::default();
        response.apply(CharSetting::SetpointTemp, CharValue::UInt(320));
        response.apply(
            CharSetting::UiLanguage,
            CharValue::Language(Language::from_hash(41431)),
        );

        assert_eq!(response.setpoint_temp, Some(320));
        assert_eq!(
            response.ui_language,
            Some(Language::Code(crate::data::language::LanguageCode::En))
        );
        assert_eq!(response.sleep_temp, None);
        assert_eq!(response.tip_type, None);
    }

    #[test]
    fn test_apply_scaled_fields() {
        let mut response = SettingsDataResponse::default();
        response.apply(CharSetting::KeepAwakePulse, CharValue::Float(0.5));
        response.apply(CharSetting::PdNegotiationTimeout, CharValue::Float(2.0));
        response.apply(CharSetting::HallSleepTime, CharValue::UInt(25));

        assert_eq!(response.keep_awake_pulse, Some(0.5));
        assert_eq!(response.pd_negotiation_timeout, Some(2.0));
        assert_eq!(response.hall_sleep_time, Some(25));
    }

    #[test]
    fn test_apply_ignores_mismatched_shape() {
        let mut response = SettingsDataResponse::default();
        response.apply(CharSetting::SetpointTemp, CharValue::Bool(true));
        assert_eq!(response.setpoint_temp, None);
    }
}
