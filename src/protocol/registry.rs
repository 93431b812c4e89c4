//! The characteristic registry.
//!
//! Single source of truth binding each logical characteristic to its
//! wire behavior: the UUID it lives at, how its payload decodes into a
//! typed value and, for settings, how a typed value is validated and
//! serialized back to wire bytes.
//!
//! The mapping is static and total: every characteristic resolves to
//! exactly one descriptor. Write validation is deliberately permissive
//! for numeric settings: out-of-range values are clamped to the field's
//! documented bounds, never rejected. Enum-valued settings are made
//! unrepresentable-when-invalid by their typed constructors instead.

use uuid::Uuid;

use crate::ble::uuids::*;
use crate::data::language::Language;
use crate::data::live::{pwm_to_percent, LiveDataResponse, OperatingMode, PowerSource};
use crate::data::settings::{
    AnimationSpeed, AutostartMode, BatteryType, LockingMode, LogoDuration, ScreenOrientation,
    ScrollSpeed, TempUnit, TipType, UsbPdMode,
};
use crate::error::Result;
use crate::protocol::codec::{clamp, decode_uint, decode_utf8};

/// Read-only telemetry characteristics (live service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharLive {
    /// Current tip temperature.
    LiveTemp,
    /// Current setpoint temperature.
    SetpointTemp,
    /// DC input voltage.
    DcVoltage,
    /// Handle temperature.
    HandleTemp,
    /// PWM level.
    PwmLevel,
    /// Power source.
    PowerSrc,
    /// Tip resistance.
    TipResistance,
    /// Uptime.
    Uptime,
    /// Time since last movement.
    MovementTime,
    /// Maximum attainable tip temperature.
    MaxTipTempAbility,
    /// Raw tip voltage.
    TipVoltage,
    /// Hall effect sensor reading.
    HallSensor,
    /// Operating mode.
    OperatingMode,
    /// Estimated power draw.
    EstimatedPower,
}

/// Read/write persisted settings (settings service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharSetting {
    /// Setpoint temperature.
    SetpointTemp,
    /// Sleep temperature.
    SleepTemp,
    /// Sleep timeout.
    SleepTimeout,
    /// Battery pack type for the undervoltage cutoff.
    MinDcVoltageCells,
    /// Minimum voltage per cell.
    MinVoltagePerCell,
    /// Quick Charge ideal voltage.
    QcIdealVoltage,
    /// Screen orientation.
    OrientationMode,
    /// Motion sensitivity.
    AccelSensitivity,
    /// Animation loop.
    AnimationLoop,
    /// Animation speed.
    AnimationSpeed,
    /// Autostart mode.
    AutostartMode,
    /// Shutdown time.
    ShutdownTime,
    /// Cooldown blink.
    CoolingTempBlink,
    /// Detailed idle screen.
    IdleScreenDetails,
    /// Detailed soldering screen.
    SolderScreenDetails,
    /// Temperature unit.
    TempUnit,
    /// Description scroll speed.
    DescScrollSpeed,
    /// Button locking mode.
    LockingMode,
    /// Keep-awake pulse power.
    KeepAwakePulse,
    /// Keep-awake pulse wait.
    KeepAwakePulseWait,
    /// Keep-awake pulse duration.
    KeepAwakePulseDuration,
    /// Voltage divider calibration.
    VoltageDiv,
    /// Boost temperature.
    BoostTemp,
    /// Calibration offset.
    CalibrationOffset,
    /// Power limit.
    PowerLimit,
    /// Invert buttons.
    InvertButtons,
    /// Long-press temperature increment.
    TempIncrementLong,
    /// Short-press temperature increment.
    TempIncrementShort,
    /// Hall effect sensitivity.
    HallSensitivity,
    /// Motion warning counter.
    AccelWarnCounter,
    /// USB-PD warning counter.
    PdWarnCounter,
    /// UI language.
    UiLanguage,
    /// USB-PD negotiation timeout.
    PdNegotiationTimeout,
    /// Display invert.
    DisplayInvert,
    /// Display brightness.
    DisplayBrightness,
    /// Boot logo duration.
    LogoDuration,
    /// Cold junction calibration trigger.
    CalibrateCjc,
    /// BLE enabled.
    BleEnabled,
    /// USB-PD mode.
    UsbPdMode,
    /// Hall effect sleep time (IronOS 2.23).
    HallSleepTime,
    /// Soldering tip type (IronOS 2.23).
    TipType,
    /// Save-settings-to-flash trigger.
    SettingsSave,
    /// Factory-reset trigger.
    SettingsReset,
}

impl CharSetting {
    /// All settings, in wire order.
    pub const ALL: [CharSetting; 43] = [
        Self::SetpointTemp,
        Self::SleepTemp,
        Self::SleepTimeout,
        Self::MinDcVoltageCells,
        Self::MinVoltagePerCell,
        Self::QcIdealVoltage,
        Self::OrientationMode,
        Self::AccelSensitivity,
        Self::AnimationLoop,
        Self::AnimationSpeed,
        Self::AutostartMode,
        Self::ShutdownTime,
        Self::CoolingTempBlink,
        Self::IdleScreenDetails,
        Self::SolderScreenDetails,
        Self::TempUnit,
        Self::DescScrollSpeed,
        Self::LockingMode,
        Self::KeepAwakePulse,
        Self::KeepAwakePulseWait,
        Self::KeepAwakePulseDuration,
        Self::VoltageDiv,
        Self::BoostTemp,
        Self::CalibrationOffset,
        Self::PowerLimit,
        Self::InvertButtons,
        Self::TempIncrementLong,
        Self::TempIncrementShort,
        Self::HallSensitivity,
        Self::AccelWarnCounter,
        Self::PdWarnCounter,
        Self::UiLanguage,
        Self::PdNegotiationTimeout,
        Self::DisplayInvert,
        Self::DisplayBrightness,
        Self::LogoDuration,
        Self::CalibrateCjc,
        Self::BleEnabled,
        Self::UsbPdMode,
        Self::HallSleepTime,
        Self::TipType,
        Self::SettingsSave,
        Self::SettingsReset,
    ];

    /// The setting's lowercase name, as used to key the settings record.
    pub fn name(self) -> &'static str {
        match self {
            Self::SetpointTemp => "setpoint_temp",
            Self::SleepTemp => "sleep_temp",
            Self::SleepTimeout => "sleep_timeout",
            Self::MinDcVoltageCells => "min_dc_voltage_cells",
            Self::MinVoltagePerCell => "min_voltage_per_cell",
            Self::QcIdealVoltage => "qc_ideal_voltage",
            Self::OrientationMode => "orientation_mode",
            Self::AccelSensitivity => "accel_sensitivity",
            Self::AnimationLoop => "animation_loop",
            Self::AnimationSpeed => "animation_speed",
            Self::AutostartMode => "autostart_mode",
            Self::ShutdownTime => "shutdown_time",
            Self::CoolingTempBlink => "cooling_temp_blink",
            Self::IdleScreenDetails => "idle_screen_details",
            Self::SolderScreenDetails => "solder_screen_details",
            Self::TempUnit => "temp_unit",
            Self::DescScrollSpeed => "desc_scroll_speed",
            Self::LockingMode => "locking_mode",
            Self::KeepAwakePulse => "keep_awake_pulse",
            Self::KeepAwakePulseWait => "keep_awake_pulse_wait",
            Self::KeepAwakePulseDuration => "keep_awake_pulse_duration",
            Self::VoltageDiv => "voltage_div",
            Self::BoostTemp => "boost_temp",
            Self::CalibrationOffset => "calibration_offset",
            Self::PowerLimit => "power_limit",
            Self::InvertButtons => "invert_buttons",
            Self::TempIncrementLong => "temp_increment_long",
            Self::TempIncrementShort => "temp_increment_short",
            Self::HallSensitivity => "hall_sensitivity",
            Self::AccelWarnCounter => "accel_warn_counter",
            Self::PdWarnCounter => "pd_warn_counter",
            Self::UiLanguage => "ui_language",
            Self::PdNegotiationTimeout => "pd_negotiation_timeout",
            Self::DisplayInvert => "display_invert",
            Self::DisplayBrightness => "display_brightness",
            Self::LogoDuration => "logo_duration",
            Self::CalibrateCjc => "calibrate_cjc",
            Self::BleEnabled => "ble_enabled",
            Self::UsbPdMode => "usb_pd_mode",
            Self::HallSleepTime => "hall_sleep_time",
            Self::TipType => "tip_type",
            Self::SettingsSave => "settings_save",
            Self::SettingsReset => "settings_reset",
        }
    }
}

/// Read-only device/session info characteristics (bulk service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharBulk {
    /// Aggregate live data block (14 x uint32 in one read).
    LiveData,
    /// Accelerometer name. No decoder is registered for this entry;
    /// reading it yields nothing without touching the transport.
    AccelName,
    /// Firmware build version.
    Build,
    /// Device serial number.
    DeviceSn,
    /// Device identifier.
    DeviceId,
}

/// Any logical characteristic the device exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Characteristic {
    /// Read-only telemetry.
    Live(CharLive),
    /// Read/write persisted setting.
    Setting(CharSetting),
    /// Read-only device/session info.
    Bulk(CharBulk),
}

impl Characteristic {
    /// The wire identifier this characteristic lives at.
    pub fn uuid(self) -> Uuid {
        lookup(self).uuid
    }
}

impl From<CharLive> for Characteristic {
    fn from(live: CharLive) -> Self {
        Self::Live(live)
    }
}

impl From<CharSetting> for Characteristic {
    fn from(setting: CharSetting) -> Self {
        Self::Setting(setting)
    }
}

impl From<CharBulk> for Characteristic {
    fn from(bulk: CharBulk) -> Self {
        Self::Bulk(bulk)
    }
}

/// A typed value read from a characteristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharValue {
    /// Plain unsigned integer.
    UInt(u32),
    /// Unit-normalized fractional value (V, Ω, s, W).
    Float(f64),
    /// Boolean flag (decoded from nonzero).
    Bool(bool),
    /// UTF-8 or hex-rendered string.
    Text(String),
    /// Power source.
    PowerSource(PowerSource),
    /// Operating mode.
    OperatingMode(OperatingMode),
    /// Battery pack type.
    BatteryType(BatteryType),
    /// Screen orientation.
    ScreenOrientation(ScreenOrientation),
    /// Animation speed.
    AnimationSpeed(AnimationSpeed),
    /// Autostart mode.
    AutostartMode(AutostartMode),
    /// Temperature unit.
    TempUnit(TempUnit),
    /// Scroll speed.
    ScrollSpeed(ScrollSpeed),
    /// Locking mode.
    LockingMode(LockingMode),
    /// Logo duration.
    LogoDuration(LogoDuration),
    /// USB-PD mode.
    UsbPdMode(UsbPdMode),
    /// Tip type.
    TipType(TipType),
    /// UI language.
    Language(Language),
    /// Aggregate live data record.
    LiveData(LiveDataResponse),
}

/// How a characteristic's payload is interpreted.
pub(crate) type DecodeFn = fn(&[u8]) -> Result<CharValue>;

/// Registry entry: wire identifier plus decoder.
///
/// Entries without a decoder are cataloged but yield nothing on read,
/// the defensive default for characteristics newer firmware may expose.
#[derive(Clone, Copy)]
pub(crate) struct Descriptor {
    /// The characteristic's UUID.
    pub uuid: Uuid,
    /// Payload decoder, if the characteristic is interpreted.
    pub decode: Option<DecodeFn>,
}

fn uint(raw: &[u8]) -> Result<u32> {
    Ok(decode_uint(raw)? as u32)
}

fn d_uint(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::UInt(uint(raw)?))
}

fn d_tenths(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::Float(f64::from(uint(raw)?) / 10.0))
}

// Wire unit is 5-second steps, surfaced as seconds.
fn d_five_sec_steps(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::UInt(uint(raw)? * 5))
}

fn d_percent(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::UInt(u32::from(pwm_to_percent(uint(raw)?))))
}

fn d_bool(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::Bool(uint(raw)? != 0))
}

// Wire range 1-101 in steps of 25, surfaced as steps 1-5.
fn d_brightness(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::UInt((uint(raw)? + 24) / 25))
}

fn d_power_source(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::PowerSource(PowerSource::from_raw(uint(raw)?)?))
}

fn d_operating_mode(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::OperatingMode(OperatingMode::from_raw(uint(
        raw,
    )?)?))
}

fn d_battery_type(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::BatteryType(BatteryType::from_raw(uint(raw)?)?))
}

fn d_orientation(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::ScreenOrientation(ScreenOrientation::from_raw(
        uint(raw)?,
    )?))
}

fn d_animation_speed(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::AnimationSpeed(AnimationSpeed::from_raw(uint(
        raw,
    )?)?))
}

fn d_autostart(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::AutostartMode(AutostartMode::from_raw(uint(
        raw,
    )?)?))
}

fn d_temp_unit(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::TempUnit(TempUnit::from_raw(uint(raw)?)?))
}

fn d_scroll_speed(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::ScrollSpeed(ScrollSpeed::from_raw(uint(raw)?)?))
}

fn d_locking_mode(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::LockingMode(LockingMode::from_raw(uint(raw)?)?))
}

fn d_logo_duration(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::LogoDuration(LogoDuration::from_raw(uint(raw)?)?))
}

fn d_usb_pd_mode(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::UsbPdMode(UsbPdMode::from_raw(uint(raw)?)?))
}

fn d_tip_type(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::TipType(TipType::from_raw(uint(raw)?)?))
}

fn d_language(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::Language(Language::from_hash(uint(raw)? as u16)))
}

fn d_utf8(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::Text(decode_utf8(raw)?))
}

fn d_device_sn(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::Text(format!("{:016x}", decode_uint(raw)?)))
}

fn d_device_id(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::Text(format!("{:x}", decode_uint(raw)?)))
}

fn d_live_data(raw: &[u8]) -> Result<CharValue> {
    Ok(CharValue::LiveData(LiveDataResponse::parse(raw)?))
}

/// Resolve a characteristic to its registry entry.
pub(crate) fn lookup(characteristic: Characteristic) -> Descriptor {
    use CharBulk as B;
    use Characteristic as C;
    use CharLive as L;
    use CharSetting as S;

    let entry = |uuid: Uuid, decode: DecodeFn| Descriptor {
        uuid,
        decode: Some(decode),
    };

    match characteristic {
        C::Bulk(B::LiveData) => entry(BULK_LIVE_DATA_UUID, d_live_data),
        C::Bulk(B::AccelName) => Descriptor {
            uuid: BULK_ACCEL_NAME_UUID,
            decode: None,
        },
        C::Bulk(B::Build) => entry(BULK_BUILD_UUID, d_utf8),
        C::Bulk(B::DeviceSn) => entry(BULK_DEVICE_SN_UUID, d_device_sn),
        C::Bulk(B::DeviceId) => entry(BULK_DEVICE_ID_UUID, d_device_id),

        C::Live(L::LiveTemp) => entry(LIVE_LIVE_TEMP_UUID, d_uint),
        C::Live(L::SetpointTemp) => entry(LIVE_SETPOINT_TEMP_UUID, d_uint),
        C::Live(L::DcVoltage) => entry(LIVE_DC_VOLTAGE_UUID, d_tenths),
        C::Live(L::HandleTemp) => entry(LIVE_HANDLE_TEMP_UUID, d_tenths),
        C::Live(L::PwmLevel) => entry(LIVE_PWM_LEVEL_UUID, d_percent),
        C::Live(L::PowerSrc) => entry(LIVE_POWER_SRC_UUID, d_power_source),
        C::Live(L::TipResistance) => entry(LIVE_TIP_RESISTANCE_UUID, d_tenths),
        C::Live(L::Uptime) => entry(LIVE_UPTIME_UUID, d_tenths),
        C::Live(L::MovementTime) => entry(LIVE_MOVEMENT_TIME_UUID, d_tenths),
        C::Live(L::MaxTipTempAbility) => entry(LIVE_MAX_TIP_TEMP_ABILITY_UUID, d_uint),
        C::Live(L::TipVoltage) => entry(LIVE_TIP_VOLTAGE_UUID, d_uint),
        C::Live(L::HallSensor) => entry(LIVE_HALL_SENSOR_UUID, d_uint),
        C::Live(L::OperatingMode) => entry(LIVE_OPERATING_MODE_UUID, d_operating_mode),
        C::Live(L::EstimatedPower) => entry(LIVE_ESTIMATED_POWER_UUID, d_tenths),

        C::Setting(S::SetpointTemp) => entry(SETTINGS_SETPOINT_TEMP_UUID, d_uint),
        C::Setting(S::SleepTemp) => entry(SETTINGS_SLEEP_TEMP_UUID, d_uint),
        C::Setting(S::SleepTimeout) => entry(SETTINGS_SLEEP_TIMEOUT_UUID, d_uint),
        C::Setting(S::MinDcVoltageCells) => {
            entry(SETTINGS_MIN_DC_VOLTAGE_CELLS_UUID, d_battery_type)
        }
        C::Setting(S::MinVoltagePerCell) => entry(SETTINGS_MIN_VOLTAGE_PER_CELL_UUID, d_tenths),
        C::Setting(S::QcIdealVoltage) => entry(SETTINGS_QC_IDEAL_VOLTAGE_UUID, d_tenths),
        C::Setting(S::OrientationMode) => entry(SETTINGS_ORIENTATION_MODE_UUID, d_orientation),
        C::Setting(S::AccelSensitivity) => entry(SETTINGS_ACCEL_SENSITIVITY_UUID, d_uint),
        C::Setting(S::AnimationLoop) => entry(SETTINGS_ANIMATION_LOOP_UUID, d_bool),
        C::Setting(S::AnimationSpeed) => entry(SETTINGS_ANIMATION_SPEED_UUID, d_animation_speed),
        C::Setting(S::AutostartMode) => entry(SETTINGS_AUTOSTART_MODE_UUID, d_autostart),
        C::Setting(S::ShutdownTime) => entry(SETTINGS_SHUTDOWN_TIME_UUID, d_uint),
        C::Setting(S::CoolingTempBlink) => entry(SETTINGS_COOLING_TEMP_BLINK_UUID, d_bool),
        C::Setting(S::IdleScreenDetails) => entry(SETTINGS_IDLE_SCREEN_DETAILS_UUID, d_bool),
        C::Setting(S::SolderScreenDetails) => entry(SETTINGS_SOLDER_SCREEN_DETAILS_UUID, d_bool),
        C::Setting(S::TempUnit) => entry(SETTINGS_TEMP_UNIT_UUID, d_temp_unit),
        C::Setting(S::DescScrollSpeed) => entry(SETTINGS_DESC_SCROLL_SPEED_UUID, d_scroll_speed),
        C::Setting(S::LockingMode) => entry(SETTINGS_LOCKING_MODE_UUID, d_locking_mode),
        C::Setting(S::KeepAwakePulse) => entry(SETTINGS_KEEP_AWAKE_PULSE_UUID, d_tenths),
        C::Setting(S::KeepAwakePulseWait) => entry(SETTINGS_KEEP_AWAKE_PULSE_WAIT_UUID, d_uint),
        C::Setting(S::KeepAwakePulseDuration) => {
            entry(SETTINGS_KEEP_AWAKE_PULSE_DURATION_UUID, d_uint)
        }
        C::Setting(S::VoltageDiv) => entry(SETTINGS_VOLTAGE_DIV_UUID, d_uint),
        C::Setting(S::BoostTemp) => entry(SETTINGS_BOOST_TEMP_UUID, d_uint),
        C::Setting(S::CalibrationOffset) => entry(SETTINGS_CALIBRATION_OFFSET_UUID, d_uint),
        C::Setting(S::PowerLimit) => entry(SETTINGS_POWER_LIMIT_UUID, d_uint),
        C::Setting(S::InvertButtons) => entry(SETTINGS_INVERT_BUTTONS_UUID, d_bool),
        C::Setting(S::TempIncrementLong) => entry(SETTINGS_TEMP_INCREMENT_LONG_UUID, d_uint),
        C::Setting(S::TempIncrementShort) => entry(SETTINGS_TEMP_INCREMENT_SHORT_UUID, d_uint),
        C::Setting(S::HallSensitivity) => entry(SETTINGS_HALL_SENSITIVITY_UUID, d_uint),
        C::Setting(S::AccelWarnCounter) => entry(SETTINGS_ACCEL_WARN_COUNTER_UUID, d_uint),
        C::Setting(S::PdWarnCounter) => entry(SETTINGS_PD_WARN_COUNTER_UUID, d_uint),
        C::Setting(S::UiLanguage) => entry(SETTINGS_UI_LANGUAGE_UUID, d_language),
        C::Setting(S::PdNegotiationTimeout) => {
            entry(SETTINGS_PD_NEGOTIATION_TIMEOUT_UUID, d_tenths)
        }
        C::Setting(S::DisplayInvert) => entry(SETTINGS_DISPLAY_INVERT_UUID, d_bool),
        C::Setting(S::DisplayBrightness) => entry(SETTINGS_DISPLAY_BRIGHTNESS_UUID, d_brightness),
        C::Setting(S::LogoDuration) => entry(SETTINGS_LOGO_DURATION_UUID, d_logo_duration),
        C::Setting(S::CalibrateCjc) => entry(SETTINGS_CALIBRATE_CJC_UUID, d_bool),
        C::Setting(S::BleEnabled) => entry(SETTINGS_BLE_ENABLED_UUID, d_bool),
        C::Setting(S::UsbPdMode) => entry(SETTINGS_USB_PD_MODE_UUID, d_usb_pd_mode),
        C::Setting(S::HallSleepTime) => entry(SETTINGS_HALL_SLEEP_TIME_UUID, d_five_sec_steps),
        C::Setting(S::TipType) => entry(SETTINGS_TIP_TYPE_UUID, d_tip_type),
        C::Setting(S::SettingsSave) => entry(SETTINGS_SAVE_UUID, d_bool),
        C::Setting(S::SettingsReset) => entry(SETTINGS_RESET_UUID, d_bool),
    }
}

/// A typed value to write to a setting.
///
/// One constructor per settable field, so the value domain is checked by
/// the compiler instead of a polymorphic validator. `to_wire` owns the
/// whole validate-and-serialize pipeline: numeric inputs are clamped to
/// the field's documented bounds (out-of-range input is never an error),
/// fixed-point fields are scaled by their protocol constant, and the two
/// trigger settings always serialize the constant 1 regardless of input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingValue {
    /// Setpoint temperature in °C, clamped to 10-450.
    SetpointTemp(u16),
    /// Sleep temperature in °C, clamped to 10-450.
    SleepTemp(u16),
    /// Sleep timeout in minutes, clamped to 0-15.
    SleepTimeout(u16),
    /// Battery pack type.
    MinDcVoltageCells(BatteryType),
    /// Minimum voltage per cell in V, clamped to 2.4-3.8.
    MinVoltagePerCell(f64),
    /// Quick Charge ideal voltage in V, clamped to 9.0-22.0.
    QcIdealVoltage(f64),
    /// Screen orientation.
    OrientationMode(ScreenOrientation),
    /// Motion sensitivity, clamped to 0-9.
    AccelSensitivity(u16),
    /// Animation loop.
    AnimationLoop(bool),
    /// Animation speed.
    AnimationSpeed(AnimationSpeed),
    /// Autostart mode.
    AutostartMode(AutostartMode),
    /// Shutdown time in minutes, clamped to 0-60.
    ShutdownTime(u16),
    /// Cooldown blink.
    CoolingTempBlink(bool),
    /// Detailed idle screen.
    IdleScreenDetails(bool),
    /// Detailed soldering screen.
    SolderScreenDetails(bool),
    /// Temperature unit.
    TempUnit(TempUnit),
    /// Description scroll speed.
    DescScrollSpeed(ScrollSpeed),
    /// Button locking mode.
    LockingMode(LockingMode),
    /// Keep-awake pulse power in W, clamped to 0.0-9.9.
    KeepAwakePulse(f64),
    /// Keep-awake pulse wait, clamped to 0-9.
    KeepAwakePulseWait(u16),
    /// Keep-awake pulse duration, clamped to 0-9.
    KeepAwakePulseDuration(u16),
    /// Voltage divider calibration, clamped to 360-900.
    VoltageDiv(u16),
    /// Boost temperature in °C, clamped to 0-450.
    BoostTemp(u16),
    /// Calibration offset in µV, clamped to 100-2500.
    CalibrationOffset(u16),
    /// Power limit in W, clamped to 0-120.
    PowerLimit(u16),
    /// Invert buttons.
    InvertButtons(bool),
    /// Long-press temperature increment in °C, clamped to 5-90.
    TempIncrementLong(u16),
    /// Short-press temperature increment in °C, clamped to 1-50.
    TempIncrementShort(u16),
    /// Hall effect sensitivity, clamped to 0-9.
    HallSensitivity(u16),
    /// Motion warning counter, clamped to 0-9.
    AccelWarnCounter(u16),
    /// USB-PD warning counter, clamped to 0-9.
    PdWarnCounter(u16),
    /// UI language.
    UiLanguage(Language),
    /// USB-PD negotiation timeout in seconds, clamped to 0.0-5.0.
    PdNegotiationTimeout(f64),
    /// Display invert.
    DisplayInvert(bool),
    /// Display brightness step, clamped to 1-5.
    DisplayBrightness(u16),
    /// Boot logo duration.
    LogoDuration(LogoDuration),
    /// Cold junction calibration trigger.
    CalibrateCjc(bool),
    /// BLE enabled.
    BleEnabled(bool),
    /// USB-PD mode.
    UsbPdMode(UsbPdMode),
    /// Hall effect sleep time in seconds, stored in 5-second steps,
    /// clamped to 0-60.
    HallSleepTime(u16),
    /// Soldering tip type.
    TipType(TipType),
    /// Save settings to flash. Always writes 1.
    SettingsSave,
    /// Factory reset. Always writes 1.
    SettingsReset,
}

impl SettingValue {
    /// The setting this value targets.
    pub fn setting(&self) -> CharSetting {
        match self {
            Self::SetpointTemp(_) => CharSetting::SetpointTemp,
            Self::SleepTemp(_) => CharSetting::SleepTemp,
            Self::SleepTimeout(_) => CharSetting::SleepTimeout,
            Self::MinDcVoltageCells(_) => CharSetting::MinDcVoltageCells,
            Self::MinVoltagePerCell(_) => CharSetting::MinVoltagePerCell,
            Self::QcIdealVoltage(_) => CharSetting::QcIdealVoltage,
            Self::OrientationMode(_) => CharSetting::OrientationMode,
            Self::AccelSensitivity(_) => CharSetting::AccelSensitivity,
            Self::AnimationLoop(_) => CharSetting::AnimationLoop,
            Self::AnimationSpeed(_) => CharSetting::AnimationSpeed,
            Self::AutostartMode(_) => CharSetting::AutostartMode,
            Self::ShutdownTime(_) => CharSetting::ShutdownTime,
            Self::CoolingTempBlink(_) => CharSetting::CoolingTempBlink,
            Self::IdleScreenDetails(_) => CharSetting::IdleScreenDetails,
            Self::SolderScreenDetails(_) => CharSetting::SolderScreenDetails,
            Self::TempUnit(_) => CharSetting::TempUnit,
            Self::DescScrollSpeed(_) => CharSetting::DescScrollSpeed,
            Self::LockingMode(_) => CharSetting::LockingMode,
            Self::KeepAwakePulse(_) => CharSetting::KeepAwakePulse,
            Self::KeepAwakePulseWait(_) => CharSetting::KeepAwakePulseWait,
            Self::KeepAwakePulseDuration(_) => CharSetting::KeepAwakePulseDuration,
            Self::VoltageDiv(_) => CharSetting::VoltageDiv,
            Self::BoostTemp(_) => CharSetting::BoostTemp,
            Self::CalibrationOffset(_) => CharSetting::CalibrationOffset,
            Self::PowerLimit(_) => CharSetting::PowerLimit,
            Self::InvertButtons(_) => CharSetting::InvertButtons,
            Self::TempIncrementLong(_) => CharSetting::TempIncrementLong,
            Self::TempIncrementShort(_) => CharSetting::TempIncrementShort,
            Self::HallSensitivity(_) => CharSetting::HallSensitivity,
            Self::AccelWarnCounter(_) => CharSetting::AccelWarnCounter,
            Self::PdWarnCounter(_) => CharSetting::PdWarnCounter,
            Self::UiLanguage(_) => CharSetting::UiLanguage,
            Self::PdNegotiationTimeout(_) => CharSetting::PdNegotiationTimeout,
            Self::DisplayInvert(_) => CharSetting::DisplayInvert,
            Self::DisplayBrightness(_) => CharSetting::DisplayBrightness,
            Self::LogoDuration(_) => CharSetting::LogoDuration,
            Self::CalibrateCjc(_) => CharSetting::CalibrateCjc,
            Self::BleEnabled(_) => CharSetting::BleEnabled,
            Self::UsbPdMode(_) => CharSetting::UsbPdMode,
            Self::HallSleepTime(_) => CharSetting::HallSleepTime,
            Self::TipType(_) => CharSetting::TipType,
            Self::SettingsSave => CharSetting::SettingsSave,
            Self::SettingsReset => CharSetting::SettingsReset,
        }
    }

    /// Validate and serialize to the 2-byte little-endian wire format.
    pub fn to_wire(&self) -> [u8; 2] {
        let raw: u16 = match self {
            Self::SetpointTemp(v) => clamp(*v, 10, 450),
            Self::SleepTemp(v) => clamp(*v, 10, 450),
            Self::SleepTimeout(v) => clamp(*v, 0, 15),
            Self::MinDcVoltageCells(v) => u16::from(v.to_raw()),
            Self::MinVoltagePerCell(v) => scale_tenths(*v, 24, 38),
            Self::QcIdealVoltage(v) => scale_tenths(*v, 90, 220),
            Self::OrientationMode(v) => u16::from(v.to_raw()),
            Self::AccelSensitivity(v) => clamp(*v, 0, 9),
            Self::AnimationLoop(v) => u16::from(*v),
            Self::AnimationSpeed(v) => u16::from(v.to_raw()),
            Self::AutostartMode(v) => u16::from(v.to_raw()),
            Self::ShutdownTime(v) => clamp(*v, 0, 60),
            Self::CoolingTempBlink(v) => u16::from(*v),
            Self::IdleScreenDetails(v) => u16::from(*v),
            Self::SolderScreenDetails(v) => u16::from(*v),
            Self::TempUnit(v) => u16::from(v.to_raw()),
            Self::DescScrollSpeed(v) => u16::from(v.to_raw()),
            Self::LockingMode(v) => u16::from(v.to_raw()),
            Self::KeepAwakePulse(v) => scale_tenths(*v, 0, 99),
            Self::KeepAwakePulseWait(v) => clamp(*v, 0, 9),
            Self::KeepAwakePulseDuration(v) => clamp(*v, 0, 9),
            Self::VoltageDiv(v) => clamp(*v, 360, 900),
            Self::BoostTemp(v) => clamp(*v, 0, 450),
            Self::CalibrationOffset(v) => clamp(*v, 100, 2500),
            Self::PowerLimit(v) => clamp(*v, 0, 120),
            Self::InvertButtons(v) => u16::from(*v),
            Self::TempIncrementLong(v) => clamp(*v, 5, 90),
            Self::TempIncrementShort(v) => clamp(*v, 1, 50),
            Self::HallSensitivity(v) => clamp(*v, 0, 9),
            Self::AccelWarnCounter(v) => clamp(*v, 0, 9),
            Self::PdWarnCounter(v) => clamp(*v, 0, 9),
            Self::UiLanguage(v) => v.to_hash(),
            Self::PdNegotiationTimeout(v) => scale_tenths(*v, 0, 50),
            Self::DisplayInvert(v) => u16::from(*v),
            // Steps 1-5 map to the wire range 1-101 in steps of 25.
            Self::DisplayBrightness(v) => clamp(25 * i64::from(*v) - 24, 1, 101) as u16,
            Self::LogoDuration(v) => u16::from(v.to_raw()),
            Self::CalibrateCjc(v) => u16::from(*v),
            Self::BleEnabled(v) => u16::from(*v),
            Self::UsbPdMode(v) => u16::from(v.to_raw()),
            // Seconds on the wire are 5-second steps.
            Self::HallSleepTime(v) => clamp(*v / 5, 0, 12),
            Self::TipType(v) => u16::from(v.to_raw()),
            Self::SettingsSave => 1,
            Self::SettingsReset => 1,
        };
        raw.to_le_bytes()
    }
}

/// Scale a fractional value to fixed-point tenths and clamp to the
/// field's raw bounds.
fn scale_tenths(value: f64, min: i64, max: i64) -> u16 {
    clamp((value * 10.0).round() as i64, min, max) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::language::LanguageCode;
    use proptest::prelude::*;

    fn all_characteristics() -> Vec<Characteristic> {
        let mut all: Vec<Characteristic> = vec![
            CharBulk::LiveData.into(),
            CharBulk::AccelName.into(),
            CharBulk::Build.into(),
            CharBulk::DeviceSn.into(),
            CharBulk::DeviceId.into(),
        ];
        all.extend(
            [
                CharLive::LiveTemp,
                CharLive::SetpointTemp,
                CharLive::DcVoltage,
                CharLive::HandleTemp,
                CharLive::PwmLevel,
                CharLive::PowerSrc,
                CharLive::TipResistance,
                CharLive::Uptime,
                CharLive::MovementTime,
                CharLive::MaxTipTempAbility,
                CharLive::TipVoltage,
                CharLive::HallSensor,
                CharLive::OperatingMode,
                CharLive::EstimatedPower,
            ]
            .map(Characteristic::from),
        );
        all.extend(CharSetting::ALL.map(Characteristic::from));
        all
    }

    fn decode_setting(setting: CharSetting, wire: &[u8]) -> CharValue {
        let descriptor = lookup(setting.into());
        descriptor.decode.expect("settings always decode")(wire).unwrap()
    }

    #[test]
    fn test_registry_is_total_with_unique_uuids() {
        let all = all_characteristics();
        assert_eq!(all.len(), 62);

        let uuids: std::collections::HashSet<_> = all.iter().map(|c| c.uuid()).collect();
        assert_eq!(uuids.len(), all.len(), "wire identifiers must be unique");
    }

    #[test]
    fn test_only_accel_name_lacks_a_decoder() {
        for characteristic in all_characteristics() {
            let has_decoder = lookup(characteristic).decode.is_some();
            assert_eq!(
                has_decoder,
                characteristic != CharBulk::AccelName.into(),
                "unexpected decoder state for {characteristic:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range_write_is_clamped_not_rejected() {
        // Writing 900 to the 10-450 range produces the same bytes as 450.
        assert_eq!(
            SettingValue::SetpointTemp(900).to_wire(),
            SettingValue::SetpointTemp(450).to_wire()
        );
        assert_eq!(SettingValue::SetpointTemp(900).to_wire(), [0xC2, 0x01]);
        assert_eq!(SettingValue::SleepTimeout(200).to_wire(), [15, 0]);
        assert_eq!(SettingValue::VoltageDiv(0).to_wire(), 360u16.to_le_bytes());
    }

    #[test]
    fn test_fixed_point_roundtrip_exact() {
        // 3.3 V stored as 33 tenths, decoded back to 3.3 exactly.
        let wire = SettingValue::MinVoltagePerCell(3.3).to_wire();
        assert_eq!(wire, [33, 0]);
        assert_eq!(
            decode_setting(CharSetting::MinVoltagePerCell, &wire),
            CharValue::Float(3.3)
        );

        let wire = SettingValue::QcIdealVoltage(12.0).to_wire();
        assert_eq!(wire, [120, 0]);
        assert_eq!(
            decode_setting(CharSetting::QcIdealVoltage, &wire),
            CharValue::Float(12.0)
        );

        // Out of range clamps on the raw scale.
        assert_eq!(SettingValue::MinVoltagePerCell(9.9).to_wire(), [38, 0]);
        assert_eq!(SettingValue::MinVoltagePerCell(0.0).to_wire(), [24, 0]);
    }

    #[test]
    fn test_brightness_step_scaling() {
        for (step, wire_value) in [(1u16, 1u16), (2, 26), (3, 51), (4, 76), (5, 101)] {
            let wire = SettingValue::DisplayBrightness(step).to_wire();
            assert_eq!(wire, wire_value.to_le_bytes());
            assert_eq!(
                decode_setting(CharSetting::DisplayBrightness, &wire),
                CharValue::UInt(u32::from(step))
            );
        }
        // Step 0 and step 9 clamp to the wire bounds.
        assert_eq!(SettingValue::DisplayBrightness(0).to_wire(), [1, 0]);
        assert_eq!(SettingValue::DisplayBrightness(9).to_wire(), [101, 0]);
    }

    #[test]
    fn test_live_characteristic_scaling() {
        let decode = |live: CharLive, wire: &[u8]| {
            lookup(live.into()).decode.expect("live always decodes")(wire).unwrap()
        };

        // Same units as the aggregate block: deciseconds and deciwatts
        // become seconds and watts, tip voltage stays raw mV.
        assert_eq!(decode(CharLive::Uptime, &[0x45, 0x02]), CharValue::Float(58.1));
        assert_eq!(
            decode(CharLive::MovementTime, &[0xC2, 0x00]),
            CharValue::Float(19.4)
        );
        assert_eq!(
            decode(CharLive::EstimatedPower, &[0x19, 0x00]),
            CharValue::Float(2.5)
        );
        assert_eq!(
            decode(CharLive::TipVoltage, &[0x5E, 0x16]),
            CharValue::UInt(5726)
        );
        assert_eq!(
            decode(CharLive::DcVoltage, &[0xC9, 0x00]),
            CharValue::Float(20.1)
        );
        assert_eq!(decode(CharLive::LiveTemp, &[0xF1, 0x00]), CharValue::UInt(241));
    }

    #[test]
    fn test_hall_sleep_time_five_second_steps() {
        // Wire value 5 means 5 steps of 5 seconds.
        assert_eq!(
            decode_setting(CharSetting::HallSleepTime, &[5, 0]),
            CharValue::UInt(25)
        );
        assert_eq!(SettingValue::HallSleepTime(25).to_wire(), [5, 0]);
        assert_eq!(SettingValue::HallSleepTime(0).to_wire(), [0, 0]);
        // 60 s is the full range (12 steps); beyond it clamps.
        assert_eq!(SettingValue::HallSleepTime(60).to_wire(), [12, 0]);
        assert_eq!(SettingValue::HallSleepTime(300).to_wire(), [12, 0]);
    }

    #[test]
    fn test_keep_awake_pulse_and_pd_timeout_are_tenths() {
        assert_eq!(
            decode_setting(CharSetting::KeepAwakePulse, &[5, 0]),
            CharValue::Float(0.5)
        );
        assert_eq!(SettingValue::KeepAwakePulse(0.5).to_wire(), [5, 0]);
        assert_eq!(SettingValue::KeepAwakePulse(99.0).to_wire(), [99, 0]);

        assert_eq!(
            decode_setting(CharSetting::PdNegotiationTimeout, &[20, 0]),
            CharValue::Float(2.0)
        );
        assert_eq!(SettingValue::PdNegotiationTimeout(2.0).to_wire(), [20, 0]);
        assert_eq!(SettingValue::PdNegotiationTimeout(9.0).to_wire(), [50, 0]);
    }

    #[test]
    fn test_bool_coercion() {
        assert_eq!(SettingValue::AnimationLoop(true).to_wire(), [1, 0]);
        assert_eq!(SettingValue::AnimationLoop(false).to_wire(), [0, 0]);
        assert_eq!(
            decode_setting(CharSetting::AnimationLoop, &[7, 0]),
            CharValue::Bool(true)
        );
        assert_eq!(
            decode_setting(CharSetting::AnimationLoop, &[0, 0]),
            CharValue::Bool(false)
        );
    }

    #[test]
    fn test_enum_setting_wire_values() {
        assert_eq!(
            SettingValue::MinDcVoltageCells(BatteryType::Cells3S).to_wire(),
            [1, 0]
        );
        assert_eq!(
            SettingValue::OrientationMode(ScreenOrientation::Auto).to_wire(),
            [2, 0]
        );
        assert_eq!(SettingValue::LogoDuration(LogoDuration::Loop).to_wire(), [6, 0]);
        assert_eq!(
            decode_setting(CharSetting::MinDcVoltageCells, &[1, 0]),
            CharValue::BatteryType(BatteryType::Cells3S)
        );
    }

    #[test]
    fn test_enum_setting_decode_out_of_domain_raises() {
        let descriptor = lookup(CharSetting::MinDcVoltageCells.into());
        assert!(descriptor.decode.unwrap()(&[9, 0]).is_err());
    }

    #[test]
    fn test_language_setting() {
        let wire = SettingValue::UiLanguage(Language::Code(LanguageCode::En)).to_wire();
        assert_eq!(wire, 41431u16.to_le_bytes());
        assert_eq!(
            decode_setting(CharSetting::UiLanguage, &wire),
            CharValue::Language(Language::Code(LanguageCode::En))
        );

        // A hash outside the known table decodes to the raw integer.
        assert_eq!(
            decode_setting(CharSetting::UiLanguage, &12345u16.to_le_bytes()),
            CharValue::Language(Language::Hash(12345))
        );

        let wire = SettingValue::UiLanguage(Language::Custom("xx".to_string())).to_wire();
        assert_eq!(wire, 8781u16.to_le_bytes());
    }

    #[test]
    fn test_write_triggers_force_constant() {
        assert_eq!(SettingValue::SettingsSave.to_wire(), [1, 0]);
        assert_eq!(SettingValue::SettingsReset.to_wire(), [1, 0]);
    }

    #[test]
    fn test_setting_value_targets_its_setting() {
        assert_eq!(
            SettingValue::SetpointTemp(300).setting(),
            CharSetting::SetpointTemp
        );
        assert_eq!(SettingValue::SettingsSave.setting(), CharSetting::SettingsSave);
        assert_eq!(
            SettingValue::TipType(TipType::Auto).setting(),
            CharSetting::TipType
        );
    }

    #[test]
    fn test_setting_names() {
        assert_eq!(CharSetting::SetpointTemp.name(), "setpoint_temp");
        assert_eq!(CharSetting::UiLanguage.name(), "ui_language");
        assert_eq!(CharSetting::SettingsReset.name(), "settings_reset");
    }

    proptest! {
        #[test]
        fn prop_plain_range_roundtrip(x in 0u16..=u16::MAX) {
            // decode(encode(clamp(x))) == clamp(x) for every integer input.
            let wire = SettingValue::SetpointTemp(x).to_wire();
            let expected = clamp(x, 10, 450);
            prop_assert_eq!(wire, expected.to_le_bytes());
            prop_assert_eq!(
                decode_setting(CharSetting::SetpointTemp, &wire),
                CharValue::UInt(u32::from(expected))
            );
        }

        #[test]
        fn prop_voltage_div_roundtrip(x in 0u16..=u16::MAX) {
            let wire = SettingValue::VoltageDiv(x).to_wire();
            let expected = clamp(x, 360, 900);
            prop_assert_eq!(
                decode_setting(CharSetting::VoltageDiv, &wire),
                CharValue::UInt(u32::from(expected))
            );
        }

        #[test]
        fn prop_tenths_roundtrip(tenths in 24u16..=38) {
            // Any representable in-range value survives the scale-and-round trip.
            let volts = f64::from(tenths) / 10.0;
            let wire = SettingValue::MinVoltagePerCell(volts).to_wire();
            prop_assert_eq!(wire, tenths.to_le_bytes());
            prop_assert_eq!(
                decode_setting(CharSetting::MinVoltagePerCell, &wire),
                CharValue::Float(volts)
            );
        }
    }
}
