//! Data structures for device data.
//!
//! This module contains the core data types: live telemetry, setting
//! value enums, the aggregated settings record, device identity and the
//! UI language table.

pub mod device_info;
pub mod language;
pub mod live;
pub mod settings;

pub use device_info::DeviceInfoResponse;
pub use language::{hash_language_code, Language, LanguageCode};
pub use live::{LiveDataResponse, OperatingMode, PowerSource};
pub use settings::{
    AnimationSpeed, AutostartMode, BatteryType, LockingMode, LogoDuration, ScreenOrientation,
    ScrollSpeed, SettingsDataResponse, TempUnit, TipType, UsbPdMode,
};
