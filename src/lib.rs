// Allow holding locks across await points - we use parking_lot which is designed for this
#![allow(clippy::await_holding_lock)]
// Allow unusual byte groupings for UUIDs which have standard format
#![allow(clippy::unusual_byte_groupings)]

//! # pinecil-rust-ble
//!
//! A cross-platform Rust library for communicating with Pine64's
//! Pinecil V2 soldering irons (IronOS firmware) via Bluetooth Low Energy.
//!
//! The library translates the IronOS GATT surface into typed Rust:
//! every characteristic is cataloged in a static registry with its UUID,
//! its decoder and, for settings, its validated write encoding.
//!
//! ## Features
//!
//! - **Device Discovery**: Find advertising Pinecils by service UUID
//! - **Live Telemetry**: Read 14 telemetry fields in a single GATT read
//! - **Typed Settings**: Read and write every persisted setting with
//!   range clamping and fixed-point scaling handled for you
//! - **Device Identity**: Build version, serial number and device id,
//!   cached per connection
//! - **Lazy Connection**: Operations connect on demand and recover from
//!   lost links automatically
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use pinecil_rust_ble::{Pinecil, Result, SettingValue};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Scan for the first advertising Pinecil
//!     let Some(pinecil) = Pinecil::discover(Duration::from_secs(10)).await? else {
//!         println!("No Pinecil found");
//!         return Ok(());
//!     };
//!
//!     let info = pinecil.get_device_info().await?;
//!     println!("Found {} (IronOS {})", info.address, info.build.as_deref().unwrap_or("?"));
//!
//!     let live = pinecil.get_live_data().await?;
//!     println!("Tip: {}°C / {}°C set", live.live_temp, live.setpoint_temp);
//!
//!     // Out-of-range values are clamped, never rejected
//!     pinecil.write_setting(SettingValue::SetpointTemp(320)).await?;
//!     pinecil.save_settings().await?;
//!
//!     pinecil.disconnect().await
//! }
//! ```
//!
//! ## Platform Notes
//!
//! ### macOS
//! Requires Bluetooth permission. Add `NSBluetoothAlwaysUsageDescription`
//! to your Info.plist for bundled apps.
//!
//! ### Linux
//! Requires BlueZ. User may need to be in the `bluetooth` group.
//!
//! ### Windows
//! Requires Windows 10 or later with Bluetooth LE support.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod ble;
pub mod client;
pub mod data;
pub mod error;
pub mod protocol;

// Re-exports for convenience
pub use client::Pinecil;
pub use error::{Error, Result};

// Re-export commonly used types from submodules
pub use ble::{BleTransport, ConnectionState, Transport};
pub use data::{
    hash_language_code, DeviceInfoResponse, Language, LanguageCode, LiveDataResponse,
    OperatingMode, PowerSource, SettingsDataResponse,
};
pub use data::{
    AnimationSpeed, AutostartMode, BatteryType, LockingMode, LogoDuration, ScreenOrientation,
    ScrollSpeed, TempUnit, TipType, UsbPdMode,
};
pub use protocol::{CharBulk, CharLive, CharSetting, CharValue, Characteristic, SettingValue};
