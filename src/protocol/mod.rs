//! Protocol layer: wire codec and the characteristic registry.

pub mod codec;
pub mod registry;

pub use registry::{CharBulk, CharLive, CharSetting, CharValue, Characteristic, SettingValue};
