//! Settings read/write example
//!
//! Run with: cargo run --example adjust_settings

use std::time::Duration;

use pinecil_rust_ble::{CharSetting, Pinecil, Result, SettingValue, TempUnit};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("Scanning for a Pinecil...");

    let Some(pinecil) = Pinecil::discover(Duration::from_secs(10)).await? else {
        println!("No Pinecil found. Is BLE enabled on the iron?");
        return Ok(());
    };

    // Read a subset of settings before changing anything
    let settings = pinecil
        .get_settings(&[
            CharSetting::SetpointTemp,
            CharSetting::SleepTemp,
            CharSetting::TempUnit,
            CharSetting::UiLanguage,
        ])
        .await?;

    println!("Current settings:");
    println!("  Setpoint:   {:?} °C", settings.setpoint_temp);
    println!("  Sleep temp: {:?} °C", settings.sleep_temp);
    println!("  Unit:       {:?}", settings.temp_unit);
    println!("  Language:   {:?}", settings.ui_language);

    // Values out of range are clamped by the library, so this writes 450
    pinecil.write_setting(SettingValue::SetpointTemp(900)).await?;
    pinecil
        .write_setting(SettingValue::TempUnit(TempUnit::Celsius))
        .await?;

    // Persist across power cycles
    pinecil.save_settings().await?;
    println!("Settings updated and saved.");

    pinecil.disconnect().await
}
