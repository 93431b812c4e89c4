//! BLE Service and Characteristic UUIDs.
//!
//! Contains all UUID constants published by the IronOS firmware on
//! Pinecil V2 devices. The firmware exposes three custom services:
//! bulk (aggregate device/session info), live (per-field telemetry)
//! and settings (persisted configuration).

use uuid::Uuid;

// Bulk Service (aggregate info, IronOS custom)
/// Bulk service UUID. Also present in advertisements, used for discovery.
pub const BULK_SERVICE_UUID: Uuid = Uuid::from_u128(0x9eae1000_9d0d_48c5_aa55_33e27f9bc533);
/// Aggregate live data block characteristic UUID (14 x uint32, one read).
pub const BULK_LIVE_DATA_UUID: Uuid = Uuid::from_u128(0x9eae1001_9d0d_48c5_aa55_33e27f9bc533);
/// Accelerometer name characteristic UUID.
pub const BULK_ACCEL_NAME_UUID: Uuid = Uuid::from_u128(0x9eae1002_9d0d_48c5_aa55_33e27f9bc533);
/// Firmware build version characteristic UUID (UTF-8 string).
pub const BULK_BUILD_UUID: Uuid = Uuid::from_u128(0x9eae1003_9d0d_48c5_aa55_33e27f9bc533);
/// Device serial number characteristic UUID (uint64).
pub const BULK_DEVICE_SN_UUID: Uuid = Uuid::from_u128(0x9eae1004_9d0d_48c5_aa55_33e27f9bc533);
/// Device identifier characteristic UUID (uint32).
pub const BULK_DEVICE_ID_UUID: Uuid = Uuid::from_u128(0x9eae1005_9d0d_48c5_aa55_33e27f9bc533);

// Live Service (read-only telemetry, IronOS custom)
/// Live telemetry service UUID.
pub const LIVE_SERVICE_UUID: Uuid = Uuid::from_u128(0xd85ef000_168e_4a71_aa55_33e27f9bc533);
/// Current tip temperature characteristic UUID.
pub const LIVE_LIVE_TEMP_UUID: Uuid = Uuid::from_u128(0xd85ef001_168e_4a71_aa55_33e27f9bc533);
/// Current setpoint temperature characteristic UUID.
pub const LIVE_SETPOINT_TEMP_UUID: Uuid = Uuid::from_u128(0xd85ef002_168e_4a71_aa55_33e27f9bc533);
/// DC input voltage characteristic UUID (tenths of a volt).
pub const LIVE_DC_VOLTAGE_UUID: Uuid = Uuid::from_u128(0xd85ef003_168e_4a71_aa55_33e27f9bc533);
/// Handle temperature characteristic UUID (tenths of a degree).
pub const LIVE_HANDLE_TEMP_UUID: Uuid = Uuid::from_u128(0xd85ef004_168e_4a71_aa55_33e27f9bc533);
/// PWM level characteristic UUID (0-255 raw).
pub const LIVE_PWM_LEVEL_UUID: Uuid = Uuid::from_u128(0xd85ef005_168e_4a71_aa55_33e27f9bc533);
/// Power source characteristic UUID.
pub const LIVE_POWER_SRC_UUID: Uuid = Uuid::from_u128(0xd85ef006_168e_4a71_aa55_33e27f9bc533);
/// Tip resistance characteristic UUID (tenths of an ohm).
pub const LIVE_TIP_RESISTANCE_UUID: Uuid = Uuid::from_u128(0xd85ef007_168e_4a71_aa55_33e27f9bc533);
/// Uptime characteristic UUID (deciseconds).
pub const LIVE_UPTIME_UUID: Uuid = Uuid::from_u128(0xd85ef008_168e_4a71_aa55_33e27f9bc533);
/// Time since last movement characteristic UUID (deciseconds).
pub const LIVE_MOVEMENT_TIME_UUID: Uuid = Uuid::from_u128(0xd85ef009_168e_4a71_aa55_33e27f9bc533);
/// Maximum attainable tip temperature characteristic UUID.
pub const LIVE_MAX_TIP_TEMP_ABILITY_UUID: Uuid =
    Uuid::from_u128(0xd85ef00a_168e_4a71_aa55_33e27f9bc533);
/// Raw tip voltage characteristic UUID (mV).
pub const LIVE_TIP_VOLTAGE_UUID: Uuid = Uuid::from_u128(0xd85ef00b_168e_4a71_aa55_33e27f9bc533);
/// Hall effect sensor characteristic UUID.
pub const LIVE_HALL_SENSOR_UUID: Uuid = Uuid::from_u128(0xd85ef00c_168e_4a71_aa55_33e27f9bc533);
/// Operating mode characteristic UUID.
pub const LIVE_OPERATING_MODE_UUID: Uuid = Uuid::from_u128(0xd85ef00d_168e_4a71_aa55_33e27f9bc533);
/// Estimated power characteristic UUID.
pub const LIVE_ESTIMATED_POWER_UUID: Uuid = Uuid::from_u128(0xd85ef00e_168e_4a71_aa55_33e27f9bc533);

// Settings Service (read/write persisted configuration, IronOS custom)
/// Settings service UUID.
pub const SETTINGS_SERVICE_UUID: Uuid = Uuid::from_u128(0xf6d80000_5a10_4eba_aa55_33e27f9bc533);
/// Save-settings-to-flash trigger characteristic UUID.
pub const SETTINGS_SAVE_UUID: Uuid = Uuid::from_u128(0xf6d7ffff_5a10_4eba_aa55_33e27f9bc533);
/// Factory-reset trigger characteristic UUID.
pub const SETTINGS_RESET_UUID: Uuid = Uuid::from_u128(0xf6d7fffe_5a10_4eba_aa55_33e27f9bc533);
/// Setpoint temperature setting UUID.
pub const SETTINGS_SETPOINT_TEMP_UUID: Uuid =
    Uuid::from_u128(0xf6d70000_5a10_4eba_aa55_33e27f9bc533);
/// Sleep temperature setting UUID.
pub const SETTINGS_SLEEP_TEMP_UUID: Uuid = Uuid::from_u128(0xf6d70001_5a10_4eba_aa55_33e27f9bc533);
/// Sleep timeout setting UUID.
pub const SETTINGS_SLEEP_TIMEOUT_UUID: Uuid =
    Uuid::from_u128(0xf6d70002_5a10_4eba_aa55_33e27f9bc533);
/// Minimum battery cell count setting UUID.
pub const SETTINGS_MIN_DC_VOLTAGE_CELLS_UUID: Uuid =
    Uuid::from_u128(0xf6d70003_5a10_4eba_aa55_33e27f9bc533);
/// Minimum voltage per cell setting UUID (tenths of a volt).
pub const SETTINGS_MIN_VOLTAGE_PER_CELL_UUID: Uuid =
    Uuid::from_u128(0xf6d70004_5a10_4eba_aa55_33e27f9bc533);
/// Quick Charge ideal voltage setting UUID (tenths of a volt).
pub const SETTINGS_QC_IDEAL_VOLTAGE_UUID: Uuid =
    Uuid::from_u128(0xf6d70005_5a10_4eba_aa55_33e27f9bc533);
/// Screen orientation setting UUID.
pub const SETTINGS_ORIENTATION_MODE_UUID: Uuid =
    Uuid::from_u128(0xf6d70006_5a10_4eba_aa55_33e27f9bc533);
/// Motion sensitivity setting UUID.
pub const SETTINGS_ACCEL_SENSITIVITY_UUID: Uuid =
    Uuid::from_u128(0xf6d70007_5a10_4eba_aa55_33e27f9bc533);
/// Animation loop setting UUID.
pub const SETTINGS_ANIMATION_LOOP_UUID: Uuid =
    Uuid::from_u128(0xf6d70008_5a10_4eba_aa55_33e27f9bc533);
/// Animation speed setting UUID.
pub const SETTINGS_ANIMATION_SPEED_UUID: Uuid =
    Uuid::from_u128(0xf6d70009_5a10_4eba_aa55_33e27f9bc533);
/// Autostart mode setting UUID.
pub const SETTINGS_AUTOSTART_MODE_UUID: Uuid =
    Uuid::from_u128(0xf6d7000a_5a10_4eba_aa55_33e27f9bc533);
/// Shutdown time setting UUID.
pub const SETTINGS_SHUTDOWN_TIME_UUID: Uuid =
    Uuid::from_u128(0xf6d7000b_5a10_4eba_aa55_33e27f9bc533);
/// Cooldown blink setting UUID.
pub const SETTINGS_COOLING_TEMP_BLINK_UUID: Uuid =
    Uuid::from_u128(0xf6d7000c_5a10_4eba_aa55_33e27f9bc533);
/// Detailed idle screen setting UUID.
pub const SETTINGS_IDLE_SCREEN_DETAILS_UUID: Uuid =
    Uuid::from_u128(0xf6d7000d_5a10_4eba_aa55_33e27f9bc533);
/// Detailed soldering screen setting UUID.
pub const SETTINGS_SOLDER_SCREEN_DETAILS_UUID: Uuid =
    Uuid::from_u128(0xf6d7000e_5a10_4eba_aa55_33e27f9bc533);
/// Temperature unit setting UUID.
pub const SETTINGS_TEMP_UNIT_UUID: Uuid = Uuid::from_u128(0xf6d7000f_5a10_4eba_aa55_33e27f9bc533);
/// Description scroll speed setting UUID.
pub const SETTINGS_DESC_SCROLL_SPEED_UUID: Uuid =
    Uuid::from_u128(0xf6d70010_5a10_4eba_aa55_33e27f9bc533);
/// Button locking mode setting UUID.
pub const SETTINGS_LOCKING_MODE_UUID: Uuid =
    Uuid::from_u128(0xf6d70011_5a10_4eba_aa55_33e27f9bc533);
/// Keep-awake pulse power setting UUID.
pub const SETTINGS_KEEP_AWAKE_PULSE_UUID: Uuid =
    Uuid::from_u128(0xf6d70012_5a10_4eba_aa55_33e27f9bc533);
/// Keep-awake pulse wait setting UUID.
pub const SETTINGS_KEEP_AWAKE_PULSE_WAIT_UUID: Uuid =
    Uuid::from_u128(0xf6d70013_5a10_4eba_aa55_33e27f9bc533);
/// Keep-awake pulse duration setting UUID.
pub const SETTINGS_KEEP_AWAKE_PULSE_DURATION_UUID: Uuid =
    Uuid::from_u128(0xf6d70014_5a10_4eba_aa55_33e27f9bc533);
/// Voltage divider calibration setting UUID.
pub const SETTINGS_VOLTAGE_DIV_UUID: Uuid = Uuid::from_u128(0xf6d70015_5a10_4eba_aa55_33e27f9bc533);
/// Boost temperature setting UUID.
pub const SETTINGS_BOOST_TEMP_UUID: Uuid = Uuid::from_u128(0xf6d70016_5a10_4eba_aa55_33e27f9bc533);
/// Calibration offset setting UUID.
pub const SETTINGS_CALIBRATION_OFFSET_UUID: Uuid =
    Uuid::from_u128(0xf6d70017_5a10_4eba_aa55_33e27f9bc533);
/// Power limit setting UUID.
pub const SETTINGS_POWER_LIMIT_UUID: Uuid = Uuid::from_u128(0xf6d70018_5a10_4eba_aa55_33e27f9bc533);
/// Invert buttons setting UUID.
pub const SETTINGS_INVERT_BUTTONS_UUID: Uuid =
    Uuid::from_u128(0xf6d70019_5a10_4eba_aa55_33e27f9bc533);
/// Long-press temperature increment setting UUID.
pub const SETTINGS_TEMP_INCREMENT_LONG_UUID: Uuid =
    Uuid::from_u128(0xf6d7001a_5a10_4eba_aa55_33e27f9bc533);
/// Short-press temperature increment setting UUID.
pub const SETTINGS_TEMP_INCREMENT_SHORT_UUID: Uuid =
    Uuid::from_u128(0xf6d7001b_5a10_4eba_aa55_33e27f9bc533);
/// Hall effect sensitivity setting UUID.
pub const SETTINGS_HALL_SENSITIVITY_UUID: Uuid =
    Uuid::from_u128(0xf6d7001c_5a10_4eba_aa55_33e27f9bc533);
/// Motion warning counter setting UUID.
pub const SETTINGS_ACCEL_WARN_COUNTER_UUID: Uuid =
    Uuid::from_u128(0xf6d7001d_5a10_4eba_aa55_33e27f9bc533);
/// USB-PD warning counter setting UUID.
pub const SETTINGS_PD_WARN_COUNTER_UUID: Uuid =
    Uuid::from_u128(0xf6d7001e_5a10_4eba_aa55_33e27f9bc533);
/// UI language setting UUID (16-bit language hash).
pub const SETTINGS_UI_LANGUAGE_UUID: Uuid = Uuid::from_u128(0xf6d7001f_5a10_4eba_aa55_33e27f9bc533);
/// USB-PD negotiation timeout setting UUID.
pub const SETTINGS_PD_NEGOTIATION_TIMEOUT_UUID: Uuid =
    Uuid::from_u128(0xf6d70020_5a10_4eba_aa55_33e27f9bc533);
/// Display invert setting UUID.
pub const SETTINGS_DISPLAY_INVERT_UUID: Uuid =
    Uuid::from_u128(0xf6d70021_5a10_4eba_aa55_33e27f9bc533);
/// Display brightness setting UUID (wire range 1-101, steps of 25).
pub const SETTINGS_DISPLAY_BRIGHTNESS_UUID: Uuid =
    Uuid::from_u128(0xf6d70022_5a10_4eba_aa55_33e27f9bc533);
/// Boot logo duration setting UUID.
pub const SETTINGS_LOGO_DURATION_UUID: Uuid =
    Uuid::from_u128(0xf6d70023_5a10_4eba_aa55_33e27f9bc533);
/// Cold junction calibration trigger setting UUID.
pub const SETTINGS_CALIBRATE_CJC_UUID: Uuid =
    Uuid::from_u128(0xf6d70024_5a10_4eba_aa55_33e27f9bc533);
/// BLE enabled setting UUID.
pub const SETTINGS_BLE_ENABLED_UUID: Uuid = Uuid::from_u128(0xf6d70025_5a10_4eba_aa55_33e27f9bc533);
/// USB-PD mode setting UUID.
pub const SETTINGS_USB_PD_MODE_UUID: Uuid = Uuid::from_u128(0xf6d70026_5a10_4eba_aa55_33e27f9bc533);

// Added in IronOS 2.23
/// Hall effect sleep time setting UUID.
pub const SETTINGS_HALL_SLEEP_TIME_UUID: Uuid =
    Uuid::from_u128(0xf6d70035_5a10_4eba_aa55_33e27f9bc533);
/// Soldering tip type setting UUID.
pub const SETTINGS_TIP_TYPE_UUID: Uuid = Uuid::from_u128(0xf6d70036_5a10_4eba_aa55_33e27f9bc533);

/// Check if a service UUID is one of the Pinecil custom services.
pub fn is_pinecil_service(uuid: &Uuid) -> bool {
    *uuid == BULK_SERVICE_UUID || *uuid == LIVE_SERVICE_UUID || *uuid == SETTINGS_SERVICE_UUID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_format() {
        let bulk = BULK_SERVICE_UUID.to_string();
        assert!(bulk.starts_with("9eae1000"));

        let live = LIVE_SERVICE_UUID.to_string();
        assert!(live.starts_with("d85ef000"));

        let settings = SETTINGS_SERVICE_UUID.to_string();
        assert!(settings.starts_with("f6d80000"));
    }

    #[test]
    fn test_is_pinecil_service() {
        assert!(is_pinecil_service(&BULK_SERVICE_UUID));
        assert!(is_pinecil_service(&LIVE_SERVICE_UUID));
        assert!(is_pinecil_service(&SETTINGS_SERVICE_UUID));
        assert!(!is_pinecil_service(&BULK_LIVE_DATA_UUID));
    }

    #[test]
    fn test_characteristics_share_service_suffix() {
        // All IronOS characteristics end with the same vendor suffix.
        for uuid in [
            BULK_LIVE_DATA_UUID,
            LIVE_LIVE_TEMP_UUID,
            SETTINGS_SETPOINT_TEMP_UUID,
            SETTINGS_TIP_TYPE_UUID,
        ] {
            assert!(uuid.to_string().ends_with("33e27f9bc533"));
        }
    }
}
