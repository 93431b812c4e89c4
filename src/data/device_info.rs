//! Device identity data.

/// Information about a Pinecil device.
///
/// The address (and usually the advertised name) are known as soon as the
/// device is discovered. Build version, serial number and device id are
/// populated by an explicit sync over GATT; `is_synced` gates re-fetching.
/// The record is cached for the lifetime of a connection and invalidated
/// on disconnect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceInfoResponse {
    /// BLE address of the device.
    pub address: String,
    /// Advertised device name, if known.
    pub name: Option<String>,
    /// IronOS build version string, e.g. "2.22".
    pub build: Option<String>,
    /// Serial number as a zero-padded hex string.
    pub device_sn: Option<String>,
    /// Device identifier as a hex string.
    pub device_id: Option<String>,
    /// Whether build/serial/id have been fetched for this connection.
    pub is_synced: bool,
}

impl DeviceInfoResponse {
    /// Create a record for a discovered but not yet synced device.
    pub fn new(address: String, name: Option<String>) -> Self {
        Self {
            address,
            name,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unsynced() {
        let info = DeviceInfoResponse::new(
            "AA:BB:CC:DD:EE:FF".to_string(),
            Some("Pinecil-ABCDEF".to_string()),
        );
        assert_eq!(info.address, "AA:BB:CC:DD:EE:FF");
        assert!(!info.is_synced);
        assert!(info.build.is_none());
        assert!(info.device_sn.is_none());
    }
}
