//! BLE scanning functionality.
//!
//! Discovers Pinecil V2 devices by the bulk service UUID they carry in
//! their advertisements.

use std::time::Duration;

use btleplug::api::{Central, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager, Peripheral};
use tracing::{debug, info};

use crate::ble::transport::BleTransport;
use crate::ble::uuids::BULK_SERVICE_UUID;
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Scan for the first advertising Pinecil and wrap it in a transport.
///
/// Returns `Ok(None)` when the timeout elapses without a match. The
/// first available Bluetooth adapter is used.
///
/// # Errors
///
/// Returns [`Error::BluetoothUnavailable`] when no adapter is present.
pub async fn discover(timeout: Duration) -> Result<Option<BleTransport>> {
    let manager = Manager::new()
        .await
        .map_err(|_e| Error::BluetoothUnavailable)?;

    let adapter = manager
        .adapters()
        .await?
        .into_iter()
        .next()
        .ok_or(Error::BluetoothUnavailable)?;

    info!(
        "Scanning for Pinecil on adapter: {:?}",
        adapter.adapter_info().await.ok()
    );

    let filter = ScanFilter {
        services: vec![BULK_SERVICE_UUID],
    };
    adapter.start_scan(filter).await?;

    let deadline = tokio::time::Instant::now() + timeout;
    let mut found: Option<(Peripheral, Option<String>)> = None;

    while found.is_none() && tokio::time::Instant::now() < deadline {
        for peripheral in adapter.peripherals().await? {
            let Ok(Some(properties)) = peripheral.properties().await else {
                continue;
            };
            if properties.services.contains(&BULK_SERVICE_UUID) {
                debug!(
                    "Found Pinecil: {} ({:?})",
                    peripheral.address(),
                    properties.local_name
                );
                found = Some((peripheral, properties.local_name));
                break;
            }
        }
        if found.is_none() {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    // Best effort; discovery already succeeded or timed out.
    let _ = adapter.stop_scan().await;

    match found {
        Some((peripheral, name)) => Ok(Some(BleTransport::new(adapter, peripheral, name).await?)),
        None => {
            debug!("Scan timed out after {timeout:?}");
            Ok(None)
        }
    }
}
