//! GATT transport abstraction.
//!
//! The client drives all device I/O through the [`Transport`] trait so
//! protocol logic stays independent of the BLE backend. [`BleTransport`]
//! is the production implementation over a btleplug peripheral.

use std::collections::HashMap;

use async_trait::async_trait;
use btleplug::api::{
    Central, CentralEvent, Characteristic as GattCharacteristic, Peripheral as _, WriteType,
};
use btleplug::platform::{Adapter, Peripheral};
use futures::stream::StreamExt;
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::ble::uuids::is_pinecil_service;
use crate::error::{Error, Result};

/// Connection state of a device link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionState {
    /// Not connected.
    #[default]
    Disconnected,
    /// Connection attempt in progress.
    Connecting,
    /// Connected and ready for GATT operations.
    Connected,
}

impl ConnectionState {
    /// Check if connected.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Connected => write!(f, "Connected"),
        }
    }
}

/// Low-level GATT operations against one device.
///
/// Implementations surface link loss through the disconnect channel;
/// the client owns all reconnect policy.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// The device's BLE address.
    fn address(&self) -> String;

    /// The advertised device name, if known.
    fn name(&self) -> Option<String>;

    /// Subscribe to link-loss notifications.
    fn subscribe_disconnects(&self) -> broadcast::Receiver<()>;

    /// Whether the link is currently established.
    async fn is_connected(&self) -> bool;

    /// Establish the link and prepare it for GATT operations.
    async fn connect(&self) -> Result<()>;

    /// Tear down the link.
    async fn disconnect(&self) -> Result<()>;

    /// Read the raw payload of a characteristic.
    async fn read_characteristic(&self, uuid: Uuid) -> Result<Vec<u8>>;

    /// Write a raw payload to a characteristic.
    async fn write_characteristic(&self, uuid: Uuid, payload: &[u8]) -> Result<()>;
}

/// btleplug-backed transport for a single peripheral.
///
/// Characteristic handles are cached after service discovery so reads
/// and writes resolve by UUID without re-walking the GATT table.
pub struct BleTransport {
    peripheral: Peripheral,
    name: Option<String>,
    characteristics: RwLock<HashMap<Uuid, GattCharacteristic>>,
    disconnect_tx: broadcast::Sender<()>,
}

impl BleTransport {
    /// Wrap a discovered peripheral and start watching for link loss.
    pub async fn new(
        adapter: Adapter,
        peripheral: Peripheral,
        name: Option<String>,
    ) -> Result<Self> {
        let (disconnect_tx, _) = broadcast::channel(16);

        let mut events = adapter.events().await?;
        let watched = peripheral.id();
        let tx = disconnect_tx.clone();
        tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let CentralEvent::DeviceDisconnected(id) = event {
                    if id == watched {
                        debug!("Link lost: {:?}", id);
                        let _ = tx.send(());
                    }
                }
            }
        });

        Ok(Self {
            peripheral,
            name,
            characteristics: RwLock::new(HashMap::new()),
            disconnect_tx,
        })
    }

    fn characteristic(&self, uuid: Uuid) -> Result<GattCharacteristic> {
        self.characteristics
            .read()
            .get(&uuid)
            .cloned()
            .ok_or_else(|| Error::communication(format!("characteristic {uuid} not available")))
    }
}

#[async_trait]
impl Transport for BleTransport {
    fn address(&self) -> String {
        self.peripheral.address().to_string()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn subscribe_disconnects(&self) -> broadcast::Receiver<()> {
        self.disconnect_tx.subscribe()
    }

    async fn is_connected(&self) -> bool {
        self.peripheral.is_connected().await.unwrap_or(false)
    }

    async fn connect(&self) -> Result<()> {
        self.peripheral.connect().await?;
        self.peripheral.discover_services().await?;

        let mut cache = HashMap::new();
        for characteristic in self.peripheral.characteristics() {
            if is_pinecil_service(&characteristic.service_uuid) {
                cache.insert(characteristic.uuid, characteristic);
            }
        }
        info!(
            "Connected to {} ({} characteristics)",
            self.address(),
            cache.len()
        );
        *self.characteristics.write() = cache;

        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.characteristics.write().clear();
        self.peripheral.disconnect().await?;
        Ok(())
    }

    async fn read_characteristic(&self, uuid: Uuid) -> Result<Vec<u8>> {
        let characteristic = self.characteristic(uuid)?;
        let payload = self.peripheral.read(&characteristic).await?;
        trace!("Read {} bytes from {}", payload.len(), uuid);
        Ok(payload)
    }

    async fn write_characteristic(&self, uuid: Uuid, payload: &[u8]) -> Result<()> {
        let characteristic = self.characteristic(uuid)?;
        trace!("Writing {} bytes to {}", payload.len(), uuid);
        self.peripheral
            .write(&characteristic, payload, WriteType::WithResponse)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_state() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(!ConnectionState::Connecting.is_connected());
        assert!(!ConnectionState::Disconnected.is_connected());
        assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_connection_state_display() {
        assert_eq!(format!("{}", ConnectionState::Connected), "Connected");
        assert_eq!(format!("{}", ConnectionState::Disconnected), "Disconnected");
    }
}
