//! The high-level Pinecil client.
//!
//! [`Pinecil`] layers the typed protocol on top of a [`Transport`]:
//! lazy connection with stale-link recovery, serialized GATT access,
//! decoded reads through the characteristic registry and validated
//! setting writes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::ble::transport::{BleTransport, ConnectionState, Transport};
use crate::data::device_info::DeviceInfoResponse;
use crate::data::live::LiveDataResponse;
use crate::data::settings::SettingsDataResponse;
use crate::error::{Error, Result};
use crate::protocol::registry::{
    lookup, CharBulk, CharSetting, CharValue, Characteristic, SettingValue,
};

/// Client for a single Pinecil V2 device.
///
/// Every GATT operation connects on demand: callers never connect
/// explicitly unless they want to front-load the link setup. A lost
/// link is detected through the transport's disconnect channel and the
/// next operation tears the stale link down before reconnecting.
/// Operations are serialized internally, so the client is cheap to
/// share across tasks.
pub struct Pinecil<T: Transport> {
    transport: Arc<T>,
    state: Arc<RwLock<ConnectionState>>,
    device_info: Arc<RwLock<DeviceInfoResponse>>,
    link_lost: Arc<AtomicBool>,
    op_lock: Mutex<()>,
}

impl<T: Transport> Pinecil<T> {
    /// Create a client over an existing transport.
    pub fn new(transport: T) -> Self {
        let transport = Arc::new(transport);
        let state = Arc::new(RwLock::new(ConnectionState::Disconnected));
        let device_info = Arc::new(RwLock::new(DeviceInfoResponse::new(
            transport.address(),
            transport.name(),
        )));
        let link_lost = Arc::new(AtomicBool::new(false));

        let mut disconnects = transport.subscribe_disconnects();
        {
            let state = state.clone();
            let device_info = device_info.clone();
            let link_lost = link_lost.clone();
            tokio::spawn(async move {
                loop {
                    match disconnects.recv().await {
                        Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                            warn!("Device link lost");
                            link_lost.store(true, Ordering::SeqCst);
                            *state.write() = ConnectionState::Disconnected;
                            device_info.write().is_synced = false;
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            });
        }

        Self {
            transport,
            state,
            device_info,
            link_lost,
            op_lock: Mutex::new(()),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        *self.state.read()
    }

    /// Check if the device link is established.
    pub fn is_connected(&self) -> bool {
        self.connection_state().is_connected()
    }

    /// Establish the device link now instead of on the first operation.
    pub async fn connect(&self) -> Result<()> {
        let _guard = self.op_lock.lock().await;
        self.ensure_connected().await
    }

    /// Tear down the device link.
    pub async fn disconnect(&self) -> Result<()> {
        let _guard = self.op_lock.lock().await;
        let result = self.transport.disconnect().await;
        *self.state.write() = ConnectionState::Disconnected;
        self.device_info.write().is_synced = false;
        result
    }

    /// Read one characteristic as a typed value.
    ///
    /// Characteristics the registry carries no decoder for return
    /// `Ok(None)` without touching the transport.
    pub async fn read(
        &self,
        characteristic: impl Into<Characteristic>,
    ) -> Result<Option<CharValue>> {
        let characteristic = characteristic.into();
        if lookup(characteristic).decode.is_none() {
            debug!("{characteristic:?} has no decoder, skipping read");
            return Ok(None);
        }

        let _guard = self.op_lock.lock().await;
        self.ensure_connected().await?;
        self.read_value(characteristic).await
    }

    /// Write a validated setting value to a specific characteristic.
    ///
    /// Rejects non-setting characteristics and values addressed to a
    /// different setting before any transport call is made.
    pub async fn write(
        &self,
        characteristic: impl Into<Characteristic>,
        value: SettingValue,
    ) -> Result<()> {
        let characteristic = characteristic.into();
        let Characteristic::Setting(setting) = characteristic else {
            return Err(Error::invalid_operation(format!(
                "{characteristic:?} is read-only"
            )));
        };
        if value.setting() != setting {
            return Err(Error::invalid_operation(format!(
                "value for {:?} written to {setting:?}",
                value.setting()
            )));
        }
        self.write_setting(value).await
    }

    /// Write a validated setting value to its own characteristic.
    pub async fn write_setting(&self, value: SettingValue) -> Result<()> {
        let payload = value.to_wire();
        let uuid = lookup(value.setting().into()).uuid;

        let _guard = self.op_lock.lock().await;
        self.ensure_connected().await?;
        self.transport.write_characteristic(uuid, &payload).await?;
        debug!("Wrote {:?}", value.setting());
        Ok(())
    }

    /// Persist the current settings to flash.
    pub async fn save_settings(&self) -> Result<()> {
        self.write_setting(SettingValue::SettingsSave).await
    }

    /// Reset all settings to factory defaults.
    pub async fn factory_reset(&self) -> Result<()> {
        self.write_setting(SettingValue::SettingsReset).await
    }

    /// Get device identity, fetching it at most once per connection.
    ///
    /// Build version, serial number and device id are read over GATT on
    /// the first call and served from cache afterwards. The cache is
    /// invalidated by any disconnect.
    pub async fn get_device_info(&self) -> Result<DeviceInfoResponse> {
        {
            let info = self.device_info.read();
            if info.is_synced {
                return Ok(info.clone());
            }
        }

        let _guard = self.op_lock.lock().await;
        self.ensure_connected().await?;

        let build = as_text(self.read_value(CharBulk::Build.into()).await?);
        let device_sn = as_text(self.read_value(CharBulk::DeviceSn.into()).await?);
        let device_id = as_text(self.read_value(CharBulk::DeviceId.into()).await?);

        let mut info = self.device_info.write();
        info.build = build;
        info.device_sn = device_sn;
        info.device_id = device_id;
        info.is_synced = true;
        info!("Synced device info for {}", info.address);
        Ok(info.clone())
    }

    /// Read the full live telemetry block in a single GATT read.
    pub async fn get_live_data(&self) -> Result<LiveDataResponse> {
        let _guard = self.op_lock.lock().await;
        self.ensure_connected().await?;

        match self.read_value(CharBulk::LiveData.into()).await? {
            Some(CharValue::LiveData(live)) => Ok(live),
            other => Err(Error::decode(format!(
                "unexpected live data value: {other:?}"
            ))),
        }
    }

    /// Read a selection of settings, one GATT read per setting.
    ///
    /// An empty selection reads every known setting. Only the requested
    /// fields are populated in the returned record.
    pub async fn get_settings(&self, settings: &[CharSetting]) -> Result<SettingsDataResponse> {
        let selected: &[CharSetting] = if settings.is_empty() {
            &CharSetting::ALL
        } else {
            settings
        };

        let _guard = self.op_lock.lock().await;
        self.ensure_connected().await?;

        let mut response = SettingsDataResponse::default();
        for &setting in selected {
            if let Some(value) = self.read_value(setting.into()).await? {
                response.apply(setting, value);
            }
        }
        Ok(response)
    }

    /// Bring the link up, tearing down a stale one first.
    ///
    /// Callers must hold `op_lock`.
    async fn ensure_connected(&self) -> Result<()> {
        if self.link_lost.swap(false, Ordering::SeqCst) {
            debug!("Tearing down stale link before reconnect");
            let _ = self.transport.disconnect().await;
            *self.state.write() = ConnectionState::Disconnected;
            self.device_info.write().is_synced = false;
        }

        if self.connection_state().is_connected() {
            return Ok(());
        }

        *self.state.write() = ConnectionState::Connecting;
        match self.transport.connect().await {
            Ok(()) => {
                *self.state.write() = ConnectionState::Connected;
                Ok(())
            }
            Err(error) => {
                *self.state.write() = ConnectionState::Disconnected;
                Err(error)
            }
        }
    }

    /// Read and decode without locking. Callers must hold `op_lock`.
    async fn read_value(&self, characteristic: Characteristic) -> Result<Option<CharValue>> {
        let descriptor = lookup(characteristic);
        let Some(decode) = descriptor.decode else {
            return Ok(None);
        };
        let payload = self.transport.read_characteristic(descriptor.uuid).await?;
        decode(&payload).map(Some)
    }
}

impl Pinecil<BleTransport> {
    /// Scan for the first advertising Pinecil and build a client for it.
    ///
    /// Returns `Ok(None)` when the timeout elapses without a match.
    pub async fn discover(timeout: Duration) -> Result<Option<Self>> {
        Ok(crate::ble::scanner::discover(timeout).await?.map(Self::new))
    }
}

fn as_text(value: Option<CharValue>) -> Option<String> {
    match value {
        Some(CharValue::Text(text)) => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ble::uuids::*;
    use crate::data::live::{OperatingMode, PowerSource};
    use crate::protocol::registry::CharLive;
    use crate::data::settings::TempUnit;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use uuid::Uuid;

    struct FakeTransport {
        payloads: parking_lot::Mutex<HashMap<Uuid, Vec<u8>>>,
        written: parking_lot::Mutex<Vec<(Uuid, Vec<u8>)>>,
        connected: AtomicBool,
        reads: AtomicUsize,
        connects: AtomicUsize,
        fail_reads: AtomicBool,
        disconnect_tx: broadcast::Sender<()>,
    }

    impl FakeTransport {
        fn new() -> Self {
            let (disconnect_tx, _) = broadcast::channel(16);
            Self {
                payloads: parking_lot::Mutex::new(HashMap::new()),
                written: parking_lot::Mutex::new(Vec::new()),
                connected: AtomicBool::new(false),
                reads: AtomicUsize::new(0),
                connects: AtomicUsize::new(0),
                fail_reads: AtomicBool::new(false),
                disconnect_tx,
            }
        }

        fn stub(&self, uuid: Uuid, payload: Vec<u8>) {
            self.payloads.lock().insert(uuid, payload);
        }

        fn drop_link(&self) {
            self.connected.store(false, Ordering::SeqCst);
            let _ = self.disconnect_tx.send(());
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        fn address(&self) -> String {
            "AA:BB:CC:DD:EE:FF".to_string()
        }

        fn name(&self) -> Option<String> {
            Some("Pinecil-ABCDEF".to_string())
        }

        fn subscribe_disconnects(&self) -> broadcast::Receiver<()> {
            self.disconnect_tx.subscribe()
        }

        async fn is_connected(&self) -> bool {
            self.connected.load(Ordering::SeqCst)
        }

        async fn connect(&self) -> Result<()> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            self.connected.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn disconnect(&self) -> Result<()> {
            self.connected.store(false, Ordering::SeqCst);
            Ok(())
        }

        async fn read_characteristic(&self, uuid: Uuid) -> Result<Vec<u8>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(Error::communication("GATT read failed"));
            }
            self.payloads
                .lock()
                .get(&uuid)
                .cloned()
                .ok_or_else(|| Error::communication(format!("no payload stubbed for {uuid}")))
        }

        async fn write_characteristic(&self, uuid: Uuid, payload: &[u8]) -> Result<()> {
            self.written.lock().push((uuid, payload.to_vec()));
            Ok(())
        }
    }

    fn live_payload(words: [u32; 14]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    fn client() -> Pinecil<FakeTransport> {
        Pinecil::new(FakeTransport::new())
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_read_without_decoder_skips_transport() {
        let pinecil = client();
        let value = pinecil.read(CharBulk::AccelName).await.unwrap();

        assert_eq!(value, None);
        assert_eq!(pinecil.transport().reads.load(Ordering::SeqCst), 0);
        assert_eq!(pinecil.transport().connects.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_write_to_read_only_characteristic_is_rejected() {
        let pinecil = client();
        let result = pinecil
            .write(CharLive::LiveTemp, SettingValue::SetpointTemp(300))
            .await;

        assert!(matches!(result, Err(Error::InvalidOperation { .. })));
        assert!(pinecil.transport().written.lock().is_empty());
        assert_eq!(pinecil.transport().connects.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_write_with_mismatched_value_is_rejected() {
        let pinecil = client();
        let result = pinecil
            .write(CharSetting::SleepTemp, SettingValue::SetpointTemp(300))
            .await;

        assert!(matches!(result, Err(Error::InvalidOperation { .. })));
        assert!(pinecil.transport().written.lock().is_empty());
    }

    #[tokio::test]
    async fn test_write_setting_clamps_and_targets_uuid() {
        let pinecil = client();
        pinecil
            .write_setting(SettingValue::SetpointTemp(900))
            .await
            .unwrap();

        let written = pinecil.transport().written.lock().clone();
        assert_eq!(
            written,
            vec![(SETTINGS_SETPOINT_TEMP_UUID, 450u16.to_le_bytes().to_vec())]
        );
        assert!(pinecil.is_connected());
    }

    #[tokio::test]
    async fn test_get_live_data() {
        let pinecil = client();
        pinecil.transport().stub(
            BULK_LIVE_DATA_UUID,
            live_payload([241, 240, 201, 299, 255, 3, 62, 581, 194, 440, 5726, 0, 1, 25]),
        );

        let live = pinecil.get_live_data().await.unwrap();
        assert_eq!(live.live_temp, 241);
        assert_eq!(live.dc_voltage, 20.1);
        assert_eq!(live.pwm_level, 100);
        assert_eq!(live.power_src, PowerSource::Pd);
        assert_eq!(live.operating_mode, OperatingMode::Soldering);
        assert_eq!(pinecil.transport().reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_device_info_cached_until_link_loss() {
        let pinecil = client();
        pinecil
            .transport()
            .stub(BULK_BUILD_UUID, b"2.22".to_vec());
        pinecil
            .transport()
            .stub(BULK_DEVICE_SN_UUID, 0x1234_5678u64.to_le_bytes().to_vec());
        pinecil
            .transport()
            .stub(BULK_DEVICE_ID_UUID, 0xCAFEu32.to_le_bytes().to_vec());

        let info = pinecil.get_device_info().await.unwrap();
        assert_eq!(info.build.as_deref(), Some("2.22"));
        assert_eq!(info.device_sn.as_deref(), Some("0000000012345678"));
        assert_eq!(info.device_id.as_deref(), Some("cafe"));
        assert!(info.is_synced);

        // Second call is served from cache.
        let again = pinecil.get_device_info().await.unwrap();
        assert_eq!(again, info);
        assert_eq!(pinecil.transport().reads.load(Ordering::SeqCst), 3);

        // Link loss invalidates the cache and forces a reconnect.
        pinecil.transport().drop_link();
        settle().await;
        assert_eq!(pinecil.connection_state(), ConnectionState::Disconnected);

        let resynced = pinecil.get_device_info().await.unwrap();
        assert!(resynced.is_synced);
        assert_eq!(pinecil.transport().reads.load(Ordering::SeqCst), 6);
        assert_eq!(pinecil.transport().connects.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_get_settings_subset_populates_only_requested() {
        let pinecil = client();
        pinecil
            .transport()
            .stub(SETTINGS_SETPOINT_TEMP_UUID, 300u16.to_le_bytes().to_vec());
        pinecil
            .transport()
            .stub(SETTINGS_TEMP_UNIT_UUID, 0u16.to_le_bytes().to_vec());

        let settings = pinecil
            .get_settings(&[CharSetting::SetpointTemp, CharSetting::TempUnit])
            .await
            .unwrap();

        assert_eq!(settings.setpoint_temp, Some(300));
        assert_eq!(settings.temp_unit, Some(TempUnit::Celsius));
        assert_eq!(settings.sleep_temp, None);
        assert_eq!(pinecil.transport().reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_communication() {
        let pinecil = client();
        pinecil.transport().fail_reads.store(true, Ordering::SeqCst);

        let result = pinecil.get_live_data().await;
        assert!(matches!(result, Err(Error::Communication { .. })));
    }

    #[tokio::test]
    async fn test_explicit_connect_and_disconnect() {
        let pinecil = client();
        assert_eq!(pinecil.connection_state(), ConnectionState::Disconnected);

        pinecil.connect().await.unwrap();
        assert!(pinecil.is_connected());
        assert_eq!(pinecil.transport().connects.load(Ordering::SeqCst), 1);

        // Connecting again is a no-op.
        pinecil.connect().await.unwrap();
        assert_eq!(pinecil.transport().connects.load(Ordering::SeqCst), 1);

        pinecil.disconnect().await.unwrap();
        assert_eq!(pinecil.connection_state(), ConnectionState::Disconnected);
        assert!(!pinecil.transport().is_connected().await);
    }
}
