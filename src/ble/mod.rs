//! BLE communication layer.
//!
//! Device discovery, the GATT transport abstraction and the UUID table
//! for the IronOS custom services.

pub mod scanner;
pub mod transport;
pub mod uuids;

pub use scanner::discover;
pub use transport::{BleTransport, ConnectionState, Transport};
