//! Error types for the pinecil-rust-ble crate.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A failure in the BLE transport (link loss, timeout, GATT error).
    ///
    /// Every transport failure is collapsed into this single variant; the
    /// original cause is carried as the source. Callers that need to
    /// distinguish a timeout from a rejected operation must inspect the
    /// wrapped cause. No retry is attempted at this layer.
    #[error("communication error: {source}")]
    Communication {
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Bluetooth is not available or is disabled on this system.
    #[error("Bluetooth not available or disabled")]
    BluetoothUnavailable,

    /// A malformed payload was received from the device.
    #[error("decode error: {context}")]
    Decode {
        /// Description of what was invalid about the payload.
        context: String,
    },

    /// A write was attempted on a characteristic that is not writable,
    /// or with a value that does not belong to the addressed setting.
    ///
    /// This is raised synchronously, before any transport call is made.
    #[error("invalid operation: {context}")]
    InvalidOperation {
        /// Description of the rejected operation.
        context: String,
    },
}

impl Error {
    /// Wrap any transport failure into the unified communication error.
    pub fn communication<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Communication {
            source: source.into(),
        }
    }

    pub(crate) fn decode(context: impl Into<String>) -> Self {
        Self::Decode {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_operation(context: impl Into<String>) -> Self {
        Self::InvalidOperation {
            context: context.into(),
        }
    }
}

impl From<btleplug::Error> for Error {
    fn from(source: btleplug::Error) -> Self {
        Self::communication(source)
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_communication_wraps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        let error = Error::communication(cause);

        assert!(matches!(error, Error::Communication { .. }));
        assert!(error.to_string().contains("read timed out"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_decode_message() {
        let error = Error::decode("payload too short");
        assert_eq!(error.to_string(), "decode error: payload too short");
    }

    #[test]
    fn test_invalid_operation_message() {
        let error = Error::invalid_operation("LIVE_TEMP is read-only");
        assert!(error.to_string().starts_with("invalid operation"));
    }
}
