use std::time::Duration;

use zbus::fdo;

/// Transport-level failures of an administrative D-Bus call.
///
/// A call that reached the daemon and came back with `success == false` is
/// not an error; see [`CallResult`](super::CallResult).
#[derive(thiserror::Error, Debug)]
pub enum AdminError {
    /// D-Bus communication error not covered by a more specific variant
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Could not connect to the message bus
    #[error("Failed to connect to the {bus} bus: {reason}")]
    ConnectionFailed {
        /// Which bus the connection was attempted on
        bus: String,
        /// Underlying connection error
        reason: String,
    },

    /// No service owns the requested bus name
    #[error("Service {service} is not registered on the bus: {details}")]
    ServiceNotFound {
        /// Bus name that could not be resolved
        service: String,
        /// Error text reported by the bus
        details: String,
    },

    /// The object, interface or method does not exist on the remote side
    #[error("Method {interface}.{method} not found at {path}: {details}")]
    MethodNotFound {
        /// Object path that was addressed
        path: String,
        /// Interface that was addressed
        interface: String,
        /// Method name that was called
        method: String,
        /// Error text reported by the bus
        details: String,
    },

    /// The reply did not have the expected `(bs)` shape
    #[error("Malformed reply from {method}: {reason}")]
    MalformedReply {
        /// Method whose reply was rejected
        method: String,
        /// Why the reply could not be decoded
        reason: String,
    },

    /// The configured call timeout elapsed before the daemon replied
    #[error("No reply from {method} within {timeout:?}")]
    Timeout {
        /// Method that timed out
        method: String,
        /// Configured timeout
        timeout: Duration,
    },
}

/// Which part of a call a bus error should be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FaultKind {
    ServiceUnknown,
    MethodUnknown,
    Malformed,
    Other,
}

/// Classifies a D-Bus error name reported by the bus or the remote peer.
pub(crate) fn classify_error_name(name: &str) -> FaultKind {
    match name {
        "org.freedesktop.DBus.Error.ServiceUnknown"
        | "org.freedesktop.DBus.Error.NameHasNoOwner" => FaultKind::ServiceUnknown,
        "org.freedesktop.DBus.Error.UnknownMethod"
        | "org.freedesktop.DBus.Error.UnknownObject"
        | "org.freedesktop.DBus.Error.UnknownInterface" => FaultKind::MethodUnknown,
        "org.freedesktop.DBus.Error.InvalidArgs"
        | "org.freedesktop.DBus.Error.InvalidSignature" => FaultKind::Malformed,
        _ => FaultKind::Other,
    }
}

pub(crate) fn classify(error: &zbus::Error) -> (FaultKind, String) {
    match error {
        zbus::Error::MethodError(name, details, _) => (
            classify_error_name(name.as_str()),
            details.clone().unwrap_or_else(|| name.to_string()),
        ),
        zbus::Error::FDO(fdo_error) => {
            let kind = match fdo_error.as_ref() {
                fdo::Error::ServiceUnknown(_) | fdo::Error::NameHasNoOwner(_) => {
                    FaultKind::ServiceUnknown
                }
                fdo::Error::UnknownMethod(_)
                | fdo::Error::UnknownObject(_)
                | fdo::Error::UnknownInterface(_) => FaultKind::MethodUnknown,
                fdo::Error::InvalidArgs(_) | fdo::Error::InvalidSignature(_) => {
                    FaultKind::Malformed
                }
                _ => FaultKind::Other,
            };
            (kind, fdo_error.to_string())
        }
        zbus::Error::Variant(e) => (FaultKind::Malformed, e.to_string()),
        zbus::Error::InvalidReply => (FaultKind::Malformed, error.to_string()),
        _ => (FaultKind::Other, error.to_string()),
    }
}
