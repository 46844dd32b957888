use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known bus name of the NFS-Ganesha daemon.
pub const GANESHA_SERVICE: &str = "org.ganesha.nfsd";
/// Object path of the administrative object.
pub const ADMIN_PATH: &str = "/org/ganesha/nfsd/admin";
/// Interface carrying the administrative methods.
pub const ADMIN_INTERFACE: &str = "org.ganesha.nfsd.admin";
/// Method that flushes FSAL statistics to disk.
pub const FSAL_STATS_METHOD: &str = "fsal_stats";

/// Which message bus to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    /// The host-wide system bus
    #[default]
    System,
    /// The per-login session bus
    Session,
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusKind::System => write!(f, "system"),
            BusKind::Session => write!(f, "session"),
        }
    }
}

/// Address of a remote administrative object on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
    /// Bus the service is registered on
    pub bus: BusKind,
    /// Well-known bus name
    pub service: String,
    /// Object path under the bus name
    pub path: String,
    /// Interface the methods are called through
    pub interface: String,
}

impl Default for RemoteObject {
    fn default() -> Self {
        Self {
            bus: BusKind::System,
            service: GANESHA_SERVICE.to_string(),
            path: ADMIN_PATH.to_string(),
            interface: ADMIN_INTERFACE.to_string(),
        }
    }
}

impl fmt::Display for RemoteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.service, self.path)
    }
}

/// Reply of an administrative call: whether the daemon did the work, and a
/// diagnostic that is only meaningful when it did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    /// The daemon completed the requested operation
    pub success: bool,
    /// Human-readable diagnostic
    pub message: String,
}

impl CallResult {
    /// A successful reply with an empty message.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: String::new(),
        }
    }

    /// A failed reply carrying the daemon's diagnostic.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<(bool, String)> for CallResult {
    fn from((success, message): (bool, String)) -> Self {
        Self { success, message }
    }
}
