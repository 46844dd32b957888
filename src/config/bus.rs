use std::time::Duration;

use serde::{Deserialize, Serialize};
use zbus::{
    names::{BusName, InterfaceName},
    zvariant::ObjectPath,
};

use crate::{
    CtlError, Result,
    services::admin::{ADMIN_INTERFACE, ADMIN_PATH, BusKind, GANESHA_SERVICE, RemoteObject},
};

/// Where the administrative object lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BusConfig {
    /// Message bus the daemon is registered on.
    pub bus: BusKind,

    /// Well-known bus name of the daemon.
    pub service: String,

    /// Object path of the administrative object.
    pub path: String,

    /// Interface the administrative methods belong to.
    pub interface: String,

    /// Seconds to wait for a reply. Unset means wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            bus: BusKind::System,
            service: GANESHA_SERVICE.to_string(),
            path: ADMIN_PATH.to_string(),
            interface: ADMIN_INTERFACE.to_string(),
            timeout_secs: None,
        }
    }
}

impl BusConfig {
    /// Checks that every name is a syntactically valid D-Bus name.
    ///
    /// # Errors
    /// Returns `CtlError::Config` naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        BusName::try_from(self.service.as_str())
            .map_err(|e| invalid_field("service", &self.service, e))?;
        ObjectPath::try_from(self.path.as_str())
            .map_err(|e| invalid_field("path", &self.path, e))?;
        InterfaceName::try_from(self.interface.as_str())
            .map_err(|e| invalid_field("interface", &self.interface, e))?;

        if self.timeout_secs == Some(0) {
            return Err(CtlError::Config(
                "bus.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The remote object addressed by this configuration.
    pub fn remote_object(&self) -> RemoteObject {
        RemoteObject {
            bus: self.bus,
            service: self.service.clone(),
            path: self.path.clone(),
            interface: self.interface.clone(),
        }
    }

    /// Reply timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn invalid_field(field: &str, value: &str, error: impl std::fmt::Display) -> CtlError {
    CtlError::Config(format!("invalid bus.{field} '{value}': {error}"))
}
