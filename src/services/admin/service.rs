use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};
use zbus::{Connection, proxy::CacheProperties};

use super::{
    AdminError, BusKind, CallResult, FSAL_STATS_METHOD, GaneshaAdminProxy, RemoteObject,
    error::{FaultKind, classify},
};

/// Administrative operations exposed by the NFS-Ganesha daemon
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Ask the daemon to write its FSAL and NFSv3 statistics to disk.
    ///
    /// # Errors
    /// Returns `AdminError` when the call cannot be delivered or its reply
    /// cannot be decoded. A delivered call that the daemon refused is an
    /// `Ok` with `success == false`.
    async fn fsal_stats(&self) -> Result<CallResult, AdminError>;
}

/// [`AdminService`] backed by a live D-Bus connection.
pub struct DbusAdminService {
    connection: Connection,
    target: RemoteObject,
    timeout: Option<Duration>,
}

impl DbusAdminService {
    /// Connects to the bus named by `target`.
    ///
    /// With `timeout` unset, calls wait for the daemon indefinitely.
    ///
    /// # Errors
    /// Returns `AdminError::ConnectionFailed` if the bus is unreachable.
    #[instrument(skip_all, fields(bus = %target.bus, target = %target))]
    pub async fn connect(
        target: RemoteObject,
        timeout: Option<Duration>,
    ) -> Result<Self, AdminError> {
        let connection = match target.bus {
            BusKind::System => Connection::system().await,
            BusKind::Session => Connection::session().await,
        }
        .map_err(|err| AdminError::ConnectionFailed {
            bus: target.bus.to_string(),
            reason: err.to_string(),
        })?;

        debug!("Connected to {} bus", target.bus);

        Ok(Self::with_connection(connection, target, timeout))
    }

    /// Uses an already established connection, such as a peer-to-peer link.
    ///
    /// `target.bus` is informational only here.
    pub fn with_connection(
        connection: Connection,
        target: RemoteObject,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            connection,
            target,
            timeout,
        }
    }

    async fn proxy(&self) -> Result<GaneshaAdminProxy<'_>, AdminError> {
        let proxy = GaneshaAdminProxy::builder(&self.connection)
            .destination(self.target.service.as_str())?
            .path(self.target.path.as_str())?
            .interface(self.target.interface.as_str())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(proxy)
    }

    fn describe(&self, method: &str, error: zbus::Error) -> AdminError {
        let (kind, details) = classify(&error);
        match kind {
            FaultKind::ServiceUnknown => AdminError::ServiceNotFound {
                service: self.target.service.clone(),
                details,
            },
            FaultKind::MethodUnknown => AdminError::MethodNotFound {
                path: self.target.path.clone(),
                interface: self.target.interface.clone(),
                method: method.to_string(),
                details,
            },
            FaultKind::Malformed => AdminError::MalformedReply {
                method: method.to_string(),
                reason: details,
            },
            FaultKind::Other => AdminError::DbusError(error),
        }
    }
}

#[async_trait]
impl AdminService for DbusAdminService {
    #[instrument(skip(self), fields(target = %self.target))]
    async fn fsal_stats(&self) -> Result<CallResult, AdminError> {
        let proxy = self.proxy().await?;

        let reply = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, proxy.fsal_stats())
                .await
                .map_err(|_| AdminError::Timeout {
                    method: FSAL_STATS_METHOD.to_string(),
                    timeout,
                })?,
            None => proxy.fsal_stats().await,
        };

        let result = reply
            .map(CallResult::from)
            .map_err(|err| self.describe(FSAL_STATS_METHOD, err))?;

        debug!(success = result.success, "fsal_stats replied");
        Ok(result)
    }
}
