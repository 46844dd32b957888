#![allow(missing_docs)]

use zbus::{Result, proxy};

/// NFS-Ganesha administrative interface proxy
///
/// The daemon exports its methods with lowercase names, so each one is
/// pinned with `name` instead of relying on the CamelCase conversion.
#[proxy(
    interface = "org.ganesha.nfsd.admin",
    default_service = "org.ganesha.nfsd",
    default_path = "/org/ganesha/nfsd/admin"
)]
pub trait GaneshaAdmin {
    /// Dump FSAL and NFSv3 operation statistics to the daemon's stats files.
    ///
    /// # Returns
    /// `(dumped, message)`; `message` explains why nothing was dumped.
    #[zbus(name = "fsal_stats")]
    fn fsal_stats(&self) -> Result<(bool, String)>;
}
