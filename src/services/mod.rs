/// NFS-Ganesha administrative interface
pub mod admin;

pub use admin::{AdminError, AdminService, CallResult, DbusAdminService, RemoteObject};
