//! Client side of the NFS-Ganesha administrative D-Bus interface.

/// Transport error types
pub mod error;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Admin service trait and its D-Bus implementation
pub mod service;
/// Remote object addressing and call results
pub mod types;

#[cfg(test)]
mod tests;

pub use error::AdminError;
pub use proxy::*;
pub use service::*;
pub use types::*;
