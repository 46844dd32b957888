//! Unit tests for config module
//!
//! Tests configuration types, defaults, parsing and validation.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{path::Path, time::Duration};

use crate::{
    CtlError,
    config::{Config, LogLevel},
    services::admin::{BusKind, RemoteObject},
};

#[test]
fn config_default_targets_ganesha_admin() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.bus.remote_object(), RemoteObject::default());
    assert_eq!(config.bus.timeout(), None);
    assert_eq!(config.dump.fsal_stats, Path::new("/tmp/fsal.stats"));
    assert_eq!(config.dump.nfsv3_stats, Path::new("/tmp/nfsv3.stats"));
}

#[test]
fn config_default_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_bus_section_keeps_other_defaults() {
    let config = Config::from_toml(
        r#"
        [bus]
        bus = "session"
        timeout_secs = 10
    "#,
    )
    .unwrap();

    assert_eq!(config.bus.bus, BusKind::Session);
    assert_eq!(config.bus.timeout(), Some(Duration::from_secs(10)));
    assert_eq!(config.bus.service, "org.ganesha.nfsd");
    assert_eq!(config.bus.path, "/org/ganesha/nfsd/admin");
}

#[test]
fn config_full_toml() {
    let config = Config::from_toml(
        r#"
        [general]
        log_level = "debug"

        [bus]
        bus = "system"
        service = "org.ganesha.nfsd"
        path = "/org/ganesha/nfsd/admin"
        interface = "org.ganesha.nfsd.admin"

        [dump]
        fsal_stats = "/var/tmp/fsal.stats"
        nfsv3_stats = "/var/tmp/nfsv3.stats"
    "#,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.dump.fsal_stats, Path::new("/var/tmp/fsal.stats"));
    assert_eq!(config.dump.nfsv3_stats, Path::new("/var/tmp/nfsv3.stats"));
}

#[test]
fn config_serialize_omits_unset_timeout() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[bus]"));
    assert!(toml_str.contains("[dump]"));
    assert!(!toml_str.contains("timeout_secs"));
}

#[test]
fn rejects_invalid_service_name() {
    let result = Config::from_toml(
        r#"
        [bus]
        service = "not a bus name"
    "#,
    );

    match result {
        Err(CtlError::Config(msg)) => assert!(msg.contains("bus.service")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn rejects_relative_object_path() {
    let result = Config::from_toml(
        r#"
        [bus]
        path = "org/ganesha/nfsd/admin"
    "#,
    );

    match result {
        Err(CtlError::Config(msg)) => assert!(msg.contains("bus.path")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn rejects_zero_timeout() {
    let result = Config::from_toml(
        r#"
        [bus]
        timeout_secs = 0
    "#,
    );

    assert!(matches!(result, Err(CtlError::Config(_))));
}

#[test]
fn rejects_unknown_log_level() {
    let result = Config::from_toml(
        r#"
        [general]
        log_level = "loud"
    "#,
    );

    assert!(matches!(result, Err(CtlError::TomlParse(_))));
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Info.to_string(), "info");
    assert_eq!(LogLevel::Debug.to_string(), "debug");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
