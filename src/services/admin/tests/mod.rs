//! Unit tests for the admin service
//!
//! Covers error classification and remote object defaults.
//! No bus connection is made.

use std::time::Duration;

use crate::services::admin::{
    ADMIN_INTERFACE, ADMIN_PATH, AdminError, BusKind, CallResult, GANESHA_SERVICE, RemoteObject,
    error::{FaultKind, classify, classify_error_name},
};

#[test]
fn remote_object_defaults_to_ganesha_admin() {
    let target = RemoteObject::default();

    assert_eq!(target.bus, BusKind::System);
    assert_eq!(target.service, "org.ganesha.nfsd");
    assert_eq!(target.path, "/org/ganesha/nfsd/admin");
    assert_eq!(target.interface, "org.ganesha.nfsd.admin");
    assert_eq!(target.service, GANESHA_SERVICE);
    assert_eq!(target.path, ADMIN_PATH);
    assert_eq!(target.interface, ADMIN_INTERFACE);
}

#[test]
fn remote_object_display() {
    let target = RemoteObject::default();
    assert_eq!(target.to_string(), "org.ganesha.nfsd:/org/ganesha/nfsd/admin");
}

#[test]
fn bus_kind_display() {
    assert_eq!(BusKind::System.to_string(), "system");
    assert_eq!(BusKind::Session.to_string(), "session");
}

#[test]
fn call_result_from_reply_tuple() {
    let result = CallResult::from((false, "disk full".to_string()));
    assert_eq!(result, CallResult::failed("disk full"));

    let result = CallResult::from((true, String::new()));
    assert_eq!(result, CallResult::ok());
}

#[test]
fn classifies_bus_error_names() {
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.ServiceUnknown"),
        FaultKind::ServiceUnknown
    );
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.NameHasNoOwner"),
        FaultKind::ServiceUnknown
    );
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.UnknownMethod"),
        FaultKind::MethodUnknown
    );
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.UnknownObject"),
        FaultKind::MethodUnknown
    );
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.UnknownInterface"),
        FaultKind::MethodUnknown
    );
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.InvalidSignature"),
        FaultKind::Malformed
    );
    assert_eq!(
        classify_error_name("org.freedesktop.DBus.Error.AccessDenied"),
        FaultKind::Other
    );
}

#[test]
fn classifies_fdo_errors() {
    let error = zbus::Error::FDO(Box::new(zbus::fdo::Error::ServiceUnknown(
        "The name org.ganesha.nfsd was not provided".to_string(),
    )));
    let (kind, details) = classify(&error);

    assert_eq!(kind, FaultKind::ServiceUnknown);
    assert!(details.contains("org.ganesha.nfsd"));

    let error = zbus::Error::FDO(Box::new(zbus::fdo::Error::UnknownMethod(
        "No such method fsal_stats".to_string(),
    )));
    assert_eq!(classify(&error).0, FaultKind::MethodUnknown);
}

#[test]
fn classifies_invalid_reply_as_malformed() {
    let (kind, _) = classify(&zbus::Error::InvalidReply);
    assert_eq!(kind, FaultKind::Malformed);
}

#[test]
fn other_errors_are_unclassified() {
    let (kind, details) = classify(&zbus::Error::Unsupported);
    assert_eq!(kind, FaultKind::Other);
    assert!(!details.is_empty());
}

#[test]
fn timeout_error_message_names_method() {
    let error = AdminError::Timeout {
        method: "fsal_stats".to_string(),
        timeout: Duration::from_secs(5),
    };

    assert_eq!(error.to_string(), "No reply from fsal_stats within 5s");
}
