//! JSON helpers that swallow errors
//!
//! Failures are logged at debug level and reported as `None`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string(value)
        .map_err(|e| debug!(error = %e, "JSON serialization failed"))
        .ok()
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| debug!(error = %e, "JSON serialization failed"))
        .ok()
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Option<T> {
    serde_json::from_str(json)
        .map_err(|e| debug!(error = %e, "JSON deserialization failed"))
        .ok()
}
