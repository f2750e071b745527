//! Chain epoch markers
//!
//! The test harness records when the current chain instance started as a
//! `start_time` field. Writers are inconsistent about its type, so a marker may
//! arrive as a JSON integer or as a numeric string with trailing whitespace.

use crate::error::{CodeCacheError, CodeCacheResult};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Opaque chain session marker, only ever compared for equality
pub type Epoch = i64;

/// Store `start_time` meaning "never built under any chain session"
pub const UNINITIALIZED: Epoch = 0;

/// Epoch reported when the artifact has no `start_time` field
pub const MISSING_EPOCH: Epoch = -1;

/// Parse a marker value into an epoch
pub fn parse_marker(value: &Value) -> Result<Epoch, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("start_time {} is not an integer", n)),
        Value::String(s) => s
            .trim()
            .parse::<Epoch>()
            .map_err(|_| format!("start_time {:?} is not an integer", s)),
        other => Err(format!("start_time has unsupported type: {}", other)),
    }
}

/// Serde adapter for marker fields
pub fn deserialize_marker<'de, D>(deserializer: D) -> Result<Epoch, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_marker(&value).map_err(serde::de::Error::custom)
}

/// Read the `start_time` field out of a JSON object file
///
/// Returns `default` when the field is absent.
pub(crate) fn read_marker_field(path: &Path, default: Epoch) -> CodeCacheResult<Epoch> {
    let content = fs::read_to_string(path)
        .map_err(|e| CodeCacheError::io(format!("reading {}", path.display()), e))?;

    let doc: Value = serde_json::from_str(&content)
        .map_err(|e| CodeCacheError::invalid_format(path, e.to_string()))?;

    let Value::Object(map) = doc else {
        return Err(CodeCacheError::invalid_format(path, "expected a JSON object"));
    };

    match map.get("start_time") {
        Some(value) => {
            parse_marker(value).map_err(|reason| CodeCacheError::invalid_format(path, reason))
        }
        None => Ok(default),
    }
}

/// Read the current chain epoch from the harness artifact
pub fn read_chain_epoch(path: &Path) -> CodeCacheResult<Epoch> {
    if !path.exists() {
        return Err(CodeCacheError::NotFound(path.to_path_buf()));
    }

    let epoch = read_marker_field(path, MISSING_EPOCH)?;
    debug!("Chain epoch from {}: {}", path.display(), epoch);
    Ok(epoch)
}
