//! Builtin resource types.
//!
//! Each submodule provides one resource type: a factory implementing
//! [`ResourceType`](stratus_core::resource::ResourceType) plus the concrete
//! instance it constructs. All builtins follow the same naming rule: the
//! physical name comes from the type's explicit name property when declared,
//! otherwise it falls back to the logical id, so identical templates always
//! produce identical names.

use serde_json::Value;

use stratus_core::resource::ConstructionError;
use stratus_core::template::Properties;

mod queue;
mod table;
mod topic;

pub use queue::{Queue, QueueType};
pub use table::{Table, TableType};
pub use topic::{Topic, TopicType};

/// The fixed account id used in synthesized ARNs.
pub const DEFAULT_ACCOUNT_ID: &str = "123456789012";

/// Read an optional string property from a declared property bag.
pub(crate) fn string_property(
    properties: &Properties,
    key: &str,
) -> Result<Option<String>, ConstructionError> {
    match properties.get(key) {
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ConstructionError::invalid_property(key, "expected a string")),
        None => Ok(None),
    }
}

/// Read an optional non-negative integer property from a declared property bag.
pub(crate) fn integer_property(
    properties: &Properties,
    key: &str,
) -> Result<Option<u64>, ConstructionError> {
    match properties.get(key) {
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| ConstructionError::invalid_property(key, "expected an integer")),
        None => Ok(None),
    }
}
