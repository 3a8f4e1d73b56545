//! Output reference resolution.
//!
//! Resolves the typed output expressions of a template against a fully
//! populated resource map. Resolution happens once, at stack-construction
//! time; the two failure modes here are client-correctable template
//! problems, not interpreter faults.

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use stratus_core::{expr::Expr, resource::ResourceInstance};

/// Error raised when an output expression cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The expression references a logical id that is not in the resource
    /// map: never declared, or declared with an unsupported type and
    /// skipped during construction. Both read the same from here.
    #[error("missing resource `{logical_id}`")]
    MissingResource {
        /// The referenced logical id.
        logical_id: String,
    },

    /// The expression reads an attribute the resource type does not expose.
    #[error("invalid attribute `{attribute}` of resource `{logical_id}` ({type_name})")]
    InvalidAttribute {
        /// Logical id of the queried resource.
        logical_id: String,
        /// Type name of the queried resource.
        type_name: String,
        /// The attribute that was requested.
        attribute: String,
    },
}

/// Resolve one expression against a populated resource map.
///
/// - [`Expr::Literal`] resolves to its value unchanged.
/// - [`Expr::Ref`] resolves to the referenced resource's identity string.
/// - [`Expr::GetAtt`] resolves to the named attribute's value.
///
/// # Errors
///
/// Returns [`ResolveError`] when the referenced resource is absent from the
/// map or does not expose the requested attribute.
pub fn resolve(
    expr: &Expr,
    resources: &IndexMap<String, Box<dyn ResourceInstance>>,
) -> Result<Value, ResolveError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),

        Expr::Ref(logical_id) => {
            let resource = lookup(resources, logical_id)?;
            Ok(Value::String(resource.identity()))
        }

        Expr::GetAtt {
            logical_id,
            attribute,
        } => {
            let resource = lookup(resources, logical_id)?;
            resource
                .get_attribute(attribute)
                .map_err(|err| ResolveError::InvalidAttribute {
                    logical_id: logical_id.clone(),
                    type_name: err.type_name,
                    attribute: err.attribute,
                })
        }
    }
}

fn lookup<'a>(
    resources: &'a IndexMap<String, Box<dyn ResourceInstance>>,
    logical_id: &str,
) -> Result<&'a dyn ResourceInstance, ResolveError> {
    resources
        .get(logical_id)
        .map(|resource| resource.as_ref())
        .ok_or_else(|| ResolveError::MissingResource {
            logical_id: logical_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use stratus_core::resource::ResourceType;
    use stratus_core::template::Properties;

    use crate::resources::QueueType;

    fn queue_map(name: &str) -> IndexMap<String, Box<dyn ResourceInstance>> {
        let mut properties = Properties::new();
        properties.insert("QueueName".to_string(), json!(name));
        let queue = QueueType
            .construct("Queue", &properties, "us-west-1")
            .unwrap();

        let mut resources: IndexMap<String, Box<dyn ResourceInstance>> = IndexMap::new();
        resources.insert("Queue".to_string(), queue);
        resources
    }

    #[test]
    fn test_literal_resolves_to_itself() {
        let resources = queue_map("my-queue");
        let value = json!({"nested": [1, 2, 3]});

        let resolved = resolve(&Expr::Literal(value.clone()), &resources).unwrap();
        assert_eq!(resolved, value);
    }

    #[test]
    fn test_ref_resolves_to_identity() {
        let resources = queue_map("my-queue");

        let resolved = resolve(&Expr::Ref("Queue".to_string()), &resources).unwrap();
        assert_eq!(resolved, json!("my-queue"));
    }

    #[test]
    fn test_get_att_resolves_attribute() {
        let resources = queue_map("my-queue");

        let resolved = resolve(&Expr::get_att("Queue", "QueueName"), &resources).unwrap();
        assert_eq!(resolved, json!("my-queue"));
    }

    #[test]
    fn test_missing_resource_for_ref() {
        let resources = queue_map("my-queue");

        let err = resolve(&Expr::Ref("Absent".to_string()), &resources).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingResource {
                logical_id: "Absent".to_string()
            }
        );
    }

    #[test]
    fn test_missing_resource_for_get_att() {
        let resources = queue_map("my-queue");

        let err = resolve(&Expr::get_att("Absent", "Arn"), &resources).unwrap_err();
        assert!(matches!(err, ResolveError::MissingResource { .. }));
    }

    #[test]
    fn test_invalid_attribute_carries_identity() {
        let resources = queue_map("my-queue");

        let err = resolve(&Expr::get_att("Queue", "InvalidAttribute"), &resources).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidAttribute {
                logical_id: "Queue".to_string(),
                type_name: "AWS::SQS::Queue".to_string(),
                attribute: "InvalidAttribute".to_string(),
            }
        );
    }
}
