//! The serializable stack report rendered by the CLI.

use serde::Serialize;
use serde_json::Value;

use stratus::Stack;

/// A rendered view of a built stack.
#[derive(Debug, Serialize)]
pub struct StackReport {
    id: String,
    name: String,
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    resources: Vec<ResourceReport>,
    outputs: Vec<OutputReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ResourceReport {
    logical_id: String,
    #[serde(rename = "type")]
    type_name: String,
    physical_name: String,
    identity: String,
}

#[derive(Debug, Serialize)]
struct OutputReport {
    logical_id: String,
    value: Value,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
}

impl StackReport {
    /// Snapshot a built stack, preserving declaration order.
    pub fn from_stack(stack: &Stack) -> Self {
        let resources = stack
            .resource_map()
            .iter()
            .map(|(logical_id, resource)| ResourceReport {
                logical_id: logical_id.clone(),
                type_name: resource.type_name().to_string(),
                physical_name: resource.physical_name().to_string(),
                identity: resource.identity(),
            })
            .collect();

        let outputs = stack
            .output_map()
            .iter()
            .map(|(logical_id, output)| OutputReport {
                logical_id: logical_id.clone(),
                value: output.value().clone(),
                description: output.description().to_string(),
            })
            .collect();

        Self {
            id: stack.id().to_string(),
            name: stack.name().to_string(),
            region: stack.region().to_string(),
            description: stack.description().map(str::to_string),
            resources,
            outputs,
            warnings: stack.warnings().iter().map(ToString::to_string).collect(),
        }
    }
}
