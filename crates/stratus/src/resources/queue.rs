//! The `AWS::SQS::Queue` resource type.

use std::any::Any;

use serde_json::Value;

use stratus_core::resource::{
    AttributeError, ConstructionError, ResourceInstance, ResourceType,
};
use stratus_core::template::Properties;

use crate::resources::{self, DEFAULT_ACCOUNT_ID};

const TYPE_NAME: &str = "AWS::SQS::Queue";

const DEFAULT_VISIBILITY_TIMEOUT: u64 = 30;

/// Factory for queue resources.
#[derive(Debug, Default)]
pub struct QueueType;

impl ResourceType for QueueType {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn construct(
        &self,
        logical_id: &str,
        properties: &Properties,
        region: &str,
    ) -> Result<Box<dyn ResourceInstance>, ConstructionError> {
        let physical_name = resources::string_property(properties, "QueueName")?
            .unwrap_or_else(|| logical_id.to_string());
        let visibility_timeout = resources::integer_property(properties, "VisibilityTimeout")?
            .unwrap_or(DEFAULT_VISIBILITY_TIMEOUT);

        Ok(Box::new(Queue {
            physical_name,
            region: region.to_string(),
            visibility_timeout,
        }))
    }
}

/// A materialized queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    physical_name: String,
    region: String,
    visibility_timeout: u64,
}

impl Queue {
    /// The queue's visibility timeout in seconds.
    pub fn visibility_timeout(&self) -> u64 {
        self.visibility_timeout
    }

    /// The queue's ARN.
    pub fn arn(&self) -> String {
        format!(
            "arn:aws:sqs:{}:{}:{}",
            self.region, DEFAULT_ACCOUNT_ID, self.physical_name
        )
    }
}

impl ResourceInstance for Queue {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn physical_name(&self) -> &str {
        &self.physical_name
    }

    fn get_attribute(&self, attribute: &str) -> Result<Value, AttributeError> {
        match attribute {
            "QueueName" => Ok(Value::String(self.physical_name.clone())),
            "Arn" => Ok(Value::String(self.arn())),
            other => Err(self.unknown_attribute(other)),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
