//! The `AWS::SNS::Topic` resource type.

use std::any::Any;

use serde_json::Value;

use stratus_core::resource::{
    AttributeError, ConstructionError, ResourceInstance, ResourceType,
};
use stratus_core::template::Properties;

use crate::resources::{self, DEFAULT_ACCOUNT_ID};

const TYPE_NAME: &str = "AWS::SNS::Topic";

/// Factory for topic resources.
#[derive(Debug, Default)]
pub struct TopicType;

impl ResourceType for TopicType {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn construct(
        &self,
        logical_id: &str,
        properties: &Properties,
        region: &str,
    ) -> Result<Box<dyn ResourceInstance>, ConstructionError> {
        let physical_name = resources::string_property(properties, "TopicName")?
            .unwrap_or_else(|| logical_id.to_string());

        Ok(Box::new(Topic {
            physical_name,
            region: region.to_string(),
        }))
    }
}

/// A materialized topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    physical_name: String,
    region: String,
}

impl Topic {
    /// The topic's ARN.
    pub fn arn(&self) -> String {
        format!(
            "arn:aws:sns:{}:{}:{}",
            self.region, DEFAULT_ACCOUNT_ID, self.physical_name
        )
    }
}

impl ResourceInstance for Topic {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn physical_name(&self) -> &str {
        &self.physical_name
    }

    // A direct reference to a topic yields its ARN, not its name.
    fn identity(&self) -> String {
        self.arn()
    }

    fn get_attribute(&self, attribute: &str) -> Result<Value, AttributeError> {
        match attribute {
            "TopicName" => Ok(Value::String(self.physical_name.clone())),
            other => Err(self.unknown_attribute(other)),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_is_the_arn() {
        let mut properties = Properties::new();
        properties.insert("TopicName".to_string(), json!("alerts"));

        let instance = TopicType
            .construct("Topic", &properties, "eu-west-1")
            .unwrap();
        assert_eq!(instance.physical_name(), "alerts");
        assert_eq!(
            instance.identity(),
            "arn:aws:sns:eu-west-1:123456789012:alerts"
        );
    }

    #[test]
    fn test_topic_name_attribute() {
        let instance = TopicType
            .construct("Topic", &Properties::new(), "eu-west-1")
            .unwrap();

        assert_eq!(instance.get_attribute("TopicName").unwrap(), json!("Topic"));
        assert!(instance.get_attribute("Arn").is_err());
    }
}
