//! The `AWS::DynamoDB::Table` resource type.

use std::any::Any;

use serde_json::Value;

use stratus_core::resource::{
    AttributeError, ConstructionError, ResourceInstance, ResourceType,
};
use stratus_core::template::Properties;

use crate::resources::{self, DEFAULT_ACCOUNT_ID};

const TYPE_NAME: &str = "AWS::DynamoDB::Table";

/// Factory for table resources.
#[derive(Debug, Default)]
pub struct TableType;

impl ResourceType for TableType {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn construct(
        &self,
        logical_id: &str,
        properties: &Properties,
        region: &str,
    ) -> Result<Box<dyn ResourceInstance>, ConstructionError> {
        let physical_name = resources::string_property(properties, "TableName")?
            .unwrap_or_else(|| logical_id.to_string());

        Ok(Box::new(Table {
            physical_name,
            region: region.to_string(),
        }))
    }
}

/// A materialized table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    physical_name: String,
    region: String,
}

impl Table {
    /// The table's ARN.
    pub fn arn(&self) -> String {
        format!(
            "arn:aws:dynamodb:{}:{}:table/{}",
            self.region, DEFAULT_ACCOUNT_ID, self.physical_name
        )
    }
}

impl ResourceInstance for Table {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn physical_name(&self) -> &str {
        &self.physical_name
    }

    fn get_attribute(&self, attribute: &str) -> Result<Value, AttributeError> {
        match attribute {
            "Arn" => Ok(Value::String(self.arn())),
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
    fn test_named_table() {
        let mut properties = Properties::new();
        properties.insert("TableName".to_string(), json!("sessions"));

        let instance = TableType
            .construct("Table", &properties, "us-east-1")
            .unwrap();
        assert_eq!(instance.physical_name(), "sessions");
        assert_eq!(instance.identity(), "sessions");
        assert_eq!(
            instance.get_attribute("Arn").unwrap(),
            json!("arn:aws:dynamodb:us-east-1:123456789012:table/sessions")
        );
    }

    #[test]
    fn test_nameless_table_falls_back_to_logical_id() {
        let instance = TableType
            .construct("Sessions", &Properties::new(), "us-east-1")
            .unwrap();
        assert_eq!(instance.physical_name(), "Sessions");
    }
}
