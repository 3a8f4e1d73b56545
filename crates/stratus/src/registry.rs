//! The resource type registry.
//!
//! A [`ResourceTypeRegistry`] maps type-name strings to the factories that
//! construct resources of that type. It is populated once, before any
//! stacks are built, and read-only afterwards, so concurrent stack builds
//! can share a reference to it without locking.

use std::collections::HashMap;

use stratus_core::resource::ResourceType;

use crate::resources::{QueueType, TableType, TopicType};

/// A mapping from type-name strings to resource factories.
pub struct ResourceTypeRegistry {
    types: HashMap<&'static str, Box<dyn ResourceType>>,
}

impl ResourceTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry populated with the builtin resource types.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(QueueType));
        registry.register(Box::new(TopicType));
        registry.register(Box::new(TableType));
        registry
    }

    /// Register a resource type under its own type name.
    ///
    /// Registering a second factory for the same type name replaces the
    /// first. Registration must complete before the registry is shared with
    /// concurrent builders.
    pub fn register(&mut self, resource_type: Box<dyn ResourceType>) {
        self.types.insert(resource_type.type_name(), resource_type);
    }

    /// Look up the factory for a type-name string.
    ///
    /// A miss is not an error at this level; the caller decides how to
    /// proceed (stack builds log a warning and skip the resource).
    pub fn lookup(&self, type_name: &str) -> Option<&dyn ResourceType> {
        self.types
            .get(type_name)
            .map(|resource_type| resource_type.as_ref())
    }

    /// Returns `true` if a factory is registered for the type name.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The registered type names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }
}

impl Default for ResourceTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stratus_core::resource::{
        AttributeError, ConstructionError, ResourceInstance, ResourceType,
    };
    use stratus_core::template::Properties;

    #[test]
    fn test_builtin_types_are_registered() {
        let registry = ResourceTypeRegistry::builtin();

        assert!(registry.contains("AWS::SQS::Queue"));
        assert!(registry.contains("AWS::SNS::Topic"));
        assert!(registry.contains("AWS::DynamoDB::Table"));
        assert_eq!(registry.type_names().count(), 3);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let registry = ResourceTypeRegistry::builtin();
        assert!(registry.lookup("AWS::EC2::Instance").is_none());
        assert!(!registry.contains("foobar"));
    }

    #[derive(Debug)]
    struct Null;

    impl ResourceInstance for Null {
        fn type_name(&self) -> &'static str {
            "Test::Null"
        }

        fn physical_name(&self) -> &str {
            "null"
        }

        fn get_attribute(
            &self,
            attribute: &str,
        ) -> Result<serde_json::Value, AttributeError> {
            Err(self.unknown_attribute(attribute))
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    struct NullType;

    impl ResourceType for NullType {
        fn type_name(&self) -> &'static str {
            "Test::Null"
        }

        fn construct(
            &self,
            _logical_id: &str,
            _properties: &Properties,
            _region: &str,
        ) -> Result<Box<dyn ResourceInstance>, ConstructionError> {
            Ok(Box::new(Null))
        }
    }

    #[test]
    fn test_custom_type_can_be_registered() {
        let mut registry = ResourceTypeRegistry::new();
        registry.register(Box::new(NullType));

        let resource_type = registry.lookup("Test::Null").unwrap();
        let instance = resource_type
            .construct("Null", &Properties::new(), "us-east-1")
            .unwrap();
        assert_eq!(instance.physical_name(), "null");
    }
}
