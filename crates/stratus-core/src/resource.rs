//! Capability traits implemented by resource types.
//!
//! This module defines the seam between the interpreter and the concrete
//! resource implementations. A [`ResourceType`] is a factory registered under
//! a type-name string; it constructs [`ResourceInstance`] values from a
//! declared property bag. Instances expose a physical name, an identity
//! string for direct references, and named attributes for attribute-get
//! expressions.

use std::any::Any;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::template::Properties;

/// Error raised when a resource type cannot be constructed from its
/// declared properties.
///
/// Construction faults are fatal to the whole stack build.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// A declared property has a value the resource type cannot accept.
    #[error("invalid value for property `{property}`: {message}")]
    InvalidProperty {
        /// Name of the offending property.
        property: String,
        /// What was wrong with it.
        message: String,
    },

    /// Any other construction failure.
    #[error("{0}")]
    Other(String),
}

impl ConstructionError {
    /// Create an [`ConstructionError::InvalidProperty`] error.
    pub fn invalid_property(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProperty {
            property: property.into(),
            message: message.into(),
        }
    }
}

/// Error raised when a resource is asked for an attribute it does not expose.
///
/// This reflects a malformed but well-formed-looking template, so it is
/// surfaced to callers as a client-correctable condition rather than an
/// internal fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resource type `{type_name}` has no attribute `{attribute}`")]
pub struct AttributeError {
    /// Type name of the resource that was queried.
    pub type_name: String,
    /// The attribute name that was requested.
    pub attribute: String,
}

impl AttributeError {
    /// Create an attribute error for the given type and attribute names.
    pub fn new(type_name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attribute: attribute.into(),
        }
    }
}

/// A constructed resource living in a stack's resource map.
///
/// Instances are exclusively owned by their stack for the stack's lifetime.
pub trait ResourceInstance: fmt::Debug + Send + Sync {
    /// The resource type name this instance was constructed from.
    fn type_name(&self) -> &'static str;

    /// The resource's physical name.
    ///
    /// Taken from the type's explicit name property when declared, otherwise
    /// synthesized deterministically by the resource type.
    fn physical_name(&self) -> &str;

    /// The value a direct reference to this resource resolves to.
    ///
    /// Identity is type-specific; the default is the physical name.
    fn identity(&self) -> String {
        self.physical_name().to_string()
    }

    /// Read a named attribute of this resource.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError`] if this resource type does not expose the
    /// requested attribute.
    fn get_attribute(&self, attribute: &str) -> Result<Value, AttributeError>;

    /// Upcast for downcasting to the concrete resource type.
    fn as_any(&self) -> &dyn Any;

    /// Build the error for an attribute this type does not expose.
    fn unknown_attribute(&self, attribute: &str) -> AttributeError {
        AttributeError::new(self.type_name(), attribute)
    }
}

/// A factory for one resource type, registered under its type-name string.
pub trait ResourceType: Send + Sync {
    /// The type-name string this factory handles, e.g. `AWS::SQS::Queue`.
    fn type_name(&self) -> &'static str;

    /// Construct a resource instance from a declared resource block.
    ///
    /// # Arguments
    ///
    /// * `logical_id` - The declaration's logical id within the template.
    /// * `properties` - The declared property bag.
    /// * `region` - The region the stack is being built in.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the properties cannot be accepted.
    /// Construction faults abort the whole stack build.
    fn construct(
        &self,
        logical_id: &str,
        properties: &Properties,
        region: &str,
    ) -> Result<Box<dyn ResourceInstance>, ConstructionError>;
}
