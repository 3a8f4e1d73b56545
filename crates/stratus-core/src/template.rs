//! The parsed template document.
//!
//! A [`Template`] is the in-memory form of a stack template: an ordered map
//! of resource declarations, an ordered map of output declarations, and the
//! document metadata that travels with them. Declaration order is preserved
//! because resource construction walks the map in order.

use indexmap::IndexMap;
use serde_json::Value;

use crate::expr::Expr;

/// A bag of raw resource properties, as declared in the document.
///
/// Property values are not interpreted by the interpreter core; resource
/// types read the entries they understand and ignore the rest.
pub type Properties = serde_json::Map<String, Value>;

/// A parsed stack template.
#[derive(Debug, Clone, Default)]
pub struct Template {
    format_version: Option<String>,
    description: Option<String>,
    resources: IndexMap<String, ResourceDecl>,
    outputs: IndexMap<String, OutputDecl>,
}

impl Template {
    /// Assemble a template from its parsed sections.
    pub fn new(
        format_version: Option<String>,
        description: Option<String>,
        resources: IndexMap<String, ResourceDecl>,
        outputs: IndexMap<String, OutputDecl>,
    ) -> Self {
        Self {
            format_version,
            description,
            resources,
            outputs,
        }
    }

    /// The document's format version field, if declared.
    pub fn format_version(&self) -> Option<&str> {
        self.format_version.as_deref()
    }

    /// The document's description field, if declared.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Resource declarations, keyed by logical id, in declaration order.
    pub fn resources(&self) -> &IndexMap<String, ResourceDecl> {
        &self.resources
    }

    /// Output declarations, keyed by logical id, in declaration order.
    ///
    /// Empty when the document has no `Outputs` section.
    pub fn outputs(&self) -> &IndexMap<String, OutputDecl> {
        &self.outputs
    }

    /// Look up a resource declaration by logical id.
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceDecl> {
        self.resources.get(logical_id)
    }
}

/// One declared resource: a type name and its property bag.
#[derive(Debug, Clone)]
pub struct ResourceDecl {
    type_name: String,
    properties: Properties,
}

impl ResourceDecl {
    /// Create a resource declaration.
    pub fn new(type_name: impl Into<String>, properties: Properties) -> Self {
        Self {
            type_name: type_name.into(),
            properties,
        }
    }

    /// The declared resource type name, e.g. `AWS::SQS::Queue`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The raw property bag.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// One declared output: an expression and an optional description.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDecl {
    value: Expr,
    description: Option<String>,
}

impl OutputDecl {
    /// Create an output declaration.
    pub fn new(value: Expr, description: Option<String>) -> Self {
        Self { value, description }
    }

    /// The output's value expression.
    pub fn value(&self) -> &Expr {
        &self.value
    }

    /// The declared description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn queue_decl(name: &str) -> ResourceDecl {
        let mut properties = Properties::new();
        properties.insert("QueueName".to_string(), json!(name));
        ResourceDecl::new("AWS::SQS::Queue", properties)
    }

    #[test]
    fn test_resource_lookup() {
        let mut resources = IndexMap::new();
        resources.insert("Queue".to_string(), queue_decl("my-queue"));

        let template = Template::new(None, None, resources, IndexMap::new());

        assert_eq!(
            template.resource("Queue").unwrap().type_name(),
            "AWS::SQS::Queue"
        );
        assert!(template.resource("Missing").is_none());
        assert!(template.outputs().is_empty());
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let mut resources = IndexMap::new();
        resources.insert("Zebra".to_string(), queue_decl("z"));
        resources.insert("Apple".to_string(), queue_decl("a"));
        resources.insert("Mango".to_string(), queue_decl("m"));

        let template = Template::new(None, None, resources, IndexMap::new());

        let ids: Vec<&str> = template.resources().keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["Zebra", "Apple", "Mango"]);
    }
}
