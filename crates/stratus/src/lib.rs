//! Stratus - a stack-template interpreter.
//!
//! Stratus turns declarative infrastructure templates into in-memory mock
//! stacks: each declared resource is dispatched to a registered resource
//! type, constructed, and placed in an ordered resource map; each declared
//! output is resolved against those resources. Templates with unsupported
//! resource types still build (the resource is skipped with a recorded
//! warning); templates with bad references fail with a structured,
//! client-facing error.

pub mod registry;
pub mod resolver;
pub mod resources;
pub mod stack;

mod error;

pub use stratus_core::{expr, resource, template};

pub use error::{ErrorKind, StratusError};
pub use registry::ResourceTypeRegistry;
pub use stack::{BuildWarning, ResolvedOutput, Stack};

use log::{debug, info};

/// Builder for interpreting stack templates.
///
/// Holds the resource type registry used to dispatch declarations. A single
/// builder can serve many stack builds, concurrently if shared, because the
/// registry is read-only once the builder exists.
///
/// # Examples
///
/// ```rust
/// use stratus::StackBuilder;
///
/// let template = r#"{
///     "Resources": {
///         "Queue": {
///             "Type": "AWS::SQS::Queue",
///             "Properties": {"QueueName": "my-queue"}
///         }
///     }
/// }"#;
///
/// let builder = StackBuilder::default();
/// let stack = builder
///     .build("stack-1", "demo", template, "us-east-1")
///     .expect("stack builds");
///
/// assert_eq!(stack.resource_map().len(), 1);
/// ```
pub struct StackBuilder {
    registry: ResourceTypeRegistry,
}

impl Default for StackBuilder {
    /// A builder over the builtin resource types.
    fn default() -> Self {
        Self::new(ResourceTypeRegistry::builtin())
    }
}

impl StackBuilder {
    /// Create a builder over the given registry.
    ///
    /// The registry must be fully populated; it is not extended after the
    /// builder takes it.
    pub fn new(registry: ResourceTypeRegistry) -> Self {
        Self { registry }
    }

    /// The registry this builder dispatches against.
    pub fn registry(&self) -> &ResourceTypeRegistry {
        &self.registry
    }

    /// Interpret template text into a [`Stack`].
    ///
    /// Parsing, resource construction, and output resolution run as one
    /// atomic sequence: either every phase succeeds and a fully populated
    /// stack is returned, or the first fatal condition is returned and no
    /// stack exists.
    ///
    /// # Arguments
    ///
    /// * `id` - The stack id.
    /// * `name` - The stack name.
    /// * `source` - Template text.
    /// * `region` - Region the stack is built in.
    ///
    /// # Errors
    ///
    /// Returns [`StratusError`] for template parse errors, resource
    /// construction faults, and unresolvable output references. Use
    /// [`StratusError::kind`] to tell client-correctable failures from
    /// internal ones.
    pub fn build(
        &self,
        id: &str,
        name: &str,
        source: &str,
        region: &str,
    ) -> Result<Stack, StratusError> {
        info!(stack_name = name, region = region; "Interpreting stack template");

        let template = stratus_parser::parse(source)
            .map_err(|err| StratusError::new_parse_error(err, source))?;
        debug!(stack_name = name; "Template parsed");

        let stack = Stack::build(id, name, region, &template, &self.registry)?;
        debug!(stack_name = name; "Stack built successfully");

        Ok(stack)
    }
}
