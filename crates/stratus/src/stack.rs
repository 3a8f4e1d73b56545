//! The stack: an interpreted template's resources and outputs.
//!
//! A [`Stack`] is built in two strictly ordered phases. First the
//! `Resources` section is walked in declaration order, dispatching each
//! declaration to its registered resource type; then the `Outputs` section
//! is resolved against the now-complete resource map. A fatal condition in
//! either phase aborts the build, so callers only ever see a fully
//! populated stack or a single [`StratusError`].

use std::fmt;

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde_json::Value;

use stratus_core::resource::ResourceInstance;
use stratus_core::template::Template;

use crate::error::StratusError;
use crate::registry::ResourceTypeRegistry;
use crate::resolver::{self, ResolveError};

/// A resolved output value with its declared description.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutput {
    value: Value,
    description: String,
}

impl ResolvedOutput {
    /// The resolved value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The declared description, empty if the declaration had none.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A non-fatal condition recorded during a stack build.
///
/// Warnings are also logged, but recording them on the stack lets callers
/// and tests observe them without coupling to a logging backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// A declared resource type has no registered factory; the resource
    /// was skipped.
    UnsupportedResourceType {
        /// Logical id of the skipped declaration.
        logical_id: String,
        /// The unresolved type name.
        type_name: String,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::UnsupportedResourceType {
                logical_id,
                type_name,
            } => write!(
                f,
                "no resource type support for `{type_name}` (resource `{logical_id}` skipped)"
            ),
        }
    }
}

/// An interpreted stack: named resources plus resolved outputs.
#[derive(Debug)]
pub struct Stack {
    id: String,
    name: String,
    region: String,
    description: Option<String>,
    resource_map: IndexMap<String, Box<dyn ResourceInstance>>,
    output_map: IndexMap<String, ResolvedOutput>,
    warnings: Vec<BuildWarning>,
}

impl Stack {
    /// Build a stack from a parsed template.
    ///
    /// Resources are constructed in declaration order; outputs are resolved
    /// only after the resource map is complete, because outputs may
    /// reference resources.
    pub(crate) fn build(
        id: &str,
        name: &str,
        region: &str,
        template: &Template,
        registry: &ResourceTypeRegistry,
    ) -> Result<Self, StratusError> {
        let mut resource_map: IndexMap<String, Box<dyn ResourceInstance>> = IndexMap::new();
        let mut warnings = Vec::new();

        info!(
            stack_name = name,
            resource_count = template.resources().len();
            "Building stack resources"
        );

        for (logical_id, declaration) in template.resources() {
            let Some(resource_type) = registry.lookup(declaration.type_name()) else {
                warn!(
                    logical_id = logical_id.as_str();
                    "no resource type support for {}", declaration.type_name()
                );
                warnings.push(BuildWarning::UnsupportedResourceType {
                    logical_id: logical_id.clone(),
                    type_name: declaration.type_name().to_string(),
                });
                continue;
            };

            let instance = resource_type
                .construct(logical_id, declaration.properties(), region)
                .map_err(|source| StratusError::Construction {
                    logical_id: logical_id.clone(),
                    type_name: declaration.type_name().to_string(),
                    source,
                })?;

            debug!(
                logical_id = logical_id.as_str(),
                physical_name = instance.physical_name();
                "Resource constructed"
            );
            resource_map.insert(logical_id.clone(), instance);
        }

        let mut output_map = IndexMap::new();

        for (logical_id, declaration) in template.outputs() {
            let value = resolver::resolve(declaration.value(), &resource_map)
                .map_err(|err| into_stratus_error(logical_id, err))?;

            output_map.insert(
                logical_id.clone(),
                ResolvedOutput {
                    value,
                    description: declaration.description().unwrap_or_default().to_string(),
                },
            );
        }

        info!(
            stack_name = name,
            resource_count = resource_map.len(),
            output_count = output_map.len();
            "Stack built"
        );

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            description: template.description().map(str::to_string),
            resource_map,
            output_map,
            warnings,
        })
    }

    /// The stack id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The stack name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region the stack was built in.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The template's description, if it declared one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Constructed resources, keyed by logical id, in declaration order.
    pub fn resource_map(&self) -> &IndexMap<String, Box<dyn ResourceInstance>> {
        &self.resource_map
    }

    /// Resolved outputs, keyed by logical id, in declaration order.
    pub fn output_map(&self) -> &IndexMap<String, ResolvedOutput> {
        &self.output_map
    }

    /// Look up a constructed resource by logical id.
    pub fn resource(&self, logical_id: &str) -> Option<&dyn ResourceInstance> {
        self.resource_map
            .get(logical_id)
            .map(|resource| resource.as_ref())
    }

    /// Non-fatal conditions recorded during the build.
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }
}

fn into_stratus_error(output: &str, err: ResolveError) -> StratusError {
    match err {
        ResolveError::MissingResource { logical_id } => StratusError::MissingResource {
            output: output.to_string(),
            logical_id,
        },
        ResolveError::InvalidAttribute {
            logical_id,
            type_name,
            attribute,
        } => StratusError::InvalidAttribute {
            output: output.to_string(),
            logical_id,
            type_name,
            attribute,
        },
    }
}
