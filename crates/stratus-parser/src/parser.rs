//! Template document walker.
//!
//! This module deserializes template text and walks the resulting JSON
//! document into the typed [`Template`] model. The walk visits every
//! section and collects diagnostics as it goes; the public entry point is
//! [`parse`].

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use stratus_core::{
    expr::Expr,
    template::{OutputDecl, Properties, ResourceDecl, Template},
};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};

/// Template sections consumed by the interpreter.
const KNOWN_SECTIONS: [&str; 4] = [
    "AWSTemplateFormatVersion",
    "Description",
    "Resources",
    "Outputs",
];

/// Parse template text into a [`Template`].
///
/// The whole document is walked before returning, so the error carries every
/// problem found, each with an error code and the JSON path of the offending
/// value. Unsupported sections and wrong-typed metadata fields are warnings:
/// they are logged and the section is ignored.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not valid JSON, the root is not an
/// object, or any section fails structural validation.
pub fn parse(source: &str) -> Result<Template, ParseError> {
    let document: Value = serde_json::from_str(source).map_err(|err| {
        Diagnostic::error(format!("invalid JSON document: {err}"))
            .with_code(ErrorCode::E001)
            .with_help("stack templates are JSON objects with a `Resources` section")
    })?;

    let Value::Object(root) = document else {
        return Err(Diagnostic::error("template root is not an object")
            .with_code(ErrorCode::E002)
            .with_path("/")
            .with_help("the top level of a template must be a JSON object")
            .into());
    };

    let mut collector = DiagnosticCollector::new();

    for key in root.keys() {
        if !KNOWN_SECTIONS.contains(&key.as_str()) {
            collector.push(
                Diagnostic::warning(format!("unsupported template section `{key}`"))
                    .with_path(format!("/{key}"))
                    .with_help("the section is ignored"),
            );
        }
    }

    let format_version = string_field(&root, "AWSTemplateFormatVersion", &mut collector);
    let description = string_field(&root, "Description", &mut collector);
    let resources = parse_resources(&root, &mut collector);
    let outputs = parse_outputs(&root, &mut collector);

    debug!(
        resource_count = resources.len(),
        output_count = outputs.len();
        "Template document walked"
    );

    collector.finish(Template::new(
        format_version,
        description,
        resources,
        outputs,
    ))
}

/// Read an optional top-level string field; a wrong-typed value is a warning.
fn string_field(
    root: &Map<String, Value>,
    key: &str,
    collector: &mut DiagnosticCollector,
) -> Option<String> {
    match root.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            collector.push(
                Diagnostic::warning(format!("`{key}` is not a string"))
                    .with_path(format!("/{key}"))
                    .with_help("the field is ignored"),
            );
            None
        }
        None => None,
    }
}

/// Walk the `Resources` section into declarations, in declaration order.
fn parse_resources(
    root: &Map<String, Value>,
    collector: &mut DiagnosticCollector,
) -> IndexMap<String, ResourceDecl> {
    let mut resources = IndexMap::new();

    let section = match root.get("Resources") {
        Some(Value::Object(section)) => section,
        Some(_) => {
            collector.push(
                Diagnostic::error("`Resources` section is not an object")
                    .with_code(ErrorCode::E101)
                    .with_path("/Resources")
                    .with_help("`Resources` maps logical ids to resource declarations"),
            );
            return resources;
        }
        None => {
            collector.push(
                Diagnostic::error("missing `Resources` section")
                    .with_code(ErrorCode::E100)
                    .with_path("/")
                    .with_help("every template must declare a `Resources` object"),
            );
            return resources;
        }
    };

    for (logical_id, declaration) in section {
        let path = format!("/Resources/{logical_id}");

        let Value::Object(declaration) = declaration else {
            collector.push(
                Diagnostic::error(format!(
                    "resource declaration `{logical_id}` is not an object"
                ))
                .with_code(ErrorCode::E102)
                .with_path(path)
                .with_help("a resource declaration is an object with a `Type` field"),
            );
            continue;
        };

        let type_name = match declaration.get("Type") {
            Some(Value::String(type_name)) => type_name.clone(),
            Some(_) => {
                collector.push(
                    Diagnostic::error(format!("resource `{logical_id}` has a non-string `Type`"))
                        .with_code(ErrorCode::E104)
                        .with_path(format!("{path}/Type"))
                        .with_help("`Type` must be a type-name string, e.g. `AWS::SQS::Queue`"),
                );
                continue;
            }
            None => {
                collector.push(
                    Diagnostic::error(format!("resource `{logical_id}` is missing `Type`"))
                        .with_code(ErrorCode::E103)
                        .with_path(path)
                        .with_help("declare a `Type` string, e.g. `AWS::SQS::Queue`"),
                );
                continue;
            }
        };

        let properties = match declaration.get("Properties") {
            Some(Value::Object(properties)) => properties.clone(),
            Some(_) => {
                collector.push(
                    Diagnostic::error(format!(
                        "resource `{logical_id}` has non-object `Properties`"
                    ))
                    .with_code(ErrorCode::E105)
                    .with_path(format!("{path}/Properties"))
                    .with_help("`Properties` must be an object when present"),
                );
                continue;
            }
            None => Properties::new(),
        };

        resources.insert(logical_id.clone(), ResourceDecl::new(type_name, properties));
    }

    resources
}

/// Walk the optional `Outputs` section into declarations, in declaration order.
fn parse_outputs(
    root: &Map<String, Value>,
    collector: &mut DiagnosticCollector,
) -> IndexMap<String, OutputDecl> {
    let mut outputs = IndexMap::new();

    let section = match root.get("Outputs") {
        Some(Value::Object(section)) => section,
        Some(_) => {
            collector.push(
                Diagnostic::error("`Outputs` section is not an object")
                    .with_code(ErrorCode::E200)
                    .with_path("/Outputs")
                    .with_help("`Outputs` maps logical ids to output declarations"),
            );
            return outputs;
        }
        None => return outputs,
    };

    for (logical_id, declaration) in section {
        let path = format!("/Outputs/{logical_id}");

        let Value::Object(declaration) = declaration else {
            collector.push(
                Diagnostic::error(format!(
                    "output declaration `{logical_id}` is not an object"
                ))
                .with_code(ErrorCode::E201)
                .with_path(path)
                .with_help("an output declaration is an object with a `Value` field"),
            );
            continue;
        };

        let Some(value) = declaration.get("Value") else {
            collector.push(
                Diagnostic::error(format!("output `{logical_id}` is missing `Value`"))
                    .with_code(ErrorCode::E202)
                    .with_path(path)
                    .with_help("every output must declare a `Value` expression"),
            );
            continue;
        };

        let description = match declaration.get("Description") {
            Some(Value::String(description)) => Some(description.clone()),
            Some(_) => {
                collector.push(
                    Diagnostic::error(format!(
                        "output `{logical_id}` has a non-string `Description`"
                    ))
                    .with_code(ErrorCode::E203)
                    .with_path(format!("{path}/Description")),
                );
                continue;
            }
            None => None,
        };

        let Some(expr) = classify_expr(value, &format!("{path}/Value"), collector) else {
            continue;
        };

        outputs.insert(logical_id.clone(), OutputDecl::new(expr, description));
    }

    outputs
}

/// Classify an output value into its expression form.
///
/// Intrinsic expressions are single-key objects keyed `Ref` or `Fn::GetAtt`;
/// any other shape is a literal resolving to itself. A single-key intrinsic
/// object with a malformed argument is an error, not a literal.
fn classify_expr(
    value: &Value,
    path: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Expr> {
    let Value::Object(map) = value else {
        return Some(Expr::Literal(value.clone()));
    };
    if map.len() != 1 {
        return Some(Expr::Literal(value.clone()));
    }

    let Some((key, argument)) = map.iter().next() else {
        return Some(Expr::Literal(value.clone()));
    };

    match key.as_str() {
        "Ref" => match argument {
            Value::String(logical_id) => Some(Expr::Ref(logical_id.clone())),
            _ => {
                collector.push(
                    Diagnostic::error("malformed `Ref` argument")
                        .with_code(ErrorCode::E204)
                        .with_path(path)
                        .with_help("`Ref` takes a logical id string"),
                );
                None
            }
        },
        "Fn::GetAtt" => match get_att_argument(argument) {
            Some((logical_id, attribute)) => Some(Expr::get_att(logical_id, attribute)),
            None => {
                collector.push(
                    Diagnostic::error("malformed `Fn::GetAtt` argument")
                        .with_code(ErrorCode::E205)
                        .with_path(path)
                        .with_help("`Fn::GetAtt` takes `[\"LogicalId\", \"AttributeName\"]`"),
                );
                None
            }
        },
        _ => Some(Expr::Literal(value.clone())),
    }
}

/// Extract the `[logical_id, attribute]` pair from an `Fn::GetAtt` argument.
fn get_att_argument(argument: &Value) -> Option<(&str, &str)> {
    let Value::Array(items) = argument else {
        return None;
    };
    match items.as_slice() {
        [Value::String(logical_id), Value::String(attribute)] => {
            Some((logical_id.as_str(), attribute.as_str()))
        }
        _ => None,
    }
}
