//! Lint - Structural checks on a template
//!
//! Lint never stops at the first problem: every finding is collected as a
//! [`Diagnostic`] so that callers can report them all at once.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::graph::DependencyGraph;
use crate::intrinsic::{Expr, Intrinsic, Reference, is_pseudo_parameter};
use crate::template::{Lenient, Parameter, Template};
use crate::value::Json;

/// Maximum counts accepted by CloudFormation
pub const MAX_RESOURCES: usize = 500;
pub const MAX_PARAMETERS: usize = 200;
pub const MAX_OUTPUTS: usize = 200;
pub const MAX_MAPPINGS: usize = 200;
pub const MAX_LOGICAL_ID_LENGTH: usize = 255;

const BASIC_PARAMETER_TYPES: &[&str] = &["String", "Number", "List<Number>", "CommaDelimitedList"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding, located by a dotted template path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// e.g. "Resources.Queue.Properties"
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

/// Where an expression appears; conditions may only reference parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Condition,
    Value,
}

/// Run every structural check on a template
pub fn lint(template: &Template) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    check_limits(template, &mut out);

    for (id, parameter) in &template.parameters {
        let path = format!("Parameters.{}", id);
        check_logical_id(id, &path, &mut out);
        check_parameter(parameter, &path, &mut out);
    }

    for (name, condition) in &template.conditions {
        let path = format!("Conditions.{}", name);
        check_expr(template, condition, &path, Scope::Condition, &mut out);
    }

    if template.resources.is_empty() {
        out.push(Diagnostic::error("Resources", "Template must declare at least one resource"));
    }

    for (id, entry) in &template.resources {
        let path = format!("Resources.{}", id);
        check_logical_id(id, &path, &mut out);

        if !is_valid_resource_type(&entry.resource_type) {
            out.push(Diagnostic::error(
                format!("{}.Type", path),
                format!("Invalid resource type '{}'", entry.resource_type),
            ));
        }

        for key in entry.unknown.keys() {
            out.push(Diagnostic::error(
                format!("{}.{}", path, key),
                format!("Unknown resource attribute '{}'", key),
            ));
        }

        for target in &entry.attributes.depends_on {
            if target == id {
                out.push(Diagnostic::error(
                    format!("{}.DependsOn", path),
                    "Resource cannot depend on itself",
                ));
            } else if !template.resources.contains_key(target) {
                out.push(Diagnostic::error(
                    format!("{}.DependsOn", path),
                    format!("Unknown resource '{}'", target),
                ));
            }
        }

        if let Some(condition) = &entry.attributes.condition {
            check_condition_name(template, condition, &format!("{}.Condition", path), &mut out);
        }

        if let Some(properties) = &entry.properties {
            check_json(template, properties, &format!("{}.Properties", path), &mut out);
        }
    }

    for (name, output) in &template.outputs {
        let path = format!("Outputs.{}", name);
        check_logical_id(name, &path, &mut out);
        check_expr(template, &output.value, &format!("{}.Value", path), Scope::Value, &mut out);
        if let Some(export) = &output.export {
            check_expr(template, &export.name, &format!("{}.Export.Name", path), Scope::Value, &mut out);
        }
        if let Some(condition) = &output.condition {
            check_condition_name(template, condition, &format!("{}.Condition", path), &mut out);
        }
    }

    if let Some(cycle) = DependencyGraph::from_template(template).find_cycle() {
        out.push(Diagnostic::error("Resources", cycle.to_string()));
    }

    debug!("Lint finished with {} diagnostics", out.len());
    out
}

fn check_limits(template: &Template, out: &mut Vec<Diagnostic>) {
    let limits = [
        ("Resources", template.resources.len(), MAX_RESOURCES),
        ("Parameters", template.parameters.len(), MAX_PARAMETERS),
        ("Outputs", template.outputs.len(), MAX_OUTPUTS),
        ("Mappings", template.mappings.len(), MAX_MAPPINGS),
    ];
    for (section, count, max) in limits {
        if count > max {
            out.push(Diagnostic::error(
                section,
                format!("{} entries exceed the limit of {}", count, max),
            ));
        }
    }
}

/// Logical IDs must be alphanumeric (A-Za-z0-9)
pub fn is_valid_logical_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_LOGICAL_ID_LENGTH
        && id.chars().all(|c| c.is_ascii_alphanumeric())
}

fn check_logical_id(id: &str, path: &str, out: &mut Vec<Diagnostic>) {
    if !is_valid_logical_id(id) {
        out.push(Diagnostic::error(
            path,
            format!(
                "Logical ID '{}' must be alphanumeric and at most {} characters",
                id, MAX_LOGICAL_ID_LENGTH
            ),
        ));
    }
}

/// `Provider::Service::Resource`, a registry module (`...::MODULE`) or `Custom::Name`
pub fn is_valid_resource_type(resource_type: &str) -> bool {
    let parts: Vec<&str> = resource_type.split("::").collect();
    if parts.iter().any(|p| p.is_empty()) {
        return false;
    }
    match parts.as_slice() {
        ["Custom", _] => true,
        [_, _, _] => true,
        [_, _, _, "MODULE"] => true,
        _ => false,
    }
}

pub fn is_known_parameter_type(parameter_type: &str) -> bool {
    BASIC_PARAMETER_TYPES.contains(&parameter_type)
        || parameter_type.starts_with("AWS::")
        || parameter_type.starts_with("List<AWS::")
}

fn check_parameter(parameter: &Parameter, path: &str, out: &mut Vec<Diagnostic>) {
    if !is_known_parameter_type(&parameter.parameter_type) {
        out.push(Diagnostic::error(
            format!("{}.Type", path),
            format!("Unknown parameter type '{}'", parameter.parameter_type),
        ));
    }

    if let (Some(default), Some(allowed)) = (&parameter.default, &parameter.allowed_values) {
        let default = plain_string(default);
        if !allowed.iter().any(|v| plain_string(v) == default) {
            out.push(Diagnostic::error(
                format!("{}.Default", path),
                format!("Default '{}' is not one of the allowed values", default),
            ));
        }
    }

    let min_length = setting(&parameter.min_length, "MinLength", path, out);
    let max_length = setting(&parameter.max_length, "MaxLength", path, out);
    let min_value = setting(&parameter.min_value, "MinValue", path, out);
    let max_value = setting(&parameter.max_value, "MaxValue", path, out);
    setting(&parameter.no_echo, "NoEcho", path, out);

    if let (Some(min), Some(max)) = (min_length, max_length)
        && min > max
    {
        out.push(Diagnostic::error(path, "MinLength is greater than MaxLength"));
    }
    if let (Some(min), Some(max)) = (min_value, max_value)
        && min > max
    {
        out.push(Diagnostic::error(path, "MinValue is greater than MaxValue"));
    }
}

/// Value of a parameter setting; a string form that does not parse is an error
fn setting<T: FromStr + Clone>(
    value: &Option<Lenient<T>>,
    name: &str,
    path: &str,
    out: &mut Vec<Diagnostic>,
) -> Option<T> {
    let value = value.as_ref()?;
    let parsed = value.value();
    if parsed.is_none()
        && let Lenient::Text(text) = value
    {
        out.push(Diagnostic::error(
            format!("{}.{}", path, name),
            format!("'{}' is not a valid {} value", text, name),
        ));
    }
    parsed
}

/// Scalars compare by their textual form, as CloudFormation passes parameters as strings
fn plain_string(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn check_condition_name(template: &Template, name: &str, path: &str, out: &mut Vec<Diagnostic>) {
    if !template.conditions.contains_key(name) {
        out.push(Diagnostic::error(path, format!("Unknown condition '{}'", name)));
    }
}

fn check_json(template: &Template, value: &Json, path: &str, out: &mut Vec<Diagnostic>) {
    match Expr::from_json(value) {
        Ok(expr) => check_expr(template, &expr, path, Scope::Value, out),
        Err(e) => out.push(Diagnostic::error(path, e.to_string())),
    }
}

fn check_expr(template: &Template, expr: &Expr, path: &str, scope: Scope, out: &mut Vec<Diagnostic>) {
    expr.walk(&mut |intrinsic| {
        if let Intrinsic::Other { function, .. } = intrinsic {
            out.push(Diagnostic::warning(
                path,
                format!("Unrecognised intrinsic function '{}'", function),
            ));
        }
    });

    for reference in expr.references() {
        if let Some(message) = unresolved(template, &reference, scope) {
            out.push(Diagnostic::error(path, message));
        }
    }
}

/// Returns a message if `reference` cannot be resolved from `scope`
fn unresolved(template: &Template, reference: &Reference, scope: Scope) -> Option<String> {
    match reference {
        Reference::Ref(name) => {
            if is_pseudo_parameter(name) || template.parameters.contains_key(name) {
                None
            } else if template.resources.contains_key(name) {
                (scope == Scope::Condition).then(|| {
                    format!("Conditions can only reference parameters, not resource '{}'", name)
                })
            } else {
                Some(format!("Unresolved reference '{}'", name))
            }
        }
        Reference::GetAtt { resource, .. } => {
            if !template.resources.contains_key(resource) {
                Some(format!("Fn::GetAtt references unknown resource '{}'", resource))
            } else if scope == Scope::Condition {
                Some(format!(
                    "Conditions can only reference parameters, not resource '{}'",
                    resource
                ))
            } else {
                None
            }
        }
        Reference::Condition(name) => (!template.conditions.contains_key(name))
            .then(|| format!("Unknown condition '{}'", name)),
        Reference::Mapping(name) => (!template.mappings.contains_key(name))
            .then(|| format!("Unknown mapping '{}'", name)),
    }
}
