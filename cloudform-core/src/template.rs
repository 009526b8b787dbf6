//! Template - A CloudFormation template document
//!
//! Templates keep every section in document order so that loading and
//! re-rendering a template does not shuffle its contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::formatter::FormatConfig;
use crate::intrinsic::{Expr, IntrinsicError};
use crate::resource::{Resource, ResourceEntry, ResourceProperties};
use crate::value::Json;
use crate::yaml;

/// The only template format version CloudFormation has ever published
pub const FORMAT_VERSION: &str = "2010-09-09";

/// Template error
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON template: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML template: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported YAML: {0}")]
    UnsupportedYaml(String),

    #[error("YAML comments would be lost by reformatting; remove them or leave the file as is")]
    CommentsWouldBeLost,

    #[error("Resource type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Invalid properties for {resource_type}: {message}")]
    InvalidProperties {
        resource_type: String,
        message: String,
    },

    #[error("Logical ID '{0}' is already in use")]
    DuplicateLogicalId(String),

    #[error("Resource '{0}' not found")]
    ResourceNotFound(String),

    #[error(transparent)]
    Intrinsic(#[from] IntrinsicError),

    #[error("Failed to render template: {0}")]
    Render(String),
}

/// Serialization format of a template document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    /// JSON templates start with `{`; anything else is read as YAML
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            TemplateFormat::Json
        } else {
            TemplateFormat::Yaml
        }
    }

    /// Guess from a file extension, if it is a known one
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(TemplateFormat::Json),
            "yaml" | "yml" => Some(TemplateFormat::Yaml),
            _ => None,
        }
    }
}

/// A parameter setting that may also be written as a string, e.g.
/// `"NoEcho": "true"` or `"MinLength": "1"`. The written form is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Text(String),
}

impl<T: FromStr + Clone> Lenient<T> {
    /// The setting's value; `None` if the string form does not parse
    pub fn value(&self) -> Option<T> {
        match self {
            Lenient::Typed(v) => Some(v.clone()),
            Lenient::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Typed(value)
    }
}

/// A template parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    #[serde(rename = "Type")]
    pub parameter_type: String,
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    pub default: Option<Json>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "AllowedValues", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Json>>,
    #[serde(rename = "AllowedPattern", skip_serializing_if = "Option::is_none")]
    pub allowed_pattern: Option<String>,
    #[serde(rename = "ConstraintDescription", skip_serializing_if = "Option::is_none")]
    pub constraint_description: Option<String>,
    #[serde(rename = "MinLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Lenient<u32>>,
    #[serde(rename = "MaxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Lenient<u32>>,
    #[serde(rename = "MinValue", skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Lenient<f64>>,
    #[serde(rename = "MaxValue", skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Lenient<f64>>,
    #[serde(rename = "NoEcho", skip_serializing_if = "Option::is_none")]
    pub no_echo: Option<Lenient<bool>>,
}

impl Parameter {
    pub fn new(parameter_type: impl Into<String>) -> Self {
        Self {
            parameter_type: parameter_type.into(),
            ..Default::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<Json>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_allowed_values(mut self, values: Vec<Json>) -> Self {
        self.allowed_values = Some(values);
        self
    }
}

/// A stack output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Value")]
    pub value: Expr,
    #[serde(rename = "Export", skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Output {
    pub fn new(value: impl Into<Expr>) -> Self {
        Self {
            description: None,
            value: value.into(),
            export: None,
            condition: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_export(mut self, name: impl Into<Expr>) -> Self {
        self.export = Some(Export { name: name.into() });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Export {
    #[serde(rename = "Name")]
    pub name: Expr,
}

/// Mapping name -> top level key -> second level key -> value
pub type Mappings = IndexMap<String, IndexMap<String, IndexMap<String, Json>>>;

/// A CloudFormation template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion", skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,

    /// Macro names, e.g. `AWS::Serverless-2016-10-31`
    #[serde(rename = "Transform", skip_serializing_if = "Option::is_none")]
    pub transform: Option<Json>,

    #[serde(rename = "Parameters", default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(rename = "Rules", default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, Json>,

    #[serde(rename = "Mappings", default, skip_serializing_if = "IndexMap::is_empty")]
    pub mappings: Mappings,

    #[serde(
        rename = "Conditions",
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_conditions"
    )]
    pub conditions: IndexMap<String, Expr>,

    #[serde(rename = "Resources")]
    pub resources: IndexMap<String, ResourceEntry>,

    #[serde(rename = "Outputs", default, skip_serializing_if = "IndexMap::is_empty")]
    pub outputs: IndexMap<String, Output>,
}

fn deserialize_conditions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, Expr>, D::Error> {
    let raw = IndexMap::<String, Json>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, value)| {
            Expr::from_condition_json(&value)
                .map(|expr| (name, expr))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

impl Template {
    /// Create an empty template with the current format version
    pub fn new() -> Self {
        Self {
            format_version: Some(FORMAT_VERSION.to_string()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse a JSON template
    pub fn from_json_str(content: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML template, expanding short-form intrinsic tags (`!Ref`, `!Sub`, ...)
    pub fn from_yaml_str(content: &str) -> Result<Self, TemplateError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(content)?;
        let json = yaml::yaml_to_json(&doc)?;
        Ok(serde_json::from_value(json)?)
    }

    /// Parse a template in either format
    pub fn from_str_detect(content: &str) -> Result<Self, TemplateError> {
        match TemplateFormat::detect(content) {
            TemplateFormat::Json => Self::from_json_str(content),
            TemplateFormat::Yaml => Self::from_yaml_str(content),
        }
    }

    /// Read and parse a template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading template from {}", path.display());
        Self::from_str_detect(&content)
    }

    /// Render as JSON with the configured indentation
    pub fn to_json_string(&self, config: &FormatConfig) -> Result<String, TemplateError> {
        let indent = config.indent_string();
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        let mut out = String::from_utf8(buf).map_err(|e| TemplateError::Render(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    /// Render as YAML (long-form intrinsic functions)
    pub fn to_yaml_string(&self) -> Result<String, TemplateError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn render(&self, format: TemplateFormat, config: &FormatConfig) -> Result<String, TemplateError> {
        match format {
            TemplateFormat::Json => self.to_json_string(config),
            TemplateFormat::Yaml => self.to_yaml_string(),
        }
    }

    /// Returns true if `name` is declared as a parameter or a resource
    pub fn is_logical_id(&self, name: &str) -> bool {
        self.parameters.contains_key(name) || self.resources.contains_key(name)
    }

    /// Add a typed resource
    pub fn add_resource<P: ResourceProperties>(
        &mut self,
        logical_id: impl Into<String>,
        resource: Resource<P>,
    ) -> Result<&mut Self, TemplateError> {
        let entry = ResourceEntry::from_typed(&resource)?;
        self.add_entry(logical_id, entry)
    }

    /// Add an untyped resource entry
    pub fn add_entry(
        &mut self,
        logical_id: impl Into<String>,
        entry: ResourceEntry,
    ) -> Result<&mut Self, TemplateError> {
        let logical_id = logical_id.into();
        if self.is_logical_id(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId(logical_id));
        }
        self.resources.insert(logical_id, entry);
        Ok(self)
    }

    pub fn add_parameter(
        &mut self,
        logical_id: impl Into<String>,
        parameter: Parameter,
    ) -> Result<&mut Self, TemplateError> {
        let logical_id = logical_id.into();
        if self.is_logical_id(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId(logical_id));
        }
        self.parameters.insert(logical_id, parameter);
        Ok(self)
    }

    pub fn add_output(&mut self, name: impl Into<String>, output: Output) -> &mut Self {
        self.outputs.insert(name.into(), output);
        self
    }

    pub fn add_condition(&mut self, name: impl Into<String>, condition: Expr) -> &mut Self {
        self.conditions.insert(name.into(), condition);
        self
    }

    /// Read a resource back as type `P`
    pub fn resource<P: ResourceProperties>(&self, logical_id: &str) -> Result<Resource<P>, TemplateError> {
        self.resources
            .get(logical_id)
            .ok_or_else(|| TemplateError::ResourceNotFound(logical_id.to_string()))?
            .to_typed()
    }

    /// Logical IDs of all resources of the given type, in template order
    pub fn resources_of_type<'a>(&'a self, resource_type: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.resources
            .iter()
            .filter(move |(_, entry)| entry.resource_type == resource_type)
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsic::Intrinsic;
    use crate::value::Value;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Queue {
        #[serde(rename = "QueueName", skip_serializing_if = "Option::is_none")]
        queue_name: Option<Value<String>>,
        #[serde(rename = "DelaySeconds", skip_serializing_if = "Option::is_none")]
        delay_seconds: Option<Value<i64>>,
    }

    impl ResourceProperties for Queue {
        const TYPE: &'static str = "AWS::SQS::Queue";
    }

    const YAML: &str = r#"
AWSTemplateFormatVersion: "2010-09-09"
Description: Queue stack
Parameters:
  Env:
    Type: String
    AllowedValues: [dev, prod]
    Default: dev
Conditions:
  IsProd: !Equals [!Ref Env, prod]
Resources:
  Queue:
    Type: AWS::SQS::Queue
    Properties:
      QueueName: !Sub "${AWS::StackName}-${Env}"
      DelaySeconds: !If [IsProd, 0, 5]
Outputs:
  QueueArn:
    Value: !GetAtt Queue.Arn
    Export:
      Name: !Sub "${AWS::StackName}-QueueArn"
"#;

    #[test]
    fn load_yaml_with_short_forms() {
        let template = Template::from_str_detect(YAML).unwrap();
        assert_eq!(template.description.as_deref(), Some("Queue stack"));
        assert_eq!(template.parameters["Env"].default, Some(json!("dev")));

        let queue: Resource<Queue> = template.resource("Queue").unwrap();
        assert!(queue.properties.queue_name.unwrap().is_intrinsic());
        assert!(matches!(
            queue.properties.delay_seconds.unwrap().as_intrinsic(),
            Some(Intrinsic::If { .. })
        ));

        assert_eq!(
            template.outputs["QueueArn"].value,
            Expr::from(Intrinsic::GetAtt {
                resource: "Queue".to_string(),
                attribute: "Arn".to_string(),
            })
        );
    }

    #[test]
    fn json_and_yaml_load_to_the_same_template() {
        let from_yaml = Template::from_yaml_str(YAML).unwrap();
        let json = from_yaml.to_json_string(&FormatConfig::default()).unwrap();
        let from_json = Template::from_str_detect(&json).unwrap();
        assert_eq!(from_yaml, from_json);

        let yaml = from_json.to_yaml_string().unwrap();
        assert_eq!(Template::from_yaml_str(&yaml).unwrap(), from_yaml);
    }

    #[test]
    fn resources_section_is_required() {
        let err = Template::from_json_str(r#"{"Description": "empty"}"#).unwrap_err();
        assert!(err.to_string().contains("Resources"));
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let err = Template::from_json_str(r#"{"Resources": {}, "Resorces": {}}"#).unwrap_err();
        assert!(matches!(err, TemplateError::Json(_)));
    }

    #[test]
    fn build_template_with_typed_resources() {
        let mut template = Template::new().with_description("built in code");
        template
            .add_parameter("Env", Parameter::new("String").with_default("dev"))
            .unwrap()
            .add_resource(
                "Queue",
                Resource::new(Queue {
                    queue_name: Some(Intrinsic::Ref("Env".to_string()).into()),
                    delay_seconds: Some(Value::literal(5)),
                }),
            )
            .unwrap();
        template.add_output(
            "QueueUrl",
            Output::new(Intrinsic::Ref("Queue".to_string())).with_export("queue-url"),
        );

        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Description": "built in code",
                "Parameters": {"Env": {"Type": "String", "Default": "dev"}},
                "Resources": {
                    "Queue": {
                        "Type": "AWS::SQS::Queue",
                        "Properties": {"QueueName": {"Ref": "Env"}, "DelaySeconds": 5}
                    }
                },
                "Outputs": {
                    "QueueUrl": {"Value": {"Ref": "Queue"}, "Export": {"Name": "queue-url"}}
                }
            })
        );
        assert_eq!(template.resources_of_type("AWS::SQS::Queue").collect::<Vec<_>>(), vec!["Queue"]);
    }

    #[test]
    fn parameter_settings_accept_string_forms() {
        let source = r#"{
            "Parameters": {
                "Password": {"Type": "String", "NoEcho": "true", "MinLength": "1", "MaxLength": 41},
                "Port": {"Type": "Number", "MinValue": "1024", "MaxValue": 65535.5}
            },
            "Resources": {"Topic": {"Type": "AWS::SNS::Topic"}}
        }"#;
        let template = Template::from_json_str(source).unwrap();

        let password = &template.parameters["Password"];
        assert_eq!(password.no_echo, Some(Lenient::Text("true".to_string())));
        assert_eq!(password.no_echo.as_ref().and_then(Lenient::value), Some(true));
        assert_eq!(password.min_length.as_ref().and_then(Lenient::value), Some(1));
        assert_eq!(password.max_length, Some(Lenient::Typed(41)));
        let port = &template.parameters["Port"];
        assert_eq!(port.min_value.as_ref().and_then(Lenient::value), Some(1024.0));
        assert_eq!(port.max_value.as_ref().and_then(Lenient::value), Some(65535.5));

        // Written forms survive re-rendering
        let rendered = serde_json::to_value(&template).unwrap();
        assert_eq!(
            rendered["Parameters"]["Password"],
            json!({"Type": "String", "NoEcho": "true", "MinLength": "1", "MaxLength": 41})
        );
    }

    #[test]
    fn duplicate_logical_ids_are_rejected() {
        let mut template = Template::new();
        template.add_parameter("Queue", Parameter::new("String")).unwrap();
        let err = template
            .add_resource("Queue", Resource::new(Queue::default()))
            .unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateLogicalId(id) if id == "Queue"));
    }

    #[test]
    fn reading_resource_with_wrong_type_fails() {
        let mut template = Template::new();
        template
            .add_entry("Topic", ResourceEntry::new("AWS::SNS::Topic"))
            .unwrap();
        assert!(matches!(
            template.resource::<Queue>("Topic"),
            Err(TemplateError::TypeMismatch { .. })
        ));
        assert!(matches!(
            template.resource::<Queue>("Missing"),
            Err(TemplateError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn json_indentation_follows_config() {
        let mut template = Template::new();
        template
            .add_entry("Topic", ResourceEntry::new("AWS::SNS::Topic"))
            .unwrap();
        let config = FormatConfig {
            indent_size: 4,
            ..Default::default()
        };
        let rendered = template.to_json_string(&config).unwrap();
        assert!(rendered.contains("\n    \"Resources\""));
        assert!(rendered.ends_with("}\n"));
    }
}
