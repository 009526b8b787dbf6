//! CloudFormation Schema to cloudform Resource Module Code Generator
//!
//! This tool generates the typed property structs of cloudform-resources
//! from AWS CloudFormation registry schemas.
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type --type RESOURCE \
//!     --type-name AWS::SQS::Queue --query 'Schema' --output text | \
//!     cloudform-codegen -o cloudform-resources/src/generated/
//!
//!   # Generate from file
//!   cloudform-codegen --file schema.json -o sqs_queue.rs

use anyhow::{Context, Result, bail};
use clap::Parser;
use heck::{ToSnakeCase, ToUpperCamelCase};
use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::{self, Read};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "cloudform-codegen")]
#[command(about = "Generate cloudform resource modules from CloudFormation schemas")]
struct Args {
    /// CloudFormation type name (e.g., AWS::SQS::Queue); defaults to the schema's typeName
    #[arg(long)]
    type_name: Option<String>,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file or directory (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

/// CloudFormation Resource Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnSchema {
    type_name: String,
    description: Option<String>,
    properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    read_only_properties: Vec<String>,
    #[serde(default)]
    create_only_properties: Vec<String>,
    #[serde(default)]
    definitions: BTreeMap<String, CfnProperty>,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    /// A single JSON type; unions such as `["object", "string"]` have none
    fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) if v.len() == 1 => Some(v[0].as_str()),
            TypeValue::Multiple(_) => None,
        }
    }
}

/// A property or a definition; both share the JSON Schema shape
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnProperty {
    #[serde(rename = "type")]
    prop_type: Option<TypeValue>,
    description: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<serde_json::Value>>,
    items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    ref_path: Option<String>,
    properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    required: Vec<String>,
}

impl CfnProperty {
    fn is_struct(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let args = Args::parse();

    // Read schema JSON
    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    // Parse schema
    let schema: CfnSchema =
        serde_json::from_str(&schema_json).context("Failed to parse CloudFormation schema")?;

    let type_name = match &args.type_name {
        Some(name) => {
            if *name != schema.type_name {
                warn!(
                    "--type-name {} overrides schema typeName {}",
                    name, schema.type_name
                );
            }
            name.clone()
        }
        None => schema.type_name.clone(),
    };

    // Generate code
    let code = generate_module(&schema, &type_name)
        .with_context(|| format!("Failed to generate module for {}", type_name))?;

    // Output
    if let Some(output) = &args.output {
        let output_path = if Path::new(output).is_dir() {
            Path::new(output).join(format!("{}.rs", module_name(&type_name)?))
        } else {
            Path::new(output).to_path_buf()
        };
        std::fs::write(&output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path.display()))?;
        eprintln!("Generated: {}", output_path.display());
    } else {
        print!("{}", code);
    }

    Ok(())
}

/// Split AWS::SQS::Queue into ("SQS", "Queue")
fn split_type_name(type_name: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = type_name.split("::").collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        bail!("Invalid type name format: {}", type_name);
    }
    Ok((parts[1], parts[2]))
}

/// Module file name: AWS::AppSync::DataSource -> appsync_data_source
fn module_name(type_name: &str) -> Result<String> {
    let (service, resource) = split_type_name(type_name)?;
    Ok(format!(
        "{}_{}",
        service.to_lowercase(),
        resource.to_snake_case()
    ))
}

fn doc_url(type_name: &str) -> Result<String> {
    let (service, resource) = split_type_name(type_name)?;
    Ok(format!(
        "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-{}-{}.html",
        service.to_lowercase(),
        resource.to_lowercase()
    ))
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "yield",
];

/// Rust field name for a CloudFormation property name
fn field_ident(prop_name: &str) -> String {
    let name = prop_name.to_snake_case();
    if RUST_KEYWORDS.contains(&name.as_str()) {
        format!("r#{}", name)
    } else {
        name
    }
}

/// Struct name for a definition; names that already are identifiers are kept
/// as written so that e.g. `DynamoDBConfig` is not turned into `DynamoDbConfig`
fn type_ident(name: &str) -> String {
    let is_ident = name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric());
    if is_ident {
        name.to_string()
    } else {
        name.to_upper_camel_case()
    }
}

/// Check if a string looks like a property name (CamelCase or PascalCase)
/// rather than an enum value (lowercase, kebab-case, or UPPER_CASE)
fn looks_like_property_name(s: &str) -> bool {
    let Some(first_char) = s.chars().next() else {
        return false;
    };
    // Property names start with uppercase and contain mixed case,
    // e.g. "QueueName", "KmsKeyId"
    first_char.is_uppercase() && s.chars().any(|c| c.is_lowercase())
}

/// Extract enum values from description text.
/// Looks for patterns like ``value`` (double backticks) which CloudFormation uses
/// to indicate allowed values in descriptions.
fn extract_enum_from_description(description: &str) -> Option<Vec<String>> {
    let re = Regex::new(r"``([^`]+)``").ok()?;
    let mut seen = HashSet::new();
    let values: Vec<String> = re
        .captures_iter(description)
        .map(|cap| cap[1].to_string())
        .filter(|v| !looks_like_property_name(v))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    // A single value is a mention, not an enumeration
    (values.len() >= 2).then_some(values)
}

/// First line of a description, whitespace-collapsed and truncated
fn summarize(description: &str) -> String {
    let first_line = description.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let collapsed = first_line
        .replace("``", "`")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.chars().count() > 200 {
        let truncated: String = collapsed.chars().take(200).collect();
        format!("{}...", truncated.trim_end())
    } else {
        collapsed
    }
}

fn allowed_values(prop: &CfnProperty) -> Option<Vec<String>> {
    if let Some(values) = &prop.enum_values {
        return Some(
            values
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        );
    }
    match prop.prop_type.as_ref().and_then(|t| t.as_str()) {
        Some("string") => prop
            .description
            .as_deref()
            .and_then(extract_enum_from_description),
        _ => None,
    }
}

struct Generator<'a> {
    schema: &'a CfnSchema,
}

impl<'a> Generator<'a> {
    /// Resolve `#/definitions/Name`
    fn definition(&self, ref_path: &str) -> Result<(&'a str, &'a CfnProperty)> {
        let name = ref_path
            .strip_prefix("#/definitions/")
            .with_context(|| format!("Unsupported $ref: {}", ref_path))?;
        self.schema
            .definitions
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .with_context(|| format!("Unresolvable $ref: {}", ref_path))
    }

    /// Rust type of a property, without the `Option` wrapper
    fn rust_type(&self, prop: &CfnProperty) -> Result<String> {
        if let Some(ref_path) = &prop.ref_path {
            let (name, definition) = self.definition(ref_path)?;
            if name == "Tag" {
                return Ok("Tag".to_string());
            }
            if definition.is_struct() {
                return Ok(type_ident(name));
            }
            // Aliases such as `"Tags": {"type": "array", ...}` are inlined
            return self.rust_type(definition);
        }

        let ty = match prop.prop_type.as_ref().and_then(|t| t.as_str()) {
            Some("string") => "Value<String>".to_string(),
            Some("integer") => "Value<i64>".to_string(),
            Some("number") => "Value<f64>".to_string(),
            Some("boolean") => "Value<bool>".to_string(),
            Some("array") => match &prop.items {
                Some(items) => format!("List<{}>", self.rust_type(items)?),
                None => "List<Json>".to_string(),
            },
            Some("object") => {
                if prop.is_struct() {
                    debug!("Inline object mapped to Json");
                }
                "Json".to_string()
            }
            _ => "Json".to_string(),
        };
        Ok(ty)
    }

    /// Definitions reachable from the writable top-level properties, sorted
    fn reachable_definitions(&self, read_only: &HashSet<&str>) -> Result<BTreeSet<&'a str>> {
        let mut found = BTreeSet::new();
        let mut pending: Vec<&CfnProperty> = self
            .schema
            .properties
            .iter()
            .filter(|(name, _)| !read_only.contains(name.as_str()))
            .map(|(_, prop)| prop)
            .collect();

        while let Some(prop) = pending.pop() {
            if let Some(items) = &prop.items {
                pending.push(items);
            }
            if let Some(ref_path) = &prop.ref_path {
                let (name, definition) = self.definition(ref_path)?;
                if name == "Tag" {
                    continue;
                }
                if !definition.is_struct() {
                    pending.push(definition);
                } else if found.insert(name) {
                    pending.extend(definition.properties.iter().flat_map(|p| p.values()));
                }
            }
        }
        Ok(found)
    }

    /// Definition a property embeds by value, following aliases. `List`
    /// and `Json` fields embed nothing.
    fn embedded_definition(&self, prop: &CfnProperty) -> Option<&'a str> {
        let (name, definition) = self.definition(prop.ref_path.as_deref()?).ok()?;
        if name == "Tag" {
            None
        } else if definition.is_struct() {
            Some(name)
        } else {
            self.embedded_definition(definition)
        }
    }

    /// Returns true if `from` embeds `to` by value, directly or through
    /// other definitions
    fn embeds(&self, from: &str, to: &str, visited: &mut HashSet<&'a str>) -> bool {
        let Some((from, definition)) = self.schema.definitions.get_key_value(from) else {
            return false;
        };
        if !visited.insert(from.as_str()) {
            return false;
        }
        definition
            .properties
            .iter()
            .flat_map(|p| p.values())
            .filter_map(|prop| self.embedded_definition(prop))
            .any(|next| next == to || self.embeds(next, to, visited))
    }

    /// `owner` is the definition the field belongs to; `None` for the
    /// resource struct, which no definition can embed
    fn field(
        &self,
        code: &mut String,
        owner: Option<&str>,
        prop_name: &str,
        prop: &CfnProperty,
        required: bool,
        update: Option<&str>,
    ) -> Result<()> {
        let mut ty = self.rust_type(prop)?;
        if let (Some(owner), Some(target)) = (owner, self.embedded_definition(prop))
            && (target == owner || self.embeds(target, owner, &mut HashSet::new()))
        {
            ty = format!("Box<{}>", ty);
        }

        let mut doc = Vec::new();
        if let Some(desc) = &prop.description {
            doc.push(summarize(desc));
        }
        if let Some(values) = allowed_values(prop) {
            let values: Vec<String> = values.iter().map(|v| format!("`{}`", v)).collect();
            doc.push(format!("Allowed values: {}", values.join(" | ")));
        }
        let required_text = if required { "Yes" } else { "No" };
        doc.push(match update {
            Some(update) => format!("Required: {}. Update requires: {}.", required_text, update),
            None => format!("Required: {}.", required_text),
        });

        code.push_str(&format!("    /// {}\n", doc.join("\n    ///\n    /// ")));
        if required {
            code.push_str(&format!("    #[serde(rename = \"{}\")]\n", prop_name));
            code.push_str(&format!("    pub {}: {},\n", field_ident(prop_name), ty));
        } else {
            code.push_str(&format!(
                "    #[serde(rename = \"{}\", skip_serializing_if = \"Option::is_none\")]\n",
                prop_name
            ));
            code.push_str(&format!(
                "    pub {}: Option<{}>,\n",
                field_ident(prop_name),
                ty
            ));
        }
        Ok(())
    }
}

fn struct_header(code: &mut String, doc: &[String], name: &str) {
    for (i, line) in doc.iter().enumerate() {
        if i > 0 {
            code.push_str("///\n");
        }
        code.push_str(&format!("/// {}\n", line));
    }
    code.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
    code.push_str("#[serde(deny_unknown_fields)]\n");
    code.push_str(&format!("pub struct {} {{\n", name));
}

fn generate_module(schema: &CfnSchema, type_name: &str) -> Result<String> {
    let (_, resource) = split_type_name(type_name)?;
    let resource_struct = type_ident(resource);
    let generator = Generator { schema };

    let read_only: HashSet<&str> = schema
        .read_only_properties
        .iter()
        .map(|p| p.trim_start_matches("/properties/"))
        .collect();
    let create_only: HashSet<&str> = schema
        .create_only_properties
        .iter()
        .map(|p| p.trim_start_matches("/properties/"))
        .collect();
    let required: HashSet<&str> = schema.required.iter().map(String::as_str).collect();

    let mut body = String::new();

    // Resource properties struct
    let mut doc = Vec::new();
    if let Some(desc) = &schema.description {
        doc.push(summarize(desc));
    }
    doc.push(format!("See <{}>", doc_url(type_name)?));
    struct_header(&mut body, &doc, &resource_struct);

    let mut first = true;
    for (prop_name, prop) in &schema.properties {
        if read_only.contains(prop_name.as_str()) {
            debug!("Skipping read-only property {}", prop_name);
            continue;
        }
        if !first {
            body.push('\n');
        }
        first = false;
        let update = if create_only.contains(prop_name.as_str()) {
            "Replacement"
        } else {
            "No interruption"
        };
        generator.field(
            &mut body,
            None,
            prop_name,
            prop,
            required.contains(prop_name.as_str()),
            Some(update),
        )?;
    }
    body.push_str("}\n\n");

    body.push_str(&format!(
        "impl ResourceProperties for {} {{\n    const TYPE: &'static str = \"{}\";\n}}\n",
        resource_struct, type_name
    ));

    // Property bags
    for name in generator.reachable_definitions(&read_only)? {
        let (_, definition) = generator.definition(&format!("#/definitions/{}", name))?;
        let struct_name = type_ident(name);
        let doc = vec![
            definition
                .description
                .as_deref()
                .map(summarize)
                .unwrap_or_else(|| format!("{} property type", struct_name)),
        ];
        body.push('\n');
        struct_header(&mut body, &doc, &struct_name);

        let bag_required: HashSet<&str> = definition.required.iter().map(String::as_str).collect();
        let mut first = true;
        for (prop_name, prop) in definition.properties.iter().flatten() {
            if !first {
                body.push('\n');
            }
            first = false;
            generator.field(
                &mut body,
                Some(name),
                prop_name,
                prop,
                bag_required.contains(prop_name.as_str()),
                None,
            )?;
        }
        body.push_str("}\n");
    }

    // Imports depend on what the fields use
    let value_imports: Vec<&str> = [
        ("Json", body.contains("Json>") || body.contains(": Json,")),
        ("List", body.contains("List<")),
        ("Tag", body.contains("<Tag>") || body.contains(": Tag,")),
        ("Value", body.contains("Value<")),
    ]
    .into_iter()
    .filter(|(_, used)| *used)
    .map(|(name, _)| name)
    .collect();

    let mut code = format!(
        "//! {type_name} property types\n\
         //!\n\
         //! Auto-generated from CloudFormation schema: {type_name}\n\
         //!\n\
         //! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen\n\n\
         use cloudform_core::resource::ResourceProperties;\n"
    );
    match value_imports.as_slice() {
        [] => {}
        [single] => code.push_str(&format!("use cloudform_core::value::{};\n", single)),
        many => code.push_str(&format!(
            "use cloudform_core::value::{{{}}};\n",
            many.join(", ")
        )),
    }
    code.push_str("use serde::{Deserialize, Serialize};\n\n");
    code.push_str(&body);

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> CfnSchema {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_looks_like_property_name() {
        assert!(looks_like_property_name("QueueName"));
        assert!(looks_like_property_name("KmsKeyId"));

        assert!(!looks_like_property_name("perQueue"));
        assert!(!looks_like_property_name("messageGroup"));
        assert!(!looks_like_property_name(""));
        assert!(!looks_like_property_name("ENABLED"));
    }

    #[test]
    fn test_extract_enum_from_description() {
        let description = r#"Specifies whether message deduplication occurs at the message group or queue level.
  +  ``messageGroup``: deduplication per message group.
  +  ``queue``: deduplication per queue.
 Updating ``DeduplicationScope`` requires no interruption."#;
        assert_eq!(
            extract_enum_from_description(description).unwrap(),
            vec!["messageGroup", "queue"]
        );

        assert!(extract_enum_from_description("Set to ``true`` to enable.").is_none());
        assert!(extract_enum_from_description("No special formatting.").is_none());
        assert_eq!(
            extract_enum_from_description("Use ``on`` or ``off``. When ``on`` is set...").unwrap(),
            vec!["on", "off"]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(module_name("AWS::AppSync::DataSource").unwrap(), "appsync_data_source");
        assert_eq!(module_name("AWS::EKS::Nodegroup").unwrap(), "eks_nodegroup");
        assert!(module_name("AWS::SQS").is_err());
        assert_eq!(field_ident("SizeInGB"), "size_in_gb");
        assert_eq!(field_ident("DynamoDBConfig"), "dynamo_db_config");
        assert_eq!(field_ident("Type"), "r#type");
        assert_eq!(type_ident("DynamoDBConfig"), "DynamoDBConfig");
        assert_eq!(type_ident("port_range"), "PortRange");
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize("The ``ENABLED``  state.\nMore text."), "The `ENABLED` state.");
        let long = "word ".repeat(60);
        assert!(summarize(&long).ends_with("..."));
    }

    #[test]
    fn test_generate_fields() {
        let schema = schema(json!({
            "typeName": "AWS::Demo::Widget",
            "description": "A demo widget.",
            "properties": {
                "Name": {"type": "string", "description": "The widget name."},
                "Size": {"type": "integer"},
                "Mode": {"type": "string", "enum": ["FAST", "SLOW"]},
                "Arn": {"type": "string"},
                "Policy": {"type": ["object", "string"]},
                "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
                "Settings": {"$ref": "#/definitions/Settings"}
            },
            "definitions": {
                "Tag": {
                    "type": "object",
                    "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}}
                },
                "Settings": {
                    "type": "object",
                    "description": "Widget settings.",
                    "properties": {
                        "Ratio": {"type": "number"},
                        "Enabled": {"type": "boolean"}
                    },
                    "required": ["Enabled"]
                }
            },
            "required": ["Name"],
            "readOnlyProperties": ["/properties/Arn"],
            "createOnlyProperties": ["/properties/Name"]
        }));
        let code = generate_module(&schema, "AWS::Demo::Widget").unwrap();

        assert!(code.starts_with("//! AWS::Demo::Widget property types\n"));
        assert!(code.contains("use cloudform_core::value::{Json, List, Tag, Value};\n"));
        assert!(code.contains(
            "/// A demo widget.\n///\n/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-demo-widget.html>\n"
        ));
        assert!(code.contains(
            "    /// The widget name.\n    ///\n    /// Required: Yes. Update requires: Replacement.\n    #[serde(rename = \"Name\")]\n    pub name: Value<String>,\n"
        ));
        assert!(code.contains("    pub size: Option<Value<i64>>,\n"));
        assert!(code.contains("    /// Allowed values: `FAST` | `SLOW`\n"));
        assert!(code.contains("    pub policy: Option<Json>,\n"));
        assert!(code.contains("    pub tags: Option<List<Tag>>,\n"));
        assert!(code.contains("    pub settings: Option<Settings>,\n"));
        assert!(!code.contains("pub arn"));
        assert!(code.contains("const TYPE: &'static str = \"AWS::Demo::Widget\";"));

        // Property bags carry no update behavior
        assert!(code.contains("/// Widget settings.\n"));
        assert!(code.contains(
            "    /// Required: Yes.\n    #[serde(rename = \"Enabled\")]\n    pub enabled: Value<bool>,\n"
        ));
        assert!(code.contains("    pub ratio: Option<Value<f64>>,\n"));
        assert!(!code.contains("pub struct Tag"));
    }

    #[test]
    fn test_self_reference_is_boxed_unless_listed() {
        let schema = schema(json!({
            "typeName": "AWS::Demo::Tree",
            "properties": {"Root": {"$ref": "#/definitions/Node"}},
            "definitions": {
                "Node": {
                    "type": "object",
                    "properties": {
                        "Parent": {"$ref": "#/definitions/Node"},
                        "Children": {"type": "array", "items": {"$ref": "#/definitions/Node"}}
                    }
                }
            }
        }));
        let code = generate_module(&schema, "AWS::Demo::Tree").unwrap();
        assert!(code.contains("    pub parent: Option<Box<Node>>,\n"));
        assert!(code.contains("    pub children: Option<List<Node>>,\n"));
        assert!(code.contains("use cloudform_core::value::List;\n"));
    }

    #[test]
    fn test_mutual_recursion_is_boxed() {
        let schema = schema(json!({
            "typeName": "AWS::Demo::Acl",
            "properties": {"Rule": {"$ref": "#/definitions/Statement"}},
            "definitions": {
                "Statement": {
                    "type": "object",
                    "properties": {
                        "NotStatement": {"$ref": "#/definitions/NotStatement"},
                        "AndStatement": {"$ref": "#/definitions/AndStatement"},
                        "Label": {"$ref": "#/definitions/Label"}
                    }
                },
                "NotStatement": {
                    "type": "object",
                    "properties": {"Statement": {"$ref": "#/definitions/Statement"}},
                    "required": ["Statement"]
                },
                "AndStatement": {
                    "type": "object",
                    "properties": {
                        "Statements": {"type": "array", "items": {"$ref": "#/definitions/Statement"}}
                    }
                },
                "Label": {
                    "type": "object",
                    "properties": {"Name": {"type": "string"}}
                }
            }
        }));
        let code = generate_module(&schema, "AWS::Demo::Acl").unwrap();
        assert!(code.contains("    pub not_statement: Option<Box<NotStatement>>,\n"));
        assert!(code.contains("    pub statement: Box<Statement>,\n"));
        // A list already provides indirection; unrelated structs stay inline
        assert!(code.contains("    pub and_statement: Option<AndStatement>,\n"));
        assert!(code.contains("    pub statements: Option<List<Statement>>,\n"));
        assert!(code.contains("    pub label: Option<Label>,\n"));
        assert!(code.contains("    pub rule: Option<Statement>,\n"));
    }

    #[test]
    fn test_unresolvable_ref_is_an_error() {
        let schema = schema(json!({
            "typeName": "AWS::Demo::Broken",
            "properties": {"Config": {"$ref": "#/definitions/Missing"}}
        }));
        let err = generate_module(&schema, "AWS::Demo::Broken").unwrap_err();
        assert!(err.to_string().contains("Unresolvable $ref: #/definitions/Missing"));
    }

    #[test]
    fn test_invalid_type_name() {
        let schema = schema(json!({"typeName": "Widget", "properties": {}}));
        assert!(generate_module(&schema, "Widget").is_err());
    }
}
