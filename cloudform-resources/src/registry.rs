//! Registry - Lookup of shipped resource types and typed property checks

use std::marker::PhantomData;

use cloudform_core::lint::Diagnostic;
use cloudform_core::resource::ResourceProperties;
use cloudform_core::template::Template;
use cloudform_core::value::Json;
use log::debug;

use crate::generated::{
    appsync_data_source, athena_work_group, ec2_verified_access_endpoint, eks_nodegroup,
    emr_instance_group_config, iam_role, logs_log_group, sqs_queue,
};

/// Properties that do not match the resource type's schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid properties for {resource_type}: {message}")]
pub struct ValidationError {
    pub resource_type: String,
    pub message: String,
}

/// A resource type whose properties can be checked against its schema
pub trait ResourceType: Send + Sync {
    /// CloudFormation type name (e.g., "AWS::SQS::Queue")
    fn name(&self) -> &'static str;

    /// Check a `Properties` block; `None` means the block was omitted
    fn validate(&self, properties: Option<&Json>) -> Result<(), ValidationError>;
}

/// Resource type backed by a generated properties struct
pub struct TypedResourceType<P>(PhantomData<fn() -> P>);

impl<P> TypedResourceType<P> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> Default for TypedResourceType<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ResourceProperties> ResourceType for TypedResourceType<P> {
    fn name(&self) -> &'static str {
        P::TYPE
    }

    fn validate(&self, properties: Option<&Json>) -> Result<(), ValidationError> {
        let raw = properties
            .cloned()
            .unwrap_or_else(|| Json::Object(Default::default()));
        serde_json::from_value::<P>(raw)
            .map(|_| ())
            .map_err(|e| ValidationError {
                resource_type: P::TYPE.to_string(),
                message: e.to_string(),
            })
    }
}

fn typed<P: ResourceProperties + 'static>() -> Box<dyn ResourceType> {
    Box::new(TypedResourceType::<P>::new())
}

/// Returns all resource types shipped with this crate
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        typed::<appsync_data_source::DataSource>(),
        typed::<athena_work_group::WorkGroup>(),
        typed::<ec2_verified_access_endpoint::VerifiedAccessEndpoint>(),
        typed::<eks_nodegroup::Nodegroup>(),
        typed::<emr_instance_group_config::InstanceGroupConfig>(),
        typed::<iam_role::Role>(),
        typed::<logs_log_group::LogGroup>(),
        typed::<sqs_queue::Queue>(),
    ]
}

/// Look up a resource type by its CloudFormation name
pub fn find(type_name: &str) -> Option<Box<dyn ResourceType>> {
    resource_types().into_iter().find(|t| t.name() == type_name)
}

/// Validate the properties of every resource in a template.
///
/// Resources of a known type are deserialized into their typed struct.
/// Unknown `AWS::*` types produce a warning; custom resources and third-party
/// types are skipped.
pub fn check_template(template: &Template) -> Vec<Diagnostic> {
    let types = resource_types();
    let mut diagnostics = Vec::new();

    for (id, entry) in &template.resources {
        if entry.is_custom() {
            debug!("Skipping custom resource {}", id);
            continue;
        }
        match types.iter().find(|t| t.name() == entry.resource_type) {
            Some(resource_type) => {
                if let Err(e) = resource_type.validate(entry.properties.as_ref()) {
                    diagnostics.push(Diagnostic::error(
                        format!("Resources.{}.Properties", id),
                        e.message,
                    ));
                }
            }
            None if entry.resource_type.starts_with("AWS::") => {
                diagnostics.push(Diagnostic::warning(
                    format!("Resources.{}.Type", id),
                    format!(
                        "Resource type '{}' has no schema; properties not checked",
                        entry.resource_type
                    ),
                ));
            }
            None => debug!(
                "Skipping resource {} of third-party type {}",
                id, entry.resource_type
            ),
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudform_core::lint::Severity;
    use serde_json::json;

    fn template(resources: Json) -> Template {
        serde_json::from_value(json!({"Resources": resources})).unwrap()
    }

    #[test]
    fn every_shipped_type_is_registered_once() {
        let names: Vec<_> = resource_types().iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 8);
        for name in &names {
            assert_eq!(names.iter().filter(|n| *n == name).count(), 1);
        }
        assert!(names.contains(&"AWS::EMR::InstanceGroupConfig"));
    }

    #[test]
    fn find_by_type_name() {
        assert_eq!(find("AWS::SQS::Queue").unwrap().name(), "AWS::SQS::Queue");
        assert!(find("AWS::SQS::Topic").is_none());
    }

    #[test]
    fn omitted_properties_validate_against_empty_object() {
        let queue = find("AWS::SQS::Queue").unwrap();
        assert!(queue.validate(None).is_ok());

        let role = find("AWS::IAM::Role").unwrap();
        let err = role.validate(None).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Invalid properties for AWS::IAM::Role: missing field")
        );
    }

    #[test]
    fn check_template_reports_per_resource() {
        let t = template(json!({
            "Queue": {"Type": "AWS::SQS::Queue", "Properties": {"VisibilityTimeout": 60}},
            "Logs": {"Type": "AWS::Logs::LogGroup", "Properties": {"RetentionDays": 7}},
            "Topic": {"Type": "AWS::SNS::Topic"},
            "Seed": {"Type": "Custom::Seed", "Properties": {"Anything": true}},
            "Thing": {"Type": "Acme::Widgets::Widget"}
        }));
        let diagnostics = check_template(&t);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].path, "Resources.Logs.Properties");
        assert!(diagnostics[0].message.contains("unknown field `RetentionDays`"));
        assert_eq!(diagnostics[1].severity, Severity::Warning);
        assert_eq!(diagnostics[1].path, "Resources.Topic.Type");
    }

    #[test]
    fn intrinsics_pass_typed_checks() {
        let t = template(json!({
            "Nodes": {
                "Type": "AWS::EKS::Nodegroup",
                "Properties": {
                    "ClusterName": {"Ref": "Cluster"},
                    "NodeRole": {"Fn::GetAtt": ["Role", "Arn"]},
                    "Subnets": [{"Fn::ImportValue": "SubnetA"}, "subnet-b"],
                    "DiskSize": {"Fn::If": ["Big", 100, 20]}
                }
            }
        }));
        assert!(check_template(&t).is_empty());
    }
}
