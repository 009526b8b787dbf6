//! Resource attributes shared by every resource type
//!
//! These sit next to `Type` and `Properties` in a resource declaration and
//! control stack behaviour rather than the resource itself.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Json, Value};

/// What happens to a resource when it is removed from the stack
/// (`DeletionPolicy`) or replaced during an update (`UpdateReplacePolicy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// Common top-level attributes of a resource declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    /// Logical IDs this resource must be created after.
    /// Accepts a single string or a list.
    #[serde(
        rename = "DependsOn",
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_depends_on",
        deserialize_with = "deserialize_depends_on"
    )]
    pub depends_on: Vec<String>,

    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,

    #[serde(rename = "UpdateReplacePolicy", skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<DeletionPolicy>,

    #[serde(rename = "Metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,

    #[serde(rename = "CreationPolicy", skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<CreationPolicy>,

    #[serde(rename = "UpdatePolicy", skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<UpdatePolicy>,
}

impl ResourceAttributes {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_depends_on<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

fn serialize_depends_on<S: Serializer>(depends_on: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    match depends_on {
        [single] => single.serialize(serializer),
        many => many.serialize(serializer),
    }
}

/// Wait for success signals before marking the resource complete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreationPolicy {
    #[serde(rename = "AutoScalingCreationPolicy", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(rename = "ResourceSignal", skip_serializing_if = "Option::is_none")]
    pub resource_signal: Option<ResourceSignal>,
    /// AppStream fleets
    #[serde(rename = "StartFleet", skip_serializing_if = "Option::is_none")]
    pub start_fleet: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingCreationPolicy {
    #[serde(rename = "MinSuccessfulInstancesPercent", skip_serializing_if = "Option::is_none")]
    pub min_successful_instances_percent: Option<Value<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSignal {
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,
    /// ISO 8601 duration, e.g. `PT15M`
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<String>>,
}

/// How updates to certain resource types are rolled out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePolicy {
    #[serde(rename = "AutoScalingReplacingUpdate", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_replacing_update: Option<AutoScalingReplacingUpdate>,
    #[serde(rename = "AutoScalingRollingUpdate", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_rolling_update: Option<AutoScalingRollingUpdate>,
    #[serde(rename = "AutoScalingScheduledAction", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_scheduled_action: Option<AutoScalingScheduledAction>,
    #[serde(rename = "CodeDeployLambdaAliasUpdate", skip_serializing_if = "Option::is_none")]
    pub code_deploy_lambda_alias_update: Option<CodeDeployLambdaAliasUpdate>,
    /// OpenSearch / Elasticsearch domains
    #[serde(rename = "EnableVersionUpgrade", skip_serializing_if = "Option::is_none")]
    pub enable_version_upgrade: Option<Value<bool>>,
    /// ElastiCache replication groups
    #[serde(rename = "UseOnlineResharding", skip_serializing_if = "Option::is_none")]
    pub use_online_resharding: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingReplacingUpdate {
    #[serde(rename = "WillReplace", skip_serializing_if = "Option::is_none")]
    pub will_replace: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingRollingUpdate {
    #[serde(rename = "MaxBatchSize", skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<Value<i64>>,
    #[serde(rename = "MinActiveInstancesPercent", skip_serializing_if = "Option::is_none")]
    pub min_active_instances_percent: Option<Value<i64>>,
    #[serde(rename = "MinInstancesInService", skip_serializing_if = "Option::is_none")]
    pub min_instances_in_service: Option<Value<i64>>,
    #[serde(rename = "MinSuccessfulInstancesPercent", skip_serializing_if = "Option::is_none")]
    pub min_successful_instances_percent: Option<Value<i64>>,
    #[serde(rename = "PauseTime", skip_serializing_if = "Option::is_none")]
    pub pause_time: Option<Value<String>>,
    #[serde(rename = "SuspendProcesses", skip_serializing_if = "Option::is_none")]
    pub suspend_processes: Option<Vec<Value<String>>>,
    #[serde(rename = "WaitOnResourceSignals", skip_serializing_if = "Option::is_none")]
    pub wait_on_resource_signals: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingScheduledAction {
    #[serde(rename = "IgnoreUnmodifiedGroupSizeProperties", skip_serializing_if = "Option::is_none")]
    pub ignore_unmodified_group_size_properties: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeDeployLambdaAliasUpdate {
    #[serde(rename = "AfterAllowTrafficHook", skip_serializing_if = "Option::is_none")]
    pub after_allow_traffic_hook: Option<Value<String>>,
    #[serde(rename = "ApplicationName")]
    pub application_name: Value<String>,
    #[serde(rename = "BeforeAllowTrafficHook", skip_serializing_if = "Option::is_none")]
    pub before_allow_traffic_hook: Option<Value<String>>,
    #[serde(rename = "DeploymentGroupName")]
    pub deployment_group_name: Value<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn depends_on_accepts_string_or_list() {
        let single: ResourceAttributes = serde_json::from_value(json!({"DependsOn": "Vpc"})).unwrap();
        assert_eq!(single.depends_on, vec!["Vpc"]);

        let many: ResourceAttributes =
            serde_json::from_value(json!({"DependsOn": ["Vpc", "Gateway"]})).unwrap();
        assert_eq!(many.depends_on, vec!["Vpc", "Gateway"]);
    }

    #[test]
    fn single_dependency_serializes_as_string() {
        let attrs = ResourceAttributes {
            depends_on: vec!["Vpc".to_string()],
            deletion_policy: Some(DeletionPolicy::Retain),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&attrs).unwrap(),
            json!({"DependsOn": "Vpc", "DeletionPolicy": "Retain"})
        );
    }

    #[test]
    fn empty_attributes_serialize_to_nothing() {
        let attrs = ResourceAttributes::default();
        assert!(attrs.is_empty());
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({}));
    }

    #[test]
    fn unknown_deletion_policy_is_rejected() {
        let result: Result<ResourceAttributes, _> =
            serde_json::from_value(json!({"DeletionPolicy": "Keep"}));
        assert!(result.is_err());
    }

    #[test]
    fn creation_and_update_policies() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "CreationPolicy": {"ResourceSignal": {"Count": 2, "Timeout": "PT15M"}},
            "UpdatePolicy": {"AutoScalingRollingUpdate": {"MaxBatchSize": {"Ref": "Batch"}}}
        }))
        .unwrap();
        let signal = attrs.creation_policy.unwrap().resource_signal.unwrap();
        assert_eq!(signal.count, Some(Value::Literal(2)));
        let rolling = attrs.update_policy.unwrap().auto_scaling_rolling_update.unwrap();
        assert!(rolling.max_batch_size.unwrap().is_intrinsic());
    }

    #[test]
    fn appstream_start_fleet_creation_policy() {
        let attrs: ResourceAttributes =
            serde_json::from_value(json!({"CreationPolicy": {"StartFleet": true}})).unwrap();
        assert_eq!(
            attrs.creation_policy.unwrap().start_fleet,
            Some(Value::Literal(true))
        );
    }
}
