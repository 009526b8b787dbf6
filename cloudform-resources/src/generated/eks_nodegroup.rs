//! AWS::EKS::Nodegroup property types
//!
//! Auto-generated from CloudFormation schema: AWS::EKS::Nodegroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{Json, List, Value};
use serde::{Deserialize, Serialize};

/// Resource schema for AWS::EKS::Nodegroup
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-eks-nodegroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nodegroup {
    /// The AMI type for your node group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "AmiType", skip_serializing_if = "Option::is_none")]
    pub ami_type: Option<Value<String>>,

    /// The capacity type of your managed node group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "CapacityType", skip_serializing_if = "Option::is_none")]
    pub capacity_type: Option<Value<String>>,

    /// Name of the cluster to create the node group in.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "ClusterName")]
    pub cluster_name: Value<String>,

    /// The root device disk size (in GiB) for your node group instances.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "DiskSize", skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<Value<i64>>,

    /// Force the update if the existing node group's pods are unable to be drained due to a pod disruption budget issue.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ForceUpdateEnabled", skip_serializing_if = "Option::is_none")]
    pub force_update_enabled: Option<Value<bool>>,

    /// Specify the instance types for a node group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "InstanceTypes", skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<List<Value<String>>>,

    /// The Kubernetes labels to be applied to the nodes in the node group when they are created.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Labels", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Json>,

    /// An object representing a node group's launch template specification.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,

    /// The node auto repair configuration for node group.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "NodeRepairConfig", skip_serializing_if = "Option::is_none")]
    pub node_repair_config: Option<NodeRepairConfig>,

    /// The Amazon Resource Name (ARN) of the IAM role to associate with your node group.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "NodeRole")]
    pub node_role: Value<String>,

    /// The unique name to give your node group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "NodegroupName", skip_serializing_if = "Option::is_none")]
    pub nodegroup_name: Option<Value<String>>,

    /// The AMI version of the Amazon EKS-optimized AMI to use with your node group.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ReleaseVersion", skip_serializing_if = "Option::is_none")]
    pub release_version: Option<Value<String>>,

    /// The remote access (SSH) configuration to use with your node group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "RemoteAccess", skip_serializing_if = "Option::is_none")]
    pub remote_access: Option<RemoteAccess>,

    /// The scaling configuration details for the Auto Scaling group that is created for your node group.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ScalingConfig", skip_serializing_if = "Option::is_none")]
    pub scaling_config: Option<ScalingConfig>,

    /// The subnets to use for the Auto Scaling group that is created for your node group.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "Subnets")]
    pub subnets: List<Value<String>>,

    /// The metadata, as key-value pairs, to apply to the node group to assist with categorization and organization.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,

    /// The Kubernetes taints to be applied to the nodes in the node group when they are created.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Taints", skip_serializing_if = "Option::is_none")]
    pub taints: Option<List<Taint>>,

    /// The node group update configuration.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "UpdateConfig", skip_serializing_if = "Option::is_none")]
    pub update_config: Option<UpdateConfig>,

    /// The Kubernetes version to use for your managed nodes.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<Value<String>>,
}

impl ResourceProperties for Nodegroup {
    const TYPE: &'static str = "AWS::EKS::Nodegroup";
}

/// An object representing a launch template specification for AWS EKS Nodegroup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchTemplateSpecification {
    /// Required: No.
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value<String>>,

    /// Required: No.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,

    /// Required: No.
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<Value<String>>,
}

/// The node auto repair configuration for node group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRepairConfig {
    /// Set this value to true to enable node auto repair for the node group.
    ///
    /// Required: No.
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
}

/// An object representing a remote access configuration specification for AWS EKS Nodegroup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteAccess {
    /// Required: Yes.
    #[serde(rename = "Ec2SshKey")]
    pub ec2_ssh_key: Value<String>,

    /// Required: No.
    #[serde(rename = "SourceSecurityGroups", skip_serializing_if = "Option::is_none")]
    pub source_security_groups: Option<List<Value<String>>>,
}

/// An object representing a auto scaling group specification for AWS EKS Nodegroup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingConfig {
    /// Required: No.
    #[serde(rename = "DesiredSize", skip_serializing_if = "Option::is_none")]
    pub desired_size: Option<Value<i64>>,

    /// Required: No.
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Value<i64>>,

    /// Required: No.
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Value<i64>>,
}

/// An object representing a Taint specification for AWS EKS Nodegroup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Taint {
    /// Allowed values: `NO_SCHEDULE` | `NO_EXECUTE` | `PREFER_NO_SCHEDULE`
    ///
    /// Required: No.
    #[serde(rename = "Effect", skip_serializing_if = "Option::is_none")]
    pub effect: Option<Value<String>>,

    /// Required: No.
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<Value<String>>,

    /// Required: No.
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value<String>>,
}

/// The node group update configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {
    /// The maximum number of nodes unavailable at once during a version update.
    ///
    /// Required: No.
    #[serde(rename = "MaxUnavailable", skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<Value<f64>>,

    /// The maximum percentage of nodes unavailable during a version update.
    ///
    /// Required: No.
    #[serde(rename = "MaxUnavailablePercentage", skip_serializing_if = "Option::is_none")]
    pub max_unavailable_percentage: Option<Value<f64>>,

    /// The configuration for the behavior to follow during an node group version update of this managed node group.
    ///
    /// Allowed values: `DEFAULT` | `MINIMAL`
    ///
    /// Required: No.
    #[serde(rename = "UpdateStrategy", skip_serializing_if = "Option::is_none")]
    pub update_strategy: Option<Value<String>>,
}
