//! AWS::EMR::InstanceGroupConfig property types
//!
//! Auto-generated from CloudFormation schema: AWS::EMR::InstanceGroupConfig
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{Json, List, Value};
use serde::{Deserialize, Serialize};

/// Use InstanceGroupConfig to define instance groups for an EMR cluster.
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-emr-instancegroupconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceGroupConfig {
    /// AutoScalingPolicy is a subproperty of InstanceGroupConfig that defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "AutoScalingPolicy", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_policy: Option<AutoScalingPolicy>,

    /// If specified, indicates that the instance group uses Spot Instances.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "BidPrice", skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<Value<String>>,

    /// Amazon EMR releases 4.x or later. The list of configurations supplied for an EMR cluster instance group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "Configurations", skip_serializing_if = "Option::is_none")]
    pub configurations: Option<List<Configuration>>,

    /// The custom AMI ID to use for the provisioned instance group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "CustomAmiId", skip_serializing_if = "Option::is_none")]
    pub custom_ami_id: Option<Value<String>>,

    /// EbsConfiguration determines the EBS volumes to attach to EMR cluster instances.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "EbsConfiguration", skip_serializing_if = "Option::is_none")]
    pub ebs_configuration: Option<EbsConfiguration>,

    /// Target number of instances for the instance group.
    ///
    /// Required: Yes. Update requires: No interruption.
    #[serde(rename = "InstanceCount")]
    pub instance_count: Value<i64>,

    /// The role of the instance group in the cluster.
    ///
    /// Allowed values: `TASK`
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "InstanceRole")]
    pub instance_role: Value<String>,

    /// The Amazon EC2 instance type for all instances in the instance group.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "InstanceType")]
    pub instance_type: Value<String>,

    /// The ID of an Amazon EMR cluster that you want to associate this instance group with.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "JobFlowId")]
    pub job_flow_id: Value<String>,

    /// Market type of the Amazon EC2 instances used to create a cluster node.
    ///
    /// Allowed values: `ON_DEMAND` | `SPOT`
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "Market", skip_serializing_if = "Option::is_none")]
    pub market: Option<Value<String>>,

    /// Friendly name given to the instance group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,
}

impl ResourceProperties for InstanceGroupConfig {
    const TYPE: &'static str = "AWS::EMR::InstanceGroupConfig";
}

/// An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingPolicy {
    /// The upper and lower Amazon EC2 instance limits for an automatic scaling policy.
    ///
    /// Required: Yes.
    #[serde(rename = "Constraints")]
    pub constraints: ScalingConstraints,

    /// The scale-in and scale-out rules that comprise the automatic scaling policy.
    ///
    /// Required: Yes.
    #[serde(rename = "Rules")]
    pub rules: List<ScalingRule>,
}

/// The definition of a CloudWatch metric alarm, which determines when an automatic scaling activity is triggered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudWatchAlarmDefinition {
    /// Determines how the metric specified by MetricName is compared to the value specified by Threshold.
    ///
    /// Allowed values: `GREATER_THAN_OR_EQUAL` | `GREATER_THAN` | `LESS_THAN` | `LESS_THAN_OR_EQUAL`
    ///
    /// Required: Yes.
    #[serde(rename = "ComparisonOperator")]
    pub comparison_operator: Value<String>,

    /// A CloudWatch metric dimension.
    ///
    /// Required: No.
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<List<MetricDimension>>,

    /// The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers automatic scaling activity.
    ///
    /// Required: No.
    #[serde(rename = "EvaluationPeriods", skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<Value<i64>>,

    /// The name of the CloudWatch metric that is watched to determine an alarm condition.
    ///
    /// Required: Yes.
    #[serde(rename = "MetricName")]
    pub metric_name: Value<String>,

    /// The namespace for the CloudWatch metric.
    ///
    /// Required: No.
    #[serde(rename = "Namespace", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Value<String>>,

    /// The period, in seconds, over which the statistic is applied.
    ///
    /// Required: Yes.
    #[serde(rename = "Period")]
    pub period: Value<i64>,

    /// The statistic to apply to the metric associated with the alarm.
    ///
    /// Allowed values: `SAMPLE_COUNT` | `AVERAGE` | `SUM` | `MINIMUM` | `MAXIMUM`
    ///
    /// Required: No.
    #[serde(rename = "Statistic", skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Value<String>>,

    /// The value against which the specified statistic is compared.
    ///
    /// Required: Yes.
    #[serde(rename = "Threshold")]
    pub threshold: Value<f64>,

    /// The unit of measure associated with the CloudWatch metric being watched.
    ///
    /// Required: No.
    #[serde(rename = "Unit", skip_serializing_if = "Option::is_none")]
    pub unit: Option<Value<String>>,
}

/// Configurations specifies a configuration classification and a set of properties for applications and software installed on the cluster.
///
/// A configuration may nest further configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// The classification within a configuration.
    ///
    /// Required: No.
    #[serde(rename = "Classification", skip_serializing_if = "Option::is_none")]
    pub classification: Option<Value<String>>,

    /// Within a configuration classification, a set of properties that represent the settings that you want to change in the configuration file.
    ///
    /// Required: No.
    #[serde(rename = "ConfigurationProperties", skip_serializing_if = "Option::is_none")]
    pub configuration_properties: Option<Json>,

    /// A list of additional configurations to apply within a configuration object.
    ///
    /// Required: No.
    #[serde(rename = "Configurations", skip_serializing_if = "Option::is_none")]
    pub configurations: Option<List<Configuration>>,
}

/// Configuration of requested EBS block device associated with the instance group with count of volumes that are associated to every instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EbsBlockDeviceConfig {
    /// EBS volume specifications such as volume type, IOPS, size (GiB) and throughput (MiB/s) that are requested for the EBS volume attached to an Amazon EC2 instance in the cluster.
    ///
    /// Required: Yes.
    #[serde(rename = "VolumeSpecification")]
    pub volume_specification: VolumeSpecification,

    /// Number of EBS volumes with a specific volume configuration that are associated with every instance in the instance group.
    ///
    /// Required: No.
    #[serde(rename = "VolumesPerInstance", skip_serializing_if = "Option::is_none")]
    pub volumes_per_instance: Option<Value<i64>>,
}

/// The Amazon EBS configuration of a cluster instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EbsConfiguration {
    /// An array of Amazon EBS volume specifications attached to a cluster instance.
    ///
    /// Required: No.
    #[serde(rename = "EbsBlockDeviceConfigs", skip_serializing_if = "Option::is_none")]
    pub ebs_block_device_configs: Option<List<EbsBlockDeviceConfig>>,

    /// Indicates whether an Amazon EBS volume is EBS-optimized.
    ///
    /// Required: No.
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<Value<bool>>,
}

/// MetricDimension is a subproperty of the CloudWatchAlarmDefinition property type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDimension {
    /// The dimension name.
    ///
    /// Required: Yes.
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// The dimension value.
    ///
    /// Required: Yes.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// ScalingAction determines the type of adjustment the automatic scaling activity makes when triggered, and the periodicity of the adjustment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingAction {
    /// Not available for instance groups. Instance groups use the market type specified for the group.
    ///
    /// Required: No.
    #[serde(rename = "Market", skip_serializing_if = "Option::is_none")]
    pub market: Option<Value<String>>,

    /// The type of adjustment the automatic scaling activity makes when triggered, and the periodicity of the adjustment.
    ///
    /// Required: Yes.
    #[serde(rename = "SimpleScalingPolicyConfiguration")]
    pub simple_scaling_policy_configuration: SimpleScalingPolicyConfiguration,
}

/// ScalingConstraints is a subproperty of the AutoScalingPolicy property type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingConstraints {
    /// The upper boundary of Amazon EC2 instances in an instance group beyond which scaling activities are not allowed to grow.
    ///
    /// Required: Yes.
    #[serde(rename = "MaxCapacity")]
    pub max_capacity: Value<i64>,

    /// The lower boundary of Amazon EC2 instances in an instance group below which scaling activities are not allowed to shrink.
    ///
    /// Required: Yes.
    #[serde(rename = "MinCapacity")]
    pub min_capacity: Value<i64>,
}

/// ScalingRule is a subproperty of the AutoScalingPolicy property type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingRule {
    /// The conditions that trigger an automatic scaling activity.
    ///
    /// Required: Yes.
    #[serde(rename = "Action")]
    pub action: ScalingAction,

    /// A friendly, more verbose description of the automatic scaling rule.
    ///
    /// Required: No.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// The name used to identify an automatic scaling rule.
    ///
    /// Required: Yes.
    #[serde(rename = "Name")]
    pub name: Value<String>,

    /// The CloudWatch alarm definition that determines when automatic scaling activity is triggered.
    ///
    /// Required: Yes.
    #[serde(rename = "Trigger")]
    pub trigger: ScalingTrigger,
}

/// ScalingTrigger is a subproperty of the ScalingRule property type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingTrigger {
    /// The definition of a CloudWatch metric alarm.
    ///
    /// Required: Yes.
    #[serde(rename = "CloudWatchAlarmDefinition")]
    pub cloud_watch_alarm_definition: CloudWatchAlarmDefinition,
}

/// SimpleScalingPolicyConfiguration is a subproperty of the ScalingAction property type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleScalingPolicyConfiguration {
    /// The way in which Amazon EC2 instances are added (if ScalingAdjustment is a positive number) or terminated (if ScalingAdjustment is a negative number) each time the scaling activity is triggered.
    ///
    /// Allowed values: `CHANGE_IN_CAPACITY` | `PERCENT_CHANGE_IN_CAPACITY` | `EXACT_CAPACITY`
    ///
    /// Required: No.
    #[serde(rename = "AdjustmentType", skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<Value<String>>,

    /// The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start.
    ///
    /// Required: No.
    #[serde(rename = "CoolDown", skip_serializing_if = "Option::is_none")]
    pub cool_down: Option<Value<i64>>,

    /// The amount by which to scale in or scale out, based on the specified AdjustmentType.
    ///
    /// Required: Yes.
    #[serde(rename = "ScalingAdjustment")]
    pub scaling_adjustment: Value<i64>,
}

/// VolumeSpecification is a subproperty of the EbsBlockDeviceConfig property type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeSpecification {
    /// The number of I/O operations per second (IOPS) that the volume supports.
    ///
    /// Required: No.
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<Value<i64>>,

    /// The volume size, in gibibytes (GiB).
    ///
    /// Required: Yes.
    #[serde(rename = "SizeInGB")]
    pub size_in_gb: Value<i64>,

    /// The throughput, in mebibyte per second (MiB/s).
    ///
    /// Required: No.
    #[serde(rename = "Throughput", skip_serializing_if = "Option::is_none")]
    pub throughput: Option<Value<i64>>,

    /// The volume type.
    ///
    /// Allowed values: `gp2` | `gp3` | `io1` | `sc1` | `st1` | `standard`
    ///
    /// Required: Yes.
    #[serde(rename = "VolumeType")]
    pub volume_type: Value<String>,
}
