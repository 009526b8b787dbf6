//! AWS::Logs::LogGroup property types
//!
//! Auto-generated from CloudFormation schema: AWS::Logs::LogGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{Json, List, Tag, Value};
use serde::{Deserialize, Serialize};

/// The AWS::Logs::LogGroup resource specifies a log group. A log group defines common properties for log streams, such as their retention and access control rules.
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogGroup {
    /// Creates a data protection policy and assigns it to the log group.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "DataProtectionPolicy", skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<Json>,

    /// Creates or updates a field index policy for the specified log group.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "FieldIndexPolicies", skip_serializing_if = "Option::is_none")]
    pub field_index_policies: Option<List<Json>>,

    /// The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,

    /// Specifies the log group class for this log group.
    ///
    /// Allowed values: `STANDARD` | `INFREQUENT_ACCESS` | `DELIVERY`
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "LogGroupClass", skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<Value<String>>,

    /// The name of the log group. If you don't specify a name, CFNlong generates a unique ID for the log group.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "LogGroupName", skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<Value<String>>,

    /// The number of days to retain the log events in the specified log group.
    ///
    /// Allowed values: `1` | `3` | `5` | `7` | `14` | `30` | `60` | `90` | `120` | `150` | `180` | `365` | `400` | `545` | `731` | `1096` | `1827` | `2192` | `2557` | `2922` | `3288` | `3653`
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "RetentionInDays", skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<Value<i64>>,

    /// An array of key-value pairs to apply to the log group.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,
}

impl ResourceProperties for LogGroup {
    const TYPE: &'static str = "AWS::Logs::LogGroup";
}
