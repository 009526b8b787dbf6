//! AWS::Athena::WorkGroup property types
//!
//! Auto-generated from CloudFormation schema: AWS::Athena::WorkGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// Resource schema for AWS::Athena::WorkGroup
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-athena-workgroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkGroup {
    /// The workgroup description.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// The workGroup name.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "Name")]
    pub name: Value<String>,

    /// The option to delete the workgroup and its contents even if the workgroup contains any named queries.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "RecursiveDeleteOption", skip_serializing_if = "Option::is_none")]
    pub recursive_delete_option: Option<Value<bool>>,

    /// The state of the workgroup: ENABLED or DISABLED.
    ///
    /// Allowed values: `ENABLED` | `DISABLED`
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<Value<String>>,

    /// One or more tags, separated by commas, that you want to attach to the workgroup as you create it
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,

    /// The workgroup configuration
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "WorkGroupConfiguration", skip_serializing_if = "Option::is_none")]
    pub work_group_configuration: Option<WorkGroupConfiguration>,
}

impl ResourceProperties for WorkGroup {
    const TYPE: &'static str = "AWS::Athena::WorkGroup";
}

/// Indicates that an Amazon S3 canned ACL should be set to control ownership of stored query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AclConfiguration {
    /// The Amazon S3 canned ACL that Athena should specify when storing query results.
    ///
    /// Allowed values: `BUCKET_OWNER_FULL_CONTROL`
    ///
    /// Required: Yes.
    #[serde(rename = "S3AclOption")]
    pub s3_acl_option: Value<String>,
}

/// Specifies the KMS key that is used to encrypt the user's data stores in Athena.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerContentEncryptionConfiguration {
    /// The KMS key that is used to encrypt the user's data stores in Athena.
    ///
    /// Required: Yes.
    #[serde(rename = "KmsKey")]
    pub kms_key: Value<String>,
}

/// If query results are encrypted in Amazon S3, indicates the encryption option used (for example, SSE-KMS or CSE-KMS) and key information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptionConfiguration {
    /// Indicates whether Amazon S3 server-side encryption with Amazon S3-managed keys (SSE-S3), server-side encryption with KMS-managed keys (SSE-KMS), or client-side encryption with KMS-managed keys (CSE-KMS) is used.
    ///
    /// Allowed values: `SSE_S3` | `SSE_KMS` | `CSE_KMS`
    ///
    /// Required: Yes.
    #[serde(rename = "EncryptionOption")]
    pub encryption_option: Value<String>,

    /// For SSE-KMS and CSE-KMS, this is the KMS key ARN or ID.
    ///
    /// Required: No.
    #[serde(rename = "KmsKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<Value<String>>,
}

/// The Athena engine version for running queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineVersion {
    /// Read only. The engine version on which the query runs.
    ///
    /// Required: No.
    #[serde(rename = "EffectiveEngineVersion", skip_serializing_if = "Option::is_none")]
    pub effective_engine_version: Option<Value<String>>,

    /// The engine version requested by the user.
    ///
    /// Required: No.
    #[serde(rename = "SelectedEngineVersion", skip_serializing_if = "Option::is_none")]
    pub selected_engine_version: Option<Value<String>>,
}

/// The location in Amazon S3 where query and calculation results are stored and the encryption option, if any, used for query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultConfiguration {
    /// Indicates that an Amazon S3 canned ACL should be set to control ownership of stored query results.
    ///
    /// Required: No.
    #[serde(rename = "AclConfiguration", skip_serializing_if = "Option::is_none")]
    pub acl_configuration: Option<AclConfiguration>,

    /// If query results are encrypted in Amazon S3, indicates the encryption option used and key information.
    ///
    /// Required: No.
    #[serde(rename = "EncryptionConfiguration", skip_serializing_if = "Option::is_none")]
    pub encryption_configuration: Option<EncryptionConfiguration>,

    /// The AWS account ID that you expect to be the owner of the Amazon S3 bucket specified by OutputLocation.
    ///
    /// Required: No.
    #[serde(rename = "ExpectedBucketOwner", skip_serializing_if = "Option::is_none")]
    pub expected_bucket_owner: Option<Value<String>>,

    /// The location in Amazon S3 where your query results are stored, such as s3://path/to/query/bucket/.
    ///
    /// Required: No.
    #[serde(rename = "OutputLocation", skip_serializing_if = "Option::is_none")]
    pub output_location: Option<Value<String>>,
}

/// The configuration of the workgroup, which includes the location in Amazon S3 where query results are stored, the encryption option, and limits on bytes scanned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkGroupConfiguration {
    /// The upper limit (cutoff) for the amount of bytes a single query in a workgroup is allowed to scan.
    ///
    /// Required: No.
    #[serde(rename = "BytesScannedCutoffPerQuery", skip_serializing_if = "Option::is_none")]
    pub bytes_scanned_cutoff_per_query: Option<Value<i64>>,

    /// Specifies the KMS key that is used to encrypt the user's data stores in Athena.
    ///
    /// Required: No.
    #[serde(rename = "CustomerContentEncryptionConfiguration", skip_serializing_if = "Option::is_none")]
    pub customer_content_encryption_configuration: Option<CustomerContentEncryptionConfiguration>,

    /// If set to true, settings for the workgroup override client-side settings.
    ///
    /// Required: No.
    #[serde(rename = "EnforceWorkGroupConfiguration", skip_serializing_if = "Option::is_none")]
    pub enforce_work_group_configuration: Option<Value<bool>>,

    /// The engine version that all queries running on the workgroup use.
    ///
    /// Required: No.
    #[serde(rename = "EngineVersion", skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<EngineVersion>,

    /// Role used to access user resources in an Athena for Apache Spark session.
    ///
    /// Required: No.
    #[serde(rename = "ExecutionRole", skip_serializing_if = "Option::is_none")]
    pub execution_role: Option<Value<String>>,

    /// Indicates that the Amazon CloudWatch metrics are enabled for the workgroup.
    ///
    /// Required: No.
    #[serde(rename = "PublishCloudWatchMetricsEnabled", skip_serializing_if = "Option::is_none")]
    pub publish_cloud_watch_metrics_enabled: Option<Value<bool>>,

    /// If set to true, allows members assigned to a workgroup to reference Amazon S3 Requester Pays buckets in queries.
    ///
    /// Required: No.
    #[serde(rename = "RequesterPaysEnabled", skip_serializing_if = "Option::is_none")]
    pub requester_pays_enabled: Option<Value<bool>>,

    /// The location in Amazon S3 where query results are stored.
    ///
    /// Required: No.
    #[serde(rename = "ResultConfiguration", skip_serializing_if = "Option::is_none")]
    pub result_configuration: Option<ResultConfiguration>,
}
