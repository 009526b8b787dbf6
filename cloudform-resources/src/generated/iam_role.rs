//! AWS::IAM::Role property types
//!
//! Auto-generated from CloudFormation schema: AWS::IAM::Role
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{Json, List, Tag, Value};
use serde::{Deserialize, Serialize};

/// Creates a new role for your AWS account.
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Role {
    /// The trust policy that is associated with this role.
    ///
    /// Required: Yes. Update requires: No interruption.
    #[serde(rename = "AssumeRolePolicyDocument")]
    pub assume_role_policy_document: Json,

    /// A description of the role that you provide.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// A list of Amazon Resource Names (ARNs) of the IAM managed policies that you want to attach to the role.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ManagedPolicyArns", skip_serializing_if = "Option::is_none")]
    pub managed_policy_arns: Option<List<Value<String>>>,

    /// The maximum session duration (in seconds) that you want to set for the specified role.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "MaxSessionDuration", skip_serializing_if = "Option::is_none")]
    pub max_session_duration: Option<Value<i64>>,

    /// The path to the role.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<Value<String>>,

    /// The ARN of the policy used to set the permissions boundary for the role.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "PermissionsBoundary", skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<Value<String>>,

    /// Adds or updates an inline policy document that is embedded in the specified IAM role.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Policies", skip_serializing_if = "Option::is_none")]
    pub policies: Option<List<Policy>>,

    /// A name for the IAM role, up to 64 characters in length.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "RoleName", skip_serializing_if = "Option::is_none")]
    pub role_name: Option<Value<String>>,

    /// A list of tags that are attached to the role.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,
}

impl ResourceProperties for Role {
    const TYPE: &'static str = "AWS::IAM::Role";
}

/// Contains information about an attached policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    /// The entire contents of the policy that defines permissions.
    ///
    /// Required: Yes.
    #[serde(rename = "PolicyDocument")]
    pub policy_document: Json,

    /// The friendly name (not ARN) identifying the policy.
    ///
    /// Required: Yes.
    #[serde(rename = "PolicyName")]
    pub policy_name: Value<String>,
}
