//! AWS::EC2::VerifiedAccessEndpoint property types
//!
//! Auto-generated from CloudFormation schema: AWS::EC2::VerifiedAccessEndpoint
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// The AWS::EC2::VerifiedAccessEndpoint resource creates an AWS EC2 Verified Access Endpoint.
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-verifiedaccessendpoint.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifiedAccessEndpoint {
    /// The DNS name for users to reach your application.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "ApplicationDomain", skip_serializing_if = "Option::is_none")]
    pub application_domain: Option<Value<String>>,

    /// The type of attachment used to provide connectivity between the AWS Verified Access endpoint and the application.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "AttachmentType")]
    pub attachment_type: Value<String>,

    /// The options for cidr type endpoint.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "CidrOptions", skip_serializing_if = "Option::is_none")]
    pub cidr_options: Option<CidrOptions>,

    /// A description for the AWS Verified Access endpoint.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// The ARN of a public TLS/SSL certificate imported into or created with ACM.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "DomainCertificateArn", skip_serializing_if = "Option::is_none")]
    pub domain_certificate_arn: Option<Value<String>>,

    /// A custom identifier that gets prepended to a DNS name that is generated for the endpoint.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "EndpointDomainPrefix", skip_serializing_if = "Option::is_none")]
    pub endpoint_domain_prefix: Option<Value<String>>,

    /// The type of AWS Verified Access endpoint.
    ///
    /// Allowed values: `load-balancer` | `network-interface` | `rds` | `cidr`
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "EndpointType")]
    pub endpoint_type: Value<String>,

    /// The load balancer details if creating the AWS Verified Access endpoint as load-balancer type.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "LoadBalancerOptions", skip_serializing_if = "Option::is_none")]
    pub load_balancer_options: Option<LoadBalancerOptions>,

    /// The options for network-interface type endpoint.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "NetworkInterfaceOptions", skip_serializing_if = "Option::is_none")]
    pub network_interface_options: Option<NetworkInterfaceOptions>,

    /// The AWS Verified Access policy document.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "PolicyDocument", skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<Value<String>>,

    /// The status of the Verified Access policy.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "PolicyEnabled", skip_serializing_if = "Option::is_none")]
    pub policy_enabled: Option<Value<bool>>,

    /// The options for rds type endpoint.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "RdsOptions", skip_serializing_if = "Option::is_none")]
    pub rds_options: Option<RdsOptions>,

    /// The IDs of the security groups for the endpoint.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<List<Value<String>>>,

    /// The configuration options for customer provided KMS encryption.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "SseSpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SseSpecification>,

    /// An array of key-value pairs to apply to this resource.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,

    /// The ID of the AWS Verified Access group.
    ///
    /// Required: Yes. Update requires: No interruption.
    #[serde(rename = "VerifiedAccessGroupId")]
    pub verified_access_group_id: Value<String>,
}

impl ResourceProperties for VerifiedAccessEndpoint {
    const TYPE: &'static str = "AWS::EC2::VerifiedAccessEndpoint";
}

/// The options for cidr type endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CidrOptions {
    /// The IP address range, in CIDR notation.
    ///
    /// Required: No.
    #[serde(rename = "Cidr", skip_serializing_if = "Option::is_none")]
    pub cidr: Option<Value<String>>,

    /// The list of port ranges.
    ///
    /// Required: No.
    #[serde(rename = "PortRanges", skip_serializing_if = "Option::is_none")]
    pub port_ranges: Option<List<PortRange>>,

    /// The IP protocol.
    ///
    /// Required: No.
    #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Value<String>>,

    /// The IDs of the subnets.
    ///
    /// Required: No.
    #[serde(rename = "SubnetIds", skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<List<Value<String>>>,
}

/// The load balancer details if creating the AWS Verified Access endpoint as load-balancer type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadBalancerOptions {
    /// The ARN of the load balancer.
    ///
    /// Required: No.
    #[serde(rename = "LoadBalancerArn", skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<Value<String>>,

    /// The IP port number.
    ///
    /// Required: No.
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<Value<i64>>,

    /// The list of port range.
    ///
    /// Required: No.
    #[serde(rename = "PortRanges", skip_serializing_if = "Option::is_none")]
    pub port_ranges: Option<List<PortRange>>,

    /// The IP protocol.
    ///
    /// Allowed values: `http` | `https` | `tcp`
    ///
    /// Required: No.
    #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Value<String>>,

    /// The IDs of the subnets.
    ///
    /// Required: No.
    #[serde(rename = "SubnetIds", skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<List<Value<String>>>,
}

/// The options for network-interface type endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkInterfaceOptions {
    /// The ID of the network interface.
    ///
    /// Required: No.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<Value<String>>,

    /// The IP port number.
    ///
    /// Required: No.
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<Value<i64>>,

    /// The list of port ranges.
    ///
    /// Required: No.
    #[serde(rename = "PortRanges", skip_serializing_if = "Option::is_none")]
    pub port_ranges: Option<List<PortRange>>,

    /// The IP protocol.
    ///
    /// Allowed values: `http` | `https` | `tcp`
    ///
    /// Required: No.
    #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Value<String>>,
}

/// The IP port range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortRange {
    /// The first port in the range.
    ///
    /// Required: No.
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    pub from_port: Option<Value<i64>>,

    /// The last port in the range.
    ///
    /// Required: No.
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    pub to_port: Option<Value<i64>>,
}

/// The options for rds type endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RdsOptions {
    /// The IP port number.
    ///
    /// Required: No.
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<Value<i64>>,

    /// The IP protocol.
    ///
    /// Required: No.
    #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Value<String>>,

    /// The ARN of the RDS DB cluster.
    ///
    /// Required: No.
    #[serde(rename = "RdsDbClusterArn", skip_serializing_if = "Option::is_none")]
    pub rds_db_cluster_arn: Option<Value<String>>,

    /// The ARN of the RDS instance.
    ///
    /// Required: No.
    #[serde(rename = "RdsDbInstanceArn", skip_serializing_if = "Option::is_none")]
    pub rds_db_instance_arn: Option<Value<String>>,

    /// The ARN of the RDS proxy.
    ///
    /// Required: No.
    #[serde(rename = "RdsDbProxyArn", skip_serializing_if = "Option::is_none")]
    pub rds_db_proxy_arn: Option<Value<String>>,

    /// The RDS endpoint.
    ///
    /// Required: No.
    #[serde(rename = "RdsEndpoint", skip_serializing_if = "Option::is_none")]
    pub rds_endpoint: Option<Value<String>>,

    /// The IDs of the subnets.
    ///
    /// Required: No.
    #[serde(rename = "SubnetIds", skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<List<Value<String>>>,
}

/// The configuration options for customer provided KMS encryption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SseSpecification {
    /// Whether to encrypt the policy with the provided key or disable encryption
    ///
    /// Required: No.
    #[serde(rename = "CustomerManagedKeyEnabled", skip_serializing_if = "Option::is_none")]
    pub customer_managed_key_enabled: Option<Value<bool>>,

    /// KMS Key Arn used to encrypt the group policy
    ///
    /// Required: No.
    #[serde(rename = "KmsKeyArn", skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<Value<String>>,
}
