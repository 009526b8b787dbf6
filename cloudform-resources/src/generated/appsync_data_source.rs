//! AWS::AppSync::DataSource property types
//!
//! Auto-generated from CloudFormation schema: AWS::AppSync::DataSource
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::Value;
use serde::{Deserialize, Serialize};

/// The AWS::AppSync::DataSource resource creates data sources for resolvers in AWS AppSync to connect to, such as Amazon DynamoDB, AWS Lambda, and Amazon OpenSearch Service.
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appsync-datasource.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSource {
    /// Unique AWS AppSync GraphQL API identifier where this data source will be created.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "ApiId")]
    pub api_id: Value<String>,

    /// The description of the data source.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// AWS Region and TableName for an Amazon DynamoDB table in your account.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "DynamoDBConfig", skip_serializing_if = "Option::is_none")]
    pub dynamo_db_config: Option<DynamoDBConfig>,

    /// AWS Region and Endpoints for an Amazon OpenSearch Service domain in your account. Deprecated in favor of OpenSearchServiceConfig.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ElasticsearchConfig", skip_serializing_if = "Option::is_none")]
    pub elasticsearch_config: Option<ElasticsearchConfig>,

    /// An EventBridge configuration that contains a valid ARN of an event bus.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "EventBridgeConfig", skip_serializing_if = "Option::is_none")]
    pub event_bridge_config: Option<EventBridgeConfig>,

    /// Endpoints for an HTTP data source.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "HttpConfig", skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpConfig>,

    /// An ARN of a Lambda function in valid ARN format.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "LambdaConfig", skip_serializing_if = "Option::is_none")]
    pub lambda_config: Option<LambdaConfig>,

    /// Enables or disables enhanced data source metrics for specified data sources.
    ///
    /// Allowed values: `ENABLED` | `DISABLED`
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "MetricsConfig", skip_serializing_if = "Option::is_none")]
    pub metrics_config: Option<Value<String>>,

    /// Friendly name for you to identify your AppSync data source after creation.
    ///
    /// Required: Yes. Update requires: Replacement.
    #[serde(rename = "Name")]
    pub name: Value<String>,

    /// AWS Region and Endpoints for an Amazon OpenSearch Service domain in your account.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "OpenSearchServiceConfig", skip_serializing_if = "Option::is_none")]
    pub open_search_service_config: Option<OpenSearchServiceConfig>,

    /// Relational Database configuration of the relational database data source.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "RelationalDatabaseConfig", skip_serializing_if = "Option::is_none")]
    pub relational_database_config: Option<RelationalDatabaseConfig>,

    /// The AWS Identity and Access Management service role ARN for the data source.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ServiceRoleArn", skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<Value<String>>,

    /// The type of the data source.
    ///
    /// Allowed values: `AWS_LAMBDA` | `AMAZON_DYNAMODB` | `AMAZON_ELASTICSEARCH` | `AMAZON_OPENSEARCH_SERVICE` | `NONE` | `HTTP` | `RELATIONAL_DATABASE` | `AMAZON_EVENTBRIDGE` | `AMAZON_BEDROCK_RUNTIME`
    ///
    /// Required: Yes. Update requires: No interruption.
    #[serde(rename = "Type")]
    pub r#type: Value<String>,
}

impl ResourceProperties for DataSource {
    const TYPE: &'static str = "AWS::AppSync::DataSource";
}

/// The AuthorizationConfig property type specifies the authorization type and configuration for an HTTP data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorizationConfig {
    /// The authorization type that the HTTP endpoint requires.
    ///
    /// Allowed values: `AWS_IAM`
    ///
    /// Required: Yes.
    #[serde(rename = "AuthorizationType")]
    pub authorization_type: Value<String>,

    /// The AWS Identity and Access Management settings.
    ///
    /// Required: No.
    #[serde(rename = "AwsIamConfig", skip_serializing_if = "Option::is_none")]
    pub aws_iam_config: Option<AwsIamConfig>,
}

/// Use the AwsIamConfig property type to specify AwsIamConfig for a AWS AppSync authorization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsIamConfig {
    /// The signing Region for AWS Identity and Access Management authorization.
    ///
    /// Required: No.
    #[serde(rename = "SigningRegion", skip_serializing_if = "Option::is_none")]
    pub signing_region: Option<Value<String>>,

    /// The signing service name for AWS Identity and Access Management authorization.
    ///
    /// Required: No.
    #[serde(rename = "SigningServiceName", skip_serializing_if = "Option::is_none")]
    pub signing_service_name: Option<Value<String>>,
}

/// Describes a Delta Sync configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeltaSyncConfig {
    /// The number of minutes that an Item is stored in the data source.
    ///
    /// Required: Yes.
    #[serde(rename = "BaseTableTTL")]
    pub base_table_ttl: Value<String>,

    /// The Delta Sync table name.
    ///
    /// Required: Yes.
    #[serde(rename = "DeltaSyncTableName")]
    pub delta_sync_table_name: Value<String>,

    /// The number of minutes that a Delta Sync log entry is stored in the Delta Sync table.
    ///
    /// Required: Yes.
    #[serde(rename = "DeltaSyncTableTTL")]
    pub delta_sync_table_ttl: Value<String>,
}

/// The DynamoDBConfig property type specifies the AwsRegion and TableName for an Amazon DynamoDB table in your account for an AWS AppSync data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DynamoDBConfig {
    /// The AWS Region.
    ///
    /// Required: Yes.
    #[serde(rename = "AwsRegion")]
    pub aws_region: Value<String>,

    /// The DeltaSyncConfig for a versioned datasource.
    ///
    /// Required: No.
    #[serde(rename = "DeltaSyncConfig", skip_serializing_if = "Option::is_none")]
    pub delta_sync_config: Option<DeltaSyncConfig>,

    /// The table name.
    ///
    /// Required: Yes.
    #[serde(rename = "TableName")]
    pub table_name: Value<String>,

    /// Set to TRUE to use AWS Identity and Access Management with this data source.
    ///
    /// Required: No.
    #[serde(rename = "UseCallerCredentials", skip_serializing_if = "Option::is_none")]
    pub use_caller_credentials: Option<Value<bool>>,

    /// Set to TRUE to use Conflict Detection and Resolution with this data source.
    ///
    /// Required: No.
    #[serde(rename = "Versioned", skip_serializing_if = "Option::is_none")]
    pub versioned: Option<Value<bool>>,
}

/// The ElasticsearchConfig property type specifies the AwsRegion and Endpoints for an Amazon OpenSearch Service domain in your account for an AWS AppSync data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElasticsearchConfig {
    /// The AWS Region.
    ///
    /// Required: Yes.
    #[serde(rename = "AwsRegion")]
    pub aws_region: Value<String>,

    /// The endpoint.
    ///
    /// Required: Yes.
    #[serde(rename = "Endpoint")]
    pub endpoint: Value<String>,
}

/// The data source. This can be an API destination, resource, or AWS service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventBridgeConfig {
    /// The event bus pipeline's ARN.
    ///
    /// Required: Yes.
    #[serde(rename = "EventBusArn")]
    pub event_bus_arn: Value<String>,
}

/// Use the HttpConfig property type to specify HttpConfig for an AWS AppSync data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// The authorization configuration.
    ///
    /// Required: No.
    #[serde(rename = "AuthorizationConfig", skip_serializing_if = "Option::is_none")]
    pub authorization_config: Option<AuthorizationConfig>,

    /// The endpoint.
    ///
    /// Required: Yes.
    #[serde(rename = "Endpoint")]
    pub endpoint: Value<String>,
}

/// The LambdaConfig property type specifies the Lambda function ARN for an AWS AppSync data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LambdaConfig {
    /// The ARN for the Lambda function.
    ///
    /// Required: Yes.
    #[serde(rename = "LambdaFunctionArn")]
    pub lambda_function_arn: Value<String>,
}

/// The OpenSearchServiceConfig property type specifies the AwsRegion and Endpoints for an Amazon OpenSearch Service domain in your account for an AWS AppSync data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenSearchServiceConfig {
    /// The AWS Region.
    ///
    /// Required: Yes.
    #[serde(rename = "AwsRegion")]
    pub aws_region: Value<String>,

    /// The endpoint.
    ///
    /// Required: Yes.
    #[serde(rename = "Endpoint")]
    pub endpoint: Value<String>,
}

/// Use the RdsHttpEndpointConfig property type to specify the RdsHttpEndpoint for an AWS AppSync relational database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RdsHttpEndpointConfig {
    /// AWS Region for RDS HTTP endpoint.
    ///
    /// Required: Yes.
    #[serde(rename = "AwsRegion")]
    pub aws_region: Value<String>,

    /// The ARN for database credentials stored in AWS Secrets Manager.
    ///
    /// Required: Yes.
    #[serde(rename = "AwsSecretStoreArn")]
    pub aws_secret_store_arn: Value<String>,

    /// Logical database name.
    ///
    /// Required: No.
    #[serde(rename = "DatabaseName", skip_serializing_if = "Option::is_none")]
    pub database_name: Option<Value<String>>,

    /// Amazon RDS cluster Amazon Resource Name (ARN).
    ///
    /// Required: Yes.
    #[serde(rename = "DbClusterIdentifier")]
    pub db_cluster_identifier: Value<String>,

    /// Logical schema name.
    ///
    /// Required: No.
    #[serde(rename = "Schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value<String>>,
}

/// Use the RelationalDatabaseConfig property type to specify RelationalDatabaseConfig for an AWS AppSync data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationalDatabaseConfig {
    /// Information about the Amazon RDS resource.
    ///
    /// Required: No.
    #[serde(rename = "RdsHttpEndpointConfig", skip_serializing_if = "Option::is_none")]
    pub rds_http_endpoint_config: Option<RdsHttpEndpointConfig>,

    /// The type of relational data source.
    ///
    /// Allowed values: `RDS_HTTP_ENDPOINT`
    ///
    /// Required: Yes.
    #[serde(rename = "RelationalDatabaseSourceType")]
    pub relational_database_source_type: Value<String>,
}
