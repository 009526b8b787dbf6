//! AWS::SQS::Queue property types
//!
//! Auto-generated from CloudFormation schema: AWS::SQS::Queue
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::resource::ResourceProperties;
use cloudform_core::value::{Json, List, Tag, Value};
use serde::{Deserialize, Serialize};

/// The AWS::SQS::Queue resource creates an SQS standard or FIFO queue.
///
/// See <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Queue {
    /// For first-in-first-out (FIFO) queues, specifies whether to enable content-based deduplication.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ContentBasedDeduplication", skip_serializing_if = "Option::is_none")]
    pub content_based_deduplication: Option<Value<bool>>,

    /// For high throughput for FIFO queues, specifies whether message deduplication occurs at the message group or queue level.
    ///
    /// Allowed values: `messageGroup` | `queue`
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "DeduplicationScope", skip_serializing_if = "Option::is_none")]
    pub deduplication_scope: Option<Value<String>>,

    /// The time in seconds for which the delivery of all messages in the queue is delayed.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "DelaySeconds", skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<Value<i64>>,

    /// If set to true, creates a FIFO queue. If you don't specify this property, SQS creates a standard queue.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "FifoQueue", skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<Value<bool>>,

    /// For high throughput for FIFO queues, specifies whether the FIFO queue throughput quota applies to the entire queue or per message group.
    ///
    /// Allowed values: `perQueue` | `perMessageGroupId`
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "FifoThroughputLimit", skip_serializing_if = "Option::is_none")]
    pub fifo_throughput_limit: Option<Value<String>>,

    /// The length of time in seconds for which SQS can reuse a data key to encrypt or decrypt messages before calling KMS again.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "KmsDataKeyReusePeriodSeconds", skip_serializing_if = "Option::is_none")]
    pub kms_data_key_reuse_period_seconds: Option<Value<i64>>,

    /// The ID of an AWS Key Management Service (KMS) for SQS, or a custom KMS.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "KmsMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Value<String>>,

    /// The limit of how many bytes that a message can contain before SQS rejects it.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "MaximumMessageSize", skip_serializing_if = "Option::is_none")]
    pub maximum_message_size: Option<Value<i64>>,

    /// The number of seconds that SQS retains a message.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "MessageRetentionPeriod", skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<Value<i64>>,

    /// A name for the queue. To create a FIFO queue, the name of your FIFO queue must end with the .fifo suffix.
    ///
    /// Required: No. Update requires: Replacement.
    #[serde(rename = "QueueName", skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<Value<String>>,

    /// Specifies the duration, in seconds, that the ReceiveMessage action call waits until a message is in the queue in order to include it in the response.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "ReceiveMessageWaitTimeSeconds", skip_serializing_if = "Option::is_none")]
    pub receive_message_wait_time_seconds: Option<Value<i64>>,

    /// The string that includes the parameters for the permissions for the dead-letter queue redrive permission.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "RedriveAllowPolicy", skip_serializing_if = "Option::is_none")]
    pub redrive_allow_policy: Option<Json>,

    /// The string that includes the parameters for the dead-letter queue functionality of the source queue as a JSON object.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "RedrivePolicy", skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<Json>,

    /// Enables server-side queue encryption using SQS owned encryption keys.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "SqsManagedSseEnabled", skip_serializing_if = "Option::is_none")]
    pub sqs_managed_sse_enabled: Option<Value<bool>>,

    /// The tags that you attach to this queue.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,

    /// The length of time during which a message will be unavailable after a message is delivered from the queue.
    ///
    /// Required: No. Update requires: No interruption.
    #[serde(rename = "VisibilityTimeout", skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<Value<i64>>,
}

impl ResourceProperties for Queue {
    const TYPE: &'static str = "AWS::SQS::Queue";
}
