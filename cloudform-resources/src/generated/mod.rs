//! Auto-generated AWS CloudFormation resource property types
//!
//! One module per resource type. DO NOT EDIT MANUALLY - regenerate each
//! module with:
//!   cloudform-codegen --file <schema.json> -o cloudform-resources/src/generated/<module>.rs

pub mod appsync_data_source;
pub mod athena_work_group;
pub mod ec2_verified_access_endpoint;
pub mod eks_nodegroup;
pub mod emr_instance_group_config;
pub mod iam_role;
pub mod logs_log_group;
pub mod sqs_queue;

#[cfg(test)]
mod tests {
    use super::*;
    use cloudform_core::intrinsic::Intrinsic;
    use cloudform_core::resource::{Resource, ResourceEntry};
    use cloudform_core::value::{Tag, Value};
    use serde_json::json;

    #[test]
    fn data_source_with_nested_bags() {
        let props: appsync_data_source::DataSource = serde_json::from_value(json!({
            "ApiId": {"Fn::GetAtt": ["Api", "ApiId"]},
            "Name": "orders",
            "Type": "AMAZON_DYNAMODB",
            "DynamoDBConfig": {
                "AwsRegion": {"Ref": "AWS::Region"},
                "TableName": "orders",
                "DeltaSyncConfig": {
                    "BaseTableTTL": "43200",
                    "DeltaSyncTableName": "changes",
                    "DeltaSyncTableTTL": "30"
                }
            }
        }))
        .unwrap();

        assert_eq!(
            props.api_id,
            Value::from(Intrinsic::GetAtt {
                resource: "Api".to_string(),
                attribute: "ApiId".to_string()
            })
        );
        assert_eq!(props.r#type, Value::from("AMAZON_DYNAMODB"));
        let dynamo = props.dynamo_db_config.unwrap();
        assert!(dynamo.aws_region.is_intrinsic());
        assert_eq!(
            dynamo.delta_sync_config.unwrap().base_table_ttl,
            Value::from("43200")
        );
    }

    #[test]
    fn missing_required_field_fails() {
        let err = serde_json::from_value::<appsync_data_source::DataSource>(json!({
            "ApiId": "abc",
            "Type": "NONE"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `Name`"));

        let err = serde_json::from_value::<emr_instance_group_config::VolumeSpecification>(
            json!({"SizeInGB": 100}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `VolumeType`"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = serde_json::from_value::<sqs_queue::Queue>(json!({"QueueNmae": "jobs"}))
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `QueueNmae`"));
    }

    #[test]
    fn wrong_literal_kind_is_rejected() {
        assert!(
            serde_json::from_value::<sqs_queue::Queue>(json!({"DelaySeconds": "ten"})).is_err()
        );
        assert!(serde_json::from_value::<sqs_queue::Queue>(json!({"FifoQueue": 1})).is_err());
    }

    #[test]
    fn work_group_serializes_only_present_fields() {
        let props = athena_work_group::WorkGroup {
            name: "analytics".into(),
            state: Some("ENABLED".into()),
            tags: Some(Value::literal(vec![Tag::new("team", "data")])),
            work_group_configuration: Some(athena_work_group::WorkGroupConfiguration {
                enforce_work_group_configuration: Some(true.into()),
                result_configuration: Some(athena_work_group::ResultConfiguration {
                    output_location: Some(
                        Intrinsic::Sub {
                            template: "s3://${Bucket}/results/".to_string(),
                            variables: Default::default(),
                        }
                        .into(),
                    ),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({
                "Name": "analytics",
                "State": "ENABLED",
                "Tags": [{"Key": "team", "Value": "data"}],
                "WorkGroupConfiguration": {
                    "EnforceWorkGroupConfiguration": true,
                    "ResultConfiguration": {
                        "OutputLocation": {"Fn::Sub": "s3://${Bucket}/results/"}
                    }
                }
            })
        );
    }

    #[test]
    fn emr_configurations_nest_recursively() {
        let props: emr_instance_group_config::InstanceGroupConfig =
            serde_json::from_value(json!({
                "InstanceCount": 2,
                "InstanceRole": "TASK",
                "InstanceType": "m5.xlarge",
                "JobFlowId": {"Ref": "Cluster"},
                "Configurations": [{
                    "Classification": "hadoop-env",
                    "Configurations": [{
                        "Classification": "export",
                        "ConfigurationProperties": {"JAVA_HOME": "/usr/lib/jvm"}
                    }]
                }]
            }))
            .unwrap();

        let outer = props.configurations.unwrap();
        let outer = outer.as_literal().unwrap();
        let inner = outer[0].configurations.as_ref().unwrap().as_literal().unwrap();
        assert_eq!(inner[0].classification, Some(Value::from("export")));
        assert_eq!(
            inner[0].configuration_properties,
            Some(json!({"JAVA_HOME": "/usr/lib/jvm"}))
        );
    }

    #[test]
    fn list_slot_accepts_intrinsic() {
        let props: eks_nodegroup::Nodegroup = serde_json::from_value(json!({
            "ClusterName": "prod",
            "NodeRole": {"Fn::GetAtt": ["NodeRole", "Arn"]},
            "Subnets": {"Fn::Split": [",", {"Ref": "SubnetIds"}]},
            "Labels": {"tier": "web"},
            "ScalingConfig": {"MinSize": 1, "MaxSize": 3, "DesiredSize": 2}
        }))
        .unwrap();
        assert!(props.subnets.is_intrinsic());
        assert_eq!(props.scaling_config.unwrap().max_size, Some(Value::Literal(3)));
    }

    #[test]
    fn typed_resource_round_trips_through_entry() {
        let role = Resource::new(iam_role::Role {
            assume_role_policy_document: json!({
                "Version": "2012-10-17",
                "Statement": [{"Effect": "Allow", "Principal": {"Service": "eks.amazonaws.com"}, "Action": "sts:AssumeRole"}]
            }),
            role_name: Some("cluster".into()),
            ..Default::default()
        })
        .with_condition("IsProd");

        let entry = ResourceEntry::from_typed(&role).unwrap();
        assert_eq!(entry.resource_type, "AWS::IAM::Role");
        assert_eq!(entry.to_typed::<iam_role::Role>().unwrap(), role);
        assert!(entry.to_typed::<sqs_queue::Queue>().is_err());
    }
}
