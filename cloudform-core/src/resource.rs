//! Resource - Typed and untyped resource declarations

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::attributes::ResourceAttributes;
use crate::template::TemplateError;
use crate::value::Json;

/// Properties of a CloudFormation resource type.
///
/// Implemented by every generated properties struct; `TYPE` is the
/// discriminant written to the template's `Type` field.
pub trait ResourceProperties: Serialize + DeserializeOwned {
    /// CloudFormation resource type (e.g., "AWS::Athena::WorkGroup")
    const TYPE: &'static str;
}

/// A resource with typed properties
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    /// Replace all attributes, including any `DependsOn` added before
    pub fn with_attributes(mut self, attributes: ResourceAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        self.attributes.depends_on.push(logical_id.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn resource_type(&self) -> &'static str {
        P::TYPE
    }
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entry = ResourceEntry::from_typed(self).map_err(serde::ser::Error::custom)?;
        entry.serialize(serializer)
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entry = ResourceEntry::deserialize(deserializer)?;
        entry.to_typed().map_err(serde::de::Error::custom)
    }
}

/// A resource as declared in a template, with properties left as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    #[serde(rename = "Type")]
    pub resource_type: String,

    #[serde(rename = "Properties", skip_serializing_if = "Option::is_none")]
    pub properties: Option<Json>,

    #[serde(flatten)]
    pub attributes: ResourceAttributes,

    /// Keys that are neither `Type`, `Properties` nor a resource attribute.
    /// Kept so that re-rendering does not drop them; lint reports them.
    #[serde(flatten)]
    pub unknown: IndexMap<String, Json>,
}

impl ResourceEntry {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties: None,
            attributes: ResourceAttributes::default(),
            unknown: IndexMap::new(),
        }
    }

    pub fn with_properties(mut self, properties: Json) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Convert a typed resource into a template entry
    pub fn from_typed<P: ResourceProperties>(resource: &Resource<P>) -> Result<Self, TemplateError> {
        let properties = serde_json::to_value(&resource.properties).map_err(|e| {
            TemplateError::InvalidProperties {
                resource_type: P::TYPE.to_string(),
                message: e.to_string(),
            }
        })?;
        // An all-empty properties object is omitted, as CloudFormation allows
        let properties = match properties {
            Json::Object(map) if map.is_empty() => None,
            other => Some(other),
        };
        Ok(Self {
            resource_type: P::TYPE.to_string(),
            properties,
            attributes: resource.attributes.clone(),
            unknown: IndexMap::new(),
        })
    }

    /// Interpret this entry as a resource of type `P`
    pub fn to_typed<P: ResourceProperties>(&self) -> Result<Resource<P>, TemplateError> {
        if self.resource_type != P::TYPE {
            return Err(TemplateError::TypeMismatch {
                expected: P::TYPE.to_string(),
                actual: self.resource_type.clone(),
            });
        }
        let properties = self.typed_properties::<P>()?;
        Ok(Resource {
            properties,
            attributes: self.attributes.clone(),
        })
    }

    /// Deserialize the `Properties` block into `P` without checking `Type`
    pub fn typed_properties<P: DeserializeOwned>(&self) -> Result<P, TemplateError> {
        let raw = self
            .properties
            .clone()
            .unwrap_or_else(|| Json::Object(Default::default()));
        serde_json::from_value(raw).map_err(|e| TemplateError::InvalidProperties {
            resource_type: self.resource_type.clone(),
            message: e.to_string(),
        })
    }

    /// Returns true for `Custom::*` and `AWS::CloudFormation::CustomResource`
    pub fn is_custom(&self) -> bool {
        self.resource_type.starts_with("Custom::")
            || self.resource_type == "AWS::CloudFormation::CustomResource"
    }
}
