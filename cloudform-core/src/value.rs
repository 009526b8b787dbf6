//! Value - Literal-or-intrinsic property values
//!
//! Every scalar property of a CloudFormation resource may hold either a
//! concrete literal or an intrinsic function resolved at deployment time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::intrinsic::{Intrinsic, intrinsic_key};

/// Free-form JSON property (policy documents, tag maps, ...)
pub type Json = serde_json::Value;

/// A list property; the list itself may also come from an intrinsic
/// (e.g. `Fn::Split` or `Fn::GetAZs`)
pub type List<T> = Value<Vec<T>>;

/// A property value: a literal of type `T` or an intrinsic function
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Literal(T),
    Intrinsic(Box<Intrinsic>),
}

impl<T> Value<T> {
    pub fn literal(value: impl Into<T>) -> Self {
        Value::Literal(value.into())
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Literal(_) => None,
            Value::Intrinsic(i) => Some(i),
        }
    }
}

impl<T: Default> Default for Value<T> {
    fn default() -> Self {
        Value::Literal(T::default())
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(Box::new(intrinsic))
    }
}

impl From<&str> for Value<String> {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

impl From<bool> for Value<bool> {
    fn from(b: bool) -> Self {
        Value::Literal(b)
    }
}

impl From<i64> for Value<i64> {
    fn from(n: i64) -> Self {
        Value::Literal(n)
    }
}

impl From<f64> for Value<f64> {
    fn from(n: f64) -> Self {
        Value::Literal(n)
    }
}

impl<T> From<Vec<T>> for Value<Vec<T>> {
    fn from(items: Vec<T>) -> Self {
        Value::Literal(items)
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(v) => v.serialize(serializer),
            Value::Intrinsic(i) => i.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        if intrinsic_key(&raw).is_some() {
            Intrinsic::from_json(&raw)
                .map(Value::from)
                .map_err(serde::de::Error::custom)
        } else {
            serde_json::from_value(raw)
                .map(Value::Literal)
                .map_err(serde::de::Error::custom)
        }
    }
}

/// A resource tag, shared by most AWS resource types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: Value<String>,
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: impl Into<Value<String>>, value: impl Into<Value<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_serializes_as_inner_value() {
        let v: Value<i64> = Value::literal(30);
        assert_eq!(serde_json::to_value(&v).unwrap(), json!(30));
    }

    #[test]
    fn intrinsic_accepted_in_scalar_slot() {
        let v: Value<bool> = serde_json::from_value(json!({"Ref": "EnableLogs"})).unwrap();
        assert_eq!(
            v.as_intrinsic(),
            Some(&Intrinsic::Ref("EnableLogs".to_string()))
        );
        assert_eq!(serde_json::to_value(&v).unwrap(), json!({"Ref": "EnableLogs"}));
    }

    #[test]
    fn wrong_literal_kind_is_rejected() {
        let result: Result<Value<i64>, _> = serde_json::from_value(json!("thirty"));
        assert!(result.is_err());
    }

    #[test]
    fn list_may_be_intrinsic_or_contain_intrinsics() {
        let whole: List<Value<String>> =
            serde_json::from_value(json!({"Fn::GetAZs": ""})).unwrap();
        assert!(whole.is_intrinsic());

        let items: List<Value<String>> =
            serde_json::from_value(json!(["subnet-1", {"Ref": "SubnetB"}])).unwrap();
        let literal = items.as_literal().unwrap();
        assert_eq!(literal[0], Value::literal("subnet-1"));
        assert!(literal[1].is_intrinsic());
    }

    #[test]
    fn tag_rejects_unknown_fields() {
        let tag: Tag = serde_json::from_value(json!({"Key": "team", "Value": "data"})).unwrap();
        assert_eq!(tag, Tag::new("team", "data"));
        assert!(serde_json::from_value::<Tag>(json!({"Key": "a", "Value": "b", "Extra": 1})).is_err());
    }
}
