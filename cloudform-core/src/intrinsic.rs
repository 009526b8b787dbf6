//! Intrinsic - CloudFormation intrinsic functions
//!
//! Any value in a template may be deferred to deployment time by an intrinsic
//! function such as `Ref` or `Fn::GetAtt`. In JSON these are single-key
//! objects (`{"Fn::Join": [",", [...]]}`); this module parses them into a typed
//! tree and renders them back.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

/// Pseudo parameters predefined by CloudFormation
pub const PSEUDO_PARAMETERS: &[&str] = &[
    "AWS::AccountId",
    "AWS::NotificationARNs",
    "AWS::NoValue",
    "AWS::Partition",
    "AWS::Region",
    "AWS::StackId",
    "AWS::StackName",
    "AWS::URLSuffix",
];

/// Returns true if `name` is a CloudFormation pseudo parameter
pub fn is_pseudo_parameter(name: &str) -> bool {
    PSEUDO_PARAMETERS.contains(&name)
}

/// Error raised when an intrinsic function payload is malformed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntrinsicError {
    #[error("Invalid {function}: expected {expected}")]
    Malformed {
        function: String,
        expected: &'static str,
    },

    #[error("Value is not an intrinsic function")]
    NotIntrinsic,
}

impl IntrinsicError {
    fn malformed(function: &str, expected: &'static str) -> Self {
        Self::Malformed {
            function: function.to_string(),
            expected,
        }
    }
}

/// A JSON-like expression tree in which intrinsic functions are recognised
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Expr>),
    Map(IndexMap<String, Expr>),
    Intrinsic(Box<Intrinsic>),
}

/// A CloudFormation intrinsic function
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// `Ref`: a parameter value, a resource's physical ID or a pseudo parameter
    Ref(String),
    /// `Fn::GetAtt`: attribute of another resource
    GetAtt { resource: String, attribute: String },
    /// `Fn::GetAtt` whose attribute name is computed, e.g. `["Res", {"Ref": "Attr"}]`
    GetAttComputed { resource: String, attribute: Expr },
    /// `Fn::Sub`: string interpolation with optional local variables
    Sub {
        template: String,
        variables: IndexMap<String, Expr>,
    },
    /// `Fn::Join`
    Join { delimiter: String, values: Expr },
    /// `Fn::Select`
    Select { index: Expr, list: Expr },
    /// `Fn::Split`
    Split { delimiter: String, source: Expr },
    /// `Fn::FindInMap`
    FindInMap {
        map: Expr,
        top_key: Expr,
        second_key: Expr,
    },
    /// `Fn::GetAZs`
    GetAZs(Expr),
    /// `Fn::ImportValue`
    ImportValue(Expr),
    /// `Fn::Base64`
    Base64(Expr),
    /// `Fn::Cidr`
    Cidr {
        ip_block: Expr,
        count: Expr,
        cidr_bits: Expr,
    },
    /// `Fn::If`
    If {
        condition: String,
        if_true: Expr,
        if_false: Expr,
    },
    /// `Fn::Equals`
    Equals(Expr, Expr),
    /// `Fn::And`
    And(Vec<Expr>),
    /// `Fn::Or`
    Or(Vec<Expr>),
    /// `Fn::Not`
    Not(Expr),
    /// `Condition`: reference to a named condition (condition contexts only)
    Condition(String),
    /// `Fn::ToJsonString` (AWS::LanguageExtensions)
    ToJsonString(Expr),
    /// `Fn::Length` (AWS::LanguageExtensions)
    Length(Expr),
    /// Any other `Fn::*` function, kept verbatim
    Other { function: String, argument: Expr },
}

/// Something an expression points at elsewhere in the template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// `Ref` or `${Name}` in `Fn::Sub`
    Ref(String),
    /// `Fn::GetAtt` or `${Resource.Attribute}` in `Fn::Sub`;
    /// `attribute` is `None` when it is computed by another function
    GetAtt {
        resource: String,
        attribute: Option<String>,
    },
    /// A named condition
    Condition(String),
    /// A literal mapping name in `Fn::FindInMap`
    Mapping(String),
}

impl Reference {
    /// Logical name this reference targets
    pub fn target(&self) -> &str {
        match self {
            Reference::Ref(name) | Reference::Condition(name) | Reference::Mapping(name) => name,
            Reference::GetAtt { resource, .. } => resource,
        }
    }
}

/// Returns the function name if `value` has the shape of an intrinsic call.
///
/// `Condition` is not included: it is only an intrinsic inside condition
/// expressions, and elsewhere a single `Condition` key is ordinary data.
pub fn intrinsic_key(value: &Json) -> Option<&str> {
    let map = value.as_object()?;
    if map.len() != 1 {
        return None;
    }
    let key = map.keys().next()?;
    if key == "Ref" || key.starts_with("Fn::") {
        Some(key.as_str())
    } else {
        None
    }
}

impl Expr {
    /// Parse a JSON value, recognising intrinsic functions at any depth
    pub fn from_json(value: &Json) -> Result<Self, IntrinsicError> {
        Ok(match value {
            Json::Null => Expr::Null,
            Json::Bool(b) => Expr::Bool(*b),
            Json::Number(n) => Expr::Number(n.clone()),
            Json::String(s) => Expr::String(s.clone()),
            Json::Array(items) => Expr::List(
                items
                    .iter()
                    .map(Expr::from_json)
                    .collect::<Result<_, _>>()?,
            ),
            Json::Object(map) => {
                if intrinsic_key(value).is_some() {
                    Expr::Intrinsic(Box::new(Intrinsic::from_json(value)?))
                } else {
                    Expr::Map(
                        map.iter()
                            .map(|(k, v)| Ok((k.clone(), Expr::from_json(v)?)))
                            .collect::<Result<_, IntrinsicError>>()?,
                    )
                }
            }
        })
    }

    /// Parse a condition expression, where `{"Condition": name}` is also allowed
    pub fn from_condition_json(value: &Json) -> Result<Self, IntrinsicError> {
        if let Some(map) = value.as_object()
            && map.len() == 1
            && let Some(arg) = map.get("Condition")
        {
            let name = arg
                .as_str()
                .ok_or_else(|| IntrinsicError::malformed("Condition", "a condition name"))?;
            return Ok(Expr::Intrinsic(Box::new(Intrinsic::Condition(
                name.to_string(),
            ))));
        }
        Expr::from_json(value)
    }

    /// Render back to JSON
    pub fn to_json(&self) -> Json {
        match self {
            Expr::Null => Json::Null,
            Expr::Bool(b) => Json::Bool(*b),
            Expr::Number(n) => Json::Number(n.clone()),
            Expr::String(s) => Json::String(s.clone()),
            Expr::List(items) => Json::Array(items.iter().map(Expr::to_json).collect()),
            Expr::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Expr::Intrinsic(intrinsic) => intrinsic.to_json(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Expr::Intrinsic(intrinsic) => Some(intrinsic),
            _ => None,
        }
    }

    /// All references made anywhere inside this expression
    pub fn references(&self) -> Vec<Reference> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    /// Visit every intrinsic in this expression, outermost first
    pub fn walk(&self, visit: &mut dyn FnMut(&Intrinsic)) {
        match self {
            Expr::List(items) => {
                for item in items {
                    item.walk(visit);
                }
            }
            Expr::Map(map) => {
                for value in map.values() {
                    value.walk(visit);
                }
            }
            Expr::Intrinsic(intrinsic) => intrinsic.walk(visit),
            _ => {}
        }
    }

    fn collect_references(&self, refs: &mut Vec<Reference>) {
        self.walk(&mut |intrinsic| intrinsic.direct_references(refs));
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::String(s.to_string())
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::String(s)
    }
}

impl From<Intrinsic> for Expr {
    fn from(intrinsic: Intrinsic) -> Self {
        Expr::Intrinsic(Box::new(intrinsic))
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        Expr::from_json(&raw).map_err(serde::de::Error::custom)
    }
}

impl Intrinsic {
    /// Parse a single-key intrinsic object
    pub fn from_json(value: &Json) -> Result<Self, IntrinsicError> {
        let map = value.as_object().ok_or(IntrinsicError::NotIntrinsic)?;
        if map.len() != 1 {
            return Err(IntrinsicError::NotIntrinsic);
        }
        let Some((name, arg)) = map.iter().next() else {
            return Err(IntrinsicError::NotIntrinsic);
        };

        let intrinsic = match name.as_str() {
            "Ref" => Intrinsic::Ref(expect_str(name, arg, "a logical name")?),
            "Condition" => Intrinsic::Condition(expect_str(name, arg, "a condition name")?),
            "Fn::GetAtt" => parse_get_att(arg)?,
            "Fn::Sub" => parse_sub(arg)?,
            "Fn::Join" => {
                let [delimiter, values] = expect_args::<2>(name, arg, "[delimiter, values]")?;
                Intrinsic::Join {
                    delimiter: expect_str(name, delimiter, "a string delimiter")?,
                    values: Expr::from_json(values)?,
                }
            }
            "Fn::Select" => {
                let [index, list] = expect_args::<2>(name, arg, "[index, list]")?;
                Intrinsic::Select {
                    index: Expr::from_json(index)?,
                    list: Expr::from_json(list)?,
                }
            }
            "Fn::Split" => {
                let [delimiter, source] = expect_args::<2>(name, arg, "[delimiter, source]")?;
                Intrinsic::Split {
                    delimiter: expect_str(name, delimiter, "a string delimiter")?,
                    source: Expr::from_json(source)?,
                }
            }
            "Fn::FindInMap" => {
                let [map, top_key, second_key] =
                    expect_args::<3>(name, arg, "[map name, top level key, second level key]")?;
                Intrinsic::FindInMap {
                    map: Expr::from_json(map)?,
                    top_key: Expr::from_json(top_key)?,
                    second_key: Expr::from_json(second_key)?,
                }
            }
            "Fn::GetAZs" => Intrinsic::GetAZs(Expr::from_json(arg)?),
            "Fn::ImportValue" => Intrinsic::ImportValue(Expr::from_json(arg)?),
            "Fn::Base64" => Intrinsic::Base64(Expr::from_json(arg)?),
            "Fn::ToJsonString" => Intrinsic::ToJsonString(Expr::from_json(arg)?),
            "Fn::Length" => Intrinsic::Length(Expr::from_json(arg)?),
            "Fn::Cidr" => {
                let [ip_block, count, cidr_bits] =
                    expect_args::<3>(name, arg, "[ip block, count, cidr bits]")?;
                Intrinsic::Cidr {
                    ip_block: Expr::from_json(ip_block)?,
                    count: Expr::from_json(count)?,
                    cidr_bits: Expr::from_json(cidr_bits)?,
                }
            }
            "Fn::If" => {
                let [condition, if_true, if_false] =
                    expect_args::<3>(name, arg, "[condition name, value if true, value if false]")?;
                Intrinsic::If {
                    condition: expect_str(name, condition, "a condition name")?,
                    if_true: Expr::from_json(if_true)?,
                    if_false: Expr::from_json(if_false)?,
                }
            }
            "Fn::Equals" => {
                let [left, right] = expect_args::<2>(name, arg, "[value, value]")?;
                Intrinsic::Equals(Expr::from_json(left)?, Expr::from_json(right)?)
            }
            "Fn::And" | "Fn::Or" => {
                let items = arg
                    .as_array()
                    .filter(|items| (2..=10).contains(&items.len()))
                    .ok_or_else(|| IntrinsicError::malformed(name, "a list of 2 to 10 conditions"))?;
                let conditions = items
                    .iter()
                    .map(Expr::from_condition_json)
                    .collect::<Result<Vec<_>, _>>()?;
                if name == "Fn::And" {
                    Intrinsic::And(conditions)
                } else {
                    Intrinsic::Or(conditions)
                }
            }
            "Fn::Not" => {
                let [condition] = expect_args::<1>(name, arg, "[condition]")?;
                Intrinsic::Not(Expr::from_condition_json(condition)?)
            }
            other if other.starts_with("Fn::") => Intrinsic::Other {
                function: other.to_string(),
                argument: Expr::from_json(arg)?,
            },
            _ => return Err(IntrinsicError::NotIntrinsic),
        };
        Ok(intrinsic)
    }

    /// Template function name, e.g. `Fn::GetAtt`
    pub fn function_name(&self) -> &str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt { .. } | Intrinsic::GetAttComputed { .. } => "Fn::GetAtt",
            Intrinsic::Sub { .. } => "Fn::Sub",
            Intrinsic::Join { .. } => "Fn::Join",
            Intrinsic::Select { .. } => "Fn::Select",
            Intrinsic::Split { .. } => "Fn::Split",
            Intrinsic::FindInMap { .. } => "Fn::FindInMap",
            Intrinsic::GetAZs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr { .. } => "Fn::Cidr",
            Intrinsic::If { .. } => "Fn::If",
            Intrinsic::Equals(..) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Condition(_) => "Condition",
            Intrinsic::ToJsonString(_) => "Fn::ToJsonString",
            Intrinsic::Length(_) => "Fn::Length",
            Intrinsic::Other { function, .. } => function,
        }
    }

    /// Render back to the single-key JSON object
    pub fn to_json(&self) -> Json {
        let arg = match self {
            Intrinsic::Ref(name) | Intrinsic::Condition(name) => Json::String(name.clone()),
            Intrinsic::GetAtt {
                resource,
                attribute,
            } => Json::Array(vec![
                Json::String(resource.clone()),
                Json::String(attribute.clone()),
            ]),
            Intrinsic::GetAttComputed {
                resource,
                attribute,
            } => Json::Array(vec![Json::String(resource.clone()), attribute.to_json()]),
            Intrinsic::Sub {
                template,
                variables,
            } => {
                if variables.is_empty() {
                    Json::String(template.clone())
                } else {
                    let vars: Map<String, Json> = variables
                        .iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect();
                    Json::Array(vec![Json::String(template.clone()), Json::Object(vars)])
                }
            }
            Intrinsic::Join { delimiter, values } => {
                Json::Array(vec![Json::String(delimiter.clone()), values.to_json()])
            }
            Intrinsic::Select { index, list } => Json::Array(vec![index.to_json(), list.to_json()]),
            Intrinsic::Split { delimiter, source } => {
                Json::Array(vec![Json::String(delimiter.clone()), source.to_json()])
            }
            Intrinsic::FindInMap {
                map,
                top_key,
                second_key,
            } => Json::Array(vec![map.to_json(), top_key.to_json(), second_key.to_json()]),
            Intrinsic::GetAZs(arg)
            | Intrinsic::ImportValue(arg)
            | Intrinsic::Base64(arg)
            | Intrinsic::ToJsonString(arg)
            | Intrinsic::Length(arg) => arg.to_json(),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => Json::Array(vec![ip_block.to_json(), count.to_json(), cidr_bits.to_json()]),
            Intrinsic::If {
                condition,
                if_true,
                if_false,
            } => Json::Array(vec![
                Json::String(condition.clone()),
                if_true.to_json(),
                if_false.to_json(),
            ]),
            Intrinsic::Equals(left, right) => Json::Array(vec![left.to_json(), right.to_json()]),
            Intrinsic::And(items) | Intrinsic::Or(items) => {
                Json::Array(items.iter().map(Expr::to_json).collect())
            }
            Intrinsic::Not(condition) => Json::Array(vec![condition.to_json()]),
            Intrinsic::Other { argument, .. } => argument.to_json(),
        };

        let mut map = Map::new();
        map.insert(self.function_name().to_string(), arg);
        Json::Object(map)
    }

    /// All references made by this function and its arguments
    pub fn references(&self) -> Vec<Reference> {
        let mut refs = Vec::new();
        self.walk(&mut |intrinsic| intrinsic.direct_references(&mut refs));
        refs
    }

    /// Visit this function and every intrinsic nested in its arguments
    pub fn walk(&self, visit: &mut dyn FnMut(&Intrinsic)) {
        visit(self);
        for arg in self.arguments() {
            arg.walk(visit);
        }
    }

    fn arguments(&self) -> Vec<&Expr> {
        match self {
            Intrinsic::Ref(_) | Intrinsic::GetAtt { .. } | Intrinsic::Condition(_) => vec![],
            Intrinsic::GetAttComputed { attribute, .. } => vec![attribute],
            Intrinsic::Sub { variables, .. } => variables.values().collect(),
            Intrinsic::Join { values, .. } => vec![values],
            Intrinsic::Select { index, list } => vec![index, list],
            Intrinsic::Split { source, .. } => vec![source],
            Intrinsic::FindInMap {
                map,
                top_key,
                second_key,
            } => vec![map, top_key, second_key],
            Intrinsic::GetAZs(arg)
            | Intrinsic::ImportValue(arg)
            | Intrinsic::Base64(arg)
            | Intrinsic::ToJsonString(arg)
            | Intrinsic::Length(arg)
            | Intrinsic::Not(arg) => vec![arg],
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => vec![ip_block, count, cidr_bits],
            Intrinsic::If {
                if_true, if_false, ..
            } => vec![if_true, if_false],
            Intrinsic::Equals(left, right) => vec![left, right],
            Intrinsic::And(items) | Intrinsic::Or(items) => items.iter().collect(),
            Intrinsic::Other { argument, .. } => vec![argument],
        }
    }

    /// References made by this function itself, not by nested functions
    fn direct_references(&self, refs: &mut Vec<Reference>) {
        match self {
            Intrinsic::Ref(name) => refs.push(Reference::Ref(name.clone())),
            Intrinsic::GetAtt {
                resource,
                attribute,
            } => refs.push(Reference::GetAtt {
                resource: resource.clone(),
                attribute: Some(attribute.clone()),
            }),
            Intrinsic::GetAttComputed { resource, .. } => refs.push(Reference::GetAtt {
                resource: resource.clone(),
                attribute: None,
            }),
            Intrinsic::Sub {
                template,
                variables,
            } => {
                for placeholder in sub_placeholders(template) {
                    if variables.contains_key(&placeholder) {
                        continue;
                    }
                    match placeholder.split_once('.') {
                        Some((resource, attribute)) => refs.push(Reference::GetAtt {
                            resource: resource.to_string(),
                            attribute: Some(attribute.to_string()),
                        }),
                        None => refs.push(Reference::Ref(placeholder)),
                    }
                }
            }
            Intrinsic::If { condition, .. } | Intrinsic::Condition(condition) => {
                refs.push(Reference::Condition(condition.clone()))
            }
            Intrinsic::FindInMap {
                map: Expr::String(name),
                ..
            } => refs.push(Reference::Mapping(name.clone())),
            _ => {}
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        Intrinsic::from_json(&raw).map_err(serde::de::Error::custom)
    }
}

/// Extract `${...}` placeholder names from an `Fn::Sub` template.
///
/// `${!Literal}` is an escape for a literal `${Literal}` and yields nothing.
pub fn sub_placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = after[..end].trim();
        if !name.is_empty() && !name.starts_with('!') {
            names.push(name.to_string());
        }
        rest = &after[end + 1..];
    }
    names
}

fn expect_str(function: &str, value: &Json, expected: &'static str) -> Result<String, IntrinsicError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| IntrinsicError::malformed(function, expected))
}

fn expect_args<'a, const N: usize>(
    function: &str,
    value: &'a Json,
    expected: &'static str,
) -> Result<[&'a Json; N], IntrinsicError> {
    let items = value
        .as_array()
        .filter(|items| items.len() == N)
        .ok_or_else(|| IntrinsicError::malformed(function, expected))?;
    let refs: Vec<&Json> = items.iter().collect();
    refs.try_into()
        .map_err(|_| IntrinsicError::malformed(function, expected))
}

fn parse_get_att(arg: &Json) -> Result<Intrinsic, IntrinsicError> {
    const EXPECTED: &str = "[logical name, attribute] or \"LogicalName.Attribute\"";
    let (resource, attribute) = match arg {
        Json::String(s) => s
            .split_once('.')
            .map(|(r, a)| (r.to_string(), a.to_string()))
            .ok_or_else(|| IntrinsicError::malformed("Fn::GetAtt", EXPECTED))?,
        Json::Array(items) if items.len() == 2 => match (&items[0], &items[1]) {
            (Json::String(r), Json::String(a)) => (r.clone(), a.clone()),
            // The attribute name may come from `Ref` to a parameter
            (Json::String(r), computed @ Json::Object(_)) if !r.is_empty() => {
                let attribute = Expr::from_json(computed)?;
                if attribute.as_intrinsic().is_none() {
                    return Err(IntrinsicError::malformed("Fn::GetAtt", EXPECTED));
                }
                return Ok(Intrinsic::GetAttComputed {
                    resource: r.clone(),
                    attribute,
                });
            }
            _ => return Err(IntrinsicError::malformed("Fn::GetAtt", EXPECTED)),
        },
        _ => return Err(IntrinsicError::malformed("Fn::GetAtt", EXPECTED)),
    };
    if resource.is_empty() || attribute.is_empty() {
        return Err(IntrinsicError::malformed("Fn::GetAtt", EXPECTED));
    }
    Ok(Intrinsic::GetAtt {
        resource,
        attribute,
    })
}

fn parse_sub(arg: &Json) -> Result<Intrinsic, IntrinsicError> {
    const EXPECTED: &str = "a template string or [template, variables]";
    match arg {
        Json::String(template) => Ok(Intrinsic::Sub {
            template: template.clone(),
            variables: IndexMap::new(),
        }),
        Json::Array(items) if items.len() == 2 => {
            let template = expect_str("Fn::Sub", &items[0], EXPECTED)?;
            let vars = items[1]
                .as_object()
                .ok_or_else(|| IntrinsicError::malformed("Fn::Sub", EXPECTED))?;
            let variables = vars
                .iter()
                .map(|(k, v)| Ok((k.clone(), Expr::from_json(v)?)))
                .collect::<Result<_, IntrinsicError>>()?;
            Ok(Intrinsic::Sub {
                template,
                variables,
            })
        }
        _ => Err(IntrinsicError::malformed("Fn::Sub", EXPECTED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_ref() {
        let parsed = Intrinsic::from_json(&json!({"Ref": "VpcId"})).unwrap();
        assert_eq!(parsed, Intrinsic::Ref("VpcId".to_string()));
        assert_eq!(parsed.to_json(), json!({"Ref": "VpcId"}));
    }

    #[test]
    fn parse_get_att_list_and_dotted_forms() {
        let list = Intrinsic::from_json(&json!({"Fn::GetAtt": ["Db", "Endpoint.Address"]})).unwrap();
        let dotted = Intrinsic::from_json(&json!({"Fn::GetAtt": "Db.Endpoint.Address"})).unwrap();
        assert_eq!(list, dotted);
        assert_eq!(
            dotted,
            Intrinsic::GetAtt {
                resource: "Db".to_string(),
                attribute: "Endpoint.Address".to_string(),
            }
        );
        // Always rendered in list form
        assert_eq!(
            dotted.to_json(),
            json!({"Fn::GetAtt": ["Db", "Endpoint.Address"]})
        );
    }

    #[test]
    fn malformed_get_att_is_rejected() {
        let err = Intrinsic::from_json(&json!({"Fn::GetAtt": "NoAttribute"})).unwrap_err();
        assert!(matches!(err, IntrinsicError::Malformed { ref function, .. } if function == "Fn::GetAtt"));
        assert!(Intrinsic::from_json(&json!({"Fn::GetAtt": ["A"]})).is_err());
    }

    #[test]
    fn get_att_with_computed_attribute() {
        let value = json!({"Fn::GetAtt": ["Table", {"Ref": "AttributeName"}]});
        let intrinsic = Intrinsic::from_json(&value).unwrap();
        assert!(matches!(
            intrinsic,
            Intrinsic::GetAttComputed { ref resource, .. } if resource == "Table"
        ));
        assert_eq!(intrinsic.function_name(), "Fn::GetAtt");
        assert_eq!(intrinsic.to_json(), value);
        assert_eq!(
            intrinsic.references(),
            vec![
                Reference::GetAtt {
                    resource: "Table".to_string(),
                    attribute: None
                },
                Reference::Ref("AttributeName".to_string()),
            ]
        );

        // A plain map is not an attribute name
        assert!(Intrinsic::from_json(&json!({"Fn::GetAtt": ["Table", {"Name": "Arn"}]})).is_err());
    }

    #[test]
    fn join_with_nested_intrinsics() {
        let value = json!({"Fn::Join": ["-", [{"Ref": "AWS::StackName"}, "queue"]]});
        let expr = Expr::from_json(&value).unwrap();
        let refs = expr.references();
        assert_eq!(refs, vec![Reference::Ref("AWS::StackName".to_string())]);
        assert_eq!(expr.to_json(), value);
    }

    #[test]
    fn join_requires_two_arguments() {
        let err = Intrinsic::from_json(&json!({"Fn::Join": [","]})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Fn::Join: expected [delimiter, values]");
    }

    #[test]
    fn sub_placeholders_skip_escapes() {
        assert_eq!(
            sub_placeholders("arn:${AWS::Partition}:s3:::${Bucket}/${!Literal}/${Db.Port}"),
            vec!["AWS::Partition", "Bucket", "Db.Port"]
        );
        assert!(sub_placeholders("no placeholders").is_empty());
        assert!(sub_placeholders("${unterminated").is_empty());
    }

    #[test]
    fn sub_references_exclude_local_variables() {
        let value = json!({"Fn::Sub": ["${Name}-${Suffix}-${Db.Port}", {"Suffix": {"Ref": "Env"}}]});
        let intrinsic = Intrinsic::from_json(&value).unwrap();
        let refs = intrinsic.references();
        assert_eq!(
            refs,
            vec![
                Reference::Ref("Name".to_string()),
                Reference::GetAtt {
                    resource: "Db".to_string(),
                    attribute: Some("Port".to_string())
                },
                Reference::Ref("Env".to_string()),
            ]
        );
        assert_eq!(intrinsic.to_json(), value);
    }

    #[test]
    fn sub_string_form_round_trips_as_string() {
        let value = json!({"Fn::Sub": "${AWS::StackName}-logs"});
        assert_eq!(Intrinsic::from_json(&value).unwrap().to_json(), value);
    }

    #[test]
    fn condition_only_recognised_in_condition_context() {
        let value = json!({"Condition": "IsProd"});
        assert!(matches!(Expr::from_json(&value).unwrap(), Expr::Map(_)));
        assert_eq!(
            Expr::from_condition_json(&value).unwrap(),
            Expr::from(Intrinsic::Condition("IsProd".to_string()))
        );

        let and = json!({"Fn::And": [{"Condition": "IsProd"}, {"Fn::Equals": [{"Ref": "Env"}, "prod"]}]});
        let refs = Expr::from_json(&and).unwrap().references();
        assert!(refs.contains(&Reference::Condition("IsProd".to_string())));
        assert!(refs.contains(&Reference::Ref("Env".to_string())));
    }

    #[test]
    fn and_requires_at_least_two_conditions() {
        assert!(Intrinsic::from_json(&json!({"Fn::And": [{"Condition": "A"}]})).is_err());
    }

    #[test]
    fn if_and_find_in_map_references() {
        let value = json!({
            "Fn::If": ["IsProd", {"Fn::FindInMap": ["Sizes", {"Ref": "AWS::Region"}, "Large"]}, "small"]
        });
        let refs = Expr::from_json(&value).unwrap().references();
        assert_eq!(
            refs,
            vec![
                Reference::Condition("IsProd".to_string()),
                Reference::Mapping("Sizes".to_string()),
                Reference::Ref("AWS::Region".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_functions_are_kept() {
        let value = json!({"Fn::Transform": {"Name": "AWS::Include", "Parameters": {"Location": "s3://x"}}});
        let intrinsic = Intrinsic::from_json(&value).unwrap();
        assert_eq!(intrinsic.function_name(), "Fn::Transform");
        assert_eq!(intrinsic.to_json(), value);
    }

    #[test]
    fn multi_key_objects_are_plain_maps() {
        let value = json!({"Ref": "A", "Other": 1});
        assert!(intrinsic_key(&value).is_none());
        assert!(matches!(Expr::from_json(&value).unwrap(), Expr::Map(_)));
    }

    #[test]
    fn pseudo_parameters() {
        assert!(is_pseudo_parameter("AWS::Region"));
        assert!(is_pseudo_parameter("AWS::NoValue"));
        assert!(!is_pseudo_parameter("AWS::Something"));
    }
}
