//! YAML template support
//!
//! CloudFormation YAML allows short-form intrinsic tags such as `!Ref Bucket`
//! or `!GetAtt Db.Endpoint.Address`. They are expanded to the JSON long form
//! while converting the document.

use serde_json::{Map, Number, Value as Json};
use serde_yaml::Value as Yaml;
use serde_yaml::value::TaggedValue;

use crate::template::TemplateError;

/// Convert a YAML document to JSON, expanding short-form intrinsic tags
pub fn yaml_to_json(value: &Yaml) -> Result<Json, TemplateError> {
    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(*b),
        Yaml::Number(n) => Json::Number(convert_number(n)?),
        Yaml::String(s) => Json::String(s.clone()),
        Yaml::Sequence(items) => {
            Json::Array(items.iter().map(yaml_to_json).collect::<Result<_, _>>()?)
        }
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Json::Object(map)
        }
        Yaml::Tagged(tagged) => expand_tag(tagged)?,
    })
}

fn convert_number(n: &serde_yaml::Number) -> Result<Number, TemplateError> {
    if let Some(i) = n.as_i64() {
        Ok(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Number::from(u))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .ok_or_else(|| TemplateError::UnsupportedYaml(format!("number {} has no JSON form", n)))
    }
}

fn mapping_key(key: &Yaml) -> Result<String, TemplateError> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        other => Err(TemplateError::UnsupportedYaml(format!(
            "mapping key {:?} is not a scalar",
            other
        ))),
    }
}

fn expand_tag(tagged: &TaggedValue) -> Result<Json, TemplateError> {
    let tag = tagged.tag.to_string();
    let name = tag.trim_start_matches('!');
    let arg = yaml_to_json(&tagged.value)?;

    let (key, arg) = match name {
        "Ref" | "Condition" => (name.to_string(), arg),
        // `!GetAtt Db.Endpoint.Address` splits at the first dot only
        "GetAtt" => {
            let arg = match arg {
                Json::String(s) => match s.split_once('.') {
                    Some((resource, attribute)) => Json::Array(vec![
                        Json::String(resource.to_string()),
                        Json::String(attribute.to_string()),
                    ]),
                    None => Json::String(s),
                },
                other => other,
            };
            ("Fn::GetAtt".to_string(), arg)
        }
        "" => {
            return Err(TemplateError::UnsupportedYaml(
                "empty tag".to_string(),
            ));
        }
        other => (format!("Fn::{}", other), arg),
    };

    let mut map = Map::new();
    map.insert(key, arg);
    Ok(Json::Object(map))
}

/// Returns true if the YAML source contains a comment.
///
/// `#` inside quoted scalars, inside block scalars (`|`, `>`) and without
/// preceding whitespace (e.g. URL fragments) is content, not a comment.
pub fn has_comments(source: &str) -> bool {
    // Indentation of the line that opened the current block scalar
    let mut block_parent: Option<usize> = None;

    for line in source.lines() {
        let content = line.trim_start();
        let indent = line.len() - content.len();

        if let Some(parent) = block_parent {
            if content.is_empty() || indent > parent {
                continue;
            }
            block_parent = None;
        }

        if has_comment(line) {
            return true;
        }
        if opens_block_scalar(line) {
            block_parent = Some(indent);
        }
    }
    false
}

fn has_comment(line: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<char> = None;
    // Last non-blank character before the current position
    let mut prev_token: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => {
                if c == '#' && prev.is_none_or(char::is_whitespace) {
                    return true;
                }
                // A quote only opens a scalar where a scalar can start
                let at_scalar_start =
                    matches!(prev_token, None | Some(':' | '-' | ',' | '[' | '{' | '?'));
                if (c == '"' || c == '\'') && at_scalar_start {
                    quote = Some(c);
                }
            }
        }
        prev = Some(c);
        if !c.is_whitespace() {
            prev_token = Some(c);
        }
    }
    false
}

/// `key: |`, `- >-`, `Fn::Sub: |2` and `!Sub |` open a block scalar
fn opens_block_scalar(line: &str) -> bool {
    let line = line.trim();
    let (before, indicator) = match line.rsplit_once(' ') {
        Some((before, indicator)) => (before.trim_end(), indicator),
        None => ("", line),
    };
    let mut chars = indicator.chars();
    if !matches!(chars.next(), Some('|' | '>'))
        || !chars.all(|c| c == '+' || c == '-' || c.is_ascii_digit())
    {
        return false;
    }
    let last_word = before.rsplit(' ').next().unwrap_or_default();
    before.is_empty() || before.ends_with(':') || before.ends_with('-') || last_word.starts_with('!')
}
