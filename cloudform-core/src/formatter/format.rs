//! Canonical rendering of template documents

use crate::template::{Template, TemplateError, TemplateFormat};
use crate::yaml;

use super::FormatConfig;

/// Parse `source` and render it in canonical form.
///
/// Section and key order is preserved; whitespace, quoting and intrinsic
/// short forms are normalised. YAML with comments is rejected with
/// [`TemplateError::CommentsWouldBeLost`], since rendering drops them.
pub fn format(source: &str, config: &FormatConfig) -> Result<String, TemplateError> {
    let input = TemplateFormat::detect(source);
    let template = match input {
        TemplateFormat::Json => Template::from_json_str(source)?,
        TemplateFormat::Yaml => {
            if yaml::has_comments(source) {
                return Err(TemplateError::CommentsWouldBeLost);
            }
            Template::from_yaml_str(source)?
        }
    };
    template.render(config.target_format(input), config)
}

/// Returns true if `source` differs from its canonical form
pub fn needs_format(source: &str, config: &FormatConfig) -> Result<bool, TemplateError> {
    Ok(format(source, config)? != source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::OutputFormat;

    #[test]
    fn test_format_json_indentation() {
        let source = r#"{"Resources":{"Topic":{"Type":"AWS::SNS::Topic"}}}"#;
        let formatted = format(source, &FormatConfig::default()).unwrap();
        assert_eq!(
            formatted,
            "{\n  \"Resources\": {\n    \"Topic\": {\n      \"Type\": \"AWS::SNS::Topic\"\n    }\n  }\n}\n"
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let source = "Resources:\n  Topic:\n    Type: AWS::SNS::Topic\n    Properties:\n      TopicName: !Ref Name\n";
        let config = FormatConfig::default();
        let once = format(source, &config).unwrap();
        let twice = format(&once, &config).unwrap();
        assert_eq!(once, twice);
        assert!(!needs_format(&once, &config).unwrap());
    }

    #[test]
    fn test_format_preserves_key_order() {
        let source = r#"{"Resources":{"Zeta":{"Type":"AWS::SNS::Topic"},"Alpha":{"Type":"AWS::SNS::Topic"}}}"#;
        let formatted = format(source, &FormatConfig::default()).unwrap();
        assert!(formatted.find("Zeta").unwrap() < formatted.find("Alpha").unwrap());
    }

    #[test]
    fn test_convert_yaml_to_json() {
        let source = "Resources:\n  Topic:\n    Type: AWS::SNS::Topic\n    Properties:\n      TopicName: !Ref Name\n";
        let config = FormatConfig {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let formatted = format(source, &config).unwrap();
        assert!(formatted.contains("\"Ref\": \"Name\""));
    }

    #[test]
    fn test_yaml_with_comments_is_not_rewritten() {
        let source = "# stack owner: team-a\nResources:\n  T:\n    Type: AWS::SNS::Topic # keep\n";
        let config = FormatConfig::default();
        assert!(matches!(
            format(source, &config),
            Err(TemplateError::CommentsWouldBeLost)
        ));
        assert!(needs_format(source, &config).is_err());

        let json = FormatConfig {
            output: OutputFormat::Json,
            ..Default::default()
        };
        assert!(format(source, &json).is_err());
    }

    #[test]
    fn test_unknown_resource_keys_survive_formatting() {
        let source = r#"{"Resources":{"A":{"Type":"AWS::SNS::Topic"},"B":{"Type":"AWS::SNS::Topic","DependOn":"A"}}}"#;
        let formatted = format(source, &FormatConfig::default()).unwrap();
        assert!(formatted.contains("\"DependOn\": \"A\""));
    }

    #[test]
    fn test_format_error() {
        assert!(format("{\"Resources\": ", &FormatConfig::default()).is_err());
    }
}
