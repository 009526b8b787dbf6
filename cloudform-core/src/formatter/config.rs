//! Formatting configuration

use crate::template::TemplateFormat;

/// Output format selection for `format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Keep the format the input was written in
    #[default]
    Preserve,
    Json,
    Yaml,
}

/// Formatting options
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for JSON indentation (default: 2)
    pub indent_size: usize,

    /// Use tabs instead of spaces for JSON indentation
    pub use_tabs: bool,

    /// Target format
    pub output: OutputFormat,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
            output: OutputFormat::Preserve,
        }
    }
}

impl FormatConfig {
    /// Get the string to use for a single level of indentation
    pub fn indent_string(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }

    /// Resolve the output format for an input written in `input`
    pub fn target_format(&self, input: TemplateFormat) -> TemplateFormat {
        match self.output {
            OutputFormat::Preserve => input,
            OutputFormat::Json => TemplateFormat::Json,
            OutputFormat::Yaml => TemplateFormat::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_size, 2);
        assert!(!config.use_tabs);
        assert_eq!(config.output, OutputFormat::Preserve);
    }

    #[test]
    fn test_indent_string_spaces() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_string(), "  ");
    }

    #[test]
    fn test_indent_string_tabs() {
        let config = FormatConfig {
            use_tabs: true,
            ..Default::default()
        };
        assert_eq!(config.indent_string(), "\t");
    }

    #[test]
    fn test_target_format() {
        let config = FormatConfig {
            output: OutputFormat::Yaml,
            ..Default::default()
        };
        assert_eq!(config.target_format(TemplateFormat::Json), TemplateFormat::Yaml);
        assert_eq!(
            FormatConfig::default().target_format(TemplateFormat::Json),
            TemplateFormat::Json
        );
    }
}
