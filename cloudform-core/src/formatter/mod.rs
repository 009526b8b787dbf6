//! Template formatter
//!
//! Renders templates in a canonical layout, similar to `terraform fmt`.
//!
//! # Example
//!
//! ```
//! use cloudform_core::formatter::{format, FormatConfig};
//!
//! let source = r#"{"Resources": {"Topic": {"Type": "AWS::SNS::Topic"}}}"#;
//! let formatted = format(source, &FormatConfig::default()).unwrap();
//!
//! assert!(formatted.contains("  \"Resources\": {"));
//! ```

mod config;
mod format;

pub use config::{FormatConfig, OutputFormat};
pub use format::{format, needs_format};
