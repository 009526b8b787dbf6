//! Cloudform Core
//!
//! Typed model of AWS CloudFormation templates: literal-or-intrinsic values,
//! intrinsic functions, resource attributes, and the template document itself.

pub mod attributes;
pub mod formatter;
pub mod graph;
pub mod intrinsic;
pub mod lint;
pub mod resource;
pub mod template;
pub mod value;
mod yaml;

pub use attributes::{DeletionPolicy, ResourceAttributes};
pub use intrinsic::{Expr, Intrinsic, IntrinsicError, Reference};
pub use lint::{Diagnostic, Severity};
pub use resource::{Resource, ResourceEntry, ResourceProperties};
pub use template::{Lenient, Template, TemplateError, TemplateFormat};
pub use value::{Json, List, Tag, Value};
