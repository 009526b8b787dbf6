//! Typed AWS CloudFormation resource property types
//!
//! ## Module Structure
//!
//! - `generated` - Auto-generated property structs, one module per resource type
//! - `registry` - Lookup of shipped types and typed validation of templates

pub mod generated;
pub mod registry;

pub use generated::*;
pub use registry::{ResourceType, ValidationError, check_template, find, resource_types};
