//! Stratus Core Types and Definitions
//!
//! This crate provides the foundational types for the Stratus stack-template
//! interpreter. It includes:
//!
//! - **Template**: The parsed template document ([`template`] module)
//! - **Expressions**: Typed intrinsic expressions for outputs ([`expr`] module)
//! - **Resources**: Capability traits implemented by resource types
//!   ([`resource`] module)

pub mod expr;
pub mod resource;
pub mod template;
