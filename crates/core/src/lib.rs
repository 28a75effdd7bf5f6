//! `brewery-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the domain error model, and the constraint/validation vocabulary
//! shared by every resource representation.

pub mod error;
pub mod id;
pub mod validation;

pub use error::DomainError;
pub use id::BeerId;
pub use validation::{ConstraintKind, ConstraintViolation, FieldRule, FieldValue, Validate};
