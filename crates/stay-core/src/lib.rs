//! # stay-core
//!
//! Core types, validation, and error types for stay.
//!
//! This crate provides the foundational types shared across all stay crates:
//! - Entity structs for establishments, enquiry input, and submission results
//! - Status and route enums, including the submit-control state machine
//! - The enquiry validation schema with per-field messages
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;

/// Default minimum number of characters accepted for a full name.
pub const MINIMUM_NAME_CHARACTERS: usize = 3;
