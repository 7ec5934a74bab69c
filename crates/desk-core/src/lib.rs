//! # desk-core
//!
//! Core types and pure task logic for studydesk.
//!
//! This crate owns everything that does not talk to the backend:
//! - Entity structs for tasks and profiles, plus the creation form
//! - Closed enumerations for category, priority and status
//! - The completion-timestamp rule and due-date classification
//! - The filter/sort view pipeline
//! - Summary statistics over a task collection
//! - CLI response types
//!
//! Every function here is total over its inputs. "Now" is always passed in by
//! the caller, so results are reproducible in tests.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod lifecycle;
pub mod pipeline;
pub mod responses;
pub mod stats;
