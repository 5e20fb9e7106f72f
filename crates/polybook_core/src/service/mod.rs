//! Core use-case services.
//!
//! # Responsibility
//! - Apply cascade-safe structural mutations to a library value.
//! - Orchestrate open/save/export flows behind the session facade.
//! - Keep UI layers decoupled from model and storage details.

pub mod mutate;
pub mod session;
