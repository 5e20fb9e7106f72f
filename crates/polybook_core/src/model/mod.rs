//! Domain model for the multilingual content library.
//!
//! # Responsibility
//! - Define the canonical category/article/locale-entry shapes shared by
//!   the validator, the mutation layer and the storage adapters.
//! - Keep the in-memory library a plain value with accessors only.
//!
//! # Invariants
//! - Structural changes (create/rename/delete, language-set changes) go
//!   through `service::mutate`; the model itself never cascades.
//! - Serialized field names match the on-disk document layout.

pub mod article;
pub mod category;
pub mod library;
pub mod locale;
