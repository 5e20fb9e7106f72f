//! Core engine for the multilingual content library editor.
//! This crate is the single source of truth for library invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::Article;
pub use model::category::Category;
pub use model::library::Library;
pub use model::locale::{LocaleEntry, LocaleField};
pub use service::mutate::{MutateError, MutateResult};
pub use service::session::{
    AlwaysConfirm, ConfirmPrompt, Session, SessionError, SessionMode,
};
pub use store::{ArchiveStore, DirStore, DocumentStore, StoreError, StoreResult};
pub use validate::{count_words, validate, Violation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
