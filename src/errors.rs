use derive_more::{Display, Error};

/// Failures the service layer can hand back to its callers.
///
/// "Not found" is not represented here: lookups return `Option` so callers
/// must check before use instead of catching.
#[derive(Debug, Display, Error)]
pub enum ServiceError {
    /// User input violated a field rule. Raised before any persistence
    /// call, so a validation failure guarantees zero side effects.
    #[display("{_0}")]
    Validation(#[error(not(source))] String),

    /// Username already registered.
    #[display("{_0}")]
    Duplicate(#[error(not(source))] String),

    /// Unexpected failure from the repository or the store underneath it,
    /// logged at error severity and propagated unchanged.
    #[display("{_0}")]
    Persistence(#[error(not(source))] anyhow::Error),
}
