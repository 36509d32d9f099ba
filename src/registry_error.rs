use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum RegistryError {
    #[error("Failed to acquire registry lock")]
    RegistryLock,

    #[error("Type mismatch in registry for type: {type_name}")]
    TypeMismatch { type_name: &'static str },

    /// `get` was called before any `create` for this type.
    #[error("Singleton not created yet: {type_name}")]
    NotCreated { type_name: &'static str },

    /// The constructor used by `create` did not run the type's main constructor.
    #[error("Main constructor was not called for singleton: {type_name}")]
    MainCtorNotCalled { type_name: &'static str },
}
