/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use single_instance::RegistryEvent;
///
/// let event = RegistryEvent::Create { type_name: "Logger", created: true };
/// assert_eq!(event.to_string(), "create { type_name: Logger, created: true }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A `create` call finished.
    Create {
        type_name: &'static str,
        /// `false` when the slot was already populated and the existing instance was returned.
        created: bool,
    },

    /// A freshly constructed value failed the main constructor check and was dropped.
    Rejected { type_name: &'static str },

    /// An instance was requested.
    Get {
        type_name: &'static str,
        found: bool,
    },

    /// A slot existence check was performed.
    Contains {
        type_name: &'static str,
        found: bool,
    },

    /// A single slot was torn down.
    Destroy {
        type_name: &'static str,
        found: bool,
    },

    /// The registry was cleared.
    Clear {},
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Create { type_name, created } => {
                write!(f, "create {{ type_name: {type_name}, created: {created} }}")
            }
            RegistryEvent::Rejected { type_name } => {
                write!(f, "rejected {{ type_name: {type_name} }}")
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(f, "contains {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Destroy { type_name, found } => {
                write!(f, "destroy {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Clear {} => write!(f, "Clearing the Registry"),
        }
    }
}
