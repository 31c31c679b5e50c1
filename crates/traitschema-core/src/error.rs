//! Error types for traitschema-core
//!
//! Exit code scheme:
//! - 1: User error (unknown trait type under the strict policy)
//! - 2: System error (serialization)
//! - 3: Not found (module, class, base class)
//! - 4: Invalid state (inconsistent class declarations)

use thiserror::Error;

/// Core error type for schema generation
#[derive(Debug, Error)]
pub enum Error {
    /// The requested module is not in the catalog
    #[error("Module not found: '{module}' (known modules: {known})")]
    ModuleNotFound { module: String, known: String },

    /// The module exists but does not define the requested class
    #[error("Class not found: '{class}' in module '{module}'")]
    ClassNotFound { module: String, class: String },

    /// A trait type with no registry entry that is not a union
    #[error("Unknown trait type: {type_name} (attribute '{attribute}')")]
    UnknownTraitType { attribute: String, type_name: String },

    /// A class that (transitively) extends itself
    #[error("Inheritance cycle: {0}")]
    InheritanceCycle(String),

    /// Schema could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns the process exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownTraitType { .. } => 1,
            Self::Serialization(_) => 2,
            Self::ModuleNotFound { .. } | Self::ClassNotFound { .. } => 3,
            Self::InheritanceCycle(_) => 4,
        }
    }

    /// Whether the error comes from a failed module or class lookup.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ModuleNotFound { .. } | Self::ClassNotFound { .. }
        )
    }
}

/// Result type alias for traitschema-core operations
pub type Result<T> = std::result::Result<T, Error>;
