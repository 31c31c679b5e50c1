//! Captured trait declarations.

use crate::trait_type::TraitType;

/// One configurable attribute as seen by the resolution pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDescriptor {
    /// Attribute name
    pub name: String,
    /// Declared trait type
    pub type_id: TraitType,
    /// Whether `None` is an accepted value
    pub allow_none: bool,
    /// Help text, empty when the trait declares none
    pub help: String,
    pub is_configurable: bool,
}

impl TraitDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: TraitType) -> Self {
        Self {
            name: name.into(),
            type_id,
            allow_none: false,
            help: String::new(),
            is_configurable: true,
        }
    }

    #[must_use]
    pub const fn allow_none(mut self, allow_none: bool) -> Self {
        self.allow_none = allow_none;
        self
    }

    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}
