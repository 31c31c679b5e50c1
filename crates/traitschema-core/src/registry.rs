//! Trait type to JSON Schema primitive lookup.

use std::collections::BTreeMap;

use crate::trait_type::{TraitKind, TraitType};
use crate::types::Primitive;

/// Dotted names of the JupyterHub trait types known to [`TraitTypeRegistry::jupyterhub`].
pub const JUPYTERHUB_BYTE_SPECIFICATION: &str = "jupyterhub.traitlets.ByteSpecification";
pub const JUPYTERHUB_CALLABLE: &str = "jupyterhub.traitlets.Callable";
pub const JUPYTERHUB_COMMAND: &str = "jupyterhub.traitlets.Command";
pub const JUPYTERHUB_ENTRY_POINT_TYPE: &str = "jupyterhub.traitlets.EntryPointType";
pub const JUPYTERHUB_URL_PREFIX: &str = "jupyterhub.traitlets.URLPrefix";

/// Maps a trait type to the single primitive it serializes as.
///
/// Core traitlets kinds are fixed; [`TraitKind::Other`] types resolve through
/// the extension table. Unions never resolve here.
#[derive(Debug, Clone, Default)]
pub struct TraitTypeRegistry {
    extensions: BTreeMap<String, Primitive>,
}

impl TraitTypeRegistry {
    /// Registry with only the traitlets core kinds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Core kinds plus the JupyterHub trait types.
    #[must_use]
    pub fn jupyterhub() -> Self {
        Self::new()
            .with_extension(JUPYTERHUB_BYTE_SPECIFICATION, Primitive::String)
            .with_extension(JUPYTERHUB_CALLABLE, Primitive::Object)
            .with_extension(JUPYTERHUB_COMMAND, Primitive::String)
            .with_extension(JUPYTERHUB_ENTRY_POINT_TYPE, Primitive::Object)
            .with_extension(JUPYTERHUB_URL_PREFIX, Primitive::String)
    }

    #[must_use]
    pub fn with_extension(mut self, type_name: impl Into<String>, primitive: Primitive) -> Self {
        self.register(type_name, primitive);
        self
    }

    /// Register an extension type, returning the primitive it replaced.
    pub fn register(&mut self, type_name: impl Into<String>, primitive: Primitive) -> Option<Primitive> {
        self.extensions.insert(type_name.into(), primitive)
    }

    pub fn lookup(&self, trait_type: &TraitType) -> Option<Primitive> {
        match trait_type {
            TraitType::Kind(kind) => self.lookup_kind(kind),
            TraitType::Union(_) => None,
        }
    }

    pub fn lookup_kind(&self, kind: &TraitKind) -> Option<Primitive> {
        match kind {
            TraitKind::Bool => Some(Primitive::Bool),
            TraitKind::Int | TraitKind::Float => Some(Primitive::Number),
            TraitKind::Unicode | TraitKind::Bytes => Some(Primitive::String),
            TraitKind::List | TraitKind::Set => Some(Primitive::Array),
            TraitKind::Any | TraitKind::Dict | TraitKind::Enum | TraitKind::Callable => {
                Some(Primitive::Object)
            }
            TraitKind::Other(name) => self.extensions.get(name).copied(),
        }
    }

    /// Registered extension types in name order
    pub fn extensions(&self) -> impl Iterator<Item = (&str, Primitive)> {
        self.extensions.iter().map(|(name, p)| (name.as_str(), *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_kinds() {
        let registry = TraitTypeRegistry::new();
        let cases = [
            (TraitKind::Any, Primitive::Object),
            (TraitKind::Bool, Primitive::Bool),
            (TraitKind::Bytes, Primitive::String),
            (TraitKind::Callable, Primitive::Object),
            (TraitKind::Dict, Primitive::Object),
            (TraitKind::Enum, Primitive::Object),
            (TraitKind::Float, Primitive::Number),
            (TraitKind::Int, Primitive::Number),
            (TraitKind::List, Primitive::Array),
            (TraitKind::Set, Primitive::Array),
            (TraitKind::Unicode, Primitive::String),
        ];
        for (kind, expected) in cases {
            assert_eq!(registry.lookup_kind(&kind), Some(expected), "{kind}");
        }
    }

    #[test]
    fn test_union_never_resolves() {
        let registry = TraitTypeRegistry::jupyterhub();
        let ty = TraitType::union([TraitType::bool()]);
        assert_eq!(registry.lookup(&ty), None);
    }

    #[test]
    fn test_other_requires_extension() {
        let command = TraitType::other(JUPYTERHUB_COMMAND);
        assert_eq!(TraitTypeRegistry::new().lookup(&command), None);
        assert_eq!(
            TraitTypeRegistry::jupyterhub().lookup(&command),
            Some(Primitive::String)
        );
    }

    #[test]
    fn test_jupyterhub_extensions() {
        let registry = TraitTypeRegistry::jupyterhub();
        let names: Vec<&str> = registry.extensions().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                JUPYTERHUB_BYTE_SPECIFICATION,
                JUPYTERHUB_CALLABLE,
                JUPYTERHUB_COMMAND,
                JUPYTERHUB_ENTRY_POINT_TYPE,
                JUPYTERHUB_URL_PREFIX,
            ]
        );
        assert_eq!(
            registry.lookup(&TraitType::other(JUPYTERHUB_ENTRY_POINT_TYPE)),
            Some(Primitive::Object)
        );
    }

    #[test]
    fn test_register_is_table_insertion() {
        let mut registry = TraitTypeRegistry::new();
        assert_eq!(registry.register("myapp.traits.Port", Primitive::Number), None);
        assert_eq!(
            registry.register("myapp.traits.Port", Primitive::String),
            Some(Primitive::Number)
        );
        assert_eq!(
            registry.lookup(&TraitType::other("myapp.traits.Port")),
            Some(Primitive::String)
        );
    }
}
