//! Declared trait types.

use std::fmt;

/// A single (non-union) trait type.
///
/// The named variants are the traitlets core kinds. Any other type, such as
/// an application-specific trait class, is carried by its dotted name in
/// [`TraitKind::Other`] and only resolves through a registry extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraitKind {
    Any,
    Bool,
    Bytes,
    Callable,
    Dict,
    Enum,
    Float,
    Int,
    List,
    Set,
    Unicode,
    Other(String),
}

impl TraitKind {
    /// Fully qualified name of the trait class
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Any => "traitlets.Any",
            Self::Bool => "traitlets.Bool",
            Self::Bytes => "traitlets.Bytes",
            Self::Callable => "traitlets.Callable",
            Self::Dict => "traitlets.Dict",
            Self::Enum => "traitlets.Enum",
            Self::Float => "traitlets.Float",
            Self::Int => "traitlets.Int",
            Self::List => "traitlets.List",
            Self::Set => "traitlets.Set",
            Self::Unicode => "traitlets.Unicode",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared type of a trait: a single kind, or a union of constituent
/// types in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraitType {
    Kind(TraitKind),
    Union(Vec<TraitType>),
}

impl TraitType {
    pub const fn any() -> Self {
        Self::Kind(TraitKind::Any)
    }

    pub const fn bool() -> Self {
        Self::Kind(TraitKind::Bool)
    }

    pub const fn bytes() -> Self {
        Self::Kind(TraitKind::Bytes)
    }

    pub const fn callable() -> Self {
        Self::Kind(TraitKind::Callable)
    }

    pub const fn dict() -> Self {
        Self::Kind(TraitKind::Dict)
    }

    pub const fn enumeration() -> Self {
        Self::Kind(TraitKind::Enum)
    }

    pub const fn float() -> Self {
        Self::Kind(TraitKind::Float)
    }

    pub const fn int() -> Self {
        Self::Kind(TraitKind::Int)
    }

    pub const fn list() -> Self {
        Self::Kind(TraitKind::List)
    }

    pub const fn set() -> Self {
        Self::Kind(TraitKind::Set)
    }

    pub const fn unicode() -> Self {
        Self::Kind(TraitKind::Unicode)
    }

    /// A trait type outside the traitlets core, by dotted name
    pub fn other(name: impl Into<String>) -> Self {
        Self::Kind(TraitKind::Other(name.into()))
    }

    /// A union of the given types, in declaration order
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    #[must_use]
    pub const fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }
}

impl From<TraitKind> for TraitType {
    fn from(kind: TraitKind) -> Self {
        Self::Kind(kind)
    }
}

impl fmt::Display for TraitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::Union(members) => {
                f.write_str("traitlets.Union(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_uses_dotted_name() {
        assert_eq!(TraitKind::Int.to_string(), "traitlets.Int");
        assert_eq!(
            TraitType::other("jupyterhub.traitlets.Command").to_string(),
            "jupyterhub.traitlets.Command"
        );
    }

    #[test]
    fn test_union_display_keeps_order() {
        let ty = TraitType::union([TraitType::int(), TraitType::unicode()]);
        assert!(ty.is_union());
        assert_eq!(
            ty.to_string(),
            "traitlets.Union(traitlets.Int | traitlets.Unicode)"
        );
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(TraitType::from(TraitKind::Bool), TraitType::bool());
        assert!(!TraitType::bool().is_union());
    }
}
