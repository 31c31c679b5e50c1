//! Run options
//!
//! The tool reads no configuration file or environment; options come from
//! command-line flags and default to the strict, class-traits behavior.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What to do with a trait whose type has no schema primitive
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Fail the run with `UnknownTraitType`
    #[default]
    Strict,
    /// Drop the attribute and report it as skipped
    Lenient,
}

/// How configurable attributes are enumerated
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Class-level trait registry filtered on the `config` tag
    #[default]
    ClassTraits,
    /// Every class member, inspecting its metadata for a `config` key
    MemberScan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOptions {
    pub policy: UnknownTypePolicy,
    pub source: SourceKind,
}

impl SchemaOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: UnknownTypePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn with_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let options = SchemaOptions::new();
        assert_eq!(options.policy, UnknownTypePolicy::Strict);
        assert_eq!(options.source, SourceKind::ClassTraits);
    }

    #[test]
    fn test_flag_values_round_trip() {
        assert_eq!(
            UnknownTypePolicy::from_str("lenient").ok(),
            Some(UnknownTypePolicy::Lenient)
        );
        assert_eq!(
            SourceKind::from_str("member-scan").ok(),
            Some(SourceKind::MemberScan)
        );
        assert_eq!(SourceKind::ClassTraits.to_string(), "class-traits");
        assert!(UnknownTypePolicy::from_str("loose").is_err());
    }

    #[test]
    fn test_builder_methods() {
        let options = SchemaOptions::new()
            .with_policy(UnknownTypePolicy::Lenient)
            .with_source(SourceKind::MemberScan);
        assert_eq!(options.policy, UnknownTypePolicy::Lenient);
        assert_eq!(options.source, SourceKind::MemberScan);
    }
}
