//! Resolution of declared trait types into schema primitives.

use itertools::Itertools;
use tracing::debug;

use crate::config::UnknownTypePolicy;
use crate::descriptor::TraitDescriptor;
use crate::registry::TraitTypeRegistry;
use crate::trait_type::TraitType;
use crate::types::Primitive;
use crate::{Error, Result};

/// Resolves trait types against a registry.
///
/// Unions are flattened in declaration order without deduplication, so
/// `Union(Unicode, Unicode)` resolves to `[string, string]`. A union with any
/// unresolved member is unresolved as a whole.
#[derive(Debug, Clone, Copy)]
pub struct SchemaTypeResolver<'r> {
    registry: &'r TraitTypeRegistry,
    policy: UnknownTypePolicy,
}

impl<'r> SchemaTypeResolver<'r> {
    pub const fn new(registry: &'r TraitTypeRegistry, policy: UnknownTypePolicy) -> Self {
        Self { registry, policy }
    }

    pub const fn policy(&self) -> UnknownTypePolicy {
        self.policy
    }

    /// Resolve a descriptor's type, applying the unknown-type policy.
    ///
    /// Under [`UnknownTypePolicy::Lenient`] an unresolved type yields an empty
    /// list; the caller is expected to drop the attribute.
    pub fn resolve(&self, descriptor: &TraitDescriptor) -> Result<Vec<Primitive>> {
        match self.resolve_type(&descriptor.type_id) {
            Ok(types) => {
                debug!(attribute = %descriptor.name, types = ?types, "resolved trait type");
                Ok(types)
            }
            Err(unresolved) => match self.policy {
                UnknownTypePolicy::Strict => Err(Error::UnknownTraitType {
                    attribute: descriptor.name.clone(),
                    type_name: unresolved.to_string(),
                }),
                UnknownTypePolicy::Lenient => {
                    debug!(
                        attribute = %descriptor.name,
                        trait_type = %unresolved,
                        "unresolved trait type"
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Policy-free resolution. On failure, returns the innermost type that
    /// could not be resolved.
    pub fn resolve_type<'t>(
        &self,
        trait_type: &'t TraitType,
    ) -> std::result::Result<Vec<Primitive>, &'t TraitType> {
        match trait_type {
            TraitType::Kind(_) => self
                .registry
                .lookup(trait_type)
                .map(|primitive| vec![primitive])
                .ok_or(trait_type),
            // an empty union accepts nothing
            TraitType::Union(members) if members.is_empty() => Err(trait_type),
            TraitType::Union(members) => members
                .iter()
                .map(|member| self.resolve_type(member))
                .flatten_ok()
                .collect(),
        }
    }
}
