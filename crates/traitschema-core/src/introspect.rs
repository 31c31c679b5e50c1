//! Enumeration of a class's configurable attributes.

use tracing::{debug, info};

use crate::catalog::{is_config_tagged, ClassCatalog, Member, ResolvedClass, TraitDef};
use crate::config::SourceKind;
use crate::descriptor::TraitDescriptor;
use crate::Result;

/// A way of listing the configurable traits of a resolved class.
///
/// Implementations agree on which attributes are configurable and on the
/// descriptor contents; only the order of the result may differ.
pub trait ConfigurableAttributeSource {
    fn kind(&self) -> SourceKind;

    fn configurable_traits(&self, class: &ResolvedClass<'_>) -> Vec<TraitDescriptor>;
}

/// Queries the class-level trait registry filtered on the `config` tag.
///
/// Order: inherited traits first, then the class's own, each in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassTraitsSource;

impl ConfigurableAttributeSource for ClassTraitsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::ClassTraits
    }

    fn configurable_traits(&self, class: &ResolvedClass<'_>) -> Vec<TraitDescriptor> {
        class
            .class_traits()
            .filter(|def| def.is_configurable())
            .map(TraitDef::descriptor)
            .collect()
    }
}

/// Scans every member by name and inspects its metadata for a `config` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberScanSource;

impl ConfigurableAttributeSource for MemberScanSource {
    fn kind(&self) -> SourceKind {
        SourceKind::MemberScan
    }

    fn configurable_traits(&self, class: &ResolvedClass<'_>) -> Vec<TraitDescriptor> {
        class
            .members_by_name()
            .into_iter()
            .filter(|member| member.metadata().is_some_and(is_config_tagged))
            .filter_map(Member::as_trait)
            .map(TraitDef::descriptor)
            .collect()
    }
}

pub fn source_for(kind: SourceKind) -> Box<dyn ConfigurableAttributeSource> {
    match kind {
        SourceKind::ClassTraits => Box::new(ClassTraitsSource),
        SourceKind::MemberScan => Box::new(MemberScanSource),
    }
}

/// Loads classes from a catalog and lists their configurable traits.
pub struct ConfigurableIntrospector<'c> {
    catalog: &'c ClassCatalog,
    source: Box<dyn ConfigurableAttributeSource>,
}

impl<'c> ConfigurableIntrospector<'c> {
    pub fn new(catalog: &'c ClassCatalog, kind: SourceKind) -> Self {
        Self::with_source(catalog, source_for(kind))
    }

    pub fn with_source(
        catalog: &'c ClassCatalog,
        source: Box<dyn ConfigurableAttributeSource>,
    ) -> Self {
        Self { catalog, source }
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Descriptors for every configurable trait of `module.class`.
    pub fn introspect(&self, module: &str, class: &str) -> Result<Vec<TraitDescriptor>> {
        let resolved = self.catalog.resolve(module, class)?;
        debug!(
            class = %resolved.class_ref(),
            members = resolved.members().len(),
            "loaded class"
        );

        let descriptors = self.source.configurable_traits(&resolved);
        info!(
            class = %resolved.class_ref(),
            source = %self.source.kind(),
            configurable = descriptors.len(),
            "enumerated configurable traits"
        );
        Ok(descriptors)
    }
}
