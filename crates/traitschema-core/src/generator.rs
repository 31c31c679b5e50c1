//! End-to-end schema generation for one class.

use tracing::info;

use crate::builder::{BuildOutput, SchemaBuilder};
use crate::catalog::ClassCatalog;
use crate::config::SchemaOptions;
use crate::introspect::ConfigurableIntrospector;
use crate::registry::TraitTypeRegistry;
use crate::resolver::SchemaTypeResolver;
use crate::Result;

/// Load class → enumerate configurable traits → resolve → assemble.
#[derive(Debug, Clone, Copy)]
pub struct SchemaGenerator<'a> {
    catalog: &'a ClassCatalog,
    registry: &'a TraitTypeRegistry,
    options: SchemaOptions,
}

impl<'a> SchemaGenerator<'a> {
    pub const fn new(
        catalog: &'a ClassCatalog,
        registry: &'a TraitTypeRegistry,
        options: SchemaOptions,
    ) -> Self {
        Self {
            catalog,
            registry,
            options,
        }
    }

    pub const fn options(&self) -> SchemaOptions {
        self.options
    }

    pub fn generate(&self, module: &str, class: &str) -> Result<BuildOutput> {
        let descriptors =
            ConfigurableIntrospector::new(self.catalog, self.options.source).introspect(module, class)?;

        let resolver = SchemaTypeResolver::new(self.registry, self.options.policy);
        let output = SchemaBuilder::new(resolver).build(&descriptors)?;

        info!(
            module,
            class,
            policy = %self.options.policy,
            entries = output.schema.len(),
            skipped = output.skipped.len(),
            "generated schema"
        );
        Ok(output)
    }
}
