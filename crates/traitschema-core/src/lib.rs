//! traitschema-core - JSON Schema fragments for configurable classes
//!
//! This crate provides:
//! - Trait type declarations and the type → primitive registry
//! - Union-aware type resolution with strict or lenient handling of unknown types
//! - A static catalog of configurable classes with inheritance
//! - Enumeration of configurable traits and schema assembly

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod introspect;
pub mod registry;
pub mod resolver;
pub mod trait_type;
pub mod types;

pub use builder::{BuildOutput, SchemaBuilder};
pub use catalog::{ClassCatalog, ClassDef, ClassRef, Member, ModuleDef, ResolvedClass, TraitDef};
pub use config::{SchemaOptions, SourceKind, UnknownTypePolicy};
pub use descriptor::TraitDescriptor;
pub use error::{Error, Result};
pub use generator::SchemaGenerator;
pub use introspect::{
    ClassTraitsSource, ConfigurableAttributeSource, ConfigurableIntrospector, MemberScanSource,
};
pub use registry::TraitTypeRegistry;
pub use resolver::SchemaTypeResolver;
pub use trait_type::{TraitKind, TraitType};
pub use types::{Primitive, Schema, SchemaEntry};
