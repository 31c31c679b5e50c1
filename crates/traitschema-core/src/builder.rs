//! Schema assembly from trait descriptors.

use tracing::debug;

use crate::descriptor::TraitDescriptor;
use crate::resolver::SchemaTypeResolver;
use crate::types::{Schema, SchemaEntry};
use crate::Result;

/// Result of a build: the schema plus the attributes dropped under the
/// lenient policy, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub schema: Schema,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaBuilder<'r> {
    resolver: SchemaTypeResolver<'r>,
}

impl<'r> SchemaBuilder<'r> {
    pub const fn new(resolver: SchemaTypeResolver<'r>) -> Self {
        Self { resolver }
    }

    pub fn build(&self, descriptors: &[TraitDescriptor]) -> Result<BuildOutput> {
        descriptors
            .iter()
            .try_fold(BuildOutput::default(), |mut output, descriptor| {
                let types = self.resolver.resolve(descriptor)?;
                if types.is_empty() {
                    debug!(attribute = %descriptor.name, "skipping attribute");
                    output.skipped.push(descriptor.name.clone());
                } else {
                    let entry = SchemaEntry::new(types, descriptor.allow_none, descriptor.help.clone());
                    output.schema.insert(descriptor.name.clone(), entry);
                }
                Ok(output)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownTypePolicy;
    use crate::registry::TraitTypeRegistry;
    use crate::trait_type::TraitType;
    use crate::types::Primitive;
    use crate::Error;

    fn example() -> Vec<TraitDescriptor> {
        vec![
            TraitDescriptor::new("b", TraitType::union([TraitType::int(), TraitType::unicode()]))
                .allow_none(true)
                .help("val"),
            TraitDescriptor::new("a", TraitType::bool()).help("toggle"),
        ]
    }

    fn build(
        descriptors: &[TraitDescriptor],
        policy: UnknownTypePolicy,
    ) -> Result<BuildOutput> {
        let registry = TraitTypeRegistry::new();
        SchemaBuilder::new(SchemaTypeResolver::new(&registry, policy)).build(descriptors)
    }

    #[test]
    fn test_example_schema() {
        let output = build(&example(), UnknownTypePolicy::Strict).unwrap_or_default();
        assert!(output.skipped.is_empty());

        let a = output.schema.get("a");
        assert_eq!(a.map(|e| e.types.clone()), Some(vec![Primitive::Bool]));
        assert_eq!(a.map(|e| e.description.as_str()), Some("toggle"));

        let b = output.schema.get("b");
        assert_eq!(
            b.map(|e| e.types.clone()),
            Some(vec![Primitive::Number, Primitive::String, Primitive::Null])
        );
        assert_eq!(b.map(|e| e.description.as_str()), Some("val"));

        let json: serde_json::Value =
            serde_json::to_value(&output.schema).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "a": {"type": ["bool"], "description": "toggle"},
                "b": {"type": ["number", "string", "null"], "description": "val"}
            })
        );
    }

    #[test]
    fn test_keys_sorted_regardless_of_input_order() {
        let output = build(&example(), UnknownTypePolicy::Strict).unwrap_or_default();
        let names: Vec<&str> = output.schema.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_lenient_skips_unknown() {
        let mut descriptors = example();
        descriptors.push(TraitDescriptor::new("c", TraitType::other("demo.HookCallable")));
        let output = build(&descriptors, UnknownTypePolicy::Lenient).unwrap_or_default();
        assert!(!output.schema.contains("c"));
        assert_eq!(output.skipped, vec!["c".to_string()]);
        assert_eq!(output.schema.len(), 2);
    }

    #[test]
    fn test_strict_aborts_on_unknown() {
        let mut descriptors = example();
        descriptors.push(TraitDescriptor::new("c", TraitType::other("demo.HookCallable")));
        let result = build(&descriptors, UnknownTypePolicy::Strict);
        assert!(matches!(result, Err(Error::UnknownTraitType { .. })));
    }

    #[test]
    fn test_no_entry_has_empty_type_list() {
        let descriptors = vec![
            TraitDescriptor::new("empty", TraitType::union([])).allow_none(true),
            TraitDescriptor::new("ok", TraitType::dict()),
        ];
        let output = build(&descriptors, UnknownTypePolicy::Lenient).unwrap_or_default();
        assert!(output.schema.iter().all(|(_, e)| !e.types.is_empty()));
        assert_eq!(output.skipped, vec!["empty".to_string()]);
    }

    #[test]
    fn test_empty_help_kept_verbatim() {
        let descriptors = vec![TraitDescriptor::new("x", TraitType::float())];
        let output = build(&descriptors, UnknownTypePolicy::Strict).unwrap_or_default();
        assert_eq!(output.schema.get("x").map(|e| e.description.as_str()), Some(""));
    }
}
