use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use traitschema_core::{
    ClassCatalog, SchemaGenerator, SchemaOptions, SourceKind, TraitTypeRegistry,
    UnknownTypePolicy,
};

/// Read [`SchemaOptions`] from parsed arguments.
pub fn options_from(matches: &ArgMatches) -> Result<SchemaOptions> {
    let policy = matches
        .get_one::<String>("policy")
        .map(|s| UnknownTypePolicy::from_str(s))
        .transpose()
        .context("invalid --policy")?
        .unwrap_or_default();
    let source = matches
        .get_one::<String>("source")
        .map(|s| SourceKind::from_str(s))
        .transpose()
        .context("invalid --source")?
        .unwrap_or_default();

    Ok(SchemaOptions::new().with_policy(policy).with_source(source))
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let module = matches
        .get_one::<String>("module_name")
        .context("missing module name")?;
    let class = matches
        .get_one::<String>("class_name")
        .context("missing class name")?;
    let options = options_from(matches)?;

    execute(
        module,
        class,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Generate the schema for `module.class` and write it to `out`.
///
/// Nothing is written to `out` unless generation succeeds. Attributes skipped
/// under the lenient policy are reported to `diag`, one line each.
pub fn execute(
    module: &str,
    class: &str,
    options: SchemaOptions,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<()> {
    let catalog = ClassCatalog::builtin();
    let registry = TraitTypeRegistry::jupyterhub();

    let output = SchemaGenerator::new(&catalog, &registry, options).generate(module, class)?;
    let rendered = output.schema.to_pretty_json()?;

    for name in &output.skipped {
        writeln!(diag, "Skipping {name}")?;
    }
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}
