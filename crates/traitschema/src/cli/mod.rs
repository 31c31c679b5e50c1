pub mod handlers;

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("traitschema")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a JSON Schema fragment from a class's configurable traits")
        .arg(
            Arg::new("module_name")
                .required(true)
                .help("Module name containing the class, e.g. 'kubespawner'"),
        )
        .arg(
            Arg::new("class_name")
                .required(true)
                .help("Class name, e.g. 'KubeSpawner'"),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .value_name("POLICY")
                .value_parser(["strict", "lenient"])
                .default_value("strict")
                .help("Fail on trait types with no schema type (strict) or skip them (lenient)"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .value_name("SOURCE")
                .value_parser(["class-traits", "member-scan"])
                .default_value("class-traits")
                .help("Enumerate the class trait registry or scan every class member"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (-v info, -vv debug)"),
        )
        .after_help(
            "EXAMPLES:\n  \
             traitschema kubespawner KubeSpawner\n  \
             traitschema --policy lenient demo Hooks",
        )
}
