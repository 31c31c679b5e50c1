//! traitschema CLI
//!
//! Binary name: `traitschema`

use std::process;

use traitschema::cli::{build_cli, handlers};

fn main() {
    let matches = build_cli().get_matches();
    traitschema::logging::init(matches.get_count("verbose"));

    if let Err(err) = handlers::run(&matches) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }

        let code = err
            .downcast_ref::<traitschema_core::Error>()
            .map_or(1, traitschema_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
