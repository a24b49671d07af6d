use anyhow::Result;

use wmipnp::cli::build_cli;
use wmipnp::commands;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    wmipnp::init_logging(verbose);

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("headset", sub_matches)) => commands::headset(sub_matches),
        Some(("find", sub_matches)) => commands::find(sub_matches),
        Some(("prop", sub_matches)) => commands::property(sub_matches),
        Some(("dump", sub_matches)) => commands::dump(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to wmipnp!");
            println!("Use 'wmipnp --help' for more information.");
            Ok(())
        }
    }
}
