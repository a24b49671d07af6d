use clap::{Arg, ArgAction, ArgGroup, Command};

/// Command-line definition of the `wmipnp` binary
pub fn build_cli() -> Command {
    Command::new("wmipnp")
        .about("Read Plug-and-Play device properties through WMI")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print JSON instead of formatted text")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .value_name("FILE")
                .help("Read devices from a captured snapshot instead of WMI")
                .global(true),
        )
        .subcommand(
            Command::new("headset")
                .about("Show battery level and connection state of the WH-1000XM4 headset")
                .arg(
                    Arg::new("hands-free")
                        .long("hands-free")
                        .value_name("NAME")
                        .help("Friendly name of the hands-free node (battery level)"),
                )
                .arg(
                    Arg::new("headphones")
                        .long("headphones")
                        .value_name("NAME")
                        .help("Friendly name of the headphones node (connection state)"),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("Find PnP devices by friendly name or device id")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("Exact friendly name"),
                )
                .arg(
                    Arg::new("like")
                        .short('l')
                        .long("like")
                        .value_name("TEXT")
                        .help("Text contained in the friendly name"),
                )
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_name("ID")
                        .help("DeviceID or PNPDeviceID"),
                )
                .arg(
                    Arg::new("raw-id")
                        .long("raw-id")
                        .help("The id is already escaped for WQL (backslashes doubled)")
                        .requires("id")
                        .action(ArgAction::SetTrue),
                )
                .group(
                    ArgGroup::new("lookup")
                        .args(["name", "like", "id"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("prop")
                .about("Read device properties by key ({GUID} pid) or key name")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_name("ID")
                        .help("DeviceID or PNPDeviceID"),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("Exact friendly name"),
                )
                .arg(
                    Arg::new("key")
                        .help("Property keys")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .group(
                    ArgGroup::new("device")
                        .args(["id", "name"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Capture matching devices and their properties into a snapshot file")
                .arg(
                    Arg::new("like")
                        .short('l')
                        .long("like")
                        .value_name("TEXT")
                        .help("Text contained in the friendly name")
                        .required(true),
                )
                .arg(
                    Arg::new("key")
                        .short('k')
                        .long("key")
                        .value_name("KEY")
                        .help("Property key to capture (defaults to the headset keys)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Snapshot file to write")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'wmipnp config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(Command::new("path").about("Print the configuration file path"))
                .subcommand(Command::new("reset").about("Restore default configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .subcommand_required(true)
                        .arg_required_else_help(true)
                        .subcommand(
                            Command::new("hands-free")
                                .about("Friendly name of the hands-free node")
                                .arg(Arg::new("name").required(true).index(1)),
                        )
                        .subcommand(
                            Command::new("headphones")
                                .about("Friendly name of the headphones node")
                                .arg(Arg::new("name").required(true).index(1)),
                        )
                        .subcommand(
                            Command::new("json")
                                .about("Print JSON by default")
                                .arg(
                                    Arg::new("enabled")
                                        .required(true)
                                        .index(1)
                                        .value_parser(clap::value_parser!(bool)),
                                ),
                        ),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}
