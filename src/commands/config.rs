use crate::core::validation::validate_lookup;
use crate::core::Config;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

/// Which configured friendly name a `config set` targets
enum NameSetting {
    HandsFree,
    Headphones,
}

impl NameSetting {
    fn label(&self) -> &'static str {
        match self {
            NameSetting::HandsFree => "Hands-free device name",
            NameSetting::Headphones => "Headphones device name",
        }
    }

    fn set(&self, config: &mut Config, name: String) {
        match self {
            NameSetting::HandsFree => config.set_hands_free_name(name),
            NameSetting::Headphones => config.set_headphones_name(name),
        }
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("path", _)) => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        Some(("reset", _)) => {
            Config::default().save()?;
            println!("{}", "Configuration reset to defaults.".green());
            Ok(())
        }
        Some(("set", sub_matches)) => set(sub_matches),
        _ => {
            println!("Use 'wmipnp config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".white().bold());
    println!("  {:<12} {}", "hands-free", config.hands_free_name.cyan());
    println!("  {:<12} {}", "headphones", config.headphones_name.cyan());
    println!("  {:<12} {}", "json", config.json_output.to_string().cyan());
    Ok(())
}

fn set(matches: &ArgMatches) -> Result<()> {
    let (setting, sub_matches) = match matches.subcommand() {
        Some(("hands-free", m)) => (NameSetting::HandsFree, m),
        Some(("headphones", m)) => (NameSetting::Headphones, m),
        Some(("json", m)) => return set_json(m),
        _ => bail!("Use 'wmipnp config set --help' for more information."),
    };

    let name = sub_matches
        .get_one::<String>("name")
        .context("Name argument is required")?;
    validate_lookup(setting.label(), name)?;

    let mut config = Config::load()?;
    setting.set(&mut config, name.clone());
    config.save()?;

    println!("{} set to: {}", setting.label(), name.cyan().bold());
    Ok(())
}

fn set_json(matches: &ArgMatches) -> Result<()> {
    let enabled = *matches
        .get_one::<bool>("enabled")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    config.json_output = enabled;
    config.save()?;

    println!("JSON output {}", if enabled { "enabled".green() } else { "disabled".yellow() });
    Ok(())
}
