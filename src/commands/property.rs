use crate::commands::{open_catalog, wants_json};
use crate::core::{Config, DeviceProperty, PnpEntity};
use crate::ui::print_property;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let catalog = open_catalog(matches)?;

    let entity = if let Some(id) = matches.get_one::<String>("id") {
        PnpEntity::by_device_id(&*catalog, id)?
            .with_context(|| format!("No PnP device with id {}", id))?
    } else if let Some(name) = matches.get_one::<String>("name") {
        PnpEntity::by_friendly_name(&*catalog, name)?
            .with_context(|| format!("No PnP device named {}", name))?
    } else {
        bail!("One of --id or --name is required");
    };

    let keys: Vec<&String> = matches
        .get_many::<String>("key")
        .context("At least one property key is required")?
        .collect();

    let mut found: Vec<DeviceProperty> = Vec::new();
    let mut missing: Vec<&String> = Vec::new();
    for key in keys {
        match entity.device_property(key)? {
            Some(property) => found.push(property),
            None => missing.push(key),
        }
    }

    if wants_json(matches, &config) {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    println!(
        "{}",
        entity.name().unwrap_or("<unnamed>").bold().bright_cyan()
    );
    for property in &found {
        println!();
        print_property(property);
    }
    for key in missing {
        println!();
        println!("  {} {}", "No value for".yellow(), key.yellow().bold());
    }

    Ok(())
}
