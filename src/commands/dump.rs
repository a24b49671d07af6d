use crate::commands::open_catalog;
use crate::core::{property, DeviceSnapshot, EntityFilter};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::Path;

/// Keys captured when none are given
pub fn default_keys() -> Vec<String> {
    vec![
        property::BATTERY_LEVEL.to_string(),
        property::IS_CONNECTED.to_string(),
        property::LAST_CONNECTED_TIME.to_string(),
    ]
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let like = matches
        .get_one::<String>("like")
        .context("--like is required")?;
    let output = matches
        .get_one::<String>("output")
        .context("--output is required")?;

    let keys: Vec<String> = match matches.get_many::<String>("key") {
        Some(keys) => keys.cloned().collect(),
        None => default_keys(),
    };

    let catalog = open_catalog(matches)?;
    let snapshot = DeviceSnapshot::capture(
        &*catalog,
        &EntityFilter::friendly_name_like(like.as_str()),
        &keys,
    )?;

    snapshot
        .save(Path::new(output))
        .with_context(|| format!("Failed to write snapshot: {}", output))?;

    let property_count: usize = snapshot.devices.iter().map(|d| d.properties.len()).sum();
    println!(
        "{} {} {}",
        "Captured".green().bold(),
        format!(
            "{} device(s), {} propert{}",
            snapshot.devices.len(),
            property_count,
            if property_count == 1 { "y" } else { "ies" }
        )
        .yellow()
        .bold(),
        format!("-> {}", output).dimmed()
    );

    Ok(())
}
