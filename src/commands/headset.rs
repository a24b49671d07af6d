use crate::commands::{open_catalog, wants_json};
use crate::core::{Config, Headset};
use crate::ui::print_headset_status;
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;

    let hands_free_name = matches
        .get_one::<String>("hands-free")
        .unwrap_or(&config.hands_free_name);
    let headphones_name = matches
        .get_one::<String>("headphones")
        .unwrap_or(&config.headphones_name);

    let catalog = open_catalog(matches)?;
    let headset = Headset::create_by(&*catalog, hands_free_name, headphones_name)
        .context("Failed to locate the headset")?;

    let status = headset.status();

    if wants_json(matches, &config) {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_headset_status(&status, headphones_name);
    }

    Ok(())
}
