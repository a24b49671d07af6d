use crate::commands::{open_catalog, wants_json};
use crate::core::{Config, EntityRecord, PnpEntity};
use crate::ui::print_entities;
use anyhow::{bail, Result};
use clap::ArgMatches;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let catalog = open_catalog(matches)?;

    let entities: Vec<PnpEntity> = if let Some(name) = matches.get_one::<String>("name") {
        PnpEntity::by_friendly_name(&*catalog, name)?
            .into_iter()
            .collect()
    } else if let Some(text) = matches.get_one::<String>("like") {
        PnpEntity::like_friendly_name(&*catalog, text)?
    } else if let Some(id) = matches.get_one::<String>("id") {
        let entity = if matches.get_flag("raw-id") {
            PnpEntity::by_device_id_raw(&*catalog, id)?
        } else {
            PnpEntity::by_device_id(&*catalog, id)?
        };
        entity.into_iter().collect()
    } else {
        bail!("One of --name, --like or --id is required");
    };

    if wants_json(matches, &config) {
        let records: Vec<&EntityRecord> = entities.iter().map(PnpEntity::record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_entities(&entities);
    }

    Ok(())
}
