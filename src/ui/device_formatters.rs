use crate::core::{DeviceProperty, HeadsetStatus, PnpEntity};
use crate::ui::formatters::{battery_bar, fit_to_width, format_elapsed, format_time};
use chrono::Utc;
use colored::*;

const NAME_WIDTH: usize = 36;
const CLASS_WIDTH: usize = 38;

pub fn print_headset_status(status: &HeadsetStatus, headphones_name: &str) {
    println!("\n{}", headphones_name.bold().bright_cyan());
    println!("{}", "=".repeat(60));

    match status.battery_level {
        Some(level) => {
            let text = format!("{}%", level);
            let colored_level = match level {
                0..=20 => text.red().bold(),
                21..=50 => text.yellow().bold(),
                _ => text.green().bold(),
            };
            println!(
                "  {:<18} {} {}",
                "Battery:".white(),
                battery_bar(level, 20).dimmed(),
                colored_level
            );
        }
        None => println!("  {:<18} {}", "Battery:".white(), "unknown".dimmed()),
    }

    let connected = match status.connected {
        Some(true) => "connected".green().bold(),
        Some(false) => "disconnected".yellow(),
        None => "unknown".dimmed(),
    };
    println!("  {:<18} {}", "State:".white(), connected);

    if let Some(last) = status.last_connected_time {
        println!(
            "  {:<18} {} {}",
            "Last connected:".white(),
            format_time(&last).cyan(),
            format!("({})", format_elapsed(&last, &Utc::now())).dimmed()
        );
    } else if status.connected == Some(false) {
        println!("  {:<18} {}", "Last connected:".white(), "unknown".dimmed());
    }

    println!();
}

pub fn print_entities(entities: &[PnpEntity]) {
    if entities.is_empty() {
        println!("{}", "No matching PnP devices found.".yellow());
        return;
    }

    println!(
        "{} {}",
        "PnP devices:".white().bold(),
        format!("({} total)", entities.len()).dimmed()
    );
    println!();
    println!(
        "  {} {} {}",
        fit_to_width("NAME", NAME_WIDTH).bold(),
        fit_to_width("CLASS", CLASS_WIDTH).bold(),
        "DEVICE ID".bold()
    );

    for entity in entities {
        println!(
            "  {} {} {}",
            fit_to_width(entity.name().unwrap_or("<unnamed>"), NAME_WIDTH).cyan(),
            fit_to_width(entity.class_guid().unwrap_or("-"), CLASS_WIDTH).dimmed(),
            entity.device_id().unwrap_or("-")
        );
        if let Some(description) = entity.description() {
            if Some(description) != entity.name() {
                println!("    {}", description.dimmed());
            }
        }
    }
}

pub fn print_property(property: &DeviceProperty) {
    println!("  {:<10} {}", "Device:".white(), property.device_id.cyan());
    println!("  {:<10} {}", "Key:".white(), property.key);
    if property.key_name != property.key {
        println!("  {:<10} {}", "Name:".white(), property.key_name);
    }
    println!("  {:<10} {}", "Type:".white(), property.data_type.to_string().dimmed());
    match &property.data {
        Some(value) => println!("  {:<10} {}", "Value:".white(), value.to_string().green().bold()),
        None => println!("  {:<10} {}", "Value:".white(), "<none>".dimmed()),
    }
}
