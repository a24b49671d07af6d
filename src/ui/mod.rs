// UI and formatting module

pub mod device_formatters;
pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use device_formatters::{print_entities, print_headset_status, print_property};
pub use formatters::{battery_bar, fit_to_width, format_elapsed, format_time};
