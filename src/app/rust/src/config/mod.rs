/* src/app/rust/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_FILE_NAME, find_craft_config, load_craft_config, load_or_default};
pub use types::{CraftConfig, I18nSection};
