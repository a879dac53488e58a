//! `.spreadkit.toml` configuration: schema, discovery, and flag resolution.

mod core;
mod loader;

pub use self::core::{OutputConfig, RandomConfig, RunSettings, SpreadkitConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
