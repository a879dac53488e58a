use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};

const DEFAULT_CONFIG: &str = r#"# Spreadkit Configuration

[output]
pretty = false

[random]
# Uncomment for reproducible remove-random output
# seed = 42
"#;

/// Write the default configuration into `dir`, returning the file's path
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::Configuration(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote {}", config_path.display());
    Ok(config_path)
}
