use std::fs;
use std::path::{Path, PathBuf};

use super::core::SpreadkitConfig;
use crate::errors::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".spreadkit.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<SpreadkitConfig> {
    toml::from_str::<SpreadkitConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<SpreadkitConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents).context(format!("Loading {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered candidate; unreadable or invalid files are skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SpreadkitConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and up to `max_depth - 1` of its ancestors, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Search `start` and up to ten of its ancestors for `.spreadkit.toml`
pub fn discover_config(start: &Path) -> SpreadkitConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH + 1
            );
            SpreadkitConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from `cwd`
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SpreadkitConfig> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(cwd)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            [output]
            pretty = true

            [random]
            seed = 42
        "#})
        .unwrap();

        assert!(config.output.pretty);
        assert_eq!(config.random.seed, Some(42));
    }

    #[test]
    fn test_parse_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), SpreadkitConfig::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("[random]\nseed = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_directory_ancestors_limits_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_directory_ancestors_stops_at_root() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[random]\nseed = 7\n").unwrap();
        let nested = temp.path().join("x").join("y");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_config(&nested).random.seed, Some(7));
    }

    #[test]
    fn test_discover_skips_invalid_file() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[random]\nseed = 3\n").unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        assert_eq!(discover_config(&nested).random.seed, Some(3));
    }

    #[test]
    fn test_discover_config_ten_levels_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[random]\nseed = 5\n").unwrap();
        let deepest = (0..10).fold(temp.path().to_path_buf(), |dir, i| dir.join(format!("d{i}")));
        fs::create_dir_all(&deepest).unwrap();

        assert_eq!(discover_config(&deepest).random.seed, Some(5));
    }

    #[test]
    fn test_explicit_invalid_file_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[random]\nseed = \"soon\"").unwrap();

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        let message = err.to_string();
        assert!(message.contains("broken.toml"));
        assert!(message.contains("Configuration error"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = load_config(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
