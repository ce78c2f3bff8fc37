//! Where Lookbook keeps its settings and preference store
//!
//! The data directory is `$LOOKBOOK_HOME` when that variable is set and
//! non-empty, otherwise `~/.config/lookbook/`. It holds:
//! - config.toml - service endpoint, intake limits, share links
//! - lookbook.sqlite - persisted preference flags and likes

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable relocating the data directory
pub const HOME_ENV: &str = "LOOKBOOK_HOME";

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "lookbook.sqlite";

/// Pick the data directory from an optional override and the user's home.
///
/// Blank overrides are ignored so `LOOKBOOK_HOME=` behaves like unset.
pub fn data_dir_from(override_dir: Option<PathBuf>, home: Option<&Path>) -> Option<PathBuf> {
    override_dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home.map(|home| home.join(".config").join("lookbook")))
}

/// Data directory for this process, created on first use
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir();
    let dir = data_dir_from(std::env::var_os(HOME_ENV).map(PathBuf::from), home.as_deref())
        .context("Could not determine home directory; set LOOKBOOK_HOME")?;
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))
}

/// Path of the TOML settings file
pub fn config_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(CONFIG_FILE))
}

/// Path of the SQLite preference store
pub fn database_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = data_dir_from(Some(PathBuf::from("/srv/lookbook")), Some(Path::new("/home/ana")));
        assert_eq!(dir, Some(PathBuf::from("/srv/lookbook")));
    }

    #[test]
    fn test_home_fallback() {
        let home = Path::new("/home/ana");
        assert_eq!(
            data_dir_from(None, Some(home)),
            Some(home.join(".config").join("lookbook"))
        );
        // Blank override counts as unset
        assert_eq!(
            data_dir_from(Some(PathBuf::new()), Some(home)),
            Some(home.join(".config").join("lookbook"))
        );
        assert_eq!(data_dir_from(None, None), None);
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }
}
