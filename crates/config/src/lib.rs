pub mod schema;
pub mod watcher;

pub use schema::{
    default_widgets, BarConfig, ControlCenterConfig, PopupConfig, Position, ShellConfig,
};
pub use watcher::ConfigWatcher;

use bar_core::{BarError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ShellConfig::default()` if
/// the file doesn't exist so layout always has sensible inputs.
pub fn load(path: impl AsRef<Path>) -> Result<ShellConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ShellConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a config document from a TOML string.
pub fn parse(raw: &str) -> Result<ShellConfig> {
    toml::from_str(raw).map_err(|e| BarError::Config(format!("TOML parse error: {e}")))
}

/// Write `config` to `path` as TOML, creating parent directories as needed.
///
/// The document goes to a temporary file next to `path` first and is then
/// renamed over it, so readers never see a half-written config.
pub fn save(path: impl AsRef<Path>, config: &ShellConfig) -> Result<()> {
    let path = path.as_ref();
    let raw = toml::to_string_pretty(config)
        .map_err(|e| BarError::Config(format!("TOML serialize error: {e}")))?;

    let dir = config_dir(path);
    std::fs::create_dir_all(dir)?;
    let tmp_file = tempfile::NamedTempFile::new_in(dir)?;
    std::fs::write(tmp_file.path(), raw)?;
    tmp_file.persist(path).map_err(|err| err.error)?;

    tracing::debug!("Wrote config to '{}'", path.display());
    Ok(())
}

/// Directory holding `path`; `.` for a bare file name.
pub(crate) fn config_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("bar").join("bar.toml")
}
