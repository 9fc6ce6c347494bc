use crate::{config_dir, load, ShellConfig};
use bar_core::Result;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches a config file and re-parses it on every write.
///
/// The containing directory is watched rather than the file itself, so a
/// save that renames a new file over the old one (as [`crate::save`] and
/// most editors do) is still picked up.  Each detected change yields the
/// freshly loaded [`ShellConfig`] (or the load error).
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_, mut rx) = bar_config::ConfigWatcher::spawn("/home/user/.config/bar/bar.toml");
/// while let Some(Ok(config)) = rx.recv().await {
///     println!("{} widgets", config.control_center.widgets.len());
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path` on the current Tokio runtime.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<Result<ShellConfig>>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<Result<ShellConfig>>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    let dir = config_dir(&path);
    if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    let file_name = path.file_name().map(ToOwned::to_owned);
    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) => {
                use notify::EventKind::*;
                if !matches!(e.kind, Modify(_) | Create(_)) {
                    continue;
                }
                if !e.paths.iter().any(|p| p.file_name() == file_name.as_deref()) {
                    continue;
                }
                let reloaded = load(&path);
                if let Err(err) = &reloaded {
                    warn!("Config reload failed: {err}");
                }
                if tx.send(reloaded).await.is_err() {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
