use crate::ops;
use bar_config::{default_widgets, ShellConfig};
use bar_core::{BarError, Result, WidgetDescriptor};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};
use tracing::{debug, info};

/// Holder of the ordered control-center widget list.
///
/// Readers get an immutable snapshot; writers replace the whole list (last
/// writer wins).  The provided methods read-modify-write through
/// [`ops`] and return whether anything was written.
pub trait WidgetStore {
    fn get(&self) -> Arc<[WidgetDescriptor]>;

    fn set(&self, widgets: Vec<WidgetDescriptor>) -> Result<()>;

    fn add_widget(&self, id: &str) -> Result<bool> {
        self.set(ops::add(&self.get(), id))?;
        Ok(true)
    }

    fn remove_widget(&self, index: usize) -> Result<bool> {
        self.apply(|w| ops::remove(w, index))
    }

    fn toggle_widget_size(&self, index: usize) -> Result<bool> {
        self.apply(|w| ops::toggle_size(w, index))
    }

    fn toggle_widget_enabled(&self, index: usize) -> Result<bool> {
        self.apply(|w| ops::toggle_enabled(w, index))
    }

    fn move_widget(&self, from: usize, to: usize) -> Result<bool> {
        self.apply(|w| ops::move_widget(w, from, to))
    }

    /// Replace the list with a caller-supplied ordering.
    fn reorder(&self, new_order: Vec<WidgetDescriptor>) -> Result<bool> {
        self.set(new_order)?;
        Ok(true)
    }

    fn reset_to_default(&self) -> Result<bool> {
        self.set(default_widgets())?;
        Ok(true)
    }

    fn clear(&self) -> Result<bool> {
        self.set(Vec::new())?;
        Ok(true)
    }

    fn ensure_full_row_width(&self) -> Result<bool> {
        self.apply(ops::ensure_full_row_width)
    }

    /// Run a transform on the current snapshot and write back its result.
    fn apply<F>(&self, transform: F) -> Result<bool>
    where
        F: FnOnce(&[WidgetDescriptor]) -> Option<Vec<WidgetDescriptor>>,
    {
        let current = self.get();
        match transform(&current[..]) {
            Some(next) => {
                self.set(next)?;
                Ok(true)
            }
            None => {
                debug!("Widget list transform was a no-op");
                Ok(false)
            }
        }
    }
}

fn poisoned<T>(_: T) -> BarError {
    BarError::Store("widget list lock poisoned".into())
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Store kept entirely in memory.
#[derive(Debug)]
pub struct MemoryStore {
    widgets: RwLock<Arc<[WidgetDescriptor]>>,
}

impl MemoryStore {
    pub fn new(widgets: Vec<WidgetDescriptor>) -> Self {
        Self {
            widgets: RwLock::new(widgets.into()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(default_widgets())
    }
}

impl WidgetStore for MemoryStore {
    fn get(&self) -> Arc<[WidgetDescriptor]> {
        match self.widgets.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn set(&self, widgets: Vec<WidgetDescriptor>) -> Result<()> {
        *self.widgets.write().map_err(poisoned)? = widgets.into();
        Ok(())
    }
}

// ── Config-file store ─────────────────────────────────────────────────────────

/// Store backed by the `[control_center]` section of a config file.
///
/// Every `set` rewrites the file; the rest of the config is preserved.
#[derive(Debug)]
pub struct ConfigStore {
    path:   PathBuf,
    config: RwLock<ShellConfig>,
}

impl ConfigStore {
    /// Load `path` (defaults if it does not exist yet).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = bar_config::load(&path)?;
        info!(
            "Widget store at '{}' ({} widgets)",
            path.display(),
            config.control_center.widgets.len()
        );
        Ok(Self {
            path,
            config: RwLock::new(config),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the full config as last written.
    pub fn config(&self) -> Result<ShellConfig> {
        Ok(self.config.read().map_err(poisoned)?.clone())
    }
}

impl WidgetStore for ConfigStore {
    fn get(&self) -> Arc<[WidgetDescriptor]> {
        let widgets = match self.config.read() {
            Ok(guard) => guard.control_center.widgets.clone(),
            Err(poisoned) => poisoned.into_inner().control_center.widgets.clone(),
        };
        widgets.into()
    }

    fn set(&self, widgets: Vec<WidgetDescriptor>) -> Result<()> {
        let mut config = self.config.write().map_err(poisoned)?;
        let mut next = config.clone();
        next.control_center.widgets = widgets;
        bar_config::save(&self.path, &next)?;
        *config = next;
        Ok(())
    }
}
