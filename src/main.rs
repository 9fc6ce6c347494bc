//! bar-layout: control-center row packing and popup placement for the bar.
//!
//! Run with:  `RUST_LOG=debug bar-layout place --trigger 900,1032,80,48`

use anyhow::{Context, Result};
use bar_config::{default_path, load as load_config, Position, ShellConfig};
use bar_core::{Rect, ScreenDescriptor, Size};
use bar_geometry::{place, widget_section, PopupRequest};
use bar_widgets::{ConfigStore, RowPacker, WidgetStore};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bar-layout", version)]
#[command(about = "Control-center row packing and popup placement", long_about = None)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/bar/bar.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack the configured widget list into rows
    Rows {
        /// Container width in pixels
        #[arg(long)]
        width: f64,
        /// Gap between tiles (default: control_center.spacing)
        #[arg(long)]
        spacing: Option<f64>,
        /// Expanded widget as `ID:INDEX`
        #[arg(long, value_parser = parse_expanded)]
        expanded: Option<(String, usize)>,
    },
    /// Compute where a popup opened from a bar widget is drawn
    Place {
        /// Trigger widget bounds `x,y,width,height`
        #[arg(long)]
        trigger: Option<Rect>,
        /// Screen `x,y,width,height[,dpr]`; omitted means fallback metrics
        #[arg(long)]
        screen: Option<ScreenDescriptor>,
        /// Override the configured bar position
        #[arg(long)]
        position: Option<Position>,
        /// Override the configured popup size, `WIDTHxHEIGHT`
        #[arg(long)]
        size: Option<Size>,
    },
    /// Report which bar section a widget is in
    Section {
        /// Widget bounds `x,y,width,height`
        #[arg(long)]
        widget: Rect,
        #[arg(long)]
        screen: Option<ScreenDescriptor>,
        #[arg(long)]
        position: Option<Position>,
    },
    /// Edit the configured widget list
    Widgets {
        #[command(subcommand)]
        action: WidgetAction,
    },
    /// Re-pack rows every time the config file changes
    Watch {
        #[arg(long)]
        width: f64,
    },
}

#[derive(Subcommand)]
enum WidgetAction {
    /// Print the widget list
    List,
    /// Append a widget
    Add { id: String },
    /// Remove the widget at INDEX
    Remove { index: usize },
    /// Step the widget at INDEX to its next size
    ToggleSize { index: usize },
    /// Enable or disable the widget at INDEX
    ToggleEnabled { index: usize },
    /// Move a widget from one position to another
    Move { from: usize, to: usize },
    /// Restore the stock widget list
    Reset,
    /// Remove every widget
    Clear,
    /// Force full-row widgets back to full width
    FixWidths,
}

fn parse_expanded(s: &str) -> Result<(String, usize), String> {
    let (id, index) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected ID:INDEX, got '{s}'"))?;
    let index = index
        .parse()
        .map_err(|e| format!("bad index '{index}': {e}"))?;
    Ok((id.to_string(), index))
}

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(default_path);

    match cli.command {
        Command::Rows { width, spacing, expanded } => {
            let config = load_config(&path)?;
            let spacing = spacing.unwrap_or(config.control_center.spacing);
            let selector = expanded.as_ref().map(|(id, index)| (id.as_str(), *index));
            let layout = RowPacker::new(width, spacing).pack(&config.control_center.widgets, selector);
            print_json(&layout)
        }
        Command::Place { trigger, screen, position, size } => {
            let config = load_config(&path)?;
            let mut request =
                PopupRequest::from_config(screen, &config.bar, &config.popup, trigger);
            if let Some(position) = position {
                request.bar.position = position;
            }
            if size.is_some() {
                request.popup_size = size;
            }
            print_json(&place(&request))
        }
        Command::Section { widget, screen, position } => {
            let config = load_config(&path)?;
            let position = position.unwrap_or(config.bar.position);
            print_json(&widget_section(&widget, position, screen.as_ref()))
        }
        Command::Widgets { action } => edit_widgets(&path, action),
        Command::Watch { width } => watch(path, width),
    }
}

fn edit_widgets(path: &Path, action: WidgetAction) -> Result<()> {
    let store = ConfigStore::open(path)?;

    let changed = match action {
        WidgetAction::List => false,
        WidgetAction::Add { id } => store.add_widget(&id)?,
        WidgetAction::Remove { index } => store.remove_widget(index)?,
        WidgetAction::ToggleSize { index } => store.toggle_widget_size(index)?,
        WidgetAction::ToggleEnabled { index } => store.toggle_widget_enabled(index)?,
        WidgetAction::Move { from, to } => store.move_widget(from, to)?,
        WidgetAction::Reset => store.reset_to_default()?,
        WidgetAction::Clear => store.clear()?,
        WidgetAction::FixWidths => store.ensure_full_row_width()?,
    };

    if changed {
        tracing::info!("Saved widget list to '{}'", store.path().display());
    }
    print_json(&*store.get())
}

fn watch(path: PathBuf, width: f64) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot start runtime")?;

    runtime.block_on(async move {
        let initial = load_config(&path)?;
        print_rows(&initial, width)?;

        let (_watcher, mut rx) = bar_config::ConfigWatcher::spawn(&path);
        while let Some(reloaded) = rx.recv().await {
            match reloaded {
                Ok(config) => print_rows(&config, width)?,
                Err(e) => tracing::warn!("Keeping previous layout: {e}"),
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn print_rows(config: &ShellConfig, width: f64) -> Result<()> {
    let packer = RowPacker::new(width, config.control_center.spacing);
    print_json(&packer.pack(&config.control_center.widgets, None))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
