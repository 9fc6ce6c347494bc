use bar_core::{BarError, WidgetDescriptor};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Root configuration structure parsed from `bar.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Bar placement and footprint.
    pub bar: BarConfig,
    /// Popup sizing used by the placer.
    pub popup: PopupConfig,
    /// Control-center grid settings and its widget list.
    pub control_center: ControlCenterConfig,
}

/// Bar settings consumed by the geometry code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Screen edge the bar is attached to.
    pub position: Position,
    /// Bar thickness in logical pixels.
    pub thickness: f64,
    /// Extra space between the bar and windows/popups.
    pub spacing: f64,
    /// Gap below a bottom bar; ignored for other positions.
    pub bottom_gap: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            position:   Position::Bottom,
            thickness:  48.0,
            spacing:    4.0,
            bottom_gap: 0.0,
        }
    }
}

/// Bar position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Position {
    /// `true` for bars attached to the left or right edge.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(BarError::Config(format!(
                "unknown bar position '{other}' (expected top, bottom, left or right)"
            ))),
        }
    }
}

/// Requested popup geometry before adaptive scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub width: f64,
    pub height: f64,
    /// Distance between the bar and the popup, in logical pixels.
    pub gap: f64,
    /// User multiplier applied on top of the screen-derived scale.
    pub user_scale: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width:      470.0,
            height:     600.0,
            gap:        8.0,
            user_scale: 1.0,
        }
    }
}

/// Control-center grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlCenterConfig {
    /// Gap between tiles in a row (pixels).
    pub spacing: f64,
    /// Ordered widget list; the widget store reads and writes this.
    pub widgets: Vec<WidgetDescriptor>,
}

impl Default for ControlCenterConfig {
    fn default() -> Self {
        Self {
            spacing: 12.0,
            widgets: default_widgets(),
        }
    }
}

/// The stock control-center layout.
pub fn default_widgets() -> Vec<WidgetDescriptor> {
    vec![
        WidgetDescriptor::new("wifi", 50),
        WidgetDescriptor::new("bluetooth", 50),
        WidgetDescriptor::new("audioOutput", 50),
        WidgetDescriptor::new("audioInput", 50),
        WidgetDescriptor::new("volumeMixer", 100),
        WidgetDescriptor::new("performance", 50),
        WidgetDescriptor::new("darkMode", 50),
    ]
}
