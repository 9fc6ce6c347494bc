use crate::error::BarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A point in screen coordinates (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair, used for requested popup sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width:  f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in screen coordinates.
///
/// Used for bar footprints, trigger widget bounds and popup placements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// `true` when `other` lies entirely inside `self` (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Parses `"x,y,width,height"`.
impl FromStr for Rect {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_numbers(s)?.as_slice() {
            &[x, y, width, height] => Ok(Self { x, y, width, height }),
            other => Err(BarError::Geometry(format!(
                "expected 4 values `x,y,width,height`, got {}",
                other.len()
            ))),
        }
    }
}

/// One of the three named zones along a bar's long axis.
///
/// Horizontal bars use `Left`/`Center`/`Right`; vertical bars use
/// `Top`/`Middle`/`Bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen description as reported by the host compositor/toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenDescriptor {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl ScreenDescriptor {
    pub const fn new(x: f64, y: f64, width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self { x, y, width, height, device_pixel_ratio }
    }
}

/// Parses `"x,y,width,height"` or `"x,y,width,height,dpr"` (dpr defaults to 1).
impl FromStr for ScreenDescriptor {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_numbers(s)?.as_slice() {
            &[x, y, width, height] => Ok(Self::new(x, y, width, height, 1.0)),
            &[x, y, width, height, dpr] => Ok(Self::new(x, y, width, height, dpr)),
            other => Err(BarError::Geometry(format!(
                "expected `x,y,width,height[,dpr]`, got {} values",
                other.len()
            ))),
        }
    }
}

/// Parses `"width,height"` or `"widthxheight"`.
impl FromStr for Size {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_numbers(&s.replace('x', ","))?.as_slice() {
            &[width, height] => Ok(Self { width, height }),
            other => Err(BarError::Geometry(format!(
                "expected `WIDTHxHEIGHT`, got {} values",
                other.len()
            ))),
        }
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, BarError> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| BarError::Geometry(format!("'{}': {e}", part.trim())))
        })
        .collect()
}
