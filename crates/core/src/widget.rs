use serde::{Deserialize, Deserializer, Serialize};

/// Widget ids that always occupy a whole control-center row.
pub const FULL_ROW_IDS: &[&str] = &["volumeMixer", "media"];

/// Widget ids whose size toggles between half and full only.
pub const HALF_OR_FULL_IDS: &[&str] = &["wifi", "bluetooth", "audioOutput", "audioInput"];

/// Stored width used when a descriptor has none (or `0`).
pub const DEFAULT_WIDTH: u8 = 50;

/// One entry of the control-center widget list.
///
/// `width` is a sizing class on a 0–100 scale, not pixels; see [`WidthClass`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Widget type identifier, e.g. `"wifi"` or `"volumeMixer"`.
    pub id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Stored values outside 0–100 are clamped on load.
    #[serde(default = "default_width", deserialize_with = "clamped_width")]
    pub width: u8,
}

fn default_enabled() -> bool {
    true
}

fn default_width() -> u8 {
    DEFAULT_WIDTH
}

fn clamped_width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    // Lossless: the value is clamped into 0..=100 first.
    Ok(raw.clamp(0, 100) as u8)
}

impl WidgetDescriptor {
    pub fn new(id: impl Into<String>, width: u8) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            width,
        }
    }

    /// `true` for widget kinds that always get a row to themselves.
    #[must_use]
    pub fn is_full_row(&self) -> bool {
        is_full_row_id(&self.id)
    }

    /// Width after normalization: full-row kinds are always 100, an unset
    /// (zero) width reads as [`DEFAULT_WIDTH`].
    #[must_use]
    pub fn effective_width(&self) -> u8 {
        if self.is_full_row() {
            100
        } else if self.width == 0 {
            DEFAULT_WIDTH
        } else {
            self.width
        }
    }

    #[must_use]
    pub fn width_class(&self) -> WidthClass {
        WidthClass::from_width(self.effective_width())
    }
}

#[must_use]
pub fn is_full_row_id(id: &str) -> bool {
    FULL_ROW_IDS.contains(&id)
}

/// Container-relative sizing tier derived from a stored 0–100 width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthClass {
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl WidthClass {
    #[must_use]
    pub fn from_width(width: u8) -> Self {
        match width {
            0..=25 => Self::Quarter,
            26..=50 => Self::Half,
            51..=75 => Self::ThreeQuarter,
            _ => Self::Full,
        }
    }

    /// Unpadded pixel width of this class in a container of `base` pixels
    /// whose items are separated by `spacing`.
    #[must_use]
    pub fn pixel_width(self, base: f64, spacing: f64) -> f64 {
        match self {
            Self::Quarter => (base - spacing * 3.0) / 4.0,
            Self::Half => (base - spacing) / 2.0,
            Self::ThreeQuarter => (base - spacing * 2.0) * 0.75,
            Self::Full => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_boundaries() {
        assert_eq!(WidthClass::from_width(25), WidthClass::Quarter);
        assert_eq!(WidthClass::from_width(26), WidthClass::Half);
        assert_eq!(WidthClass::from_width(50), WidthClass::Half);
        assert_eq!(WidthClass::from_width(75), WidthClass::ThreeQuarter);
        assert_eq!(WidthClass::from_width(76), WidthClass::Full);
        assert_eq!(WidthClass::from_width(100), WidthClass::Full);
    }

    #[test]
    fn full_row_kinds_normalize_to_full() {
        let mixer = WidgetDescriptor::new("volumeMixer", 25);
        assert_eq!(mixer.effective_width(), 100);
        assert_eq!(mixer.width_class(), WidthClass::Full);
        assert!(WidgetDescriptor::new("media", 50).is_full_row());
    }

    #[test]
    fn zero_width_reads_as_half() {
        assert_eq!(WidgetDescriptor::new("wifi", 0).width_class(), WidthClass::Half);
    }

    #[test]
    fn out_of_range_widths_clamp_on_load() {
        #[derive(Deserialize)]
        struct List {
            widgets: Vec<WidgetDescriptor>,
        }

        let list: List = serde_json::from_str(
            r#"{"widgets": [{"id": "wifi", "width": 300}, {"id": "darkMode", "width": -1}, {"id": "performance"}]}"#,
        )
        .unwrap();

        assert_eq!(list.widgets[0].width, 100);
        assert_eq!(list.widgets[0].width_class(), WidthClass::Full);
        assert_eq!(list.widgets[1].width, 0);
        assert_eq!(list.widgets[1].width_class(), WidthClass::Half);
        assert_eq!(list.widgets[2].width, DEFAULT_WIDTH);
    }

    #[test]
    fn quarter_fits_four_per_row() {
        let q = WidthClass::Quarter.pixel_width(400.0, 8.0);
        assert_eq!(q * 4.0 + 8.0 * 3.0, 400.0);
    }
}
