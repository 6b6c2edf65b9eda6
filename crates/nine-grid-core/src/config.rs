//! Grid configuration.
//!
//! [`GridConfig`] carries the three host-facing knobs of a grid: the number of
//! columns, the cap on displayed items and the spacing between cells. Every
//! constructor and setter validates its input, so a `GridConfig` in hand is
//! always usable for layout math.
//!
//! Configurations can be read from TOML. Keys mirror the grid's styling
//! attributes and any of them may be omitted:
//!
//! ```toml
//! span_count = 3
//! max_count = 9
//! # either a pixel margin...
//! item_margin = 2.0
//! # ...or a density-independent one, converted with the scale factor
//! item_margin_dp = 1.0
//! scale_factor = 2.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::logging::targets;

/// Default number of columns.
pub const DEFAULT_SPAN_COUNT: usize = 3;

/// Default cap on displayed items.
pub const DEFAULT_MAX_COUNT: usize = 9;

/// Default spacing between cells, in density-independent units.
pub const DEFAULT_ITEM_MARGIN_DP: f32 = 1.0;

/// Convert a density-independent length to whole pixels.
///
/// The result is truncated toward zero, matching how platform toolkits turn a
/// dimension attribute into an integer pixel offset.
pub fn dp_to_px(dp: f32, scale_factor: f32) -> f32 {
    (dp * scale_factor).trunc()
}

/// Validated grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridConfigFile", into = "GridConfigFile")]
pub struct GridConfig {
    span_count: usize,
    max_count: usize,
    item_margin: f32,
}

impl GridConfig {
    /// Create a configuration, validating every field.
    pub fn new(span_count: usize, max_count: usize, item_margin: f32) -> GridResult<Self> {
        let mut config = Self::default();
        config.set_span_count(span_count)?;
        config.set_max_count(max_count)?;
        config.set_item_margin(item_margin)?;
        Ok(config)
    }

    /// Defaults with a 1 dp item margin at the given display scale.
    pub fn for_scale_factor(scale_factor: f32) -> GridResult<Self> {
        validate_scale_factor(scale_factor)?;
        Self::new(
            DEFAULT_SPAN_COUNT,
            DEFAULT_MAX_COUNT,
            dp_to_px(DEFAULT_ITEM_MARGIN_DP, scale_factor),
        )
    }

    /// Number of columns per row.
    #[inline]
    pub fn span_count(&self) -> usize {
        self.span_count
    }

    /// Set the number of columns per row.
    pub fn set_span_count(&mut self, span_count: usize) -> GridResult<()> {
        if span_count == 0 {
            return Err(GridError::InvalidSpanCount(span_count));
        }
        self.span_count = span_count;
        Ok(())
    }

    /// Cap on displayed items.
    #[inline]
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Set the cap on displayed items.
    pub fn set_max_count(&mut self, max_count: usize) -> GridResult<()> {
        if max_count == 0 {
            return Err(GridError::InvalidMaxCount(max_count));
        }
        self.max_count = max_count;
        Ok(())
    }

    /// Spacing between adjacent cells, in pixels.
    #[inline]
    pub fn item_margin(&self) -> f32 {
        self.item_margin
    }

    /// Set the spacing between adjacent cells, in pixels.
    pub fn set_item_margin(&mut self, item_margin: f32) -> GridResult<()> {
        if !item_margin.is_finite() || item_margin < 0.0 {
            return Err(GridError::InvalidItemMargin(item_margin));
        }
        self.item_margin = item_margin;
        Ok(())
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> GridResult<Self> {
        let file: GridConfigFile = toml::from_str(source)?;
        Self::try_from(file)
    }

    /// Read a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            span_count = config.span_count,
            max_count = config.max_count,
            item_margin = config.item_margin,
            "loaded grid configuration"
        );
        Ok(config)
    }

    /// Serialize to a TOML document (margin in pixels).
    pub fn to_toml_string(&self) -> GridResult<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            span_count: DEFAULT_SPAN_COUNT,
            max_count: DEFAULT_MAX_COUNT,
            item_margin: dp_to_px(DEFAULT_ITEM_MARGIN_DP, 1.0),
        }
    }
}

fn validate_scale_factor(scale_factor: f32) -> GridResult<()> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(GridError::InvalidScaleFactor(scale_factor));
    }
    Ok(())
}

/// On-disk shape of a [`GridConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GridConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    span_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_margin_dp: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale_factor: Option<f32>,
}

impl TryFrom<GridConfigFile> for GridConfig {
    type Error = GridError;

    fn try_from(file: GridConfigFile) -> GridResult<Self> {
        let scale_factor = file.scale_factor.unwrap_or(1.0);
        validate_scale_factor(scale_factor)?;

        // A pixel margin wins over a dp margin when both are present.
        let item_margin = match (file.item_margin, file.item_margin_dp) {
            (Some(px), _) => px,
            (None, Some(dp)) => dp_to_px(dp, scale_factor),
            (None, None) => dp_to_px(DEFAULT_ITEM_MARGIN_DP, scale_factor),
        };

        Self::new(
            file.span_count.unwrap_or(DEFAULT_SPAN_COUNT),
            file.max_count.unwrap_or(DEFAULT_MAX_COUNT),
            item_margin,
        )
    }
}

impl From<GridConfig> for GridConfigFile {
    fn from(config: GridConfig) -> Self {
        Self {
            span_count: Some(config.span_count),
            max_count: Some(config.max_count),
            item_margin: Some(config.item_margin),
            item_margin_dp: None,
            scale_factor: None,
        }
    }
}
