//! Dataset table and chart geometry.
//!
//! The dataset table ships as `datasets.json` next to `Cargo.toml`; adding an
//! entry there is enough to expose a new dataset in the selector.

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DATASETS_JSON: &str = include_str!("../datasets.json");

/// ColorBrewer Set3 followed by named CSS colors.
pub const DEFAULT_PALETTE: [&str; 23] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f", "gold", "yellow", "pink", "slateblue", "orange",
    "brown", "blue", "green", "black", "grey", "darkgreen",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub source_url: String,
}

/// Ordered, non-empty set of datasets. The first entry is the fallback for
/// unknown selection keys.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetTable {
    entries: Vec<DatasetDescriptor>,
}

impl DatasetTable {
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<DatasetDescriptor> =
            serde_json::from_str(raw).map_err(|e| ChartError::Config(e.to_string()))?;
        if entries.is_empty() {
            return Err(ChartError::Config("no datasets defined".into()));
        }
        let mut seen = HashSet::new();
        for d in &entries {
            if !seen.insert(d.key.as_str()) {
                return Err(ChartError::Config(format!("duplicate dataset key \"{}\"", d.key)));
            }
            if d.source_url.trim().is_empty() {
                return Err(ChartError::Config(format!("dataset \"{}\" has no source_url", d.key)));
            }
        }
        Ok(Self { entries })
    }

    /// Table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DATASETS_JSON)
    }

    pub fn entries(&self) -> &[DatasetDescriptor] {
        &self.entries
    }

    pub fn default_entry(&self) -> &DatasetDescriptor {
        &self.entries[0]
    }

    pub fn select(&self, key: &str) -> &DatasetDescriptor {
        self.entries
            .iter()
            .find(|d| d.key == key)
            .unwrap_or_else(|| self.default_entry())
    }
}

/// What to do when a dataset has more categories than the palette has colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaletteOverflow {
    /// Wrap around the palette and record a warning.
    #[default]
    Cycle,
    /// Refuse to build the chart.
    Fail,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Space reserved at the bottom of the surface for the legend.
    pub legend_margin: f64,
    pub palette: Vec<String>,
    pub overflow: PaletteOverflow,
    pub label_inset: f64,
    /// `dy` of the first label line, in rem.
    pub label_first_dy_rem: f64,
    /// `dy` of each following label line, in rem.
    pub label_line_rem: f64,
    pub legend_offset: f64,
    pub legend_swatch: f64,
    pub legend_spacing: f64,
    pub legend_row_pitch: f64,
    pub legend_text_y: f64,
    pub legend_line_pitch: f64,
    pub tooltip_offset_x: f64,
    pub tooltip_fade_ms: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            legend_margin: 200.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            overflow: PaletteOverflow::Cycle,
            label_inset: 5.0,
            label_first_dy_rem: 0.7,
            label_line_rem: 0.6,
            legend_offset: 50.0,
            legend_swatch: 20.0,
            legend_spacing: 30.0,
            legend_row_pitch: 60.0,
            legend_text_y: 20.0,
            legend_line_pitch: 10.0,
            tooltip_offset_x: 20.0,
            tooltip_fade_ms: 100,
        }
    }
}

impl ChartConfig {
    /// Height of the tiled area (surface minus legend margin).
    pub fn plot_height(&self) -> f64 {
        (self.height - self.legend_margin).max(0.0)
    }
}
