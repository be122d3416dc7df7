//! Immutable view-model for one rendered chart.
//!
//! A `ChartView` is rebuilt from scratch for every dataset load; components
//! only read it.

use crate::color::ColorScale;
use crate::config::{ChartConfig, DatasetDescriptor};
use crate::error::Result;
use crate::labels::{split_label, split_words};
use crate::layout::{Rect, treemap};
use crate::model::{Hierarchy, RawNode};

#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
    pub text: String,
    /// SVG `dy` attribute, e.g. `"0.7rem"`.
    pub dy: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    pub rect: Rect,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub color: String,
    pub label: Vec<LabelLine>,
}

impl TileView {
    pub fn transform(&self) -> String {
        format!("translate({},{})", self.rect.x0, self.rect.y0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub color: String,
    /// Swatch position relative to the legend origin.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub caption: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub width: f64,
    pub height: f64,
    pub tiles: Vec<TileView>,
    pub legend_y: f64,
    pub legend: Vec<LegendEntry>,
    /// Non-fatal problems found while building, meant for the console.
    pub warnings: Vec<String>,
}

pub fn build_chart(descriptor: &DatasetDescriptor, raw: &RawNode, cfg: &ChartConfig) -> Result<ChartView> {
    let hierarchy = Hierarchy::build(raw)?;
    let scale = ColorScale::new(&hierarchy.categories, &cfg.palette, cfg.overflow)?;

    let mut warnings = Vec::new();
    if scale.wrapped {
        warnings.push(format!(
            "{} categories but only {} palette colors; colors repeat",
            scale.len(),
            cfg.palette.len()
        ));
    }

    let tiles = treemap(&hierarchy.root, cfg.width, cfg.plot_height())
        .into_iter()
        .map(|r| TileView {
            color: scale.color_of(&r.category).unwrap_or_default().to_string(),
            label: label_lines(&r.name, cfg),
            rect: r.rect,
            name: r.name,
            category: r.category,
            value: r.value,
        })
        .collect();

    Ok(ChartView {
        key: descriptor.key.clone(),
        title: descriptor.title.clone(),
        subtitle: descriptor.subtitle.clone(),
        width: cfg.width,
        height: cfg.height,
        tiles,
        legend_y: cfg.plot_height() + cfg.legend_offset,
        legend: legend_entries(&scale, cfg),
        warnings,
    })
}

fn label_lines(name: &str, cfg: &ChartConfig) -> Vec<LabelLine> {
    split_label(name)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let rem = if i == 0 { cfg.label_first_dy_rem } else { cfg.label_line_rem };
            LabelLine { text, dy: format!("{rem}rem") }
        })
        .collect()
}

fn legend_entries(scale: &ColorScale, cfg: &ChartConfig) -> Vec<LegendEntry> {
    let pitch = cfg.legend_swatch + cfg.legend_spacing;
    let per_row = if pitch > 0.0 {
        (((cfg.width + cfg.legend_spacing) / pitch).floor() as usize).max(1)
    } else {
        usize::MAX
    };
    scale
        .entries()
        .iter()
        .enumerate()
        .map(|(i, (category, color))| LegendEntry {
            category: category.clone(),
            color: color.clone(),
            x: (i % per_row) as f64 * pitch,
            y: (i / per_row) as f64 * cfg.legend_row_pitch,
            size: cfg.legend_swatch,
            caption: split_words(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatasetTable, PaletteOverflow};
    use crate::error::ChartError;
    use crate::model::tests::{group, leaf};
    use std::collections::HashSet;

    fn movie_input() -> RawNode {
        RawNode::from_json(
            r#"{"name":"root","children":[
                {"name":"Action","children":[{"name":"Film A","category":"Action","value":10}]},
                {"name":"Comedy","children":[{"name":"Film B","category":"Comedy","value":5}]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_movie_scenario() {
        let table = DatasetTable::builtin().unwrap();
        let view = build_chart(table.select("movie"), &movie_input(), &ChartConfig::default()).unwrap();
        assert_eq!(view.title, "Movie Sales");
        assert_eq!(view.tiles.len(), 2);
        let a = view.tiles.iter().find(|t| t.name == "Film A").unwrap();
        let b = view.tiles.iter().find(|t| t.name == "Film B").unwrap();
        let ratio = a.rect.area() / b.rect.area();
        assert!((ratio - 2.0).abs() < 1e-9, "ratio {ratio}");
        assert_eq!(view.legend.len(), 2);
        assert_ne!(view.legend[0].color, view.legend[1].color);
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_tiles_fill_plot_area() {
        let table = DatasetTable::builtin().unwrap();
        let cfg = ChartConfig::default();
        let view = build_chart(table.default_entry(), &movie_input(), &cfg).unwrap();
        let area: f64 = view.tiles.iter().map(|t| t.rect.area()).sum();
        assert!((area - cfg.width * cfg.plot_height()).abs() < 1e-6);
        assert!(view.tiles.iter().all(|t| t.rect.y1 <= cfg.plot_height() + 1e-9));
        assert_eq!(view.legend_y, 550.0);
    }

    #[test]
    fn test_colors_follow_category() {
        let raw = group(
            "root",
            vec![
                group("Wii", vec![leaf("Wii Sports", "Wii", 82.0), leaf("Wii Fit", "Wii", 22.0)]),
                group("DS", vec![leaf("New Super Mario Bros.", "DS", 30.0), leaf("Nintendogs", "DS", 24.0)]),
                group("GB", vec![leaf("Pokemon Red", "GB", 31.0)]),
            ],
        );
        let table = DatasetTable::builtin().unwrap();
        let view = build_chart(table.default_entry(), &raw, &ChartConfig::default()).unwrap();
        for t in &view.tiles {
            let same: HashSet<_> = view
                .tiles
                .iter()
                .filter(|o| o.category == t.category)
                .map(|o| o.color.as_str())
                .collect();
            assert_eq!(same.len(), 1);
        }
        let distinct: HashSet<_> = view.legend.iter().map(|l| l.color.as_str()).collect();
        assert_eq!(distinct.len(), 3);
        assert_eq!(view.legend[0].category, "Wii");
        assert_eq!(view.legend[0].color, "#8dd3c7");
    }

    #[test]
    fn test_labels_and_legend_layout() {
        let raw = group(
            "root",
            vec![group("Product Design", vec![leaf("StrangerThings", "Product Design", 1.0)])],
        );
        let table = DatasetTable::builtin().unwrap();
        let view = build_chart(table.default_entry(), &raw, &ChartConfig::default()).unwrap();
        let tile = &view.tiles[0];
        let texts: Vec<_> = tile.label.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["Stranger", "Things"]);
        assert_eq!(tile.label[0].dy, "0.7rem");
        assert_eq!(tile.label[1].dy, "0.6rem");
        assert_eq!(tile.transform(), "translate(0,0)");
        assert_eq!(view.legend[0].caption, ["Product", "Design"]);
    }

    #[test]
    fn test_legend_wraps_past_chart_width() {
        let cats: Vec<RawNode> = (0..23)
            .map(|i| {
                let c = format!("cat{i}");
                group(&c, vec![leaf(&format!("item{i}"), &c, 1.0)])
            })
            .collect();
        let table = DatasetTable::builtin().unwrap();
        let view = build_chart(table.default_entry(), &group("root", cats), &ChartConfig::default()).unwrap();
        assert_eq!(view.legend.len(), 23);
        assert_eq!((view.legend[19].x, view.legend[19].y), (950.0, 0.0));
        assert_eq!((view.legend[20].x, view.legend[20].y), (0.0, 60.0));
    }

    #[test]
    fn test_palette_overflow_policy() {
        let cats: Vec<RawNode> = (0..3)
            .map(|i| {
                let c = format!("cat{i}");
                group(&c, vec![leaf("x", &c, 1.0)])
            })
            .collect();
        let raw = group("root", cats);
        let table = DatasetTable::builtin().unwrap();
        let mut cfg = ChartConfig {
            palette: vec!["red".into(), "blue".into()],
            ..ChartConfig::default()
        };
        let view = build_chart(table.default_entry(), &raw, &cfg).unwrap();
        assert_eq!(view.warnings.len(), 1);

        cfg.overflow = PaletteOverflow::Fail;
        assert!(matches!(
            build_chart(table.default_entry(), &raw, &cfg),
            Err(ChartError::PaletteExhausted { .. })
        ));
    }
}
