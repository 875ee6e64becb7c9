//! Mapping chart colours onto terminal colours.
//!
//! Chart colours are usually translucent; the terminal has no alpha, so
//! each colour is flattened onto the dashboard background first.

use film_stats_core::chart::ChartKind;
use film_stats_core::model::ChartDataset;
use film_stats_core::{ChartDefaults, Rgba};
use ratatui::style::Color;

/// Dashboard background the colours are blended over.
pub const BACKGROUND: Rgba = Rgba::rgb(0x11, 0x18, 0x27);

pub fn to_color(color: Rgba) -> Color {
    let flat = color.blend_over(BACKGROUND);
    Color::Rgb(flat.r, flat.g, flat.b)
}

pub fn point_color(
    defaults: &ChartDefaults,
    kind: ChartKind,
    dataset: &ChartDataset,
    dataset_index: usize,
    point_index: usize,
) -> Color {
    to_color(defaults.point_color(kind, dataset, dataset_index, point_index))
}

pub fn text_color(defaults: &ChartDefaults) -> Color {
    to_color(defaults.text_color)
}
