//! The chart capability.
//!
//! A deliberately narrow surface: create, update, destroy and look up by
//! container. Each drawing surface (container id) carries at most one chart.
//! Front ends paint [`ChartInstance`]s; this module only tracks them.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ChartPayload;
use crate::style::{ChartDefaults, LegendPosition, StyleError, StyleOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    /// Pie-like charts have no axes.
    pub const fn is_radial(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisOptions {
    pub title: Option<String>,
    pub show_ticks: bool,
    pub begin_at_zero: bool,
    /// Ticks step by whole numbers (film counts).
    pub integer_ticks: bool,
}

impl AxisOptions {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            show_ticks: true,
            ..Self::default()
        }
    }

    pub fn counting(title: &str) -> Self {
        Self {
            begin_at_zero: true,
            integer_ticks: true,
            ..Self::titled(title)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
}

impl LegendOptions {
    pub const fn hidden() -> Self {
        Self {
            display: false,
            position: LegendPosition::Top,
        }
    }

    pub const fn at(position: LegendPosition) -> Self {
        Self {
            display: true,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub x_axis: Option<AxisOptions>,
    pub y_axis: Option<AxisOptions>,
    pub legend: LegendOptions,
    pub animate: bool,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Suffix for tooltips and value labels, e.g. `films`.
    pub value_unit: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_axis: None,
            y_axis: None,
            legend: LegendOptions::hidden(),
            animate: true,
            responsive: true,
            maintain_aspect_ratio: false,
            value_unit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub data: ChartPayload,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Clone with fresh data. Styling and labels the new datasets leave out
    /// are carried over from the dataset at the same index.
    pub fn with_data(&self, mut data: ChartPayload) -> Self {
        for (index, dataset) in data.datasets.iter_mut().enumerate() {
            let Some(previous) = self.data.datasets.get(index) else {
                continue;
            };
            if dataset.style.is_empty() {
                dataset.style = previous.style.clone();
            }
            if dataset.label.is_empty() {
                dataset.label.clone_from(&previous.label);
            }
        }

        Self {
            kind: self.kind,
            data,
            options: self.options.clone(),
        }
    }

    /// Options for the fullscreen view: ticks everywhere, no animation,
    /// fill the surface. Radial charts drop their axes and get a top legend.
    pub fn enlarged(mut self) -> Self {
        let options = &mut self.options;
        options.animate = false;
        options.responsive = true;
        options.maintain_aspect_ratio = false;

        if self.kind.is_radial() {
            options.x_axis = None;
            options.y_axis = None;
            options.legend = LegendOptions::at(LegendPosition::Top);
        } else {
            for axis in [&mut options.x_axis, &mut options.y_axis] {
                axis.get_or_insert_with(AxisOptions::default).show_ticks = true;
            }
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartId(u64);

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: ChartId,
    pub container: String,
    pub config: ChartConfig,
}

impl ChartInstance {
    pub fn dataset_count(&self) -> usize {
        self.config.data.datasets.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Canvas '{container}' is already in use by chart {existing}")]
    SurfaceInUse { container: String, existing: ChartId },

    #[error("No chart with id {0}")]
    UnknownChart(ChartId),
}

#[derive(Debug, Default)]
pub struct ChartEngine {
    defaults: ChartDefaults,
    charts: BTreeMap<ChartId, ChartInstance>,
    by_container: HashMap<String, ChartId>,
    next_id: u64,
}

impl ChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn defaults(&self) -> &ChartDefaults {
        &self.defaults
    }

    /// Charts ever created on this engine, destroyed ones included.
    pub const fn created_count(&self) -> u64 {
        self.next_id
    }

    pub fn live_count(&self) -> usize {
        self.charts.len()
    }

    /// Merge a theme into the global defaults. Only allowed while no chart
    /// has been created yet.
    pub fn apply_defaults(&mut self, overrides: &StyleOverrides) -> Result<(), StyleError> {
        if self.next_id > 0 {
            return Err(StyleError::ChartsAlreadyCreated {
                created: self.next_id,
            });
        }
        self.defaults.apply(overrides);
        log::debug!("chart defaults updated");
        Ok(())
    }

    pub fn create(&mut self, container: &str, config: ChartConfig) -> Result<ChartId, ChartError> {
        if let Some(existing) = self.by_container.get(container) {
            return Err(ChartError::SurfaceInUse {
                container: container.to_string(),
                existing: *existing,
            });
        }

        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.by_container.insert(container.to_string(), id);
        self.charts.insert(
            id,
            ChartInstance {
                id,
                container: container.to_string(),
                config,
            },
        );
        Ok(id)
    }

    pub fn update(&mut self, id: ChartId, data: ChartPayload) -> Result<(), ChartError> {
        let chart = self.charts.get_mut(&id).ok_or(ChartError::UnknownChart(id))?;
        chart.config = chart.config.with_data(data);
        Ok(())
    }

    /// Returns the destroyed instance; destroying twice is a no-op.
    pub fn destroy(&mut self, id: ChartId) -> Option<ChartInstance> {
        let chart = self.charts.remove(&id)?;
        self.by_container.remove(&chart.container);
        Some(chart)
    }

    pub fn get(&self, id: ChartId) -> Option<&ChartInstance> {
        self.charts.get(&id)
    }

    pub fn get_by_container(&self, container: &str) -> Option<&ChartInstance> {
        self.by_container
            .get(container)
            .and_then(|id| self.charts.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartDataset, ColorSpec, DatasetStyle};

    fn payload(labels: &[&str], data: &[f64]) -> ChartPayload {
        ChartPayload {
            labels: labels.iter().map(ToString::to_string).collect(),
            datasets: vec![ChartDataset {
                label: "Films".to_string(),
                data: data.to_vec(),
                style: DatasetStyle::default(),
            }],
        }
    }

    fn bar(data: ChartPayload) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            data,
            options: ChartOptions {
                y_axis: Some(AxisOptions {
                    show_ticks: false,
                    ..AxisOptions::counting("Films")
                }),
                ..ChartOptions::default()
            },
        }
    }

    #[test]
    fn one_chart_per_surface() -> Result<(), ChartError> {
        let mut engine = ChartEngine::new();
        let first = engine.create("TopActorsChart", bar(payload(&["A"], &[1.0])))?;

        let second = engine.create("TopActorsChart", bar(payload(&["B"], &[2.0])));
        assert_eq!(
            second,
            Err(ChartError::SurfaceInUse {
                container: "TopActorsChart".to_string(),
                existing: first
            })
        );

        assert!(engine.destroy(first).is_some());
        assert!(engine.destroy(first).is_none());
        assert!(engine.get_by_container("TopActorsChart").is_none());
        engine.create("TopActorsChart", bar(payload(&["B"], &[2.0])))?;
        assert_eq!(engine.live_count(), 1);
        Ok(())
    }

    #[test]
    fn defaults_are_locked_after_the_first_chart() -> Result<(), ChartError> {
        let mut engine = ChartEngine::new();
        assert!(engine
            .apply_defaults(&StyleOverrides::dashboard_theme())
            .is_ok());

        let id = engine.create("c", bar(payload(&["A"], &[1.0])))?;
        engine.destroy(id);

        assert_eq!(
            engine.apply_defaults(&StyleOverrides::default()),
            Err(StyleError::ChartsAlreadyCreated { created: 1 })
        );
        Ok(())
    }

    #[test]
    fn update_keeps_dataset_styling() -> Result<(), ChartError> {
        let mut engine = ChartEngine::new();
        let mut data = payload(&["A"], &[1.0]);
        data.datasets[0].style.background_color = Some(ColorSpec::One("#ff0000".to_string()));
        let id = engine.create("c", bar(data))?;

        let mut fresh = payload(&["A", "B"], &[4.0, 5.0]);
        fresh.datasets[0].label.clear();
        engine.update(id, fresh)?;

        let chart = engine.get(id).ok_or(ChartError::UnknownChart(id))?;
        assert_eq!(chart.config.data.labels.len(), 2);
        assert_eq!(chart.config.data.datasets[0].label, "Films");
        assert_eq!(
            chart.config.data.datasets[0].style.background_color,
            Some(ColorSpec::One("#ff0000".to_string()))
        );
        Ok(())
    }

    #[test]
    fn enlarged_bar_shows_ticks_and_stops_animating() {
        let config = bar(payload(&["A"], &[1.0])).enlarged();
        assert!(!config.options.animate);
        assert!(config.options.responsive);
        assert!(!config.options.maintain_aspect_ratio);
        assert!(config.options.x_axis.is_some_and(|axis| axis.show_ticks));
        assert!(config.options.y_axis.is_some_and(|axis| axis.show_ticks && axis.begin_at_zero));
    }

    #[test]
    fn enlarged_pie_drops_axes_and_shows_legend_on_top() {
        let mut config = bar(payload(&["Drama", "Comedy"], &[3.0, 2.0]));
        config.kind = ChartKind::Pie;
        config.options.legend = LegendOptions::at(LegendPosition::Right);

        let config = config.enlarged();
        assert!(config.options.x_axis.is_none());
        assert!(config.options.y_axis.is_none());
        assert_eq!(config.options.legend, LegendOptions::at(LegendPosition::Top));
    }

    #[test]
    fn unknown_chart_cannot_be_updated() {
        let mut engine = ChartEngine::new();
        let id = ChartId(42);
        assert_eq!(
            engine.update(id, payload(&[], &[])),
            Err(ChartError::UnknownChart(id))
        );
    }
}
