//! Style defaults registry.
//!
//! [`ChartDefaults`] is the fully resolved set of visual defaults every chart
//! is drawn with. [`StyleOverrides`] is the typed, validated partial form a
//! theme is written in. Absent keys keep the built-in value, nested groups
//! merge field by field, and the pie palette is replaced as a whole.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartKind;
use crate::model::ChartDataset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid colour '{0}'")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error(
        "chart defaults must be applied before the first chart is created \
         ({created} already created)"
    )]
    ChartsAlreadyCreated { created: u64 },

    #[error("invalid theme: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Flatten a translucent colour onto an opaque background.
    pub fn blend_over(self, background: Self) -> Self {
        let alpha = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            f32::from(fg).mul_add(alpha, f32::from(bg) * (1.0 - alpha)).round() as u8
        };
        Self::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let text = value.trim();
        let invalid = || ColorParseError::Invalid(value.to_string());

        if let Some(hex) = text.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |range: &str| u8::from_str_radix(range, 16).map_err(|_| invalid());
            return match hex.len() {
                3 => {
                    let expand = |index: usize| channel(&hex[index..=index].repeat(2));
                    Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
                }
                6 => Ok(Self::rgb(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                )),
                _ => Err(invalid()),
            };
        }

        let lower = text.to_ascii_lowercase();
        let (body, wants_alpha) = if let Some(body) = lower.strip_prefix("rgba(") {
            (body, true)
        } else if let Some(body) = lower.strip_prefix("rgb(") {
            (body, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts = body.split(',').map(str::trim).collect::<Vec<_>>();

        let expected = if wants_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let alpha = if wants_alpha {
            let alpha = parts[3].parse::<f32>().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid());
            }
            alpha
        } else {
            1.0
        };

        Ok(Self::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f32::EPSILON {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: u16,
    pub bold: bool,
}

impl Font {
    fn new(family: &str, size: u16) -> Self {
        Self {
            family: family.to_string(),
            size,
            bold: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDefaults {
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendDefaults {
    pub display: bool,
    pub position: LegendPosition,
    pub label_color: Rgba,
    pub font: Font,
    pub box_width: u16,
    pub padding: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipDefaults {
    pub enabled: bool,
    pub background: Rgba,
    pub title_color: Rgba,
    pub body_color: Rgba,
    pub display_colors: bool,
    pub padding: u16,
    pub title_font: Font,
    pub body_font: Font,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleDefaults {
    pub title_color: Rgba,
    pub title_font: Font,
    pub tick_color: Rgba,
    pub grid_color: Rgba,
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDefaults {
    pub background: Rgba,
    pub border: Rgba,
    pub hover_background: Rgba,
    pub border_width: f32,
    pub border_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineDefaults {
    pub border: Rgba,
    pub background: Rgba,
    pub border_width: f32,
    pub tension: f32,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieDefaults {
    pub palette: Vec<Rgba>,
    pub border: Rgba,
    pub border_width: f32,
    pub hover_offset: f32,
}

/// Global defaults of the chart capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDefaults {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub text_color: Rgba,
    pub font: Font,
    pub animation: AnimationDefaults,
    pub legend: LegendDefaults,
    pub tooltip: TooltipDefaults,
    pub scale: ScaleDefaults,
    pub bar: BarDefaults,
    pub line: LineDefaults,
    pub pie: PieDefaults,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        let text = Rgba::rgb(0x66, 0x66, 0x66);
        let translucent = Rgba::new(0, 0, 0, 0.1);
        let family = "Helvetica Neue";

        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            text_color: text,
            font: Font::new(family, 12),
            animation: AnimationDefaults {
                enabled: true,
                duration_ms: 1000,
                easing: "easeOutQuart".to_string(),
            },
            legend: LegendDefaults {
                display: true,
                position: LegendPosition::Top,
                label_color: text,
                font: Font::new(family, 12),
                box_width: 40,
                padding: 10,
            },
            tooltip: TooltipDefaults {
                enabled: true,
                background: Rgba::new(0, 0, 0, 0.8),
                title_color: Rgba::rgb(0xff, 0xff, 0xff),
                body_color: Rgba::rgb(0xff, 0xff, 0xff),
                display_colors: true,
                padding: 6,
                title_font: Font {
                    bold: true,
                    ..Font::new(family, 12)
                },
                body_font: Font::new(family, 12),
            },
            scale: ScaleDefaults {
                title_color: text,
                title_font: Font::new(family, 12),
                tick_color: text,
                grid_color: translucent,
                begin_at_zero: false,
            },
            bar: BarDefaults {
                background: translucent,
                border: translucent,
                hover_background: translucent,
                border_width: 0.0,
                border_radius: 0.0,
            },
            line: LineDefaults {
                border: translucent,
                background: translucent,
                border_width: 3.0,
                tension: 0.0,
                fill: false,
            },
            pie: PieDefaults {
                palette: vec![
                    Rgba::rgb(0x36, 0xa2, 0xeb),
                    Rgba::rgb(0xff, 0x63, 0x84),
                    Rgba::rgb(0x4b, 0xc0, 0xc0),
                    Rgba::rgb(0xff, 0x9f, 0x40),
                    Rgba::rgb(0x99, 0x66, 0xff),
                    Rgba::rgb(0xff, 0xcd, 0x56),
                    Rgba::rgb(0xc9, 0xcb, 0xcf),
                ],
                border: Rgba::rgb(0xff, 0xff, 0xff),
                border_width: 2.0,
                hover_offset: 0.0,
            },
        }
    }
}

impl ChartDefaults {
    /// Fill colour of one point: the dataset's own override first, then the
    /// per-series-type default.
    pub fn point_color(
        &self,
        kind: ChartKind,
        dataset: &ChartDataset,
        dataset_index: usize,
        point_index: usize,
    ) -> Rgba {
        let own = match kind {
            ChartKind::Line => dataset.style.border_color.as_ref(),
            _ => dataset.style.background_color.as_ref(),
        };
        if let Some(color) = own
            .and_then(|spec| spec.at(point_index))
            .and_then(|text| text.parse::<Rgba>().ok())
        {
            return color;
        }

        match kind {
            ChartKind::Pie | ChartKind::Doughnut => self.palette_color(point_index),
            ChartKind::Bar if dataset_index == 0 => self.bar.background,
            ChartKind::Line if dataset_index == 0 => self.line.border,
            ChartKind::Bar | ChartKind::Line => self.palette_color(dataset_index),
        }
    }

    pub fn palette_color(&self, index: usize) -> Rgba {
        if self.pie.palette.is_empty() {
            return self.text_color;
        }
        self.pie.palette[index % self.pie.palette.len()]
    }

    pub fn apply(&mut self, overrides: &StyleOverrides) {
        overrides.merge_into(self);
    }
}

trait MergeInto<T> {
    fn merge_into(&self, target: &mut T);
}

fn set<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

fn merge<T, O: MergeInto<T>>(target: &mut T, value: Option<&O>) {
    if let Some(value) = value {
        value.merge_into(target);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FontOverrides {
    pub family: Option<String>,
    pub size: Option<u16>,
    pub bold: Option<bool>,
}

impl MergeInto<Font> for FontOverrides {
    fn merge_into(&self, target: &mut Font) {
        set(&mut target.family, self.family.as_ref());
        set(&mut target.size, self.size.as_ref());
        set(&mut target.bold, self.bold.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AnimationOverrides {
    pub enabled: Option<bool>,
    pub duration_ms: Option<u32>,
    pub easing: Option<String>,
}

impl MergeInto<AnimationDefaults> for AnimationOverrides {
    fn merge_into(&self, target: &mut AnimationDefaults) {
        set(&mut target.enabled, self.enabled.as_ref());
        set(&mut target.duration_ms, self.duration_ms.as_ref());
        set(&mut target.easing, self.easing.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LegendOverrides {
    pub display: Option<bool>,
    pub position: Option<LegendPosition>,
    pub label_color: Option<Rgba>,
    pub font: Option<FontOverrides>,
    pub box_width: Option<u16>,
    pub padding: Option<u16>,
}

impl MergeInto<LegendDefaults> for LegendOverrides {
    fn merge_into(&self, target: &mut LegendDefaults) {
        set(&mut target.display, self.display.as_ref());
        set(&mut target.position, self.position.as_ref());
        set(&mut target.label_color, self.label_color.as_ref());
        merge(&mut target.font, self.font.as_ref());
        set(&mut target.box_width, self.box_width.as_ref());
        set(&mut target.padding, self.padding.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TooltipOverrides {
    pub enabled: Option<bool>,
    pub background: Option<Rgba>,
    pub title_color: Option<Rgba>,
    pub body_color: Option<Rgba>,
    pub display_colors: Option<bool>,
    pub padding: Option<u16>,
    pub title_font: Option<FontOverrides>,
    pub body_font: Option<FontOverrides>,
}

impl MergeInto<TooltipDefaults> for TooltipOverrides {
    fn merge_into(&self, target: &mut TooltipDefaults) {
        set(&mut target.enabled, self.enabled.as_ref());
        set(&mut target.background, self.background.as_ref());
        set(&mut target.title_color, self.title_color.as_ref());
        set(&mut target.body_color, self.body_color.as_ref());
        set(&mut target.display_colors, self.display_colors.as_ref());
        set(&mut target.padding, self.padding.as_ref());
        merge(&mut target.title_font, self.title_font.as_ref());
        merge(&mut target.body_font, self.body_font.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ScaleOverrides {
    pub title_color: Option<Rgba>,
    pub title_font: Option<FontOverrides>,
    pub tick_color: Option<Rgba>,
    pub grid_color: Option<Rgba>,
    pub begin_at_zero: Option<bool>,
}

impl MergeInto<ScaleDefaults> for ScaleOverrides {
    fn merge_into(&self, target: &mut ScaleDefaults) {
        set(&mut target.title_color, self.title_color.as_ref());
        merge(&mut target.title_font, self.title_font.as_ref());
        set(&mut target.tick_color, self.tick_color.as_ref());
        set(&mut target.grid_color, self.grid_color.as_ref());
        set(&mut target.begin_at_zero, self.begin_at_zero.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BarOverrides {
    pub background: Option<Rgba>,
    pub border: Option<Rgba>,
    pub hover_background: Option<Rgba>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
}

impl MergeInto<BarDefaults> for BarOverrides {
    fn merge_into(&self, target: &mut BarDefaults) {
        set(&mut target.background, self.background.as_ref());
        set(&mut target.border, self.border.as_ref());
        set(&mut target.hover_background, self.hover_background.as_ref());
        set(&mut target.border_width, self.border_width.as_ref());
        set(&mut target.border_radius, self.border_radius.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LineOverrides {
    pub border: Option<Rgba>,
    pub background: Option<Rgba>,
    pub border_width: Option<f32>,
    pub tension: Option<f32>,
    pub fill: Option<bool>,
}

impl MergeInto<LineDefaults> for LineOverrides {
    fn merge_into(&self, target: &mut LineDefaults) {
        set(&mut target.border, self.border.as_ref());
        set(&mut target.background, self.background.as_ref());
        set(&mut target.border_width, self.border_width.as_ref());
        set(&mut target.tension, self.tension.as_ref());
        set(&mut target.fill, self.fill.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PieOverrides {
    /// Replaces the built-in palette; lists are never merged element-wise.
    pub palette: Option<Vec<Rgba>>,
    pub border: Option<Rgba>,
    pub border_width: Option<f32>,
    pub hover_offset: Option<f32>,
}

impl MergeInto<PieDefaults> for PieOverrides {
    fn merge_into(&self, target: &mut PieDefaults) {
        set(&mut target.palette, self.palette.as_ref());
        set(&mut target.border, self.border.as_ref());
        set(&mut target.border_width, self.border_width.as_ref());
        set(&mut target.hover_offset, self.hover_offset.as_ref());
    }
}

/// A theme: every key optional, colours validated while deserialising.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StyleOverrides {
    pub responsive: Option<bool>,
    pub maintain_aspect_ratio: Option<bool>,
    pub text_color: Option<Rgba>,
    pub font: Option<FontOverrides>,
    pub animation: Option<AnimationOverrides>,
    pub legend: Option<LegendOverrides>,
    pub tooltip: Option<TooltipOverrides>,
    pub scale: Option<ScaleOverrides>,
    pub bar: Option<BarOverrides>,
    pub line: Option<LineOverrides>,
    pub pie: Option<PieOverrides>,
}

impl MergeInto<ChartDefaults> for StyleOverrides {
    fn merge_into(&self, target: &mut ChartDefaults) {
        set(&mut target.responsive, self.responsive.as_ref());
        set(&mut target.maintain_aspect_ratio, self.maintain_aspect_ratio.as_ref());
        set(&mut target.text_color, self.text_color.as_ref());
        merge(&mut target.font, self.font.as_ref());
        merge(&mut target.animation, self.animation.as_ref());
        merge(&mut target.legend, self.legend.as_ref());
        merge(&mut target.tooltip, self.tooltip.as_ref());
        merge(&mut target.scale, self.scale.as_ref());
        merge(&mut target.bar, self.bar.as_ref());
        merge(&mut target.line, self.line.as_ref());
        merge(&mut target.pie, self.pie.as_ref());
    }
}

/// Key-by-key layering of one partial theme over another.
trait Layer {
    fn layer(&mut self, top: Self);
}

fn pick<T>(base: &mut Option<T>, top: Option<T>) {
    if top.is_some() {
        *base = top;
    }
}

fn nest<T: Layer>(base: &mut Option<T>, top: Option<T>) {
    match (base.as_mut(), top) {
        (Some(base), Some(top)) => base.layer(top),
        (None, top @ Some(_)) => *base = top,
        (_, None) => {}
    }
}

impl Layer for FontOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.family, top.family);
        pick(&mut self.size, top.size);
        pick(&mut self.bold, top.bold);
    }
}

impl Layer for AnimationOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.enabled, top.enabled);
        pick(&mut self.duration_ms, top.duration_ms);
        pick(&mut self.easing, top.easing);
    }
}

impl Layer for LegendOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.display, top.display);
        pick(&mut self.position, top.position);
        pick(&mut self.label_color, top.label_color);
        nest(&mut self.font, top.font);
        pick(&mut self.box_width, top.box_width);
        pick(&mut self.padding, top.padding);
    }
}

impl Layer for TooltipOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.enabled, top.enabled);
        pick(&mut self.background, top.background);
        pick(&mut self.title_color, top.title_color);
        pick(&mut self.body_color, top.body_color);
        pick(&mut self.display_colors, top.display_colors);
        pick(&mut self.padding, top.padding);
        nest(&mut self.title_font, top.title_font);
        nest(&mut self.body_font, top.body_font);
    }
}

impl Layer for ScaleOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.title_color, top.title_color);
        nest(&mut self.title_font, top.title_font);
        pick(&mut self.tick_color, top.tick_color);
        pick(&mut self.grid_color, top.grid_color);
        pick(&mut self.begin_at_zero, top.begin_at_zero);
    }
}

impl Layer for BarOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.background, top.background);
        pick(&mut self.border, top.border);
        pick(&mut self.hover_background, top.hover_background);
        pick(&mut self.border_width, top.border_width);
        pick(&mut self.border_radius, top.border_radius);
    }
}

impl Layer for LineOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.border, top.border);
        pick(&mut self.background, top.background);
        pick(&mut self.border_width, top.border_width);
        pick(&mut self.tension, top.tension);
        pick(&mut self.fill, top.fill);
    }
}

impl Layer for PieOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.palette, top.palette);
        pick(&mut self.border, top.border);
        pick(&mut self.border_width, top.border_width);
        pick(&mut self.hover_offset, top.hover_offset);
    }
}

impl Layer for StyleOverrides {
    fn layer(&mut self, top: Self) {
        pick(&mut self.responsive, top.responsive);
        pick(&mut self.maintain_aspect_ratio, top.maintain_aspect_ratio);
        pick(&mut self.text_color, top.text_color);
        nest(&mut self.font, top.font);
        nest(&mut self.animation, top.animation);
        nest(&mut self.legend, top.legend);
        nest(&mut self.tooltip, top.tooltip);
        nest(&mut self.scale, top.scale);
        nest(&mut self.bar, top.bar);
        nest(&mut self.line, top.line);
        nest(&mut self.pie, top.pie);
    }
}

impl StyleOverrides {
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        serde_json::from_str(text).map_err(|error| StyleError::Invalid(error.to_string()))
    }

    /// Layer `other` on top of `self`; keys set in `other` win. Groups merge
    /// key by key, the pie palette is replaced whole.
    #[must_use]
    pub fn layered(mut self, other: Self) -> Self {
        self.layer(other);
        self
    }

    /// The dark dashboard theme: blue bars, light text, Inter.
    pub fn dashboard_theme() -> Self {
        let primary = Rgba::new(59, 130, 246, 0.7);
        let primary_hover = Rgba::new(59, 130, 246, 0.9);
        let primary_border = Rgba::rgb(59, 130, 246);
        let light_text = Rgba::rgb(0xd1, 0xd5, 0xdb);
        let grid = Rgba::new(209, 213, 219, 0.2);
        let white = Rgba::rgb(0xff, 0xff, 0xff);

        let inter = |size: u16, bold: bool| FontOverrides {
            family: Some("Inter".to_string()),
            size: Some(size),
            bold: bold.then_some(true),
        };

        Self {
            responsive: Some(true),
            maintain_aspect_ratio: Some(false),
            text_color: Some(light_text),
            font: Some(inter(12, false)),
            animation: Some(AnimationOverrides {
                enabled: Some(true),
                duration_ms: Some(1000),
                easing: Some("easeInOutQuart".to_string()),
            }),
            legend: Some(LegendOverrides {
                display: Some(true),
                position: Some(LegendPosition::Top),
                label_color: Some(light_text),
                font: Some(inter(12, false)),
                box_width: Some(12),
                padding: Some(10),
            }),
            tooltip: Some(TooltipOverrides {
                enabled: Some(true),
                background: Some(Rgba::new(0, 0, 0, 0.8)),
                title_color: Some(white),
                body_color: Some(white),
                display_colors: Some(true),
                padding: Some(10),
                title_font: Some(inter(14, true)),
                body_font: Some(inter(12, false)),
            }),
            scale: Some(ScaleOverrides {
                title_color: Some(light_text),
                title_font: Some(inter(14, true)),
                tick_color: Some(light_text),
                grid_color: Some(grid),
                begin_at_zero: Some(true),
            }),
            bar: Some(BarOverrides {
                background: Some(primary),
                border: Some(primary_border),
                hover_background: Some(primary_hover),
                border_width: Some(1.0),
                border_radius: Some(2.0),
            }),
            line: Some(LineOverrides {
                border: Some(primary_border),
                background: Some(Rgba::new(59, 130, 246, 0.2)),
                border_width: None,
                tension: None,
                fill: None,
            }),
            pie: Some(PieOverrides {
                palette: Some(
                    [
                        (0x3b, 0x82, 0xf6),
                        (0x60, 0xa5, 0xfa),
                        (0xec, 0x48, 0x99),
                        (0xf4, 0x72, 0xb6),
                        (0x14, 0xb8, 0xa6),
                        (0x2d, 0xd4, 0xbf),
                        (0xf9, 0x73, 0x16),
                        (0xfb, 0x92, 0x3c),
                        (0x8b, 0x5c, 0xf6),
                        (0xa7, 0x8b, 0xfa),
                        (0xea, 0xb3, 0x08),
                        (0xfd, 0xe0, 0x47),
                        (0x22, 0xc5, 0x5e),
                        (0x4a, 0xde, 0x80),
                        (0x6b, 0x72, 0x80),
                        (0x9c, 0xa3, 0xaf),
                    ]
                    .into_iter()
                    .map(|(r, g, b)| Rgba::rgb(r, g, b))
                    .collect(),
                ),
                border: Some(Rgba::rgb(0x1f, 0x29, 0x37)),
                border_width: Some(2.0),
                hover_offset: Some(8.0),
            }),
        }
    }
}
