//! Payload shapes returned by the statistics API.

use serde::{Deserialize, Deserializer, Serialize};

/// Colour override sent by the backend: one colour, or one per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    Many(Vec<String>),
}

impl ColorSpec {
    /// Colour for the point at `index`, cycling through a list.
    pub fn at(&self, index: usize) -> Option<&str> {
        match self {
            Self::One(color) => Some(color),
            Self::Many(colors) if colors.is_empty() => None,
            Self::Many(colors) => Some(&colors[index % colors.len()]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

impl DatasetStyle {
    pub const fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.border_color.is_none()
            && self.border_width.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub label: String,
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    #[serde(deserialize_with = "deserialize_labels")]
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartPayload {
    /// Every dataset must carry exactly one value per label.
    pub fn validate(&self) -> Result<(), String> {
        for (index, dataset) in self.datasets.iter().enumerate() {
            if dataset.data.len() != self.labels.len() {
                let name = if dataset.label.is_empty() {
                    format!("#{index}")
                } else {
                    format!("'{}'", dataset.label)
                };
                return Err(format!(
                    "dataset {name} has {} values for {} labels",
                    dataset.data.len(),
                    self.labels.len()
                ));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.iter().all(|dataset| dataset.data.is_empty())
    }

    /// Largest value across all datasets, or zero.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// The month endpoint sends `["January", "2023"]` for the first month of a
/// year and a bare string otherwise.
fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Lines(Vec<String>),
        Number(f64),
    }

    let labels = Vec::<Label>::deserialize(deserializer)?;
    Ok(labels
        .into_iter()
        .map(|label| match label {
            Label::Text(text) => text,
            Label::Lines(lines) => lines.join(" "),
            Label::Number(number) => number.to_string(),
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCredit {
    pub name: String,
    #[serde(rename = "filmCount", alias = "film_count")]
    pub film_count: u32,
    #[serde(
        rename = "profilePath",
        alias = "profileImageUrl",
        alias = "profile_path",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image_url: Option<String>,
}

/// Top actors/directors arrive either as chart data or as a credit list,
/// depending on how the backend is configured.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CreditsPayload {
    Chart(ChartPayload),
    Credits(Vec<PersonCredit>),
}

impl CreditsPayload {
    /// Credit lists become one dataset: names as labels, film counts as values.
    pub fn into_chart(self) -> Result<ChartPayload, String> {
        match self {
            Self::Chart(chart) => {
                chart.validate()?;
                Ok(chart)
            }
            Self::Credits(credits) => {
                let (labels, data) = credits
                    .into_iter()
                    .map(|credit| (credit.name, f64::from(credit.film_count)))
                    .unzip();
                Ok(ChartPayload {
                    labels,
                    datasets: vec![ChartDataset {
                        label: String::new(),
                        data,
                        style: DatasetStyle::default(),
                    }],
                })
            }
        }
    }

    /// Chart data is read as one credit per label, valued by the first dataset.
    pub fn into_credits(self) -> Result<Vec<PersonCredit>, String> {
        match self {
            Self::Credits(credits) => Ok(credits),
            Self::Chart(chart) => {
                chart.validate()?;
                let Some(dataset) = chart.datasets.first() else {
                    return Ok(Vec::new());
                };
                Ok(chart
                    .labels
                    .iter()
                    .zip(&dataset.data)
                    .map(|(name, value)| PersonCredit {
                        name: name.clone(),
                        film_count: value.max(0.0).round() as u32,
                        profile_image_url: None,
                    })
                    .collect())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCard {
    pub title: String,
    #[serde(
        rename = "poster_path",
        alias = "posterUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub poster_url: Option<String>,
    #[serde(alias = "rewatchCount")]
    pub rewatch_count: u32,
    #[serde(
        rename = "letterboxd_uri",
        alias = "externalUri",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_uri: Option<String>,
}

impl MovieCard {
    /// The backend sends an empty string when a film has no poster.
    pub fn poster_path(&self) -> Option<&str> {
        self.poster_url.as_deref().filter(|path| !path.is_empty())
    }

    pub fn link(&self) -> Option<&str> {
        self.external_uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCount {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalHours {
    pub total_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewatchStats {
    pub rewatches: u64,
    pub new_watches: u64,
}
