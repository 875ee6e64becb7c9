//! Static widget configuration of the dashboard page and its enlarged views.

use crate::chart::{AxisOptions, ChartKind, ChartOptions, LegendOptions};
use crate::endpoints::Endpoint;
use crate::format::PosterSize;
use crate::style::LegendPosition;
use crate::surface::Surface;
use crate::widget::{
    CardLayout, ChartSource, ChartWidget, ListWidget, StatFormat, StatWidget, WidgetSpec,
};

pub const OVERLAY_CHART_SURFACE: &str = "fullscreenCanvas";
pub const OVERLAY_CONTENT_HOST: &str = "fullscreenGenericContentHost";
pub const OVERLAY_ERROR: &str = "fullscreenErrorMessage";

const DASHBOARD_LIMIT: u32 = 5;
const ENLARGED_CREDITS_LIMIT: u32 = 20;
const ENLARGED_MOVIES_LIMIT: u32 = 14;

fn release_year() -> ChartWidget {
    ChartWidget {
        id: "release-year",
        title: "Movies by Release Year",
        container: "MoviesByReleaseYearChart",
        error_element: "MoviesByReleaseYearChartErrorMessage",
        endpoint: Endpoint::FilmCountByReleaseYear,
        limit: None,
        source: ChartSource::Chart,
        kind: ChartKind::Bar,
        dataset_label: "Movies Watched",
        options: ChartOptions {
            x_axis: Some(AxisOptions::titled("Release Year")),
            y_axis: Some(AxisOptions::counting("Number of Movies")),
            value_unit: Some("films".to_string()),
            ..ChartOptions::default()
        },
    }
}

fn genre() -> ChartWidget {
    ChartWidget {
        id: "genre",
        title: "Movies by Genre",
        container: "MoviesByGenrePieChart",
        error_element: "MoviesByGenrePieChartErrorMessage",
        endpoint: Endpoint::FilmCountByGenre,
        limit: None,
        source: ChartSource::Chart,
        kind: ChartKind::Pie,
        dataset_label: "Movies",
        options: ChartOptions {
            legend: LegendOptions::at(LegendPosition::Right),
            value_unit: Some("films".to_string()),
            ..ChartOptions::default()
        },
    }
}

fn watched_over_time() -> ChartWidget {
    ChartWidget {
        id: "watched-over-time",
        title: "Movies Watched Over Time",
        container: "MoviesWatchedOverTimeChart",
        error_element: "MoviesWatchedOverTimeChartErrorMessage",
        endpoint: Endpoint::FilmCountByMonth,
        limit: None,
        source: ChartSource::Chart,
        kind: ChartKind::Line,
        dataset_label: "Movies Watched per Month",
        options: ChartOptions {
            x_axis: Some(AxisOptions::titled("Month")),
            y_axis: Some(AxisOptions::counting("Movies Watched")),
            value_unit: Some("films".to_string()),
            ..ChartOptions::default()
        },
    }
}

fn ranked_people(
    id: &'static str,
    title: &'static str,
    container: &'static str,
    error_element: &'static str,
    endpoint: Endpoint,
) -> ChartWidget {
    ChartWidget {
        id,
        title,
        container,
        error_element,
        endpoint,
        limit: Some(DASHBOARD_LIMIT),
        source: ChartSource::Credits,
        kind: ChartKind::Bar,
        dataset_label: "Films",
        options: ChartOptions {
            y_axis: Some(AxisOptions::counting("Number of Films")),
            value_unit: Some("films".to_string()),
            ..ChartOptions::default()
        },
    }
}

fn most_rewatched() -> ListWidget {
    ListWidget {
        id: "most-rewatched",
        title: "Most Rewatched Movies",
        container: "mostRewatchedMoviesContainer",
        error_element: "mostRewatchedMoviesErrorMessage",
        endpoint: Endpoint::MostRewatchedMovies,
        limit: Some(DASHBOARD_LIMIT),
        layout: CardLayout::Movies {
            poster: PosterSize::W185,
        },
        header: None,
        empty_text: "No rewatched movies found.",
    }
}

const fn stat(
    id: &'static str,
    title: &'static str,
    container: &'static str,
    endpoint: Endpoint,
    format: StatFormat,
) -> WidgetSpec {
    WidgetSpec::Stat(StatWidget {
        id,
        title,
        container,
        endpoint,
        format,
    })
}

/// Every panel in page order: stat tiles first, then the six panels.
pub fn widgets() -> Vec<WidgetSpec> {
    vec![
        stat(
            "total-watched",
            "Movies Watched",
            "totalMoviesWatched",
            Endpoint::TotalWatched,
            StatFormat::Count,
        ),
        stat(
            "total-rated",
            "Movies Rated",
            "totalMoviesRated",
            Endpoint::TotalRated,
            StatFormat::Count,
        ),
        stat(
            "total-hours",
            "Hours Watched",
            "totalHoursWatched",
            Endpoint::TotalHours,
            StatFormat::Hours,
        ),
        stat(
            "rewatches",
            "Rewatches / New",
            "rewatchStats",
            Endpoint::Rewatches,
            StatFormat::RewatchRatio,
        ),
        WidgetSpec::Chart(release_year()),
        WidgetSpec::Chart(genre()),
        WidgetSpec::Chart(watched_over_time()),
        WidgetSpec::Chart(ranked_people(
            "top-directors",
            "Top Directors",
            "TopDirectorsChart",
            "TopDirectorsChartErrorMessage",
            Endpoint::TopDirectors,
        )),
        WidgetSpec::Chart(ranked_people(
            "top-actors",
            "Top Actors",
            "TopActorsChart",
            "TopActorsChartErrorMessage",
            Endpoint::TopActors,
        )),
        WidgetSpec::List(most_rewatched()),
    ]
}

pub fn widget(id: &str) -> Option<WidgetSpec> {
    widgets().into_iter().find(|spec| spec.id() == id)
}

/// The page with every container, error element and the overlay regions.
pub fn page() -> Surface {
    let mut surface = Surface::new();
    for spec in widgets() {
        surface.add_container(spec.container());
        if let Some(element) = spec.error_element() {
            surface.add_error_element(element);
        }
    }
    surface.add_container(OVERLAY_CHART_SURFACE);
    surface.add_container(OVERLAY_CONTENT_HOST);
    surface.add_error_element(OVERLAY_ERROR);
    surface
}

/// How a widget is shown in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Re-fetch the chart's data and redraw its config enlarged.
    Chart {
        source_container: &'static str,
        endpoint: Endpoint,
        limit: Option<u32>,
    },
    /// Render a larger card grid into the overlay's content host.
    List(ListWidget),
}

fn enlarged_credits(
    id: &'static str,
    title: &'static str,
    header: &'static str,
    endpoint: Endpoint,
    empty_text: &'static str,
) -> Expansion {
    Expansion::List(ListWidget {
        id,
        title,
        container: OVERLAY_CONTENT_HOST,
        error_element: OVERLAY_ERROR,
        endpoint,
        limit: Some(ENLARGED_CREDITS_LIMIT),
        layout: CardLayout::Credits,
        header: Some(header),
        empty_text,
    })
}

pub fn expansion(widget_id: &str) -> Option<Expansion> {
    let chart = |widget: ChartWidget| Expansion::Chart {
        source_container: widget.container,
        endpoint: widget.endpoint,
        limit: None,
    };

    match widget_id {
        "release-year" => Some(chart(release_year())),
        "genre" => Some(chart(genre())),
        "watched-over-time" => Some(chart(watched_over_time())),
        "top-directors" => Some(enlarged_credits(
            "top-directors",
            "Top Directors",
            "Top Directors (Top 20)",
            Endpoint::TopDirectors,
            "No directors found.",
        )),
        "top-actors" => Some(enlarged_credits(
            "top-actors",
            "Top Actors",
            "Top Actors (Top 20)",
            Endpoint::TopActors,
            "No actors found.",
        )),
        "most-rewatched" => Some(Expansion::List(ListWidget {
            container: OVERLAY_CONTENT_HOST,
            error_element: OVERLAY_ERROR,
            limit: Some(ENLARGED_MOVIES_LIMIT),
            layout: CardLayout::Movies {
                poster: PosterSize::W342,
            },
            header: Some("Most Rewatched Movies (Top 14)"),
            ..most_rewatched()
        })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn containers_are_unique() {
        let widgets = widgets();
        let containers = widgets.iter().map(WidgetSpec::container).collect::<HashSet<_>>();
        assert_eq!(containers.len(), widgets.len());
    }

    #[test]
    fn every_expandable_widget_has_an_expansion() {
        for spec in widgets() {
            assert_eq!(spec.is_expandable(), expansion(spec.id()).is_some(), "{}", spec.id());
        }
        assert!(expansion("total-hours").is_none());
        assert!(expansion("unknown").is_none());
    }

    #[test]
    fn ranked_lists_grow_in_the_overlay() {
        let Some(Expansion::List(actors)) = expansion("top-actors") else {
            panic!("top actors expand to a list");
        };
        assert_eq!(actors.limit, Some(20));
        assert_eq!(actors.container, OVERLAY_CONTENT_HOST);
        assert_eq!(actors.header, Some("Top Actors (Top 20)"));

        let Some(Expansion::List(movies)) = expansion("most-rewatched") else {
            panic!("most rewatched expands to a list");
        };
        assert_eq!(movies.limit, Some(14));
        assert_eq!(
            movies.layout,
            CardLayout::Movies {
                poster: PosterSize::W342
            }
        );
    }

    #[test]
    fn charts_expand_without_a_limit() {
        assert_eq!(
            expansion("genre"),
            Some(Expansion::Chart {
                source_container: "MoviesByGenrePieChart",
                endpoint: Endpoint::FilmCountByGenre,
                limit: None,
            })
        );
    }

    #[test]
    fn page_holds_overlay_regions() {
        let page = page();
        assert!(page.contains(OVERLAY_CHART_SURFACE));
        assert!(page.contains(OVERLAY_CONTENT_HOST));
        assert!(page.has_error_element(OVERLAY_ERROR));
        assert!(page.has_error_element("TopActorsChartErrorMessage"));
    }
}
