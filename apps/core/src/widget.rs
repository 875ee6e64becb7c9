//! Generic widget renderers.
//!
//! Every panel on the dashboard is one of three configs: a chart, a card
//! list or a stat tile. [`render`] drives any of them through the same
//! `Idle -> Loading -> Rendered | Failed` cycle, guarded by the container's
//! request token so that a slow response never overwrites a newer one.

use std::cell::RefCell;

use serde::Serialize;

use crate::chart::{ChartConfig, ChartKind, ChartOptions};
use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::error::WidgetError;
use crate::format::{self, PosterSize};
use crate::model::{
    ChartPayload, CreditsPayload, MovieCard, PersonCredit, RewatchStats, TotalCount, TotalHours,
};
use crate::surface::{Card, CardGrid, Notice, Surface, WidgetHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    Failed(WidgetError),
    /// A newer request for the same container was issued meanwhile.
    Discarded,
}

/// What a chart endpoint sends back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSource {
    Chart,
    /// Chart data or a credit list, depending on the backend.
    Credits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartWidget {
    pub id: &'static str,
    pub title: &'static str,
    pub container: &'static str,
    pub error_element: &'static str,
    pub endpoint: Endpoint,
    pub limit: Option<u32>,
    pub source: ChartSource,
    pub kind: ChartKind,
    /// Used for datasets the backend sends without a label.
    pub dataset_label: &'static str,
    pub options: ChartOptions,
}

impl ChartWidget {
    pub fn config(&self, mut data: ChartPayload) -> ChartConfig {
        for dataset in &mut data.datasets {
            if dataset.label.is_empty() {
                dataset.label = self.dataset_label.to_string();
            }
        }
        ChartConfig {
            kind: self.kind,
            data,
            options: self.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    Movies { poster: PosterSize },
    Credits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWidget {
    pub id: &'static str,
    pub title: &'static str,
    pub container: &'static str,
    pub error_element: &'static str,
    pub endpoint: Endpoint,
    pub limit: Option<u32>,
    pub layout: CardLayout,
    pub header: Option<&'static str>,
    pub empty_text: &'static str,
}

impl ListWidget {
    pub fn movie_cards(&self, movies: &[MovieCard], poster: PosterSize) -> CardGrid {
        let cards = movies
            .iter()
            .map(|movie| {
                let caption = format::rewatch_label(movie.rewatch_count);
                Card {
                    title: movie.title.clone(),
                    image_url: movie
                        .poster_path()
                        .map(|path| format::poster_url(path, poster)),
                    tooltip: Some(format!("{} ({caption})", movie.title)),
                    caption,
                    link: movie.link().map(ToString::to_string),
                }
            })
            .collect();
        self.grid(cards)
    }

    pub fn credit_cards(&self, credits: &[PersonCredit]) -> CardGrid {
        let cards = credits
            .iter()
            .map(|credit| Card {
                title: credit.name.clone(),
                image_url: credit
                    .profile_image_url
                    .as_deref()
                    .filter(|path| !path.is_empty())
                    .map(|path| format::poster_url(path, PosterSize::W185)),
                caption: format::film_count_label(credit.film_count),
                link: None,
                tooltip: None,
            })
            .collect();
        self.grid(cards)
    }

    fn grid(&self, cards: Vec<Card>) -> CardGrid {
        CardGrid {
            header: self.header.map(ToString::to_string),
            cards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Count,
    Hours,
    RewatchRatio,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatWidget {
    pub id: &'static str,
    pub title: &'static str,
    pub container: &'static str,
    pub endpoint: Endpoint,
    pub format: StatFormat,
}

/// Text shown in a stat tile whose request failed.
pub const STAT_ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetSpec {
    Chart(ChartWidget),
    List(ListWidget),
    Stat(StatWidget),
}

impl WidgetSpec {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Chart(widget) => widget.id,
            Self::List(widget) => widget.id,
            Self::Stat(widget) => widget.id,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Chart(widget) => widget.title,
            Self::List(widget) => widget.title,
            Self::Stat(widget) => widget.title,
        }
    }

    pub const fn container(&self) -> &'static str {
        match self {
            Self::Chart(widget) => widget.container,
            Self::List(widget) => widget.container,
            Self::Stat(widget) => widget.container,
        }
    }

    /// Stat tiles report failures inside the tile itself.
    pub const fn error_element(&self) -> Option<&'static str> {
        match self {
            Self::Chart(widget) => Some(widget.error_element),
            Self::List(widget) => Some(widget.error_element),
            Self::Stat(_) => None,
        }
    }

    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Chart(widget) => widget.endpoint,
            Self::List(widget) => widget.endpoint,
            Self::Stat(widget) => widget.endpoint,
        }
    }

    pub const fn is_expandable(&self) -> bool {
        !matches!(self, Self::Stat(_))
    }
}

/// Validated content of one response, ready to be installed.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Chart(ChartPayload),
    Cards(CardGrid),
    Text(String),
}

pub async fn fetch_content(client: &ApiClient, spec: &WidgetSpec) -> Result<Fetched, WidgetError> {
    match spec {
        WidgetSpec::Chart(widget) => fetch_chart(client, widget).await.map(Fetched::Chart),
        WidgetSpec::List(widget) => {
            fetch_cards(client, widget, widget.limit).await.map(Fetched::Cards)
        }
        WidgetSpec::Stat(widget) => fetch_stat(client, widget).await.map(Fetched::Text),
    }
}

async fn fetch_chart(
    client: &ApiClient,
    widget: &ChartWidget,
) -> Result<ChartPayload, WidgetError> {
    let payload = match widget.source {
        ChartSource::Chart => {
            let payload: ChartPayload = client.fetch_json(widget.endpoint, widget.limit).await?;
            payload.validate().map(|()| payload)
        }
        ChartSource::Credits => {
            let payload: CreditsPayload = client.fetch_json(widget.endpoint, widget.limit).await?;
            payload.into_chart()
        }
    };
    payload.map_err(WidgetError::Shape)
}

pub async fn fetch_cards(
    client: &ApiClient,
    widget: &ListWidget,
    limit: Option<u32>,
) -> Result<CardGrid, WidgetError> {
    match widget.layout {
        CardLayout::Movies { poster } => {
            let movies: Vec<MovieCard> = client.fetch_json(widget.endpoint, limit).await?;
            Ok(widget.movie_cards(&movies, poster))
        }
        CardLayout::Credits => {
            let payload: CreditsPayload = client.fetch_json(widget.endpoint, limit).await?;
            let credits = payload.into_credits().map_err(WidgetError::Shape)?;
            Ok(widget.credit_cards(&credits))
        }
    }
}

async fn fetch_stat(client: &ApiClient, widget: &StatWidget) -> Result<String, WidgetError> {
    let text = match widget.format {
        StatFormat::Count => {
            let total: TotalCount = client.fetch_json(widget.endpoint, None).await?;
            format::group_thousands(total.count)
        }
        StatFormat::Hours => {
            let total: TotalHours = client.fetch_json(widget.endpoint, None).await?;
            format::format_hours(total.total_hours)
        }
        StatFormat::RewatchRatio => {
            let stats: RewatchStats = client.fetch_json(widget.endpoint, None).await?;
            format::rewatch_ratio(stats.rewatches, stats.new_watches)
        }
    };
    Ok(text)
}

/// Put fetched content into the widget's container, replacing whatever was
/// there. An empty list becomes a muted notice.
pub fn install_content(
    surface: &mut Surface,
    spec: &WidgetSpec,
    content: Fetched,
) -> Result<(), WidgetError> {
    let container = spec.container();
    match (spec, content) {
        (WidgetSpec::Chart(widget), Fetched::Chart(payload)) => {
            surface.install_chart(container, widget.config(payload))?;
        }
        (WidgetSpec::List(widget), Fetched::Cards(grid)) if grid.cards.is_empty() => {
            if !surface.contains(container) {
                return Err(WidgetError::container_not_found(container));
            }
            surface.release(container);
            surface.set_notice(container, Notice::muted(widget.empty_text));
        }
        (_, Fetched::Cards(grid)) => surface.install(container, WidgetHandle::Cards(grid))?,
        (_, Fetched::Text(text)) => surface.install(container, WidgetHandle::Text(text))?,
        (_, Fetched::Chart(_)) => {
            return Err(WidgetError::Shape(format!(
                "chart data delivered to non-chart widget '{}'",
                spec.id()
            )))
        }
    }
    Ok(())
}

/// Record a failure: no handle left, state `Failed`, message shown.
pub fn fail(surface: &mut Surface, spec: &WidgetSpec, error: &WidgetError) {
    let container = spec.container();
    surface.release(container);
    surface.set_state(container, WidgetState::Failed);

    match spec.error_element() {
        Some(element) => {
            if !surface.show_error(element, &error.user_message(spec.title())) {
                log::warn!("error element '{element}' missing for widget '{}'", spec.id());
            }
        }
        None => surface.set_notice(container, Notice::error(STAT_ERROR_TEXT)),
    }
    log::error!("{} failed: {error}", spec.id());
}

/// Render one widget. Never panics and never returns an error: failures end
/// up in the widget's error element and in the returned outcome.
pub async fn render(
    client: &ApiClient,
    surface: &RefCell<Surface>,
    spec: &WidgetSpec,
) -> RenderOutcome {
    let container = spec.container();

    let token = {
        let mut page = surface.borrow_mut();
        if !page.contains(container) {
            let error = WidgetError::container_not_found(container);
            page.set_state(container, WidgetState::Failed);
            if let Some(element) = spec.error_element() {
                page.show_error(element, &error.user_message(spec.title()));
            }
            log::error!("{} not rendered: {error}", spec.id());
            return RenderOutcome::Failed(error);
        }
        page.release(container);
        page.begin_request(container)
    };

    let result = fetch_content(client, spec).await;

    let mut page = surface.borrow_mut();
    if !page.is_current(container, token) {
        log::debug!("discarding stale response for {container} (token {token})");
        return RenderOutcome::Discarded;
    }

    match result.and_then(|content| install_content(&mut page, spec, content)) {
        Ok(()) => {
            page.set_state(container, WidgetState::Rendered);
            if let Some(element) = spec.error_element() {
                page.hide_error(element);
            }
            log::info!("{} rendered", spec.id());
            RenderOutcome::Rendered
        }
        Err(error) => {
            fail(&mut page, spec, &error);
            RenderOutcome::Failed(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::chart::AxisOptions;
    use crate::test_support::{ok, ScriptedTransport};

    const BASE: &str = "http://api.test";

    fn actors_chart() -> WidgetSpec {
        WidgetSpec::Chart(ChartWidget {
            id: "top-actors",
            title: "Top Actors",
            container: "TopActorsChart",
            error_element: "TopActorsChartErrorMessage",
            endpoint: Endpoint::TopActors,
            limit: Some(5),
            source: ChartSource::Credits,
            kind: ChartKind::Bar,
            dataset_label: "Films",
            options: ChartOptions {
                y_axis: Some(AxisOptions::counting("Number of Films")),
                ..ChartOptions::default()
            },
        })
    }

    fn rewatched_list() -> WidgetSpec {
        WidgetSpec::List(ListWidget {
            id: "most-rewatched",
            title: "Most Rewatched Movies",
            container: "mostRewatchedMoviesContainer",
            error_element: "mostRewatchedMoviesErrorMessage",
            endpoint: Endpoint::MostRewatchedMovies,
            limit: Some(5),
            layout: CardLayout::Movies {
                poster: PosterSize::W185,
            },
            header: None,
            empty_text: "No rewatched movies found.",
        })
    }

    fn setup(spec: &WidgetSpec) -> (Rc<ScriptedTransport>, ApiClient, RefCell<Surface>) {
        let transport = Rc::new(ScriptedTransport::default());
        let client = ApiClient::new(transport.clone(), BASE);
        let mut surface = Surface::new();
        surface.add_container(spec.container());
        if let Some(element) = spec.error_element() {
            surface.add_error_element(element);
        }
        (transport, client, RefCell::new(surface))
    }

    const ACTORS_URL: &str = "http://api.test/api/top-actors?limit=5";
    const ACTORS_BODY: &str = r#"{"labels":["A","B"],"datasets":[{"label":"Films","data":[3,5]}]}"#;

    #[tokio::test]
    async fn valid_payload_renders_a_chart() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        transport.respond(ACTORS_URL, 200, ACTORS_BODY);

        assert_eq!(render(&client, &surface, &spec).await, RenderOutcome::Rendered);

        let page = surface.borrow();
        let Some(chart) = page.chart_in("TopActorsChart") else {
            panic!("expected a chart on TopActorsChart");
        };
        assert_eq!(chart.dataset_count(), 1);
        assert_eq!(chart.config.data.labels, vec!["A", "B"]);
        assert_eq!(chart.config.data.datasets[0].data, vec![3.0, 5.0]);
        assert_eq!(page.state("TopActorsChart"), WidgetState::Rendered);
        assert_eq!(page.error_text("TopActorsChartErrorMessage"), None);
    }

    #[tokio::test]
    async fn credit_list_renders_as_a_one_dataset_chart() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        transport.respond(
            ACTORS_URL,
            200,
            r#"[{"name":"Tilda Swinton","filmCount":9},{"name":"Isabelle Huppert","filmCount":7}]"#,
        );

        assert_eq!(render(&client, &surface, &spec).await, RenderOutcome::Rendered);

        let page = surface.borrow();
        let Some(chart) = page.chart_in("TopActorsChart") else {
            panic!("expected a chart on TopActorsChart");
        };
        assert_eq!(chart.dataset_count(), 1);
        assert_eq!(chart.config.data.labels, vec!["Tilda Swinton", "Isabelle Huppert"]);
        assert_eq!(chart.config.data.datasets[0].data, vec![9.0, 7.0]);
        assert_eq!(chart.config.data.datasets[0].label, "Films");
        assert_eq!(page.error_text("TopActorsChartErrorMessage"), None);
    }

    #[tokio::test]
    async fn server_error_shows_body_and_draws_nothing() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        transport.respond(ACTORS_URL, 500, "db unavailable");

        let outcome = render(&client, &surface, &spec).await;
        assert!(matches!(outcome, RenderOutcome::Failed(WidgetError::Network(_))));

        let page = surface.borrow();
        assert_eq!(page.state("TopActorsChart"), WidgetState::Failed);
        assert!(page
            .error_text("TopActorsChartErrorMessage")
            .is_some_and(|text| text.contains("db unavailable")));
        assert!(page.handle("TopActorsChart").is_none());
        assert_eq!(page.charts().live_count(), 0);
    }

    #[tokio::test]
    async fn length_mismatch_is_a_shape_error() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        transport.respond(
            ACTORS_URL,
            200,
            r#"{"labels":["A","B","C"],"datasets":[{"data":[3,5]}]}"#,
        );

        let outcome = render(&client, &surface, &spec).await;
        assert!(matches!(outcome, RenderOutcome::Failed(WidgetError::Shape(_))));
        assert!(surface.borrow().handle("TopActorsChart").is_none());
    }

    #[tokio::test]
    async fn rerender_leaves_exactly_one_chart() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        transport.respond(ACTORS_URL, 200, ACTORS_BODY);
        transport.respond(ACTORS_URL, 200, ACTORS_BODY);

        render(&client, &surface, &spec).await;
        render(&client, &surface, &spec).await;

        let page = surface.borrow();
        assert_eq!(page.charts().live_count(), 1);
        assert!(page.chart_in("TopActorsChart").is_some());
    }

    #[tokio::test]
    async fn failure_after_success_clears_the_chart() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        transport.respond(ACTORS_URL, 200, ACTORS_BODY);
        transport.fail(ACTORS_URL, "connection reset");

        render(&client, &surface, &spec).await;
        render(&client, &surface, &spec).await;

        let page = surface.borrow();
        assert_eq!(page.charts().live_count(), 0);
        assert_eq!(page.state("TopActorsChart"), WidgetState::Failed);
    }

    #[tokio::test]
    async fn missing_container_fails_without_panicking() {
        let spec = actors_chart();
        let transport = Rc::new(ScriptedTransport::default());
        let client = ApiClient::new(transport.clone(), BASE);
        let mut page = Surface::new();
        page.add_error_element("TopActorsChartErrorMessage");
        let surface = RefCell::new(page);

        let outcome = render(&client, &surface, &spec).await;

        assert!(matches!(outcome, RenderOutcome::Failed(WidgetError::Dom(_))));
        assert!(transport.requests().is_empty());
        assert!(surface
            .borrow()
            .error_text("TopActorsChartErrorMessage")
            .is_some_and(|text| text.contains("not found")));
    }

    #[tokio::test]
    async fn slow_earlier_response_is_discarded() {
        let spec = actors_chart();
        let (transport, client, surface) = setup(&spec);
        let slow = transport.hold(ACTORS_URL);
        transport.respond(
            ACTORS_URL,
            200,
            r#"{"labels":["Fast"],"datasets":[{"data":[9]}]}"#,
        );

        let first = render(&client, &surface, &spec);
        let second = render(&client, &surface, &spec);
        let release = async {
            let _ = slow.send(ok(ACTORS_BODY));
        };
        let (first, second, ()) = futures::join!(first, second, release);

        assert_eq!(first, RenderOutcome::Discarded);
        assert_eq!(second, RenderOutcome::Rendered);
        let page = surface.borrow();
        assert_eq!(
            page.chart_in("TopActorsChart").map(|chart| chart.config.data.labels.clone()),
            Some(vec!["Fast".to_string()])
        );
        assert_eq!(page.charts().live_count(), 1);
    }

    #[tokio::test]
    async fn movie_cards_use_poster_size_and_captions() {
        let spec = rewatched_list();
        let (transport, client, surface) = setup(&spec);
        transport.respond(
            "http://api.test/api/most-rewatched-movies?limit=5",
            200,
            r#"[{"title":"Heat","poster_path":"/heat.jpg","rewatch_count":3,"letterboxd_uri":"https://boxd.it/heat"},
                {"title":"Ran","poster_path":"","rewatch_count":1}]"#,
        );

        assert_eq!(render(&client, &surface, &spec).await, RenderOutcome::Rendered);

        let page = surface.borrow();
        let Some(WidgetHandle::Cards(grid)) = page.handle("mostRewatchedMoviesContainer") else {
            panic!("expected a card grid");
        };
        assert_eq!(grid.cards.len(), 2);
        assert_eq!(
            grid.cards[0].image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w185/heat.jpg")
        );
        assert_eq!(grid.cards[0].caption, "3 rewatches");
        assert_eq!(grid.cards[1].image_url, None);
        assert_eq!(grid.cards[1].caption, "1 rewatch");
    }

    #[tokio::test]
    async fn empty_list_shows_a_muted_notice() {
        let spec = rewatched_list();
        let (transport, client, surface) = setup(&spec);
        transport.respond("http://api.test/api/most-rewatched-movies?limit=5", 200, "[]");

        assert_eq!(render(&client, &surface, &spec).await, RenderOutcome::Rendered);

        let page = surface.borrow();
        assert!(page.handle("mostRewatchedMoviesContainer").is_none());
        assert_eq!(
            page.notice("mostRewatchedMoviesContainer"),
            Some(&Notice::muted("No rewatched movies found."))
        );
    }

    #[tokio::test]
    async fn stat_tiles_format_and_fail_with_error_text() {
        let hours = WidgetSpec::Stat(StatWidget {
            id: "total-hours",
            title: "Hours Watched",
            container: "totalHoursWatched",
            endpoint: Endpoint::TotalHours,
            format: StatFormat::Hours,
        });
        let (transport, client, surface) = setup(&hours);
        transport.respond(
            "http://api.test/api/stats/total-hours",
            200,
            r#"{"total_hours":1234.56}"#,
        );
        transport.respond("http://api.test/api/stats/total-hours", 503, "");

        render(&client, &surface, &hours).await;
        assert_eq!(
            surface.borrow().handle("totalHoursWatched"),
            Some(&WidgetHandle::Text("1,234.6".to_string()))
        );

        render(&client, &surface, &hours).await;
        let page = surface.borrow();
        assert!(page.handle("totalHoursWatched").is_none());
        assert_eq!(page.notice("totalHoursWatched"), Some(&Notice::error(STAT_ERROR_TEXT)));
    }
}
