use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cardapio_menu::{MenuProjection, MonthView, project_menu, today_utc};
use serde::Deserialize;
use time::{Date, OffsetDateTime, macros::format_description};

use crate::{
    config::MenuConfig,
    data::load_dataset,
    error::AppError,
    routes::AppState,
    template::{ServerTemplate, Template, Theme},
};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Preview the page as it looks on another day.
    pub date: Option<String>,
}

impl PageQuery {
    pub fn today(&self) -> Result<Date, AppError> {
        match &self.date {
            Some(value) => Date::parse(value, format_description!("[year]-[month]-[day]"))
                .map_err(|_| AppError::InvalidDate(value.to_owned())),
            None => Ok(today_utc(OffsetDateTime::now_utc())),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct MenuTemplate {
    pub dark: bool,
    pub light: bool,
    pub today: Date,
    pub months: Vec<MonthView>,
    pub has_any_active_week: bool,
    pub data_unavailable: bool,
}

impl MenuTemplate {
    pub fn new(projection: MenuProjection, theme: Option<Theme>) -> Self {
        Self {
            dark: theme == Some(Theme::Dark),
            light: theme == Some(Theme::Light),
            today: projection.today,
            months: projection.months,
            has_any_active_week: projection.has_any_active_week,
            data_unavailable: false,
        }
    }

    pub fn unavailable(today: Date, theme: Option<Theme>) -> Self {
        Self {
            dark: theme == Some(Theme::Dark),
            light: theme == Some(Theme::Light),
            today,
            months: Vec::new(),
            has_any_active_week: false,
            data_unavailable: true,
        }
    }

    /// True whenever no week card is on the page, including when every
    /// active week was rejected.
    pub fn show_empty_message(&self) -> bool {
        self.data_unavailable || !self.has_any_active_week || self.months.is_empty()
    }
}

/// Loads the data file and projects it for `today`.
///
/// A missing or broken data file degrades to the "no data" page.
pub async fn menu_page(menu: &MenuConfig, today: Date, theme: Option<Theme>) -> MenuTemplate {
    let dataset = match load_dataset(&menu.data_path).await {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!(err = %err, "Menu data unavailable");
            return MenuTemplate::unavailable(today, theme);
        }
    };

    let projection = project_menu(&dataset, today, menu.projection_options());

    if !projection.rejected.is_empty() {
        tracing::warn!(
            rejected = projection.rejected.len(),
            "Some weeks were left out of the page"
        );
    }

    MenuTemplate::new(projection, theme)
}

#[tracing::instrument(skip_all, fields(date = ?query.date))]
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let today = match query.today() {
        Ok(today) => today,
        Err(err) => {
            return template.render_with_status(
                StatusCode::BAD_REQUEST,
                ServerTemplate {
                    dark: template.is_dark(),
                    light: template.is_light(),
                    message: err.to_string(),
                },
            );
        }
    };

    template.render(menu_page(&app.config.menu, today, template.theme).await)
}

#[tracing::instrument(skip_all, fields(date = ?query.date))]
pub async fn json(
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let today = query.today()?;
    let dataset = load_dataset(&app.config.menu.data_path).await?;

    Ok(Json(project_menu(
        &dataset,
        today,
        app.config.menu.projection_options(),
    )))
}
