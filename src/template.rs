use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::convert::Infallible;
use strum::{AsRefStr, Display, EnumString};

pub const THEME_COOKIE: &str = "theme";
pub const SERVER_ERROR_MESSAGE: &str = "Algo deu errado, tente novamente mais tarde";

#[derive(
    EnumString, Display, AsRefStr, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Request-scoped rendering context.
pub struct Template {
    /// Saved preference, `None` follows `prefers-color-scheme`.
    pub theme: Option<Theme>,
}

impl Template {
    pub fn new(theme: Option<Theme>) -> Self {
        Self { theme }
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Some(Theme::Dark)
    }

    /// A saved light theme, which must win over a dark system preference.
    pub fn is_light(&self) -> bool {
        self.theme == Some(Theme::Light)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let theme = jar
            .get(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse::<Theme>().ok());

        Ok(Template { theme })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub dark: bool,
    pub light: bool,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub dark: bool,
    pub light: bool,
    pub message: String,
}
