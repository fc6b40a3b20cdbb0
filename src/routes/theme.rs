use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::template::{THEME_COOKIE, Template, Theme};

#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    /// Theme the browser is showing, sent when no preference is saved yet.
    pub current: Option<Theme>,
}

pub async fn toggle(
    template: Template,
    jar: CookieJar,
    Form(form): Form<ThemeForm>,
) -> impl IntoResponse {
    let next = template
        .theme
        .or(form.current)
        .unwrap_or_default()
        .toggled();

    tracing::debug!(theme = %next, "Theme switched");

    let cookie = Cookie::build((THEME_COOKIE, next.to_string()))
        .path("/")
        .max_age(time::Duration::days(365))
        .same_site(SameSite::Lax);

    (jar.add(cookie), Redirect::to("/"))
}
