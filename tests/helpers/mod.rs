use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use cardapio::{
    AppState, Config,
    config::{LoggingConfig, MenuConfig, ServerConfig},
};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const MENU_JSON: &str = r##"{
  "2025": {
    "fevereiro": [
      {
        "weekId": "semana-fev-2",
        "title": "Semana 17/02 a 21/02",
        "startDate": "2025-02-17",
        "endDate": "2025-02-21",
        "links": { "etec": "https://example.com/fev2-etec.pdf" }
      }
    ],
    "março": [
      {
        "weekId": "semana-mar-1",
        "title": "Semana 10/03 a 14/03",
        "startDate": "2025-03-10",
        "endDate": "2025-03-14",
        "links": {
          "creches": "https://example.com/mar1-creches.pdf",
          "etec": "#"
        }
      },
      {
        "weekId": "semana-mar-2",
        "title": "Semana 17/03 a 21/03",
        "startDate": "2025-03-17",
        "endDate": "2025-03-21",
        "links": {}
      },
      {
        "weekId": "semana-feriado",
        "title": "Semana 24/03 a 28/03",
        "startDate": "2025-03-24",
        "endDate": "2025-03-28",
        "active": false,
        "links": {}
      }
    ]
  }
}"##;

/// App backed by a data file in a fresh temp dir. Keep the `TempDir`
/// alive for as long as the router is used.
pub fn app_with_data(contents: Option<&str>) -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let data_path = dir.child("menu-links.json");

    if let Some(contents) = contents {
        std::fs::write(&data_path, contents).unwrap();
    }

    (cardapio::app(AppState { config: config(data_path) }), dir)
}

pub fn config(data_path: PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        menu: MenuConfig {
            data_path,
            promote_current_week: false,
        },
        logging: LoggingConfig::default(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
