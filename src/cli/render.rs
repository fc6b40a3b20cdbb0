use std::path::PathBuf;

use anyhow::Result;
use askama::Template as _;
use cardapio::{
    data::load_dataset,
    routes::index::{MenuTemplate, PageQuery},
};
use cardapio_menu::project_menu;

/// Writes the page a visitor would get on `date` to `output`, or stdout.
#[tracing::instrument(skip(config))]
pub async fn render(
    config: cardapio::Config,
    date: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let today = PageQuery { date }.today()?;
    let dataset = load_dataset(&config.menu.data_path).await?;
    let projection = project_menu(&dataset, today, config.menu.projection_options());

    for err in &projection.rejected {
        tracing::warn!(week = err.week_id(), "{err}");
    }

    let html = MenuTemplate::new(projection, None).render()?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            tracing::info!(path = %path.display(), "Menu page written");
        }
        None => println!("{html}"),
    }

    Ok(())
}
