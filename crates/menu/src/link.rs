use serde::Serialize;
use strum::VariantArray;
use thiserror::Error;
use url::Url;

use crate::{Category, WeekRecord};

/// Why a category button ends up disabled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLink {
    #[error("no link")]
    Missing,

    #[error("placeholder link")]
    Placeholder,

    #[error("unparseable link: {0}")]
    Unparseable(#[from] url::ParseError),

    #[error("unsupported scheme {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub category: Category,
    /// `None` renders as a disabled button.
    pub href: Option<String>,
}

impl LinkView {
    pub fn is_disabled(&self) -> bool {
        self.href.is_none()
    }
}

/// Accepts a raw link if it parses as an absolute URL. `javascript:` and
/// `data:` URLs are refused.
///
/// The original string is returned untouched so the href matches the data
/// file byte for byte.
pub fn resolve_link(raw: Option<&str>) -> Result<&str, InvalidLink> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(InvalidLink::Missing),
    };

    if raw == "#" {
        return Err(InvalidLink::Placeholder);
    }

    let url = Url::parse(raw)?;
    match url.scheme() {
        "javascript" | "data" => Err(InvalidLink::UnsupportedScheme(url.scheme().to_owned())),
        _ => Ok(raw),
    }
}

/// One entry per category, in table order.
pub fn resolve_links(record: &WeekRecord) -> Vec<LinkView> {
    Category::VARIANTS
        .iter()
        .map(|category| {
            let href = match resolve_link(record.link(category.key())) {
                Ok(href) => Some(href.to_owned()),
                Err(InvalidLink::Missing) => {
                    tracing::debug!(week = %record.week_id, category = %category, "menu link not set");
                    None
                }
                Err(reason) => {
                    tracing::warn!(
                        week = %record.week_id,
                        category = %category,
                        reason = %reason,
                        "menu link disabled"
                    );
                    None
                }
            };

            LinkView {
                category: *category,
                href,
            }
        })
        .collect()
}
