use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

/// Problems found while turning a single week record into a view-model.
///
/// Each variant carries the offending `week_id` so a rejected week can be
/// traced back to the data file.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuError {
    #[error("week {week_id}: title {title:?} must contain two DD/MM dates, found {found}")]
    MalformedTitle {
        week_id: String,
        title: String,
        found: usize,
    },

    #[error("week {week_id}: {field} {value:?} is not a YYYY-MM-DD date")]
    InvalidDate {
        week_id: String,
        field: &'static str,
        value: String,
    },
}

impl MenuError {
    pub fn week_id(&self) -> &str {
        match self {
            MenuError::MalformedTitle { week_id, .. } | MenuError::InvalidDate { week_id, .. } => {
                week_id
            }
        }
    }
}
