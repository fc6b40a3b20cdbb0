use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use time::Date;

use crate::{MenuError, Result};

static DAY_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}/[0-9]{2}").expect("valid DD/MM pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TitleSegment {
    Text { text: String },
    Date { display: String, datetime: Date },
}

impl TitleSegment {
    pub fn text(&self) -> &str {
        match self {
            TitleSegment::Text { text } => text,
            TitleSegment::Date { display, .. } => display,
        }
    }

    /// Machine-readable date for annotated segments.
    pub fn datetime(&self) -> Option<Date> {
        match self {
            TitleSegment::Text { .. } => None,
            TitleSegment::Date { datetime, .. } => Some(*datetime),
        }
    }
}

/// Week title split into plain text and date-annotated pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitleMarkup(Vec<TitleSegment>);

impl TitleMarkup {
    pub fn segments(&self) -> &[TitleSegment] {
        &self.0
    }

    pub fn annotated(&self) -> impl Iterator<Item = (&str, Date)> {
        self.0.iter().filter_map(|segment| match segment {
            TitleSegment::Date { display, datetime } => Some((display.as_str(), *datetime)),
            TitleSegment::Text { .. } => None,
        })
    }

    pub fn plain_text(&self) -> String {
        self.0.iter().map(TitleSegment::text).collect()
    }
}

/// Annotates the first `DD/MM` in `title` with `start` and the second with
/// `end`. Anything after the second match stays plain text.
pub fn annotate_title(week_id: &str, title: &str, start: Date, end: Date) -> Result<TitleMarkup> {
    let matches: Vec<_> = DAY_MONTH.find_iter(title).take(2).collect();

    let [first, second] = matches.as_slice() else {
        return Err(MenuError::MalformedTitle {
            week_id: week_id.to_owned(),
            title: title.to_owned(),
            found: matches.len(),
        });
    };

    let mut segments = Vec::with_capacity(5);
    let mut cursor = 0;

    for (found, datetime) in [(first, start), (second, end)] {
        if found.start() > cursor {
            segments.push(TitleSegment::Text {
                text: title[cursor..found.start()].to_owned(),
            });
        }
        segments.push(TitleSegment::Date {
            display: found.as_str().to_owned(),
            datetime,
        });
        cursor = found.end();
    }

    if cursor < title.len() {
        segments.push(TitleSegment::Text {
            text: title[cursor..].to_owned(),
        });
    }

    Ok(TitleMarkup(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn annotates_both_dates_in_order() {
        let markup = annotate_title(
            "s1",
            "Semana de 03/02 a 09/02",
            date!(2025 - 02 - 03),
            date!(2025 - 02 - 09),
        )
        .unwrap();

        assert_eq!(
            markup.segments(),
            [
                TitleSegment::Text {
                    text: "Semana de ".to_owned()
                },
                TitleSegment::Date {
                    display: "03/02".to_owned(),
                    datetime: date!(2025 - 02 - 03)
                },
                TitleSegment::Text {
                    text: " a ".to_owned()
                },
                TitleSegment::Date {
                    display: "09/02".to_owned(),
                    datetime: date!(2025 - 02 - 09)
                },
            ]
        );
        assert_eq!(markup.plain_text(), "Semana de 03/02 a 09/02");
    }

    #[test]
    fn identical_displays_are_annotated_by_position() {
        let markup = annotate_title(
            "s1",
            "03/02 a 03/02",
            date!(2025 - 02 - 03),
            date!(2026 - 02 - 03),
        )
        .unwrap();

        let annotated: Vec<_> = markup.annotated().collect();
        assert_eq!(
            annotated,
            [
                ("03/02", date!(2025 - 02 - 03)),
                ("03/02", date!(2026 - 02 - 03))
            ]
        );
    }

    #[test]
    fn third_date_stays_plain() {
        let markup = annotate_title(
            "s1",
            "01/04 a 05/04 (feriado 03/04)",
            date!(2025 - 04 - 01),
            date!(2025 - 04 - 05),
        )
        .unwrap();

        assert_eq!(markup.annotated().count(), 2);
        assert_eq!(
            markup.segments().last().map(TitleSegment::text),
            Some(" (feriado 03/04)")
        );
    }

    #[test]
    fn single_date_is_malformed() {
        let err = annotate_title(
            "semana-7",
            "Semana de 03/02",
            date!(2025 - 02 - 03),
            date!(2025 - 02 - 09),
        )
        .unwrap_err();

        assert_eq!(
            err,
            MenuError::MalformedTitle {
                week_id: "semana-7".to_owned(),
                title: "Semana de 03/02".to_owned(),
                found: 1,
            }
        );
        assert_eq!(err.week_id(), "semana-7");
    }
}
