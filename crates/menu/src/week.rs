use serde::Serialize;
use strum::{AsRefStr, Display};
use time::{
    Date, OffsetDateTime, UtcOffset,
    macros::{format_description, time},
};

use crate::{LinkView, MenuError, Result, TitleMarkup, WeekRecord, annotate_title, resolve_links};

#[derive(Display, AsRefStr, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    Current,
    Past,
    Future,
}

impl WeekStatus {
    /// Classifies `today` against a week running from `start` 00:00:00 UTC
    /// to `end` 23:59:59 UTC.
    pub fn classify(today: Date, start: Date, end: Date) -> Self {
        let today = today.midnight().assume_utc();
        let start = start.midnight().assume_utc();
        let end = end.with_time(time!(23:59:59)).assume_utc();

        if start <= today && today <= end {
            WeekStatus::Current
        } else if today > end {
            WeekStatus::Past
        } else {
            WeekStatus::Future
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, WeekStatus::Current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekViewModel {
    pub week_id: String,
    pub title: TitleMarkup,
    pub status: WeekStatus,
    pub start_date: Date,
    pub end_date: Date,
    pub links: Vec<LinkView>,
}

/// Normalizes a clock reading to the UTC calendar day the projection uses.
pub fn today_utc(now: OffsetDateTime) -> Date {
    now.to_offset(UtcOffset::UTC).date()
}

pub fn parse_date(week_id: &str, field: &'static str, value: &str) -> Result<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| {
        MenuError::InvalidDate {
            week_id: week_id.to_owned(),
            field,
            value: value.to_owned(),
        }
    })
}

pub fn build_week_view_model(record: &WeekRecord, today: Date) -> Result<WeekViewModel> {
    let start_date = parse_date(&record.week_id, "startDate", &record.start_date)?;
    let end_date = parse_date(&record.week_id, "endDate", &record.end_date)?;
    let title = annotate_title(&record.week_id, &record.title, start_date, end_date)?;

    Ok(WeekViewModel {
        week_id: record.week_id.to_owned(),
        title,
        status: WeekStatus::classify(today, start_date, end_date),
        start_date,
        end_date,
        links: resolve_links(record),
    })
}
