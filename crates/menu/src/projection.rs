use serde::{Deserialize, Serialize};
use time::Date;

use crate::{MenuError, WeekViewModel, YearlyMenuDataset, build_week_view_model, month_index};

/// Display switches that change ordering but never what is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectionOptions {
    /// Move the current week to the front of its month.
    #[serde(default)]
    pub promote_current_week: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleMonth {
    pub name: String,
    pub index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub name: String,
    pub index: u8,
    pub weeks: Vec<WeekViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuProjection {
    pub today: Date,
    pub months: Vec<MonthView>,
    pub has_any_active_week: bool,
    /// Active weeks that could not be turned into a view-model.
    pub rejected: Vec<MenuError>,
}

impl MenuProjection {
    pub fn weeks(&self) -> impl Iterator<Item = &WeekViewModel> {
        self.months.iter().flat_map(|month| month.weeks.iter())
    }

    pub fn current_week(&self) -> Option<&WeekViewModel> {
        self.weeks().find(|week| week.status.is_current())
    }
}

/// Months of `today`'s year that are still worth showing, in calendar order.
///
/// The janeiro slot is never shown, and neither is any month before the
/// current one.
pub fn select_visible_months(dataset: &YearlyMenuDataset, today: Date) -> Vec<VisibleMonth> {
    let Some(menu) = dataset.year(today.year()) else {
        return Vec::new();
    };

    let current_month_index = u8::from(today.month()) - 1;

    let mut months: Vec<_> = menu
        .month_names()
        .map(|name| VisibleMonth {
            name: name.to_owned(),
            index: month_index(name),
        })
        .collect();

    months.sort_by_key(|month| month.index);
    months.retain(|month| month.index >= 1 && month.index >= current_month_index);

    months
}

#[tracing::instrument(skip_all, fields(today = %today))]
pub fn project_menu(
    dataset: &YearlyMenuDataset,
    today: Date,
    options: ProjectionOptions,
) -> MenuProjection {
    let mut projection = MenuProjection {
        today,
        months: Vec::new(),
        has_any_active_week: false,
        rejected: Vec::new(),
    };

    let Some(menu) = dataset.year(today.year()) else {
        tracing::info!(year = today.year(), "no menu data for the current year");
        return projection;
    };

    for month in select_visible_months(dataset, today) {
        let records = menu.weeks(&month.name).unwrap_or_default();
        let mut weeks = Vec::with_capacity(records.len());

        for record in records.iter().filter(|record| record.is_active()) {
            projection.has_any_active_week = true;

            match build_week_view_model(record, today) {
                Ok(week) => weeks.push(week),
                Err(err) => {
                    tracing::error!(week = %err.week_id(), month = %month.name, err = %err, "week rejected");
                    projection.rejected.push(err);
                }
            }
        }

        if weeks.is_empty() {
            continue;
        }

        if options.promote_current_week {
            promote_current(&mut weeks);
        }

        projection.months.push(MonthView {
            name: month.name,
            index: month.index,
            weeks,
        });
    }

    projection
}

fn promote_current(weeks: &mut [WeekViewModel]) {
    if let Some(position) = weeks.iter().position(|week| week.status.is_current()) {
        weeks[..=position].rotate_right(1);
    }
}
