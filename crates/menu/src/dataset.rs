use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

/// One calendar week of menu links, as written in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub week_id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub links: BTreeMap<String, Option<String>>,
}

impl WeekRecord {
    /// Only an explicit `"active": false` hides a week.
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    pub fn link(&self, key: &str) -> Option<&str> {
        self.links.get(key).and_then(|link| link.as_deref())
    }
}

/// Month name to week list for a single year, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearMenu {
    months: Vec<(String, Vec<WeekRecord>)>,
}

impl YearMenu {
    pub fn month_names(&self) -> impl Iterator<Item = &str> {
        self.months.iter().map(|(name, _)| name.as_str())
    }

    pub fn weeks(&self, month_name: &str) -> Option<&[WeekRecord]> {
        self.months
            .iter()
            .find(|(name, _)| name == month_name)
            .map(|(_, weeks)| weeks.as_slice())
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    fn insert(&mut self, month_name: String, weeks: Vec<WeekRecord>) {
        // A repeated key keeps its first position and takes the last value.
        match self.months.iter_mut().find(|(name, _)| *name == month_name) {
            Some((_, existing)) => *existing = weeks,
            None => self.months.push((month_name, weeks)),
        }
    }
}

impl<'de> Deserialize<'de> for YearMenu {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct YearMenuVisitor;

        impl<'de> Visitor<'de> for YearMenuVisitor {
            type Value = YearMenu;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of month names to week lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut menu = YearMenu::default();
                while let Some((month_name, weeks)) =
                    access.next_entry::<String, Vec<WeekRecord>>()?
                {
                    menu.insert(month_name, weeks);
                }
                Ok(menu)
            }
        }

        deserializer.deserialize_map(YearMenuVisitor)
    }
}

/// The whole data file: four-digit year to that year's menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct YearlyMenuDataset(HashMap<String, YearMenu>);

impl YearlyMenuDataset {
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn from_json_str(value: &str) -> serde_json::Result<Self> {
        serde_json::from_str(value)
    }

    pub fn year(&self, year: i32) -> Option<&YearMenu> {
        self.0.get(&format!("{year:04}"))
    }
}
