//! Defaults for the task list view.

use desk_core::enums::{Category, Priority};
use desk_core::pipeline::{FieldFilter, SortKey};
use serde::{Deserialize, Serialize};

fn default_sort() -> String {
    SortKey::DueDate.as_str().to_string()
}

fn all() -> String {
    String::from("All")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Sort key used when `--sort` is not given (`due_date`, `priority`, `created`).
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Category filter used when `--category` is not given.
    #[serde(default = "all")]
    pub default_category: String,

    /// Priority filter used when `--priority` is not given.
    #[serde(default = "all")]
    pub default_priority: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            default_category: all(),
            default_priority: all(),
        }
    }
}

impl GeneralConfig {
    /// The configured sort key. Unknown keys keep the filtered order.
    #[must_use]
    pub fn sort_key(&self) -> Option<SortKey> {
        let key = SortKey::parse_lenient(&self.default_sort);
        if key.is_none() {
            tracing::warn!(
                value = %self.default_sort,
                "unknown general.default_sort; tasks will be listed unsorted"
            );
        }
        key
    }

    /// The configured category filter. Unknown values fall back to `All`.
    #[must_use]
    pub fn category_filter(&self) -> FieldFilter<Category> {
        lenient_filter("general.default_category", &self.default_category)
    }

    /// The configured priority filter. Unknown values fall back to `All`.
    #[must_use]
    pub fn priority_filter(&self) -> FieldFilter<Priority> {
        lenient_filter("general.default_priority", &self.default_priority)
    }
}

fn lenient_filter<T>(key: &str, raw: &str) -> FieldFilter<T>
where
    T: std::str::FromStr<Err = desk_core::errors::CoreError>,
{
    raw.parse().unwrap_or_else(|error| {
        tracing::warn!(%key, %error, "ignoring invalid filter default");
        FieldFilter::All
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.sort_key(), Some(SortKey::DueDate));
        assert_eq!(config.category_filter(), FieldFilter::All);
        assert_eq!(config.priority_filter(), FieldFilter::All);
    }

    #[test]
    fn unknown_sort_falls_back_to_unsorted() {
        let config = GeneralConfig {
            default_sort: "title".into(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), None);
    }

    #[test]
    fn filters_parse_loose_spellings() {
        let config = GeneralConfig {
            default_category: "personal-study".into(),
            default_priority: "nonsense".into(),
            ..Default::default()
        };
        assert_eq!(
            config.category_filter(),
            FieldFilter::Only(Category::PersonalStudy)
        );
        assert_eq!(config.priority_filter(), FieldFilter::All);
    }
}
