use desk_config::GeneralConfig;
use desk_core::pipeline::{FieldFilter, FilterConfig, SortKey, ViewConfig};

use crate::cli::root_commands::ViewArgs;
use crate::commands::shared::parse::parse_value;

/// Combine command-line filters with the configured defaults.
///
/// An explicit filter that does not parse is an error. An unknown `--sort`
/// is not: it keeps the filtered order and logs a warning.
pub fn build_view(args: &ViewArgs, general: &GeneralConfig) -> anyhow::Result<ViewConfig> {
    let category = match args.category.as_deref() {
        Some(raw) => parse_value(raw)?,
        None => general.category_filter(),
    };
    let priority = match args.priority.as_deref() {
        Some(raw) => parse_value(raw)?,
        None => general.priority_filter(),
    };
    let status = match args.status.as_deref() {
        Some(raw) => parse_value(raw)?,
        None => FieldFilter::All,
    };

    let sort = match args.sort.as_deref() {
        Some(raw) => {
            let key = SortKey::parse_lenient(raw);
            if key.is_none() {
                tracing::warn!(value = %raw, "unknown sort key; listing in fetched order");
            }
            key
        }
        None => general.sort_key(),
    };

    Ok(ViewConfig {
        filter: FilterConfig {
            category,
            status,
            priority,
        },
        sort,
    })
}

/// `category=Exam status=All priority=All`
pub fn describe_filters(view: &ViewConfig) -> String {
    let filter = &view.filter;
    format!(
        "category={} status={} priority={}",
        filter.category, filter.status, filter.priority
    )
}

#[cfg(test)]
mod tests {
    use desk_config::GeneralConfig;
    use desk_core::enums::{Category, Priority, TaskStatus};
    use desk_core::pipeline::{FieldFilter, SortKey};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{build_view, describe_filters};
    use crate::cli::root_commands::ViewArgs;

    #[test]
    fn defaults_come_from_config() {
        let general = GeneralConfig {
            default_sort: "priority".into(),
            default_category: "Exam".into(),
            default_priority: "All".into(),
        };
        let view = build_view(&ViewArgs::default(), &general).unwrap();

        assert_eq!(view.sort, Some(SortKey::Priority));
        assert_eq!(view.filter.category, FieldFilter::Only(Category::Exam));
        assert_eq!(view.filter.status, FieldFilter::All);
        assert_eq!(view.filter.priority, FieldFilter::All);
    }

    #[test]
    fn flags_override_config() {
        let args = ViewArgs {
            category: Some("all".into()),
            status: Some("in progress".into()),
            priority: Some("high".into()),
            sort: Some("created".into()),
        };
        let general = GeneralConfig {
            default_category: "Project".into(),
            ..GeneralConfig::default()
        };
        let view = build_view(&args, &general).unwrap();

        assert_eq!(view.filter.category, FieldFilter::All);
        assert_eq!(view.filter.status, FieldFilter::Only(TaskStatus::InProgress));
        assert_eq!(view.filter.priority, FieldFilter::Only(Priority::High));
        assert_eq!(view.sort, Some(SortKey::Created));
    }

    #[rstest]
    #[case("title")]
    #[case("")]
    fn unknown_sort_keeps_fetched_order(#[case] raw: &str) {
        let args = ViewArgs {
            sort: Some(raw.into()),
            ..ViewArgs::default()
        };
        let view = build_view(&args, &GeneralConfig::default()).unwrap();
        assert_eq!(view.sort, None);
    }

    #[test]
    fn invalid_explicit_filter_is_an_error() {
        let args = ViewArgs {
            priority: Some("urgent".into()),
            ..ViewArgs::default()
        };
        assert!(build_view(&args, &GeneralConfig::default()).is_err());
    }

    #[test]
    fn filters_describe_in_fixed_order() {
        let args = ViewArgs {
            category: Some("personal-study".into()),
            ..ViewArgs::default()
        };
        let view = build_view(&args, &GeneralConfig::default()).unwrap();
        assert_eq!(
            describe_filters(&view),
            "category=Personal Study status=All priority=All"
        );
    }
}
