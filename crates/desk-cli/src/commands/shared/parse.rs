use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;
use desk_core::errors::CoreError;

/// Parse one of the closed task enumerations (or a `FieldFilter` of one).
///
/// The core parser already names the field in its error.
pub fn parse_value<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    Ok(raw.parse::<T>()?)
}

/// Parse a calendar date given as `YYYY-MM-DD`.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid {field} '{raw}': expected YYYY-MM-DD"))
}

pub fn parse_optional_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Empty text fields are stored as absent.
pub fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use desk_core::enums::{Category, TaskStatus};
    use desk_core::pipeline::FieldFilter;
    use pretty_assertions::assert_eq;

    use super::{non_blank, parse_date, parse_value};

    #[test]
    fn parses_loose_enum_spelling() {
        let status: TaskStatus = parse_value("in-progress").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn parses_filter_wildcard() {
        let filter: FieldFilter<Category> = parse_value("all").expect("filter should parse");
        assert_eq!(filter, FieldFilter::All);
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_value::<TaskStatus>("done").expect_err("should fail");
        assert!(err.to_string().contains("Invalid status value: 'done'"));
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2026-10-30", "due").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 30).unwrap()
        );
    }

    #[test]
    fn rejects_other_date_shapes() {
        let err = parse_date("30/10/2026", "due").expect_err("should fail");
        assert!(format!("{err:#}").contains("invalid due '30/10/2026'"));
    }

    #[test]
    fn blank_text_is_dropped() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" Chemistry ")).as_deref(), Some("Chemistry"));
        assert_eq!(non_blank(None), None);
    }
}
