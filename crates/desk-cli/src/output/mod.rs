use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Column order for task list tables. Keys missing from this list follow in
/// alphabetical order.
pub const TASK_COLUMNS: &[&str] = &[
    "id", "title", "status", "priority", "category", "subject", "due", "due_date",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    render_with_columns(value, format, &[])
}

/// Like [`render`], with a preferred column order for table output.
pub fn render_with_columns<T: Serialize>(
    value: &T,
    format: OutputFormat,
    columns: &[&str],
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?, columns),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a list of task rows, using [`TASK_COLUMNS`] for tables.
pub fn output_tasks<T: Serialize>(rows: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_with_columns(rows, format, TASK_COLUMNS)?);
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value, columns: &[&str]) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items, columns)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["field", "value"], &rows, options()))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn render_array_table(items: &[Value], columns: &[&str]) -> String {
    if items.is_empty() {
        return String::from("(no tasks)");
    }

    let objects: Vec<&Map<String, Value>> = items.iter().filter_map(Value::as_object).collect();
    if objects.len() != items.len() {
        let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    let headers = ordered_headers(&objects, columns);
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = objects
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options())
}

fn ordered_headers(objects: &[&Map<String, Value>], columns: &[&str]) -> Vec<String> {
    let mut rest: Vec<String> = objects
        .iter()
        .flat_map(|map| map.keys())
        .filter(|key| !columns.contains(&key.as_str()))
        .cloned()
        .collect();
    rest.sort();
    rest.dedup();

    columns
        .iter()
        .filter(|col| objects.iter().any(|map| map.contains_key(**col)))
        .map(|col| (*col).to_string())
        .chain(rest)
        .collect()
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
