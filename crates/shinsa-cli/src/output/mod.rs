use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Arrays of objects become one row per element with the union of keys as
/// columns (first-seen order). Objects become `key | value` rows, with a
/// nested array of objects (e.g. the `papers` of a parse result) rendered as
/// its own table below.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            let mut nested = Vec::new();
            let mut rows = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                        nested.push(render_rows(&items));
                    }
                    other => rows.push(vec![key, cell(&other)]),
                }
            }
            let mut out = table::render_table(&["key", "value"], &rows, table_options());
            for block in nested {
                out.push_str("\n\n");
                out.push_str(&block);
            }
            Ok(out)
        }
        scalar => Ok(cell(&scalar)),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers: Vec<String> = Vec::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
        return table::render_table(&["value"], &rows, table_options());
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    table::render_table(&header_refs, &rows, table_options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.replace(['\r', '\n'], " "),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        state: &'static str,
    }

    #[derive(Serialize)]
    struct Summary {
        count: usize,
        rows: Vec<Row>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Row { id: "P1", state: "saved" }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["state"], "saved");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Row { id: "P1", state: "saved" }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn array_renders_one_row_per_item() {
        let rows = vec![Row { id: "P1", state: "saved" }, Row { id: "P2", state: "unreviewed" }];
        let out = render(&rows, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("state"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn nested_rows_render_below_summary() {
        let summary = Summary {
            count: 1,
            rows: vec![Row { id: "P1", state: "finalized" }],
        };
        let out = render(&summary, OutputFormat::Table).unwrap();
        assert!(out.starts_with("key"));
        assert!(out.contains("count"));
        assert!(out.contains("P1"));
    }

    #[test]
    fn empty_array_has_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }
}
