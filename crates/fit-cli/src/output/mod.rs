//! Rendering of command responses in the selected [`OutputFormat`].

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(&serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Objects become a field/value table followed by one titled section per
/// nested object or list of objects; lists become one row per item.
fn render_table(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) => list_table(items, options),
        Value::Object(map) => {
            let mut fields = Table::new(["field", "value"]);
            let mut field_count = 0;
            let mut sections = Vec::new();

            for (key, nested) in map {
                let is_section = match nested {
                    Value::Object(_) => true,
                    Value::Array(items) => items.iter().any(Value::is_object),
                    _ => false,
                };
                if is_section {
                    sections.push(format!("{key}\n{}", render_table(nested, options)));
                } else {
                    fields.push_row(vec![key.clone(), cell(nested)]);
                    field_count += 1;
                }
            }

            if field_count > 0 {
                sections.insert(0, fields.render(options));
            }
            if sections.is_empty() {
                return String::from("(empty)");
            }
            sections.join("\n\n")
        }
        scalar => cell(scalar),
    }
}

fn list_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let mut table = Table::new(["value"]);
        for item in items {
            table.push_row(vec![cell(item)]);
        }
        return table.render(options);
    }

    // Union of keys, so sparse optional fields still get a column.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut table = Table::new(headers.iter().cloned());
    for map in items.iter().filter_map(Value::as_object) {
        table.push_row(
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect(),
        );
    }
    table.render(options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        priority: u8,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { id: "x", priority: 1 }, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"id": "x", "priority": 1}));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", priority: 1 }, OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"id":"x","priority":1}"#);
    }

    #[test]
    fn object_renders_as_field_table() {
        let out = render(&Example { id: "x", priority: 1 }, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines[2].starts_with("id"));
        assert!(lines[3].starts_with("priority"));
    }

    #[test]
    fn list_renders_row_per_item() {
        let value = vec![Example { id: "a", priority: 1 }, Example { id: "b", priority: 2 }];
        let out = render(&value, OutputFormat::Table).unwrap();
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn report_splits_into_sections() {
        let report = json!({
            "metrics": {"totalFit": 67, "status": "Stabiel"},
            "alerts": [
                {"id": "sys-overdue", "priority": 1},
                {"id": "sys-kpi-g2", "priority": 2, "goalId": "g2"}
            ]
        });
        let out = render_table(&report, TableOptions::default());
        let sections: Vec<&str> = out.split("\n\n").collect();

        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("alerts\n"));
        assert!(sections[0].contains("goalId"));
        assert!(sections[1].starts_with("metrics\n"));
        assert!(sections[1].contains("Stabiel"));
    }

    #[test]
    fn empty_values_have_placeholders() {
        assert_eq!(render_table(&json!([]), TableOptions::default()), "(no rows)");
        assert_eq!(render_table(&json!({}), TableOptions::default()), "(empty)");
    }

    #[test]
    fn string_lists_are_joined() {
        assert_eq!(cell(&json!(["Nabij", "Betrouwbaar"])), "Nabij, Betrouwbaar");
        assert_eq!(cell(&json!([1, 2])), "[1,2]");
        assert_eq!(cell(&Value::Null), "-");
    }
}
