/// Table formatting for query answers using comfy-table

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::collections::BTreeSet;
use tdb_client::ConceptMap;

/// Format answers as a table, one column per query variable
///
/// Variables missing from an answer are shown as "-".
pub fn format_records_table(records: &[ConceptMap]) -> String {
    if records.is_empty() {
        return "No answers".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let columns: BTreeSet<&str> = records.iter().flat_map(|r| r.variables()).collect();

    table.set_header(columns.iter().map(|var| Cell::new(format!("${}", var))));

    for record in records {
        let row = columns.iter().map(|var| match record.get(var) {
            Some(concept) => Cell::new(concept.to_string()),
            None => Cell::new("-"),
        });
        table.add_row(row);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tdb_client::{Concept, Encoding, Thing, Type, Value, ValueType};

    fn named(label: &str, name: &str) -> Concept {
        Concept::Thing(Thing {
            iid: vec![1],
            thing_type: Some(Type {
                label: label.to_string(),
                scope: String::new(),
                encoding: Encoding::AttributeType,
                value_type: Some(ValueType::String),
                root: false,
            }),
            value: Some(Value::String(name.to_string())),
            inferred: false,
        })
    }

    fn record(bindings: &[(&str, Concept)]) -> ConceptMap {
        ConceptMap::new(
            bindings
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_format_empty_records() {
        assert_eq!(format_records_table(&[]), "No answers");
    }

    #[test]
    fn test_format_records() {
        let records = vec![
            record(&[("n", named("name", "Alice"))]),
            record(&[("n", named("name", "Bob"))]),
        ];

        let output = format_records_table(&records);
        assert!(output.contains("$n"));
        assert!(output.contains("name:\"Alice\""));
        assert!(output.contains("name:\"Bob\""));
    }

    #[test]
    fn test_missing_variable_shown_as_dash() {
        let records = vec![
            record(&[("n", named("name", "Alice")), ("e", named("email", "a@x"))]),
            record(&[("n", named("name", "Bob"))]),
        ];

        let output = format_records_table(&records);
        assert!(output.contains("$e"));
        assert!(output.contains(" - "));
    }
}
