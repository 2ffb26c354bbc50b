//! Transform: committed column mappings + raw cells → schema-shaped rows.

use caseflow_ingest::CsvTable;
use caseflow_model::{CaseRecord, ColumnMapping, Row, RowId};

/// Build one [`Row`] per table row, in file order.
///
/// Mapped columns land in the record's typed fields; columns without a
/// mapping are carried in the record's `extra` side-table under their
/// normalized source header. Row ids are assigned from 1 in file order and
/// stay stable for the life of the session.
pub fn build_rows(table: &CsvTable, mappings: &[ColumnMapping]) -> Vec<Row> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| Row {
            id: (idx + 1) as RowId,
            record: build_record(cells, mappings),
            source_cells: cells.clone(),
        })
        .collect()
}

fn build_record(cells: &[String], mappings: &[ColumnMapping]) -> CaseRecord {
    let mut record = CaseRecord::default();
    for (column_idx, mapping) in mappings.iter().enumerate() {
        let value = cells.get(column_idx).cloned().unwrap_or_default();
        match &mapping.field {
            Some(field) => {
                record.set_field(field, value);
            }
            None => {
                if !value.is_empty() {
                    record.extra.insert(mapping.source_column.clone(), value);
                }
            }
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use caseflow_map::auto_map;

    #[test]
    fn mapped_and_extra_columns() {
        let table = CsvTable {
            headers: vec![
                "case_id".to_string(),
                "applicant_name".to_string(),
                "notes_internal".to_string(),
            ],
            rows: vec![vec![
                "C-1".to_string(),
                "Jane Roe".to_string(),
                "call back".to_string(),
            ]],
        };
        let mappings = auto_map(&table.headers);
        let rows = build_rows(&table, &mappings);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].record.case_id, "C-1");
        assert_eq!(rows[0].record.applicant_name, "Jane Roe");
        assert_eq!(
            rows[0].record.extra.get("notes_internal").map(String::as_str),
            Some("call back")
        );
    }
}
