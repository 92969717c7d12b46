use std::path::Path;

use serde_json::Value;

use crate::api::CreateFields;
use crate::error::DashfwError;

/// Reserved column naming the group a row's object should join. It is
/// consumed by the driver and never forwarded as an object-creation field.
pub const GROUP_COLUMN: &str = "_group_name";

/// One row of the object/group definition table.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRow {
    /// The object's display name, used for logging and catalog registration.
    pub name: String,
    /// Target group from the reserved column, when present and non-empty.
    pub group_name: Option<String>,
    /// Every other column, forwarded verbatim as creation fields.
    pub fields: CreateFields,
}

/// Read the object/group definition table.
///
/// Columns are free-form key/value pairs except the reserved group column.
/// Empty cells are omitted from the creation payload so that rows of
/// different object types can share one header row. A missing or malformed
/// file is fatal; it aborts the run before any remote call.
pub fn read_object_table(path: &Path) -> Result<Vec<ObjectRow>, DashfwError> {
    let table_err = |source| DashfwError::Table {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(table_err)?;
    let headers = reader.headers().map_err(table_err)?.clone();

    if !headers.iter().any(|h| h == "name") {
        return Err(DashfwError::MissingColumn {
            path: path.to_path_buf(),
            column: "name".to_string(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(table_err)?;

        let mut name = String::new();
        let mut group_name = None;
        let mut fields = CreateFields::new();

        for (header, cell) in headers.iter().zip(record.iter()) {
            if header == GROUP_COLUMN {
                if !cell.is_empty() {
                    group_name = Some(cell.to_string());
                }
                continue;
            }
            if header == "name" {
                name = cell.to_string();
            }
            if !cell.is_empty() {
                fields.insert(header.to_string(), Value::String(cell.to_string()));
            }
        }

        rows.push(ObjectRow {
            name,
            group_name,
            fields,
        });
    }

    Ok(rows)
}
