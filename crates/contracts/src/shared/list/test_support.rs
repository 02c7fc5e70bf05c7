use super::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Row {
    pub id: String,
    pub code: String,
    pub name: String,
    pub qty: f64,
    pub status: String,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("id", "ID"),
    ColumnMetadata::text("code", "Code").searchable(),
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::numeric("qty", "Quantity"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for Row {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "code" => Some(FieldValue::from(&self.code)),
            "name" => Some(FieldValue::from(&self.name)),
            "qty" => Some(FieldValue::from(self.qty)),
            "status" => Some(FieldValue::from(&self.status)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn columns() -> &'static [ColumnMetadata] {
        COLUMNS
    }
}

pub(crate) fn row(id: &str, code: &str, name: &str, qty: f64, status: &str) -> Row {
    Row {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        qty,
        status: status.to_string(),
    }
}

pub(crate) fn rows() -> Vec<Row> {
    vec![
        row("1", "LAPTOP001", "Business Laptop Pro 15\"", 10.0, "Active"),
        row("2", "MONITOR002", "27\" 4K Monitor", 15.0, "Active"),
        row("3", "MOUSE003", "Wireless Mouse with USB-C", 25.0, "Inactive"),
        row("4", "CABLE005", "USB-C to HDMI Cable 2m", 30.0, "Active"),
    ]
}
