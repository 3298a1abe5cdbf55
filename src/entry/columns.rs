use log::warn;
use serde_json::Value;
use std::collections::BTreeMap;

use super::{Entry, EntryError};
use crate::schema::{Field, Table};

impl Entry {
    /// Rename fields.
    ///
    /// Names missing from `renames` stay as they are. With
    /// `keep_original_name_as` set, each renamed field records its previous
    /// name under that key unless the key is already present.
    pub fn rename_fields(
        &self,
        renames: &BTreeMap<String, String>,
        keep_original_name_as: Option<&str>,
    ) -> Result<Entry, EntryError> {
        if renames.is_empty() {
            warn!("No renaming pattern was provided for {}", self);
            return Ok(self.clone());
        }

        let (mut fields, columns) = self.table.clone().into_parts();
        for field in fields.iter_mut() {
            let Some(new_name) = renames.get(&field.name) else {
                continue;
            };
            if let Some(key) = keep_original_name_as {
                let original = Value::String(field.name.clone());
                field.extra.entry(key.to_string()).or_insert(original);
            }
            field.name = new_name.clone();
        }

        Ok(self.with_table(Table::new(fields, columns)?))
    }

    /// Append columns to the table
    pub fn add_columns(&self, columns: Vec<(Field, Vec<f64>)>) -> Result<Entry, EntryError> {
        Ok(self.with_table(self.table.with_columns(columns)?))
    }
}
