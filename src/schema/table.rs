use std::collections::HashSet;

use super::{Field, SchemaError};

/// Ordered set of equally long numeric columns, each described by a [`Field`].
///
/// A table is never modified in place by the transformations; they build a
/// new one through [`Table::replace_column`] and friends, which validate the
/// shape again before returning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    fields: Vec<Field>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table, checking that names are unique and lengths agree
    pub fn new(fields: Vec<Field>, columns: Vec<Vec<f64>>) -> Result<Self, SchemaError> {
        if fields.len() != columns.len() {
            return Err(SchemaError::ArityMismatch {
                fields: fields.len(),
                columns: columns.len(),
            });
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            for (field, column) in fields.iter().zip(&columns) {
                if column.len() != expected {
                    return Err(SchemaError::LengthMismatch {
                        column: field.name.clone(),
                        expected,
                        found: column.len(),
                    });
                }
            }
        }

        Ok(Self { fields, columns })
    }

    /// Build a table from `(field, column)` pairs
    pub fn from_pairs(pairs: Vec<(Field, Vec<f64>)>) -> Result<Self, SchemaError> {
        let (fields, columns): (Vec<Field>, Vec<Vec<f64>>) = pairs.into_iter().unzip();
        Self::new(fields, columns)
    }

    /// Field descriptors in column order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Column values in field order
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Field names in column order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the named field
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Whether a field with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Field descriptor by name
    pub fn field(&self, name: &str) -> Result<&Field, SchemaError> {
        self.index_of(name)
            .map(|i| &self.fields[i])
            .ok_or_else(|| SchemaError::FieldNotFound(name.to_string()))
    }

    /// Column values by name
    pub fn column(&self, name: &str) -> Result<&[f64], SchemaError> {
        self.index_of(name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| SchemaError::FieldNotFound(name.to_string()))
    }

    /// Iterate over `(field, column)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &[f64])> {
        self.fields
            .iter()
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Row `index` as values in field order
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index]).collect())
    }

    /// New table with the named field's descriptor and values replaced
    pub fn replace_column(
        &self,
        name: &str,
        field: Field,
        values: Vec<f64>,
    ) -> Result<Self, SchemaError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| SchemaError::FieldNotFound(name.to_string()))?;

        let mut fields = self.fields.clone();
        let mut columns = self.columns.clone();
        fields[index] = field;
        columns[index] = values;

        Self::new(fields, columns)
    }

    /// New table with extra columns appended
    pub fn with_columns(&self, pairs: Vec<(Field, Vec<f64>)>) -> Result<Self, SchemaError> {
        let mut fields = self.fields.clone();
        let mut columns = self.columns.clone();
        for (field, column) in pairs {
            fields.push(field);
            columns.push(column);
        }
        Self::new(fields, columns)
    }

    /// Split into descriptors and columns
    pub fn into_parts(self) -> (Vec<Field>, Vec<Vec<f64>>) {
        (self.fields, self.columns)
    }
}
