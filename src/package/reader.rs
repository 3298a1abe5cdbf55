use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::descriptor::{PackageDescriptor, METADATA_KEY};
use super::PackageError;
use crate::entry::Entry;
use crate::metadata::EntryMetadata;
use crate::schema::{Field, Table};

/// Read an entry from its `<basename>.json` descriptor.
///
/// The CSV named by the resource `path` is resolved relative to the
/// descriptor. Its header must list exactly the schema's field names in
/// order.
pub fn read_entry<P: AsRef<Path>>(descriptor_path: P) -> Result<Entry, PackageError> {
    let descriptor_path = descriptor_path.as_ref();
    info!("Reading package {}", descriptor_path.display());

    let file = File::open(descriptor_path)?;
    let descriptor: PackageDescriptor = serde_json::from_reader(BufReader::new(file))?;

    let resource = match descriptor.resources.as_slice() {
        [resource] => resource,
        resources => {
            return Err(PackageError::invalid(
                descriptor_path,
                format!("expected exactly one resource, found {}", resources.len()),
            ))
        }
    };

    let metadata = match resource.metadata.get(METADATA_KEY) {
        Some(value) => EntryMetadata::from_value(value.clone())?,
        None => EntryMetadata::new(),
    };

    let csv_path = descriptor_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&resource.path);
    let columns = read_columns(File::open(&csv_path)?, &resource.schema.fields, &csv_path)?;
    let table = Table::new(resource.schema.fields.clone(), columns)?;
    debug!(
        "Read {} rows with fields {:?}",
        table.len(),
        table.field_names()
    );

    Ok(Entry::new(&resource.name, metadata, table))
}

/// Parse CSV values into one vector per field
pub(crate) fn read_columns<R: Read>(
    reader: R,
    fields: &[Field],
    path: &Path,
) -> Result<Vec<Vec<f64>>, PackageError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let expected: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    if headers != expected {
        return Err(PackageError::invalid(
            path,
            format!("CSV header {:?} does not match schema fields {:?}", headers, expected),
        ));
    }

    let mut columns = vec![Vec::new(); fields.len()];
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        for ((cell, column), field) in record.iter().zip(columns.iter_mut()).zip(fields) {
            let value = cell.parse::<f64>().map_err(|_| PackageError::InvalidValue {
                column: field.name.clone(),
                row: index + 1,
                value: cell.to_string(),
            })?;
            column.push(value);
        }
    }

    Ok(columns)
}
