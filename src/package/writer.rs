use log::info;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::descriptor::{PackageDescriptor, Resource, ResourceSchema, METADATA_KEY};
use super::PackageError;
use crate::entry::Entry;
use crate::metadata::MetadataError;

/// Write `entry` as `<basename>.json` and `<basename>.csv` into `dir`.
///
/// The directory is created when missing. Returns the descriptor path.
pub fn write_entry<P: AsRef<Path>>(
    entry: &Entry,
    dir: P,
    basename: &str,
) -> Result<PathBuf, PackageError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let csv_name = format!("{}.csv", basename);
    let csv_path = dir.join(&csv_name);
    let json_path = dir.join(format!("{}.json", basename));

    let table = entry.table();
    let mut writer = csv::Writer::from_path(&csv_path)?;
    writer.write_record(table.field_names())?;
    for index in 0..table.len() {
        let row = table.columns().iter().map(|c| c[index].to_string());
        writer.write_record(row)?;
    }
    writer.flush()?;

    let mut metadata = BTreeMap::new();
    let echemdb = serde_json::to_value(entry.metadata()).map_err(MetadataError::from)?;
    if echemdb.as_object().is_some_and(|o| !o.is_empty()) {
        metadata.insert(METADATA_KEY.to_string(), echemdb);
    }

    let mut extra = BTreeMap::new();
    extra.insert("format".to_string(), Value::from("csv"));
    extra.insert("mediatype".to_string(), Value::from("text/csv"));

    let descriptor = PackageDescriptor {
        resources: vec![Resource {
            name: basename.to_string(),
            path: csv_name,
            schema: ResourceSchema {
                fields: table.fields().to_vec(),
                extra: BTreeMap::new(),
            },
            metadata,
            extra,
        }],
        extra: BTreeMap::new(),
    };
    let mut json_writer = BufWriter::new(File::create(&json_path)?);
    serde_json::to_writer_pretty(&mut json_writer, &descriptor)?;
    json_writer.flush()?;

    info!("Wrote package {}", json_path.display());
    Ok(json_path)
}
