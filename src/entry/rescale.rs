use log::{debug, warn};
use std::collections::BTreeMap;

use super::{Entry, EntryError};
use crate::schema::Table;
use crate::units;

impl Entry {
    /// Express fields in other units.
    ///
    /// `targets` maps field names to target units, e.g.
    /// `[("E", "mV"), ("j", "uA / cm2")]`. Every listed column is multiplied
    /// by the conversion factor and its field's unit is replaced. Fields that
    /// are not part of the table are skipped with a warning; fields that are
    /// not listed stay untouched.
    pub fn rescale<I, K, V>(&self, targets: I) -> Result<Entry, EntryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (mut fields, mut columns) = self.table.clone().into_parts();

        for (name, target) in targets {
            let (name, target) = (name.as_ref(), target.as_ref());
            let Some(index) = self.table.index_of(name) else {
                warn!("Field '{}' is not part of entry {}, not rescaling it", name, self);
                continue;
            };

            let field = &mut fields[index];
            let current = field
                .unit
                .as_deref()
                .ok_or_else(|| EntryError::MissingUnit(name.to_string()))?;
            let factor = units::factor(current, target)?;
            debug!("Rescaling {} from {} to {} (factor {})", name, current, target, factor);

            for value in columns[index].iter_mut() {
                *value *= factor;
            }
            field.unit = Some(target.to_string());
        }

        Ok(self.with_table(Table::new(fields, columns)?))
    }

    /// Express fields in the units of the original figure.
    ///
    /// Target units are taken from `figureDescription.fields`.
    pub fn rescale_to_original(&self) -> Result<Entry, EntryError> {
        let figure_fields = self.metadata.figure_fields();
        if figure_fields.is_empty() {
            return Err(EntryError::MissingMetadata(
                "figureDescription.fields".to_string(),
            ));
        }

        let targets: BTreeMap<&str, &str> = figure_fields
            .iter()
            .map(|f| (f.name.as_str(), f.unit.as_str()))
            .collect();
        self.rescale(targets)
    }
}
