use log::{debug, info, warn};

use super::{Entry, EntryError};
use crate::electrochemistry;
use crate::schema;
use crate::units;

impl Entry {
    /// Move a potential field to another reference electrode scale.
    ///
    /// The field defaults to `E`, then `U`. Conversions from or to RHE need
    /// a pH; when `ph` is `None` the electrolyte pH of the metadata is used.
    /// The `offset` annotation is not touched.
    pub fn rescale_reference(
        &self,
        field_name: Option<&str>,
        new_reference: &str,
        ph: Option<f64>,
    ) -> Result<Entry, EntryError> {
        let field_name = self.field_or_default(field_name, schema::potential_fallbacks())?;
        let mut field = self.field(field_name)?.clone();

        let old_reference = field
            .reference
            .clone()
            .ok_or_else(|| EntryError::NoReference(field_name.to_string()))?;

        if old_reference == new_reference {
            info!(
                "Field '{}' is already referenced to {}, nothing to do",
                field_name, new_reference
            );
            return Ok(self.clone());
        }

        let ph = ph.or_else(|| self.metadata.ph());
        let shift = electrochemistry::shift(&old_reference, new_reference, ph)?;

        let unit = match field.unit.as_deref() {
            Some(unit) => unit,
            None => {
                warn!("Field '{}' has no unit, assuming V", field_name);
                "V"
            }
        };
        let shift = units::convert(shift, "V", unit)?;
        debug!(
            "Shifting {} from {} to {} by {} {}",
            field_name, old_reference, new_reference, shift, unit
        );

        let values = self
            .column(field_name)?
            .iter()
            .map(|v| v + shift)
            .collect();
        field.reference = Some(new_reference.to_string());

        let table = self.table.replace_column(field_name, field, values)?;
        Ok(self.with_table(table))
    }
}
