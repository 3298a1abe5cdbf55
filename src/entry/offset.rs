use log::{debug, warn};

use super::{Entry, EntryError};
use crate::schema::Offset;
use crate::units;

impl Entry {
    /// Add `value` to every entry of the named field.
    ///
    /// `unit` is the unit of `value`. When it is omitted the field's own unit
    /// is assumed. The field's `offset` annotation accumulates the total
    /// shift applied so far, expressed in the field's unit.
    ///
    /// A field without a unit accepts an offset only when `unit` is given. The
    /// first offset is added as is and recorded in `unit`; later offsets are
    /// converted into that recorded unit.
    pub fn add_offset(
        &self,
        field_name: &str,
        value: f64,
        unit: Option<&str>,
    ) -> Result<Entry, EntryError> {
        let field_name = self.resolve_field_name(field_name)?;
        let mut field = self.field(field_name)?.clone();

        let (delta, offset_unit) = match (field.unit.as_deref(), unit) {
            (None, None) => return Err(EntryError::MissingUnit(field_name.to_string())),
            (Some(field_unit), None) => {
                warn!(
                    "No unit given for the offset, assuming the unit of field '{}' ({})",
                    field_name, field_unit
                );
                (value, field_unit.to_string())
            }
            (Some(field_unit), Some(unit)) => {
                (units::convert(value, unit, field_unit)?, field_unit.to_string())
            }
            (None, Some(unit)) => match &field.offset {
                Some(offset) => (units::convert(value, unit, &offset.unit)?, offset.unit.clone()),
                None => (value, unit.to_string()),
            },
        };

        let previous = match &field.offset {
            Some(offset) => units::convert(offset.value, &offset.unit, &offset_unit)?,
            None => 0.0,
        };
        field.offset = Some(Offset {
            value: previous + delta,
            unit: offset_unit,
        });
        debug!("Offset of {} is now {:?}", field_name, field.offset);

        let values = self
            .column(field_name)?
            .iter()
            .map(|v| v + delta)
            .collect();
        let table = self.table.replace_column(field_name, field, values)?;
        Ok(self.with_table(table))
    }
}
