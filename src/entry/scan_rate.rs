use log::debug;

use super::{Entry, EntryError};
use crate::schema::{self, ScalingFactor};
use crate::units;

impl Entry {
    /// Normalize a current field to another scan rate.
    ///
    /// The field defaults to `j`, then `I`. Values are scaled by the ratio of
    /// the new scan rate to the one recorded in
    /// `figureDescription.scanRate`. The field's `scalingFactor` always holds
    /// that ratio relative to the recorded data, so rescaling twice does not
    /// compound.
    pub fn rescale_scan_rate(
        &self,
        field_name: Option<&str>,
        value: f64,
        unit: &str,
    ) -> Result<Entry, EntryError> {
        let field_name = self.field_or_default(field_name, schema::current_fallbacks())?;
        let mut field = self.field(field_name)?.clone();

        let original = self.metadata.scan_rate().ok_or_else(|| {
            EntryError::MissingMetadata("figureDescription.scanRate".to_string())
        })?;
        let original_rate = units::convert(original.value, &original.unit, unit)?;
        if original_rate == 0.0 || !original_rate.is_finite() {
            return Err(EntryError::InvalidScanRate(original.value));
        }

        if value == 0.0 || !value.is_finite() {
            return Err(EntryError::InvalidScanRate(value));
        }
        let previous = field.scaling();
        if previous == 0.0 || !previous.is_finite() {
            return Err(EntryError::InvalidScalingFactor(previous));
        }

        let factor = value / original_rate;
        let relative = factor / previous;
        debug!(
            "Scaling {} by {} ({} {} vs {} {})",
            field_name, relative, value, unit, original.value, original.unit
        );

        let values = self
            .column(field_name)?
            .iter()
            .map(|v| v * relative)
            .collect();
        field.scaling_factor = Some(ScalingFactor { value: factor });

        let table = self.table.replace_column(field_name, field, values)?;
        Ok(self.with_table(table))
    }
}
