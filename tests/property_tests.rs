//! Property tests for the transformations

use echemtab::electrochemistry::{self, Registry, RHE, SHE};
use echemtab::entry::Entry;
use echemtab::metadata::EntryMetadata;
use echemtab::schema::{Field, Table};
use echemtab::units;
use proptest::prelude::*;

fn entry(values: Vec<f64>) -> Entry {
    let table = Table::from_pairs(vec![
        (Field::new("E").with_unit("V").with_reference("SHE"), values.clone()),
        (Field::new("j").with_unit("A / m2"), values),
    ])
    .unwrap();
    Entry::new("generated", EntryMetadata::new(), table)
}

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, 1..50)
}

const UNIT_PAIRS: &[(&str, &str, &str)] = &[
    ("E", "V", "mV"),
    ("E", "V", "kV"),
    ("j", "A / m2", "uA / cm2"),
    ("j", "A / m2", "mA/cm^2"),
    ("j", "A / m2", "nA cm-2"),
];

proptest! {
    /// Rescaling there and back restores the values
    #[test]
    fn test_rescale_roundtrip(values in finite_values(), pair in prop::sample::select(UNIT_PAIRS)) {
        let (field, original, target) = pair;
        let entry = entry(values);
        let restored = entry
            .rescale([(field, target)])
            .unwrap()
            .rescale([(field, original)])
            .unwrap();

        prop_assert_eq!(restored.field_unit(field).unwrap(), Some(original));
        for (a, b) in restored.column(field).unwrap().iter().zip(entry.column(field).unwrap()) {
            prop_assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0));
        }
    }

    /// Two offsets add up to one offset of their sum
    #[test]
    fn test_offset_additivity(values in finite_values(), a in -10.0..10.0f64, b_mv in -1.0e4..1.0e4f64) {
        let entry = entry(values);
        let twice = entry
            .add_offset("E", a, Some("V"))
            .unwrap()
            .add_offset("E", b_mv, Some("mV"))
            .unwrap();
        let once = entry.add_offset("E", a + b_mv / 1000.0, Some("V")).unwrap();

        let total = twice.field("E").unwrap().offset.clone().unwrap();
        prop_assert_eq!(total.unit.as_str(), "V");
        prop_assert!((total.value - (a + b_mv / 1000.0)).abs() < 1e-9);
        for (x, y) in twice.column("E").unwrap().iter().zip(once.column("E").unwrap()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    /// Converting to another scale and back is the identity
    #[test]
    fn test_reference_roundtrip(values in finite_values(), ph in 0.0..14.0f64) {
        let names = Registry::global().names();
        let entry = entry(values);
        for name in names {
            let restored = entry
                .rescale_reference(None, name, Some(ph))
                .unwrap()
                .rescale_reference(None, SHE, Some(ph))
                .unwrap();
            for (x, y) in restored.column("E").unwrap().iter().zip(entry.column("E").unwrap()) {
                prop_assert!((x - y).abs() < 1e-9);
            }
        }
    }

    /// The RHE scale moves linearly with pH
    #[test]
    fn test_rhe_ph_linearity(p1 in 0.0..14.0f64, p2 in 0.0..14.0f64) {
        let s1 = electrochemistry::shift(SHE, RHE, Some(p1)).unwrap();
        let s2 = electrochemistry::shift(SHE, RHE, Some(p2)).unwrap();
        prop_assert!((s2 - s1 + electrochemistry::NERNST_SLOPE * (p2 - p1)).abs() < 1e-12);
    }

    /// Conversion factors compose
    #[test]
    fn test_factor_composition(value in -1.0e6..1.0e6f64) {
        let direct = units::convert(value, "mA / cm2", "A / m2").unwrap();
        let stepwise = units::convert(
            units::convert(value, "mA / cm2", "uA / cm2").unwrap(),
            "uA / cm2",
            "A / m2",
        )
        .unwrap();
        prop_assert!((direct - stepwise).abs() <= 1e-9 * direct.abs().max(1.0));
    }
}
