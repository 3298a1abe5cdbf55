use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_preferred_value() {
    let electrode = ReferenceElectrode::get("Ag/AgCl-sat").unwrap();
    assert_eq!(electrode.preferred_value().unwrap(), 0.197);
    assert_eq!(
        electrode.full_name,
        "KCl Saturated silver / silver chloride electrode"
    );
}

#[test]
fn test_preferred_among_multiple_literature_values() {
    let electrode = ReferenceElectrode::get("Hg/HgO-0.1M-NaOH").unwrap();
    assert_eq!(electrode.entries.len(), 4);
    let preferred = electrode.preferred_entry().unwrap();
    assert_eq!(preferred.value, 0.1485);
    assert_eq!(preferred.uncertainty, Some(0.0018));
}

#[test]
fn test_shift_with_potential() {
    let electrode = ReferenceElectrode::get("Ag/AgCl-sat").unwrap();
    assert_close(electrode.shift("SHE", None, None).unwrap(), -0.197);
    assert_close(electrode.shift("SHE", Some(0.55), None).unwrap(), 0.353);
    assert_close(electrode.shift("SHE", Some(0.42), None).unwrap(), 0.223);
}

#[test]
fn test_ph_has_no_effect_without_rhe() {
    let electrode = ReferenceElectrode::get("Ag/AgCl-sat").unwrap();
    assert_close(
        electrode.shift("Ag/AgCl-sat", Some(0.55), Some(7.0)).unwrap(),
        0.55,
    );
    assert_close(
        shift("Ag/AgCl-sat", "CE-sat", Some(3.0)).unwrap(),
        shift("Ag/AgCl-sat", "CE-sat", None).unwrap(),
    );
}

#[test]
fn test_rhe_conversions() {
    assert_close(shift("SHE", "RHE", Some(7.0)).unwrap(), -0.4137);
    assert_close(shift("Ag/AgCl-sat", "RHE", Some(7.0)).unwrap(), -0.6107);
    assert_close(shift("Ag/AgCl-sat", "RHE", Some(5.0)).unwrap(), -0.4925);
    assert_close(convert(0.55, "SHE", "RHE", Some(7.0)).unwrap(), 0.1363);
    assert_close(convert(0.55, "RHE", "SHE", Some(0.0)).unwrap(), 0.55);
    assert_close(convert(0.55, "RHE", "SHE", Some(7.0)).unwrap(), 0.9637);
    assert_close(convert(0.55, "RHE", "Ag/AgCl-sat", Some(7.0)).unwrap(), 1.1607);
}

#[test]
fn test_rhe_requires_ph() {
    assert!(matches!(
        shift("SHE", "RHE", None),
        Err(ElectrodeError::MissingPH { .. })
    ));
    assert!(matches!(
        shift("RHE", "Ag/AgCl-sat", None),
        Err(ElectrodeError::MissingPH { .. })
    ));
}

#[test]
fn test_unknown_electrode() {
    assert_eq!(
        shift("SHE", "Pt-wire", None),
        Err(ElectrodeError::UnknownElectrode("Pt-wire".to_string()))
    );
    assert!(ReferenceElectrode::get("foo").is_err());
}

#[test]
fn test_alias_lookup() {
    let sce = ReferenceElectrode::get("SCE").unwrap();
    assert_eq!(sce.name, "CE-sat");
    assert_close(shift("SCE", "CE-sat", None).unwrap(), 0.0);
}

#[test]
fn test_she_hub_symmetry() {
    let registry = Registry::global();
    let ph = Some(4.2);
    for from in registry.names() {
        assert_close(registry.shift(from, from, ph).unwrap(), 0.0);
        for to in registry.names() {
            let forward = registry.shift(from, to, ph).unwrap();
            let backward = registry.shift(to, from, ph).unwrap();
            assert_close(forward, -backward);
        }
    }
}

#[test]
fn test_every_electrode_has_exactly_one_preferred_entry() {
    for electrode in Registry::global().iter() {
        let count = electrode.entries.iter().filter(|e| e.is_preferred()).count();
        assert_eq!(count, 1, "{} has {} preferred entries", electrode.name, count);
        assert!(electrode.preferred_entry().is_ok());
    }
}

#[test]
fn test_ambiguous_preferred_is_rejected() {
    let none = ReferenceElectrode::new("X", "No preferred value")
        .with_entry(ElectrodeEntry::volts_vs_she(0.1, Approach::Unknown));
    let two = ReferenceElectrode::new("Y", "Two preferred values")
        .with_entry(ElectrodeEntry::volts_vs_she(0.1, Approach::Experimental).preferred())
        .with_entry(ElectrodeEntry::volts_vs_she(0.2, Approach::Experimental).preferred());

    assert_eq!(
        none.preferred_value(),
        Err(ElectrodeError::AmbiguousPreferred {
            name: "X".to_string(),
            count: 0
        })
    );
    assert_eq!(
        two.preferred_value(),
        Err(ElectrodeError::AmbiguousPreferred {
            name: "Y".to_string(),
            count: 2
        })
    );

    let registry = Registry::new(vec![none, two]);
    assert!(matches!(
        registry.shift("X", "Y", None),
        Err(ElectrodeError::AmbiguousPreferred { .. })
    ));
}

#[test]
fn test_generic_electrode_still_converts() {
    assert_close(shift("Ag/AgCl", "SHE", None).unwrap(), -0.210);
    assert_close(shift("MSE-sat", "Ag/AgCl", None).unwrap(), 0.210 - 0.654);
}

#[test]
fn test_electrode_json() {
    let electrode = ReferenceElectrode::get("Ag/AgCl-sat").unwrap();
    let json: serde_json::Value = serde_json::from_str(&electrode.to_json().unwrap()).unwrap();
    assert_eq!(
        json["fullName"],
        "KCl Saturated silver / silver chloride electrode"
    );
    assert_eq!(json["entries"][0]["approach"], "experimental");
    assert_eq!(json["entries"][0]["preferred"], true);
    assert_eq!(json["entries"][0]["source"]["isbn"], "978-1119334064");
}

#[test]
fn test_registry_names_sorted() {
    let names = Registry::global().names();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"RHE"));
    assert_eq!(Registry::global().len(), 16);
}

#[test]
fn test_same_scale_still_needs_ph_for_rhe() {
    assert!(matches!(
        shift("RHE", "RHE", None),
        Err(ElectrodeError::MissingPH { .. })
    ));
    assert_close(shift("RHE", "RHE", Some(7.0)).unwrap(), 0.0);
    assert_close(shift("SHE", "SHE", None).unwrap(), 0.0);
}

#[test]
fn test_custom_registry_shift() {
    let registry = Registry::new(vec![
        ReferenceElectrode::new("SHE", "Standard hydrogen electrode")
            .with_entry(ElectrodeEntry::volts_vs_she(0.0, Approach::Theoretical).preferred()),
        ReferenceElectrode::new("Lab", "In-house reference")
            .with_entry(ElectrodeEntry::volts_vs_she(0.3, Approach::Experimental).preferred()),
    ]);

    assert_close(registry.shift("Lab", "SHE", None).unwrap(), -0.3);

    // electrode records resolve their target scale in the global registry
    let lab = registry.get("Lab").unwrap();
    assert_eq!(
        lab.shift("SHE", None, None),
        Err(ElectrodeError::UnknownElectrode("Lab".to_string()))
    );
}
