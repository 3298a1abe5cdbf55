//! Tabulated reference electrode potentials vs SHE.
//!
//! An overview of reference electrodes and many of the values below can be
//! found in Inzelt et al., Handbook of Reference Electrodes, Springer, 2013
//! (https://doi.org/10.1007/978-3-642-36188-3). Where possible the DOI of the
//! original work is given instead.

use super::electrode::{
    Approach, ElectrodeEntry, ReferenceElectrode, Source, TemperatureDependence,
};

const HANDBOOK_CHOICE: &str = "Recommended value in Handbook of Reference Electrodes (DOI: https://doi.org/10.1007/978-3-642-36188-3).";
const KAWASHIMA: &str = "https://doi.org/10.1021/acscatal.2c05655";
const KAWASHIMA_CHOICE: &str = "First value in Kawashima et al. (DOI: https://doi.org/10.1021/acscatal.2c05655), which is similar to a second reported value.";
const ALLMAND: &str = "https://doi.org/10.1039/CT9119900845";

fn entry(value: f64, approach: Approach) -> ElectrodeEntry {
    ElectrodeEntry::volts_vs_she(value, approach)
}

/// Hg/HgO electrode: Kawashima's experimental and calculated values,
/// optionally Allmand's historical value, and the preferred value.
fn mercury_oxide(
    name: &str,
    full_name: &str,
    measured: (f64, f64),
    calculated: f64,
    historical: Option<f64>,
    preferred: (f64, f64),
) -> ReferenceElectrode {
    let mut electrode = ReferenceElectrode::new(name, full_name)
        .with_entry(
            entry(measured.0, Approach::Experimental)
                .with_source(Source::text(KAWASHIMA))
                .with_uncertainty(measured.1),
        )
        .with_entry(entry(calculated, Approach::Calculated).with_source(Source::text(KAWASHIMA)));

    if let Some(value) = historical {
        electrode = electrode
            .with_entry(entry(value, Approach::Experimental).with_source(Source::text(ALLMAND)));
    }

    electrode.with_entry(
        entry(preferred.0, Approach::Experimental)
            .preferred()
            .with_uncertainty(preferred.1)
            .with_choice(KAWASHIMA_CHOICE)
            .with_source(Source::doi(KAWASHIMA)),
    )
}

/// Every electrode known to the default registry
pub(super) fn reference_electrodes() -> Vec<ReferenceElectrode> {
    vec![
        ReferenceElectrode::new("SHE", "Standard hydrogen electrode").with_entry(
            entry(0.0, Approach::Theoretical)
                .preferred()
                .with_source(Source::text("Definition (zero point).")),
        ),
        ReferenceElectrode::new("RHE", "Reversible hydrogen electrode").with_entry(
            entry(0.0, Approach::Theoretical)
                .preferred()
                .with_source(Source::text("Nernst equation, 25 °C.")),
        ),
        ReferenceElectrode::new(
            "Ag/AgCl",
            "Silver / Silver Chloride reference electrode for which the concentration is not specified.",
        )
        .with_entry(
            entry(0.210, Approach::Generic)
                .preferred()
                .with_choice("Reference value for a generic Ag/AgCl electrode"),
        ),
        ReferenceElectrode::new("Ag/AgCl-sat", "KCl Saturated silver / silver chloride electrode")
            .with_entry(
                entry(0.197, Approach::Experimental)
                    .preferred()
                    .with_source(Source::isbn("978-1119334064")),
            ),
        ReferenceElectrode::new("Ag/AgCl-1M", "1 M KCL silver / silver chloride electrode")
            .with_entry(
                entry(0.22246, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.1021/ja01333a001")),
            )
            .with_entry(
                entry(0.22234, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.6028/jres.053.037")),
            )
            .with_entry(
                entry(0.22239, Approach::Unknown)
                    .preferred()
                    .with_source(Source::text("https://doi.org/10.1021/j150506a011")),
            ),
        ReferenceElectrode::new("CE-sat", "Saturated calomel electrode")
            .with_alias("SCE")
            .with_entry(
                entry(0.26796, Approach::Experimental)
                    .preferred()
                    .with_choice(HANDBOOK_CHOICE)
                    .with_source(Source::Reference {
                        doi: Some("https://doi.org/10.1007/978-3-642-36188-3".to_string()),
                        title: Some("Handbook of Reference Electrodes".to_string()),
                        isbn: None,
                    }),
            ),
        ReferenceElectrode::new("CE-1M", "1 molar calomel electrode")
            .with_entry(
                entry(0.2801, Approach::Unknown)
                    .with_source(Source::doi("https://doi.org/10.1051/jcp/1954510590")),
            )
            .with_entry(entry(0.2801, Approach::Unknown).with_source(Source::isbn("9780123768568")))
            .with_entry(
                entry(0.2801, Approach::Experimental)
                    .preferred()
                    .with_choice(HANDBOOK_CHOICE)
                    .with_source(Source::doi("https://doi.org/10.1051/jcp/1954510590")),
            ),
        ReferenceElectrode::new("CE-0.1M", "0.1 M calomel electrode")
            .with_entry(entry(0.3337, Approach::Unknown).with_source(Source::isbn("978-1-118-31280-3")))
            .with_entry(
                entry(0.3337, Approach::Unknown)
                    .with_source(Source::doi("https://doi.org/10.1051/jcp/1954510590")),
            )
            .with_entry(
                entry(0.3337, Approach::Experimental)
                    .preferred()
                    .with_choice(HANDBOOK_CHOICE)
                    .with_source(Source::doi("https://doi.org/10.1051/jcp/1954510590")),
            ),
        mercury_oxide(
            "Hg/HgO-0.1M-NaOH",
            "Mercury mercury oxide electrode with internal 0.1 M NaOH solution",
            (0.1487, 0.0015),
            0.1637,
            Some(0.1690),
            (0.1485, 0.0018),
        ),
        mercury_oxide(
            "Hg/HgO-0.5M-NaOH",
            "Mercury mercury oxide electrode with internal 0.5 M NaOH solution",
            (0.1270, 0.0014),
            0.1254,
            None,
            (0.1280, 0.0017),
        ),
        mercury_oxide(
            "Hg/HgO-1M-NaOH",
            "Mercury mercury oxide electrode with internal 1 M NaOH solution",
            (0.1078, 0.0006),
            0.1079,
            Some(0.1135),
            (0.1089, 0.0012),
        ),
        mercury_oxide(
            "Hg/HgO-0.1M-KOH",
            "Mercury mercury oxide electrode with internal 0.1 M KOH solution",
            (0.1414, 0.0027),
            0.1635,
            None,
            (0.1415, 0.0012),
        ),
        mercury_oxide(
            "Hg/HgO-0.5M-KOH",
            "Mercury mercury oxide electrode with internal 0.5 M KOH solution",
            (0.1256, 0.0017),
            0.1241,
            Some(0.1100),
            (0.1267, 0.0017),
        ),
        mercury_oxide(
            "Hg/HgO-1M-KOH",
            "Mercury mercury oxide electrode with internal 1 M KOH solution",
            (0.1027, 0.0026),
            0.1053,
            None,
            (0.1034, 0.0023),
        ),
        ReferenceElectrode::new("MSE-sat", "Saturated mercury / mercurous sulfate electrode")
            .with_entry(
                entry(0.654, Approach::Generic).preferred().with_source(Source::text(
                    "Internally used reference value at the Institute of Electrochemistry (Ulm University).",
                )),
            ),
        ReferenceElectrode::new("MSE-0.5M", "0.5 M mercury / mercurous sulfate electrode")
            .with_temperature_dependence(TemperatureDependence {
                formula: "E = 0.63495 - 781.44E-6 * T - 426.89E-9 * T**2".to_string(),
                comment: "E is in V and T in °C. Equation is valid in the range of 0°C to 60°C"
                    .to_string(),
                doi: "https://doi.org/10.1021/ja01304a009".to_string(),
            })
            .with_entry(
                entry(0.61587, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.1039/TF9605601172")),
            )
            .with_entry(
                entry(0.61515, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.1021/ja01304a009")),
            )
            .with_entry(
                entry(0.6125, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.1039/TF9656102050")),
            )
            .with_entry(
                entry(0.61236, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.1039/FT9949001875")),
            )
            .with_entry(
                entry(0.61544, Approach::Unknown)
                    .with_source(Source::text("https://doi.org/10.1007/BF00973518")),
            )
            .with_entry(
                entry(0.61236, Approach::Experimental)
                    .preferred()
                    .with_choice(HANDBOOK_CHOICE)
                    .with_source(Source::doi("https://doi.org/10.1039/FT9949001875")),
            ),
    ]
}
