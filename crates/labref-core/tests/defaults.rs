//! Checks on the built-in default tables.

use labref_core::defaults::{self, CAS_SAMPLE, PICTOGRAMS};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn nine_pictograms_in_ghs_order() {
    let ids: Vec<String> = defaults::pictograms()
        .into_iter()
        .map(|p| p.ghs_id)
        .collect();
    let expected: Vec<String> = (1..=9).map(|n| format!("GHS{n:02}")).collect();
    assert_eq!(ids, expected);
}

#[test]
fn every_pictogram_is_fully_described() {
    for seed in &PICTOGRAMS {
        assert!(!seed.descripcion.is_empty(), "{} lacks description", seed.ghs_id);
        assert!(!seed.detalle.is_empty(), "{} lacks detail", seed.ghs_id);
        assert!(
            seed.icon_url.starts_with("https://upload.wikimedia.org/"),
            "{} icon: {}",
            seed.ghs_id,
            seed.icon_url
        );
    }
}

#[rstest]
#[case("7732-18-5", "Agua", "Inorgánico")]
#[case("7647-01-0", "Ácido clorhídrico", "Ácido")]
#[case("64-19-7", "Ácido acético", "Ácido")]
#[case("56-81-5", "Glicerina", "Alcohol")]
#[case("7664-93-9", "Ácido sulfúrico", "Ácido")]
#[case("1310-73-2", "Hidróxido de sodio", "Base")]
fn cas_sample_entries(#[case] cas_id: &str, #[case] nombre: &str, #[case] categoria: &str) {
    let entry = defaults::cas_sample()
        .into_iter()
        .find(|e| e.cas_id == cas_id)
        .expect("sample entry present");
    assert_eq!(entry.nombre, nombre);
    assert_eq!(entry.categoria, categoria);
}

#[test]
fn cas_sample_has_six_unique_ids() {
    let mut ids: Vec<&str> = CAS_SAMPLE.iter().map(|s| s.cas_id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn default_statement_source_is_the_spanish_clp_feed() {
    assert_eq!(
        labref_core::DEFAULT_HP_URL,
        "https://mhchem.github.io/hpstatements/clp/hpstatements-es-latest.json"
    );
}
