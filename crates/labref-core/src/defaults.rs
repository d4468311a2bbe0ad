//! Built-in default datasets.
//!
//! Used when no pictogram or CAS source is configured. These are constant
//! tables; nothing here is read from the environment.

use crate::entities::{CasEntry, Pictogram};

/// Well-known source of the GHS hazard and precautionary statements.
pub const DEFAULT_HP_URL: &str =
    "https://mhchem.github.io/hpstatements/clp/hpstatements-es-latest.json";

/// Static form of [`Pictogram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictogramSeed {
    pub ghs_id: &'static str,
    pub descripcion: &'static str,
    pub icon_url: &'static str,
    pub detalle: &'static str,
}

/// Static form of [`CasEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasSeed {
    pub cas_id: &'static str,
    pub nombre: &'static str,
    pub categoria: &'static str,
}

/// The nine standard GHS pictograms.
pub const PICTOGRAMS: [PictogramSeed; 9] = [
    PictogramSeed {
        ghs_id: "GHS01",
        descripcion: "Explosivo",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/4/4a/GHS-pictogram-explos.svg",
        detalle: "Explosivo",
    },
    PictogramSeed {
        ghs_id: "GHS02",
        descripcion: "Inflamable",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/6/6d/GHS-pictogram-flamme.svg",
        detalle: "Inflamable",
    },
    PictogramSeed {
        ghs_id: "GHS03",
        descripcion: "Comburente",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/a/a6/GHS-pictogram-rondflam.svg",
        detalle: "Oxidante",
    },
    PictogramSeed {
        ghs_id: "GHS04",
        descripcion: "Gas a presión",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/7/7b/GHS-pictogram-gas.svg",
        detalle: "Gas comprimido",
    },
    PictogramSeed {
        ghs_id: "GHS05",
        descripcion: "Corrosivo",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/5/5f/GHS-pictogram-acid.svg",
        detalle: "Corrosivo",
    },
    PictogramSeed {
        ghs_id: "GHS06",
        descripcion: "Toxicidad aguda",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/6/6b/GHS-pictogram-skull.svg",
        detalle: "Tóxico",
    },
    PictogramSeed {
        ghs_id: "GHS07",
        descripcion: "Irritante / nocivo",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/3/3b/GHS-pictogram-exclam.svg",
        detalle: "Irritante",
    },
    PictogramSeed {
        ghs_id: "GHS08",
        descripcion: "Peligro grave para la salud",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/2/2f/GHS-pictogram-silhouet.svg",
        detalle: "Peligro salud",
    },
    PictogramSeed {
        ghs_id: "GHS09",
        descripcion: "Peligro para el medio ambiente",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/0/0a/GHS-pictogram-pollu.svg",
        detalle: "Peligro ambiental",
    },
];

/// A small sample of common laboratory substances.
pub const CAS_SAMPLE: [CasSeed; 6] = [
    CasSeed {
        cas_id: "7732-18-5",
        nombre: "Agua",
        categoria: "Inorgánico",
    },
    CasSeed {
        cas_id: "7647-01-0",
        nombre: "Ácido clorhídrico",
        categoria: "Ácido",
    },
    CasSeed {
        cas_id: "64-19-7",
        nombre: "Ácido acético",
        categoria: "Ácido",
    },
    CasSeed {
        cas_id: "56-81-5",
        nombre: "Glicerina",
        categoria: "Alcohol",
    },
    CasSeed {
        cas_id: "7664-93-9",
        nombre: "Ácido sulfúrico",
        categoria: "Ácido",
    },
    CasSeed {
        cas_id: "1310-73-2",
        nombre: "Hidróxido de sodio",
        categoria: "Base",
    },
];

impl From<&PictogramSeed> for Pictogram {
    fn from(seed: &PictogramSeed) -> Self {
        Self {
            ghs_id: seed.ghs_id.to_string(),
            descripcion: seed.descripcion.to_string(),
            icon_url: seed.icon_url.to_string(),
            detalle: seed.detalle.to_string(),
        }
    }
}

impl From<&CasSeed> for CasEntry {
    fn from(seed: &CasSeed) -> Self {
        Self {
            cas_id: seed.cas_id.to_string(),
            nombre: seed.nombre.to_string(),
            categoria: seed.categoria.to_string(),
        }
    }
}

/// Owned copies of [`PICTOGRAMS`].
#[must_use]
pub fn pictograms() -> Vec<Pictogram> {
    PICTOGRAMS.iter().map(Pictogram::from).collect()
}

/// Owned copies of [`CAS_SAMPLE`].
#[must_use]
pub fn cas_sample() -> Vec<CasEntry> {
    CAS_SAMPLE.iter().map(CasEntry::from).collect()
}
