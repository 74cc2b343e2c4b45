//! Surat Metro station data.

use crate::domain::Line;

use super::{StationRegistry, StationRegistryBuilder};

/// Corridor 1 (Red Line), Sarthana to Surat Dream City.
pub const CORRIDOR_1: &[(&str, f64, f64)] = &[
    ("Sarthana", 21.236086, 72.9084832),
    ("Nature Park", 21.2290956, 72.8978939),
    ("Varachha Chopati Garden", 21.2232511, 72.8860303),
    ("Shri Swaminarayan Mandir (Kalakuj)", 21.2194506, 72.8764763),
    ("Kapodra", 21.2164576, 72.8674935),
    ("Labheshwar Chowk", 21.210109, 72.8572694),
    ("Central Warehouse", 21.2059456, 72.8480292),
    ("Surat Railway Station", 21.2041852, 72.8426996),
    ("Maskati Hospital", 21.197986, 72.8329793),
    ("Chowk Bazar", 21.1945927, 72.8185266),
    ("Kadarsha Ni Nal", 21.1869574, 72.8193993),
    ("Majura Gate", 21.1807111, 72.8185441),
    ("Rupali Canal", 21.1711507, 72.8160023),
    ("Althan Tenament", 21.161746, 72.8114613),
    ("Althan Gam", 21.1543952, 72.8089202),
    ("VIP Road", 21.1453708, 72.8051957),
    ("Woman ITI", 21.1360053, 72.8009184),
    ("Bhimrad", 21.130703, 72.7983709),
    ("Convention Center", 21.1224239, 72.7995601),
    ("Surat Dream City Station", 21.1092915, 72.7986141),
];

/// Corridor 2 (Green Line), Bheshan to Saroli.
pub const CORRIDOR_2: &[(&str, f64, f64)] = &[
    ("Bheshan", 21.2183247, 72.7647846),
    ("Botanical Garden", 21.2214452, 72.7770538),
    ("Ugat Vaarigruh", 21.2182041, 72.7812077),
    ("Palanpur Road", 21.2089361, 72.7825809),
    ("L P Savani School", 21.1999268, 72.7826694),
    ("Performing Art Centre", 21.1946262, 72.7862638),
    ("Adajan Gam", 21.1897933, 72.7892611),
    ("Aquarium", 21.1862338, 72.792351),
    ("Badri Narayan Temple", 21.1877719, 72.8010253),
    ("Athwa Chopati", 21.1848672, 72.8083791),
    ("Majura Gate", 21.1807111, 72.8185441),
    ("Udhna Darwaja", 21.183866, 72.8321091),
    ("Kamela Darwaja", 21.1870192, 72.8390921),
    ("Anjana Farm", 21.185375, 72.8489572),
    ("Model Town", 21.1861302, 72.855636),
    ("Magob", 21.1902815, 72.868475),
    ("Cancer Hospital", 21.1898563, 72.878821),
    ("Saroli", 21.1889488, 72.8933009),
];

/// Centre of the default map view.
pub const MAP_CENTRE: (f64, f64) = (21.2, 72.85);

/// Build the registry for the two Surat Metro corridors.
pub fn surat_registry() -> StationRegistry {
    StationRegistryBuilder::new()
        .line(Line::Red, CORRIDOR_1)
        .line(Line::Green, CORRIDOR_2)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_sizes() {
        let registry = surat_registry();
        assert_eq!(registry.line_stations(Line::Red).len(), 20);
        assert_eq!(registry.line_stations(Line::Green).len(), 18);
        // Majura Gate is shared
        assert_eq!(registry.len(), 37);
    }

    #[test]
    fn majura_gate_is_the_only_interchange() {
        let registry = surat_registry();
        let interchanges = registry.interchanges();
        assert_eq!(interchanges.len(), 1);
        assert_eq!(interchanges[0].name(), "Majura Gate");
        assert_eq!(interchanges[0].lines(), &[Line::Red, Line::Green]);
    }

    #[test]
    fn station_names_are_unique_per_corridor() {
        for corridor in [CORRIDOR_1, CORRIDOR_2] {
            let mut names: Vec<&str> = corridor.iter().map(|(n, _, _)| *n).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), corridor.len());
        }
    }
}
