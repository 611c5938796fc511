use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Leonardo", "Sofia", "Francesco", "Giulia", "Alessandro", "Aurora", "Lorenzo",
    "Alice", "Mattia", "Ginevra", "Andrea", "Emma", "Gabriele", "Giorgia",
    "Riccardo", "Beatrice", "Tommaso", "Chiara", "Niccolò", "Martina",
];

pub static LAST_NAMES: &[&str] = &[
    "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo",
    "Ricci", "Marino", "Greco", "Bruno", "Gallo", "Conti", "De Luca",
    "Mancini", "Costa", "Giordano", "Rizzo", "Lombardi", "Moretti",
];

pub static STREET_NAMES: &[&str] = &[
    "Roma", "Garibaldi", "Mazzini", "Cavour", "Dante", "Verdi", "Marconi",
    "Vittorio Emanuele", "dei Mille", "della Libertà", "XX Settembre",
];

pub static CITIES: &[&str] = &[
    "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna",
    "Firenze", "Bari", "Catania", "Venezia", "Verona", "Messina", "Padova",
];

pub static PROVINCES: &[&str] = &[
    "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna",
    "Firenze", "Bari", "Catania", "Venezia", "Verona", "Brescia", "Bergamo",
];

pub static IT_IT: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["Via", "Viale", "Piazza", "Corso", "Vicolo"],
    street_name_style: StreetNameStyle::Prefixed,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%#",
    cities: CITIES,
    postcode_mask: "#####",
    states: Some(PROVINCES),
    phone_masks: &["+39 ### ### ####", "0## #######", "3## ### ####"],
};
