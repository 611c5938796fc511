use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Gabriel", "Louise", "Raphaël", "Jade", "Léo", "Ambre", "Louis", "Chloé",
    "Lucas", "Léa", "Hugo", "Manon", "Arthur", "Camille", "Jules", "Inès",
    "Théo", "Zoé", "Nathan", "Élise",
];

pub static LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Thomas", "Petit", "Robert", "Richard", "Durand",
    "Dubois", "Moreau", "Laurent", "Simon", "Michel", "Lefèvre", "Leroy",
    "Roux", "David", "Bertrand", "Morel", "Fournier", "Girard",
];

pub static STREET_NAMES: &[&str] = &[
    "de la Paix", "Victor Hugo", "de la République", "Pasteur", "Jean Jaurès",
    "du Général de Gaulle", "des Écoles", "de la Gare", "Nationale", "du Moulin",
];

pub static CITIES: &[&str] = &[
    "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
    "Montpellier", "Bordeaux", "Lille", "Rennes", "Reims", "Toulon", "Grenoble",
];

pub static REGIONS: &[&str] = &[
    "Auvergne-Rhône-Alpes", "Bourgogne-Franche-Comté", "Bretagne",
    "Centre-Val de Loire", "Corse", "Grand Est", "Hauts-de-France",
    "Île-de-France", "Normandie", "Nouvelle-Aquitaine", "Occitanie",
    "Pays de la Loire", "Provence-Alpes-Côte d'Azur",
];

pub static FR_FR: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["rue", "avenue", "boulevard", "place", "impasse"],
    street_name_style: StreetNameStyle::Prefixed,
    street_address: Some(StreetFormat::NumberFirst),
    building_number_mask: "%#",
    cities: CITIES,
    postcode_mask: "%####",
    states: Some(REGIONS),
    phone_masks: &["0# ## ## ## ##", "+33 # ## ## ## ##"],
};
