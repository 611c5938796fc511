use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Lukas", "Anna", "Jonas", "Lea", "Leon", "Hannah", "Finn", "Mia", "Paul",
    "Emma", "Felix", "Sophie", "Maximilian", "Marie", "Elias", "Lena", "Jürgen",
    "Sabine", "Matthias", "Ursula", "Stefan", "Monika", "Tobias", "Katrin",
];

pub static LAST_NAMES: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner",
    "Becker", "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter",
    "Klein", "Wolf", "Schröder", "Neumann", "Schwarz", "Zimmermann", "Braun",
    "Krüger", "Hofmann", "Hartmann", "Lange", "Huber", "Gruber", "Wimmer",
];

pub static STREET_NAMES: &[&str] = &[
    "Haupt", "Schul", "Garten", "Bahnhof", "Dorf", "Berg", "Kirch", "Wald",
    "Ring", "Linden", "Birken", "Mühlen", "Goethe", "Schiller", "Rosen",
];

pub static STREET_SUFFIXES: &[&str] = &["straße", "weg", "gasse", "allee", "platz"];

pub static DE_CITIES: &[&str] = &[
    "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart",
    "Düsseldorf", "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden",
    "Hannover", "Nürnberg", "Duisburg", "Bochum", "Bonn", "Münster",
];

pub static DE_STATES: &[&str] = &[
    "Baden-Württemberg", "Bayern", "Berlin", "Brandenburg", "Bremen", "Hamburg",
    "Hessen", "Mecklenburg-Vorpommern", "Niedersachsen", "Nordrhein-Westfalen",
    "Rheinland-Pfalz", "Saarland", "Sachsen", "Sachsen-Anhalt",
    "Schleswig-Holstein", "Thüringen",
];

pub static AT_CITIES: &[&str] = &[
    "Wien", "Graz", "Linz", "Salzburg", "Innsbruck", "Klagenfurt", "Villach",
    "Wels", "Sankt Pölten", "Dornbirn", "Steyr", "Bregenz", "Eisenstadt",
];

pub static AT_STATES: &[&str] = &[
    "Burgenland", "Kärnten", "Niederösterreich", "Oberösterreich", "Salzburg",
    "Steiermark", "Tirol", "Vorarlberg", "Wien",
];

pub static DE_DE: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: STREET_SUFFIXES,
    street_name_style: StreetNameStyle::Joined,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%#",
    cities: DE_CITIES,
    postcode_mask: "%####",
    states: Some(DE_STATES),
    phone_masks: &["0### #######", "+49 ### #######", "01## ########"],
};

pub static DE_AT: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: STREET_SUFFIXES,
    street_name_style: StreetNameStyle::Joined,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%#",
    cities: AT_CITIES,
    postcode_mask: "%###",
    states: Some(AT_STATES),
    phone_masks: &["0### ######", "+43 ### ######", "06## #######"],
};
