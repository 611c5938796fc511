use super::{en, LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Antoni", "Zuzanna", "Jan", "Julia", "Aleksander", "Zofia", "Franciszek",
    "Hanna", "Jakub", "Maja", "Szymon", "Laura", "Filip", "Oliwia", "Mikołaj",
    "Alicja", "Wojciech", "Łucja",
];

pub static LAST_NAMES: &[&str] = &[
    "Nowak", "Kowalski", "Wiśniewski", "Wójcik", "Kowalczyk", "Kamiński",
    "Lewandowski", "Zieliński", "Szymański", "Woźniak", "Dąbrowski",
    "Kozłowski", "Jankowski", "Mazur", "Kwiatkowski", "Krawczyk",
];

pub static STREET_NAMES: &[&str] = &[
    "Polna", "Leśna", "Słoneczna", "Krótka", "Szkolna", "Ogrodowa", "Lipowa",
    "Łąkowa", "Brzozowa", "Kwiatowa", "Kościuszki", "Mickiewicza", "Długa",
];

pub static CITIES: &[&str] = &[
    "Warszawa", "Kraków", "Łódź", "Wrocław", "Poznań", "Gdańsk", "Szczecin",
    "Bydgoszcz", "Lublin", "Białystok", "Katowice", "Gdynia", "Toruń",
];

pub static PL_PL: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["ul.", "al.", "pl."],
    street_name_style: StreetNameStyle::Prefixed,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%#",
    cities: CITIES,
    postcode_mask: "##-###",
    // No Polish region table; the generic U.S. list stands in.
    states: Some(en::STATES),
    phone_masks: &["+48 ### ### ###", "### ### ###", "(##) ### ## ##"],
};
