use super::{en, LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Jakub", "Eliška", "Jan", "Anna", "Tomáš", "Adéla", "Matyáš", "Tereza",
    "Adam", "Sofie", "Vojtěch", "Natálie", "Lukáš", "Karolína", "Ondřej",
    "Kristýna", "Petr", "Lucie", "Jiří", "Veronika",
];

pub static LAST_NAMES: &[&str] = &[
    "Novák", "Svoboda", "Novotný", "Dvořák", "Černý", "Procházka", "Kučera",
    "Veselý", "Horák", "Němec", "Marek", "Pospíšil", "Pokorný", "Hájek",
    "Král", "Jelínek", "Růžička", "Beneš", "Fiala", "Sedláček",
];

pub static STREET_NAMES: &[&str] = &[
    "Nádražní", "Školní", "Husova", "Masarykova", "Komenského", "Palackého",
    "Zahradní", "Polní", "Krátká", "Lipová", "Nerudova", "Smetanova",
    "Jiráskova", "Tyršova", "Sokolská",
];

pub static CITIES: &[&str] = &[
    "Praha", "Brno", "Ostrava", "Plzeň", "Liberec", "Olomouc", "České Budějovice",
    "Hradec Králové", "Ústí nad Labem", "Pardubice", "Zlín", "Havířov", "Kladno",
];

pub static CS_CZ: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &[],
    street_name_style: StreetNameStyle::Joined,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%##",
    cities: CITIES,
    postcode_mask: "%## ##",
    // No Czech region table; the generic U.S. list stands in.
    states: Some(en::STATES),
    phone_masks: &["+420 ### ### ###", "### ### ###"],
};
