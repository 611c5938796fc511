use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Jakub", "Sofia", "Samuel", "Nina", "Michal", "Ema", "Martin", "Natália",
    "Tomáš", "Viktória", "Peter", "Zuzana", "Marek", "Katarína", "Lukáš", "Lucia",
];

pub static LAST_NAMES: &[&str] = &[
    "Horváth", "Kováč", "Varga", "Tóth", "Nagy", "Baláž", "Szabó", "Molnár",
    "Balog", "Lukáč", "Novák", "Kollár", "Németh", "Oravec", "Hudák", "Polák",
];

pub static STREET_NAMES: &[&str] = &[
    "Hlavná", "Školská", "Záhradná", "Nová", "Krátka", "Hviezdoslavova",
    "Štúrova", "Kollárova", "Mierová", "Poľná", "Lipová", "Jesenského",
];

pub static CITIES: &[&str] = &[
    "Bratislava", "Košice", "Prešov", "Žilina", "Nitra", "Banská Bystrica",
    "Trnava", "Trenčín", "Martin", "Poprad", "Prievidza", "Zvolen",
];

pub static REGIONS: &[&str] = &[
    "Bratislavský kraj", "Trnavský kraj", "Trenčiansky kraj", "Nitriansky kraj",
    "Žilinský kraj", "Banskobystrický kraj", "Prešovský kraj", "Košický kraj",
];

pub static SK_SK: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &[],
    street_name_style: StreetNameStyle::Joined,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%##",
    cities: CITIES,
    postcode_mask: "%## ##",
    states: Some(REGIONS),
    phone_masks: &["+421 ### ### ###", "09## ### ###"],
};
