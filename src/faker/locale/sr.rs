use super::{LocaleProvider, StreetNameStyle};

pub static LATN_FIRST_NAMES: &[&str] = &[
    "Luka", "Milica", "Stefan", "Jovana", "Nikola", "Teodora", "Marko",
    "Anđela", "Lazar", "Katarina", "Đorđe", "Sara", "Vuk", "Ivana",
];

pub static LATN_LAST_NAMES: &[&str] = &[
    "Jovanović", "Petrović", "Nikolić", "Marković", "Đorđević", "Stojanović",
    "Ilić", "Stanković", "Pavlović", "Milošević", "Popović", "Živković",
];

pub static LATN_STREET_NAMES: &[&str] = &[
    "Knez Mihailova", "Kralja Petra", "Cara Dušana", "Nemanjina", "Vojvode Mišića",
    "Bulevar oslobođenja", "Njegoševa", "Karađorđeva",
];

pub static LATN_CITIES: &[&str] = &[
    "Beograd", "Novi Sad", "Niš", "Kragujevac", "Subotica", "Zrenjanin",
    "Pančevo", "Čačak", "Kraljevo", "Smederevo", "Valjevo", "Šabac",
];

pub static CYRL_FIRST_NAMES: &[&str] = &[
    "Лука", "Милица", "Стефан", "Јована", "Никола", "Теодора", "Марко",
    "Анђела", "Лазар", "Катарина", "Ђорђе", "Сара", "Вук", "Ивана",
];

pub static CYRL_LAST_NAMES: &[&str] = &[
    "Јовановић", "Петровић", "Николић", "Марковић", "Ђорђевић", "Стојановић",
    "Илић", "Станковић", "Павловић", "Милошевић", "Поповић", "Живковић",
];

pub static CYRL_STREET_NAMES: &[&str] = &[
    "Кнез Михаилова", "Краља Петра", "Цара Душана", "Немањина", "Војводе Мишића",
    "Булевар ослобођења", "Његошева", "Карађорђева",
];

pub static CYRL_CITIES: &[&str] = &[
    "Београд", "Нови Сад", "Ниш", "Крагујевац", "Суботица", "Зрењанин",
    "Панчево", "Чачак", "Краљево", "Смедерево", "Ваљево", "Шабац",
];

/// Neither Serbian variant has a street address format or a region table.
pub static SR_LATN_RS: LocaleProvider = LocaleProvider {
    first_names: LATN_FIRST_NAMES,
    last_names: LATN_LAST_NAMES,
    street_names: LATN_STREET_NAMES,
    street_suffixes: &[],
    street_name_style: StreetNameStyle::Joined,
    street_address: None,
    building_number_mask: "%#",
    cities: LATN_CITIES,
    postcode_mask: "%####",
    states: None,
    phone_masks: &["+381 6# ### ####", "0## ### ###"],
};

pub static SR_CYRL_RS: LocaleProvider = LocaleProvider {
    first_names: CYRL_FIRST_NAMES,
    last_names: CYRL_LAST_NAMES,
    street_names: CYRL_STREET_NAMES,
    street_suffixes: &[],
    street_name_style: StreetNameStyle::Joined,
    street_address: None,
    building_number_mask: "%#",
    cities: CYRL_CITIES,
    postcode_mask: "%####",
    states: None,
    phone_masks: &["+381 6# ### ####", "0## ### ###"],
};
