use super::{en, LocaleProvider, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Александър", "Мария", "Георги", "Виктория", "Димитър", "Никол", "Иван",
    "Рая", "Николай", "Елена", "Мартин", "Гергана", "Петър", "Десислава",
];

pub static LAST_NAMES: &[&str] = &[
    "Иванов", "Георгиев", "Димитров", "Петров", "Николов", "Христов",
    "Стоянов", "Тодоров", "Илиев", "Василев", "Атанасов", "Петкова",
];

pub static STREET_NAMES: &[&str] = &[
    "Витоша", "Граф Игнатиев", "Шипка", "Раковски", "Васил Левски",
    "Христо Ботев", "Цар Освободител", "Александър Стамболийски",
];

pub static CITIES: &[&str] = &[
    "София", "Пловдив", "Варна", "Бургас", "Русе", "Стара Загора", "Плевен",
    "Сливен", "Добрич", "Шумен", "Перник", "Хасково",
];

/// No full street address format for this locale.
pub static BG_BG: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["ул.", "бул."],
    street_name_style: StreetNameStyle::Prefixed,
    street_address: None,
    building_number_mask: "%#",
    cities: CITIES,
    postcode_mask: "%###",
    // No Bulgarian region table; the generic U.S. list stands in.
    states: Some(en::STATES),
    phone_masks: &["+359 ## ### ####", "08## ### ###"],
};
