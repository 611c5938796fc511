use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Александр", "Анастасия", "Дмитрий", "Мария", "Максим", "Анна", "Сергей",
    "Елена", "Андрей", "Ольга", "Алексей", "Наталья", "Иван", "Екатерина",
    "Михаил", "Татьяна",
];

pub static LAST_NAMES: &[&str] = &[
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов",
    "Михайлов", "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев",
];

pub static STREET_NAMES: &[&str] = &[
    "Ленина", "Пушкина", "Гагарина", "Советская", "Мира", "Молодёжная",
    "Центральная", "Школьная", "Лесная", "Садовая", "Набережная",
];

pub static CITIES: &[&str] = &[
    "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань",
    "Нижний Новгород", "Челябинск", "Самара", "Омск", "Ростов-на-Дону", "Уфа",
];

pub static REGIONS: &[&str] = &[
    "Московская область", "Ленинградская область", "Новосибирская область",
    "Свердловская область", "Республика Татарстан", "Нижегородская область",
    "Челябинская область", "Самарская область", "Омская область",
    "Ростовская область", "Республика Башкортостан", "Краснодарский край",
];

pub static RU_RU: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["ул.", "пр.", "пер."],
    street_name_style: StreetNameStyle::Prefixed,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%#",
    cities: CITIES,
    postcode_mask: "%#####",
    states: Some(REGIONS),
    phone_masks: &["+7 (9##) ###-##-##", "8 (###) ###-##-##"],
};
