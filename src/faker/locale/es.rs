use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "Mateo", "Sofía", "Santiago", "Valentina", "Benjamín", "Martina", "Joaquín",
    "Catalina", "Thiago", "Emilia", "Lautaro", "Isabella", "Facundo", "Lucía",
    "Agustín", "Camila", "Tomás", "Julieta",
];

pub static LAST_NAMES: &[&str] = &[
    "González", "Rodríguez", "Gómez", "Fernández", "López", "Díaz", "Martínez",
    "Pérez", "García", "Sánchez", "Romero", "Sosa", "Álvarez", "Torres",
    "Ruiz", "Ramírez", "Flores", "Benítez",
];

pub static STREET_NAMES: &[&str] = &[
    "San Martín", "Belgrano", "Rivadavia", "Sarmiento", "Mitre", "Moreno",
    "Urquiza", "9 de Julio", "25 de Mayo", "Corrientes", "Independencia",
];

pub static CITIES: &[&str] = &[
    "Buenos Aires", "Córdoba", "Rosario", "Mendoza", "La Plata", "Mar del Plata",
    "San Miguel de Tucumán", "Salta", "Santa Fe", "Neuquén", "Bahía Blanca",
];

pub static PROVINCES: &[&str] = &[
    "Buenos Aires", "Catamarca", "Chaco", "Chubut", "Córdoba", "Corrientes",
    "Entre Ríos", "Formosa", "Jujuy", "La Pampa", "La Rioja", "Mendoza",
    "Misiones", "Neuquén", "Río Negro", "Salta", "San Juan", "San Luis",
    "Santa Cruz", "Santa Fe", "Santiago del Estero", "Tierra del Fuego", "Tucumán",
];

pub static ES_AR: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["Calle", "Avenida", "Pasaje"],
    street_name_style: StreetNameStyle::Prefixed,
    street_address: Some(StreetFormat::NameFirst),
    building_number_mask: "%###",
    cities: CITIES,
    postcode_mask: "@####@@@",
    states: Some(PROVINCES),
    phone_masks: &["+54 9 11 ####-####", "011 ####-####", "0351 ###-####"],
};
