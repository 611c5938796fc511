use super::{LocaleProvider, StreetFormat, StreetNameStyle};

pub static FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
    "Steven", "Dorothy", "Paul", "Kimberly", "Andrew", "Emily", "Joshua", "Donna",
    "Kenneth", "Michelle", "Kevin", "Carol", "Brian", "Amanda", "George", "Melissa",
    "Timothy", "Deborah", "Ronald", "Stephanie", "Edward", "Rebecca", "Jason", "Sharon",
    "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen", "Gary", "Amy",
];

pub static LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
    "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
    "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
];

pub static STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake",
    "Hill", "Walnut", "Spring", "North", "Park", "Church", "River", "South",
    "Bridge", "Highland", "Forest", "Sunset", "Madison", "Jefferson", "Lincoln",
    "Franklin", "Clinton", "Adams", "Monroe", "Jackson", "Harrison", "Taylor",
];

pub static STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Drive", "Lane", "Road", "Way", "Place",
    "Court", "Circle", "Trail", "Parkway", "Commons", "Terrace", "Loop",
];

pub static US_CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
    "Fort Worth", "Columbus", "Indianapolis", "Charlotte", "San Francisco",
    "Seattle", "Denver", "Nashville", "Oklahoma City", "El Paso", "Boston",
    "Portland", "Las Vegas", "Memphis", "Louisville", "Baltimore", "Milwaukee",
];

/// Full U.S. state names. Also borrowed by locales whose own tables have no
/// regions, which is why those values are not meaningful outside the U.S.
pub static STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine",
    "Maryland", "Massachusetts", "Michigan", "Minnesota", "Mississippi",
    "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
    "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

pub static GB_CITIES: &[&str] = &[
    "London", "Birmingham", "Manchester", "Leeds", "Liverpool", "Bristol",
    "Sheffield", "Newcastle", "Nottingham", "Leicester", "Brighton", "Oxford",
    "Cambridge", "York", "Bath", "Norwich", "Exeter", "Reading",
];

pub static GB_COUNTIES: &[&str] = &[
    "Greater London", "West Midlands", "Greater Manchester", "West Yorkshire",
    "Merseyside", "Kent", "Essex", "Surrey", "Hampshire", "Lancashire",
    "Devon", "Norfolk", "Oxfordshire", "Cambridgeshire", "North Yorkshire",
];

pub static EN_US: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: STREET_SUFFIXES,
    street_name_style: StreetNameStyle::Spaced,
    street_address: Some(StreetFormat::NumberFirst),
    building_number_mask: "%###",
    cities: US_CITIES,
    postcode_mask: "#####",
    states: Some(STATES),
    phone_masks: &["(###) ###-####", "###-###-####", "+1-###-###-####"],
};

pub static EN_GB: LocaleProvider = LocaleProvider {
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    street_names: STREET_NAMES,
    street_suffixes: &["Street", "Road", "Lane", "Close", "Gardens", "Crescent", "Mews"],
    street_name_style: StreetNameStyle::Spaced,
    street_address: Some(StreetFormat::NumberFirst),
    building_number_mask: "%#",
    cities: GB_CITIES,
    postcode_mask: "@# #@@",
    states: Some(GB_COUNTIES),
    phone_masks: &["01### ######", "07### ######", "+44 20 #### ####"],
};
