use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::RegionCatalog;
use crate::types::Region;

static US_REGIONS: &[(&str, &str)] = &[
    ("AL", "Alabama"), ("AK", "Alaska"), ("AZ", "Arizona"), ("AR", "Arkansas"),
    ("CA", "California"), ("CO", "Colorado"), ("CT", "Connecticut"), ("DE", "Delaware"),
    ("DC", "District of Columbia"), ("FL", "Florida"), ("GA", "Georgia"), ("HI", "Hawaii"),
    ("ID", "Idaho"), ("IL", "Illinois"), ("IN", "Indiana"), ("IA", "Iowa"),
    ("KS", "Kansas"), ("KY", "Kentucky"), ("LA", "Louisiana"), ("ME", "Maine"),
    ("MD", "Maryland"), ("MA", "Massachusetts"), ("MI", "Michigan"), ("MN", "Minnesota"),
    ("MS", "Mississippi"), ("MO", "Missouri"), ("MT", "Montana"), ("NE", "Nebraska"),
    ("NV", "Nevada"), ("NH", "New Hampshire"), ("NJ", "New Jersey"), ("NM", "New Mexico"),
    ("NY", "New York"), ("NC", "North Carolina"), ("ND", "North Dakota"), ("OH", "Ohio"),
    ("OK", "Oklahoma"), ("OR", "Oregon"), ("PA", "Pennsylvania"), ("RI", "Rhode Island"),
    ("SC", "South Carolina"), ("SD", "South Dakota"), ("TN", "Tennessee"), ("TX", "Texas"),
    ("UT", "Utah"), ("VT", "Vermont"), ("VA", "Virginia"), ("WA", "Washington"),
    ("WV", "West Virginia"), ("WI", "Wisconsin"), ("WY", "Wyoming"),
];

static DE_REGIONS: &[(&str, &str)] = &[
    ("NDS", "Niedersachsen"), ("BAW", "Baden-Württemberg"), ("BAY", "Bayern"),
    ("BER", "Berlin"), ("BRG", "Brandenburg"), ("BRE", "Bremen"), ("HAM", "Hamburg"),
    ("HES", "Hessen"), ("MEC", "Mecklenburg-Vorpommern"), ("NRW", "Nordrhein-Westfalen"),
    ("RHE", "Rheinland-Pfalz"), ("SAR", "Saarland"), ("SAS", "Sachsen"),
    ("SAC", "Sachsen-Anhalt"), ("SCN", "Schleswig-Holstein"), ("THE", "Thüringen"),
];

static AT_REGIONS: &[(&str, &str)] = &[
    ("WI", "Wien"), ("NO", "Niederösterreich"), ("OO", "Oberösterreich"),
    ("SB", "Salzburg"), ("KN", "Kärnten"), ("ST", "Steiermark"), ("TI", "Tirol"),
    ("BL", "Burgenland"), ("VB", "Vorarlberg"),
];

/// Per-country region lists, keyed by ISO-2 country code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionDirectory {
    countries: BTreeMap<String, Vec<Region>>,
}

impl RegionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The directory a fresh installation ships with: US, DE and AT.
    pub fn with_defaults() -> Self {
        let mut directory = Self::new();
        let mut next_id = 1;
        for (country, regions) in [("US", US_REGIONS), ("DE", DE_REGIONS), ("AT", AT_REGIONS)] {
            let list = regions
                .iter()
                .map(|(code, name)| {
                    let region = Region {
                        id: next_id,
                        code: (*code).to_string(),
                        name: (*name).to_string(),
                    };
                    next_id += 1;
                    region
                })
                .collect();
            directory.insert(country, list);
        }
        directory
    }

    pub fn insert(&mut self, country_id: &str, regions: Vec<Region>) {
        self.countries.insert(country_id.to_string(), regions);
    }
}

impl RegionCatalog for RegionDirectory {
    fn regions(&self, country_id: &str) -> Option<&[Region]> {
        self.countries
            .get(country_id)
            .map(Vec::as_slice)
            .filter(|regions| !regions.is_empty())
    }
}
