use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::RegionCatalog;
use crate::types::{Address, Customer, FakeIdentity, Locale};

/// What to do with the generator's raw state name when the target country
/// has no region list in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionFallback {
    UseRaw,
    Suppress,
}

/// Countries whose generated state names belong to another country.
pub const SUPPRESSED_COUNTRIES: &[&str] = &["CZ", "BG", "PL"];

/// Per-country fallback table, `UseRaw` unless listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPolicy {
    rules: HashMap<String, RegionFallback>,
}

impl Default for RegionPolicy {
    fn default() -> Self {
        let rules = SUPPRESSED_COUNTRIES
            .iter()
            .map(|c| (c.to_string(), RegionFallback::Suppress))
            .collect();
        Self { rules }
    }
}

impl RegionPolicy {
    pub fn set(&mut self, country_id: &str, fallback: RegionFallback) {
        self.rules.insert(country_id.to_uppercase(), fallback);
    }

    pub fn with_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, RegionFallback)>,
        S: AsRef<str>,
    {
        for (country, fallback) in overrides {
            self.set(country.as_ref(), fallback);
        }
        self
    }

    pub fn fallback_for(&self, country_id: &str) -> RegionFallback {
        self.rules
            .get(country_id)
            .copied()
            .unwrap_or(RegionFallback::UseRaw)
    }
}

/// Map a fake identity onto a default billing/shipping address for `customer`.
///
/// When the catalog has regions for the locale's country, the region comes
/// from a random catalog entry. Otherwise the raw state name is used, unless the
/// policy suppresses it for that country.
pub fn compose_address<R: Rng + ?Sized>(
    customer: &Customer,
    identity: &FakeIdentity,
    locale: Locale,
    catalog: &dyn RegionCatalog,
    policy: &RegionPolicy,
    rng: &mut R,
) -> Address {
    let street = match &identity.street_address {
        Some(street) => street.clone(),
        None => format!("{} {}", identity.building_number, identity.street_name),
    };
    let state = identity.state.clone().unwrap_or_default();
    let country_id = locale.country_code();

    let picked = catalog
        .regions(country_id)
        .and_then(|regions| regions.choose(rng));
    let (region, region_id) = match picked {
        Some(picked) => (Some(picked.name.clone()), Some(picked.id)),
        None => match policy.fallback_for(country_id) {
            RegionFallback::Suppress => (None, None),
            RegionFallback::UseRaw if state.is_empty() => (None, None),
            RegionFallback::UseRaw => (Some(state), None),
        },
    };

    Address {
        customer_id: customer.id,
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone(),
        street,
        city: identity.city.clone(),
        postcode: identity.postcode.clone(),
        region,
        region_id,
        country_id: country_id.to_string(),
        telephone: identity.phone.clone(),
        default_billing: true,
        default_shipping: true,
    }
}
