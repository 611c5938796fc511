pub mod internet;
pub mod locale;
pub mod mask;

use rand::Rng;

use crate::faker::locale::{provider_for, LocaleProvider, StreetFormat, StreetNameStyle};
use crate::faker::mask::fill_mask;
use crate::types::{FakeIdentity, Locale};

const PASSWORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Which optional fields a locale can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub street_address: bool,
    pub state: bool,
}

/// Locale-aware source of fake people and addresses.
pub struct IdentityGenerator<R: Rng> {
    locale: Locale,
    provider: &'static LocaleProvider,
    rng: R,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    if items.is_empty() {
        return "";
    }
    items[rng.gen_range(0..items.len())]
}

impl<R: Rng> IdentityGenerator<R> {
    pub fn new(locale: Locale, rng: R) -> Self {
        Self {
            locale,
            provider: provider_for(locale),
            rng,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            street_address: self.provider.street_address.is_some(),
            state: self.provider.states.is_some(),
        }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn first_name(&mut self) -> String {
        pick(&mut self.rng, self.provider.first_names).to_string()
    }

    pub fn last_name(&mut self) -> String {
        pick(&mut self.rng, self.provider.last_names).to_string()
    }

    pub fn street_name(&mut self) -> String {
        let name = pick(&mut self.rng, self.provider.street_names);
        if self.provider.street_suffixes.is_empty() {
            return name.to_string();
        }
        let suffix = pick(&mut self.rng, self.provider.street_suffixes);
        match self.provider.street_name_style {
            StreetNameStyle::Spaced => format!("{} {}", name, suffix),
            StreetNameStyle::Joined => format!("{}{}", name, suffix),
            StreetNameStyle::Prefixed => format!("{} {}", suffix, name),
        }
    }

    pub fn building_number(&mut self) -> String {
        fill_mask(&mut self.rng, self.provider.building_number_mask)
    }

    /// Full street line, or `None` when the locale has no format for one.
    pub fn street_address(&mut self) -> Option<String> {
        let format = self.provider.street_address?;
        let street = self.street_name();
        let number = self.building_number();
        Some(match format {
            StreetFormat::NumberFirst => format!("{} {}", number, street),
            StreetFormat::NameFirst => format!("{} {}", street, number),
        })
    }

    pub fn city(&mut self) -> String {
        pick(&mut self.rng, self.provider.cities).to_string()
    }

    pub fn postcode(&mut self) -> String {
        fill_mask(&mut self.rng, self.provider.postcode_mask)
    }

    /// Region or state name, or `None` when the locale has no table for it.
    pub fn state(&mut self) -> Option<String> {
        let states = self.provider.states?;
        Some(pick(&mut self.rng, states).to_string())
    }

    pub fn phone_number(&mut self) -> String {
        let mask = pick(&mut self.rng, self.provider.phone_masks);
        fill_mask(&mut self.rng, mask)
    }

    pub fn safe_email(&mut self, first_name: &str, last_name: &str) -> String {
        internet::safe_email(&mut self.rng, first_name, last_name)
    }

    /// Random alphanumeric password of `length` characters.
    pub fn password(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| PASSWORD_CHARS[self.rng.gen_range(0..PASSWORD_CHARS.len())] as char)
            .collect()
    }

    /// Draw one complete identity.
    ///
    /// The email is built from its own name draw, independent of the
    /// first/last name stored on the customer.
    pub fn next_identity(&mut self) -> FakeIdentity {
        let email_first = self.first_name();
        let email_last = self.last_name();
        let email = self.safe_email(&email_first, &email_last);
        let first_name = self.first_name();
        let last_name = self.last_name();
        let street_address = self.street_address();
        let street_name = self.street_name();
        let building_number = self.building_number();
        let city = self.city();
        let postcode = self.postcode();
        let state = self.state();
        let phone = self.phone_number();

        FakeIdentity {
            email,
            first_name,
            last_name,
            street_address,
            street_name,
            building_number,
            city,
            postcode,
            state,
            phone,
        }
    }
}
