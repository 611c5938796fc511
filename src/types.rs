use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DummyError, Result};

/// Locales the identity generator has word tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    CsCz,
    RuRu,
    BgBg,
    EnUs,
    ItIt,
    SrRs,
    SrCyrlRs,
    SrLatnRs,
    PlPl,
    EnGb,
    DeDe,
    SkSk,
    FrFr,
    EsAr,
    DeAt,
}

impl Locale {
    pub const ALL: [Locale; 15] = [
        Locale::CsCz,
        Locale::RuRu,
        Locale::BgBg,
        Locale::EnUs,
        Locale::ItIt,
        Locale::SrRs,
        Locale::SrCyrlRs,
        Locale::SrLatnRs,
        Locale::PlPl,
        Locale::EnGb,
        Locale::DeDe,
        Locale::SkSk,
        Locale::FrFr,
        Locale::EsAr,
        Locale::DeAt,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::CsCz => "cs_CZ",
            Locale::RuRu => "ru_RU",
            Locale::BgBg => "bg_BG",
            Locale::EnUs => "en_US",
            Locale::ItIt => "it_IT",
            Locale::SrRs => "sr_RS",
            Locale::SrCyrlRs => "sr_Cyrl_RS",
            Locale::SrLatnRs => "sr_Latn_RS",
            Locale::PlPl => "pl_PL",
            Locale::EnGb => "en_GB",
            Locale::DeDe => "de_DE",
            Locale::SkSk => "sk_SK",
            Locale::FrFr => "fr_FR",
            Locale::EsAr => "es_AR",
            Locale::DeAt => "de_AT",
        }
    }

    /// ISO-2 country the locale's addresses belong to.
    pub fn country_code(self) -> &'static str {
        country_code(self.tag())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn locale_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(_[A-Z][a-z]{3})?_[A-Z]{2}$").expect("locale tag pattern is valid")
    })
}

impl FromStr for Locale {
    type Err = DummyError;

    fn from_str(s: &str) -> Result<Self> {
        if !locale_tag_re().is_match(s) {
            return Err(DummyError::InvalidLocale(s.to_string()));
        }
        Locale::ALL
            .iter()
            .copied()
            .find(|l| l.tag() == s)
            .ok_or_else(|| DummyError::UnsupportedLocale(s.to_string()))
    }
}

/// Last underscore-delimited segment of a locale tag.
/// `"sr_Cyrl_RS"` -> `"RS"`.
pub fn country_code(tag: &str) -> &str {
    tag.rsplit('_').next().unwrap_or(tag)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: u32,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input to the first save of the two-step create.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub website_id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub website_id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    /// Pending confirmation token; `None` once confirmed.
    pub confirmation: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub region: Option<String>,
    pub region_id: Option<u32>,
    pub country_id: String,
    pub telephone: String,
    pub default_billing: bool,
    pub default_shipping: bool,
}

/// One draw from the identity generator. Fields a locale cannot produce are `None`.
#[derive(Debug, Clone)]
pub struct FakeIdentity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub street_address: Option<String>,
    pub street_name: String,
    pub building_number: String,
    pub city: String,
    pub postcode: String,
    pub state: Option<String>,
    pub phone: String,
}
