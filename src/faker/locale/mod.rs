pub mod bg;
pub mod cs;
pub mod de;
pub mod en;
pub mod es;
pub mod fr;
pub mod it;
pub mod pl;
pub mod ru;
pub mod sk;
pub mod sr;

use crate::types::Locale;

/// Order of the parts in a full street address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetFormat {
    /// `"742 Evergreen Terrace"`
    NumberFirst,
    /// `"Hauptstraße 12"`
    NameFirst,
}

/// How a street name and its suffix combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetNameStyle {
    /// `"Main Street"`
    Spaced,
    /// `"Hauptstraße"`
    Joined,
    /// `"rue de la Paix"`
    Prefixed,
}

/// Word tables and field availability for one locale.
///
/// `street_address` and `states` are optional: a locale without them cannot
/// produce the field and callers fall back on their own.
#[derive(Debug)]
pub struct LocaleProvider {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub street_names: &'static [&'static str],
    pub street_suffixes: &'static [&'static str],
    pub street_name_style: StreetNameStyle,
    pub street_address: Option<StreetFormat>,
    pub building_number_mask: &'static str,
    pub cities: &'static [&'static str],
    pub postcode_mask: &'static str,
    pub states: Option<&'static [&'static str]>,
    pub phone_masks: &'static [&'static str],
}

pub fn provider_for(locale: Locale) -> &'static LocaleProvider {
    match locale {
        Locale::EnUs => &en::EN_US,
        Locale::EnGb => &en::EN_GB,
        Locale::DeDe => &de::DE_DE,
        Locale::DeAt => &de::DE_AT,
        Locale::FrFr => &fr::FR_FR,
        Locale::ItIt => &it::IT_IT,
        Locale::EsAr => &es::ES_AR,
        Locale::CsCz => &cs::CS_CZ,
        Locale::SkSk => &sk::SK_SK,
        Locale::PlPl => &pl::PL_PL,
        Locale::BgBg => &bg::BG_BG,
        Locale::RuRu => &ru::RU_RU,
        Locale::SrRs | Locale::SrLatnRs => &sr::SR_LATN_RS,
        Locale::SrCyrlRs => &sr::SR_CYRL_RS,
    }
}
