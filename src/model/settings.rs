//! The site settings singleton and its `GET` body.

use super::coerce;
use serde::{Deserialize, Serialize};

/// Site-wide content. There is one logical instance (row id 1).
///
/// Doubles as the `PUT /api/settings` body: a replace writes all six fields, so any
/// field missing from the body is stored as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// May contain inline markup.
    #[serde(default, deserialize_with = "coerce::text")]
    pub hero_title: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub hero_subtitle: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub contact_phone: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub contact_address: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub footer_tagline: String,
}

impl Settings {
    /// The field called `name`, in either wire (`heroTitle`) or column (`hero_title`) form.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "heroTitle" | "hero_title" => Some(&mut self.hero_title),
            "heroSubtitle" | "hero_subtitle" => Some(&mut self.hero_subtitle),
            "contactEmail" | "contact_email" => Some(&mut self.contact_email),
            "contactPhone" | "contact_phone" => Some(&mut self.contact_phone),
            "contactAddress" | "contact_address" => Some(&mut self.contact_address),
            "footerTagline" | "footer_tagline" => Some(&mut self.footer_tagline),
            _ => None,
        }
    }
}

/// Body of `GET /api/settings`: the singleton, or `{}` before it has been seeded.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SettingsBody {
    Stored(Settings),
    Empty {},
}

impl From<Option<Settings>> for SettingsBody {
    fn from(settings: Option<Settings>) -> Self {
        match settings {
            Some(s) => SettingsBody::Stored(s),
            None => SettingsBody::Empty {},
        }
    }
}
