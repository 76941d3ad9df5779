//! Magician domain model.

use serde::{Deserialize, Serialize};

use crate::magician_type::MagicianType;

/// A registered user of the site.
///
/// Plain data: persistence belongs to `MagicianRepository`
/// implementations and the entity holds no store handle. The `id` is
/// assigned by the store on first save and stable thereafter; `0` marks
/// a record that has not been persisted yet. The email is the logical
/// unique key (exact match).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Magician {
    /// Store-assigned identifier (0 = not yet persisted)
    #[serde(default)]
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Logical unique key across all magician records
    pub email: String,
    /// Experience-level category, resolved through the registry
    pub magician_type: MagicianType,
    /// Salted one-way hash; the plaintext is never stored
    pub password_hash: String,

    // Optional profile fields. A profile edit overwrites all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Reference to the profile photo (path or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influences: Option<String>,
    /// The year started in magic, used to show years of experience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_started: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_plus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flickr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Magician {
    /// Creates a record with the required fields only.
    ///
    /// All optional profile fields start empty; `id` is 0 until the
    /// store assigns one.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        magician_type: MagicianType,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            magician_type,
            password_hash: password_hash.into(),
            stage_name: None,
            location: None,
            photo: None,
            biography: None,
            interests: None,
            influences: None,
            year_started: None,
            organizations: None,
            website: None,
            facebook: None,
            twitter: None,
            linked_in: None,
            google_plus: None,
            flickr: None,
            instagram: None,
        }
    }
}

// Hand-written so the stored hash never shows up in log output.
impl std::fmt::Debug for Magician {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Magician")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("magician_type", &self.magician_type)
            .field("password_hash", &"<redacted>")
            .field("stage_name", &self.stage_name)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
