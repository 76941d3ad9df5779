//! Account and profile form bindings.
//!
//! These are the transfer objects the web layer binds HTTP form fields
//! into before invoking the account service. `id == 0` means "new
//! record".

use serde::{Deserialize, Serialize};

use super::model::Magician;
use crate::error::{PwmError, Result};
use crate::magician_type::MagicianType;

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PwmError::validation(format!(
            "{} is required and cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Form data for signup and credential change.
///
/// Used when creating an account (`id == 0`, password required) and
/// when editing the identity fields of an existing one (`id != 0`,
/// password optional — blank keeps the stored hash).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountRequest {
    /// Target record id; 0 creates a new account
    #[serde(default)]
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Magician type by registry name
    pub magician_type: String,
    /// Plaintext password; only ever held transiently in this form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AccountRequest {
    /// Validate the request and return the first rejected field.
    ///
    /// The web layer validates before calling the service; the service
    /// validates again so a partial record can never reach the store.
    pub fn validate(&self) -> Result<()> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        require("Email", &self.email)?;
        require("Magician type", &self.magician_type)?;
        if self.id == 0 {
            match self.password.as_deref() {
                Some(password) if !password.trim().is_empty() => {}
                _ => {
                    return Err(PwmError::validation(
                        "Password is required for a new account",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Pre-fills an edit form from an existing record.
    ///
    /// The password field stays empty: the stored hash is never bound
    /// back into a form.
    pub fn from_magician(magician: &Magician) -> Self {
        Self {
            id: magician.id,
            first_name: magician.first_name.clone(),
            last_name: magician.last_name.clone(),
            email: magician.email.clone(),
            magician_type: magician.magician_type.name.clone(),
            password: None,
        }
    }
}

// Hand-written so the plaintext password never shows up in log output.
impl std::fmt::Debug for AccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountRequest")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("magician_type", &self.magician_type)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Form data for a profile edit.
///
/// Carries every profile field. Applying the form is a full overwrite:
/// optional fields left blank clear the stored values, they do not
/// preserve them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// Target record id; 0 falls back to resolution by email
    #[serde(default)]
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Magician type by registry name
    pub magician_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influences: Option<String>,
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

impl ProfileRequest {
    /// Validate the request and return the first rejected field.
    pub fn validate(&self) -> Result<()> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        require("Email", &self.email)?;
        require("Magician type", &self.magician_type)?;
        Ok(())
    }

    /// Pre-fills an edit form from an existing record.
    pub fn from_magician(magician: &Magician) -> Self {
        Self {
            id: magician.id,
            first_name: magician.first_name.clone(),
            last_name: magician.last_name.clone(),
            email: magician.email.clone(),
            magician_type: magician.magician_type.name.clone(),
            stage_name: magician.stage_name.clone(),
            location: magician.location.clone(),
            photo: magician.photo.clone(),
            biography: magician.biography.clone(),
            interests: magician.interests.clone(),
            influences: magician.influences.clone(),
            year_started: magician.year_started,
            organizations: magician.organizations.clone(),
            website: magician.website.clone(),
            facebook: magician.facebook.clone(),
            twitter: magician.twitter.clone(),
            linked_in: magician.linked_in.clone(),
            google_plus: magician.google_plus.clone(),
            flickr: magician.flickr.clone(),
            instagram: magician.instagram.clone(),
        }
    }

    /// Copies every form field onto the record.
    ///
    /// Full overwrite: a `None` in the form clears the stored value.
    /// The password hash is the one field a profile edit never touches.
    pub fn apply_to(&self, magician: &mut Magician, magician_type: MagicianType) {
        magician.first_name = self.first_name.clone();
        magician.last_name = self.last_name.clone();
        magician.email = self.email.clone();
        magician.magician_type = magician_type;
        magician.stage_name = self.stage_name.clone();
        magician.location = self.location.clone();
        magician.photo = self.photo.clone();
        magician.biography = self.biography.clone();
        magician.interests = self.interests.clone();
        magician.influences = self.influences.clone();
        magician.year_started = self.year_started;
        magician.organizations = self.organizations.clone();
        magician.website = self.website.clone();
        magician.facebook = self.facebook.clone();
        magician.twitter = self.twitter.clone();
        magician.linked_in = self.linked_in.clone();
        magician.google_plus = self.google_plus.clone();
        magician.flickr = self.flickr.clone();
        magician.instagram = self.instagram.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_request() -> AccountRequest {
        AccountRequest {
            id: 0,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@test.com".to_string(),
            magician_type: "Neophyte".to_string(),
            password: Some("P@ssw0rd".to_string()),
        }
    }

    #[test]
    fn test_validate_success() {
        assert!(account_request().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_first_name() {
        let mut request = account_request();
        request.first_name = "  ".to_string();
        assert!(request.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_signup_requires_password() {
        let mut request = account_request();
        request.password = None;
        assert!(request.validate().unwrap_err().is_validation());

        request.password = Some(String::new());
        assert!(request.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_update_does_not_require_password() {
        let mut request = account_request();
        request.id = 7;
        request.password = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_account_debug_redacts_password() {
        let output = format!("{:?}", account_request());
        assert!(!output.contains("P@ssw0rd"));
    }

    #[test]
    fn test_profile_apply_is_full_overwrite() {
        let mut magician = Magician::new(
            "Test",
            "User",
            "test@test.com",
            MagicianType::new("Neophyte"),
            "$2b$12$hash",
        );
        magician.stage_name = Some("The Great".to_string());
        magician.biography = Some("A biography".to_string());

        let request = ProfileRequest {
            id: magician.id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@test.com".to_string(),
            magician_type: "Neophyte".to_string(),
            location: Some("Honolulu, HI".to_string()),
            ..Default::default()
        };
        request.apply_to(&mut magician, MagicianType::new("Neophyte"));

        // Blank form fields clear the stored values.
        assert_eq!(magician.location.as_deref(), Some("Honolulu, HI"));
        assert!(magician.stage_name.is_none());
        assert!(magician.biography.is_none());
        assert_eq!(magician.password_hash, "$2b$12$hash");
    }

    #[test]
    fn test_profile_round_trip() {
        let mut magician = Magician::new(
            "Test",
            "User",
            "test@test.com",
            MagicianType::new("Historian"),
            "$2b$12$hash",
        );
        magician.year_started = Some(1999);
        magician.twitter = Some("@test".to_string());

        let request = ProfileRequest::from_magician(&magician);
        assert_eq!(request.id, magician.id);
        assert_eq!(request.magician_type, "Historian");
        assert_eq!(request.year_started, Some(1999));
        assert_eq!(request.twitter.as_deref(), Some("@test"));
    }
}
