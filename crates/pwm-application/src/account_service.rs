//! Magician account lifecycle service.
//!
//! Orchestrates signup, credential change, profile edit, credential
//! validation, and account deletion over the repository, the type
//! registry, and the credential hasher. Every operation runs to
//! completion against the store before returning; nothing is cached
//! across calls.

use std::sync::Arc;

use pwm_core::credentials::CredentialHasher;
use pwm_core::error::{PwmError, Result};
use pwm_core::magician::{AccountRequest, Magician, MagicianRepository, ProfileRequest};
use pwm_core::magician_type::MagicianTypeRegistry;

/// Service for managing magician accounts.
pub struct MagicianAccountService {
    repository: Arc<dyn MagicianRepository>,
    registry: Arc<MagicianTypeRegistry>,
    hasher: Arc<dyn CredentialHasher>,
}

impl MagicianAccountService {
    /// Creates a new MagicianAccountService.
    pub fn new(
        repository: Arc<dyn MagicianRepository>,
        registry: Arc<MagicianTypeRegistry>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            repository,
            registry,
            hasher,
        }
    }

    /// Creates an account from a signup form, or updates the identity
    /// fields of an existing one.
    ///
    /// `id == 0` signs up: the email must be unused and a password must
    /// be supplied. Any other id updates that record's first/last name,
    /// email, and magician type; the password is re-hashed only when
    /// the form actually carries a new one, a blank field keeps the
    /// stored hash.
    ///
    /// # Returns
    ///
    /// - `Ok(Magician)`: The persisted record, with its assigned id
    /// - `Err(PwmError::Validation)`: A required field is missing
    /// - `Err(PwmError::InvalidReference)`: Unknown magician type name
    /// - `Err(PwmError::Conflict)`: Signup with a registered email
    /// - `Err(PwmError::NotFound)`: Update of a nonexistent id
    pub async fn create_or_update_account(&self, request: AccountRequest) -> Result<Magician> {
        request.validate()?;
        tracing::debug!(id = request.id, email = %request.email, "account form submitted");

        if request.id == 0 {
            self.signup(request).await
        } else {
            self.update_account(request).await
        }
    }

    async fn signup(&self, request: AccountRequest) -> Result<Magician> {
        let magician_type = self.registry.get_by_name(&request.magician_type)?.clone();

        if self.repository.exists_by_email(&request.email).await? {
            return Err(PwmError::conflict(&request.email));
        }

        let password = request
            .password
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| PwmError::validation("Password is required for a new account"))?;
        let password_hash = self.hasher.hash(password)?;

        let record = Magician::new(
            request.first_name,
            request.last_name,
            request.email,
            magician_type,
            password_hash,
        );
        let saved = self.repository.save(record).await?;
        tracing::info!(id = saved.id, "new account created");
        Ok(saved)
    }

    async fn update_account(&self, request: AccountRequest) -> Result<Magician> {
        let mut record = self.repository.find_by_id(request.id).await?;
        let magician_type = self.registry.get_by_name(&request.magician_type)?.clone();

        record.first_name = request.first_name;
        record.last_name = request.last_name;
        record.email = request.email;
        record.magician_type = magician_type;

        // A blank password field on this form means "leave it alone",
        // not "re-hash whatever was there".
        if let Some(password) = request
            .password
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            record.password_hash = self.hasher.hash(password)?;
            tracing::info!(id = record.id, "password changed");
        }

        self.repository.save(record).await
    }

    /// Updates the profile fields of an existing account.
    ///
    /// The target is resolved by id when `id != 0`, falling back to the
    /// form's email when the id misses. This path never creates an
    /// account. Every profile field is overwritten from the form;
    /// fields left blank clear the stored values.
    ///
    /// # Returns
    ///
    /// - `Ok(Magician)`: The persisted record
    /// - `Err(PwmError::NotFound)`: Neither id nor email resolves
    /// - `Err(PwmError::InvalidReference)`: Unknown magician type name
    pub async fn create_or_update_profile(&self, request: ProfileRequest) -> Result<Magician> {
        request.validate()?;
        tracing::debug!(id = request.id, email = %request.email, "profile form submitted");

        let resolved = if request.id != 0 {
            match self.repository.find_by_id(request.id).await {
                Ok(record) => Some(record),
                Err(e) if e.is_not_found() => None,
                Err(e) => return Err(e),
            }
        } else {
            None
        };
        let mut record = match resolved {
            Some(record) => record,
            None => self.repository.find_by_email(&request.email).await?,
        };

        let magician_type = self.registry.get_by_name(&request.magician_type)?.clone();
        request.apply_to(&mut record, magician_type);

        self.repository.save(record).await
    }

    /// Checks a login attempt against the stored credentials.
    ///
    /// Returns `false` without touching the store when either argument
    /// is empty, and `false` for an unknown email or a wrong password.
    /// Neither the plaintext nor the stored hash is ever logged or
    /// returned.
    pub async fn validate_credentials(&self, email: &str, password: &str) -> Result<bool> {
        if email.trim().is_empty() || password.is_empty() {
            return Ok(false);
        }

        let record = match self.repository.find_by_email(email).await {
            Ok(record) => record,
            Err(e) if e.is_not_found() => return Ok(false),
            Err(e) => return Err(e),
        };

        self.hasher.verify(password, &record.password_hash)
    }

    /// Deletes an account by id.
    ///
    /// Hard delete: routines or other data referencing the account are
    /// left dangling.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Account removed
    /// - `Err(PwmError::NotFound)`: No account with that id
    pub async fn delete_account(&self, id: u64) -> Result<()> {
        let record = self.repository.find_by_id(id).await?;
        self.repository.delete(record.id).await?;
        tracing::info!(id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwm_infrastructure::{BcryptHasher, MemoryMagicianRepository};

    fn service() -> MagicianAccountService {
        MagicianAccountService::new(
            Arc::new(MemoryMagicianRepository::new()),
            Arc::new(MagicianTypeRegistry::standard()),
            // Minimum bcrypt cost; full cost makes the suite crawl.
            Arc::new(BcryptHasher::with_cost(4)),
        )
    }

    fn signup_request() -> AccountRequest {
        AccountRequest {
            id: 0,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@test.com".to_string(),
            magician_type: "Neophyte".to_string(),
            password: Some("P@ssw0rd".to_string()),
        }
    }

    fn profile_request(id: u64, email: &str) -> ProfileRequest {
        ProfileRequest {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            magician_type: "Neophyte".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_signup_assigns_id_and_hashes_password() {
        let service = service();

        let saved = service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        assert!(saved.id != 0);
        assert_ne!(saved.password_hash, "P@ssw0rd");
        assert!(
            service
                .validate_credentials("test@test.com", "P@ssw0rd")
                .await
                .unwrap()
        );
        assert!(
            !service
                .validate_credentials("test@test.com", "wrong")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_duplicate_signup_conflicts() {
        let service = service();
        service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        let mut second = signup_request();
        second.first_name = "Other".to_string();
        let err = service
            .create_or_update_account(second)
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        let records = service.repository.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Test");
    }

    #[tokio::test]
    async fn test_signup_with_unknown_type_fails() {
        let service = service();
        let mut request = signup_request();
        request.magician_type = "Wizard".to_string();

        let err = service.create_or_update_account(request).await.unwrap_err();
        assert!(err.is_invalid_reference());
        assert!(service.repository.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_signup_without_password_fails() {
        let service = service();
        let mut request = signup_request();
        request.password = None;

        let err = service.create_or_update_account(request).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_validate_credentials_edge_cases() {
        let service = service();
        service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        assert!(
            !service
                .validate_credentials("unknown@test.com", "P@ssw0rd")
                .await
                .unwrap()
        );
        assert!(!service.validate_credentials("", "P@ssw0rd").await.unwrap());
        assert!(
            !service
                .validate_credentials("test@test.com", "")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_account_update_without_password_keeps_hash() {
        let service = service();
        let saved = service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        let updated = service
            .create_or_update_account(AccountRequest {
                id: saved.id,
                first_name: "Renamed".to_string(),
                last_name: "User".to_string(),
                email: "renamed@test.com".to_string(),
                magician_type: "Historian".to_string(),
                password: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Renamed");
        assert_eq!(updated.magician_type.name, "Historian");
        assert_eq!(updated.password_hash, saved.password_hash);
        assert!(
            service
                .validate_credentials("renamed@test.com", "P@ssw0rd")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_account_update_with_password_rehashes() {
        let service = service();
        let saved = service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        let mut change = AccountRequest::from_magician(&saved);
        change.password = Some("N3w-P@ssw0rd".to_string());
        let updated = service.create_or_update_account(change).await.unwrap();

        assert_ne!(updated.password_hash, saved.password_hash);
        assert!(
            service
                .validate_credentials("test@test.com", "N3w-P@ssw0rd")
                .await
                .unwrap()
        );
        assert!(
            !service
                .validate_credentials("test@test.com", "P@ssw0rd")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_account_update_of_unknown_id_fails() {
        let service = service();
        let mut request = signup_request();
        request.id = 99;

        let err = service.create_or_update_account(request).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_profile_edit_never_creates() {
        let service = service();

        let err = service
            .create_or_update_profile(profile_request(99, "missing@test.com"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(service.repository.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profile_edit_falls_back_to_email() {
        let service = service();
        let saved = service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        // id 0 with a known email resolves the existing record.
        let mut request = profile_request(0, "test@test.com");
        request.stage_name = Some("The Great".to_string());
        let updated = service.create_or_update_profile(request).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.stage_name.as_deref(), Some("The Great"));
    }

    #[tokio::test]
    async fn test_profile_edit_is_full_overwrite() {
        let service = service();
        let saved = service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        let mut request = profile_request(saved.id, "test@test.com");
        request.biography = Some("A biography".to_string());
        service.create_or_update_profile(request).await.unwrap();

        // A second edit with the field blank clears it.
        service
            .create_or_update_profile(profile_request(saved.id, "test@test.com"))
            .await
            .unwrap();

        let reloaded = service.repository.find_by_id(saved.id).await.unwrap();
        assert!(reloaded.biography.is_none());
        assert_eq!(reloaded.password_hash, saved.password_hash);
    }

    #[tokio::test]
    async fn test_magician_type_round_trip() {
        let service = service();
        let mut request = signup_request();
        request.magician_type = "Professional".to_string();

        let saved = service.create_or_update_account(request).await.unwrap();
        let reloaded = service.repository.find_by_id(saved.id).await.unwrap();

        let registry = MagicianTypeRegistry::standard();
        assert_eq!(
            &reloaded.magician_type,
            registry.get_by_name("Professional").unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete_account_twice_fails() {
        let service = service();
        let saved = service
            .create_or_update_account(signup_request())
            .await
            .unwrap();

        service.delete_account(saved.id).await.unwrap();
        assert!(
            service
                .repository
                .find_by_id(saved.id)
                .await
                .unwrap_err()
                .is_not_found()
        );

        let err = service.delete_account(saved.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
