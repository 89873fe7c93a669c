//! User profile aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AgeBracket;
use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 100;

/// Partial profile change; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age_bracket: Option<AgeBracket>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.age_bracket.is_none()
    }
}

/// A registered user.
///
/// # Invariants
///
/// - `username` is 1-100 characters after trimming
/// - `email` has text on both sides of a single `@`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    username: String,
    email: String,
    age_bracket: Option<AgeBracket>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserProfile {
    /// # Errors
    ///
    /// - `ValidationError` if username or email is invalid
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        age_bracket: Option<AgeBracket>,
    ) -> Result<Self, ValidationError> {
        let username = validate_username(username.into())?;
        let email = validate_email(email.into())?;
        let now = Timestamp::now();

        Ok(Self {
            id,
            username,
            email,
            age_bracket,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        username: String,
        email: String,
        age_bracket: Option<AgeBracket>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username,
            email,
            age_bracket,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age_bracket(&self) -> Option<AgeBracket> {
        self.age_bracket
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Applies a partial update. Nothing changes if any field is invalid.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the new username or email is invalid
    pub fn apply_update(&mut self, update: ProfileUpdate) -> Result<(), ValidationError> {
        let username = update.username.map(validate_username).transpose()?;
        let email = update.email.map(validate_email).transpose()?;

        if let Some(username) = username {
            self.username = username;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(age_bracket) = update.age_bracket {
            self.age_bracket = Some(age_bracket);
        }
        self.updated_at = Timestamp::now().max(self.updated_at);
        Ok(())
    }
}

fn validate_username(username: String) -> Result<String, ValidationError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("username"));
    }
    let length = trimmed.chars().count();
    if length > MAX_USERNAME_LENGTH {
        return Err(ValidationError::too_long("username", MAX_USERNAME_LENGTH, length));
    }
    Ok(trimmed.to_string())
}

fn validate_email(email: String) -> Result<String, ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(trimmed.to_string())
        }
        _ => Err(ValidationError::invalid_format("email", "expected name@domain")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(
            UserId::new("user-1").unwrap(),
            "casey",
            "casey@example.com",
            Some(AgeBracket::Age18To24),
        )
        .unwrap()
    }

    #[test]
    fn new_profile_trims_fields() {
        let profile = UserProfile::new(UserId::new("u").unwrap(), "  casey ", " c@example.com ", None)
            .unwrap();
        assert_eq!(profile.username(), "casey");
        assert_eq!(profile.email(), "c@example.com");
    }

    #[test]
    fn rejects_blank_username() {
        let err = UserProfile::new(UserId::new("u").unwrap(), " ", "c@example.com", None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("username"));
    }

    #[test]
    fn rejects_overlong_username() {
        let long = "x".repeat(MAX_USERNAME_LENGTH + 1);
        let err = UserProfile::new(UserId::new("u").unwrap(), long, "c@example.com", None).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, actual: 101, .. }));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["casey", "@example.com", "casey@", "a@b@c"] {
            let result = UserProfile::new(UserId::new("u").unwrap(), "casey", email, None);
            assert!(result.is_err(), "{} should be rejected", email);
        }
    }

    #[test]
    fn apply_update_changes_only_given_fields() {
        let mut profile = profile();
        profile
            .apply_update(ProfileUpdate {
                email: Some("new@example.com".to_string()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        assert_eq!(profile.username(), "casey");
        assert_eq!(profile.email(), "new@example.com");
        assert_eq!(profile.age_bracket(), Some(AgeBracket::Age18To24));
    }

    #[test]
    fn invalid_update_leaves_profile_untouched() {
        let mut profile = profile();
        let before = profile.clone();

        let result = profile.apply_update(ProfileUpdate {
            username: Some("renamed".to_string()),
            email: Some("broken".to_string()),
            age_bracket: None,
        });

        assert!(result.is_err());
        assert_eq!(profile, before);
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn reconstitute_preserves_stored_fields() {
        use chrono::{TimeZone, Utc};

        let created_at =
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2023, 11, 2, 8, 0, 0).unwrap());
        let updated_at =
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 20, 17, 45, 0).unwrap());

        let profile = UserProfile::reconstitute(
            UserId::new("user-7").unwrap(),
            "robin".to_string(),
            "robin@example.com".to_string(),
            Some(AgeBracket::Age35To44),
            created_at,
            updated_at,
        );

        assert_eq!(profile.id().as_str(), "user-7");
        assert_eq!(profile.username(), "robin");
        assert_eq!(profile.email(), "robin@example.com");
        assert_eq!(profile.age_bracket(), Some(AgeBracket::Age35To44));
        assert_eq!(profile.created_at(), &created_at);
        assert_eq!(profile.updated_at(), &updated_at);
    }
}
