//! Pluggable authentication capability.
//!
//! Nothing in the stores depends on a concrete credential source; callers
//! inject an [`Authenticator`] at startup time.

/// Checks a username/password pair. Implementations must not panic on
/// arbitrary input.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// A fixed credential pair, usually loaded from configuration.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub username: String,
    pub password: String,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        // Historical default of the original deployment.
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// A no-op authenticator that allows everything. Used for testing.
pub struct AllowAll;

impl Authenticator for AllowAll {
    fn authenticate(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

/// An authenticator that denies everything. Used for testing.
pub struct DenyAll;

impl Authenticator for DenyAll {
    fn authenticate(&self, _username: &str, _password: &str) -> bool {
        false
    }
}

/// Password strength policy: at least 8 characters with an uppercase
/// letter, a lowercase letter, a digit and a special character.
pub fn password_meets_policy(password: &str) -> bool {
    const SPECIAL: &str = "!@#$%^&*(),.?\":{}|<>";
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credentials_match_exactly() {
        let auth = StaticCredentials::default();
        assert!(auth.authenticate("admin", "admin123"));
        assert!(!auth.authenticate("admin", "admin124"));
        assert!(!auth.authenticate("Admin", "admin123"));
    }

    #[test]
    fn allow_and_deny() {
        assert!(AllowAll.authenticate("anyone", ""));
        assert!(!DenyAll.authenticate("admin", "admin123"));
    }

    #[test]
    fn password_policy() {
        assert!(password_meets_policy("Str0ng!pass"));
        assert!(!password_meets_policy("Sh0rt!a"));
        assert!(!password_meets_policy("alllowercase1!"));
        assert!(!password_meets_policy("NoDigits!!"));
        assert!(!password_meets_policy("NoSpecial123"));
    }
}
