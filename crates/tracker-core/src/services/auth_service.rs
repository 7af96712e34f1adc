//! Authentication against the fixed credential set

use tracing::{info, warn};

use crate::domain::{AuthenticatedUser, StaticAccount};
use crate::error::DomainError;

/// Validates credentials against the accounts loaded at startup.
///
/// Stateless per request; the account set is read-only process-wide state
/// with no runtime mutation path.
pub struct AuthService {
    accounts: Vec<StaticAccount>,
}

impl AuthService {
    pub fn new(accounts: Vec<StaticAccount>) -> Self {
        Self { accounts }
    }

    /// Check a username/password pair against the stored bcrypt hash.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`DomainError::InvalidCredentials`] so callers cannot enumerate
    /// accounts.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, DomainError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.username == username)
            .ok_or_else(|| {
                warn!(username, "login failed: unknown username");
                DomainError::InvalidCredentials
            })?;

        let valid = tracker_security::password::PasswordService::verify(
            password,
            &account.password_hash,
        )
        .map_err(|_| DomainError::InvalidCredentials)?;

        if !valid {
            warn!(username, "login failed: invalid password");
            return Err(DomainError::InvalidCredentials);
        }

        info!(username, role = account.role.as_str(), "login successful");
        Ok(AuthenticatedUser {
            username: account.username.clone(),
            role: account.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use tracker_security::password::PasswordService;

    fn service() -> AuthService {
        AuthService::new(vec![
            StaticAccount {
                username: "admin".to_string(),
                role: Role::Admin,
                password_hash: PasswordService::hash("password123").unwrap(),
            },
            StaticAccount {
                username: "client".to_string(),
                role: Role::Client,
                password_hash: PasswordService::hash("client123").unwrap(),
            },
        ])
    }

    #[test]
    fn valid_credentials_return_username_and_role() {
        let svc = service();
        let user = svc.authenticate("admin", "password123").unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, Role::Admin);

        let user = svc.authenticate("client", "client123").unwrap();
        assert_eq!(user.role, Role::Client);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let svc = service();
        let err = svc.authenticate("admin", "wrong").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[test]
    fn unknown_user_fails_the_same_way_as_wrong_password() {
        let svc = service();
        let unknown = svc.authenticate("nouser", "x").unwrap_err();
        let wrong = svc.authenticate("admin", "x").unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
