//! Registration, login and token resolution.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{auth_token::AuthTokenRepository, user::UserRepository},
    error::{auth::AuthError, is_unique_violation, AppError},
    model::user::{AuthSession, RegisterParams, User},
    util::{
        password::{hash_password, verify_password},
        token::generate_key,
    },
};

const DUPLICATE_USERNAME: &str = "A user with that username already exists.";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account and its token in one transaction.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - New token and the public user
    /// - `Err(AppError::Validation)` - Username already taken
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let password_hash = hash_password(params.password.clone()).await?;

        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        if users.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Validation(DUPLICATE_USERNAME.to_string()));
        }

        let user = users
            .create(&params.username, &params.email, &password_hash, false)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Validation(DUPLICATE_USERNAME.to_string())
                } else {
                    e.into()
                }
            })?;

        let token = AuthTokenRepository::new(&txn)
            .create(user.id, generate_key())
            .await?;

        txn.commit().await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(AuthSession { token, user })
    }

    /// Verifies credentials and returns the user's token, creating it on first login.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and the public user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AppError> {
        let Some((user, hash)) = UserRepository::new(self.db)
            .find_with_password(username.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = AuthTokenRepository::new(self.db)
            .get_or_create(user.id, generate_key())
            .await?;

        Ok(AuthSession { token, user })
    }

    /// Resolves a token key to its user.
    pub async fn user_for_token(&self, key: &str) -> Result<Option<User>, AppError> {
        Ok(AuthTokenRepository::new(self.db)
            .find_user_by_key(key)
            .await?)
    }

    /// Creates a staff account unless the username is already taken.
    ///
    /// # Returns
    /// - `Ok(true)` - Account created
    /// - `Ok(false)` - A user with that username already exists
    pub async fn ensure_staff_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        let users = UserRepository::new(self.db);
        if users.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = hash_password(password.to_string()).await?;
        users.create(username, email, &password_hash, true).await?;

        Ok(true)
    }
}
