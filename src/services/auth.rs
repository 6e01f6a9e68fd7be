//! User registration and authentication over salted password hashes.

use crate::{config, consts, errors::ServiceError, models, repo, utils, validators};
use log::{error, info};

pub struct AuthService {
    user_repo: repo::ImplUserRepo,
}

impl AuthService {
    pub fn new(user_repo: repo::ImplUserRepo) -> Self {
        Self { user_repo }
    }

    fn persistence(context: &str, err: anyhow::Error) -> ServiceError {
        error!("{context}: {err:#}");
        ServiceError::Persistence(err)
    }

    /// Registers a new user. The password is salted and hashed before it
    /// reaches the store; the clear text is never persisted or logged.
    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<models::user::User, ServiceError> {
        if !validators::is_not_empty(username) {
            return Err(ServiceError::Validation(
                "El nombre de usuario es obligatorio".to_string(),
            ));
        }
        if !validators::is_not_empty(password) {
            return Err(ServiceError::Validation(
                "La contraseña es obligatoria".to_string(),
            ));
        }

        let existing = self
            .user_repo
            .get_by_username(username)
            .await
            .map_err(|err| Self::persistence("Error consultando usuario", err))?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "El usuario '{username}' ya existe"
            )));
        }

        let user = models::user::User {
            id: 0,
            username: username.to_string(),
            password_hash: utils::hash_password(password)
                .map_err(|err| Self::persistence("Error generando hash", err))?,
            role: role.to_string(),
        };

        let created = self
            .user_repo
            .create(&user)
            .await
            .map_err(|err| Self::persistence("Error registrando usuario", err))?;

        info!("Usuario registrado: {}", created.id);
        Ok(created)
    }

    /// Returns the user when the credentials check out, `None` otherwise.
    /// An unknown username and a wrong password are deliberately
    /// indistinguishable so the response never leaks which usernames exist.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<models::user::User>, ServiceError> {
        let Some(user) = self
            .user_repo
            .get_by_username(username)
            .await
            .map_err(|err| Self::persistence("Error consultando usuario", err))?
        else {
            return Ok(None);
        };

        if !utils::verify_password(password, &user.password_hash) {
            return Ok(None);
        }

        info!("Inicio de sesión correcto: {}", user.id);
        Ok(Some(user))
    }

    /// Idempotent bootstrap of the default "admin" account. Safe to call on
    /// every startup; a lost race against a concurrent registration also
    /// resolves to success.
    pub async fn create_admin_if_not_exists(&self) -> Result<(), ServiceError> {
        let existing = self
            .user_repo
            .get_by_username(consts::DEFAULT_ADMIN_USERNAME)
            .await
            .map_err(|err| Self::persistence("Error consultando usuario", err))?;
        if existing.is_some() {
            return Ok(());
        }

        match self
            .register_user(
                consts::DEFAULT_ADMIN_USERNAME,
                &config::APP_CONFIG.default_admin_password,
                consts::DEFAULT_USER_ROLE,
            )
            .await
        {
            Ok(user) => {
                info!("Administrador por defecto creado: {}", user.id);
                Ok(())
            }
            Err(ServiceError::Duplicate(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
