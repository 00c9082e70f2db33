use std::sync::{Arc, PoisonError, RwLock};

use learn_core::model::{AuthSession, UserRole, split_full_name};
use storage::repository::SessionStore;
use tracing::{info, warn};

use crate::Clock;
use crate::api::wire::{LoginRequest, RegisterRequest};
use crate::api::{AuthApi, Credentials};
use crate::error::{AuthError, ValidationError};

/// Sign-in form submitted from a role-specific login page.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Default)]
pub struct StudentRegistration {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct TeacherRegistration {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub school_id: String,
}

/// Outcome of checking a protected route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    /// No session; send the user to the landing page.
    GetStarted,
    /// Signed in with a role the route does not accept.
    Dashboard(UserRole),
}

/// Decide whether `session` may open a route restricted to `allowed` roles.
#[must_use]
pub fn route_access(session: Option<&AuthSession>, allowed: &[UserRole]) -> RouteAccess {
    let Some(session) = session else {
        return RouteAccess::GetStarted;
    };
    if allowed.is_empty() || allowed.contains(&session.role) {
        return RouteAccess::Allow;
    }
    match session.role {
        UserRole::Student | UserRole::Teacher => RouteAccess::Dashboard(session.role),
        UserRole::Admin => RouteAccess::GetStarted,
    }
}

/// Sign-in, registration and sign-out against the auth endpoints, with the
/// resulting session persisted in the session store.
#[derive(Clone)]
pub struct AuthService {
    clock: Clock,
    api: Arc<dyn AuthApi>,
    sessions: Arc<dyn SessionStore>,
    credentials: Credentials,
    current: Arc<RwLock<Option<AuthSession>>>,
}

impl AuthService {
    #[must_use]
    pub fn new(
        clock: Clock,
        api: Arc<dyn AuthApi>,
        sessions: Arc<dyn SessionStore>,
        credentials: Credentials,
    ) -> Self {
        Self {
            clock,
            api,
            sessions,
            credentials,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Load the persisted session, if any, and make it current.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the session store cannot be read.
    pub async fn restore(&self) -> Result<Option<AuthSession>, AuthError> {
        let session = self.sessions.load_session().await?;
        if let Some(session) = &session {
            info!(role = %session.role, user = %session.user.id, "restored session");
        }
        self.set_current(session.clone());
        Ok(session)
    }

    #[must_use]
    pub fn current_session(&self) -> Option<AuthSession> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn access(&self, allowed: &[UserRole]) -> RouteAccess {
        route_access(self.current_session().as_ref(), allowed)
    }

    /// Sign in and persist the session when the account matches the form's role.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongRole` when the account type differs from
    /// the page used (nothing is persisted), `ApiError::Auth` for bad
    /// credentials, and storage errors if the session cannot be saved.
    pub async fn login(&self, form: LoginForm) -> Result<AuthSession, AuthError> {
        require("username", &form.username)?;
        require("password", &form.password)?;

        let response = self
            .api
            .login(&LoginRequest {
                username: form.username.trim().to_string(),
                password: form.password,
            })
            .await?;
        let session = response.into_session()?;
        if session.role != form.role {
            warn!(expected = %form.role, actual = %session.role, "login rejected: wrong account type");
            return Err(ValidationError::WrongRole {
                expected: form.role,
                actual: session.role,
            }
            .into());
        }
        self.persist(session).await
    }

    /// # Errors
    ///
    /// Returns `ValidationError::PasswordMismatch` before any request is made
    /// when the confirmation differs, and API or storage errors otherwise.
    pub async fn register_student(
        &self,
        form: StudentRegistration,
    ) -> Result<AuthSession, AuthError> {
        let request = registration_request(
            &form.full_name,
            &form.username,
            form.password,
            &form.confirm_password,
            None,
        )?;
        let response = self.api.register_student(&request).await?;
        self.persist(response.into_session()?).await
    }

    /// # Errors
    ///
    /// Same as `register_student`; additionally requires a school id.
    pub async fn register_teacher(
        &self,
        form: TeacherRegistration,
    ) -> Result<AuthSession, AuthError> {
        require("school id", &form.school_id)?;
        let request = registration_request(
            &form.full_name,
            &form.username,
            form.password,
            &form.confirm_password,
            Some(form.school_id.trim().to_string()),
        )?;
        let response = self.api.register_teacher(&request).await?;
        self.persist(response.into_session()?).await
    }

    /// Sign out. The server call is best effort; local state is always cleared.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` only if the persisted session could not be
    /// removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if self.credentials.is_signed_in() {
            if let Err(err) = self.api.logout().await {
                warn!(error = %err, "logout request failed; clearing local session anyway");
            }
        }
        self.credentials.clear();
        self.set_current(None);
        self.sessions.clear_session().await?;
        info!("signed out");
        Ok(())
    }

    async fn persist(&self, session: AuthSession) -> Result<AuthSession, AuthError> {
        self.sessions
            .save_session(&session, self.clock.now())
            .await?;
        info!(role = %session.role, user = %session.user.id, "signed in");
        self.set_current(Some(session.clone()));
        Ok(session)
    }

    fn set_current(&self, session: Option<AuthSession>) {
        self.credentials
            .set(session.as_ref().map(|session| session.token.clone()));
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = session;
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn registration_request(
    full_name: &str,
    username: &str,
    password: String,
    confirm_password: &str,
    school_id: Option<String>,
) -> Result<RegisterRequest, ValidationError> {
    require("name", full_name)?;
    require("username", username)?;
    require("password", &password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    let (first_name, last_name) = split_full_name(full_name);
    Ok(RegisterRequest {
        username: username.trim().to_string(),
        password,
        first_name,
        last_name,
        school_id,
    })
}
