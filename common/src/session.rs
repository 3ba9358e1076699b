//! Session context: the persisted token, the launch gate, login, password
//! change and logout.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::client::{ApiClient, HttpTransport};
use crate::error::{Error, Result};
use crate::model::session::{FieldError, LoginRequest, LoginResponse, PasswordChange};
use crate::requests::{Method, endpoints};
use crate::routes::Route;
use crate::validation;

/// Where the session token is persisted between launches.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Keeps the token in memory. Clones share the same slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySessionStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// The one owner of the session token. Screens get the token from here, not
/// from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored token, if any. A storage failure counts as "no token".
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("could not read session token: {e}");
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        self.store.save(token)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

/// Where the app lands at launch: the candidate list when the stored token is
/// still accepted by the backend, login otherwise. One attempt, no retry.
pub async fn resolve_start<T, S>(client: &ApiClient<T>, session: &Session<S>) -> Route
where
    T: HttpTransport,
    S: SessionStore,
{
    let Some(token) = session.token() else {
        return Route::Login;
    };

    let request = client
        .backend(Method::Post, endpoints::VALIDATE_TOKEN)
        .with_bearer(Some(token));
    match client.execute(request).await {
        Ok(_) => Route::CandidateList,
        Err(e) => {
            info!("stored session rejected: {e}");
            Route::Login
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub route: Route,
}

/// Exchanges credentials for a token, persists it, and picks the next screen.
pub async fn login<T, S>(
    client: &ApiClient<T>,
    session: &Session<S>,
    email: &str,
    password: &str,
) -> Result<LoginOutcome>
where
    T: HttpTransport,
    S: SessionStore,
{
    let request = LoginRequest {
        email: email.trim().to_string(),
        senha: password.to_string(),
    };
    let response = client.post(endpoints::LOGIN, &request).await?;
    let LoginResponse {
        token,
        precisa_trocar_senha,
    } = serde_json::from_str(&response.body)?;

    session.save(&token)?;
    debug!("login accepted");

    let route = if precisa_trocar_senha {
        Route::ChangePassword
    } else {
        Route::CandidateList
    };
    Ok(LoginOutcome { token, route })
}

/// Replaces the current password. The backend identifies the user from the
/// token, so the body's `id` is always `0`.
pub async fn change_password<T: HttpTransport>(
    client: &ApiClient<T>,
    current: &str,
    new_password: &str,
) -> Result<()> {
    validation::required("Senha Atual", current)?;
    validation::required("Nova Senha", new_password)?;

    let body = PasswordChange {
        id: 0,
        senha: current.to_string(),
        nova_senha: new_password.to_string(),
    };
    client.put(endpoints::CHANGE_PASSWORD, &body).await?;
    Ok(())
}

/// The server's message about the new password, when the failure was a
/// field-level rejection of it.
pub fn new_password_rejection(error: &Error) -> Option<String> {
    let detail = error.server_detail()?;
    let errors: Vec<FieldError> = serde_json::from_str(detail).ok()?;
    errors
        .into_iter()
        .find(|e| e.property_name.eq_ignore_ascii_case("novaSenha"))
        .map(|e| e.error_message)
}

pub fn logout<S: SessionStore>(session: &Session<S>) -> Result<Route> {
    session.clear()?;
    Ok(Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_the_token() {
        let store = MemorySessionStore::default();
        let session = Session::new(store.clone());
        assert_eq!(session.token(), None);

        session.save("abc").unwrap();
        assert_eq!(store.load().unwrap(), Some("abc".to_string()));

        assert_eq!(logout(&session).unwrap(), Route::Login);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let session = Session::new(MemorySessionStore::with_token(""));
        assert_eq!(session.token(), None);
    }

    #[test]
    fn new_password_rejection_is_read_from_field_errors() {
        let error = Error::Status {
            status: 400,
            body: r#"[{"propertyName":"senha","errorMessage":"x"},{"propertyName":"novaSenha","errorMessage":"A nova senha deve ter 8 caracteres."}]"#.into(),
        };
        assert_eq!(
            new_password_rejection(&error).as_deref(),
            Some("A nova senha deve ter 8 caracteres.")
        );

        let other = Error::Status {
            status: 400,
            body: r#"[{"propertyName":"senha","errorMessage":"x"}]"#.into(),
        };
        assert_eq!(new_password_rejection(&other), None);
        assert_eq!(new_password_rejection(&Error::Transport("x".into())), None);
    }
}
