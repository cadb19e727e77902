use contracts::system::auth::{Credentials, LoginRequest, UserRole};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::{api, storage};

/// Signed-in user as shown in the header and used for role checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Bearer token plus user, passed explicitly to every sales API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    /// `None` when the server returned no usable token
    pub fn from_credentials(credentials: Credentials) -> Option<Self> {
        let token = credentials.token.trim().to_string();
        if token.is_empty() {
            return None;
        }
        let role = credentials.role();
        Some(Self {
            token,
            user: SessionUser {
                name: credentials.name,
                email: credentials.email,
                phone: credentials.phone.filter(|p| !p.trim().is_empty()),
                role,
            },
        })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.as_ref().map(Session::role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from localStorage
    let restored = storage::load_session();
    if let Some(session) = restored.as_ref() {
        log::debug!("Restored session for {}", session.user.email);
    }
    let (auth_state, set_auth_state) = signal(AuthState { session: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Current session, if any (reactive)
pub fn use_session() -> Signal<Option<Session>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.get().session)
}

/// Helper: Perform login
pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, String> {
    request.validate().map_err(|e| e.to_string())?;

    let credentials = api::login(&request).await?;
    let session = Session::from_credentials(credentials)
        .ok_or_else(|| "Login failed: no token in response".to_string())?;

    storage::save_session(&session);
    log::info!("Signed in as {} ({})", session.user.email, session.role().as_str());

    set_auth_state.set(AuthState {
        session: Some(session.clone()),
    });
    Ok(session)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(token: &str, role: Option<&str>) -> Credentials {
        Credentials {
            token: token.to_string(),
            role: role.map(str::to_string),
            name: "Ivan".to_string(),
            email: "ivan@pharma.test".to_string(),
            phone: Some(" ".to_string()),
        }
    }

    #[test]
    fn test_session_from_credentials() {
        let session = Session::from_credentials(credentials("t0k", Some("manager"))).unwrap();
        assert_eq!(session.role(), UserRole::Manager);
        assert_eq!(session.bearer(), "Bearer t0k");
        assert_eq!(session.user.phone, None);
    }

    #[test]
    fn test_unknown_role_is_sales() {
        let session = Session::from_credentials(credentials("t0k", Some("admin"))).unwrap();
        assert_eq!(session.role(), UserRole::Sales);
        let session = Session::from_credentials(credentials("t0k", None)).unwrap();
        assert_eq!(session.role(), UserRole::Sales);
    }

    #[test]
    fn test_blank_token_is_no_session() {
        assert!(Session::from_credentials(credentials("  ", Some("sales"))).is_none());
    }
}
