use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::http::ApiError;

/// Sessão autenticada. Criada no login, descartada no logout; é passada
/// explicitamente a cada chamada da API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSession {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthSession {
    pub fn signed_in(token: String, user: Option<UserInfo>) -> Self {
        Self {
            token: Some(token),
            user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Valor do header `Authorization`
    pub fn bearer(&self) -> Result<String, ApiError> {
        self.token
            .as_deref()
            .map(|t| format!("Bearer {}", t))
            .ok_or(ApiError::NotAuthenticated)
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.nome.clone())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<AuthSession>,
}

impl AuthContext {
    fn restore() -> Self {
        let session = match storage::get_token() {
            Some(token) => AuthSession::signed_in(token, storage::get_user()),
            None => AuthSession::default(),
        };
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Sessão atual (reativa)
    pub fn session(&self) -> AuthSession {
        self.session.get()
    }

    /// Sessão atual sem rastrear dependência, para uso em handlers
    pub fn session_untracked(&self) -> AuthSession {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn sign_in(&self, response: LoginResponse) {
        storage::save_session(&response.token, response.usuario.as_ref());
        log::info!(
            "Login efetuado: {}",
            response.usuario.as_ref().map(|u| u.nome.as_str()).unwrap_or("-")
        );
        self.session
            .set(AuthSession::signed_in(response.token, response.usuario));
    }

    pub fn sign_out(&self) {
        log::info!("Sessão encerrada");
        storage::clear_session();
        self.session.set(AuthSession::default());
    }

    /// Encerra a sessão se o erro indicar token inválido
    pub fn handle_error(&self, err: &ApiError) {
        if err.is_unauthorized() {
            self.sign_out();
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::restore();

    // Valida o token restaurado do localStorage
    Effect::new(move |_| {
        let session = auth.session_untracked();
        if !session.is_authenticated() {
            return;
        }
        spawn_local(async move {
            match api::get_current_user(&session).await {
                Ok(user) => {
                    if let Some(token) = session.token {
                        storage::save_session(&token, Some(&user));
                        auth.session.set(AuthSession::signed_in(token, Some(user)));
                    }
                }
                Err(e) => {
                    log::warn!("Sessão restaurada inválida: {}", e);
                    auth.handle_error(&e);
                }
            }
        });
    });

    provide_context(auth);

    children()
}

/// Hook to access auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_requires_token() {
        assert_eq!(
            AuthSession::default().bearer(),
            Err(ApiError::NotAuthenticated)
        );
        let session = AuthSession::signed_in("abc".into(), None);
        assert_eq!(session.bearer().unwrap(), "Bearer abc");
        assert!(session.is_authenticated());
    }

    #[test]
    fn display_name_falls_back_to_empty() {
        let user = UserInfo {
            id: "1".into(),
            nome: "Maria RH".into(),
            email: None,
            is_admin: true,
        };
        assert_eq!(AuthSession::signed_in("t".into(), Some(user)).display_name(), "Maria RH");
        assert_eq!(AuthSession::default().display_name(), "");
    }
}
