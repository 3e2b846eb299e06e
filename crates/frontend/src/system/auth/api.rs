use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use super::context::AuthSession;
use crate::shared::api_utils::api_url;
use crate::shared::http::{self, ApiError, ApiResult};

/// Login with usuário and senha
pub async fn login(usuario: String, senha: String) -> ApiResult<LoginResponse> {
    let request = LoginRequest { usuario, senha };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        // 401 no login é credencial inválida, não sessão expirada
        return Err(match ApiError::from_response(status, &body) {
            ApiError::NotAuthenticated => ApiError::Status {
                status,
                message: "Usuário ou senha inválidos".to_string(),
            },
            other => other,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Get current user info for a restored session
pub async fn get_current_user(session: &AuthSession) -> ApiResult<UserInfo> {
    http::get_json(session, &api_url("/auth/me")).await
}
