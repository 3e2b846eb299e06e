//! Camada HTTP: requisições autenticadas à API de férias.
//!
//! Toda chamada recebe a sessão explicitamente; o token nunca é lido de estado
//! global aqui. Erros viram [`ApiError`], cuja mensagem já é a que o usuário vê.

use contracts::shared::list_response::{ListResponse, MutationResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::context::AuthSession;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Sessão expirada ou usuário não autenticado")]
    NotAuthenticated,
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),
    #[error("Erro {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
    #[error("Falha ao preparar a requisição: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Monta o erro a partir de uma resposta não-2xx. Usa `message`,
    /// `mensagem` ou `error` do corpo JSON, senão o próprio texto.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::NotAuthenticated;
        }
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "mensagem", "error"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
            });
        let message = from_json
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{') && !text.starts_with('<'))
                    .then(|| text.to_string())
            })
            .unwrap_or_else(|| default_message(status).to_string());
        ApiError::Status { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated)
    }
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "Requisição inválida",
        403 => "Acesso negado",
        404 => "Registro não encontrado",
        409 => "Conflito com dados existentes",
        500..=599 => "Erro interno do servidor",
        _ => "Falha na requisição",
    }
}

/// Decodifica um corpo de listagem (envelope `data` ou array puro).
///
/// Resposta parcial (`total` maior que `data`) é aceita, com aviso no log.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> ApiResult<Vec<T>> {
    let response = serde_json::from_str::<ListResponse<T>>(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if response.is_partial() {
        log::warn!(
            "Listagem parcial: servidor informa {} registros, vieram menos",
            response.total()
        );
    }
    Ok(response.into_items())
}

/// Corpo de escrita: vazio ou não-JSON conta como sucesso sem mensagem
pub fn decode_mutation(body: &str) -> MutationResponse {
    if body.trim().is_empty() {
        return MutationResponse::default();
    }
    serde_json::from_str(body).unwrap_or_default()
}

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, url: &str, session: &AuthSession) -> ApiResult<RequestBuilder> {
    let bearer = session.bearer()?;
    let builder = match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    };
    Ok(builder.header("Authorization", &bearer))
}

async fn read_ok(response: Response) -> ApiResult<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let err = ApiError::from_response(status, &body);
        log::warn!("{} -> {}", response.url(), err);
        return Err(err);
    }
    Ok(body)
}

async fn send(verb: Verb, url: &str, session: &AuthSession) -> ApiResult<String> {
    log::debug!("{:?} {}", verb, url);
    let response = builder(verb, url, session)?
        .send()
        .await
        .map_err(|e| {
            log::error!("{:?} {} falhou: {}", verb, url, e);
            ApiError::Network(e.to_string())
        })?;
    read_ok(response).await
}

async fn send_json<B: Serialize>(
    verb: Verb,
    url: &str,
    session: &AuthSession,
    body: &B,
) -> ApiResult<String> {
    log::debug!("{:?} {}", verb, url);
    let response = builder(verb, url, session)?
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::error!("{:?} {} falhou: {}", verb, url, e);
            ApiError::Network(e.to_string())
        })?;
    read_ok(response).await
}

pub async fn get_json<T: DeserializeOwned>(session: &AuthSession, url: &str) -> ApiResult<T> {
    let body = send(Verb::Get, url, session).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_list<T: DeserializeOwned>(session: &AuthSession, url: &str) -> ApiResult<Vec<T>> {
    let body = send(Verb::Get, url, session).await?;
    decode_list(&body)
}

pub async fn post<B: Serialize>(
    session: &AuthSession,
    url: &str,
    body: &B,
) -> ApiResult<MutationResponse> {
    send_json(Verb::Post, url, session, body)
        .await
        .map(|b| decode_mutation(&b))
}

/// POST sem corpo (arquivar, restaurar)
pub async fn post_empty(session: &AuthSession, url: &str) -> ApiResult<MutationResponse> {
    send(Verb::Post, url, session)
        .await
        .map(|b| decode_mutation(&b))
}

pub async fn put<B: Serialize>(
    session: &AuthSession,
    url: &str,
    body: &B,
) -> ApiResult<MutationResponse> {
    send_json(Verb::Put, url, session, body)
        .await
        .map(|b| decode_mutation(&b))
}

pub async fn delete(session: &AuthSession, url: &str) -> ApiResult<MutationResponse> {
    send(Verb::Delete, url, session)
        .await
        .map(|b| decode_mutation(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_not_authenticated() {
        let err = ApiError::from_response(401, r#"{"message":"token expirado"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn extracts_message_from_json_body() {
        let err = ApiError::from_response(409, r#"{"mensagem":"Matrícula já cadastrada"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: "Matrícula já cadastrada".into()
            }
        );
        assert_eq!(err.to_string(), "Erro 409: Matrícula já cadastrada");
    }

    #[test]
    fn falls_back_to_text_then_default() {
        assert_eq!(
            ApiError::from_response(400, "ano inválido"),
            ApiError::Status {
                status: 400,
                message: "ano inválido".into()
            }
        );
        assert_eq!(
            ApiError::from_response(502, "<html>bad gateway</html>"),
            ApiError::Status {
                status: 502,
                message: "Erro interno do servidor".into()
            }
        );
        assert_eq!(
            ApiError::from_response(404, "{}"),
            ApiError::Status {
                status: 404,
                message: "Registro não encontrado".into()
            }
        );
    }

    #[test]
    fn decodes_both_list_shapes() {
        let a: Vec<u8> = decode_list(r#"{"data":[1,2]}"#).unwrap();
        let b: Vec<u8> = decode_list("[3]").unwrap();
        assert_eq!(a, vec![1, 2]);
        assert_eq!(b, vec![3]);
        assert!(matches!(decode_list::<u8>("{\"x\":1}"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn partial_list_keeps_received_items() {
        let items: Vec<u8> = decode_list(r#"{"data":[1,2],"total":40}"#).unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn mutation_body_is_optional() {
        assert_eq!(decode_mutation(""), MutationResponse::default());
        assert_eq!(decode_mutation("OK"), MutationResponse::default());
        assert_eq!(
            decode_mutation(r#"{"message":"Excluído"}"#).message.as_deref(),
            Some("Excluído")
        );
    }
}
