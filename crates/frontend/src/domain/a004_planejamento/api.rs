use contracts::domain::a004_planejamento::aggregate::{EventoPlanejado, Planejamento};
use contracts::shared::list_response::{AnoQuery, MutationResponse};

use crate::shared::api_utils::{api_url, api_url_with_query};
use crate::shared::http::{self, ApiResult};
use crate::system::auth::context::AuthSession;

/// Versões do planejamento do ano, inclusive arquivadas
pub async fn fetch_planejamentos(session: &AuthSession, ano: i32) -> ApiResult<Vec<Planejamento>> {
    let url = api_url_with_query("/planejamentos", &AnoQuery { ano });
    http::get_list(session, &url).await
}

pub async fn arquivar(session: &AuthSession, id: i64) -> ApiResult<MutationResponse> {
    http::post_empty(session, &api_url(&format!("/planejamentos/{}/arquivar", id))).await
}

pub async fn restaurar(session: &AuthSession, id: i64) -> ApiResult<MutationResponse> {
    http::post_empty(session, &api_url(&format!("/planejamentos/{}/restaurar", id))).await
}

/// Férias do planejamento ativo e afastamentos do ano, num só fluxo
pub async fn fetch_visao_geral(session: &AuthSession, ano: i32) -> ApiResult<Vec<EventoPlanejado>> {
    let url = api_url_with_query("/planejamentos/visao-geral", &AnoQuery { ano });
    http::get_list(session, &url).await
}
