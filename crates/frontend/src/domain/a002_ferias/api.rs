use contracts::domain::a002_ferias::aggregate::{
    DistribuirRequest, Ferias, FeriasUpdateDto, RedistribuirSelecionadosRequest,
};
use contracts::shared::list_response::{AnoQuery, ExclusaoLoteRequest, MutationResponse};

use crate::shared::api_utils::{api_url, api_url_with_query};
use crate::shared::http::{self, ApiResult};
use crate::system::auth::context::AuthSession;

/// Férias do planejamento ativo do ano
pub async fn fetch_planejamento_ativo(session: &AuthSession, ano: i32) -> ApiResult<Vec<Ferias>> {
    let url = api_url_with_query("/ferias/planejamento-ativo", &AnoQuery { ano });
    http::get_list(session, &url).await
}

/// Dispara a distribuição automática no servidor
pub async fn distribuir(session: &AuthSession, ano: i32) -> ApiResult<MutationResponse> {
    http::post(session, &api_url("/ferias/distribuir"), &DistribuirRequest { ano }).await
}

pub async fn redistribuir_selecionados(
    session: &AuthSession,
    ano: i32,
    ids: Vec<i64>,
) -> ApiResult<MutationResponse> {
    let body = RedistribuirSelecionadosRequest { ano, ids };
    http::post(session, &api_url("/ferias/redistribuir-selecionados"), &body).await
}

pub async fn update(session: &AuthSession, id: i64, dto: &FeriasUpdateDto) -> ApiResult<MutationResponse> {
    http::put(session, &api_url(&format!("/ferias/{}", id)), dto).await
}

pub async fn delete(session: &AuthSession, id: i64) -> ApiResult<MutationResponse> {
    http::delete(session, &api_url(&format!("/ferias/{}", id))).await
}

pub async fn delete_batch(session: &AuthSession, ids: Vec<i64>) -> ApiResult<MutationResponse> {
    let body = ExclusaoLoteRequest { ids };
    http::post(session, &api_url("/ferias/excluir-lote"), &body).await
}
