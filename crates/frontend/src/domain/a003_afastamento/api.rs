use contracts::domain::a003_afastamento::aggregate::{Afastamento, AfastamentoDto, AfastamentoQuery};
use contracts::shared::list_response::MutationResponse;

use crate::shared::api_utils::{api_url, api_url_with_query};
use crate::shared::http::{self, ApiResult};
use crate::system::auth::context::AuthSession;

pub async fn fetch_afastamentos(
    session: &AuthSession,
    query: &AfastamentoQuery,
) -> ApiResult<Vec<Afastamento>> {
    http::get_list(session, &api_url_with_query("/afastamentos", query)).await
}

pub async fn create(session: &AuthSession, dto: &AfastamentoDto) -> ApiResult<MutationResponse> {
    http::post(session, &api_url("/afastamentos"), dto).await
}

pub async fn update(session: &AuthSession, id: i64, dto: &AfastamentoDto) -> ApiResult<MutationResponse> {
    http::put(session, &api_url(&format!("/afastamentos/{}", id)), dto).await
}

pub async fn delete(session: &AuthSession, id: i64) -> ApiResult<MutationResponse> {
    http::delete(session, &api_url(&format!("/afastamentos/{}", id))).await
}
