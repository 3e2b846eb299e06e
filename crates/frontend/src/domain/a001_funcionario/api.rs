use contracts::domain::a001_funcionario::aggregate::{Funcionario, FuncionarioDto, FuncionarioQuery};
use contracts::shared::list_response::{ExclusaoLoteRequest, MutationResponse};

use crate::shared::api_utils::{api_url, api_url_with_query, segment};
use crate::shared::http::{self, ApiResult};
use crate::system::auth::context::AuthSession;

pub async fn fetch_funcionarios(
    session: &AuthSession,
    query: &FuncionarioQuery,
) -> ApiResult<Vec<Funcionario>> {
    http::get_list(session, &api_url_with_query("/funcionarios", query)).await
}

/// Funcionários ativos (select de funcionário nos formulários)
pub async fn fetch_ativos(session: &AuthSession) -> ApiResult<Vec<Funcionario>> {
    fetch_funcionarios(session, &FuncionarioQuery::ativos()).await
}

pub async fn create(session: &AuthSession, dto: &FuncionarioDto) -> ApiResult<MutationResponse> {
    http::post(session, &api_url("/funcionarios"), dto).await
}

pub async fn update(
    session: &AuthSession,
    matricula: &str,
    dto: &FuncionarioDto,
) -> ApiResult<MutationResponse> {
    let url = api_url(&format!("/funcionarios/{}", segment(matricula)));
    http::put(session, &url, dto).await
}

pub async fn delete(session: &AuthSession, matricula: &str) -> ApiResult<MutationResponse> {
    let url = api_url(&format!("/funcionarios/{}", segment(matricula)));
    http::delete(session, &url).await
}

pub async fn delete_batch(
    session: &AuthSession,
    matriculas: Vec<String>,
) -> ApiResult<MutationResponse> {
    let body = ExclusaoLoteRequest { ids: matriculas };
    http::post(session, &api_url("/funcionarios/excluir-lote"), &body).await
}
