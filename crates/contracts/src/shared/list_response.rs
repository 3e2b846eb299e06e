//! Envelope de listagem da API.
//!
//! Os endpoints de coleção respondem ora com `{ "data": [...] }`, ora com um
//! array puro. Ambos são aceitos.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Envelope {
        data: Vec<T>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Envelope { data, .. } => data,
            ListResponse::Bare(items) => items,
        }
    }

    /// Total informado pelo servidor ou, na falta dele, o tamanho da página recebida.
    pub fn total(&self) -> u64 {
        match self {
            ListResponse::Envelope { data, total } => total.unwrap_or(data.len() as u64),
            ListResponse::Bare(items) => items.len() as u64,
        }
    }

    /// O servidor diz ter mais registros do que mandou. As telas filtram e
    /// paginam localmente, então uma resposta parcial esconde registros.
    pub fn is_partial(&self) -> bool {
        let received = match self {
            ListResponse::Envelope { data, .. } => data.len(),
            ListResponse::Bare(items) => items.len(),
        };
        self.total() > received as u64
    }
}

/// Resposta de operações de escrita. O corpo é opcional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default, alias = "mensagem")]
    pub message: Option<String>,
}

/// Corpo das exclusões em lote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusaoLoteRequest<Id> {
    pub ids: Vec<Id>,
}

/// Query `?ano=YYYY` dos endpoints anuais (planejamento, visão geral).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnoQuery {
    pub ano: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_envelope() {
        let resp: ListResponse<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":10}"#).unwrap();
        assert_eq!(resp.total(), 10);
        assert_eq!(resp.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn decodes_envelope_with_extra_fields() {
        let resp: ListResponse<u32> =
            serde_json::from_str(r#"{"data":[7],"planejamento":{"id":1}}"#).unwrap();
        assert_eq!(resp.total(), 1);
        assert_eq!(resp.into_items(), vec![7]);
    }

    #[test]
    fn envelope_with_larger_total_is_partial() {
        let partial: ListResponse<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":10}"#).unwrap();
        let complete: ListResponse<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":3}"#).unwrap();
        let no_total: ListResponse<u32> = serde_json::from_str(r#"{"data":[1]}"#).unwrap();
        assert!(partial.is_partial());
        assert!(!complete.is_partial());
        assert!(!no_total.is_partial());
        assert!(!ListResponse::Bare(vec![1u32]).is_partial());
    }

    #[test]
    fn decodes_bare_array() {
        let resp: ListResponse<u32> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(resp.into_items(), vec![4, 5]);
    }

    #[test]
    fn mutation_response_accepts_portuguese_key() {
        let resp: MutationResponse =
            serde_json::from_str(r#"{"mensagem":"Férias distribuídas"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Férias distribuídas"));
    }
}
