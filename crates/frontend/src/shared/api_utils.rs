//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use serde::Serialize;

use crate::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set. Otherwise constructs
/// it from the current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://rh.example.com/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/funcionarios");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path, "")
}

/// Build a full API URL with a `serde_qs` encoded query string.
/// `None` fields are skipped by the query types themselves.
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    let qs = serde_qs::to_string(query).unwrap_or_else(|e| {
        log::warn!("Falha ao serializar query de {}: {}", path, e);
        String::new()
    });
    join_url(&api_base(), path, &qs)
}

/// Percent-encode a single path segment (matrícula, id)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

pub fn join_url(base: &str, path: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if query.is_empty() {
        format!("{}/{}", base, path)
    } else {
        format!("{}/{}?{}", base, path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_funcionario::aggregate::FuncionarioQuery;

    #[test]
    fn joins_without_double_slashes() {
        assert_eq!(
            join_url("http://h:3000/", "/funcionarios", ""),
            "http://h:3000/funcionarios"
        );
        assert_eq!(
            join_url("http://h:3000", "ferias/planejamento-ativo", "ano=2025"),
            "http://h:3000/ferias/planejamento-ativo?ano=2025"
        );
    }

    #[test]
    fn query_skips_empty_fields() {
        assert_eq!(
            serde_qs::to_string(&FuncionarioQuery::ativos()).unwrap(),
            "status=Ativo"
        );
        assert_eq!(serde_qs::to_string(&FuncionarioQuery::default()).unwrap(), "");
    }

    #[test]
    fn encodes_path_segments() {
        assert_eq!(segment("00 1/A"), "00%201%2FA");
    }
}
