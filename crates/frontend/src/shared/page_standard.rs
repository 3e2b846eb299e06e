//! Categorias de página.
//!
//! Toda página declara:
//!   - `id` no formato `{entidade}--{categoria}` (ex.: `"a002_ferias--list"`)
//!   - `data-page-category` com uma das constantes abaixo
//!
//! O separador `--` permite achar o módulo pelo id copiado do inspetor do
//! navegador: `a002_ferias--list` leva a `domain/a002_ferias/`.

/// Tabela de registros com filtros e paginação.
pub const PAGE_CAT_LIST: &str = "list";

/// Visão analítica (resumo mensal, indicadores).
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administração (versões do planejamento).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// `{entidade}--{categoria}` com as duas partes preenchidas e categoria conhecida
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a001_funcionario--list"));
        assert!(is_valid_page_id("a004_planejamento--dashboard"));
        assert!(!is_valid_page_id("a001_funcionario"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_funcionario--detail"));
    }
}
