use contracts::domain::a004_planejamento::aggregate::Planejamento;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_pipeline::{FieldDef, MatchMode, Searchable};
use crate::shared::selection::Identified;

pub static FIELDS: &[FieldDef<Planejamento>] = &[
    FieldDef {
        key: "id",
        label: "Versão",
        mode: MatchMode::Exact,
        get: |p| Some(p.id.to_string()),
    },
    FieldDef {
        key: "descricao",
        label: "Descrição",
        mode: MatchMode::Contains,
        get: |p| p.descricao.clone(),
    },
    FieldDef {
        key: "situacao",
        label: "Situação",
        mode: MatchMode::Exact,
        get: |p| Some(p.situacao().to_string()),
    },
    FieldDef {
        key: "criado_em",
        label: "Criado em",
        mode: MatchMode::Contains,
        get: |p| p.criado_em.clone(),
    },
    FieldDef {
        key: "total_ferias",
        label: "Férias",
        mode: MatchMode::Exact,
        get: |p| p.total_ferias.map(|n| n.to_string()),
    },
];

impl Searchable for Planejamento {
    fn search_keys(&self) -> Vec<&str> {
        self.descricao.as_deref().into_iter().collect()
    }
}

impl Identified for Planejamento {
    fn row_id(&self) -> String {
        self.id.to_string()
    }
}

/// Ação disponível para a versão: só versões não ativas são restauradas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcaoVersao {
    Arquivar,
    Restaurar,
}

pub fn acao_disponivel(p: &Planejamento) -> Option<AcaoVersao> {
    if p.arquivado {
        Some(AcaoVersao::Restaurar)
    } else if p.ativo {
        None
    } else {
        Some(AcaoVersao::Arquivar)
    }
}

pub fn criado_em(p: &Planejamento) -> String {
    p.criado_em.as_deref().map(format_datetime).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{apply_filters, sort_records, FilterValues};

    fn versao(id: i64, ativo: bool, arquivado: bool, total: u32) -> Planejamento {
        Planejamento {
            id,
            ano: 2025,
            descricao: Some(format!("Versão {}", id)),
            ativo,
            arquivado,
            criado_em: Some("2025-01-05T10:30:00Z".into()),
            total_ferias: Some(total),
        }
    }

    #[test]
    fn available_action_follows_situation() {
        assert_eq!(acao_disponivel(&versao(1, true, false, 0)), None);
        assert_eq!(acao_disponivel(&versao(2, false, false, 0)), Some(AcaoVersao::Arquivar));
        assert_eq!(acao_disponivel(&versao(3, true, true, 0)), Some(AcaoVersao::Restaurar));
    }

    #[test]
    fn numeric_keys_sort_by_value() {
        let mut rows = vec![versao(10, false, false, 120), versao(9, false, false, 8)];
        let total = FIELDS.iter().find(|f| f.key == "total_ferias").unwrap();
        sort_records(&mut rows, total.get, true);
        assert_eq!(rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![9, 10]);
        let id = FIELDS.iter().find(|f| f.key == "id").unwrap();
        sort_records(&mut rows, id.get, false);
        assert_eq!(rows[0].id, 10);
    }

    #[test]
    fn filters_by_situation() {
        let rows = vec![versao(1, true, false, 0), versao(2, false, true, 0)];
        let mut filters = FilterValues::new();
        filters.insert("situacao".into(), "Arquivado".into());
        let filtered = apply_filters(&rows, "", &filters, FIELDS);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
        assert_eq!(criado_em(&rows[0]), "05/01/2025 10:30");
    }
}
