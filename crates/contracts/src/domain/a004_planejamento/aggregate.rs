use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_funcionario::aggregate::Funcionario;

// ============================================================================
// Versão de planejamento
// ============================================================================

/// Versão anual do planejamento de férias. Pode ser arquivada e restaurada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planejamento {
    pub id: i64,
    pub ano: i32,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub ativo: bool,
    #[serde(default)]
    pub arquivado: bool,
    #[serde(default)]
    pub criado_em: Option<String>,
    #[serde(default)]
    pub total_ferias: Option<u32>,
}

impl Planejamento {
    pub fn situacao(&self) -> &'static str {
        if self.arquivado {
            "Arquivado"
        } else if self.ativo {
            "Ativo"
        } else {
            "Inativo"
        }
    }
}

// ============================================================================
// Visão geral
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoEvento {
    Ferias,
    Afastamento,
}

impl TipoEvento {
    pub fn label(&self) -> &'static str {
        match self {
            TipoEvento::Ferias => "Férias",
            TipoEvento::Afastamento => "Afastamento",
        }
    }
}

/// Item do fluxo combinado de `GET /planejamentos/visao-geral`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventoPlanejado {
    pub id: i64,
    pub tipo: TipoEvento,
    pub matricula: String,
    #[serde(rename = "Funcionario", default)]
    pub funcionario: Option<Funcionario>,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    /// Status das férias; ausente para afastamentos
    #[serde(default)]
    pub status: Option<String>,
    /// Motivo do afastamento; ausente para férias
    #[serde(default)]
    pub motivo: Option<String>,
}

impl EventoPlanejado {
    pub fn nome_funcionario(&self) -> Option<&str> {
        self.funcionario.as_ref().map(|f| f.nome.as_str())
    }

    pub fn descricao(&self) -> String {
        match self.tipo {
            TipoEvento::Ferias => self.status.clone().unwrap_or_default(),
            TipoEvento::Afastamento => self.motivo.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_overview_event() {
        let e: EventoPlanejado = serde_json::from_str(
            r#"{"id":9,"tipo":"afastamento","matricula":"002","data_inicio":"2025-05-01","data_fim":"2025-05-03","motivo":"Atestado"}"#,
        )
        .unwrap();
        assert_eq!(e.tipo, TipoEvento::Afastamento);
        assert_eq!(e.descricao(), "Atestado");
        assert!(e.nome_funcionario().is_none());
    }

    #[test]
    fn archived_wins_over_active() {
        let p = Planejamento {
            id: 1,
            ano: 2025,
            descricao: None,
            ativo: true,
            arquivado: true,
            criado_em: None,
            total_ferias: None,
        };
        assert_eq!(p.situacao(), "Arquivado");
    }
}
