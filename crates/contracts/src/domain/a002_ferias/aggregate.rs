use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::a001_funcionario::aggregate::Funcionario;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeriasStatus {
    #[serde(rename = "Planejada", alias = "PLANEJADA")]
    Planejada,
    #[serde(rename = "Confirmada", alias = "CONFIRMADA")]
    Confirmada,
    #[serde(rename = "Em Andamento", alias = "EM_ANDAMENTO", alias = "EmAndamento")]
    EmAndamento,
}

impl FeriasStatus {
    pub const ALL: [FeriasStatus; 3] = [
        FeriasStatus::Planejada,
        FeriasStatus::Confirmada,
        FeriasStatus::EmAndamento,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeriasStatus::Planejada => "Planejada",
            FeriasStatus::Confirmada => "Confirmada",
            FeriasStatus::EmAndamento => "Em Andamento",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

// ============================================================================
// Registro
// ============================================================================

/// Período de férias de um funcionário dentro de um planejamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ferias {
    pub id: i64,
    pub matricula: String,
    #[serde(rename = "Funcionario", default)]
    pub funcionario: Option<Funcionario>,
    pub data_inicio: NaiveDate,
    pub dias: u32,
    #[serde(default)]
    pub data_fim: Option<NaiveDate>,
    pub status: FeriasStatus,
    #[serde(default)]
    pub periodo_aquisitivo: Option<String>,
    #[serde(default)]
    pub planejamento_id: Option<i64>,
}

impl Ferias {
    /// Último dia de férias: o informado pela API ou `data_inicio + dias - 1`.
    pub fn data_fim_efetiva(&self) -> NaiveDate {
        self.data_fim.unwrap_or_else(|| {
            self.data_inicio + Duration::days(i64::from(self.dias.max(1)) - 1)
        })
    }

    pub fn nome_funcionario(&self) -> Option<&str> {
        self.funcionario.as_ref().map(|f| f.nome.as_str())
    }
}

// ============================================================================
// Comandos
// ============================================================================

/// `POST /ferias/distribuir`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistribuirRequest {
    pub ano: i32,
}

/// `POST /ferias/redistribuir-selecionados`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedistribuirSelecionadosRequest {
    pub ano: i32,
    pub ids: Vec<i64>,
}

/// `PUT /ferias/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeriasUpdateDto {
    pub data_inicio: NaiveDate,
    pub dias: u32,
    pub status: FeriasStatus,
}

impl From<&Ferias> for FeriasUpdateDto {
    fn from(f: &Ferias) -> Self {
        Self {
            data_inicio: f.data_inicio,
            dias: f.dias,
            status: f.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(json_extra: &str) -> Ferias {
        let json = format!(
            r#"{{"id":1,"matricula":"001","data_inicio":"2025-01-10","dias":10,"status":"Planejada"{}}}"#,
            json_extra
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn computes_end_date_from_duration() {
        let f = sample("");
        assert_eq!(f.data_fim_efetiva(), NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
    }

    #[test]
    fn prefers_end_date_from_api() {
        let f = sample(r#","data_fim":"2025-01-25""#);
        assert_eq!(f.data_fim_efetiva(), NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
    }

    #[test]
    fn decodes_nested_funcionario() {
        let f = sample(r#","Funcionario":{"matricula":"001","nome":"Ana Silva","categoria":"CLT"}"#);
        assert_eq!(f.nome_funcionario(), Some("Ana Silva"));
        assert_eq!(
            f.funcionario.and_then(|x| x.categoria).as_deref(),
            Some("CLT")
        );
    }

    #[test]
    fn status_labels_round_trip() {
        for s in FeriasStatus::ALL {
            assert_eq!(FeriasStatus::from_label(s.label()), Some(s));
        }
        let s: FeriasStatus = serde_json::from_str(r#""EM_ANDAMENTO""#).unwrap();
        assert_eq!(s, FeriasStatus::EmAndamento);
    }
}
