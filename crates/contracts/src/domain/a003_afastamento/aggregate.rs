use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_funcionario::aggregate::Funcionario;

/// Afastamento (licença, atestado, etc.) de um funcionário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Afastamento {
    pub id: i64,
    pub matricula: String,
    #[serde(rename = "Funcionario", default)]
    pub funcionario: Option<Funcionario>,
    pub motivo: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    /// Se o afastamento conta no cálculo de direito a férias
    #[serde(default)]
    pub impacta_ferias: bool,
    #[serde(default)]
    pub observacao: Option<String>,
}

impl Afastamento {
    pub fn dias(&self) -> i64 {
        (self.data_fim - self.data_inicio).num_days() + 1
    }

    pub fn nome_funcionario(&self) -> Option<&str> {
        self.funcionario.as_ref().map(|f| f.nome.as_str())
    }

    pub fn to_dto(&self) -> AfastamentoDto {
        AfastamentoDto {
            matricula: self.matricula.clone(),
            motivo: self.motivo.clone(),
            data_inicio: Some(self.data_inicio),
            data_fim: Some(self.data_fim),
            impacta_ferias: self.impacta_ferias,
            observacao: self.observacao.clone(),
        }
    }
}

/// Corpo de `POST /afastamentos` e `PUT /afastamentos/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AfastamentoDto {
    pub matricula: String,
    pub motivo: String,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub impacta_ferias: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,
}

/// Query string de `GET /afastamentos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AfastamentoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
}
