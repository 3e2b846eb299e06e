use contracts::domain::a003_afastamento::aggregate::{Afastamento, AfastamentoDto};

use crate::shared::date_utils::{parse_input_date, to_input_date};

/// Sugestões do campo motivo (texto livre)
pub const MOTIVOS: [&str; 7] = [
    "Licença médica",
    "Atestado",
    "Licença maternidade",
    "Licença paternidade",
    "Acidente de trabalho",
    "Licença não remunerada",
    "Outros",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Selecione o funcionário")]
    FuncionarioVazio,
    #[error("Informe o motivo")]
    MotivoVazio,
    #[error("Data de início inválida")]
    InicioInvalido,
    #[error("Data de fim inválida")]
    FimInvalido,
    #[error("A data de fim é anterior ao início")]
    PeriodoInvertido,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AfastamentoForm {
    pub matricula: String,
    pub motivo: String,
    pub data_inicio: String,
    pub data_fim: String,
    pub impacta_ferias: bool,
    pub observacao: String,
}

impl From<&Afastamento> for AfastamentoForm {
    fn from(a: &Afastamento) -> Self {
        Self {
            matricula: a.matricula.clone(),
            motivo: a.motivo.clone(),
            data_inicio: to_input_date(Some(a.data_inicio)),
            data_fim: to_input_date(Some(a.data_fim)),
            impacta_ferias: a.impacta_ferias,
            observacao: a.observacao.clone().unwrap_or_default(),
        }
    }
}

impl AfastamentoForm {
    pub fn into_dto(&self) -> Result<AfastamentoDto, FormError> {
        let matricula = self.matricula.trim();
        if matricula.is_empty() {
            return Err(FormError::FuncionarioVazio);
        }
        let motivo = self.motivo.trim();
        if motivo.is_empty() {
            return Err(FormError::MotivoVazio);
        }
        let inicio = parse_input_date(&self.data_inicio).ok_or(FormError::InicioInvalido)?;
        let fim = parse_input_date(&self.data_fim).ok_or(FormError::FimInvalido)?;
        if fim < inicio {
            return Err(FormError::PeriodoInvertido);
        }
        let observacao = self.observacao.trim();
        Ok(AfastamentoDto {
            matricula: matricula.to_string(),
            motivo: motivo.to_string(),
            data_inicio: Some(inicio),
            data_fim: Some(fim),
            impacta_ferias: self.impacta_ferias,
            observacao: (!observacao.is_empty()).then(|| observacao.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> AfastamentoForm {
        AfastamentoForm {
            matricula: "001".into(),
            motivo: " Licença médica ".into(),
            data_inicio: "2025-03-01".into(),
            data_fim: "2025-03-01".into(),
            impacta_ferias: true,
            observacao: String::new(),
        }
    }

    #[test]
    fn single_day_is_valid() {
        let dto = form().into_dto().unwrap();
        assert_eq!(dto.motivo, "Licença médica");
        assert_eq!(dto.data_fim, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(dto.observacao, None);
    }

    #[test]
    fn rejects_inverted_period() {
        let mut f = form();
        f.data_fim = "2025-02-28".into();
        assert_eq!(f.into_dto(), Err(FormError::PeriodoInvertido));
    }

    #[test]
    fn requires_employee_and_reason() {
        let mut f = form();
        f.matricula.clear();
        assert_eq!(f.into_dto(), Err(FormError::FuncionarioVazio));
        let mut f = form();
        f.motivo = "  ".into();
        assert_eq!(f.into_dto(), Err(FormError::MotivoVazio));
        let mut f = form();
        f.data_fim.clear();
        assert_eq!(f.into_dto(), Err(FormError::FimInvalido));
    }
}
