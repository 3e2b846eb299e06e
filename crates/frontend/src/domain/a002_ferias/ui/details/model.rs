use chrono::{Duration, NaiveDate};
use contracts::domain::a002_ferias::aggregate::{Ferias, FeriasStatus, FeriasUpdateDto};

use crate::shared::date_utils::{parse_input_date, to_input_date};

/// Limite legal de dias corridos num período
pub const MAX_DIAS: u32 = 30;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Data de início inválida")]
    DataInvalida,
    #[error("Quantidade de dias deve estar entre 1 e 30")]
    DiasInvalidos,
    #[error("Status desconhecido: {0}")]
    StatusInvalido(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeriasForm {
    pub data_inicio: String,
    pub dias: String,
    pub status: String,
}

impl From<&Ferias> for FeriasForm {
    fn from(f: &Ferias) -> Self {
        Self {
            data_inicio: to_input_date(Some(f.data_inicio)),
            dias: f.dias.to_string(),
            status: f.status.label().to_string(),
        }
    }
}

impl FeriasForm {
    pub fn into_dto(&self) -> Result<FeriasUpdateDto, FormError> {
        let data_inicio = parse_input_date(&self.data_inicio).ok_or(FormError::DataInvalida)?;
        let dias = self
            .dias
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| (1..=MAX_DIAS).contains(d))
            .ok_or(FormError::DiasInvalidos)?;
        let status = FeriasStatus::from_label(&self.status)
            .ok_or_else(|| FormError::StatusInvalido(self.status.clone()))?;
        Ok(FeriasUpdateDto {
            data_inicio,
            dias,
            status,
        })
    }

    /// Último dia, para pré-visualização enquanto o usuário digita
    pub fn data_fim(&self) -> Option<NaiveDate> {
        self.into_dto()
            .ok()
            .map(|dto| dto.data_inicio + Duration::days(i64::from(dto.dias) - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(inicio: &str, dias: &str, status: &str) -> FeriasForm {
        FeriasForm {
            data_inicio: inicio.into(),
            dias: dias.into(),
            status: status.into(),
        }
    }

    #[test]
    fn builds_update_dto() {
        let dto = form("2025-07-01", " 20 ", "Confirmada").into_dto().unwrap();
        assert_eq!(dto.dias, 20);
        assert_eq!(dto.status, FeriasStatus::Confirmada);
        assert_eq!(
            form("2025-07-01", "20", "Confirmada").data_fim(),
            NaiveDate::from_ymd_opt(2025, 7, 20)
        );
    }

    #[test]
    fn validates_days_range() {
        assert_eq!(form("2025-07-01", "0", "Planejada").into_dto(), Err(FormError::DiasInvalidos));
        assert_eq!(form("2025-07-01", "31", "Planejada").into_dto(), Err(FormError::DiasInvalidos));
        assert_eq!(form("2025-07-01", "dez", "Planejada").into_dto(), Err(FormError::DiasInvalidos));
    }

    #[test]
    fn validates_date_and_status() {
        assert_eq!(form("", "10", "Planejada").into_dto(), Err(FormError::DataInvalida));
        assert_eq!(
            form("2025-07-01", "10", "Cancelada").into_dto(),
            Err(FormError::StatusInvalido("Cancelada".into()))
        );
        assert_eq!(form("", "10", "Planejada").data_fim(), None);
    }
}
