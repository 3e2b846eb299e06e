use contracts::domain::a001_funcionario::aggregate::{
    Funcionario, FuncionarioDto, STATUS_ATIVO, STATUS_INATIVO,
};
use contracts::shared::list_response::MutationResponse;

use crate::domain::a001_funcionario::api;
use crate::shared::date_utils::{parse_input_date, to_input_date};
use crate::shared::http::ApiResult;
use crate::system::auth::context::AuthSession;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Matrícula é obrigatória")]
    MatriculaVazia,
    #[error("Nome é obrigatório")]
    NomeVazio,
    #[error("Status deve ser Ativo ou Inativo")]
    StatusInvalido,
    #[error("Data de admissão inválida")]
    DataInvalida,
    #[error("E-mail inválido")]
    EmailInvalido,
}

/// Valores crus dos campos, como digitados
#[derive(Debug, Clone, PartialEq)]
pub struct FuncionarioForm {
    pub matricula: String,
    pub nome: String,
    pub cargo: String,
    pub categoria: String,
    pub setor: String,
    pub status: String,
    pub data_admissao: String,
    pub email: String,
}

impl Default for FuncionarioForm {
    fn default() -> Self {
        Self {
            matricula: String::new(),
            nome: String::new(),
            cargo: String::new(),
            categoria: String::new(),
            setor: String::new(),
            status: STATUS_ATIVO.to_string(),
            data_admissao: String::new(),
            email: String::new(),
        }
    }
}

impl From<&Funcionario> for FuncionarioForm {
    fn from(f: &Funcionario) -> Self {
        let dto = f.to_dto();
        Self {
            matricula: dto.matricula,
            nome: dto.nome,
            cargo: dto.cargo.unwrap_or_default(),
            categoria: dto.categoria.unwrap_or_default(),
            setor: dto.setor.unwrap_or_default(),
            status: dto.status,
            data_admissao: to_input_date(dto.data_admissao),
            email: dto.email.unwrap_or_default(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl FuncionarioForm {
    pub fn into_dto(self) -> Result<FuncionarioDto, FormError> {
        let matricula = self.matricula.trim().to_string();
        if matricula.is_empty() {
            return Err(FormError::MatriculaVazia);
        }
        let nome = self.nome.trim().to_string();
        if nome.is_empty() {
            return Err(FormError::NomeVazio);
        }
        let status = [STATUS_ATIVO, STATUS_INATIVO]
            .into_iter()
            .find(|s| s.eq_ignore_ascii_case(self.status.trim()))
            .ok_or(FormError::StatusInvalido)?;
        let data_admissao = match optional(&self.data_admissao) {
            Some(raw) => Some(parse_input_date(&raw).ok_or(FormError::DataInvalida)?),
            None => None,
        };
        let email = optional(&self.email);
        if let Some(email) = &email {
            let valid = email
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
            if !valid {
                return Err(FormError::EmailInvalido);
            }
        }

        Ok(FuncionarioDto {
            matricula,
            nome,
            cargo: optional(&self.cargo),
            categoria: optional(&self.categoria),
            setor: optional(&self.setor),
            status: status.to_string(),
            data_admissao,
            email,
        })
    }
}

/// `original` é a matrícula do registro em edição; `None` cria um novo
pub async fn save(
    session: &AuthSession,
    original: Option<&str>,
    dto: &FuncionarioDto,
) -> ApiResult<MutationResponse> {
    match original {
        Some(matricula) => api::update(session, matricula, dto).await,
        None => api::create(session, dto).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> FuncionarioForm {
        FuncionarioForm {
            matricula: " 010 ".into(),
            nome: "Daniela Prado".into(),
            cargo: "  ".into(),
            setor: "RH".into(),
            data_admissao: "2023-04-10".into(),
            email: "daniela@empresa.com.br".into(),
            ..FuncionarioForm::default()
        }
    }

    #[test]
    fn normalizes_fields() {
        let dto = filled().into_dto().unwrap();
        assert_eq!(dto.matricula, "010");
        assert_eq!(dto.cargo, None);
        assert_eq!(dto.setor.as_deref(), Some("RH"));
        assert_eq!(dto.status, "Ativo");
        assert_eq!(dto.data_admissao, NaiveDate::from_ymd_opt(2023, 4, 10));
    }

    #[test]
    fn required_fields() {
        let mut form = filled();
        form.matricula = "   ".into();
        assert_eq!(form.into_dto(), Err(FormError::MatriculaVazia));

        let mut form = filled();
        form.nome.clear();
        assert_eq!(form.into_dto(), Err(FormError::NomeVazio));
    }

    #[test]
    fn rejects_bad_values() {
        let mut form = filled();
        form.status = "Férias".into();
        assert_eq!(form.into_dto(), Err(FormError::StatusInvalido));

        let mut form = filled();
        form.email = "daniela".into();
        assert_eq!(form.into_dto(), Err(FormError::EmailInvalido));

        let mut form = filled();
        form.data_admissao = "10/04/2023".into();
        assert_eq!(form.into_dto(), Err(FormError::DataInvalida));
    }

    #[test]
    fn status_is_canonicalized() {
        let mut form = filled();
        form.status = "inativo".into();
        assert_eq!(form.into_dto().unwrap().status, "Inativo");
    }
}
