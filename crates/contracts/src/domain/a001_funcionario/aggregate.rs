use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Registro
// ============================================================================

/// Funcionário, identificado pela matrícula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funcionario {
    pub matricula: String,
    pub nome: String,

    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub setor: Option<String>,
    /// "Ativo" / "Inativo"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data_admissao: Option<NaiveDate>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Funcionario {
    pub fn is_ativo(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case(STATUS_ATIVO))
            .unwrap_or(false)
    }

    pub fn to_dto(&self) -> FuncionarioDto {
        FuncionarioDto {
            matricula: self.matricula.clone(),
            nome: self.nome.clone(),
            cargo: self.cargo.clone(),
            categoria: self.categoria.clone(),
            setor: self.setor.clone(),
            status: self.status.clone().unwrap_or_else(|| STATUS_ATIVO.to_string()),
            data_admissao: self.data_admissao,
            email: self.email.clone(),
        }
    }
}

pub const STATUS_ATIVO: &str = "Ativo";
pub const STATUS_INATIVO: &str = "Inativo";

// ============================================================================
// DTO
// ============================================================================

/// Corpo de criação e edição (`POST /funcionarios`, `PUT /funcionarios/{matricula}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncionarioDto {
    pub matricula: String,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setor: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_admissao: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for FuncionarioDto {
    fn default() -> Self {
        Self {
            matricula: String::new(),
            nome: String::new(),
            cargo: None,
            categoria: None,
            setor: None,
            status: STATUS_ATIVO.to_string(),
            data_admissao: None,
            email: None,
        }
    }
}

/// Query string de `GET /funcionarios`. Busca e paginação são locais, sobre a
/// coleção inteira.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuncionarioQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FuncionarioQuery {
    pub fn ativos() -> Self {
        Self {
            status: Some(STATUS_ATIVO.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_record() {
        let f: Funcionario =
            serde_json::from_str(r#"{"matricula":"001","nome":"Ana Silva"}"#).unwrap();
        assert_eq!(f.matricula, "001");
        assert!(f.categoria.is_none());
        assert!(!f.is_ativo());
    }

    #[test]
    fn status_is_case_insensitive() {
        let f: Funcionario = serde_json::from_str(
            r#"{"matricula":"002","nome":"Bruno","status":"ATIVO","data_admissao":"2020-02-01"}"#,
        )
        .unwrap();
        assert!(f.is_ativo());
        assert_eq!(f.to_dto().data_admissao, NaiveDate::from_ymd_opt(2020, 2, 1));
    }

    #[test]
    fn dto_skips_empty_optionals() {
        let dto = FuncionarioDto {
            matricula: "003".into(),
            nome: "Carla".into(),
            ..FuncionarioDto::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status"], "Ativo");
        assert!(json.get("cargo").is_none());
    }
}
