use contracts::domain::a001_funcionario::aggregate::Funcionario;

use crate::shared::date_utils::format_naive;
use crate::shared::export::ExcelExportable;
use crate::shared::list_pipeline::{FieldDef, MatchMode, Searchable};
use crate::shared::selection::Identified;

/// Campos filtráveis e ordenáveis da lista de funcionários
pub static FIELDS: &[FieldDef<Funcionario>] = &[
    FieldDef {
        key: "matricula",
        label: "Matrícula",
        mode: MatchMode::Contains,
        get: |f| Some(f.matricula.clone()),
    },
    FieldDef {
        key: "nome",
        label: "Nome",
        mode: MatchMode::Contains,
        get: |f| Some(f.nome.clone()),
    },
    FieldDef {
        key: "cargo",
        label: "Cargo",
        mode: MatchMode::Contains,
        get: |f| f.cargo.clone(),
    },
    FieldDef {
        key: "categoria",
        label: "Categoria",
        mode: MatchMode::Exact,
        get: |f| f.categoria.clone(),
    },
    FieldDef {
        key: "setor",
        label: "Setor",
        mode: MatchMode::Exact,
        get: |f| f.setor.clone(),
    },
    FieldDef {
        key: "status",
        label: "Status",
        mode: MatchMode::Exact,
        get: |f| f.status.clone(),
    },
    FieldDef {
        key: "data_admissao",
        label: "Admissão",
        mode: MatchMode::Exact,
        get: |f| f.data_admissao.map(|d| d.format("%Y-%m-%d").to_string()),
    },
];

/// Filtros exibidos como select
pub const SELECT_FILTERS: [&str; 3] = ["status", "categoria", "setor"];

impl Searchable for Funcionario {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.nome.as_str(), self.matricula.as_str()]
    }
}

impl Identified for Funcionario {
    fn row_id(&self) -> String {
        self.matricula.clone()
    }
}

impl ExcelExportable for Funcionario {
    fn headers() -> Vec<&'static str> {
        vec!["Matrícula", "Nome", "Cargo", "Categoria", "Setor", "Status", "Admissão", "E-mail"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.matricula.clone(),
            self.nome.clone(),
            self.cargo.clone().unwrap_or_default(),
            self.categoria.clone().unwrap_or_default(),
            self.setor.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
            self.data_admissao.map(format_naive).unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
        ]
    }
}
