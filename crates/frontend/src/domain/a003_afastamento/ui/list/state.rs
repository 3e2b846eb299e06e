use contracts::domain::a003_afastamento::aggregate::Afastamento;

use crate::shared::date_utils::format_naive;
use crate::shared::export::ExcelExportable;
use crate::shared::list_pipeline::{FieldDef, MatchMode, Searchable};
use crate::shared::selection::Identified;

pub fn sim_nao(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}

pub static FIELDS: &[FieldDef<Afastamento>] = &[
    FieldDef {
        key: "matricula",
        label: "Matrícula",
        mode: MatchMode::Contains,
        get: |a| Some(a.matricula.clone()),
    },
    FieldDef {
        key: "nome",
        label: "Funcionário",
        mode: MatchMode::Contains,
        get: |a| a.nome_funcionario().map(str::to_string),
    },
    FieldDef {
        key: "motivo",
        label: "Motivo",
        mode: MatchMode::Exact,
        get: |a| Some(a.motivo.clone()),
    },
    FieldDef {
        key: "impacta_ferias",
        label: "Impacta férias",
        mode: MatchMode::Exact,
        get: |a| Some(sim_nao(a.impacta_ferias).to_string()),
    },
    FieldDef {
        key: "categoria",
        label: "Categoria",
        mode: MatchMode::Exact,
        get: |a| a.funcionario.as_ref().and_then(|f| f.categoria.clone()),
    },
    FieldDef {
        key: "data_inicio",
        label: "Início",
        mode: MatchMode::Contains,
        get: |a| Some(a.data_inicio.format("%Y-%m-%d").to_string()),
    },
    FieldDef {
        key: "data_fim",
        label: "Fim",
        mode: MatchMode::Contains,
        get: |a| Some(a.data_fim.format("%Y-%m-%d").to_string()),
    },
    FieldDef {
        key: "dias",
        label: "Dias",
        mode: MatchMode::Contains,
        get: |a| Some(a.dias().to_string()),
    },
];

pub const SELECT_FILTERS: [&str; 3] = ["motivo", "impacta_ferias", "categoria"];

impl Searchable for Afastamento {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.matricula.as_str()];
        keys.extend(self.nome_funcionario());
        keys
    }
}

impl Identified for Afastamento {
    fn row_id(&self) -> String {
        self.id.to_string()
    }
}

impl ExcelExportable for Afastamento {
    fn headers() -> Vec<&'static str> {
        vec!["Matrícula", "Funcionário", "Motivo", "Início", "Fim", "Dias", "Impacta férias", "Observação"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.matricula.clone(),
            self.nome_funcionario().unwrap_or_default().to_string(),
            self.motivo.clone(),
            format_naive(self.data_inicio),
            format_naive(self.data_fim),
            self.dias().to_string(),
            sim_nao(self.impacta_ferias).to_string(),
            self.observacao.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{apply_filters, filter_options, FilterValues};
    use chrono::NaiveDate;

    fn afastamento(id: i64, motivo: &str, impacta: bool) -> Afastamento {
        Afastamento {
            id,
            matricula: format!("{:03}", id),
            funcionario: None,
            motivo: motivo.into(),
            data_inicio: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            impacta_ferias: impacta,
            observacao: None,
        }
    }

    #[test]
    fn impacta_ferias_filter_uses_labels() {
        let rows = vec![
            afastamento(1, "Licença médica", true),
            afastamento(2, "Atestado", false),
        ];
        let mut filters = FilterValues::new();
        filters.insert("impacta_ferias".into(), "não".into());
        let out = apply_filters(&rows, "", &filters, FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn categoria_missing_without_funcionario() {
        let rows = vec![afastamento(1, "Atestado", false)];
        let mut filters = FilterValues::new();
        filters.insert("categoria".into(), "CLT".into());
        assert!(apply_filters(&rows, "", &filters, FIELDS).is_empty());
        assert!(filter_options(&rows, FIELDS)["categoria"].is_empty());
    }

    #[test]
    fn motivo_options_sorted_ignoring_accents() {
        let rows = vec![
            afastamento(1, "Licença médica", true),
            afastamento(2, "Atestado", false),
            afastamento(3, "Acidente de trabalho", true),
        ];
        assert_eq!(
            filter_options(&rows, FIELDS)["motivo"],
            vec!["Acidente de trabalho", "Atestado", "Licença médica"]
        );
    }
}
