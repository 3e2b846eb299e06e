use contracts::domain::a002_ferias::aggregate::Ferias;

use crate::shared::date_utils::{format_naive, month_label};
use crate::shared::export::ExcelExportable;
use crate::shared::list_pipeline::{FieldDef, MatchMode, Searchable};
use crate::shared::selection::{Identified, SelectionState};

pub static FIELDS: &[FieldDef<Ferias>] = &[
    FieldDef {
        key: "matricula",
        label: "Matrícula",
        mode: MatchMode::Contains,
        get: |f| Some(f.matricula.clone()),
    },
    FieldDef {
        key: "nome",
        label: "Funcionário",
        mode: MatchMode::Contains,
        get: |f| f.nome_funcionario().map(str::to_string),
    },
    FieldDef {
        key: "status",
        label: "Status",
        mode: MatchMode::Exact,
        get: |f| Some(f.status.label().to_string()),
    },
    FieldDef {
        key: "categoria",
        label: "Categoria",
        mode: MatchMode::Exact,
        get: |f| f.funcionario.as_ref().and_then(|x| x.categoria.clone()),
    },
    FieldDef {
        key: "setor",
        label: "Setor",
        mode: MatchMode::Exact,
        get: |f| f.funcionario.as_ref().and_then(|x| x.setor.clone()),
    },
    FieldDef {
        key: "mes",
        label: "Mês de início",
        mode: MatchMode::Exact,
        get: |f| Some(month_label(f.data_inicio)),
    },
    FieldDef {
        key: "data_inicio",
        label: "Início",
        mode: MatchMode::Contains,
        get: |f| Some(f.data_inicio.format("%Y-%m-%d").to_string()),
    },
    FieldDef {
        key: "dias",
        label: "Dias",
        mode: MatchMode::Contains,
        get: |f| Some(f.dias.to_string()),
    },
];

pub const SELECT_FILTERS: [&str; 4] = ["status", "categoria", "setor", "mes"];

impl Searchable for Ferias {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.matricula.as_str()];
        keys.extend(self.nome_funcionario());
        keys
    }
}

impl Identified for Ferias {
    fn row_id(&self) -> String {
        self.id.to_string()
    }
}

impl ExcelExportable for Ferias {
    fn headers() -> Vec<&'static str> {
        vec!["Matrícula", "Funcionário", "Setor", "Início", "Fim", "Dias", "Status", "Período aquisitivo"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.matricula.clone(),
            self.nome_funcionario().unwrap_or_default().to_string(),
            self.funcionario
                .as_ref()
                .and_then(|f| f.setor.clone())
                .unwrap_or_default(),
            format_naive(self.data_inicio),
            format_naive(self.data_fim_efetiva()),
            self.dias.to_string(),
            self.status.label().to_string(),
            self.periodo_aquisitivo.clone().unwrap_or_default(),
        ]
    }
}

/// Ids numéricos das férias selecionadas, em ordem
pub fn selected_ids(selection: &SelectionState) -> Vec<i64> {
    let mut ids: Vec<i64> = selection
        .sorted_ids()
        .iter()
        .filter_map(|id| id.parse().ok())
        .collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{apply_filters, filter_options, FilterValues};
    use chrono::NaiveDate;
    use contracts::domain::a001_funcionario::aggregate::Funcionario;
    use contracts::domain::a002_ferias::aggregate::FeriasStatus;

    fn ferias(id: i64, nome: &str, setor: &str, inicio: (i32, u32, u32), status: FeriasStatus) -> Ferias {
        Ferias {
            id,
            matricula: format!("{:03}", id),
            funcionario: Some(Funcionario {
                matricula: format!("{:03}", id),
                nome: nome.into(),
                cargo: None,
                categoria: Some("CLT".into()),
                setor: Some(setor.into()),
                status: Some("Ativo".into()),
                data_admissao: None,
                email: None,
            }),
            data_inicio: NaiveDate::from_ymd_opt(inicio.0, inicio.1, inicio.2).unwrap(),
            dias: 15,
            data_fim: None,
            status,
            periodo_aquisitivo: None,
            planejamento_id: Some(1),
        }
    }

    fn sample() -> Vec<Ferias> {
        vec![
            ferias(1, "Ana Silva", "Financeiro", (2025, 1, 6), FeriasStatus::Planejada),
            ferias(2, "Bruno Costa", "Operações", (2025, 3, 3), FeriasStatus::Confirmada),
            ferias(10, "Carla Souza", "Financeiro", (2025, 3, 17), FeriasStatus::Planejada),
        ]
    }

    #[test]
    fn filters_by_nested_setor_and_month() {
        let mut filters = FilterValues::new();
        filters.insert("setor".into(), "financeiro".into());
        filters.insert("mes".into(), "03 - Março".into());
        let rows = apply_filters(&sample(), "", &filters, FIELDS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 10);
    }

    #[test]
    fn search_reaches_nested_name() {
        let rows = apply_filters(&sample(), "bruno", &FilterValues::new(), FIELDS);
        assert_eq!(rows.iter().map(|f| f.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn month_and_status_options() {
        let options = filter_options(&sample(), FIELDS);
        assert_eq!(options["mes"], vec!["01 - Janeiro", "03 - Março"]);
        assert_eq!(options["status"], vec!["Confirmada", "Planejada"]);
    }

    #[test]
    fn selected_ids_are_numeric_and_sorted() {
        let selection = SelectionState::default()
            .toggle("10", true, &[])
            .toggle("2", true, &[]);
        assert_eq!(selected_ids(&selection), vec![2, 10]);
    }
}
