use chrono::NaiveDate;
use contracts::domain::a004_planejamento::aggregate::{EventoPlanejado, TipoEvento};

use crate::shared::date_utils::{format_naive, month_label, month_name};
use crate::shared::export::ExcelExportable;
use crate::shared::list_pipeline::{FieldDef, MatchMode, Searchable};
use crate::shared::selection::Identified;

pub static FIELDS: &[FieldDef<EventoPlanejado>] = &[
    FieldDef {
        key: "tipo",
        label: "Tipo",
        mode: MatchMode::Exact,
        get: |e| Some(e.tipo.label().to_string()),
    },
    FieldDef {
        key: "matricula",
        label: "Matrícula",
        mode: MatchMode::Contains,
        get: |e| Some(e.matricula.clone()),
    },
    FieldDef {
        key: "nome",
        label: "Funcionário",
        mode: MatchMode::Contains,
        get: |e| e.nome_funcionario().map(str::to_string),
    },
    FieldDef {
        key: "categoria",
        label: "Categoria",
        mode: MatchMode::Exact,
        get: |e| e.funcionario.as_ref().and_then(|f| f.categoria.clone()),
    },
    FieldDef {
        key: "setor",
        label: "Setor",
        mode: MatchMode::Exact,
        get: |e| e.funcionario.as_ref().and_then(|f| f.setor.clone()),
    },
    FieldDef {
        key: "mes",
        label: "Mês de início",
        mode: MatchMode::Exact,
        get: |e| Some(month_label(e.data_inicio)),
    },
    FieldDef {
        key: "descricao",
        label: "Situação / motivo",
        mode: MatchMode::Contains,
        get: |e| Some(e.descricao()),
    },
    FieldDef {
        key: "data_inicio",
        label: "Início",
        mode: MatchMode::Contains,
        get: |e| Some(e.data_inicio.format("%Y-%m-%d").to_string()),
    },
    FieldDef {
        key: "data_fim",
        label: "Fim",
        mode: MatchMode::Contains,
        get: |e| Some(e.data_fim.format("%Y-%m-%d").to_string()),
    },
];

pub const SELECT_FILTERS: [&str; 4] = ["tipo", "categoria", "setor", "mes"];

impl Searchable for EventoPlanejado {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.matricula.as_str()];
        keys.extend(self.nome_funcionario());
        keys
    }
}

impl Identified for EventoPlanejado {
    // férias e afastamentos vêm de tabelas diferentes, os ids podem colidir
    fn row_id(&self) -> String {
        match self.tipo {
            TipoEvento::Ferias => format!("f-{}", self.id),
            TipoEvento::Afastamento => format!("a-{}", self.id),
        }
    }
}

impl ExcelExportable for EventoPlanejado {
    fn headers() -> Vec<&'static str> {
        vec!["Tipo", "Matrícula", "Funcionário", "Setor", "Início", "Fim", "Situação / motivo"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.tipo.label().to_string(),
            self.matricula.clone(),
            self.nome_funcionario().unwrap_or_default().to_string(),
            self.funcionario
                .as_ref()
                .and_then(|f| f.setor.clone())
                .unwrap_or_default(),
            format_naive(self.data_inicio),
            format_naive(self.data_fim),
            self.descricao(),
        ]
    }
}

/// Linha do resumo mensal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumoMes {
    pub mes: u32,
    pub ferias: usize,
    pub afastamentos: usize,
}

impl ResumoMes {
    pub fn nome(&self) -> &'static str {
        month_name(self.mes)
    }

    pub fn total(&self) -> usize {
        self.ferias + self.afastamentos
    }
}

fn limites_do_mes(ano: i32, mes: u32) -> Option<(NaiveDate, NaiveDate)> {
    let inicio = NaiveDate::from_ymd_opt(ano, mes, 1)?;
    let proximo = if mes == 12 {
        NaiveDate::from_ymd_opt(ano + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(ano, mes + 1, 1)?
    };
    Some((inicio, proximo.pred_opt()?))
}

/// Quantos eventos de cada tipo tocam cada mês do ano.
///
/// Um evento que atravessa a virada de mês conta nos dois meses.
pub fn resumo_mensal(eventos: &[EventoPlanejado], ano: i32) -> Vec<ResumoMes> {
    (1..=12)
        .filter_map(|mes| {
            let (inicio, fim) = limites_do_mes(ano, mes)?;
            let mut resumo = ResumoMes {
                mes,
                ferias: 0,
                afastamentos: 0,
            };
            for e in eventos
                .iter()
                .filter(|e| e.data_inicio <= fim && e.data_fim >= inicio)
            {
                match e.tipo {
                    TipoEvento::Ferias => resumo.ferias += 1,
                    TipoEvento::Afastamento => resumo.afastamentos += 1,
                }
            }
            Some(resumo)
        })
        .collect()
}

/// Funcionários distintos com algum evento no conjunto
pub fn funcionarios_distintos(eventos: &[EventoPlanejado]) -> usize {
    let mut matriculas: Vec<&str> = eventos.iter().map(|e| e.matricula.as_str()).collect();
    matriculas.sort_unstable();
    matriculas.dedup();
    matriculas.len()
}

pub fn contar(eventos: &[EventoPlanejado], tipo: TipoEvento) -> usize {
    eventos.iter().filter(|e| e.tipo == tipo).count()
}

/// Mês com mais eventos; empate fica com o primeiro
pub fn mes_de_pico(resumo: &[ResumoMes]) -> Option<&ResumoMes> {
    resumo
        .iter()
        .filter(|r| r.total() > 0)
        .fold(None, |pico: Option<&ResumoMes>, r| match pico {
            Some(p) if p.total() >= r.total() => Some(p),
            _ => Some(r),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{apply_filters, filter_options, FilterValues};
    use contracts::domain::a001_funcionario::aggregate::Funcionario;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    fn evento(id: i64, tipo: TipoEvento, matricula: &str, inicio: NaiveDate, fim: NaiveDate) -> EventoPlanejado {
        EventoPlanejado {
            id,
            tipo,
            matricula: matricula.into(),
            funcionario: Some(Funcionario {
                matricula: matricula.into(),
                nome: format!("Funcionário {}", matricula),
                cargo: None,
                categoria: Some("CLT".into()),
                setor: Some("Financeiro".into()),
                status: Some("Ativo".into()),
                data_admissao: None,
                email: None,
            }),
            data_inicio: inicio,
            data_fim: fim,
            status: (tipo == TipoEvento::Ferias).then(|| "Planejada".to_string()),
            motivo: (tipo == TipoEvento::Afastamento).then(|| "Atestado".to_string()),
        }
    }

    fn sample() -> Vec<EventoPlanejado> {
        vec![
            evento(1, TipoEvento::Ferias, "001", d(1, 20), d(2, 8)),
            evento(2, TipoEvento::Ferias, "002", d(3, 3), d(3, 17)),
            evento(1, TipoEvento::Afastamento, "001", d(3, 10), d(3, 12)),
        ]
    }

    #[test]
    fn month_summary_counts_overlaps() {
        let resumo = resumo_mensal(&sample(), 2025);
        assert_eq!(resumo.len(), 12);
        assert_eq!((resumo[0].ferias, resumo[0].afastamentos), (1, 0));
        assert_eq!((resumo[1].ferias, resumo[1].afastamentos), (1, 0));
        assert_eq!((resumo[2].ferias, resumo[2].afastamentos), (1, 1));
        assert_eq!(resumo[3].total(), 0);
        assert_eq!(resumo[2].nome(), "Março");
    }

    #[test]
    fn month_summary_ignores_other_years() {
        let eventos = vec![evento(
            5,
            TipoEvento::Ferias,
            "003",
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        )];
        let resumo = resumo_mensal(&eventos, 2025);
        assert_eq!(resumo[0].ferias, 1);
        assert_eq!(resumo[11].ferias, 0);
    }

    #[test]
    fn peak_month_and_counters() {
        let eventos = sample();
        let resumo = resumo_mensal(&eventos, 2025);
        assert_eq!(mes_de_pico(&resumo).map(|r| r.mes), Some(3));
        assert_eq!(mes_de_pico(&resumo_mensal(&[], 2025)), None);
        assert_eq!(funcionarios_distintos(&eventos), 2);
        assert_eq!(contar(&eventos, TipoEvento::Afastamento), 1);
    }

    #[test]
    fn row_ids_do_not_collide_between_kinds() {
        let eventos = sample();
        assert_eq!(eventos[0].row_id(), "f-1");
        assert_eq!(eventos[2].row_id(), "a-1");
    }

    #[test]
    fn filters_by_kind() {
        let mut filters = FilterValues::new();
        filters.insert("tipo".into(), "Afastamento".into());
        let rows = apply_filters(&sample(), "", &filters, FIELDS);
        assert_eq!(rows.len(), 1);
        assert_eq!(filter_options(&sample(), FIELDS)["tipo"], vec!["Afastamento", "Férias"]);
    }
}
