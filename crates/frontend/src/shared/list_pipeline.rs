//! Pipeline de listas: busca → filtros → ordenação → paginação.
//!
//! Cada tela declara uma única vez uma tabela estática de [`FieldDef`], com um
//! acessor por campo. Os filtros, as opções dos selects e a ordenação por coluna
//! saem dessa tabela. Todas as funções aqui são puras e totais: campo ausente
//! nunca é erro, apenas falha no filtro ativo e não entra nas opções.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Como o valor de um filtro é comparado com o campo do registro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Igualdade sem diferenciar maiúsculas (selects)
    Exact,
    /// Substring sem diferenciar maiúsculas (texto livre)
    Contains,
}

/// Campo filtrável/ordenável de uma tela
pub struct FieldDef<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub mode: MatchMode,
    pub get: fn(&T) -> Option<String>,
}

impl<T> Clone for FieldDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDef<T> {}

/// Valores de filtro por chave de campo. Valor vazio não restringe nada.
pub type FilterValues = BTreeMap<String, String>;

/// Registros com campos de identidade para a busca livre (nome, matrícula)
pub trait Searchable {
    fn search_keys(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: &'static str,
    pub ascending: bool,
}

/// Janela 1-indexada sobre a lista filtrada
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_items: usize,
    pub current_page: usize,
}

pub fn find_field<'a, T>(fields: &'a [FieldDef<T>], key: &str) -> Option<&'a FieldDef<T>> {
    fields.iter().find(|f| f.key == key)
}

fn matches_search<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_keys()
        .iter()
        .any(|k| k.to_lowercase().contains(needle))
}

fn matches_field<T>(record: &T, field: Option<&FieldDef<T>>, needle: &str) -> bool {
    let Some(field) = field else {
        return false;
    };
    let Some(value) = (field.get)(record) else {
        return false;
    };
    let value = value.to_lowercase();
    match field.mode {
        MatchMode::Exact => value == needle,
        MatchMode::Contains => value.contains(needle),
    }
}

/// Filtra `records` pela busca livre e pelos filtros ativos.
///
/// Preserva a ordem de entrada. Um filtro ativo cuja chave não existe em
/// `fields` é tratado como campo ausente e exclui todos os registros.
pub fn apply_filters<T>(
    records: &[T],
    search: &str,
    filters: &FilterValues,
    fields: &[FieldDef<T>],
) -> Vec<T>
where
    T: Searchable + Clone,
{
    let search = search.trim().to_lowercase();
    let active: Vec<(Option<&FieldDef<T>>, String)> = filters
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (find_field(fields, k), v.trim().to_lowercase()))
        .collect();

    records
        .iter()
        .filter(|r| search.is_empty() || matches_search(*r, &search))
        .filter(|r| {
            active
                .iter()
                .all(|(field, needle)| matches_field(*r, *field, needle))
        })
        .cloned()
        .collect()
}

/// Recorta a página `page` (1-indexada). Páginas fora do intervalo, inclusive
/// a página 0, retornam uma página vazia; quem chama decide como corrigir.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let slice = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .filter(|start| *start < total_items)
        .map(|start| {
            let end = (start + page_size).min(total_items);
            items[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        items: slice,
        total_pages,
        total_items,
        current_page: page,
    }
}

/// Valores distintos de um campo em toda a coleção, sem vazios, ordenados.
///
/// Valores que só diferem na caixa viram uma opção só, com a primeira grafia
/// encontrada; o filtro `Exact` já não distingue caixa.
pub fn distinct_options<T>(records: &[T], get: fn(&T) -> Option<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = records
        .iter()
        .filter_map(get)
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.to_lowercase()))
        .collect();
    values.sort_by(|a, b| compare_locale(a, b));
    values
}

/// Opções de todos os campos `Exact` (os que viram select na tela)
pub fn filter_options<T>(
    records: &[T],
    fields: &[FieldDef<T>],
) -> BTreeMap<&'static str, Vec<String>> {
    fields
        .iter()
        .filter(|f| f.mode == MatchMode::Exact)
        .map(|f| (f.key, distinct_options(records, f.get)))
        .collect()
}

fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn numeric_value(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Comparação "pt-BR": ignora acentos e caixa, números comparados como números.
///
/// Números vêm antes de textos. A chave é (número, colação, bytes), comparada
/// nessa ordem, então a ordem é total mesmo com valores misturados.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    let by_number = match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_number
        .then_with(|| collation_key(a).cmp(&collation_key(b)))
        .then_with(|| a.cmp(b))
}

/// Ordenação estável por um acessor. Valores ausentes ficam sempre no fim.
pub fn sort_records<T>(records: &mut [T], get: fn(&T) -> Option<String>, ascending: bool) {
    records.sort_by(|a, b| match (get(a), get(b)) {
        (Some(x), Some(y)) => {
            let ord = compare_locale(&x, &y);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Emp {
        matricula: &'static str,
        nome: &'static str,
        status: Option<&'static str>,
        cargo: Option<&'static str>,
    }

    impl Searchable for Emp {
        fn search_keys(&self) -> Vec<&str> {
            vec![self.matricula, self.nome]
        }
    }

    static FIELDS: &[FieldDef<Emp>] = &[
        FieldDef {
            key: "status",
            label: "Status",
            mode: MatchMode::Exact,
            get: |e| e.status.map(str::to_string),
        },
        FieldDef {
            key: "cargo",
            label: "Cargo",
            mode: MatchMode::Contains,
            get: |e| e.cargo.map(str::to_string),
        },
    ];

    fn emp(matricula: &'static str, nome: &'static str, status: Option<&'static str>) -> Emp {
        Emp {
            matricula,
            nome,
            status,
            cargo: None,
        }
    }

    fn sample() -> Vec<Emp> {
        vec![
            emp("001", "Ana Silva", Some("Ativo")),
            emp("002", "Bruno Costa", Some("Inativo")),
        ]
    }

    fn filters(pairs: &[(&str, &str)]) -> FilterValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_search_and_filters_is_identity() {
        let records = sample();
        assert_eq!(apply_filters(&records, "", &FilterValues::new(), FIELDS), records);
        assert_eq!(apply_filters(&records, "   ", &filters(&[("status", "")]), FIELDS), records);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let out = apply_filters(&sample(), "ana", &FilterValues::new(), FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].matricula, "001");
    }

    #[test]
    fn search_matches_matricula() {
        let out = apply_filters(&sample(), "002", &FilterValues::new(), FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].nome, "Bruno Costa");
    }

    #[test]
    fn exact_filter_selects_inactive() {
        let out = apply_filters(&sample(), "", &filters(&[("status", "Inativo")]), FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].matricula, "002");
    }

    #[test]
    fn exact_filter_does_not_match_substrings() {
        let out = apply_filters(&sample(), "", &filters(&[("status", "ativo")]), FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].matricula, "001");
    }

    #[test]
    fn contains_filter_matches_substrings() {
        let mut records = sample();
        records[0].cargo = Some("Analista de RH");
        records[1].cargo = Some("Motorista");
        let out = apply_filters(&records, "", &filters(&[("cargo", "analista")]), FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].matricula, "001");
    }

    #[test]
    fn missing_field_fails_active_filter() {
        let records = vec![emp("003", "Carla", None), emp("004", "Davi", Some("Ativo"))];
        let out = apply_filters(&records, "", &filters(&[("status", "Ativo")]), FIELDS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].matricula, "004");
    }

    #[test]
    fn unknown_filter_key_excludes_everything() {
        let out = apply_filters(&sample(), "", &filters(&[("Funcionario.xyz", "a")]), FIELDS);
        assert!(out.is_empty());
    }

    #[test]
    fn filtering_is_subset_order_preserving_and_idempotent() {
        let records: Vec<Emp> = (0..10)
            .map(|i| {
                emp(
                    ["010", "011", "012", "013", "014", "015", "016", "017", "018", "019"][i],
                    if i % 2 == 0 { "Ana" } else { "Beto" },
                    Some(if i % 3 == 0 { "Ativo" } else { "Inativo" }),
                )
            })
            .collect();
        let f = filters(&[("status", "Ativo")]);
        let once = apply_filters(&records, "an", &f, FIELDS);
        let twice = apply_filters(&once, "an", &f, FIELDS);
        assert_eq!(once, twice);
        assert!(once.iter().all(|r| records.contains(r)));
        let positions: Vec<usize> = once
            .iter()
            .map(|r| records.iter().position(|x| x == r).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = apply_filters::<Emp>(&[], "ana", &filters(&[("status", "Ativo")]), FIELDS);
        assert!(out.is_empty());
    }

    #[test]
    fn second_page_of_twenty_five() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 2, 20);
        assert_eq!(page.items, (21..=25).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn pages_reconstruct_the_list() {
        let items: Vec<u32> = (1..=47).collect();
        let first = paginate(&items, 1, 10);
        let rebuilt: Vec<u32> = (1..=first.total_pages)
            .flat_map(|p| paginate(&items, p, 10).items)
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let page = paginate::<u32>(&[], 1, 20);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!(paginate(&[1u32], 1, 20).total_pages, 1);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 0, 2).items.is_empty());
        assert!(paginate(&items, 4, 2).items.is_empty());
        assert_eq!(paginate(&items, 3, 2).items, vec![5]);
    }

    #[test]
    fn zero_page_size_behaves_as_one() {
        let items = vec![1u32, 2];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.items, vec![2]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn distinct_options_skip_empty_and_dedupe() {
        let records = vec![
            emp("1", "a", Some("Inativo")),
            emp("2", "b", None),
            emp("3", "c", Some("")),
            emp("4", "d", Some("Ativo")),
            emp("5", "e", Some("Inativo")),
        ];
        let opts = distinct_options(&records, FIELDS[0].get);
        assert_eq!(opts, vec!["Ativo".to_string(), "Inativo".to_string()]);
    }

    #[test]
    fn filter_options_cover_exact_fields_only() {
        let opts = filter_options(&sample(), FIELDS);
        assert_eq!(opts.len(), 1);
        assert_eq!(opts["status"], vec!["Ativo", "Inativo"]);
    }

    #[test]
    fn locale_order_ignores_accents_and_case() {
        let mut v = vec!["Zélia", "ângela", "Bruno", "Álvaro", "carla"];
        v.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(v, vec!["Álvaro", "ângela", "Bruno", "carla", "Zélia"]);
    }

    #[test]
    fn locale_order_compares_numbers_numerically() {
        let mut v = vec!["10", "9", "100"];
        v.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(v, vec!["9", "10", "100"]);
    }

    #[test]
    fn locale_order_puts_numbers_before_text() {
        let mut v = vec!["1a", "10", "9", "B2", "0.5", "a10"];
        v.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(v, vec!["0.5", "9", "10", "1a", "a10", "B2"]);
    }

    #[test]
    fn locale_order_is_total_on_mixed_values() {
        let sample = [
            "9", "10", "1a", "1.5", "01", "1", "-2", "a", "Á", "b", "2b", "NaN", "inf", "10x", "",
        ];
        for a in sample {
            assert_eq!(compare_locale(a, a), Ordering::Equal);
            for b in sample {
                assert_eq!(compare_locale(a, b), compare_locale(b, a).reverse(), "{a:?} x {b:?}");
                for c in sample {
                    if compare_locale(a, b) != Ordering::Greater
                        && compare_locale(b, c) != Ordering::Greater
                    {
                        assert_ne!(
                            compare_locale(a, c),
                            Ordering::Greater,
                            "{a:?} <= {b:?} <= {c:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sorting_many_mixed_codes_stays_ordered() {
        let mut codes: Vec<String> = (0..1000)
            .map(|i| match i % 3 {
                0 => format!("{}", (i * 7919) % 1000),
                1 => format!("{}a", (i * 104_729) % 1000),
                _ => format!("{}.{}x", i % 10, (i / 10) % 10),
            })
            .collect();
        codes.sort_by(|a, b| compare_locale(a, b));
        assert!(codes
            .windows(2)
            .all(|w| compare_locale(&w[0], &w[1]) != Ordering::Greater));
        let first_text = codes
            .iter()
            .position(|c| numeric_value(c).is_none())
            .unwrap();
        assert!(codes[..first_text].iter().all(|c| numeric_value(c).is_some()));
        assert!(codes[first_text..].iter().all(|c| numeric_value(c).is_none()));
    }

    #[test]
    fn distinct_options_ignore_input_order() {
        let values = ["9", "10", "1a", "Setor B", "setor á", "2"];
        let forward: Vec<Emp> = values.iter().map(|v| emp("1", "x", Some(*v))).collect();
        let backward: Vec<Emp> = values.iter().rev().map(|v| emp("1", "x", Some(*v))).collect();
        let expected = vec!["2", "9", "10", "1a", "setor á", "Setor B"];
        assert_eq!(distinct_options(&forward, FIELDS[0].get), expected);
        assert_eq!(distinct_options(&backward, FIELDS[0].get), expected);
    }

    #[test]
    fn distinct_options_merge_case_variants() {
        let records = vec![
            emp("1", "a", Some("Ativo")),
            emp("2", "b", Some("ativo")),
            emp("3", "c", Some("ATIVO")),
            emp("4", "d", Some("Inativo")),
        ];
        assert_eq!(distinct_options(&records, FIELDS[0].get), vec!["Ativo", "Inativo"]);
    }

    #[test]
    fn sort_keeps_missing_values_last() {
        let mut records = vec![
            emp("1", "a", None),
            emp("2", "b", Some("Inativo")),
            emp("3", "c", Some("Ativo")),
        ];
        sort_records(&mut records, FIELDS[0].get, false);
        let order: Vec<&str> = records.iter().map(|r| r.matricula).collect();
        assert_eq!(order, vec!["2", "3", "1"]);
    }
}
