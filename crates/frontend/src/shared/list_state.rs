//! Estado das telas de lista como redutor puro `(estado, evento) -> estado`.
//!
//! As páginas guardam um `RwSignal<ListViewState<T>>` e só o alteram via
//! [`ListViewState::apply`]. A derivação do que aparece na tela fica em
//! [`ListViewState::derive`].

use std::collections::BTreeMap;

use super::list_pipeline::{
    apply_filters, filter_options, find_field, paginate, sort_records, FieldDef, FilterValues,
    Page, Searchable, SortOrder,
};
use super::selection::{Identified, SelectionState};

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    LoadStarted,
    Loaded(Vec<T>),
    LoadFailed(String),
    SearchChanged(String),
    FilterChanged { key: String, value: String },
    FiltersCleared,
    SortToggled(&'static str),
    PageRequested(usize),
    PageSizeChanged(usize),
    ToggleAll(bool),
    ToggleOne { id: String, checked: bool },
    SelectionCleared,
    ErrorDismissed,
}

/// Resultado derivado para renderização
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub page: Page<T>,
    pub options: BTreeMap<&'static str, Vec<String>>,
}

pub struct ListViewState<T: 'static> {
    pub fields: &'static [FieldDef<T>],
    pub records: Vec<T>,
    pub search: String,
    pub filters: FilterValues,
    pub sort: Option<SortOrder>,
    pub page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub selection: SelectionState,
}

impl<T: Clone + 'static> Clone for ListViewState<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields,
            records: self.records.clone(),
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
            loading: self.loading,
            loaded: self.loaded,
            error: self.error.clone(),
            selection: self.selection.clone(),
        }
    }
}

impl<T> ListViewState<T>
where
    T: Searchable + Identified + Clone + 'static,
{
    pub fn new(fields: &'static [FieldDef<T>], page_size: usize) -> Self {
        Self {
            fields,
            records: Vec::new(),
            search: String::new(),
            filters: FilterValues::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            loading: false,
            loaded: false,
            error: None,
            selection: SelectionState::default(),
        }
    }

    pub fn reduce(mut self, event: ListEvent<T>) -> Self {
        self.apply(event);
        self
    }

    pub fn apply(&mut self, event: ListEvent<T>) {
        match event {
            ListEvent::LoadStarted => {
                self.loading = true;
            }
            ListEvent::Loaded(records) => {
                self.records = records;
                self.loading = false;
                self.loaded = true;
                self.error = None;
                let existing: Vec<String> = self.records.iter().map(Identified::row_id).collect();
                self.selection = std::mem::take(&mut self.selection)
                    .retain_existing(existing.iter().map(String::as_str));
                self.clamp_page();
            }
            ListEvent::LoadFailed(message) => {
                // os registros anteriores continuam visíveis
                self.loading = false;
                self.error = Some(message);
            }
            ListEvent::SearchChanged(search) => {
                if search != self.search {
                    self.search = search;
                    self.page = 1;
                }
            }
            ListEvent::FilterChanged { key, value } => {
                let changed = if value.trim().is_empty() {
                    self.filters.remove(&key).is_some()
                } else {
                    self.filters.insert(key, value.clone()).as_deref() != Some(value.as_str())
                };
                if changed {
                    self.page = 1;
                }
            }
            ListEvent::FiltersCleared => {
                self.filters.clear();
                self.search.clear();
                self.page = 1;
            }
            ListEvent::SortToggled(key) => {
                self.sort = match self.sort {
                    Some(current) if current.key == key => Some(SortOrder {
                        key,
                        ascending: !current.ascending,
                    }),
                    _ => Some(SortOrder {
                        key,
                        ascending: true,
                    }),
                };
            }
            ListEvent::PageRequested(page) => {
                self.page = page;
                self.clamp_page();
            }
            ListEvent::PageSizeChanged(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
            ListEvent::ToggleAll(checked) => {
                let page_ids = self.page_ids();
                self.selection = std::mem::take(&mut self.selection).select_all(&page_ids, checked);
            }
            ListEvent::ToggleOne { id, checked } => {
                let page_ids = self.page_ids();
                self.selection =
                    std::mem::take(&mut self.selection).toggle(&id, checked, &page_ids);
            }
            ListEvent::SelectionCleared => {
                self.selection = SelectionState::default();
            }
            ListEvent::ErrorDismissed => {
                self.error = None;
            }
        }
        let page_ids = self.page_ids();
        self.selection = std::mem::take(&mut self.selection).sync_page(&page_ids);
    }

    /// Registros filtrados e ordenados, ainda sem paginar
    pub fn filtered(&self) -> Vec<T> {
        let mut rows = apply_filters(&self.records, &self.search, &self.filters, self.fields);
        if let Some(order) = self.sort {
            if let Some(field) = find_field(self.fields, order.key) {
                sort_records(&mut rows, field.get, order.ascending);
            }
        }
        rows
    }

    pub fn current_page(&self) -> Page<T> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn derive(&self) -> ListView<T> {
        ListView {
            page: self.current_page(),
            options: filter_options(&self.records, self.fields),
        }
    }

    pub fn page_ids(&self) -> Vec<String> {
        self.current_page().items.iter().map(Identified::row_id).collect()
    }

    pub fn filter_value(&self, key: &str) -> String {
        self.filters.get(key).cloned().unwrap_or_default()
    }

    /// Registros completos das linhas selecionadas, na ordem da coleção
    pub fn selected_records(&self) -> Vec<T> {
        self.records
            .iter()
            .filter(|r| self.selection.is_selected(&r.row_id()))
            .cloned()
            .collect()
    }

    fn clamp_page(&mut self) {
        let total_pages = self.filtered().len().div_ceil(self.page_size);
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::MatchMode;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        nome: String,
        setor: Option<String>,
    }

    impl Searchable for Row {
        fn search_keys(&self) -> Vec<&str> {
            vec![self.nome.as_str()]
        }
    }

    impl Identified for Row {
        fn row_id(&self) -> String {
            self.id.to_string()
        }
    }

    static FIELDS: &[FieldDef<Row>] = &[
        FieldDef {
            key: "setor",
            label: "Setor",
            mode: MatchMode::Exact,
            get: |r| r.setor.clone(),
        },
        FieldDef {
            key: "nome",
            label: "Nome",
            mode: MatchMode::Contains,
            get: |r| Some(r.nome.clone()),
        },
    ];

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                nome: format!("Pessoa {:02}", id),
                setor: Some(if id % 2 == 0 { "RH" } else { "TI" }.to_string()),
            })
            .collect()
    }

    fn loaded(n: u32) -> ListViewState<Row> {
        ListViewState::new(FIELDS, 20).reduce(ListEvent::Loaded(rows(n)))
    }

    #[test]
    fn search_and_filter_reset_page() {
        let state = loaded(45).reduce(ListEvent::PageRequested(3));
        assert_eq!(state.page, 3);

        let state = state.reduce(ListEvent::SearchChanged("pessoa".into()));
        assert_eq!(state.page, 1);

        let state = state
            .reduce(ListEvent::PageRequested(2))
            .reduce(ListEvent::FilterChanged {
                key: "setor".into(),
                value: "RH".into(),
            });
        assert_eq!(state.page, 1);
        assert_eq!(state.filtered().len(), 22);
    }

    #[test]
    fn page_requests_are_clamped() {
        let state = loaded(25).reduce(ListEvent::PageRequested(9));
        assert_eq!(state.page, 2);
        let state = state.reduce(ListEvent::PageRequested(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn derive_returns_second_page() {
        let view = loaded(25).reduce(ListEvent::PageRequested(2)).derive();
        assert_eq!(view.page.items.len(), 5);
        assert_eq!(view.page.items[0].id, 21);
        assert_eq!(view.page.total_pages, 2);
        assert_eq!(view.options["setor"], vec!["RH", "TI"]);
    }

    #[test]
    fn options_come_from_unfiltered_records() {
        let view = loaded(4)
            .reduce(ListEvent::FilterChanged {
                key: "setor".into(),
                value: "TI".into(),
            })
            .derive();
        assert_eq!(view.page.total_items, 2);
        assert_eq!(view.options["setor"], vec!["RH", "TI"]);
    }

    #[test]
    fn select_all_then_deselect_one() {
        let state = loaded(30).reduce(ListEvent::ToggleAll(true));
        assert_eq!(state.selection.len(), 20);
        assert!(state.selection.all_selected);

        let state = state.reduce(ListEvent::ToggleOne {
            id: "5".into(),
            checked: false,
        });
        assert_eq!(state.selection.len(), 19);
        assert!(!state.selection.all_selected);
    }

    #[test]
    fn changing_page_recomputes_select_all() {
        let state = loaded(30)
            .reduce(ListEvent::ToggleAll(true))
            .reduce(ListEvent::PageRequested(2));
        assert!(!state.selection.all_selected);
        assert_eq!(state.selection.len(), 20);
    }

    #[test]
    fn failed_reload_keeps_last_good_records() {
        let state = loaded(3)
            .reduce(ListEvent::LoadStarted)
            .reduce(ListEvent::LoadFailed("Erro 500".into()));
        assert_eq!(state.records.len(), 3);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Erro 500"));

        let state = state.reduce(ListEvent::ErrorDismissed);
        assert!(state.error.is_none());
    }

    #[test]
    fn reload_drops_missing_selection_and_clamps_page() {
        let state = loaded(25)
            .reduce(ListEvent::PageRequested(2))
            .reduce(ListEvent::ToggleAll(true));
        assert_eq!(state.selection.len(), 5);

        let state = state.reduce(ListEvent::Loaded(rows(20)));
        assert_eq!(state.page, 1);
        assert!(state.selection.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn sort_toggles_direction() {
        let state = loaded(3).reduce(ListEvent::SortToggled("nome"));
        assert_eq!(state.filtered()[0].id, 1);
        let state = state.reduce(ListEvent::SortToggled("nome"));
        assert_eq!(state.filtered()[0].id, 3);
        assert_eq!(state.records[0].id, 1);
    }

    #[test]
    fn clearing_filters_resets_search_too() {
        let state = loaded(5)
            .reduce(ListEvent::SearchChanged("01".into()))
            .reduce(ListEvent::FilterChanged {
                key: "setor".into(),
                value: "TI".into(),
            })
            .reduce(ListEvent::FiltersCleared);
        assert_eq!(state.filtered().len(), 5);
        assert_eq!(state.filter_value("setor"), "");
    }

    #[test]
    fn selected_records_follow_collection_order() {
        let state = loaded(5)
            .reduce(ListEvent::ToggleOne {
                id: "4".into(),
                checked: true,
            })
            .reduce(ListEvent::ToggleOne {
                id: "2".into(),
                checked: true,
            });
        let ids: Vec<u32> = state.selected_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
