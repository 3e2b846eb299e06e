//! Seleção de linhas nas tabelas.
//!
//! O "selecionar todos" vale só para a página visível: marcar substitui a
//! seleção pelos ids da página, desmarcar esvazia. Desmarcar qualquer linha
//! derruba o flag.

use std::collections::HashSet;

/// Registros com id estável de linha
pub trait Identified {
    fn row_id(&self) -> String;
}

pub fn toggle_select_all(page_ids: &[String], checked: bool) -> HashSet<String> {
    if checked {
        page_ids.iter().cloned().collect()
    } else {
        HashSet::new()
    }
}

pub fn toggle_one(selected: &HashSet<String>, id: &str, checked: bool) -> HashSet<String> {
    let mut next = selected.clone();
    if checked {
        next.insert(id.to_string());
    } else {
        next.remove(id);
    }
    next
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub ids: HashSet<String>,
    pub all_selected: bool,
}

impl SelectionState {
    pub fn select_all(self, page_ids: &[String], checked: bool) -> Self {
        Self {
            ids: toggle_select_all(page_ids, checked),
            all_selected: checked && !page_ids.is_empty(),
        }
    }

    pub fn toggle(self, id: &str, checked: bool, page_ids: &[String]) -> Self {
        let ids = toggle_one(&self.ids, id, checked);
        let all_selected = checked && page_fully_selected(&ids, page_ids);
        Self { ids, all_selected }
    }

    /// Recalcula o flag a partir das linhas visíveis
    pub fn sync_page(mut self, page_ids: &[String]) -> Self {
        self.all_selected = page_fully_selected(&self.ids, page_ids);
        self
    }

    /// Remove ids que sumiram após um recarregamento
    pub fn retain_existing<'a, I>(mut self, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let existing: HashSet<&str> = existing.into_iter().collect();
        self.ids.retain(|id| existing.contains(id.as_str()));
        self
    }

    pub fn clear(self) -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids em ordem estável, para montar corpos de requisição
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Alguns, mas não todos, da página selecionados
    pub fn is_partial(&self, page_ids: &[String]) -> bool {
        let on_page = page_ids.iter().filter(|id| self.ids.contains(*id)).count();
        on_page > 0 && on_page < page_ids.len()
    }
}

fn page_fully_selected(ids: &HashSet<String>, page_ids: &[String]) -> bool {
    !page_ids.is_empty() && page_ids.iter().all(|id| ids.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
        range.map(|i| format!("{:03}", i)).collect()
    }

    #[test]
    fn select_all_then_deselect_one() {
        let page = ids(1..=20);
        let state = SelectionState::default().select_all(&page, true);
        assert_eq!(state.len(), 20);
        assert!(state.all_selected);

        let state = state.toggle("007", false, &page);
        assert_eq!(state.len(), 19);
        assert!(!state.all_selected);
        assert!(state.is_partial(&page));
    }

    #[test]
    fn unchecking_select_all_clears() {
        let page = ids(1..=3);
        let state = SelectionState::default()
            .toggle("999", true, &page)
            .select_all(&page, false);
        assert!(state.is_empty());
        assert!(!state.all_selected);
    }

    #[test]
    fn select_all_replaces_previous_selection() {
        let page = ids(1..=2);
        let set = toggle_select_all(&page, true);
        let set = toggle_one(&set, "050", true);
        let replaced = toggle_select_all(&page, true);
        assert_eq!(set.len(), 3);
        assert_eq!(replaced.len(), 2);
    }

    #[test]
    fn selecting_last_row_sets_flag() {
        let page = ids(1..=2);
        let state = SelectionState::default()
            .toggle("001", true, &page)
            .toggle("002", true, &page);
        assert!(state.all_selected);
    }

    #[test]
    fn flag_follows_the_visible_page() {
        let first = ids(1..=2);
        let second = ids(3..=4);
        let state = SelectionState::default().select_all(&first, true);
        let state = state.sync_page(&second);
        assert!(!state.all_selected);
        assert_eq!(state.len(), 2);
        let state = state.sync_page(&first);
        assert!(state.all_selected);
        assert!(!state.sync_page(&[]).all_selected);
    }

    #[test]
    fn retain_existing_drops_deleted_rows() {
        let page = ids(1..=3);
        let state = SelectionState::default()
            .select_all(&page, true)
            .retain_existing(["001", "003"]);
        assert_eq!(state.sorted_ids(), vec!["001", "003"]);
    }
}
