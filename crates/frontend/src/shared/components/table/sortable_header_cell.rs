//! Cabeçalho de coluna que alterna a ordenação ao clicar
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Nome"
//!     sort_key="nome"
//!     sort=Signal::derive(move || state.with(|s| s.sort))
//!     on_sort=Callback::new(move |key| dispatch(ListEvent::SortToggled(key)))
//! />
//! ```

use crate::shared::list_pipeline::SortOrder;
use leptos::prelude::*;
use thaw::*;

/// Indicador exibido ao lado do rótulo
pub fn sort_indicator(sort: Option<SortOrder>, key: &str) -> &'static str {
    match sort {
        Some(order) if order.key == key => {
            if order.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    /// Chave do campo na tabela de campos da tela
    sort_key: &'static str,
    #[prop(into)] sort: Signal<Option<SortOrder>>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 120.0)] min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div class="table__sortable-header" on:click=move |_| on_sort.run(sort_key)>
                {label}
                <span class=move || {
                    if sort.get().is_some_and(|o| o.key == sort_key) {
                        "table__sort-indicator table__sort-indicator--active"
                    } else {
                        "table__sort-indicator"
                    }
                }>
                    {move || sort_indicator(sort.get(), sort_key)}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_sort() {
        let asc = Some(SortOrder { key: "nome", ascending: true });
        let desc = Some(SortOrder { key: "nome", ascending: false });
        assert_eq!(sort_indicator(asc, "nome"), " ▲");
        assert_eq!(sort_indicator(desc, "nome"), " ▼");
        assert_eq!(sort_indicator(asc, "setor"), " ⇅");
        assert_eq!(sort_indicator(None, "nome"), " ⇅");
    }
}
