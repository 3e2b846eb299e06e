use crate::shared::icons::icon;
use leptos::prelude::*;

/// Painel de filtros recolhível com a paginação no cabeçalho
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Filtros ativos (badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)] pagination_controls: ViewFn,

    #[prop(into)] filter_content: ViewFn,

    /// Limpa todos os filtros e a busca
    on_clear: Callback<()>,
) -> impl IntoView {
    let toggle_expanded = move |_| is_expanded.update(|e| *e = !*e);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_clear.run(())
                    >
                        {icon("x")}
                        "Limpar filtros"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{filter_content.run()}</div>
            </div>
        </div>
    }
}
