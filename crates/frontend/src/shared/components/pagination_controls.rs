use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    First,
    Prev,
    Next,
    Last,
}

/// Página de destino, ou `None` quando o botão não tem para onde ir
fn target(nav: Nav, current: usize, total: usize) -> Option<usize> {
    let page = match nav {
        Nav::First => 1,
        Nav::Prev => current.saturating_sub(1),
        Nav::Next => current + 1,
        Nav::Last => total,
    };
    (page >= 1 && page <= total && page != current).then_some(page)
}

/// "p / total (itens)"; sem páginas mostra 0
fn page_info(current: usize, total: usize, count: usize) -> String {
    let page = if total == 0 { 0 } else { current.min(total) };
    format!("{} / {} ({})", page, total, count)
}

/// Paginação 1-indexada: primeira, anterior, "p / total (itens)", próxima,
/// última e seletor de tamanho de página
#[component]
pub fn PaginationControls(
    /// Página atual (1-indexada)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Total de itens após os filtros
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)] page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Opções de tamanho de página (padrão: configuração da aplicação)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options
        .unwrap_or_else(|| crate::config::config().lista.page_size_options.clone());

    let nav_button = move |nav: Nav, icon_name: &'static str, title: &'static str| {
        let dest = move || target(nav, current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = dest() {
                        on_page_change.run(page);
                    }
                }
                disabled=move || dest().is_none()
                title=title
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button(Nav::First, "chevrons-left", "Primeira página")}
            {nav_button(Nav::Prev, "chevron-left", "Página anterior")}
            <span class="pagination-info">
                {move || page_info(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            {nav_button(Nav::Next, "chevron-right", "Próxima página")}
            {nav_button(Nav::Last, "chevrons-right", "Última página")}
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_targets_stay_in_range() {
        assert_eq!(target(Nav::Prev, 1, 3), None);
        assert_eq!(target(Nav::First, 1, 3), None);
        assert_eq!(target(Nav::Next, 2, 3), Some(3));
        assert_eq!(target(Nav::Next, 3, 3), None);
        assert_eq!(target(Nav::Last, 1, 3), Some(3));
        assert_eq!(target(Nav::Last, 1, 0), None);
    }

    #[test]
    fn info_shows_zero_without_pages() {
        assert_eq!(page_info(1, 0, 0), "0 / 0 (0)");
        assert_eq!(page_info(2, 5, 93), "2 / 5 (93)");
    }
}
