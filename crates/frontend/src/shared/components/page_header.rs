use leptos::prelude::*;
use thaw::Badge;

/// Cabeçalho das páginas analíticas: título, contador opcional, subtítulo e
/// ações à direita
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Registros após filtros; sem valor o badge some
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|n| view! { <Badge>{n.to_string()}</Badge> })}
                {move || subtitle.get().map(|s| view! { <span class="page__subtitle">{s}</span> })}
            </div>
            <div class="page__header-right">{children()}</div>
        </div>
    }
}
