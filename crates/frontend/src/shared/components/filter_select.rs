use leptos::prelude::*;

/// Select de filtro: a primeira opção ("Todos") limpa o filtro
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// Valor atual; vazio = sem filtro
    #[prop(into)]
    value: Signal<String>,
    /// Valores distintos presentes na coleção
    #[prop(into)]
    options: Signal<Vec<String>>,
    on_change: Callback<String>,
    #[prop(optional, into)] all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| "Todos".to_string());

    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class=move || {
                    if value.get().is_empty() {
                        "filter-select__input"
                    } else {
                        "filter-select__input filter-select__input--active"
                    }
                }
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="">{all_label}</option>
                {move || {
                    let current = value.get();
                    let mut opts = options.get();
                    // mantém selecionável um valor que saiu da coleção
                    if !current.is_empty() && !opts.contains(&current) {
                        opts.insert(0, current.clone());
                    }
                    opts.into_iter()
                        .map(|opt| {
                            let selected = opt == current;
                            view! {
                                <option value=opt.clone() selected=selected>{opt.clone()}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
