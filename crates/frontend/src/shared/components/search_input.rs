use leptos::prelude::*;
use wasm_bindgen::JsCast;

const DEBOUNCE_MS: i32 = 300;

/// Busca por nome ou matrícula com debounce e botão de limpar
#[component]
pub fn SearchInput(
    /// Valor aplicado (após debounce)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar por nome ou matrícula...".to_string()
    } else {
        placeholder
    };

    // texto digitado, antes do debounce
    let input_value = RwSignal::new(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    // filtros limpos por fora também limpam o campo
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() && !input_value.get_untracked().trim().is_empty() {
            input_value.set(String::new());
        }
    });

    let cancel_pending = move || {
        if let (Some(id), Some(window)) = (debounce_timeout.get_value(), web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
        debounce_timeout.set_value(None);
    };

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            Ok(id) => debounce_timeout.set_value(Some(id)),
            Err(e) => log::error!("setTimeout falhou: {:?}", e),
        }
        closure.forget();
    };

    let clear = move |_| {
        cancel_pending();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
