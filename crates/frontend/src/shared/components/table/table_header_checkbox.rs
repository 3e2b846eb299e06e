//! Checkbox do cabeçalho: seleciona ou desmarca todas as linhas da página
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     checked=Signal::derive(move || state.with(|s| s.selection.all_selected))
//!     partial=Signal::derive(move || state.with(|s| s.selection.is_partial(&s.page_ids())))
//!     on_change=Callback::new(move |all| dispatch(ListEvent::ToggleAll(all)))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    fn from_flags(checked: bool, partial: bool) -> Self {
        if checked {
            CheckboxState::Checked
        } else if partial {
            CheckboxState::Indeterminate
        } else {
            CheckboxState::Unchecked
        }
    }
}

#[component]
pub fn TableHeaderCheckbox(
    /// Todas as linhas da página selecionadas
    #[prop(into)]
    checked: Signal<bool>,
    /// Parte das linhas da página selecionada
    #[prop(into)]
    partial: Signal<bool>,
    /// true = selecionar todas, false = desmarcar todas
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || CheckboxState::from_flags(checked.get(), partial.get()));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate só existe como propriedade do DOM
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Selecionar página"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_flags() {
        assert_eq!(CheckboxState::from_flags(true, false), CheckboxState::Checked);
        assert_eq!(CheckboxState::from_flags(false, true), CheckboxState::Indeterminate);
        assert_eq!(CheckboxState::from_flags(false, false), CheckboxState::Unchecked);
    }
}
