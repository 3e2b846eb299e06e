use contracts::domain::a002_ferias::aggregate::{Ferias, FeriasStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::{FeriasForm, MAX_DIAS};
use crate::domain::a002_ferias::api;
use crate::layout::notifications::use_notifier;
use crate::shared::date_utils::format_naive;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Edição de um período de férias: início, dias e status
#[component]
pub fn FeriasEdit(ferias: Ferias, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let form = RwSignal::new(FeriasForm::from(&ferias));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let busy = Signal::derive(move || saving.get());

    let id = ferias.id;
    let titulo = format!(
        "Férias de {}",
        ferias.nome_funcionario().unwrap_or(ferias.matricula.as_str())
    );

    let on_save = move |_| {
        let dto = match form.with_untracked(FeriasForm::into_dto) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let session = auth.session_untracked();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::update(&session, id, &dto).await;
            saving.set(false);
            match result {
                Ok(response) => {
                    notifier.success(response.message.unwrap_or_else(|| "Férias atualizadas".into()));
                    on_saved.run(());
                }
                Err(e) => {
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{titulo}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__row">
                        <div class="form__group">
                            <label for="data_inicio">"Início"</label>
                            <input
                                id="data_inicio"
                                type="date"
                                prop:value=move || form.with(|f| f.data_inicio.clone())
                                on:input=move |ev| form.update(|f| f.data_inicio = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="dias">"Dias"</label>
                            <input
                                id="dias"
                                type="number"
                                min="1"
                                max=MAX_DIAS.to_string()
                                prop:value=move || form.with(|f| f.dias.clone())
                                on:input=move |ev| form.update(|f| f.dias = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            prop:value=move || form.with(|f| f.status.clone())
                            on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                        >
                            {FeriasStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__hint">
                        {move || match form.with(FeriasForm::data_fim) {
                            Some(fim) => format!("Último dia de férias: {}", format_naive(fim)),
                            None => String::new(),
                        }}
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(()) disabled=busy>
                        "Cancelar"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                        {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
