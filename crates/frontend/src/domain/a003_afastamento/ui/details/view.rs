use contracts::domain::a001_funcionario::aggregate::Funcionario;
use contracts::domain::a003_afastamento::aggregate::Afastamento;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::{AfastamentoForm, MOTIVOS};
use crate::domain::a001_funcionario::api as funcionario_api;
use crate::domain::a003_afastamento::api;
use crate::layout::notifications::use_notifier;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::compare_locale;
use crate::system::auth::context::use_auth;

/// Cadastro e edição de afastamento. `afastamento = None` cria um novo.
#[component]
pub fn AfastamentoDetails(
    afastamento: Option<Afastamento>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let id = afastamento.as_ref().map(|a| a.id);
    let form = RwSignal::new(afastamento.as_ref().map(AfastamentoForm::from).unwrap_or_default());
    let funcionarios: RwSignal<Vec<Funcionario>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let busy = Signal::derive(move || saving.get());

    // funcionários ativos para o select
    {
        let session = auth.session_untracked();
        let current = afastamento.as_ref().and_then(|a| a.funcionario.clone());
        spawn_local(async move {
            match funcionario_api::fetch_ativos(&session).await {
                Ok(mut list) => {
                    // o funcionário do registro em edição pode estar inativo
                    if let Some(f) = current {
                        if !list.iter().any(|x| x.matricula == f.matricula) {
                            list.push(f);
                        }
                    }
                    list.sort_by(|a, b| compare_locale(&a.nome, &b.nome));
                    funcionarios.set(list);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    error.set(Some(format!("Falha ao carregar funcionários: {}", e)));
                }
            }
        });
    }

    let on_save = move |_| {
        let dto = match form.with_untracked(AfastamentoForm::into_dto) {
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
            let result = match id {
                Some(id) => api::update(&session, id, &dto).await,
                None => api::create(&session, &dto).await,
            };
            saving.set(false);
            match result {
                Ok(response) => {
                    notifier.success(response.message.unwrap_or_else(|| "Afastamento salvo".into()));
                    on_saved.run(());
                }
                Err(e) => {
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let title = if id.is_some() { "Editar afastamento" } else { "Novo afastamento" };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="matricula">"Funcionário"</label>
                        <select
                            id="matricula"
                            prop:value=move || form.with(|f| f.matricula.clone())
                            on:change=move |ev| form.update(|f| f.matricula = event_target_value(&ev))
                        >
                            <option value="">"Selecione..."</option>
                            {move || {
                                let selected = form.with(|f| f.matricula.clone());
                                funcionarios
                                    .get()
                                    .into_iter()
                                    .map(|f| {
                                        let is_selected = f.matricula == selected;
                                        view! {
                                            <option value=f.matricula.clone() selected=is_selected>
                                                {format!("{} - {}", f.matricula, f.nome)}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form__group">
                        <label for="motivo">"Motivo"</label>
                        <input
                            id="motivo"
                            type="text"
                            list="motivos-afastamento"
                            prop:value=move || form.with(|f| f.motivo.clone())
                            on:input=move |ev| form.update(|f| f.motivo = event_target_value(&ev))
                        />
                        <datalist id="motivos-afastamento">
                            {MOTIVOS.into_iter().map(|m| view! { <option value=m></option> }).collect_view()}
                        </datalist>
                    </div>

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
                            <label for="data_fim">"Fim"</label>
                            <input
                                id="data_fim"
                                type="date"
                                prop:value=move || form.with(|f| f.data_fim.clone())
                                on:input=move |ev| form.update(|f| f.data_fim = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.impacta_ferias)
                                on:change=move |ev| form.update(|f| f.impacta_ferias = event_target_checked(&ev))
                            />
                            " Impacta o direito a férias"
                        </label>
                    </div>

                    <div class="form__group">
                        <label for="observacao">"Observação"</label>
                        <textarea
                            id="observacao"
                            rows="3"
                            prop:value=move || form.with(|f| f.observacao.clone())
                            on:input=move |ev| form.update(|f| f.observacao = event_target_value(&ev))
                        ></textarea>
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
